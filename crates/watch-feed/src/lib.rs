//! Price tick sources.

mod csv_source;
mod static_source;

pub use csv_source::CsvPriceFeed;
pub use static_source::StaticPriceFeed;

use std::path::Path;
use watch_core::error::FeedError;
use watch_core::traits::PriceFeed;
use watch_core::types::PriceTick;

/// Load ticks from a CSV file.
pub async fn load_csv(path: impl AsRef<Path>) -> Result<Vec<PriceTick>, FeedError> {
    let feed = CsvPriceFeed::new(path)?;
    feed.ticks().await
}
