//! Price feed trait definitions.

use crate::error::FeedError;
use crate::types::PriceTick;
use async_trait::async_trait;

/// Source of price ticks to replay through the hubs.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Load all ticks, oldest first.
    async fn ticks(&self) -> Result<Vec<PriceTick>, FeedError>;

    /// Get the feed name.
    fn name(&self) -> &str;
}
