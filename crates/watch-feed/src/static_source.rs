//! Feed backed by an in-memory list of ticks.

use async_trait::async_trait;
use watch_core::error::FeedError;
use watch_core::traits::PriceFeed;
use watch_core::types::PriceTick;

/// Replays a fixed list of ticks, typically from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceFeed {
    ticks: Vec<PriceTick>,
}

impl StaticPriceFeed {
    /// Create a feed from a list of ticks.
    pub fn new(ticks: Vec<PriceTick>) -> Self {
        Self { ticks }
    }
}

#[async_trait]
impl PriceFeed for StaticPriceFeed {
    async fn ticks(&self) -> Result<Vec<PriceTick>, FeedError> {
        Ok(self.ticks.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_static_feed() {
        let feed = StaticPriceFeed::new(vec![
            PriceTick::new("PETR4", dec!(36.20)),
            PriceTick::new("PETR4", dec!(37.50)),
        ]);

        let ticks = feed.ticks().await.unwrap();
        assert_eq!(ticks.len(), 2);
        assert_eq!(feed.name(), "static");
    }
}
