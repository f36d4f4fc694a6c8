//! CSV price feed.

use async_trait::async_trait;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;
use watch_core::error::{FeedError, PriceError};
use watch_core::traits::PriceFeed;
use watch_core::types::{validate_price, PriceTick};

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Symbol", alias = "ticker", alias = "Ticker")]
    symbol: String,
    #[serde(alias = "Price", alias = "close", alias = "Close")]
    price: String,
}

/// Parse a price column exactly, without going through `f64`.
fn parse_price(raw: &str) -> Result<Decimal, FeedError> {
    // Rust's float parser accepts nan/inf/infinity in any case.
    if let Ok(value) = raw.parse::<f64>() {
        if !value.is_finite() {
            return Err(PriceError::NonFinite(value).into());
        }
    }

    let price = Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|e| FeedError::ParseError(format!("invalid price {:?}: {}", raw, e)))?;
    Ok(validate_price(price)?)
}

/// Replays `symbol,price` rows from a CSV file, in file order.
pub struct CsvPriceFeed {
    path: PathBuf,
}

impl CsvPriceFeed {
    /// Create a new CSV feed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FeedError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Parse ticks from any reader with a header row.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<PriceTick>, FeedError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut ticks = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| FeedError::ParseError(e.to_string()))?;
            let price = parse_price(&record.price)?;
            ticks.push(PriceTick::new(record.symbol, price));
        }

        Ok(ticks)
    }
}

#[async_trait]
impl PriceFeed for CsvPriceFeed {
    async fn ticks(&self) -> Result<Vec<PriceTick>, FeedError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| FeedError::ParseError(e.to_string()))?;
        let ticks = Self::parse(bytes.as_slice())?;
        debug!(path = %self.path.display(), ticks = ticks.len(), "Loaded CSV feed");
        Ok(ticks)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_ticks() {
        let data = "symbol,price\nPETR4,36.20\nPETR4, 37.5\nVALE3,61\n";
        let ticks = CsvPriceFeed::parse(data.as_bytes()).unwrap();

        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[0], PriceTick::new("PETR4", dec!(36.2)));
        assert_eq!(ticks[1].price, dec!(37.5));
        assert_eq!(ticks[2].symbol, "VALE3");
    }

    #[test]
    fn test_parse_header_aliases() {
        let data = "Ticker,Close\nITUB4,30.10\n";
        let ticks = CsvPriceFeed::parse(data.as_bytes()).unwrap();

        assert_eq!(ticks, vec![PriceTick::new("ITUB4", dec!(30.1))]);
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        let data = "symbol,price\nPETR4,NaN\n";
        let result = CsvPriceFeed::parse(data.as_bytes());

        assert!(matches!(
            result,
            Err(FeedError::InvalidPrice(PriceError::NonFinite(_)))
        ));
    }

    #[test]
    fn test_parse_keeps_full_precision() {
        let data = "symbol,price\nPETR4,35.50000000000000001\n";
        let ticks = CsvPriceFeed::parse(data.as_bytes()).unwrap();

        assert_eq!(ticks[0].price, dec!(35.50000000000000001));
        assert_ne!(ticks[0].price, dec!(35.50));
    }

    #[test]
    fn test_parse_scientific_notation() {
        let data = "symbol,price\nPETR4,3.62e1\n";
        let ticks = CsvPriceFeed::parse(data.as_bytes()).unwrap();

        assert_eq!(ticks[0].price, dec!(36.2));
    }

    #[test]
    fn test_parse_rejects_infinities_and_negatives() {
        for token in ["inf", "-Inf", "INFINITY", "nan"] {
            let data = format!("symbol,price\nPETR4,{}\n", token);
            assert!(
                matches!(
                    CsvPriceFeed::parse(data.as_bytes()),
                    Err(FeedError::InvalidPrice(PriceError::NonFinite(_)))
                ),
                "{} should be rejected as non-finite",
                token
            );
        }

        let data = "symbol,price\nPETR4,-1.5\n";
        assert!(matches!(
            CsvPriceFeed::parse(data.as_bytes()),
            Err(FeedError::InvalidPrice(PriceError::Negative(_)))
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let data = "symbol,price\nPETR4,abc\n";
        assert!(matches!(
            CsvPriceFeed::parse(data.as_bytes()),
            Err(FeedError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CsvPriceFeed::new("/definitely/not/here.csv"),
            Err(FeedError::NoDataAvailable)
        ));
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("stock-watch-feed-{}.csv", std::process::id()));
        std::fs::write(&path, "symbol,price\nPETR4,36.20\n").unwrap();

        let ticks = crate::load_csv(&path).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(ticks, vec![PriceTick::new("PETR4", dec!(36.20))]);
    }
}
