//! Simulate command implementation.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use watch_config::AppConfig;
use watch_core::traits::{NotificationSink, PriceFeed, StockObserver};
use watch_core::types::{PriceTick, Stock};
use watch_feed::{CsvPriceFeed, StaticPriceFeed};
use watch_hub::{replay, Market};
use watch_monitor::ChangeLogger;
use watch_observers::{ConsoleSink, InvestorAlert, MemorySink, PushChannel, TradingBot};

use crate::cli::{load_app_config, SimulateArgs};

pub async fn run(args: SimulateArgs, config_path: &Path, sample: bool) -> Result<()> {
    let config = load_app_config(config_path, sample)?;
    if let Err(issues) = config.validate() {
        for issue in &issues {
            error!("{}", issue);
        }
        bail!("Configuration has {} problem(s)", issues.len());
    }

    let sink: Arc<dyn NotificationSink> = if args.quiet {
        Arc::new(MemorySink::new())
    } else {
        Arc::new(ConsoleSink)
    };

    let market = build_market(&config, sink)?;
    let ticks = load_ticks(&config, args.csv.as_deref()).await?;

    info!(
        stocks = market.len(),
        observers = config.observer_count(),
        ticks = ticks.len(),
        "Starting simulation"
    );

    let summary = replay(&market, &ticks);

    // Output results
    match args.output.as_str() {
        "json" => println!("{}", summary.to_json()?),
        _ => {
            println!();
            println!("{}", summary.summary());
        }
    }

    // Save if requested
    if let Some(save_path) = &args.save {
        let json = summary.to_json()?;
        std::fs::write(save_path, json)
            .with_context(|| format!("Failed to write {:?}", save_path))?;
        info!("Summary saved to {:?}", save_path);
    }

    Ok(())
}

/// Create one hub per configured stock and subscribe every configured observer to each.
fn build_market(config: &AppConfig, sink: Arc<dyn NotificationSink>) -> Result<Market> {
    let mut market = Market::new();
    for settings in &config.stocks {
        let stock = Stock::new(&settings.symbol, settings.initial_price, Utc::now())?;
        market.add_stock(stock)?;
    }

    let mut observers: Vec<Arc<dyn StockObserver>> = vec![Arc::new(ChangeLogger::new())];
    observers.extend(config.investors.iter().map(|c| {
        Arc::new(InvestorAlert::new(c.clone(), Arc::clone(&sink))) as Arc<dyn StockObserver>
    }));
    observers.extend(config.push_channels.iter().map(|c| {
        Arc::new(PushChannel::new(c.clone(), Arc::clone(&sink))) as Arc<dyn StockObserver>
    }));
    observers.extend(config.bots.iter().map(|c| {
        Arc::new(TradingBot::new(c.clone(), Arc::clone(&sink))) as Arc<dyn StockObserver>
    }));

    for observer in observers {
        market.subscribe_all(observer);
    }

    Ok(market)
}

/// Inline ticks first, then the CSV feed (command line wins over configuration).
async fn load_ticks(config: &AppConfig, csv: Option<&Path>) -> Result<Vec<PriceTick>> {
    let mut ticks = StaticPriceFeed::new(config.feed.ticks.clone()).ticks().await?;

    let csv_path = csv
        .map(Path::to_path_buf)
        .or_else(|| config.feed.csv.as_ref().map(Into::into));

    if let Some(path) = csv_path {
        let feed = CsvPriceFeed::new(&path)
            .with_context(|| format!("CSV feed {:?} not found", path))?;
        let loaded = feed
            .ticks()
            .await
            .with_context(|| format!("Failed to read CSV feed {:?}", path))?;
        info!(feed = feed.name(), ticks = loaded.len(), "Loaded ticks");
        ticks.extend(loaded);
    }

    if ticks.is_empty() {
        bail!("No price ticks configured. Add [[feed.ticks]] or pass --csv <file>");
    }

    Ok(ticks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use watch_core::types::NotificationKind;

    #[test]
    fn test_build_market_from_sample() {
        let config = AppConfig::default();
        let sink = Arc::new(MemorySink::new());
        let market = build_market(&config, sink.clone()).unwrap();

        let hub = market.hub("PETR4").unwrap();
        let summary = replay(&market, &config.feed.ticks);

        // change logger + 2 investors + push + bot on each of 3 changes
        assert_eq!(summary.broadcasts, 3);
        assert_eq!(summary.deliveries, 15);
        assert_eq!(hub.stock().price(), rust_decimal_macros::dec!(35.00));

        // -6.67% on the last tick: both investors alert, the bot buys
        let trades = sink.of_kind(NotificationKind::Trade);
        assert_eq!(trades.len(), 2);
        assert!(trades[0].message.starts_with("SELLING"));
        assert!(trades[1].message.starts_with("BUYING"));
    }

    #[tokio::test]
    async fn test_load_ticks_requires_some_input() {
        let mut config = AppConfig::default();
        config.feed.ticks.clear();

        assert!(load_ticks(&config, None).await.is_err());
    }
}
