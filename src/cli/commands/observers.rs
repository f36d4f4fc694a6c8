//! List observers command.

use anyhow::Result;
use std::sync::Arc;
use watch_observers::{MemorySink, ObserverRegistry};

pub async fn run() -> Result<()> {
    let registry = ObserverRegistry::new();

    println!("Available Observers");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for info in registry.list() {
        // Building one proves the default configuration is usable.
        let observer = registry.create_default(&info.kind, Arc::new(MemorySink::new()))?;

        println!("  {} ({})", info.name, info.kind);
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", info.description);
        println!("  Default: {} {}", observer.name(), info.default_config);
        println!();
    }

    println!("Configure observers under [[investors]], [[push_channels]] and [[bots]].");

    Ok(())
}
