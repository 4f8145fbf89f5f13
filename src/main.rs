use anyhow::Context;
use log::info;
use phenopacket_entry::{Console, EntryConfig};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = EntryConfig::from_env().context("Failed to load configuration")?;

    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();

    info!(
        "Starting entry session (exports go to {})",
        config.export_dir.display()
    );

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), &config);
    console.run().context("Entry session failed")?;

    Ok(())
}
