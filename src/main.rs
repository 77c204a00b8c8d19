use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fake_identity::config::{Args, GeneratorConfig};
use fake_identity::error::Result;
use fake_identity::generator::IdentityGenerator;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("fake_identity error: {}", e);
        let code = if e.is_client_error() { 2 } else { 1 };
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let config = GeneratorConfig::from_args(Args::parse())?;
    tracing::debug!(?config, "starting");

    let mut generator = match config.seed {
        Some(seed) => IdentityGenerator::seeded(seed),
        None => IdentityGenerator::from_entropy(),
    };

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if config.pretty {
        let identities = generator.batch(&config.request, config.count, config.unique_emails)?;
        serde_json::to_writer_pretty(&mut writer, &identities)?;
        writeln!(writer)?;
    } else {
        generator.each(&config.request, config.count, config.unique_emails, |identity| {
            serde_json::to_writer(&mut writer, &identity)?;
            writeln!(writer)?;
            Ok(())
        })?;
    }
    writer.flush()?;

    Ok(())
}
