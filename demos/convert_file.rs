//! Convert the rules of a config file in place.
//!
//! Usage: `cargo run --example convert_file -- <path> [block|inline]`
//!
//! The original file is copied to `<path>.bak` before it is overwritten.
//! Set `RUST_LOG=hyprrule=debug` to see which rules were merged.

use hyprrule::{ConvertOptions, Converter, Dialect};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: convert_file <path> [block|inline]");
        std::process::exit(2);
    };
    let dialect = match args.next() {
        Some(name) => name.parse::<Dialect>()?,
        None => Dialect::default(),
    };

    let source = std::fs::read_to_string(&path)?;
    let converter = Converter::with_options(ConvertOptions::for_dialect(dialect));
    let output = converter.convert(&source);

    let mut backup = path.clone().into_os_string();
    backup.push(".bak");
    std::fs::copy(&path, &backup)?;
    tracing::info!("Backup written to {}", PathBuf::from(&backup).display());

    std::fs::write(&path, output)?;
    tracing::info!("Converted {} to {} rules", path.display(), dialect);

    Ok(())
}
