use hyprrule::{Dialect, convert};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    config_path.push("demos/legacy.conf");

    let source = std::fs::read_to_string(&config_path)?;
    println!("Converting: {}\n", config_path.display());

    let block = convert(&source, Dialect::Block);
    println!("── block rules ──────────────────────────────────────────────");
    println!("{}", block);

    // Block output reads back in, so it can go the other way too
    let inline = convert(&block, Dialect::Inline);
    println!("── inline rules ─────────────────────────────────────────────");
    println!("{}", inline);

    Ok(())
}
