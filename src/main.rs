//! Joke Dispenser - a terminal joke viewer
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use jokes_app::config::{default_config_path, init_config_file, resolve_settings};
use jokes_core::logging;

/// Joke Dispenser - fetch and show jokes from an HTTP endpoint
#[derive(Parser, Debug)]
#[command(name = "jokes")]
#[command(about = "A terminal joke viewer", long_about = None)]
struct Args {
    /// Joke endpoint URL (overrides JOKES_ENDPOINT and the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // The TUI owns stdout, so logs only ever go to the file
    if let Err(e) = logging::init() {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    if args.init_config {
        let path = args
            .config
            .or_else(default_config_path)
            .ok_or_else(|| eyre!("No config directory available on this platform"))?;
        if init_config_file(&path)? {
            eprintln!("Created {}", path.display());
        } else {
            eprintln!("Config already exists: {}", path.display());
        }
        return Ok(());
    }

    let settings = resolve_settings(args.config.as_deref(), args.endpoint.as_deref())?;
    let engine = joke_dispenser::http_engine(settings)?;

    if args.headless {
        joke_dispenser::run_headless(engine).await?;
    } else {
        joke_dispenser::run_tui(engine).await?;
    }

    Ok(())
}
