//! Somascope - anatomical orientation-aid 3D viewer
//!
//! Renders a static reference scene (axes, grid, section planes, a
//! stylized head/torso proxy, landmark labels) with one toggled
//! looping animation.

mod app;
mod config;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "somascope")]
#[command(about = "Anatomical orientation-aid 3D viewer")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "somascope.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Start with the animation playing
    #[arg(long)]
    autoplay: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Somascope v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config(&args.config)?;

    info!(
        title = %config.window.title,
        width = config.window.width,
        height = config.window.height,
        "Configuration loaded"
    );

    app::run(config, args.autoplay);

    Ok(())
}
