#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dailycomfort_core::Config;
use dioxus::desktop::{Config as WindowConfig, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Global configuration, resolved once at startup
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the resolved configuration
pub fn get_config() -> Config {
    CONFIG.get().cloned().unwrap_or_default()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dailycomfort")
}

/// Daily Comfort - a little message for every day
#[derive(Parser, Debug)]
#[command(name = "dailycomfort-desktop")]
#[command(about = "Daily Comfort - a little message for every day")]
struct Args {
    /// Data directory for storage
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Message catalog JSON (default: data/messages.json)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Inactivity window before automatic logout, in seconds
    #[arg(long)]
    session_timeout_secs: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let mut config = Config::load_or_default(&data_dir)?;
    if let Some(catalog) = args.catalog {
        config.catalog_path = catalog;
    }
    if let Some(secs) = args.session_timeout_secs {
        config.session_timeout_ms = secs * 1000;
    }

    tracing::info!("Starting Daily Comfort with data dir: {:?}", data_dir);

    let _ = DATA_DIR.set(data_dir);
    let _ = CONFIG.set(config);

    let window = WindowConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Daily Comfort")
            .with_inner_size(dioxus::desktop::LogicalSize::new(480.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
