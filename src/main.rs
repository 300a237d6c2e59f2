#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;
mod viewport;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use encore_core::{config, logging, Catalog, DensityMode, Environment};

use crate::context::{default_data_dir, init_settings, Settings};

/// Encore - campaign dashboard for musicians
#[derive(Parser, Debug)]
#[command(name = "encore-desktop")]
#[command(about = "Encore - promote releases and track campaigns")]
struct Args {
    /// Path to settings.toml (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data directory for the catalog and logs
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Override the configured density (comfortable or compact)
    #[arg(long)]
    density: Option<DensityMode>,

    /// Run as development: console logging only
    #[arg(long)]
    dev: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(config::config_path);
    let mut config = config::load_from_path(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    if args.dev {
        config.general.environment = Environment::Development;
    }
    if let Some(density) = args.density {
        config.display.density = density;
    }

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let log_path = logging::init(config.general.environment, &data_dir)
        .context("failed to initialize logging")?;

    tracing::info!(
        config = %config_path.display(),
        data_dir = %data_dir.display(),
        environment = ?config.general.environment,
        "Starting Encore"
    );
    if let Some(path) = log_path {
        tracing::info!(path = %path.display(), "Writing JSONL log");
    }

    let catalog = Catalog::load(&data_dir).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load catalog, starting empty");
        Catalog::default()
    });

    init_settings(Settings { config, catalog });

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Encore")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
