//! catalog-server: HTTP backend for the resale catalog

use anyhow::Context;
use clap::Parser;
use resale_catalog::config::{CatalogConfig, Environment};
use resale_catalog::utils::logging::init_tracing;
use resale_catalog::{Config, server};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "catalog-server", version, about = "Resale product catalog service")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "CATALOG_CONFIG", default_value = "config/catalog.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // The subscriber is installed before the config is read so loading is
    // logged; the environment comes from the same variables the loader uses.
    init_tracing(environment_hint());

    match run(&cli.config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config_path: &Path) -> anyhow::Result<()> {
    let config = load_config(config_path).await?;
    info!(
        environment = %config.environment(),
        database = %config.storage().database.url,
        "Configuration loaded"
    );

    server::run_server(config)
        .await
        .context("catalog server terminated")
}

async fn load_config(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        return Config::from_file(path)
            .await
            .with_context(|| format!("failed to load {}", path.display()));
    }

    warn!(
        path = %path.display(),
        "Configuration file not found, using defaults and environment"
    );
    Config::from_env().context("invalid environment configuration")
}

fn environment_hint() -> Environment {
    std::env::var("APP_ENV")
        .or_else(|_| std::env::var("NODE_ENV"))
        .ok()
        .and_then(|value| Environment::from_str(&value).ok())
        .unwrap_or_else(|| CatalogConfig::default().environment)
}
