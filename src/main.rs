use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod calendar;
mod config;
mod event_store;
mod server;

use config::{AppConfig, CliConfig, FileConfig};
use event_store::SqliteEventStore;
use server::{run_server, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite content database holding event records.
    #[clap(value_parser = parse_path)]
    pub events_db: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// max-age, in seconds, for the Cache-Control header on calendar
    /// responses.
    #[clap(long, default_value_t = server::config::DEFAULT_CACHE_MAX_AGE_SEC)]
    pub cache_max_age_sec: usize,

    /// Path to an optional TOML config file. Values set there override CLI
    /// arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };

    let cli_config = CliConfig {
        events_db: cli_args.events_db,
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        cache_max_age_sec: cli_args.cache_max_age_sec,
    };
    let app_config = AppConfig::resolve(&cli_config, file_config)?;

    info!(
        "Opening SQLite content database at {:?}...",
        app_config.events_db
    );
    let event_store = Arc::new(SqliteEventStore::new(&app_config.events_db)?);

    let server_config = ServerConfig {
        requests_logging_level: app_config.logging_level,
        port: app_config.port,
        cache_max_age_sec: app_config.cache_max_age_sec,
    };

    info!("Ready to serve at port {}!", server_config.port);
    run_server(event_store, server_config).await
}
