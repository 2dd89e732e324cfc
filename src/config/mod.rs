mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub events_db: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub cache_max_age_sec: usize,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub events_db: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub cache_max_age_sec: usize,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let events_db = file
            .events_db
            .map(PathBuf::from)
            .or_else(|| cli.events_db.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("events_db must be specified as an argument or in the config file")
            })?;

        if let Some(parent) = events_db.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                bail!("Events database directory does not exist: {:?}", parent);
            }
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let cache_max_age_sec = file.cache_max_age_sec.unwrap_or(cli.cache_max_age_sec);

        Ok(AppConfig {
            events_db,
            port,
            logging_level,
            cache_max_age_sec,
        })
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
