use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

/// Used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "feedback_server=debug,feedback_api=debug,tower_http=debug";

pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    /// Directory with the built UI. Served for every non-API path when set.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = var("FEEDBACK_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match var("FEEDBACK_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("FEEDBACK_PORT is not a valid port: {}", raw))?,
            None => 5000,
        };
        let db_path = var("FEEDBACK_DB_PATH")
            .unwrap_or_else(|| "feedback.db".into())
            .into();
        let static_dir = var("FEEDBACK_STATIC_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        if static_dir.is_none() {
            info!("FEEDBACK_STATIC_DIR not set, serving API only");
        }

        Ok(Self {
            host,
            port,
            db_path,
            static_dir,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
