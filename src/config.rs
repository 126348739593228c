// src/config.rs
use crate::errors::ServerError;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL, without the `/api/volunteers/` path.
    pub api_base: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Optional cap on how long the fragment route waits for a mounted view
    /// to settle. `None` waits for the request however long it takes.
    pub render_wait: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            render_wait: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut cfg = Self::default();

        if let Some(base) = get("API_BASE") {
            cfg.api_base = base;
        }
        Url::parse(&cfg.api_base)
            .map_err(|e| ServerError::Config(format!("API_BASE {:?}: {e}", cfg.api_base)))?;

        if let Some(addr) = get("BIND_ADDR") {
            cfg.bind_addr = parse_value("BIND_ADDR", &addr)?;
        }
        if let Some(workers) = get("MAX_WORKERS") {
            cfg.max_workers = parse_value("MAX_WORKERS", &workers)?;
            if cfg.max_workers == 0 {
                return Err(ServerError::Config("MAX_WORKERS must be at least 1".into()));
            }
        }
        if let Some(ms) = get("RENDER_WAIT_MS") {
            cfg.render_wait = Some(Duration::from_millis(parse_value("RENDER_WAIT_MS", &ms)?));
        }

        Ok(cfg)
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ServerError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| ServerError::Config(format!("{key} {raw:?}: {e}")))
}
