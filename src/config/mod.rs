use crate::error::{DemoError, Result};
use dashmap::DashMap;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Configuration service
///
/// A shared key/value view over the process environment. Values can be
/// overridden with [`ConfigService::set`], which is how tests configure the
/// application without touching the real environment.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// An empty service, every lookup falls back to its default
    pub fn new() -> Self {
        Self::default()
    }

    /// A service seeded from the process environment
    pub fn from_env() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    /// Parse `key`, falling back to `default` when it is unset
    pub fn parse<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<T>().map_err(|e| DemoError::Config {
                key: key.to_string(),
                message: format!("{raw:?}: {e}"),
            }),
        }
    }
}

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SHEETS_WRITE_DELAY: Duration = Duration::from_secs(5);

/// Settings of the sheet writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetsConfig {
    /// Directory sheet files are created in
    pub dir: PathBuf,
    /// Simulated write delay
    pub write_delay: Duration,
    /// Whether the delay is actually awaited before writing
    pub await_delay: bool,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            write_delay: DEFAULT_SHEETS_WRITE_DELAY,
            await_delay: false,
        }
    }
}

/// Typed server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Runtime worker threads, 0 means one per CPU
    pub workers: usize,
    pub sheets: SheetsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: 1,
            sheets: SheetsConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_config(config: &ConfigService) -> Result<Self> {
        let defaults = Self::default();
        let delay_ms = config.parse(
            "SHEETS_WRITE_DELAY_MS",
            defaults.sheets.write_delay.as_millis() as u64,
        )?;

        Ok(Self {
            host: config.get_or("HOST", &defaults.host),
            port: config.parse("PORT", defaults.port)?,
            workers: config.parse("WORKERS", defaults.workers)?,
            sheets: SheetsConfig {
                dir: PathBuf::from(config.get_or("SHEETS_DIR", ".")),
                write_delay: Duration::from_millis(delay_ms),
                await_delay: config.parse("SHEETS_AWAIT_DELAY", defaults.sheets.await_delay)?,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Effective worker thread count
    pub fn worker_threads(&self) -> usize {
        match self.workers {
            0 => num_cpus::get(),
            n => n,
        }
    }
}
