use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_worker_threads() -> usize { 4 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(default_worker_threads()) }
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("unknown log format `{other}`, expected `compact` or `json`")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// `CONFIG_PATH`, or `config.toml` when unset.
pub fn config_path() -> PathBuf {
    std::env::var_os("CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

/// Load the file at [`config_path`].
pub fn load_default() -> Result<AppConfig> {
    load_from_file(config_path())
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config file {}", path.display()))
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file when it exists, environment variables otherwise.
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_and_validate() -> Result<Self> {
        Self::load_and_validate_at(config_path())
    }

    pub fn load_and_validate_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut cfg = if path.exists() { load_from_file(path)? } else { Self::from_env()? };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS` and `LOG_FORMAT`.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| default_host());
        let port = match std::env::var("SERVER_PORT") {
            Ok(p) => p.trim().parse::<u16>().map_err(|e| anyhow!("SERVER_PORT `{p}`: {e}"))?,
            Err(_) => default_port(),
        };
        let worker_threads = match std::env::var("TOKIO_WORKER_THREADS") {
            Ok(w) => Some(
                w.trim()
                    .parse::<usize>()
                    .map_err(|e| anyhow!("TOKIO_WORKER_THREADS `{w}`: {e}"))?,
            ),
            Err(_) => None,
        };
        let format = match std::env::var("LOG_FORMAT") {
            Ok(f) => f.parse::<LogFormat>().context("LOG_FORMAT")?,
            Err(_) => LogFormat::default(),
        };
        Ok(Self {
            server: ServerConfig { host, port, worker_threads },
            logging: LoggingConfig { format },
        })
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(default_worker_threads()),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
