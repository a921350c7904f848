//! Server configuration parsed from environment variables.

use std::path::PathBuf;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected 1-65535")]
    InvalidPort { value: String },
    #[error("BIND_ADDR must not be empty")]
    EmptyBindAddr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub port: u16,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `ASSETS_DIR`: static files served as the fallback, default `public/`
    ///   at the workspace root
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("ASSETS_DIR").ok().as_deref(),
        )
    }

    fn from_vars(port: Option<&str>, bind_addr: Option<&str>, assets_dir: Option<&str>) -> Result<Self, ConfigError> {
        let port = parse_port(port)?;
        let bind_addr = match bind_addr.map(str::trim) {
            None => DEFAULT_BIND_ADDR.to_owned(),
            Some("") => return Err(ConfigError::EmptyBindAddr),
            Some(addr) => addr.to_owned(),
        };
        let assets_dir = assets_dir
            .map(PathBuf::from)
            .unwrap_or_else(default_assets_dir);
        Ok(Self { bind_addr, port, assets_dir })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PORT);
    };
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}
