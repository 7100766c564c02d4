//! Service configuration.
//!
//! Values come from environment variables, optionally loaded from a `.env`
//! file first. Every setting has a default so the service starts with no
//! configuration at all.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::application::PixMerchant;

pub const DEFAULT_DB_PATH: &str = "/var/lib/signdesk/signdesk.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_FONT_DIR: &str = "fonts";
pub const DEFAULT_VALIDATION_URL: &str = "http://localhost:5173";
const DEFAULT_PIX_KEY: &str = "00000000000";
const DEFAULT_PIX_MERCHANT: &str = "VerySing Digital";
const DEFAULT_PIX_CITY: &str = "Sao Paulo";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub bind_addr: SocketAddr,
    pub font_dir: PathBuf,
    /// Public origin of the validation page, without trailing slash
    pub validation_url: String,
    pub pix: PixMerchant,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind = get("SIGNDESK_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind.clone(),
                source,
            })?;

        let validation_url = get("SIGNDESK_VALIDATION_URL", DEFAULT_VALIDATION_URL)
            .trim_end_matches('/')
            .to_string();
        if validation_url.is_empty() {
            return Err(ConfigError::Empty("SIGNDESK_VALIDATION_URL"));
        }

        Ok(Self {
            db_path: get("SIGNDESK_DB_PATH", DEFAULT_DB_PATH),
            bind_addr,
            font_dir: PathBuf::from(get("SIGNDESK_FONT_DIR", DEFAULT_FONT_DIR)),
            validation_url,
            pix: PixMerchant {
                key: get("SIGNDESK_PIX_KEY", DEFAULT_PIX_KEY),
                name: get("SIGNDESK_PIX_MERCHANT", DEFAULT_PIX_MERCHANT),
                city: get("SIGNDESK_PIX_CITY", DEFAULT_PIX_CITY),
            },
        })
    }
}
