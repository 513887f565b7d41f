//! Environment configuration

use std::{env, fmt::Display, str::FromStr};

use anyhow::{bail, Context};
use tracing::info;

/// Server settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// PostgreSQL connection string; the in-memory store is used when unset.
    pub database_url: Option<String>,
    pub daily_reset_hour: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let daily_reset_hour: u32 = load(&lookup, "DAILY_RESET_HOUR", "0")?;
        if daily_reset_hour > 23 {
            bail!("DAILY_RESET_HOUR must be between 0 and 23, got {daily_reset_hour}");
        }

        Ok(Self {
            host: load(&lookup, "HOST", "0.0.0.0")?,
            port: load(&lookup, "PORT", "8080")?,
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            daily_reset_hour,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn load<F, T>(lookup: &F, key: &str, default: &str) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value: {raw}"))
}
