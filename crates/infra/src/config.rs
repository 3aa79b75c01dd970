//! Configuration loading and representation.
//!
//! Values come from `ARBOR_*` environment variables; unset variables fall back
//! to defaults, malformed ones are an error.

use std::net::SocketAddr;
use std::str::FromStr;

use arbor_observability::LogFormat;

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Application-wide base settings read by business services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppBaseConfig {
    /// Decimals printed for unit prices.
    pub nb_decimal_digit_for_unit_price: u32,
}

impl Default for AppBaseConfig {
    fn default() -> Self {
        Self {
            nb_decimal_digit_for_unit_price: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    pub password_length: usize,
    pub bcrypt_cost: u32,
    pub app_base: AppBaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_format: LogFormat::Json,
            password_length: 12,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            app_base: AppBaseConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bcrypt_cost = parse(&lookup, "ARBOR_BCRYPT_COST", defaults.bcrypt_cost)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "ARBOR_BCRYPT_COST",
                value: bcrypt_cost.to_string(),
                reason: "must be between 4 and 31".to_string(),
            });
        }

        Ok(Self {
            bind_addr: parse(&lookup, "ARBOR_BIND_ADDR", defaults.bind_addr)?,
            log_format: parse(&lookup, "ARBOR_LOG_FORMAT", defaults.log_format)?,
            password_length: parse(&lookup, "ARBOR_PASSWORD_LENGTH", defaults.password_length)?,
            bcrypt_cost,
            app_base: AppBaseConfig {
                nb_decimal_digit_for_unit_price: parse(
                    &lookup,
                    "ARBOR_UNIT_PRICE_DECIMALS",
                    defaults.app_base.nb_decimal_digit_for_unit_price,
                )?,
            },
        })
    }
}

fn parse<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
