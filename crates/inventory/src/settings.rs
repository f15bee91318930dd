//! Alert preferences.
//!
//! These are explicit values handed to whoever builds alert views; nothing
//! here is process-global.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::expiry::EXPIRING_WINDOW_DAYS;
use crate::stock::DEFAULT_LOW_STOCK_THRESHOLD;

pub const ENV_LOW_STOCK_ALERTS: &str = "STOCKWATCH_LOW_STOCK_ALERTS";
pub const ENV_EXPIRY_ALERTS: &str = "STOCKWATCH_EXPIRY_ALERTS";
pub const ENV_DEFAULT_THRESHOLD: &str = "STOCKWATCH_DEFAULT_THRESHOLD";
pub const ENV_EXPIRING_WINDOW_DAYS: &str = "STOCKWATCH_EXPIRING_WINDOW_DAYS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{key}: expected true/false, found {value:?}")]
    InvalidBool { key: &'static str, value: String },

    #[error("{key}: expected a non-negative integer, found {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertSettings {
    pub low_stock_alerts: bool,
    pub expiry_alerts: bool,
    /// Applied to products without their own threshold.
    pub default_low_stock_threshold: u32,
    pub expiring_window_days: u32,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            low_stock_alerts: true,
            expiry_alerts: true,
            default_low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            expiring_window_days: EXPIRING_WINDOW_DAYS,
        }
    }
}

impl AlertSettings {
    /// Read overrides from `STOCKWATCH_*` environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(v) = lookup(ENV_LOW_STOCK_ALERTS) {
            settings.low_stock_alerts = parse_bool(ENV_LOW_STOCK_ALERTS, &v)?;
        }
        if let Some(v) = lookup(ENV_EXPIRY_ALERTS) {
            settings.expiry_alerts = parse_bool(ENV_EXPIRY_ALERTS, &v)?;
        }
        if let Some(v) = lookup(ENV_DEFAULT_THRESHOLD) {
            settings.default_low_stock_threshold = parse_u32(ENV_DEFAULT_THRESHOLD, &v)?;
        }
        if let Some(v) = lookup(ENV_EXPIRING_WINDOW_DAYS) {
            settings.expiring_window_days = parse_u32(ENV_EXPIRING_WINDOW_DAYS, &v)?;
        }

        Ok(settings)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, SettingsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => {
            tracing::warn!(key, value, "rejected alert setting");
            Err(SettingsError::InvalidBool {
                key,
                value: value.to_string(),
            })
        }
    }
}

fn parse_u32(key: &'static str, value: &str) -> Result<u32, SettingsError> {
    value.trim().parse::<u32>().map_err(|_| {
        tracing::warn!(key, value, "rejected alert setting");
        SettingsError::InvalidNumber {
            key,
            value: value.to_string(),
        }
    })
}
