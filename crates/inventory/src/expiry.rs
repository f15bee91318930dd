//! Shelf-life classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockwatch_core::{ValueObject, whole_days_between};

/// Products expiring within this many days (inclusive) are `Expiring`.
pub const EXPIRING_WINDOW_DAYS: u32 = 7;

/// Alert tier for a product's remaining shelf life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryTier {
    Expired,
    Expiring,
    Safe,
}

impl ValueObject for ExpiryTier {}

impl ExpiryTier {
    pub fn needs_attention(self) -> bool {
        !matches!(self, ExpiryTier::Safe)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExpiryTier::Expired => "expired",
            ExpiryTier::Expiring => "expiring",
            ExpiryTier::Safe => "safe",
        }
    }
}

impl core::fmt::Display for ExpiryTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an expiry date relative to `today`.
pub fn classify_expiry(expiry_date: NaiveDate, today: NaiveDate) -> ExpiryTier {
    classify_expiry_within(expiry_date, today, EXPIRING_WINDOW_DAYS)
}

/// Same as [`classify_expiry`] with a caller-chosen expiring window.
pub fn classify_expiry_within(
    expiry_date: NaiveDate,
    today: NaiveDate,
    window_days: u32,
) -> ExpiryTier {
    tier_for_days(whole_days_between(expiry_date, today), window_days)
}

pub(crate) fn tier_for_days(days_until_expiry: i64, window_days: u32) -> ExpiryTier {
    if days_until_expiry < 0 {
        ExpiryTier::Expired
    } else if days_until_expiry <= i64::from(window_days) {
        ExpiryTier::Expiring
    } else {
        ExpiryTier::Safe
    }
}
