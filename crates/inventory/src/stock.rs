//! Stock-level classification.

use serde::{Deserialize, Serialize};

use stockwatch_core::ValueObject;

/// Threshold used when a product has no `low_stock_threshold` of its own.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// At or below this quantity a product is always `Critical`, whatever its threshold.
pub const CRITICAL_QUANTITY: u32 = 3;

/// Quantity below which the inventory listing shows a product as "low".
pub const LISTING_LOW_QUANTITY: u32 = 10;

/// Alert tier for a product's on-hand quantity.
///
/// Declaration order is alert priority: `Critical` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockTier {
    Critical,
    Low,
    Warning,
    Normal,
}

impl ValueObject for StockTier {}

impl StockTier {
    /// Alert rank (`Critical = 0 < Low = 1 < Warning = 2`); `None` for `Normal`.
    pub fn alert_rank(self) -> Option<u8> {
        match self {
            StockTier::Critical => Some(0),
            StockTier::Low => Some(1),
            StockTier::Warning => Some(2),
            StockTier::Normal => None,
        }
    }

    pub fn needs_attention(self) -> bool {
        self.alert_rank().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockTier::Critical => "critical",
            StockTier::Low => "low",
            StockTier::Warning => "warning",
            StockTier::Normal => "normal",
        }
    }
}

impl core::fmt::Display for StockTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a quantity against a low-stock threshold.
///
/// Bands overlap; the first matching rule wins:
/// `<= 3` critical, `<= threshold` low, `<= threshold * 2` warning, else normal.
pub fn classify_stock(quantity: u32, threshold: u32) -> StockTier {
    let quantity = u64::from(quantity);
    let threshold = u64::from(threshold);

    if quantity <= u64::from(CRITICAL_QUANTITY) {
        StockTier::Critical
    } else if quantity <= threshold {
        StockTier::Low
    } else if quantity <= threshold * 2 {
        StockTier::Warning
    } else {
        StockTier::Normal
    }
}

/// Classify using the product's own threshold, or [`DEFAULT_LOW_STOCK_THRESHOLD`].
pub fn classify_stock_or_default(quantity: u32, threshold: Option<u32>) -> StockTier {
    classify_stock(quantity, threshold.unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD))
}

/// Availability badge shown in the inventory listing.
///
/// Independent of [`StockTier`]: it ignores per-product thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockAvailability {
    Out,
    Low,
    In,
}

impl ValueObject for StockAvailability {}

impl StockAvailability {
    pub fn of(quantity: u32) -> Self {
        if quantity == 0 {
            StockAvailability::Out
        } else if quantity < LISTING_LOW_QUANTITY {
            StockAvailability::Low
        } else {
            StockAvailability::In
        }
    }
}

impl core::str::FromStr for StockAvailability {
    type Err = stockwatch_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "out" => Ok(StockAvailability::Out),
            "low" => Ok(StockAvailability::Low),
            "in" => Ok(StockAvailability::In),
            other => Err(stockwatch_core::DomainError::validation(format!(
                "unknown stock availability: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_always_critical() {
        assert_eq!(classify_stock(0, 0), StockTier::Critical);
        assert_eq!(classify_stock(0, 100), StockTier::Critical);
    }

    #[test]
    fn critical_wins_over_low() {
        assert_eq!(classify_stock(3, 10), StockTier::Critical);
        assert_eq!(classify_stock(4, 10), StockTier::Low);
    }

    #[test]
    fn bands_with_default_threshold() {
        assert_eq!(classify_stock_or_default(10, None), StockTier::Low);
        assert_eq!(classify_stock_or_default(11, None), StockTier::Warning);
        assert_eq!(classify_stock_or_default(20, None), StockTier::Warning);
        assert_eq!(classify_stock_or_default(21, None), StockTier::Normal);
    }

    #[test]
    fn zero_threshold_only_leaves_critical_and_normal() {
        assert_eq!(classify_stock(3, 0), StockTier::Critical);
        assert_eq!(classify_stock(4, 0), StockTier::Normal);
    }

    #[test]
    fn small_threshold_makes_warning_partly_unreachable() {
        // threshold 2: low (<= 2) and most of warning (<= 4) sit under the critical band.
        assert_eq!(classify_stock(2, 2), StockTier::Critical);
        assert_eq!(classify_stock(4, 2), StockTier::Warning);
        assert_eq!(classify_stock(5, 2), StockTier::Normal);
    }

    #[test]
    fn tiny_thresholds_never_reach_warning_at_double() {
        assert_eq!(classify_stock(0, 0), StockTier::Critical);
        assert_eq!(classify_stock(2, 1), StockTier::Critical);
        assert_eq!(classify_stock(3, 1), StockTier::Critical);
        assert_eq!(classify_stock(4, 1), StockTier::Normal);
    }

    #[test]
    fn large_threshold_does_not_overflow() {
        assert_eq!(classify_stock(u32::MAX, u32::MAX), StockTier::Low);
        assert_eq!(classify_stock(u32::MAX, u32::MAX / 2 + 1), StockTier::Warning);
    }

    #[test]
    fn alert_rank_orders_tiers() {
        assert_eq!(StockTier::Critical.alert_rank(), Some(0));
        assert_eq!(StockTier::Low.alert_rank(), Some(1));
        assert_eq!(StockTier::Warning.alert_rank(), Some(2));
        assert!(!StockTier::Normal.needs_attention());
    }

    #[test]
    fn tiers_serialize_lowercase() {
        let json = serde_json::to_string(&StockTier::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn listing_availability_badges() {
        assert_eq!(StockAvailability::of(0), StockAvailability::Out);
        assert_eq!(StockAvailability::of(5), StockAvailability::Low);
        assert_eq!(StockAvailability::of(9), StockAvailability::Low);
        assert_eq!(StockAvailability::of(10), StockAvailability::In);
        assert_eq!("OUT".parse::<StockAvailability>().unwrap(), StockAvailability::Out);
        assert!("none".parse::<StockAvailability>().is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: anything at or below the critical quantity is critical.
            #[test]
            fn low_quantities_are_critical(quantity in 0u32..=3, threshold in any::<u32>()) {
                prop_assert_eq!(classify_stock(quantity, threshold), StockTier::Critical);
            }

            /// Property: `threshold * 2` is the inclusive edge of the warning band.
            ///
            /// Thresholds 0 and 1 are excluded: `threshold * 2 <= 3` lands in the
            /// critical band, which takes precedence.
            #[test]
            fn warning_boundary_is_inclusive(threshold in 2u32..1_000_000) {
                prop_assert_eq!(classify_stock(threshold * 2, threshold), StockTier::Warning);
                prop_assert_eq!(classify_stock(threshold * 2 + 1, threshold), StockTier::Normal);
            }

            /// Property: the result always matches first-match precedence.
            #[test]
            fn matches_first_match_precedence(quantity in any::<u32>(), threshold in any::<u32>()) {
                let q = u64::from(quantity);
                let t = u64::from(threshold);
                let expected = if q <= 3 {
                    StockTier::Critical
                } else if q <= t {
                    StockTier::Low
                } else if q <= 2 * t {
                    StockTier::Warning
                } else {
                    StockTier::Normal
                };
                prop_assert_eq!(classify_stock(quantity, threshold), expected);
            }
        }
    }
}
