//! Alert ranking: products in, prioritized alert lists out.
//!
//! Every function here recomputes from the slice it is given. Nothing is
//! cached between calls, so the result is a pure function of
//! `(products, thresholds, today)`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockwatch_core::{ProductId, ValueObject, whole_days_between};

use crate::expiry::{EXPIRING_WINDOW_DAYS, ExpiryTier, tier_for_days};
use crate::product::Product;
use crate::settings::AlertSettings;
use crate::stock::{DEFAULT_LOW_STOCK_THRESHOLD, StockTier, classify_stock};

/// A product that needs restocking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    /// Threshold the tier was computed against (product's own or the default).
    pub threshold: u32,
    pub tier: StockTier,
}

impl ValueObject for StockAlert {}

/// A product that has expired or expires soon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryAlert {
    pub product_id: ProductId,
    pub name: String,
    pub expiry_date: NaiveDate,
    pub days_until_expiry: i64,
    pub tier: ExpiryTier,
}

impl ValueObject for ExpiryAlert {}

/// Low-stock alerts using [`DEFAULT_LOW_STOCK_THRESHOLD`] for products without one.
pub fn low_stock_alerts(products: &[Product]) -> Vec<StockAlert> {
    low_stock_alerts_with(products, DEFAULT_LOW_STOCK_THRESHOLD)
}

/// Products whose stock tier is critical, low or warning, most urgent first.
///
/// Equal tiers keep their input order (`sort_by_key` is stable).
pub fn low_stock_alerts_with(products: &[Product], default_threshold: u32) -> Vec<StockAlert> {
    let mut alerts: Vec<StockAlert> = products
        .iter()
        .filter_map(|product| {
            let threshold = product.effective_threshold(default_threshold);
            let tier = classify_stock(product.quantity(), threshold);
            tier.needs_attention().then(|| StockAlert {
                product_id: product.id_typed().clone(),
                name: product.name().to_string(),
                quantity: product.quantity(),
                threshold,
                tier,
            })
        })
        .collect();

    alerts.sort_by_key(|alert| alert.tier.alert_rank());

    tracing::debug!(
        products = products.len(),
        alerts = alerts.len(),
        "computed low-stock alerts"
    );
    alerts
}

/// Expiry alerts using the standard [`EXPIRING_WINDOW_DAYS`] window.
pub fn expiry_alerts(products: &[Product], today: NaiveDate) -> Vec<ExpiryAlert> {
    expiry_alerts_with(products, today, EXPIRING_WINDOW_DAYS)
}

/// Dated products that are expired or expiring, earliest expiry first.
///
/// The stable sort on the raw date runs before tier filtering, so products
/// sharing a date stay in input order. Undated products never appear.
pub fn expiry_alerts_with(
    products: &[Product],
    today: NaiveDate,
    window_days: u32,
) -> Vec<ExpiryAlert> {
    let mut dated: Vec<(&Product, NaiveDate)> = products
        .iter()
        .filter_map(|product| product.expiry_date().map(|date| (product, date)))
        .collect();
    dated.sort_by_key(|(_, date)| *date);

    let alerts: Vec<ExpiryAlert> = dated
        .into_iter()
        .filter_map(|(product, expiry_date)| {
            let days_until_expiry = whole_days_between(expiry_date, today);
            let tier = tier_for_days(days_until_expiry, window_days);
            tier.needs_attention().then(|| ExpiryAlert {
                product_id: product.id_typed().clone(),
                name: product.name().to_string(),
                expiry_date,
                days_until_expiry,
                tier,
            })
        })
        .collect();

    tracing::debug!(
        products = products.len(),
        alerts = alerts.len(),
        %today,
        "computed expiry alerts"
    );
    alerts
}

/// Both alert views for one point in time, honoring the caller's settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertReport {
    pub today: NaiveDate,
    pub low_stock: Vec<StockAlert>,
    pub expiry: Vec<ExpiryAlert>,
}

impl AlertReport {
    /// A disabled alert kind yields an empty list rather than being omitted.
    pub fn build(products: &[Product], today: NaiveDate, settings: &AlertSettings) -> Self {
        let low_stock = if settings.low_stock_alerts {
            low_stock_alerts_with(products, settings.default_low_stock_threshold)
        } else {
            Vec::new()
        };

        let expiry = if settings.expiry_alerts {
            expiry_alerts_with(products, today, settings.expiring_window_days)
        } else {
            Vec::new()
        };

        Self {
            today,
            low_stock,
            expiry,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.low_stock.is_empty() && self.expiry.is_empty()
    }

    pub fn critical_count(&self) -> usize {
        self.low_stock
            .iter()
            .filter(|a| a.tier == StockTier::Critical)
            .count()
    }

    pub fn expired_count(&self) -> usize {
        self.expiry
            .iter()
            .filter(|a| a.tier == ExpiryTier::Expired)
            .count()
    }
}
