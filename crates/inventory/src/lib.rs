//! Inventory alerting domain.
//!
//! Stock and expiry classification plus alert ranking, implemented purely as
//! deterministic domain logic (no IO, no clock, no storage). Callers own the
//! product collection and pass "today" explicitly.

pub mod alerts;
pub mod catalog;
pub mod category;
pub mod expiry;
pub mod listing;
pub mod product;
pub mod settings;
pub mod stock;

pub use alerts::{
    AlertReport, ExpiryAlert, StockAlert, expiry_alerts, expiry_alerts_with, low_stock_alerts,
    low_stock_alerts_with,
};
pub use catalog::Catalog;
pub use category::{Category, CategoryFields, DateFields};
pub use expiry::{EXPIRING_WINDOW_DAYS, ExpiryTier, classify_expiry, classify_expiry_within};
pub use listing::{DashboardStats, InventoryFilter};
pub use product::{Product, ProductDraft};
pub use settings::{AlertSettings, SettingsError};
pub use stock::{
    CRITICAL_QUANTITY, DEFAULT_LOW_STOCK_THRESHOLD, StockAvailability, StockTier, classify_stock,
    classify_stock_or_default,
};
