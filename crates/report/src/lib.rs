//! Alert report for a product catalog.
//!
//! Reads a JSON array of product records, validates every record, and builds
//! the dashboard counters plus both alert lists for a given day.

use std::io::Read;

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockwatch_core::parse_iso_date;
use stockwatch_inventory::{AlertReport, AlertSettings, Catalog, DashboardStats, ProductDraft};

/// Environment variable naming the catalog file (used when no path argument is given).
pub const ENV_CATALOG: &str = "STOCKWATCH_CATALOG";

/// Environment variable overriding "today" (strict `YYYY-MM-DD`).
pub const ENV_TODAY: &str = "STOCKWATCH_TODAY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub dashboard: DashboardStats,
    pub alerts: AlertReport,
}

/// Parse and validate a catalog. The first invalid record aborts the load.
pub fn load_catalog<R: Read>(reader: R) -> anyhow::Result<Catalog> {
    let drafts: Vec<ProductDraft> =
        serde_json::from_reader(reader).context("catalog is not a JSON array of products")?;

    let products = drafts
        .iter()
        .enumerate()
        .map(|(idx, draft)| {
            draft
                .validate()
                .with_context(|| format!("invalid product at index {idx}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Catalog::from_products(products).context("catalog contains duplicate ids")
}

/// Use the override when present, otherwise `fallback` (normally the local date).
pub fn resolve_today(value: Option<&str>, fallback: NaiveDate) -> anyhow::Result<NaiveDate> {
    match value {
        Some(raw) => parse_iso_date(raw.trim()).with_context(|| format!("{ENV_TODAY} is invalid")),
        None => Ok(fallback),
    }
}

pub fn build_report(catalog: &Catalog, today: NaiveDate, settings: &AlertSettings) -> Report {
    Report {
        dashboard: catalog.dashboard(),
        alerts: catalog.report(today, settings),
    }
}

pub fn run<R: Read>(
    reader: R,
    today: NaiveDate,
    settings: &AlertSettings,
) -> anyhow::Result<Report> {
    let catalog = load_catalog(reader)?;
    Ok(build_report(&catalog, today, settings))
}
