//! Inventory listing filters and dashboard counters.

use serde::{Deserialize, Serialize};

use crate::alerts::low_stock_alerts;
use crate::category::Category;
use crate::product::Product;
use crate::stock::StockAvailability;

/// Search and facet filter for the product listing. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryFilter {
    pub search: String,
    pub category: Option<Category>,
    pub availability: Option<StockAvailability>,
}

impl InventoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() && !product.name().to_lowercase().contains(&needle) {
            return false;
        }

        if let Some(category) = self.category {
            if product.category() != Some(category) {
                return false;
            }
        }

        if let Some(availability) = self.availability {
            if product.availability() != availability {
                return false;
            }
        }

        true
    }

    /// Matching products, in input order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Headline counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,
    pub out_of_stock: usize,
    pub low_stock_alerts: usize,
}

impl DashboardStats {
    pub fn compute(products: &[Product]) -> Self {
        Self {
            total_products: products.len(),
            out_of_stock: products.iter().filter(|p| p.quantity() == 0).count(),
            low_stock_alerts: low_stock_alerts(products).len(),
        }
    }
}
