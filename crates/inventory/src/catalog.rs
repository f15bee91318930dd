//! In-memory product catalog.
//!
//! The catalog owns product lifecycle (add, edit, restock, remove). Alert views
//! are derived on demand and never stored, so they cannot go stale.

use std::collections::HashSet;

use chrono::NaiveDate;

use stockwatch_core::{DomainError, DomainResult, Entity, ProductId};

use crate::alerts::AlertReport;
use crate::listing::{DashboardStats, InventoryFilter};
use crate::product::Product;
use crate::settings::AlertSettings;

/// Insertion-ordered collection of products keyed by id.
///
/// Order matters: ties in the alert lists resolve by catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-validated products; duplicate ids are rejected.
    ///
    /// Ids are checked against a set, so bulk loading stays linear.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> DomainResult<Self> {
        let mut seen: HashSet<ProductId> = HashSet::new();
        let mut loaded = Vec::new();
        for product in products {
            if !seen.insert(product.id().clone()) {
                return Err(DomainError::conflict(format!(
                    "product {} already exists",
                    product.id()
                )));
            }
            loaded.push(product);
        }
        tracing::info!(products = loaded.len(), "catalog loaded");
        Ok(Self { products: loaded })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    fn position(&self, id: &ProductId) -> DomainResult<usize> {
        self.products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(DomainError::not_found)
    }

    pub fn add(&mut self, product: Product) -> DomainResult<()> {
        if self.get(product.id()).is_some() {
            return Err(DomainError::conflict(format!(
                "product {} already exists",
                product.id()
            )));
        }
        tracing::info!(product_id = %product.id(), quantity = product.quantity(), "product added");
        self.products.push(product);
        Ok(())
    }

    /// Replace a product in place, keeping its position.
    pub fn update(&mut self, product: Product) -> DomainResult<()> {
        let idx = self.position(product.id())?;
        tracing::info!(product_id = %product.id(), "product updated");
        self.products[idx] = product;
        Ok(())
    }

    /// Apply a signed stock movement; returns the new quantity.
    pub fn adjust_stock(&mut self, id: &ProductId, delta: i64) -> DomainResult<u32> {
        if delta == 0 {
            return Err(DomainError::validation("delta cannot be zero"));
        }
        let idx = self.position(id)?;
        let product = &mut self.products[idx];

        let new_quantity = i64::from(product.quantity()) + delta;
        if new_quantity < 0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }
        let new_quantity = u32::try_from(new_quantity)
            .map_err(|_| DomainError::invariant("stock exceeds supported quantity"))?;

        product.set_quantity(new_quantity);
        tracing::info!(product_id = %id, delta, quantity = new_quantity, "stock adjusted");
        Ok(new_quantity)
    }

    pub fn remove(&mut self, id: &ProductId) -> DomainResult<Product> {
        let idx = self.position(id)?;
        tracing::info!(product_id = %id, "product removed");
        Ok(self.products.remove(idx))
    }

    pub fn report(&self, today: NaiveDate, settings: &AlertSettings) -> AlertReport {
        AlertReport::build(&self.products, today, settings)
    }

    pub fn search(&self, filter: &InventoryFilter) -> Vec<&Product> {
        filter.apply(&self.products)
    }

    pub fn dashboard(&self) -> DashboardStats {
        DashboardStats::compute(&self.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stock::StockTier;

    fn id(s: &str) -> ProductId {
        s.parse().unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()
    }

    fn seeded() -> Catalog {
        Catalog::from_products([
            Product::new(id("1"), "Sample Product 1", 2).with_low_stock_threshold(10),
            Product::new(id("2"), "Sample Product 2", 15).with_low_stock_threshold(20),
        ])
        .unwrap()
    }

    #[test]
    fn bulk_load_keeps_order_and_rejects_late_duplicate() {
        let products: Vec<Product> = (0..5_000)
            .map(|i| Product::new(id(&format!("sku-{i}")), format!("Item {i}"), 50))
            .collect();
        let catalog = Catalog::from_products(products.clone()).unwrap();
        assert_eq!(catalog.len(), 5_000);
        assert_eq!(catalog.products()[4_999].id(), &id("sku-4999"));

        let mut with_duplicate = products;
        with_duplicate.push(Product::new(id("sku-17"), "Again", 1));
        let err = Catalog::from_products(with_duplicate).unwrap_err();
        assert_eq!(err, DomainError::conflict("product sku-17 already exists"));
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut catalog = seeded();
        let err = catalog.add(Product::new(id("1"), "Again", 1)).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn restock_refreshes_alerts() {
        let mut catalog = seeded();
        let before = catalog.report(today(), &AlertSettings::default());
        assert_eq!(before.low_stock[0].tier, StockTier::Critical);

        assert_eq!(catalog.adjust_stock(&id("1"), 40).unwrap(), 42);
        let after = catalog.report(today(), &AlertSettings::default());
        assert_eq!(after.low_stock.len(), 1);
        assert_eq!(after.low_stock[0].product_id, id("2"));
    }

    #[test]
    fn adjust_stock_rejects_zero_and_negative_results() {
        let mut catalog = seeded();
        assert!(matches!(
            catalog.adjust_stock(&id("1"), 0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            catalog.adjust_stock(&id("1"), -3),
            Err(DomainError::InvariantViolation(_))
        ));
        assert_eq!(catalog.get(&id("1")).unwrap().quantity(), 2);
        assert_eq!(catalog.adjust_stock(&id("1"), -2).unwrap(), 0);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut catalog = seeded();
        assert_eq!(catalog.adjust_stock(&id("9"), 1), Err(DomainError::NotFound));
        assert_eq!(catalog.remove(&id("9")), Err(DomainError::NotFound));
        assert_eq!(
            catalog.update(Product::new(id("9"), "Ghost", 1)),
            Err(DomainError::NotFound)
        );
    }

    #[test]
    fn update_keeps_position() {
        let mut catalog = seeded();
        catalog.update(Product::new(id("1"), "Renamed", 100)).unwrap();
        assert_eq!(catalog.products()[0].name(), "Renamed");
        assert_eq!(catalog.dashboard().low_stock_alerts, 1);
    }

    #[test]
    fn remove_drops_product_from_views() {
        let mut catalog = seeded();
        let removed = catalog.remove(&id("1")).unwrap();
        assert_eq!(removed.name(), "Sample Product 1");
        assert!(catalog.get(&id("1")).is_none());
        assert_eq!(catalog.dashboard().total_products, 1);
        assert_eq!(catalog.search(&InventoryFilter::default()).len(), 1);
    }
}
