use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockwatch_core::{DomainError, DomainResult, Entity, ProductId, parse_optional_iso_date};

use crate::category::{Category, DateFields};
use crate::expiry::{ExpiryTier, classify_expiry};
use crate::stock::{DEFAULT_LOW_STOCK_THRESHOLD, StockAvailability, StockTier, classify_stock};

/// A validated product record.
///
/// Owned by the caller; classification only ever reads it. Quantities and
/// thresholds are unsigned, so the non-negative invariants hold by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    category: Option<Category>,
    quantity: u32,
    price_cents: u64,
    low_stock_threshold: Option<u32>,
    manufacturing_date: Option<NaiveDate>,
    expiry_date: Option<NaiveDate>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            quantity,
            price_cents: 0,
            low_stock_threshold: None,
            manufacturing_date: None,
            expiry_date: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_price_cents(mut self, price_cents: u64) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = Some(threshold);
        self
    }

    pub fn with_manufacturing_date(mut self, date: NaiveDate) -> Self {
        self.manufacturing_date = Some(date);
        self
    }

    pub fn with_expiry_date(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date);
        self
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price_cents(&self) -> u64 {
        self.price_cents
    }

    pub fn low_stock_threshold(&self) -> Option<u32> {
        self.low_stock_threshold
    }

    /// The product's own threshold, or `default` when unset.
    pub fn effective_threshold(&self, default: u32) -> u32 {
        self.low_stock_threshold.unwrap_or(default)
    }

    pub fn manufacturing_date(&self) -> Option<NaiveDate> {
        self.manufacturing_date
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry_date
    }

    pub fn stock_tier(&self) -> StockTier {
        classify_stock(self.quantity, self.effective_threshold(DEFAULT_LOW_STOCK_THRESHOLD))
    }

    /// `None` for products without an expiry date.
    pub fn expiry_tier(&self, today: NaiveDate) -> Option<ExpiryTier> {
        self.expiry_date.map(|date| classify_expiry(date, today))
    }

    pub fn availability(&self) -> StockAvailability {
        StockAvailability::of(self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Unvalidated product input, as a form or a JSON catalog supplies it.
///
/// Numeric fields are signed and dates are strings so that out-of-range values
/// reach [`ProductDraft::validate`] and are rejected there.
///
/// `name`, `category`, `quantity` and `price` are required; a record missing
/// any of them fails to deserialize instead of defaulting to zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    /// Unit price in major currency units (e.g. `299.99`).
    pub price: f64,
    #[serde(default)]
    pub low_stock_threshold: Option<i64>,
    #[serde(default)]
    pub manufacturing_date: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
}

impl ProductDraft {
    pub fn validate(&self) -> DomainResult<Product> {
        let id = match self.id.as_deref() {
            Some(raw) => raw.parse::<ProductId>()?,
            None => ProductId::generate(),
        };

        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name is required"));
        }

        let category: Category = self.category.parse()?;
        let quantity = non_negative_u32("quantity", self.quantity)?;
        let price_cents = price_to_cents(self.price)?;
        let low_stock_threshold = self
            .low_stock_threshold
            .map(|t| non_negative_u32("low stock threshold", t))
            .transpose()?;

        let manufacturing_date = parse_optional_iso_date(self.manufacturing_date.as_deref())?;
        let expiry_date = parse_optional_iso_date(self.expiry_date.as_deref())?;

        if category.fields().dates == DateFields::Hidden
            && (manufacturing_date.is_some() || expiry_date.is_some())
        {
            return Err(DomainError::validation(format!(
                "date fields do not apply to category {category}"
            )));
        }

        if let (Some(made), Some(expires)) = (manufacturing_date, expiry_date) {
            if made > expires {
                return Err(DomainError::validation(
                    "manufacturing date cannot be after expiry date",
                ));
            }
        }

        Ok(Product {
            id,
            name: self.name.trim().to_string(),
            category: Some(category),
            quantity,
            price_cents,
            low_stock_threshold,
            manufacturing_date,
            expiry_date,
        })
    }
}

fn non_negative_u32(field: &str, value: i64) -> DomainResult<u32> {
    if value < 0 {
        return Err(DomainError::validation(format!("{field} cannot be negative")));
    }
    u32::try_from(value).map_err(|_| DomainError::validation(format!("{field} is too large")))
}

fn price_to_cents(price: f64) -> DomainResult<u64> {
    if !price.is_finite() {
        return Err(DomainError::validation("price must be a finite number"));
    }
    if price < 0.0 {
        return Err(DomainError::validation("price cannot be negative"));
    }
    let cents = (price * 100.0).round();
    if cents > u64::MAX as f64 {
        return Err(DomainError::validation("price is too large"));
    }
    Ok(cents as u64)
}
