//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. In this
/// workspace the classification tiers and alert records are value objects: two
/// `StockTier::Low` values are interchangeable, whereas two products with the
/// same quantity are not.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum ExpiryTier { Expired, Expiring, Safe }
///
/// impl ValueObject for ExpiryTier {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
