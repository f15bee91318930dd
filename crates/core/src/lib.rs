//! `stockwatch-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no clock access).

pub mod date;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use date::{parse_iso_date, parse_optional_iso_date, whole_days_between};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;
