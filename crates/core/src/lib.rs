//! `invopt-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO): the error model, the
//! SKU identity types, and the entity/value-object traits.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{SkuClass, SkuLabel, SkuNumber};
pub use value_object::ValueObject;
