//! `catalog-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! structural equality, value objects, identifiers, entities and the error model.

pub mod entity;
pub mod equality;
pub mod error;
pub mod id;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use equality::{Value, is_equal};
pub use error::{DomainError, DomainResult, NotFoundError};
pub use id::EntityId;
pub use validation::{FieldErrors, ValidationError};
pub use value_object::ValueObject;
