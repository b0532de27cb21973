//! Entity repository boundary.
//!
//! This module defines the persistence contract every entity store implements,
//! plus the in-memory backend used for tests/dev.

pub mod category;
pub mod in_memory;
pub mod r#trait;

pub use category::CategoryInMemoryRepository;
pub use in_memory::InMemoryRepository;
pub use r#trait::{IdOf, Repository};
