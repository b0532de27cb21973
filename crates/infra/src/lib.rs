//! Infrastructure layer: repositories and storage backends.

pub mod repository;

pub use repository::{CategoryInMemoryRepository, IdOf, InMemoryRepository, Repository};
