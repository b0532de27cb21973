use catalog_category::Category;

use super::in_memory::InMemoryRepository;

/// In-memory store for [`Category`] entities.
pub type CategoryInMemoryRepository = InMemoryRepository<Category>;
