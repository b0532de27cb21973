use catalog_core::{DomainError, DomainResult, Entity};

use super::r#trait::Repository;

/// In-memory, insertion-ordered repository.
///
/// Intended for tests/dev. Lookups are linear scans comparing ids structurally.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E> {
    items: Vec<E>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Borrowed view of the stored entities, in storage order.
    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryRepository<E> {
    /// Seed a repository (same uniqueness rule as `bulk_insert`).
    pub fn with_items(items: Vec<E>) -> DomainResult<Self> {
        let mut repo = Self::new();
        repo.append_unique(items)?;
        Ok(repo)
    }

    fn position(&self, id: &E::Id) -> DomainResult<usize> {
        match self.items.iter().position(|item| item.has_id(id)) {
            Some(idx) => Ok(idx),
            None => {
                tracing::debug!(entity = E::NAME, id = %id, "entity not found");
                Err(DomainError::not_found::<E>(id))
            }
        }
    }

    fn append_unique(&mut self, entities: Vec<E>) -> DomainResult<()> {
        let mut duplicates: Vec<String> = Vec::new();
        for (idx, entity) in entities.iter().enumerate() {
            let id = entity.entity_id();
            let clashes = self.items.iter().any(|item| item.has_id(id))
                || entities[..idx].iter().any(|earlier| earlier.has_id(id));
            let token = id.to_string();
            if clashes && !duplicates.contains(&token) {
                duplicates.push(token);
            }
        }

        if !duplicates.is_empty() {
            let ids = duplicates.join(", ");
            tracing::warn!(entity = E::NAME, ids = %ids, "rejected insert of existing id(s)");
            return Err(DomainError::conflict(format!(
                "{} with id(s) {ids} already exists",
                E::NAME
            )));
        }

        self.items.extend(entities);
        Ok(())
    }
}

#[async_trait::async_trait]
impl<E> Repository for InMemoryRepository<E>
where
    E: Entity + Clone + Send + Sync + 'static,
{
    type Entity = E;

    async fn insert(&mut self, entity: E) -> DomainResult<()> {
        self.append_unique(vec![entity])?;
        tracing::debug!(entity = E::NAME, total = self.items.len(), "inserted entity");
        Ok(())
    }

    async fn bulk_insert(&mut self, entities: Vec<E>) -> DomainResult<()> {
        let count = entities.len();
        self.append_unique(entities)?;
        tracing::debug!(entity = E::NAME, count, total = self.items.len(), "bulk inserted entities");
        Ok(())
    }

    async fn find_by_id(&self, id: &E::Id) -> DomainResult<E> {
        let idx = self.position(id)?;
        Ok(self.items[idx].clone())
    }

    /// Returns a copy; later mutations of the repository do not affect it.
    async fn find_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.items.clone())
    }

    async fn update(&mut self, entity: E) -> DomainResult<()> {
        let idx = self.position(entity.entity_id())?;
        tracing::debug!(entity = E::NAME, id = %entity.entity_id(), "updated entity");
        self.items[idx] = entity;
        Ok(())
    }

    async fn delete(&mut self, id: &E::Id) -> DomainResult<()> {
        let idx = self.position(id)?;
        self.items.remove(idx);
        tracing::debug!(entity = E::NAME, id = %id, "deleted entity");
        Ok(())
    }
}
