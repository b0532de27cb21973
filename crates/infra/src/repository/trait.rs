use catalog_core::{DomainResult, Entity};

/// Identifier type of the entities stored by repository `R`.
pub type IdOf<R> = <<R as Repository>::Entity as Entity>::Id;

/// Collection-backed store for one entity type, keyed by the entity identifier.
///
/// ## Design Principles
///
/// - **No storage assumptions**: the in-memory backend and any future durable
///   backend implement the same contract and the same error taxonomy
/// - **Async at the boundary**: operations are `async` even when the backend
///   resolves immediately, so call sites do not change when a real store lands
/// - **Single owner**: mutators take `&mut self`; callers sharing a repository
///   across tasks wrap it themselves (e.g. `tokio::sync::Mutex`)
///
/// ## Lookup Semantics
///
/// `find_by_id`, `update` and `delete` locate the first stored entity whose id
/// `equals` the requested one. A miss is always `DomainError::NotFound`
/// (`"<Entity> with id(s) <id> not found"`), never an empty result.
///
/// ## Uniqueness
///
/// `insert` and `bulk_insert` reject ids that are already stored with
/// `DomainError::Conflict`. A rejected batch appends nothing.
#[async_trait::async_trait]
pub trait Repository: Send + Sync {
    /// Entity type stored by this repository.
    type Entity: Entity + Send + Sync;

    /// Append one entity.
    async fn insert(&mut self, entity: Self::Entity) -> DomainResult<()>;

    /// Append all entities in input order (all or nothing).
    async fn bulk_insert(&mut self, entities: Vec<Self::Entity>) -> DomainResult<()>;

    async fn find_by_id(&self, id: &<Self::Entity as Entity>::Id) -> DomainResult<Self::Entity>;

    /// Every stored entity, in storage order.
    async fn find_all(&self) -> DomainResult<Vec<Self::Entity>>;

    /// Replace the stored entity with the same id, keeping its position.
    async fn update(&mut self, entity: Self::Entity) -> DomainResult<()>;

    /// Remove the entity with `id`, keeping the order of the rest.
    async fn delete(&mut self, id: &<Self::Entity as Entity>::Id) -> DomainResult<()>;

    /// Name of the stored entity type.
    fn entity_name(&self) -> &'static str {
        <Self::Entity as Entity>::NAME
    }
}
