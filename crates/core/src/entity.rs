//! Entity trait: identity + continuity across state changes.

use crate::value_object::ValueObject;

/// Entity marker + minimal interface.
///
/// Entities are compared by identifier only, never by their full content.
pub trait Entity {
    /// Strongly-typed entity identifier (itself a value object).
    type Id: ValueObject + core::fmt::Display + Send + Sync;

    /// Entity name used in error messages (e.g. `"Category"`).
    const NAME: &'static str;

    /// Returns the entity identifier.
    fn entity_id(&self) -> &Self::Id;

    /// Plain field snapshot for serialization.
    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error>;

    /// Whether this entity is addressed by `id`.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.entity_id().equals(Some(id))
    }
}
