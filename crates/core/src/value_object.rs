//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use serde::Serialize;

use crate::equality::{Value, is_equal};

/// Value objects are **immutable** and **compared by content**.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with the same id are the same entity)
///
/// Example:
/// - `CategoryName("Movies")` would be a value object
/// - `Category { category_id: EntityId(...), name: "..." }` is an entity
///
/// ## Equality
///
/// [`equals`](ValueObject::equals) compares the [`snapshot`](ValueObject::snapshot)s of
/// both sides with the structural algorithm in [`crate::equality`]. Both sides are
/// `Self`, so two value objects of different concrete types can never be compared.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Serialize)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
///
/// let m1 = Money { amount: 100, currency: "USD".to_string() };
/// let m2 = Money { amount: 100, currency: "USD".to_string() };
/// assert!(m1.equals(Some(&m2)));
/// assert!(!m1.equals(None));
/// ```
pub trait ValueObject: Clone + core::fmt::Debug + Serialize {
    /// Full field set as a structural value.
    ///
    /// Defaults to the serde representation. A value serde_json cannot represent
    /// (e.g. a map with non-string keys) snapshots as [`Value::Undefined`], so it
    /// still equals itself. Override this for such types.
    fn snapshot(&self) -> Value {
        Value::from_serialize(self).unwrap_or(Value::Undefined)
    }

    /// Structural equality against an optional other value.
    fn equals(&self, other: Option<&Self>) -> bool {
        match other {
            Some(other) => is_equal(&self.snapshot(), &other.snapshot()),
            None => false,
        }
    }
}
