//! Identifier value object used to address entities.

use core::hash::{Hash, Hasher};
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::equality::Value;
use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Entity identifier: a v4 UUID kept as its 36-character hyphenated token.
///
/// The token is stored verbatim, so an id parsed from an API path renders back
/// exactly as it was received. Equality is structural (see [`ValueObject`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId {
    id: String,
}

impl EntityId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().hyphenated().to_string(),
        }
    }

    /// Generate when `token` is `None`, otherwise validate it.
    pub fn create(token: Option<&str>) -> DomainResult<Self> {
        match token {
            Some(token) => Self::parse(token),
            None => Ok(Self::new()),
        }
    }

    /// Validate `token` against `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (hex digits).
    pub fn parse(token: &str) -> DomainResult<Self> {
        if !is_canonical(token) {
            return Err(DomainError::invalid_id(token));
        }
        Ok(Self {
            id: token.to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Only the hyphenated layout is 36 characters long (simple is 32, braced 38, URN 45).
fn is_canonical(token: &str) -> bool {
    token.len() == 36 && Uuid::try_parse(token).is_ok()
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for EntityId {
    fn snapshot(&self) -> Value {
        Value::object([("id", Value::from(self.id.as_str()))])
    }
}

impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        self.equals(Some(other))
    }
}

impl Eq for EntityId {}

impl Hash for EntityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<Uuid> for EntityId {
    fn from(value: Uuid) -> Self {
        Self {
            id: value.hyphenated().to_string(),
        }
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.id
    }
}

impl TryFrom<String> for EntityId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !is_canonical(&value) {
            return Err(DomainError::invalid_id(value));
        }
        Ok(Self { id: value })
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn rejects_invalid_token() {
        let err = EntityId::parse("invalid-uuid").unwrap_err();
        assert_eq!(err, DomainError::invalid_id("invalid-uuid"));
    }

    #[test]
    fn rejects_near_misses() {
        for token in [
            "",
            "550e8400e29b41d4a716446655440000",
            "{550e8400-e29b-41d4-a716-446655440000}",
            "550e8400-e29b-41d4-a716-44665544000g",
            "550e8400-e29b-41d4-a716_446655440000",
            "550e8400-e29b-41d4-a716-4466554400000",
            "urn:uuid:550e8400-e29b-41d4-a716-446655440000",
            "550e8400-e29b-41d4-a716-44665544000",
            "550e8400+e29b-41d4-a716-446655440000",
        ] {
            assert!(EntityId::parse(token).is_err(), "accepted {token:?}");
        }
    }

    #[test]
    fn keeps_valid_token_verbatim() {
        let id = EntityId::parse(VALID).unwrap();
        assert_eq!(id.id(), VALID);
        assert_eq!(id.to_string(), VALID);

        let upper = EntityId::parse(&VALID.to_uppercase()).unwrap();
        assert_eq!(upper.id(), VALID.to_uppercase());
    }

    #[test]
    fn create_without_token_generates_one() {
        let id = EntityId::create(None).unwrap();
        assert!(EntityId::parse(id.id()).is_ok());
        assert_eq!(Uuid::parse_str(id.id()).unwrap().get_version_num(), 4);
    }

    #[test]
    fn same_token_is_equal() {
        let a = EntityId::create(Some(VALID)).unwrap();
        let b: EntityId = VALID.parse().unwrap();
        assert!(a.equals(Some(&b)));
        assert_eq!(a, b);
        assert!(!a.equals(None));
    }

    #[test]
    fn fresh_ids_differ() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn serializes_as_token() {
        let id = EntityId::parse(VALID).unwrap();
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json, serde_json::json!(VALID));

        let back: EntityId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_value::<EntityId>(serde_json::json!("nope")).is_err());
    }

    #[test]
    fn from_uuid_uses_hyphenated_form() {
        let uuid = Uuid::new_v4();
        let id = EntityId::from(uuid);
        assert_eq!(id.id(), uuid.to_string());
    }
}
