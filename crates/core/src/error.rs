//! Domain error model.

use core::fmt::Display;

use thiserror::Error;

use crate::entity::Entity;
use crate::validation::ValidationError;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// identifiers, lookups, conflicts). None of these are transient: nothing in the
/// domain layer retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more fields violated their rules.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An identifier token did not match the canonical grammar.
    #[error("invalid identifier: {id}")]
    InvalidId { id: String },

    /// No entity with the requested id(s).
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A conflict occurred (e.g. duplicate identifier).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Not-found error for a single id of entity `E`.
    pub fn not_found<E: Entity>(id: &E::Id) -> Self {
        Self::NotFound(NotFoundError::single(E::NAME, id))
    }

    /// Field errors, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Lookup miss for one or more ids.
///
/// Renders as `"<Entity> with id(s) <id>[, <id>...] not found"`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{} with id(s) {} not found", .entity, join_ids(.ids))]
pub struct NotFoundError {
    entity: String,
    ids: Vec<String>,
}

impl NotFoundError {
    pub fn single(entity: impl Into<String>, id: impl Display) -> Self {
        Self {
            entity: entity.into(),
            ids: vec![id.to_string()],
        }
    }

    /// Batch lookups report every missing id in one error.
    pub fn many<I>(entity: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Self {
            entity: entity.into(),
            ids: ids.into_iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

fn join_ids(ids: &[String]) -> String {
    ids.join(", ")
}
