//! Field-level validation errors.
//!
//! Validators collect every violated rule into [`FieldErrors`] and turn the
//! collection into a [`ValidationError`] keyed by field name, so callers can
//! assert on `errors["name"]` rather than parsing a message.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Violations grouped by field name (messages in the order the rules ran).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{}", render(.errors))]
pub struct ValidationError {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// Messages recorded for `field` (empty if the field is valid).
    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str, message: &str) -> bool {
        self.messages(field).iter().any(|m| m == message)
    }

    /// Number of fields with at least one violation.
    pub fn count(&self) -> usize {
        self.errors.len()
    }
}

fn render(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collector used while running a rule set.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(message.into());
    }

    /// Record `message` for `field` unless `ok` holds.
    pub fn ensure(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add(field, message);
        }
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collector_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn groups_messages_by_field() {
        let mut errors = FieldErrors::new();
        errors.add("name", "name should not be empty");
        errors.ensure(false, "name", "name must be a string");
        errors.ensure(true, "description", "never recorded");
        errors.add("is_active", "is_active must be a boolean value");

        let err = errors.into_result().unwrap_err();
        assert_eq!(err.count(), 2);
        assert_eq!(err.messages("name").len(), 2);
        assert!(err.contains("name", "name should not be empty"));
        assert!(err.messages("description").is_empty());
        assert_eq!(
            err.to_string(),
            "is_active: is_active must be a boolean value; name: name should not be empty, name must be a string"
        );
    }
}
