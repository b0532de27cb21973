use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use catalog_core::{DomainResult, Entity, EntityId, FieldErrors, ValidationError};

/// Maximum category name length, in characters.
pub const NAME_MAX_CHARS: usize = 255;

/// Input for direct construction (rehydration or explicit values).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProps {
    pub category_id: Option<EntityId>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Command: CreateCategory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCreateCommand {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Plain field snapshot of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryJson {
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Entity: Category.
///
/// Fields are private; every state change goes through a named operation that
/// validates the resulting state before it is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    category_id: EntityId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(props: CategoryProps) -> DomainResult<Self> {
        let category = Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        };
        category.validate()?;
        Ok(category)
    }

    pub fn create(cmd: CategoryCreateCommand) -> DomainResult<Self> {
        Self::new(CategoryProps {
            category_id: None,
            name: cmd.name,
            description: cmd.description,
            is_active: cmd.is_active,
            created_at: None,
        })
    }

    /// Create from an untyped payload, checking field types as well as field rules.
    ///
    /// All violations are reported together.
    pub fn create_from_json(input: &JsonValue) -> DomainResult<Self> {
        let mut errors = FieldErrors::new();

        let name = match input.get("name") {
            Some(JsonValue::String(name)) => {
                CategoryValidator::check_name(name, &mut errors);
                Some(name.clone())
            }
            _ => {
                errors.add("name", "name must be a string");
                None
            }
        };

        let description = match input.get("description") {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::String(description)) => Some(description.clone()),
            Some(_) => {
                errors.add("description", "description must be a string");
                None
            }
        };

        let is_active = match input.get("is_active") {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::Bool(flag)) => Some(*flag),
            Some(_) => {
                errors.add("is_active", "is_active must be a boolean value");
                None
            }
        };

        errors.into_result()?;

        Self::create(CategoryCreateCommand {
            name: name.unwrap_or_default(),
            description,
            is_active,
        })
    }

    pub fn category_id(&self) -> &EntityId {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.commit(Self {
            name: name.into(),
            ..self.clone()
        })
    }

    pub fn change_description(&mut self, description: Option<String>) -> DomainResult<()> {
        self.commit(Self {
            description,
            ..self.clone()
        })
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        self.commit(Self {
            is_active: true,
            ..self.clone()
        })
    }

    pub fn deactivate(&mut self) -> DomainResult<()> {
        self.commit(Self {
            is_active: false,
            ..self.clone()
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        CategoryValidator::validate(self)
    }

    pub fn to_json(&self) -> CategoryJson {
        CategoryJson {
            category_id: self.category_id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }

    fn commit(&mut self, candidate: Self) -> DomainResult<()> {
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }
}

impl Entity for Category {
    type Id = EntityId;

    const NAME: &'static str = "Category";

    fn entity_id(&self) -> &Self::Id {
        &self.category_id
    }

    fn to_json(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(Category::to_json(self))
    }
}

/// Rule set for [`Category`].
pub struct CategoryValidator;

impl CategoryValidator {
    pub fn validate(category: &Category) -> Result<(), ValidationError> {
        let mut errors = FieldErrors::new();
        Self::check_name(&category.name, &mut errors);
        errors.into_result()
    }

    fn check_name(name: &str, errors: &mut FieldErrors) {
        errors.ensure(!name.is_empty(), "name", "name should not be empty");
        errors.ensure(
            name.chars().count() <= NAME_MAX_CHARS,
            "name",
            "name must be shorter than or equal to 255 characters",
        );
    }
}
