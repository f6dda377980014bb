//! The SchemaRegistry - per-entity-type rule declaration and lookup.

use std::collections::HashMap;
use thiserror::Error;

use regex_lite::Regex;

use crate::{RuleKind, RuleParam, Schema, ValueType};

/// Errors that can occur while declaring rules.
///
/// These are configuration errors: a caller wired the schema up wrong. They
/// are distinct from validation failures, which are data and land in the
/// error report at evaluation time.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Entity type name must not be empty")]
    EmptyEntityName,

    #[error("Attribute name must not be empty (entity type: {entity})")]
    EmptyAttributeName { entity: String },

    #[error("Rule parameter shape mismatch: declared kind {declared}, parameter is {actual}")]
    ParamMismatch { declared: RuleKind, actual: RuleKind },

    #[error("Invalid format pattern: {0}")]
    BadPattern(#[from] regex_lite::Error),
}

/// Result type for schema declaration.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Shared schema for entity types that never declared any rules.
static EMPTY_SCHEMA: Schema = Schema::new();

/// Process-wide registry of validation schemas, keyed by entity type name.
///
/// Declarations are expected to complete at type-definition time, before the
/// first evaluation; afterwards the registry is read-only. This precondition
/// is documented, not enforced with a lock: concurrent evaluation over a
/// fully-declared registry is safe, concurrent declaration is not supported.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Schema>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one rule for an attribute of an entity type.
    ///
    /// Lazily creates the entity's schema and the attribute's rule set, then
    /// inserts the rule. Declaring the same kind twice for one attribute
    /// overwrites the earlier parameter (last-write-wins).
    ///
    /// Fails fast on empty identifiers and on a parameter whose shape does
    /// not match the declared kind.
    pub fn declare_rule(
        &mut self,
        entity: &str,
        attr: &str,
        kind: RuleKind,
        param: RuleParam,
    ) -> SchemaResult<()> {
        if entity.is_empty() {
            return Err(SchemaError::EmptyEntityName);
        }
        if attr.is_empty() {
            return Err(SchemaError::EmptyAttributeName {
                entity: entity.to_string(),
            });
        }
        if param.kind() != kind {
            return Err(SchemaError::ParamMismatch {
                declared: kind,
                actual: param.kind(),
            });
        }

        self.schemas
            .entry(entity.to_string())
            .or_default()
            .rules_for_mut(attr)
            .insert(param);
        Ok(())
    }

    /// Get the schema for an entity type.
    ///
    /// Returns a shared empty schema when no rules were ever declared, so
    /// evaluation against it trivially succeeds. Repeated declarations for
    /// one entity type accumulate into the same schema.
    pub fn schema_for(&self, entity: &str) -> &Schema {
        self.schemas.get(entity).unwrap_or(&EMPTY_SCHEMA)
    }

    /// Check whether any rules were declared for an entity type.
    pub fn has_schema(&self, entity: &str) -> bool {
        self.schemas.contains_key(entity)
    }

    /// Number of entity types with declared rules.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Iterate all declared schemas.
    pub fn all_schemas(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.schemas
            .iter()
            .map(|(entity, schema)| (entity.as_str(), schema))
    }

    /// Begin fluent rule declaration for an entity type.
    pub fn entity<'a>(&'a mut self, name: &'a str) -> EntityRules<'a> {
        EntityRules {
            registry: self,
            entity: name,
        }
    }
}

/// Fluent declaration helper for one entity type.
#[derive(Debug)]
pub struct EntityRules<'a> {
    registry: &'a mut SchemaRegistry,
    entity: &'a str,
}

impl<'a> EntityRules<'a> {
    /// Declare a presence rule: `true` requires the attribute to be present,
    /// `false` requires it to be absent.
    pub fn presence(self, attr: &str, desired: bool) -> SchemaResult<Self> {
        self.registry.declare_rule(
            self.entity,
            attr,
            RuleKind::Presence,
            RuleParam::Presence(desired),
        )?;
        Ok(self)
    }

    /// Declare a format rule from a pattern string, compiling it.
    pub fn format(self, attr: &str, pattern: &str) -> SchemaResult<Self> {
        let pattern = Regex::new(pattern)?;
        self.registry.declare_rule(
            self.entity,
            attr,
            RuleKind::Format,
            RuleParam::Format(pattern),
        )?;
        Ok(self)
    }

    /// Declare a type rule.
    pub fn type_of(self, attr: &str, value_type: ValueType) -> SchemaResult<Self> {
        self.registry.declare_rule(
            self.entity,
            attr,
            RuleKind::Type,
            RuleParam::Type(value_type),
        )?;
        Ok(self)
    }
}
