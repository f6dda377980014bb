//! vet Schema
//!
//! Per-entity-type validation schemas. Single source of truth for declared
//! rules: rule kinds, rule parameters, per-attribute rule sets, and the
//! process-wide SchemaRegistry. Declarations accumulate at type-definition
//! time; the registry is read-only once evaluation starts.

mod registry;
mod types;

pub use registry::{EntityRules, SchemaError, SchemaRegistry, SchemaResult};
pub use types::{RuleKind, RuleParam, RuleSet, Schema, ValueType};
