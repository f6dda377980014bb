//! vet Engine
//!
//! Evaluate declared validation rules against a record's current values.
//!
//! Responsibilities:
//! - Walk an entity type's schema attribute by attribute
//! - Dispatch each declared rule to its built-in handler
//! - Accumulate failure messages into a per-check error report
//! - Distinguish validation failures (report entries) from configuration
//!   errors (unregistered rule kinds, which abort evaluation)

mod engine;
mod error;
mod report;

pub use engine::{Handler, RuleEngine, Validity};
pub use error::{EngineError, EngineResult};
pub use report::ErrorReport;
