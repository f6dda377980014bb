//! Engine error types.

use thiserror::Error;
use vet_schema::RuleKind;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during rule evaluation.
///
/// These are configuration errors and abort the check that hit them. They
/// never appear in the error report, which holds only validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A schema contained a rule kind the engine has no handler for.
    /// This is a defect-detection signal, not a validation failure.
    #[error("Unregistered rule kind: {kind}")]
    UnregisteredRule { kind: RuleKind },
}

impl EngineError {
    pub fn unregistered_rule(kind: RuleKind) -> Self {
        Self::UnregisteredRule { kind }
    }
}
