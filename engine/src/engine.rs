//! Rule evaluation.

use std::collections::HashMap;

use vet_core::{Record, Value};
use vet_schema::{RuleKind, RuleParam, Schema};

use crate::error::{EngineError, EngineResult};
use crate::report::ErrorReport;

/// Stand-in for attributes the record does not expose.
static NULL: Value = Value::Null;

/// A rule handler: given the attribute name, its current value, and the
/// declared parameter, returns the failure message if the rule fails.
pub type Handler = fn(&str, &Value, &RuleParam) -> Option<String>;

/// Outcome of a full validation: the boolean-or-map duality as a tagged type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// Every declared rule passed.
    Valid,
    /// At least one rule failed; the report holds every failure.
    Invalid(ErrorReport),
}

impl Validity {
    /// Check if the record was valid.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// Get the error report, if the record was invalid.
    pub fn report(&self) -> Option<&ErrorReport> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(report) => Some(report),
        }
    }

    /// Consume into the error report, if the record was invalid.
    pub fn into_report(self) -> Option<ErrorReport> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(report) => Some(report),
        }
    }
}

/// The rule evaluator.
///
/// Holds a fixed dispatch table from rule kind to handler. Evaluation walks
/// a schema attribute by attribute against a record's current values and
/// accumulates failure messages; it never short-circuits on a failure, so
/// every rule of every attribute contributes independently to the report.
#[derive(Debug)]
pub struct RuleEngine {
    handlers: HashMap<RuleKind, Handler>,
}

impl RuleEngine {
    /// Create an engine with the three built-in handlers installed.
    pub fn new() -> Self {
        let mut handlers: HashMap<RuleKind, Handler> = HashMap::new();
        handlers.insert(RuleKind::Presence, check_presence);
        handlers.insert(RuleKind::Format, check_format);
        handlers.insert(RuleKind::Type, check_type);
        Self { handlers }
    }

    /// Create an engine with an explicit handler table.
    ///
    /// A schema rule whose kind is missing from the table surfaces as
    /// [`EngineError::UnregisteredRule`] at evaluation time.
    pub fn with_handlers(handlers: HashMap<RuleKind, Handler>) -> Self {
        Self { handlers }
    }

    /// Run every declared rule against the record and collect the report.
    ///
    /// Attributes are visited in schema order and rules in kind order, so
    /// the report is deterministic for a fixed schema. An attribute the
    /// record does not expose is treated as null.
    pub fn check<R: Record + ?Sized>(
        &self,
        schema: &Schema,
        record: &R,
    ) -> EngineResult<ErrorReport> {
        let mut report = ErrorReport::new();

        for (attr, rules) in schema.iter() {
            let value = record.get(attr).unwrap_or(&NULL);

            for (kind, param) in rules.iter() {
                let handler = self
                    .handlers
                    .get(&kind)
                    .ok_or(EngineError::UnregisteredRule { kind })?;

                if let Some(message) = handler(attr, value, param) {
                    report.push(attr, message);
                }
            }
        }

        Ok(report)
    }

    /// Check the record, reporting only whether every rule passed.
    pub fn is_valid<R: Record + ?Sized>(&self, schema: &Schema, record: &R) -> EngineResult<bool> {
        Ok(self.check(schema, record)?.is_empty())
    }

    /// Check the record, returning the tagged outcome.
    pub fn validate<R: Record + ?Sized>(
        &self,
        schema: &Schema,
        record: &R,
    ) -> EngineResult<Validity> {
        let report = self.check(schema, record)?;
        if report.is_empty() {
            Ok(Validity::Valid)
        } else {
            Ok(Validity::Invalid(report))
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ========== Built-in rule handlers ==========
//
// A handler receiving a parameter of the wrong shape records nothing; the
// registry keys rule sets by the parameter's own kind, which makes that
// case unreachable for schemas built through it.

/// Presence rule: the value's presence state must equal the desired state.
fn check_presence(attr: &str, value: &Value, param: &RuleParam) -> Option<String> {
    let RuleParam::Presence(desired) = param else {
        return None;
    };

    match (*desired, value.is_present()) {
        (true, false) => Some(format!("{} should be present!", attr)),
        (false, true) => Some(format!("{} should not be present!", attr)),
        _ => None,
    }
}

/// Format rule: the value's text form must match the pattern.
/// A value with no text form (null, containers) fails.
fn check_format(attr: &str, value: &Value, param: &RuleParam) -> Option<String> {
    let RuleParam::Format(pattern) = param else {
        return None;
    };

    let matched = value
        .as_text()
        .map(|text| pattern.is_match(&text))
        .unwrap_or(false);

    if matched {
        None
    } else {
        Some(format!("{} has invalid format!", attr))
    }
}

/// Type rule: the value's runtime type must satisfy the declared type.
fn check_type(attr: &str, value: &Value, param: &RuleParam) -> Option<String> {
    let RuleParam::Type(expected) = param else {
        return None;
    };

    if expected.matches(value) {
        None
    } else {
        Some(format!("{} should be an instance of {}!", attr, expected.name()))
    }
}
