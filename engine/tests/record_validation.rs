//! End-to-end validation of a host entity through the Record capability.
//!
//! Mirrors the canonical scenario: presence on `a`, absence on `b`,
//! format `\d+` on `c`, type List on `d`.

use vet_core::{Record, Value};
use vet_engine::{RuleEngine, Validity};
use vet_schema::{SchemaRegistry, ValueType};

/// A host entity that stores its attribute values directly.
struct Sample {
    a: Value,
    b: Value,
    c: Value,
    d: Value,
}

impl Record for Sample {
    fn get(&self, attr: &str) -> Option<&Value> {
        match attr {
            "a" => Some(&self.a),
            "b" => Some(&self.b),
            "c" => Some(&self.c),
            "d" => Some(&self.d),
            _ => None,
        }
    }
}

/// Declarations run once, at type-definition time.
fn sample_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry
        .entity("Sample")
        .presence("a", true)
        .and_then(|e| e.presence("b", false))
        .and_then(|e| e.format("c", r"\d+"))
        .and_then(|e| e.type_of("d", ValueType::List))
        .unwrap();
    registry
}

#[test]
fn test_happy_path() {
    // GIVEN
    let registry = sample_registry();
    let engine = RuleEngine::new();
    let sample = Sample {
        a: Value::Bool(true),
        b: Value::Null,
        c: Value::String("132123".into()),
        d: Value::List(vec![]),
    };
    let schema = registry.schema_for("Sample");

    // WHEN/THEN
    assert!(engine.is_valid(schema, &sample).unwrap());
    assert_eq!(engine.validate(schema, &sample).unwrap(), Validity::Valid);
}

#[test]
fn test_every_rule_failing_reports_every_attribute() {
    // GIVEN
    let registry = sample_registry();
    let engine = RuleEngine::new();
    let sample = Sample {
        a: Value::Null,
        b: Value::String("Here you go".into()),
        c: Value::String("RSpec".into()),
        d: Value::Map(Default::default()),
    };
    let schema = registry.schema_for("Sample");

    // WHEN
    assert!(!engine.is_valid(schema, &sample).unwrap());
    let report = engine
        .validate(schema, &sample)
        .unwrap()
        .into_report()
        .unwrap();

    // THEN - each attribute keyed by its own failure, independent of the rest
    assert_eq!(report.messages_for("a"), &["a should be present!"]);
    assert_eq!(report.messages_for("b"), &["b should not be present!"]);
    assert_eq!(report.messages_for("c"), &["c has invalid format!"]);
    assert_eq!(report.messages_for("d"), &["d should be an instance of List!"]);
    assert_eq!(report.attr_count(), 4);
    assert_eq!(report.len(), 4);
}

#[test]
fn test_repeated_checks_agree() {
    // GIVEN
    let registry = sample_registry();
    let engine = RuleEngine::new();
    let sample = Sample {
        a: Value::Null,
        b: Value::Null,
        c: Value::String("42".into()),
        d: Value::List(vec![]),
    };
    let schema = registry.schema_for("Sample");

    // WHEN - the record does not change between checks
    let first = engine.validate(schema, &sample).unwrap();
    let second = engine.validate(schema, &sample).unwrap();

    // THEN - same verdict, same report
    assert_eq!(first, second);
    let report = first.into_report().unwrap();
    assert_eq!(report.messages_for("a"), &["a should be present!"]);
    assert_eq!(report.len(), 1);
}

#[test]
fn test_partial_failure_reports_only_failing_attributes() {
    // GIVEN
    let registry = sample_registry();
    let engine = RuleEngine::new();
    let sample = Sample {
        a: Value::String("set".into()),
        b: Value::Null,
        c: Value::String("nope".into()),
        d: Value::List(vec![Value::Int(1)]),
    };
    let schema = registry.schema_for("Sample");

    // WHEN
    let report = engine.check(schema, &sample).unwrap();

    // THEN
    assert!(report.messages_for("a").is_empty());
    assert!(report.messages_for("b").is_empty());
    assert_eq!(report.messages_for("c"), &["c has invalid format!"]);
    assert!(report.messages_for("d").is_empty());
    assert_eq!(report.attr_count(), 1);
}

#[test]
fn test_redeclaration_overwrites_earlier_rule() {
    // GIVEN - presence declared true, then re-declared false
    let mut registry = SchemaRegistry::new();
    registry
        .entity("Sample")
        .presence("a", true)
        .and_then(|e| e.presence("a", false))
        .unwrap();
    let engine = RuleEngine::new();
    let schema = registry.schema_for("Sample");

    let absent = Sample {
        a: Value::Null,
        b: Value::Null,
        c: Value::Null,
        d: Value::Null,
    };

    // THEN - only the later declaration applies
    assert!(engine.is_valid(schema, &absent).unwrap());
}
