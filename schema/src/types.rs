//! Schema definition types.

use regex_lite::Regex;
use std::collections::BTreeMap;
use std::fmt;
use vet_core::Value;

/// The closed set of built-in rule kinds.
///
/// The `Ord` derive fixes per-attribute evaluation order: Presence rules run
/// before Format rules, which run before Type rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleKind {
    /// Require the attribute to be present (or absent).
    Presence,
    /// Require the attribute's text form to match a pattern.
    Format,
    /// Require the attribute's value to be of a declared type.
    Type,
}

impl RuleKind {
    /// Stable name for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Presence => "presence",
            RuleKind::Format => "format",
            RuleKind::Type => "type",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarable value type identifier, for Type rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
}

impl ValueType {
    /// Human-readable type name, used in failure messages.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Bool => "Bool",
            ValueType::Int => "Int",
            ValueType::Float => "Float",
            ValueType::String => "String",
            ValueType::List => "List",
            ValueType::Map => "Map",
        }
    }

    /// Check whether a runtime value satisfies this declared type.
    ///
    /// Tag equality, plus Int accepted where Float is declared. Null matches
    /// no declared type.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (ValueType::Bool, Value::Bool(_)) => true,
            (ValueType::Int, Value::Int(_)) => true,
            (ValueType::Float, Value::Float(_)) => true,
            (ValueType::Float, Value::Int(_)) => true,
            (ValueType::String, Value::String(_)) => true,
            (ValueType::List, Value::List(_)) => true,
            (ValueType::Map, Value::Map(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rule parameter, tagged by rule kind.
///
/// Carrying the parameter in a tagged union makes "parameter shape matches
/// the rule kind" structural: a Presence rule cannot hold a pattern.
#[derive(Debug, Clone)]
pub enum RuleParam {
    /// Desired presence state. `true` requires the value to be present,
    /// `false` requires it to be absent.
    Presence(bool),
    /// Compiled pattern the value's text form must match.
    Format(Regex),
    /// Declared value type.
    Type(ValueType),
}

impl RuleParam {
    /// The rule kind this parameter belongs to.
    pub fn kind(&self) -> RuleKind {
        match self {
            RuleParam::Presence(_) => RuleKind::Presence,
            RuleParam::Format(_) => RuleKind::Format,
            RuleParam::Type(_) => RuleKind::Type,
        }
    }
}

/// The rules declared for a single attribute.
///
/// At most one rule of a given kind; re-declaring a kind overwrites the
/// earlier parameter (last-write-wins). Created lazily at first insertion,
/// so a RuleSet is never empty.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<RuleKind, RuleParam>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, keyed by the parameter's own kind.
    /// Returns the displaced parameter when a rule of that kind existed.
    pub fn insert(&mut self, param: RuleParam) -> Option<RuleParam> {
        self.rules.insert(param.kind(), param)
    }

    /// Get the parameter for a rule kind, if declared.
    pub fn get(&self, kind: RuleKind) -> Option<&RuleParam> {
        self.rules.get(&kind)
    }

    /// Check if a rule of the given kind is declared.
    pub fn has(&self, kind: RuleKind) -> bool {
        self.rules.contains_key(&kind)
    }

    /// Iterate declared rules in RuleKind order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleKind, &RuleParam)> {
        self.rules.iter().map(|(kind, param)| (*kind, param))
    }

    /// Number of declared rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no rules are declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The full set of declared validation rules for one entity type.
///
/// Maps attribute name to [`RuleSet`]. Attribute iteration order is sorted
/// by name, so evaluation over a fixed schema is deterministic.
#[derive(Debug, Clone)]
pub struct Schema {
    attrs: BTreeMap<String, RuleSet>,
}

impl Schema {
    /// Create an empty schema.
    ///
    /// `const` so a shared static empty schema can back entity types that
    /// never declared any rules.
    pub const fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Get the rule set for an attribute, if any rules were declared.
    pub fn rules_for(&self, attr: &str) -> Option<&RuleSet> {
        self.attrs.get(attr)
    }

    /// Get or lazily create the rule set for an attribute.
    pub fn rules_for_mut(&mut self, attr: &str) -> &mut RuleSet {
        self.attrs.entry(attr.to_string()).or_default()
    }

    /// Iterate attributes and their rule sets in attribute-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSet)> {
        self.attrs.iter().map(|(attr, rules)| (attr.as_str(), rules))
    }

    /// Number of attributes with declared rules.
    pub fn attr_count(&self) -> usize {
        self.attrs.len()
    }

    /// Total number of declared rules across all attributes.
    pub fn rule_count(&self) -> usize {
        self.attrs.values().map(RuleSet::len).sum()
    }

    /// Check if no rules are declared at all.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}
