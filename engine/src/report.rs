//! Per-check error report.

use std::collections::BTreeMap;

/// Validation failure messages collected by one check, keyed by attribute.
///
/// Built fresh by each check; messages for one attribute keep the order
/// their rules were evaluated in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    entries: BTreeMap<String, Vec<String>>,
}

impl ErrorReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure message for an attribute.
    pub fn push(&mut self, attr: impl Into<String>, message: impl Into<String>) {
        self.entries.entry(attr.into()).or_default().push(message.into());
    }

    /// Get the messages recorded for an attribute.
    pub fn messages_for(&self, attr: &str) -> &[String] {
        self.entries.get(attr).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if no failures were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded messages.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Number of attributes with at least one failure.
    pub fn attr_count(&self) -> usize {
        self.entries.len()
    }

    /// Iterate attributes and their messages in attribute-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(attr, messages)| (attr.as_str(), messages.as_slice()))
    }

    /// Merge another report into this one, appending messages per attribute.
    pub fn merge(&mut self, other: ErrorReport) {
        for (attr, messages) in other.entries {
            self.entries.entry(attr).or_default().extend(messages);
        }
    }
}

impl IntoIterator for ErrorReport {
    type Item = (String, Vec<String>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorReport {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
