//! The field-access capability a host entity must provide.

use crate::{Attributes, Value};

/// Read-only access to a record's attribute values.
///
/// The engine treats a `None` return as an absent attribute, equivalent to
/// [`Value::Null`]. Implementations must be side-effect free: validation may
/// read the same attribute more than once.
pub trait Record {
    /// Get the current value of the named attribute.
    fn get(&self, attr: &str) -> Option<&Value>;
}

impl Record for Attributes {
    fn get(&self, attr: &str) -> Option<&Value> {
        self.get(attr)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn get(&self, attr: &str) -> Option<&Value> {
        (**self).get(attr)
    }
}
