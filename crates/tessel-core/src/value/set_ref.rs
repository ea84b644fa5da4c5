use super::Value;

use std::fmt;

/// Describes a set the service resolves on demand: an index match, or an
/// algebra of unions, intersections and joins over other sets.
///
/// A `SetRef` never owns data.
#[derive(Debug, Clone, PartialEq)]
pub struct SetRef {
    value: Box<Value>,
}

impl SetRef {
    pub fn new(value: impl Into<Value>) -> SetRef {
        SetRef {
            value: Box::new(value.into()),
        }
    }

    /// The set's description, e.g. `{match: .., terms: ..}`.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        *self.value
    }
}

impl fmt::Display for SetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SetRef({})", self.value)
    }
}
