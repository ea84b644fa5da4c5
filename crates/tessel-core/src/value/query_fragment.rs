use std::fmt;

/// A query fragment returned by the service, such as a stored lambda.
///
/// The raw wire form is kept verbatim so the fragment can be embedded in
/// later expressions without being reinterpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFragment {
    raw: serde_json::Value,
}

impl QueryFragment {
    pub fn new(raw: serde_json::Value) -> QueryFragment {
        QueryFragment { raw }
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.raw
    }
}

impl fmt::Display for QueryFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QueryV({})", self.raw)
    }
}
