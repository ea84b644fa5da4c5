use serde::{Deserialize, Deserializer};

/// One entry of the `errors` array in an error envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorData {
    pub code: String,

    #[serde(default)]
    pub description: String,

    /// Path from the root of the query to the sub-expression that failed.
    #[serde(default, deserialize_with = "nullable")]
    pub position: Vec<PathSegment>,

    /// Field-level validation failures.
    #[serde(default, deserialize_with = "nullable")]
    pub failures: Vec<Failure>,
}

/// A step in an error position: either an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(i64),
    Field(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Failure {
    pub code: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, deserialize_with = "nullable")]
    pub field: Vec<String>,
}

impl ErrorData {
    /// Reads the `errors` array out of a response body.
    ///
    /// Returns `None` when the body has no `errors` key, or when it is not
    /// an array of well-formed entries.
    pub fn from_envelope(body: &serde_json::Value) -> Option<Vec<ErrorData>> {
        let errors = body.get("errors")?;
        Vec::<ErrorData>::deserialize(errors).ok()
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
