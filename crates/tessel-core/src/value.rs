mod bytes;
pub use bytes::Bytes;

mod query_fragment;
pub use query_fragment::QueryFragment;

mod reference;
pub use reference::Ref;

mod set_ref;
pub use set_ref::SetRef;

use crate::Expr;

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use std::fmt;

/// A decoded value, or the literal contents of an expression.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    Int(i64),

    /// Double-precision number
    ///
    /// NaN and the infinities have no JSON form and are encoded as `null`.
    Float(f64),

    /// String value
    String(String),

    /// An ordered sequence of values
    Array(Vec<Value>),

    /// A mapping from keys to values. Equality ignores key order.
    Object(IndexMap<String, Value>),

    /// A reference to a stored entity or collection
    Ref(Ref),

    /// An unmaterialized, server-resolved set
    Set(SetRef),

    /// A point in time, with nanosecond precision
    Timestamp(DateTime<Utc>),

    /// A calendar date
    Date(NaiveDate),

    /// Opaque binary payload
    Bytes(Bytes),

    /// An already-serialized query fragment echoed by the service
    Query(QueryFragment),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Builds an object from key/value pairs, keeping their order.
    pub fn object<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn array<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a float, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&Ref> {
        match self {
            Self::Ref(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn into_array(self) -> Option<Vec<Value>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_object(self) -> Option<IndexMap<String, Value>> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Looks up a key when the value is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(fields) => {
                // Equal objects render the same whatever their insertion order
                let mut fields: Vec<_> = fields.iter().collect();
                fields.sort_by(|(a, _), (b, _)| a.cmp(b));

                f.write_str("{")?;
                for (i, (key, value)) in fields.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Ref(v) => write!(f, "{v}"),
            Self::Set(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(
                f,
                "Time({:?})",
                v.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
            ),
            Self::Date(v) => write!(f, "Date({:?})", v.format("%Y-%m-%d").to_string()),
            Self::Bytes(v) => write!(f, "{v}"),
            Self::Query(v) => write!(f, "{v}"),
        }
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

macro_rules! impl_from {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(src: $ty) -> Self {
                    Self::$variant(src.into())
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i32 => Int,
    i64 => Int,
    u32 => Int,
    f64 => Float,
    String => String,
    &str => String,
    &String => String,
    IndexMap<String, Value> => Object,
    Ref => Ref,
    SetRef => Set,
    DateTime<Utc> => Timestamp,
    NaiveDate => Date,
    Bytes => Bytes,
    QueryFragment => Query,
}

impl From<usize> for Value {
    fn from(src: usize) -> Self {
        Self::Int(src as i64)
    }
}

impl From<Expr> for Value {
    fn from(src: Expr) -> Self {
        src.into_value()
    }
}

impl From<&Expr> for Value {
    fn from(src: &Expr) -> Self {
        src.as_value().clone()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(src: Vec<T>) -> Self {
        Self::array(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
