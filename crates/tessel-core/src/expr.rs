use crate::{Bytes, QueryFragment, Ref, SetRef, Value};

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use std::{fmt, sync::Arc};

/// An immutable query fragment.
///
/// An `Expr` wraps a [`Value`] without interpreting it: a scalar, an array
/// of sub-expressions, or an object mapping an operation name to its
/// arguments (`{add: [1, 2]}`). Nesting one expression inside another
/// stores the inner one's value, so wrapping is transparent and two
/// expressions are equal exactly when their values are.
///
/// Nothing is validated at construction time. Malformed queries are
/// rejected by the service when executed.
#[derive(Clone, Default, PartialEq)]
pub struct Expr {
    value: Arc<Value>,
}

impl Expr {
    pub fn new(value: impl Into<Value>) -> Expr {
        Expr {
            value: Arc::new(value.into()),
        }
    }

    pub fn null() -> Expr {
        Expr::new(Value::Null)
    }

    /// Builds the `{name: args}` form shared by most operations.
    pub fn call(name: &str, args: impl Into<Expr>) -> Expr {
        Expr::object([(name, args.into())])
    }

    /// Builds an object expression, keeping the field order.
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Expr)>) -> Expr {
        Expr::new(Value::Object(
            fields
                .into_iter()
                .map(|(key, expr)| (key.into(), expr.into_value()))
                .collect(),
        ))
    }

    pub fn array<T: Into<Expr>>(items: impl IntoIterator<Item = T>) -> Expr {
        Expr::new(Value::Array(
            items
                .into_iter()
                .map(|item| item.into().into_value())
                .collect(),
        ))
    }

    /// The wrapped value.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Unwraps the expression into its value.
    pub fn into_value(self) -> Value {
        Arc::unwrap_or_clone(self.value)
    }

    /// Returns a copy of this object expression with `key` set.
    ///
    /// Non-object expressions are returned unchanged.
    pub fn with_field(self, key: &str, value: impl Into<Expr>) -> Expr {
        match self.into_value() {
            Value::Object(mut fields) => {
                fields.insert(key.to_string(), value.into().into_value());
                Expr::new(Value::Object(fields))
            }
            other => Expr::new(other),
        }
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({})", self.value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl AsRef<Value> for Expr {
    fn as_ref(&self) -> &Value {
        &self.value
    }
}

macro_rules! impl_from_value {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl From<$ty> for Expr {
                fn from(src: $ty) -> Self {
                    Expr::new(src)
                }
            }
        )*
    };
}

impl_from_value!(
    Value,
    bool,
    i32,
    i64,
    u32,
    usize,
    f64,
    String,
    &str,
    &String,
    Ref,
    SetRef,
    Bytes,
    DateTime<Utc>,
    NaiveDate,
    QueryFragment,
    IndexMap<String, Value>,
);

impl From<&Expr> for Expr {
    fn from(src: &Expr) -> Self {
        src.clone()
    }
}

impl<T: Into<Expr>> From<Vec<T>> for Expr {
    fn from(src: Vec<T>) -> Self {
        Expr::array(src)
    }
}

impl<T: Into<Expr>, const N: usize> From<[T; N]> for Expr {
    fn from(src: [T; N]) -> Self {
        Expr::array(src)
    }
}

impl<T: Into<Expr>> From<Option<T>> for Expr {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(expr) => expr.into(),
            None => Expr::null(),
        }
    }
}
