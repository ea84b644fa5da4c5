use crate::query;

use tessel_core::{Expr, Value};

use std::{fmt, sync::Arc};

/// A transformation the service applies to a window before returning it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Stage {
    Map(Expr),
    Filter(Expr),
    Foreach(Expr),
}

impl Stage {
    /// Wraps `collection` in this stage's form.
    pub(crate) fn apply(&self, collection: Expr) -> Expr {
        match self {
            Stage::Map(lambda) => query::map(collection, lambda),
            Stage::Filter(lambda) => query::filter(collection, lambda),
            Stage::Foreach(lambda) => query::foreach(collection, lambda),
        }
    }
}

/// A host-side function applied to each element after decoding.
#[derive(Clone)]
pub(crate) struct Postprocess(Arc<dyn Fn(Value) -> Value + Send + Sync>);

impl Postprocess {
    pub(crate) fn new(f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Postprocess {
        Postprocess(Arc::new(f))
    }

    pub(crate) fn apply(&self, value: Value) -> Value {
        (self.0)(value)
    }
}

impl fmt::Debug for Postprocess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Postprocess(..)")
    }
}
