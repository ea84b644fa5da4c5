use crate::Value;

use indexmap::IndexMap;

/// Named options for an operation, such as the window of a `paginate`.
///
/// Every key has three states: absent, explicitly null, or set to a value.
/// `Params::new().after(Value::Null)` is not the same as `Params::new()`;
/// the service reads an explicit null cursor as "start from the end".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: IndexMap<String, Value>,
}

impl Params {
    pub fn new() -> Params {
        Params::default()
    }

    /// Sets `key`, replacing any previous value.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Params {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn ts(self, ts: impl Into<Value>) -> Params {
        self.set("ts", ts)
    }

    pub fn after(self, cursor: impl Into<Value>) -> Params {
        self.set("after", cursor)
    }

    pub fn before(self, cursor: impl Into<Value>) -> Params {
        self.set("before", cursor)
    }

    pub fn size(self, size: usize) -> Params {
        self.set("size", size)
    }

    pub fn events(self, events: bool) -> Params {
        self.set("events", events)
    }

    pub fn sources(self, sources: bool) -> Params {
        self.set("sources", sources)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether `key` is present, including when it is explicitly null.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (&key[..], value))
    }

    /// Copies every entry of `other` over this one.
    pub fn merge(&mut self, other: &Params) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// The entries whose keys are in `allowed`, in `allowed` order.
    pub fn allowed(&self, allowed: &[&str]) -> Params {
        allowed
            .iter()
            .filter_map(|key| Some((key.to_string(), self.entries.get(*key)?.clone())))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Params {
        Params {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl From<Params> for Value {
    fn from(params: Params) -> Value {
        Value::Object(params.entries)
    }
}
