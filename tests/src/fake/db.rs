use indexmap::IndexMap;
use std::cmp::Ordering;
use tessel_core::{Ref, Value};

/// An index definition: the instances of `source` whose `terms` path matches,
/// each yielding either the value at `values` or its ref.
#[derive(Debug, Clone)]
pub struct IndexDef {
    name: String,
    source: String,
    terms: Option<Vec<String>>,
    values: Option<Vec<String>>,
}

impl IndexDef {
    pub fn new(name: &str, source: &str) -> Self {
        Self {
            name: name.to_string(),
            source: source.to_string(),
            terms: None,
            values: None,
        }
    }

    /// Match on the value at `path` (e.g. `["data", "element"]`)
    pub fn terms<const N: usize>(mut self, path: [&str; N]) -> Self {
        self.terms = Some(path.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Yield the value at `path` instead of the instance ref
    pub fn values<const N: usize>(mut self, path: [&str; N]) -> Self {
        self.values = Some(path.iter().map(|s| s.to_string()).collect());
        self
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Instance {
    pub(crate) reference: Ref,
    pub(crate) ts: i64,
    pub(crate) data: Value,
}

impl Instance {
    pub(crate) fn to_value(&self) -> Value {
        let class = self.reference.parent().map(Value::from).unwrap_or_default();

        Value::object([
            ("ref", Value::from(self.reference.clone())),
            ("class", class),
            ("ts", Value::from(self.ts)),
            ("data", self.data.clone()),
        ])
    }
}

#[derive(Debug, Default)]
pub(crate) struct Db {
    classes: IndexMap<String, IndexMap<i64, Instance>>,
    indexes: IndexMap<String, IndexDef>,
    next_id: i64,
    ts: i64,
}

impl Db {
    pub(crate) fn define_index(&mut self, index: IndexDef) {
        self.indexes.insert(index.name.clone(), index);
    }

    pub(crate) fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn tick(&mut self) -> i64 {
        self.ts += 1;
        self.ts
    }

    pub(crate) fn len(&self, class: &str) -> usize {
        self.classes.get(class).map(IndexMap::len).unwrap_or(0)
    }

    pub(crate) fn create(&mut self, class: &str, data: Value) -> Ref {
        let id = self.next_id();
        self.create_with_id(class, id, data).reference.clone()
    }

    pub(crate) fn create_with_id(&mut self, class: &str, id: i64, data: Value) -> &Instance {
        let ts = self.tick();
        let reference = Ref::new(format!("classes/{class}")).child(id);

        let instances = self.classes.entry(class.to_string()).or_default();
        instances.insert(
            id,
            Instance {
                reference,
                ts,
                data,
            },
        );
        &instances[&id]
    }

    pub(crate) fn get(&self, reference: &Ref) -> Option<&Instance> {
        let (class, id) = split(reference)?;
        self.classes.get(class)?.get(&id)
    }

    pub(crate) fn get_mut(&mut self, reference: &Ref) -> Option<&mut Instance> {
        let (class, id) = split(reference)?;
        let ts = self.ts + 1;
        let instance = self.classes.get_mut(class)?.get_mut(&id)?;
        instance.ts = ts;
        self.ts = ts;
        Some(instance)
    }

    pub(crate) fn delete(&mut self, reference: &Ref) -> Option<Instance> {
        let (class, id) = split(reference)?;
        self.classes.get_mut(class)?.shift_remove(&id)
    }

    /// The sorted entries of `index` matching `terms`, or `None` if the index
    /// is not defined.
    pub(crate) fn entries(&self, index: &str, terms: Option<&Value>) -> Option<Vec<Value>> {
        let def = self.indexes.get(index)?;

        let mut entries: Vec<Value> = self
            .classes
            .get(&def.source)
            .into_iter()
            .flat_map(IndexMap::values)
            .filter(|instance| match (&def.terms, terms) {
                (Some(path), Some(term)) => select(&instance.to_value(), path) == Some(term),
                _ => true,
            })
            .map(|instance| match &def.values {
                Some(path) => select(&instance.to_value(), path)
                    .cloned()
                    .unwrap_or_default(),
                None => Value::from(instance.reference.clone()),
            })
            .collect();

        entries.sort_by(compare);
        Some(entries)
    }
}

fn split(reference: &Ref) -> Option<(&str, i64)> {
    let rest = reference.as_str().strip_prefix("classes/")?;
    let (class, id) = rest.split_once('/')?;
    Some((class, id.parse().ok()?))
}

fn select<'a>(value: &'a Value, path: &[String]) -> Option<&'a Value> {
    path.iter().try_fold(value, |value, key| value.get(key))
}

/// Total order used for index entries and cursors.
pub(crate) fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Ref(a), Value::Ref(b)) => match (split(a), split(b)) {
            (Some((ac, ai)), Some((bc, bi))) => ac.cmp(bc).then(ai.cmp(&bi)),
            _ => a.cmp(b),
        },
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (a, b) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => rank(a).cmp(&rank(b)),
        },
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::String(_) => 3,
        Value::Ref(_) => 4,
        _ => 5,
    }
}
