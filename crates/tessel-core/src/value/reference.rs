use std::fmt;

/// Identifies a stored entity or collection by its path.
///
/// Paths look like `classes/spells/123` or `databases`. Equality is on the
/// path string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ref {
    path: String,
}

impl Ref {
    pub fn new(path: impl Into<String>) -> Ref {
        Ref { path: path.into() }
    }

    /// A reference nested under this one, rendered `self/id`.
    pub fn child(&self, id: impl fmt::Display) -> Ref {
        Ref {
            path: format!("{}/{}", self.path, id),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The last path segment.
    pub fn id(&self) -> &str {
        match self.path.rsplit_once('/') {
            Some((_, id)) => id,
            None => &self.path,
        }
    }

    /// The reference this one is nested under, if any.
    ///
    /// For an instance reference this is its class.
    pub fn parent(&self) -> Option<Ref> {
        let (parent, _) = self.path.rsplit_once('/')?;
        Some(Ref::new(parent))
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ref({:?})", self.path)
    }
}
