use serde::{Deserialize, Serialize};
use std::fmt;

/// The guest list, in invite order.
///
/// Serializes as a bare JSON array of strings. Duplicate names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestList(Vec<String>);

impl GuestList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a guest to the end of the list.
    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|g| g == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for GuestList {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl<S: Into<String>> FromIterator<S> for GuestList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a GuestList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Renders like a plain Rust sequence: `["Mary", "Don"]`, or `[]` when empty.
impl fmt::Display for GuestList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
