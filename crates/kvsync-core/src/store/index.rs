//! Ordered record index, persisted as a comma-joined string.

use std::fmt;

/// Ids tracked by one store, in discovery order.
///
/// The persisted form has no escaping: ids containing `,` cannot be
/// represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordIndex {
    ids: Vec<String>,
}

impl RecordIndex {
    /// Separator between ids in the persisted form.
    pub const SEPARATOR: &str = ",";

    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the persisted form; absent or empty means no ids.
    pub fn parse(stored: Option<&str>) -> Self {
        let ids = match stored {
            Some(s) if !s.is_empty() => s.split(Self::SEPARATOR).map(str::to_string).collect(),
            _ => Vec::new(),
        };
        Self { ids }
    }

    /// Persisted form.
    pub fn serialize(&self) -> String {
        self.ids.join(Self::SEPARATOR)
    }

    /// Append `id` without checking for an existing entry.
    pub fn push(&mut self, id: impl Into<String>) {
        self.ids.push(id.into());
    }

    /// Append `id` unless already tracked. Returns whether it was appended.
    pub fn insert_unique(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Drop every occurrence of `id`. Returns how many were removed.
    pub fn remove_all(&mut self, id: &str) -> usize {
        let before = self.ids.len();
        self.ids.retain(|tracked| tracked != id);
        before - self.ids.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|tracked| tracked == id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }
}

impl fmt::Display for RecordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
