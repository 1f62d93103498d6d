//! Variant rows as returned by the backend.

use std::collections::BTreeMap;

/// A single variant row: column prop -> display value.
///
/// The backend returns rows with an open set of columns, so this is an
/// explicit mapping rather than a fixed struct. Props absent from a row
/// simply render as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantRecord {
    pub fields: BTreeMap<String, String>,
}

impl VariantRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.fields.get(prop).map(String::as_str)
    }

    pub fn insert(&mut self, prop: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(prop.into(), value.into());
    }
}

impl FromIterator<(String, String)> for VariantRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        VariantRecord {
            fields: iter.into_iter().collect(),
        }
    }
}
