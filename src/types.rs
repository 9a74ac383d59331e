//! Shared value types for the profile record

use serde::{Deserialize, Serialize};

/// One `label: value` row of an info section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoEntry {
    pub label: String,
    pub value: String,
}

impl InfoEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Ordered label → value mapping. Iteration follows insertion order.
///
/// Serialized as a plain array of `{ label, value }` tables so the order
/// survives TOML and JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InfoList {
    entries: Vec<InfoEntry>,
}

impl InfoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A repeated label keeps its first position and takes
    /// the new value.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let entry = InfoEntry::new(label, value);
        match self.entries.iter_mut().find(|e| e.label == entry.label) {
            Some(existing) => existing.value = entry.value,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &InfoEntry> {
        self.entries.iter()
    }

    /// Entries other than `reserved`, in order
    pub fn rows_excluding<'a>(&'a self, reserved: &'a str) -> impl Iterator<Item = &'a InfoEntry> {
        self.entries.iter().filter(move |e| e.label != reserved)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for InfoList {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut list = InfoList::new();
        for (label, value) in iter {
            list.insert(label, value);
        }
        list
    }
}

// Route deserialization through `insert` so duplicate labels collapse the
// same way regardless of where the list came from.
impl<'de> Deserialize<'de> for InfoList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<InfoEntry>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(|e| (e.label, e.value)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let list: InfoList = [("Height", "180 cm"), ("Blood Group", "B+"), ("Gotra", "Kashyap")]
            .into_iter()
            .collect();
        let labels: Vec<&str> = list.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Height", "Blood Group", "Gotra"]);
    }

    #[test]
    fn test_duplicate_label_keeps_position_takes_value() {
        let mut list = InfoList::new();
        list.insert("A", "1");
        list.insert("B", "2");
        list.insert("A", "3");

        assert_eq!(list.len(), 2);
        assert_eq!(list.get("A"), Some("3"));
        assert_eq!(list.iter().next().map(|e| e.label.as_str()), Some("A"));
    }

    #[test]
    fn test_rows_excluding_reserved_label() {
        let list: InfoList = [("Siblings", "1"), ("Description", "prose"), ("Mother", "Teacher")]
            .into_iter()
            .collect();
        let rows: Vec<&str> = list.rows_excluding("Description").map(|e| e.label.as_str()).collect();
        assert_eq!(rows, vec!["Siblings", "Mother"]);
        assert_eq!(list.get("Description"), Some("prose"));
    }

    #[test]
    fn test_deserialize_collapses_duplicates() {
        let json = r#"[{"label":"X","value":"1"},{"label":"Y","value":"2"},{"label":"X","value":"3"}]"#;
        let list: InfoList = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get("X"), Some("3"));
    }

    #[test]
    fn test_empty_list() {
        let list: InfoList = serde_json::from_str("[]").unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn test_serializes_as_array() {
        let list: InfoList = [("Rasi", "Mesh")].into_iter().collect();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"label":"Rasi","value":"Mesh"}]"#);
    }
}
