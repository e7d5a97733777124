//! Shared table types used by every sizing component.
//!
//! Both the breakpoint table and the size table are *ordered*: the position of
//! an entry is what makes it the "smallest" or "next" breakpoint, so they are
//! stored as a sequence of `(name, value)` pairs rather than a hash map. Lookup
//! is by exact name; nothing here ever re-sorts by value.
//!
//! When (de)serialized they look like plain maps:
//!
//! ```toml
//! [breakpoints]
//! s = 640
//! m = 1024
//! ```
//!
//! Entry order in the document is entry order in the table.

use serde::de::{Deserialize, Deserializer, Error as _, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Breakpoints shipped with the library, smallest first.
pub const DEFAULT_BREAKPOINTS: &[(&str, u32)] = &[
    ("s", 640),
    ("m", 1024),
    ("l", 1280),
    ("xl", 1920),
    ("xxl", 2560),
];

/// Breakpoint name → breakpoint width in pixels (where its range ends).
pub type BreakpointTable = OrderedTable<u32>;

/// Breakpoint name → size declaration (`"50vw"`, `"320px"`).
pub type SizeTable = OrderedTable<String>;

/// Owned copy of [`DEFAULT_BREAKPOINTS`].
pub fn default_breakpoints() -> BreakpointTable {
    DEFAULT_BREAKPOINTS
        .iter()
        .map(|&(name, width)| (name, width))
        .collect()
}

/// An insertion-ordered table keyed by breakpoint name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedTable<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedTable<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite an entry.
    ///
    /// A new name is appended at the end. An existing name keeps its position
    /// and the previous value is returned.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedTable<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for OrderedTable<String> {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, decl)| (name, decl.to_string()))
            .collect()
    }
}

impl<V: Serialize> Serialize for OrderedTable<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct OrderedTableVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedTableVisitor<V> {
    type Value = OrderedTable<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a table of breakpoint names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = OrderedTable::new();
        while let Some((name, value)) = access.next_entry::<String, V>()? {
            if table.contains(&name) {
                return Err(A::Error::custom(format!("duplicate breakpoint '{name}'")));
            }
            table.insert(name, value);
        }
        Ok(table)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedTable<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedTableVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_breakpoints_in_ascending_order() {
        let table = default_breakpoints();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["s", "m", "l", "xl", "xxl"]);
        assert_eq!(table.get("xl"), Some(&1920));
    }

    #[test]
    fn insert_appends_new_names() {
        let mut table = BreakpointTable::new();
        table.insert("b", 10);
        table.insert("a", 5);
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn insert_existing_name_keeps_position() {
        let mut table: BreakpointTable = [("s", 640), ("m", 1024)].into_iter().collect();
        assert_eq!(table.insert("s", 600), Some(640));
        let entries: Vec<(&str, u32)> = table.iter().map(|(n, v)| (n, *v)).collect();
        assert_eq!(entries, vec![("s", 600), ("m", 1024)]);
    }

    #[test]
    fn lookup_is_by_exact_name() {
        let table: SizeTable = [("s", "50vw")].into_iter().collect();
        assert_eq!(table.get("s").map(String::as_str), Some("50vw"));
        assert!(table.get("S").is_none());
    }

    #[test]
    fn deserialize_keeps_document_order() {
        // Deliberately not alphabetical.
        let table: BreakpointTable = toml::from_str("xs = 320\nmd = 992\nsm = 768\n").unwrap();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["xs", "md", "sm"]);
    }

    #[test]
    fn serialize_as_ordered_map() {
        let table: SizeTable = [("m", "50vw"), ("s", "100vw")].into_iter().collect();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"m":"50vw","s":"100vw"}"#);
    }

    #[test]
    fn deserialize_rejects_non_map() {
        let result: Result<BreakpointTable, _> = serde_json::from_str("[1, 2]");
        assert!(result.is_err());
    }
}
