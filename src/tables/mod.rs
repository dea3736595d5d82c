//! Symbol tables read from the TABLES section

use crate::types::Attributes;

pub mod entry;

pub use entry::{TableEntry, TableEntryFlags};

/// A named table (LAYER, LTYPE, STYLE, ...) and the entries it declared
///
/// The `70` group of a TABLE gives the maximum number of entries that may
/// follow. Fewer entries are normal when the ENDTAB sentinel comes first;
/// more are never read.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Table name (group 2)
    pub name: String,
    /// Declared maximum entry count (group 70)
    pub max_entries: usize,
    /// Entries in file order
    pub entries: Vec<TableEntry>,
}

impl Table {
    /// Create an empty table
    pub fn new(name: impl Into<String>, max_entries: usize) -> Self {
        Table {
            name: name.into(),
            max_entries,
            entries: Vec::new(),
        }
    }

    /// Append an entry; refused once the declared maximum is reached
    pub fn push(&mut self, entry: TableEntry) -> Result<(), TableEntry> {
        if self.is_full() {
            return Err(entry);
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Whether the declared maximum has been reached
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.max_entries
    }

    /// Look up an entry by name (case-insensitive, first match)
    pub fn get(&self, name: &str) -> Option<&TableEntry> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TableEntry> {
        self.entries.iter()
    }

    /// Entry names in file order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Attributes of the named entry
    pub fn attributes_of(&self, name: &str) -> Option<&Attributes> {
        self.get(name).map(|e| &e.attributes)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a TableEntry;
    type IntoIter = std::slice::Iter<'a, TableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
