//! Generic table entry

use crate::types::Attributes;

bitflags::bitflags! {
    // Standard flags shared by all table entries (code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TableEntryFlags: i32 {
        /// Layer frozen (LAYER) or shape file (STYLE)
        const FROZEN = 1;
        /// Layer frozen by default in new viewports
        const FROZEN_IN_NEW_VIEWPORTS = 2;
        /// Layer locked
        const LOCKED = 4;
        /// Entry is externally dependent on an xref
        const XREF_DEPENDENT = 16;
        /// Xref dependency has been resolved
        const XREF_RESOLVED = 32;
        /// Entry was referenced by at least one entity when last edited
        const REFERENCED = 64;
    }
}

/// One entry of a [`Table`](super::Table)
#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    /// Entry name (group 2)
    pub name: String,
    /// Raw flags (group 70)
    pub flags: i32,
    /// Remaining groups in file order
    pub attributes: Attributes,
}

impl TableEntry {
    pub fn new(name: impl Into<String>, flags: i32) -> Self {
        TableEntry {
            name: name.into(),
            flags,
            attributes: Attributes::new(),
        }
    }

    /// Flags interpreted as the standard table-entry bits; unknown bits kept
    pub fn standard_flags(&self) -> TableEntryFlags {
        TableEntryFlags::from_bits_retain(self.flags)
    }

    /// Raw value of a group code
    pub fn attribute(&self, code: &str) -> Option<&str> {
        self.attributes.get(code).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_flags() {
        let entry = TableEntry::new("0", 64 | 4);
        let flags = entry.standard_flags();
        assert!(flags.contains(TableEntryFlags::REFERENCED));
        assert!(flags.contains(TableEntryFlags::LOCKED));
        assert!(!flags.contains(TableEntryFlags::FROZEN));
    }

    #[test]
    fn test_unknown_bits_retained() {
        let entry = TableEntry::new("X", 64 | 256);
        assert_eq!(entry.standard_flags().bits(), 320);
    }

    #[test]
    fn test_attribute_overwrite_keeps_position() {
        let mut entry = TableEntry::new("GEM", 0);
        entry.attributes.insert("62".into(), "7".into());
        entry.attributes.insert("6".into(), "CONTINUOUS".into());
        entry.attributes.insert("62".into(), "1".into());

        assert_eq!(entry.attribute("62"), Some("1"));
        let keys: Vec<_> = entry.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["62", "6"]);
    }
}
