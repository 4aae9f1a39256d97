//! Grammeme mapping table
//!
//! Many-to-one lookup from native grammemes to target markers. A native
//! marker without an entry is a defined "no mapping" outcome, surfaced as
//! `None` at every call site.

use std::collections::HashMap;

use crate::tagset::Tagset;
use crate::types::TargetMarker;

/// Immutable native -> target lookup table
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: HashMap<String, TargetMarker>,
}

impl MappingTable {
    /// Build the flat table from a tagset's categorised mapping
    pub fn from_tagset(tagset: &Tagset) -> Self {
        tagset
            .mapping()
            .categories
            .values()
            .flat_map(|entries| entries.iter())
            .map(|(native, target)| (native.as_str(), target.as_str()))
            .collect()
    }

    /// Target marker for a native grammeme, if one exists
    #[inline]
    pub fn lookup(&self, marker: &str) -> Option<&TargetMarker> {
        self.entries.get(marker)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All distinct target markers the table can produce
    pub fn targets(&self) -> impl Iterator<Item = &TargetMarker> {
        let mut targets: Vec<&TargetMarker> = self.entries.values().collect();
        targets.sort();
        targets.dedup();
        targets.into_iter()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for MappingTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(native, target)| (native.to_string(), TargetMarker::new(target)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_table() -> MappingTable {
        MappingTable::from_tagset(Tagset::builtin().unwrap())
    }

    #[test]
    fn test_lookup_hit() {
        let table = builtin_table();
        assert_eq!(table.lookup("S").map(TargetMarker::as_str), Some("NOUN"));
        assert_eq!(table.lookup("МН").map(TargetMarker::as_str), Some("plur"));
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let table = builtin_table();
        assert!(table.lookup("ИЗЪЯВ").is_none());
        assert!(table.lookup("").is_none());
        assert!(table.lookup("КР").is_none());
    }

    #[test]
    fn test_table_holds_only_grammemes() {
        let table = builtin_table();
        assert_eq!(table.len(), 33);
        // end-of-sentence is a boundary token, not a grammeme
        assert!(table.lookup("EOS").is_none());
    }

    #[test]
    fn test_many_to_one_entries() {
        let table = builtin_table();
        assert_eq!(table.lookup("РОД"), table.lookup("ПАРТ"));
        assert_eq!(table.lookup("ПР"), table.lookup("МЕСТН"));
        assert_eq!(table.lookup("НАСТ"), table.lookup("НЕПРОШ"));
    }

    #[test]
    fn test_targets_are_distinct() {
        let table = builtin_table();
        let targets: Vec<&str> = table.targets().map(TargetMarker::as_str).collect();
        assert_eq!(targets.iter().filter(|t| **t == "gent").count(), 1);
        assert!(targets.len() < table.len());
    }

    #[test]
    fn test_from_iterator() {
        let table: MappingTable = [("a", "x"), ("b", "x")].into_iter().collect();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.targets().count(), 1);
    }
}
