//! First-match name lookup shared by the attribute, dimension, and
//! variable registries.
//!
//! Containers may legally hold several entries with the same name; the
//! first entry in natural order shadows the rest, and that ordering is a
//! compatibility requirement, not an accident. An empty query never
//! matches, even when an entry itself has an empty name; the scan is
//! skipped entirely.

use arrayfile_store::{AttributeRecord, DimensionRecord, VariableRecord};

pub(crate) trait Named {
    fn name(&self) -> &str;
}

impl Named for AttributeRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for DimensionRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for VariableRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Linear scan for the first entry named `name`, with its position.
pub(crate) fn find_first<'a, T: Named>(entries: &'a [T], name: &str) -> Option<(usize, &'a T)> {
    if name.is_empty() {
        return None;
    }
    entries
        .iter()
        .enumerate()
        .find(|(_, entry)| entry.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(names: &[&str]) -> Vec<DimensionRecord> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| DimensionRecord {
                name: n.to_string(),
                size: i as u64,
            })
            .collect()
    }

    #[test]
    fn absent_name_finds_nothing() {
        let entries = dims(&["M", "N"]);
        assert!(find_first(&entries, "R").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let entries = dims(&["M", "N", "M"]);
        let (index, entry) = find_first(&entries, "M").unwrap();
        assert_eq!(index, 0);
        assert_eq!(entry.size, 0);
        // Stable across repeated calls.
        assert_eq!(find_first(&entries, "M").unwrap().0, 0);
    }

    #[test]
    fn empty_query_skips_the_scan() {
        // Even an entry whose own name is empty is not reachable.
        let entries = dims(&["", "M"]);
        assert!(find_first(&entries, "").is_none());
    }
}
