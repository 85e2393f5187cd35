//! Patch accumulation table

use indexmap::IndexMap;

/// How a recognizer's findings fold into the accumulated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Replace an existing description only when the new one is strictly
    /// longer. On an exact length tie the first writer wins.
    PreferLonger,
    /// Never replace an existing description. Range expansions are
    /// lower-priority than per-version mentions.
    KeepExisting,
}

/// Insertion-ordered mapping from version string to description.
///
/// Built incrementally by the recognizer passes; treated as read-only once
/// handed to the consolidator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchTable {
    entries: IndexMap<String, String>,
}

impl PatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, version: &str) -> Option<&str> {
        self.entries.get(version).map(String::as_str)
    }

    /// Insert one entry under the given merge policy.
    pub fn insert(&mut self, version: String, description: String, policy: MergePolicy) {
        match policy {
            MergePolicy::PreferLonger => match self.entries.get(&version) {
                Some(existing) if description.len() <= existing.len() => {}
                _ => {
                    self.entries.insert(version, description);
                }
            },
            MergePolicy::KeepExisting => {
                self.entries.entry(version).or_insert(description);
            }
        }
    }

    /// Fold another table into this one, entry by entry.
    pub fn merge(&mut self, other: PatchTable, policy: MergePolicy) {
        for (version, description) in other.entries {
            self.insert(version, description, policy);
        }
    }

    pub fn retain(&mut self, keep: impl FnMut(&String, &mut String) -> bool) {
        self.entries.retain(keep);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(version, desc)| (version.as_str(), desc.as_str()))
    }
}

impl FromIterator<(String, String)> for PatchTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
