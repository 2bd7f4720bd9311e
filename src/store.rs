//! Grouping store: names bucketed by fingerprint.
//!
//! Groups iterate in the order their fingerprint was first seen, and names
//! inside a group keep the order they were inserted. A group only comes into
//! existence together with its first name, so no group is ever empty.

use indexmap::IndexMap;

use crate::model::Record;

#[derive(Debug, Default)]
pub struct GroupingStore {
    groups: IndexMap<String, Vec<String>>,
}

impl GroupingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name` to the group for `fingerprint`, creating the group on
    /// first sighting. Fingerprints compare by exact text; duplicate names
    /// are kept.
    pub fn insert(&mut self, fingerprint: String, name: String) {
        self.groups.entry(fingerprint).or_default().push(name);
    }

    pub fn insert_record(&mut self, record: Record) {
        self.insert(record.fingerprint, record.name);
    }

    /// Number of distinct fingerprints.
    pub fn fingerprint_count(&self) -> usize {
        self.groups.len()
    }

    /// Hands every group over to the caller in first-insertion order.
    pub fn into_groups(self) -> impl Iterator<Item = (String, Vec<String>)> {
        self.groups.into_iter()
    }
}
