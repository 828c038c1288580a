//! Service-keyed command table.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::CommandEntry;

/// Mapping from service name to the executable that answers its `help`.
///
/// Iteration is in lexicographic service order. A later insert for the same
/// service replaces the earlier executable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandTable {
    entries: BTreeMap<String, String>,
}

impl CommandTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the executable it replaced, if any.
    pub fn insert(&mut self, entry: CommandEntry) -> Option<String> {
        self.entries.insert(entry.service, entry.executable)
    }

    #[must_use]
    pub fn get(&self, service: &str) -> Option<&str> {
        self.entries.get(service).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Service names in sorted order.
    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(service, executable)` pairs in sorted service order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(service, exe)| (service.as_str(), exe.as_str()))
    }

    /// Keep only the named services.
    ///
    /// Returns the requested names that had no entry, in the order given.
    /// An empty `names` slice keeps everything.
    pub fn retain_services(&mut self, names: &[String]) -> Vec<String> {
        if names.is_empty() {
            return Vec::new();
        }
        let missing = names
            .iter()
            .filter(|name| !self.entries.contains_key(name.as_str()))
            .cloned()
            .collect();
        self.entries.retain(|service, _| names.contains(service));
        missing
    }
}

impl FromIterator<CommandEntry> for CommandTable {
    fn from_iter<I: IntoIterator<Item = CommandEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}
