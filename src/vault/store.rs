//! In-memory entry store.
//!
//! A keyed collection of `Entry` values, living only in memory.  The
//! codec turns it into an encrypted file and back; nothing here touches
//! disk or crypto.

use std::collections::HashMap;

use super::entry::{Entry, EntryRecord, VaultPayload};

/// Mapping from entry name to `Entry`.
///
/// At most one entry per name; inserting an existing name replaces the
/// whole entry.  Iteration order is unspecified and must not be relied
/// upon by callers — it never leaks into the persisted format.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EntryStore {
    entries: HashMap<String, Entry>,
}

impl EntryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry by name (whole-entry replace, no
    /// field merging).
    pub fn upsert(&mut self, entry: Entry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    /// Remove an entry.  A no-op if the name is absent.
    pub fn delete(&mut self, name: &str) {
        self.entries.remove(name);
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// All entries, in no particular order.
    pub fn list(&self) -> Vec<&Entry> {
        self.entries.values().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert to the serializable payload form.
    pub(crate) fn to_payload(&self) -> VaultPayload {
        let entries = self
            .entries
            .values()
            .map(|e| {
                (
                    e.name.clone(),
                    EntryRecord {
                        username: e.username.clone(),
                        password: e.password.clone(),
                        notes: e.notes.clone(),
                    },
                )
            })
            .collect();
        VaultPayload { entries }
    }

    /// Rebuild a store from a decrypted payload.
    pub(crate) fn from_payload(payload: VaultPayload) -> Self {
        let entries = payload
            .entries
            .into_iter()
            .map(|(name, record)| {
                let entry = Entry {
                    name: name.clone(),
                    username: record.username,
                    password: record.password,
                    notes: record.notes,
                };
                (name, entry)
            })
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_whole_entry() {
        let mut store = EntryStore::new();
        store.upsert(Entry::new("github", "alice", "pw1", "work account"));
        store.upsert(Entry::new("github", "alice", "pw2", ""));

        let entry = store.get("github").unwrap();
        assert_eq!(entry.password, "pw2");
        // Notes were replaced, not merged.
        assert_eq!(entry.notes, "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_absent_name_is_a_noop() {
        let mut store = EntryStore::new();
        store.delete("nonexistent");
        assert!(store.is_empty());
    }

    #[test]
    fn payload_roundtrip_preserves_entries() {
        let mut store = EntryStore::new();
        store.upsert(Entry::new("a", "u1", "p1", "n1"));
        store.upsert(Entry::new("b", "u2", "p2", ""));

        let rebuilt = EntryStore::from_payload(store.to_payload());
        assert_eq!(rebuilt, store);
    }
}
