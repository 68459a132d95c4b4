//! Entry type and the plaintext payload serialized into the vault.
//!
//! The payload is the JSON structure that gets encrypted:
//!
//! ```text
//! { "entries": { "<name>": { "username": ..., "password": ..., "notes": ... } } }
//! ```
//!
//! Entry names live as map keys, so they are never duplicated inside
//! the per-entry record.  Missing fields deserialize as empty strings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single credential stored in the vault.
///
/// Identity is `name`; updating any other field means replacing the
/// whole entry via `EntryStore::upsert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Unique entry name (e.g. "github").  Must be non-empty.
    pub name: String,
    pub username: String,
    pub password: String,
    pub notes: String,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            password: password.into(),
            notes: notes.into(),
        }
    }
}

/// The fields of an entry as stored in the payload (name is the map key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct EntryRecord {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub notes: String,
}

/// Top-level plaintext payload: everything that gets encrypted.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct VaultPayload {
    #[serde(default)]
    pub entries: HashMap<String, EntryRecord>,
}
