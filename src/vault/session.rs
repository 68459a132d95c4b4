//! High-level vault session used by front-ends.
//!
//! `VaultSession` wraps the envelope codec and file I/O so that the
//! rest of the application can work with simple method calls like
//! `session.upsert(entry)` and `session.save(passphrase)`.
//!
//! The passphrase is borrowed only for the duration of the call that
//! needs it; no derived key is cached between calls, and each save
//! re-derives from a fresh salt.

use std::fs;
use std::path::{Path, PathBuf};

use crate::crypto::ScryptParams;
use crate::errors::{Result, SafeVaultError};
use crate::password::generate_password;

use super::codec;
use super::entry::Entry;
use super::store::EntryStore;

/// Session lifecycle.  `Saved` is implicit after a successful save;
/// dropping the session is the closed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Unopened,
    Open,
}

/// The main vault handle.  Create one with `VaultSession::new`, then
/// `create_new` or `load` before mutating and saving.
///
/// Single-threaded by design: there is no locking, and two sessions
/// saving to the same file is a race the caller must prevent.
pub struct VaultSession {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// KDF cost parameters used for every derive in this session.
    params: ScryptParams,

    /// In-memory entry set.  Meaningful only once the session is open.
    store: EntryStore,

    state: SessionState,
}

impl VaultSession {
    /// Create a session for the vault file at `path`.
    ///
    /// No I/O happens here; the session starts `Unopened` with an
    /// empty store.
    pub fn new(path: impl Into<PathBuf>, params: ScryptParams) -> Self {
        Self {
            path: path.into(),
            params,
            store: EntryStore::new(),
            state: SessionState::Unopened,
        }
    }

    /// Whether a vault file is present on disk.  Does not touch its
    /// contents.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Whether the session has an open entry store.
    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Discard any in-memory state, start an empty vault, and persist
    /// it immediately.
    ///
    /// Overwrites an existing vault file — callers must guard against
    /// accidental data loss themselves.
    pub fn create_new(&mut self, passphrase: &str) -> Result<()> {
        self.store = EntryStore::new();
        self.state = SessionState::Open;
        self.write_encrypted(passphrase)
    }

    /// Read the vault file and decrypt it into memory.
    ///
    /// A missing file opens as an empty vault.  On an authentication
    /// or format failure the session stays unopened and the in-memory
    /// store is untouched.
    pub fn load(&mut self, passphrase: &str) -> Result<()> {
        if !self.exists() {
            self.store = EntryStore::new();
            self.state = SessionState::Open;
            return Ok(());
        }

        let raw = fs::read(&self.path)?;
        let store = codec::decode(&raw, passphrase.as_bytes(), &self.params)?;

        self.store = store;
        self.state = SessionState::Open;
        Ok(())
    }

    /// Re-encrypt the entire current entry set and atomically replace
    /// the vault file.
    ///
    /// Requires an open session.  A fresh salt and nonce are generated
    /// on every call, including retries after a failed save.
    pub fn save(&mut self, passphrase: &str) -> Result<()> {
        if self.state != SessionState::Open {
            return Err(SafeVaultError::VaultNotOpen);
        }
        self.write_encrypted(passphrase)
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Insert or replace an entry by name.
    pub fn upsert(&mut self, entry: Entry) {
        self.store.upsert(entry);
    }

    /// Remove an entry.  A no-op if the name is absent.
    pub fn delete(&mut self, name: &str) {
        self.store.delete(name);
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.store.get(name)
    }

    /// All entries, in no particular order.
    pub fn list(&self) -> Vec<&Entry> {
        self.store.list()
    }

    pub fn entry_count(&self) -> usize {
        self.store.len()
    }

    /// Generate a random password (see `password::generate_password`).
    pub fn generate_password(&self, length: usize) -> String {
        generate_password(length)
    }

    // ------------------------------------------------------------------
    // Persistence internals
    // ------------------------------------------------------------------

    /// Encode the store and write it to disk **atomically**.
    ///
    /// 1. Encrypt the full entry set into an envelope.
    /// 2. Write to a temp file in the same directory.
    /// 3. Rename the temp file over the target path.
    ///
    /// The rename ensures readers never see a half-written vault, and
    /// a crash mid-save leaves the previous file intact.
    fn write_encrypted(&self, passphrase: &str) -> Result<()> {
        let envelope = codec::encode(&self.store, passphrase.as_bytes(), &self.params)?;

        // The temp file is in the same directory so rename is
        // guaranteed to be atomic on the same filesystem.
        let parent = self.path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, &envelope)?;
        fs::rename(&tmp_path, &self.path)?;

        restrict_permissions(&self.path);
        Ok(())
    }
}

/// Best-effort owner-only permissions on the vault file.
///
/// Non-fatal: some platforms do not support the POSIX model, so a
/// failure is logged at warn level rather than returned.
#[cfg(unix)]
fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o600);
    if let Err(e) = fs::set_permissions(path, perms) {
        tracing::warn!(
            "could not set owner-only permissions on {}: {e}",
            path.display()
        );
    }
}

#[cfg(not(unix))]
fn restrict_permissions(path: &Path) {
    // No POSIX permission model to enforce.
    let _ = path;
}
