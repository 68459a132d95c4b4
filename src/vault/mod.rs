//! Vault module — the encrypted credential store.
//!
//! This module provides:
//! - `Entry` type and payload structures (`entry`)
//! - In-memory `EntryStore` with upsert/delete/get/list (`store`)
//! - Binary envelope encode/decode (`codec`)
//! - High-level `VaultSession` for create/load/save (`session`)

pub mod codec;
pub mod entry;
pub mod session;
pub mod store;

// Re-export the most commonly used items.
pub use codec::{decode, encode, MIN_ENVELOPE_LEN};
pub use entry::Entry;
pub use session::VaultSession;
pub use store::EntryStore;
