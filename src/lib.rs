pub mod config;
pub mod crypto;
pub mod errors;
pub mod password;
pub mod vault;

pub use errors::{Result, SafeVaultError};
pub use vault::{Entry, EntryStore, VaultSession};
