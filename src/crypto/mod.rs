//! Cryptographic primitives for SafeVault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - scrypt passphrase-based key derivation (`kdf`)

pub mod encryption;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use safevault::crypto::{encrypt, decrypt, derive_key, ...};
pub use encryption::{decrypt, encrypt, NONCE_LEN};
pub use kdf::{derive_key, generate_salt, ScryptParams, KEY_LEN, SALT_LEN};
