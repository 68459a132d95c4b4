//! Binary vault envelope: encryption-side file format.
//!
//! An encoded vault has this layout:
//!
//! ```text
//! [salt: 16 bytes][nonce: 12 bytes][ciphertext + 16-byte auth tag]
//! ```
//!
//! - **Salt**: random per save, input to scrypt key derivation.
//! - **Nonce**: random per save, generated inside `encrypt`.
//! - **Ciphertext**: the AES-256-GCM encryption of the JSON payload.
//!
//! There are no magic bytes and no version field — the whole file is
//! indistinguishable from random data without the passphrase.

use zeroize::Zeroize;

use crate::crypto::{decrypt, derive_key, encrypt, generate_salt, ScryptParams};
use crate::crypto::{NONCE_LEN, SALT_LEN};
use crate::errors::{Result, SafeVaultError};

use super::entry::VaultPayload;
use super::store::EntryStore;

/// Smallest possible envelope: salt + nonce with an empty ciphertext.
pub const MIN_ENVELOPE_LEN: usize = SALT_LEN + NONCE_LEN;

/// Encrypt an entry store into an envelope.
///
/// Generates a fresh salt (and, inside `encrypt`, a fresh nonce) on
/// every call — including retries after a failed save — so neither is
/// ever reused under the same key.
pub fn encode(store: &EntryStore, passphrase: &[u8], params: &ScryptParams) -> Result<Vec<u8>> {
    let salt = generate_salt();
    let key = derive_key(passphrase, &salt, params)?;

    let mut plaintext = serde_json::to_vec(&store.to_payload())
        .map_err(|e| SafeVaultError::InvalidFormat(format!("payload serialization: {e}")))?;

    let blob = encrypt(key.as_ref(), &plaintext);
    plaintext.zeroize();
    let blob = blob?;

    let mut envelope = Vec::with_capacity(SALT_LEN + blob.len());
    envelope.extend_from_slice(&salt);
    envelope.extend_from_slice(&blob);
    Ok(envelope)
}

/// Decrypt an envelope back into an entry store.
///
/// Errors:
/// - `InvalidFormat` if the input is too short to hold a salt and
///   nonce (no decryption attempted), or if the decrypted payload is
///   not the expected JSON structure.
/// - `DecryptionFailed` if authentication fails — wrong passphrase and
///   tampering are not distinguished.
pub fn decode(data: &[u8], passphrase: &[u8], params: &ScryptParams) -> Result<EntryStore> {
    if data.len() < MIN_ENVELOPE_LEN {
        return Err(SafeVaultError::InvalidFormat(
            "file too small to be a valid vault".into(),
        ));
    }

    let (salt_bytes, blob) = data.split_at(SALT_LEN);
    let salt: [u8; SALT_LEN] = salt_bytes
        .try_into()
        .map_err(|_| SafeVaultError::InvalidFormat("bad salt length".into()))?;

    let key = derive_key(passphrase, &salt, params)?;
    let mut plaintext = decrypt(key.as_ref(), blob)?;

    let payload: VaultPayload = serde_json::from_slice(&plaintext).map_err(|e| {
        SafeVaultError::InvalidFormat(format!("payload is not a valid entry set: {e}"))
    })?;
    plaintext.zeroize();

    Ok(EntryStore::from_payload(payload))
}
