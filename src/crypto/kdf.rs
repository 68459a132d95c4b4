//! Passphrase-based key derivation using scrypt.
//!
//! scrypt is a memory-hard KDF that makes brute-force search of the
//! master passphrase expensive.  Parameters are configurable via
//! `ScryptParams` (loaded from `.safevault.toml` or sensible defaults)
//! so tests can use cheap settings without touching shared state.

use rand::rngs::OsRng;
use rand::RngCore;
use scrypt::Params;
use zeroize::Zeroizing;

use crate::errors::{Result, SafeVaultError};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Configurable scrypt cost parameters.
///
/// The work factor N is expressed as `log_n` (N = 2^log_n), so it is a
/// power of two by construction.  These map 1:1 to the fields in
/// `Settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScryptParams {
    /// log2 of the CPU/memory cost (default: 15, i.e. N = 32 768).
    pub log_n: u8,
    /// Block size (default: 8).
    pub r: u32,
    /// Parallelism (default: 1).
    pub p: u32,
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self {
            log_n: 15,
            r: 8,
            p: 1,
        }
    }
}

impl ScryptParams {
    /// Cheap parameters for tests — never use these for a real vault.
    pub fn insecure_fast() -> Self {
        Self {
            log_n: 4,
            r: 4,
            p: 1,
        }
    }
}

/// Derive a 32-byte key from a passphrase and salt using scrypt.
///
/// The same passphrase + salt + params will always produce the same
/// key.  The returned key is zeroized when dropped.
///
/// Invalid cost parameters are rejected with `InvalidKdfParams`, never
/// silently clamped.
pub fn derive_key(
    passphrase: &[u8],
    salt: &[u8; SALT_LEN],
    params: &ScryptParams,
) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    if params.log_n == 0 || params.log_n >= 64 {
        return Err(SafeVaultError::InvalidKdfParams(format!(
            "scrypt log_n must be in 1..=63 (got {})",
            params.log_n
        )));
    }
    if params.r < 1 {
        return Err(SafeVaultError::InvalidKdfParams(
            "scrypt r must be at least 1".into(),
        ));
    }
    if params.p < 1 {
        return Err(SafeVaultError::InvalidKdfParams(
            "scrypt p must be at least 1".into(),
        ));
    }

    let scrypt_params = Params::new(params.log_n, params.r, params.p, KEY_LEN)
        .map_err(|e| SafeVaultError::InvalidKdfParams(format!("invalid scrypt params: {e}")))?;

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    scrypt::scrypt(passphrase, salt, &scrypt_params, key.as_mut())
        .map_err(|e| SafeVaultError::InvalidKdfParams(format!("scrypt failed: {e}")))?;

    Ok(key)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_log_n_is_rejected() {
        let params = ScryptParams {
            log_n: 0,
            r: 8,
            p: 1,
        };
        let result = derive_key(b"pw", &[0u8; SALT_LEN], &params);
        assert!(matches!(result, Err(SafeVaultError::InvalidKdfParams(_))));
    }

    #[test]
    fn zero_r_is_rejected() {
        let params = ScryptParams {
            log_n: 4,
            r: 0,
            p: 1,
        };
        let result = derive_key(b"pw", &[0u8; SALT_LEN], &params);
        assert!(matches!(result, Err(SafeVaultError::InvalidKdfParams(_))));
    }

    #[test]
    fn zero_p_is_rejected() {
        let params = ScryptParams {
            log_n: 4,
            r: 4,
            p: 0,
        };
        let result = derive_key(b"pw", &[0u8; SALT_LEN], &params);
        assert!(matches!(result, Err(SafeVaultError::InvalidKdfParams(_))));
    }
}
