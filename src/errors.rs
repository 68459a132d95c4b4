use thiserror::Error;

/// All errors that can occur in SafeVault.
///
/// Low-level cipher and parse failures never escape the vault codec
/// raw: they are translated into `DecryptionFailed` or
/// `InvalidFormat` before crossing the component boundary.
#[derive(Debug, Error)]
pub enum SafeVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong passphrase and tampered ciphertext are deliberately
    /// indistinguishable to the caller.
    #[error("Decryption failed — wrong passphrase or corrupted vault")]
    DecryptionFailed,

    #[error("Invalid KDF parameters: {0}")]
    InvalidKdfParams(String),

    // --- Vault errors ---
    #[error("Invalid vault format: {0}")]
    InvalidFormat(String),

    #[error("Vault is not open — call create_new or load first")]
    VaultNotOpen,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for SafeVault results.
pub type Result<T> = std::result::Result<T, SafeVaultError>;
