use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::ScryptParams;
use crate::errors::{Result, SafeVaultError};

/// Project-level configuration, loaded from `.safevault.toml`.
///
/// Every field has a sensible default so SafeVault works
/// out-of-the-box without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Vault file name, relative to the project directory.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// log2 of the scrypt CPU/memory cost (default: 15, N = 32 768).
    #[serde(default = "default_scrypt_log_n")]
    pub scrypt_log_n: u8,

    /// scrypt block size (default: 8).
    #[serde(default = "default_scrypt_r")]
    pub scrypt_r: u32,

    /// scrypt parallelism (default: 1).
    #[serde(default = "default_scrypt_p")]
    pub scrypt_p: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_file() -> String {
    "vault.bin".to_string()
}

fn default_scrypt_log_n() -> u8 {
    15
}

fn default_scrypt_r() -> u32 {
    8
}

fn default_scrypt_p() -> u32 {
    1
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_file: default_vault_file(),
            scrypt_log_n: default_scrypt_log_n(),
            scrypt_r: default_scrypt_r(),
            scrypt_p: default_scrypt_p(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".safevault.toml";

    /// Load settings from `<project_dir>/.safevault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SafeVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the vault file.
    pub fn vault_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_file)
    }

    /// The KDF parameters these settings describe.
    pub fn kdf_params(&self) -> ScryptParams {
        ScryptParams {
            log_n: self.scrypt_log_n,
            r: self.scrypt_r,
            p: self.scrypt_p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_file_returns_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.vault_file, "vault.bin");
        assert_eq!(settings.kdf_params(), ScryptParams::default());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".safevault.toml"),
            "vault_file = \"secrets.vault\"\nscrypt_log_n = 12\n",
        )
        .unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.vault_file, "secrets.vault");
        assert_eq!(settings.scrypt_log_n, 12);
        assert_eq!(settings.scrypt_r, 8);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(".safevault.toml"), "vault_file = [oops").unwrap();

        let result = Settings::load(dir.path());
        assert!(matches!(result, Err(SafeVaultError::ConfigError(_))));
    }
}
