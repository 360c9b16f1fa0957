// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Library configuration, loadable from a TOML file.
//!
//! Every field has a default so a partial (or empty) file is valid.
//! See `base_config/config.toml` at the repository root.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bytes::DEFAULT_RANDOM_BYTES_SIZE;
use crate::error::KryptoError;

/// Default PBKDF2 pseudo-random function.
pub const DEFAULT_DERIVATION_ALGORITHM: &str = "HmacSHA1";
/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 65536;
/// Default derived key length, in bits.
pub const DEFAULT_KEY_LENGTH: usize = 128;
/// Default generated AES key size, in bits.
pub const DEFAULT_AES_KEY_SIZE: usize = 128;
/// Default generated RSA modulus size, in bits.
pub const DEFAULT_RSA_KEY_SIZE: usize = 1024;

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KryptoConfig {
    /// provider selection
    pub provider: ProviderConfig,
    /// password hashing
    pub password: PasswordHashConfig,
    /// key generation
    pub keys: KeyConfig,
}

/// Provider selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// registered provider name, `None` for the default provider
    pub name: Option<String>,
}

/// Password hashing parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PasswordHashConfig {
    /// PBKDF2 pseudo-random function, e.g. `HmacSHA1` or `HmacSHA256`
    pub derivation_algorithm: String,
    /// PBKDF2 iteration count
    pub iterations: u32,
    /// derived key length in bits
    pub key_length: usize,
    /// salt size in bytes, appended to the derived key in hash records
    pub salt_size: usize,
}

impl Default for PasswordHashConfig {
    fn default() -> Self {
        PasswordHashConfig {
            derivation_algorithm: DEFAULT_DERIVATION_ALGORITHM.to_string(),
            iterations: DEFAULT_ITERATIONS,
            key_length: DEFAULT_KEY_LENGTH,
            salt_size: DEFAULT_RANDOM_BYTES_SIZE,
        }
    }
}

impl PasswordHashConfig {
    /// Check values that would make derivation fail later on.
    pub fn validate(&self) -> Result<(), KryptoError> {
        if self.iterations == 0 {
            return Err(KryptoError::ConfigError(
                "password.iterations must be positive".to_string(),
            ));
        }
        if self.key_length == 0 || self.key_length % 8 != 0 {
            return Err(KryptoError::ConfigError(format!(
                "password.key_length must be a positive multiple of 8, got {}",
                self.key_length
            )));
        }
        if self.salt_size == 0 {
            return Err(KryptoError::ConfigError(
                "password.salt_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Key generation sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyConfig {
    /// AES key size in bits (128, 192 or 256)
    pub aes_key_size: usize,
    /// RSA modulus size in bits
    pub rsa_key_size: usize,
}

impl Default for KeyConfig {
    fn default() -> Self {
        KeyConfig {
            aes_key_size: DEFAULT_AES_KEY_SIZE,
            rsa_key_size: DEFAULT_RSA_KEY_SIZE,
        }
    }
}

impl KeyConfig {
    /// Check values that would make generation fail later on.
    pub fn validate(&self) -> Result<(), KryptoError> {
        if ![128, 192, 256].contains(&self.aes_key_size) {
            return Err(KryptoError::ConfigError(format!(
                "keys.aes_key_size must be 128, 192 or 256, got {}",
                self.aes_key_size
            )));
        }
        if self.rsa_key_size < 512 {
            return Err(KryptoError::ConfigError(format!(
                "keys.rsa_key_size is too small: {}",
                self.rsa_key_size
            )));
        }
        Ok(())
    }
}

impl KryptoConfig {
    /// Load and validate a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, KryptoError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).format(config::FileFormat::Toml))
            .build()?;
        let config: KryptoConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), KryptoError> {
        self.password.validate()?;
        self.keys.validate()
    }
}
