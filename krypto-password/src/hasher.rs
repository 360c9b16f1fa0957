// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::sync::Arc;

use krypto_keys::PasswordBasedKey;
use krypto_logging::krypto_trace;
use krypto_models::bytes::{concat, from_base64, to_base64};
use krypto_models::config::{KryptoConfig, PasswordHashConfig};
use krypto_models::KryptoError;
use krypto_provider::KryptoProvider;

use crate::record::extract_salt;

/// Hashes and verifies passwords with fixed derivation parameters.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: PasswordHashConfig,
    provider: Arc<KryptoProvider>,
}

impl Default for PasswordHasher {
    /// `PBKDF2WithHmacSHA1`, 65536 iterations, 128-bit keys, 8-byte salts.
    fn default() -> Self {
        PasswordHasher {
            params: PasswordHashConfig::default(),
            provider: KryptoProvider::default_instance(),
        }
    }
}

impl PasswordHasher {
    /// Hasher using `params`, resolved through `provider`.
    pub fn new(
        params: PasswordHashConfig,
        provider: Arc<KryptoProvider>,
    ) -> Result<Self, KryptoError> {
        params.validate()?;
        Ok(PasswordHasher { params, provider })
    }

    /// Hasher using the `password` and `provider` sections of `config`.
    pub fn from_config(config: &KryptoConfig) -> Result<Self, KryptoError> {
        Self::new(
            config.password.clone(),
            KryptoProvider::from_config(&config.provider),
        )
    }

    /// Derivation parameters.
    pub fn params(&self) -> &PasswordHashConfig {
        &self.params
    }

    /// Hash `password` into a `base64(derived key || salt)` record.
    ///
    /// A random salt is drawn when `salt` is `None`. A given salt must be
    /// `salt_size` bytes long, or the record could not be verified.
    pub fn hash(&self, password: &str, salt: Option<&[u8]>) -> Result<String, KryptoError> {
        if let Some(salt) = salt {
            if salt.len() != self.params.salt_size {
                return Err(KryptoError::InvalidParameter(format!(
                    "salt must be {} bytes long, got {}",
                    self.params.salt_size,
                    salt.len()
                )));
            }
        }
        let derived = PasswordBasedKey::derive(password, salt, &self.params, &self.provider)?;
        krypto_trace!("password.hash", {
            "algorithm": derived.derivation_algorithm(),
            "generated_salt": salt.is_none()
        });
        Ok(to_base64(&concat(
            derived.key().as_bytes(),
            derived.salt(),
        )))
    }

    /// Whether `record` is the hash of `password`.
    ///
    /// The salt is read back from the record and the whole re-encoded record
    /// is compared, not only the derived key.
    pub fn verify(&self, password: &str, record: &str) -> Result<bool, KryptoError> {
        let decoded = from_base64(record)?;
        let salt = extract_salt(&decoded, self.params.salt_size)?;
        let matches = self.hash(password, Some(salt))? == record;
        krypto_trace!("password.verify", {"matches": matches});
        Ok(matches)
    }
}

/// Hash `password` with the default parameters.
pub fn hash_password(password: &str, salt: Option<&[u8]>) -> Result<String, KryptoError> {
    PasswordHasher::default().hash(password, salt)
}

/// Verify `password` against a record hashed with the default parameters.
pub fn matches_password_hash(password: &str, record: &str) -> Result<bool, KryptoError> {
    PasswordHasher::default().verify(password, record)
}

/// Verify `password` against a record whose salt is `salt_size` bytes long,
/// other parameters being the defaults.
pub fn matches_password_hash_with_salt_size(
    password: &str,
    record: &str,
    salt_size: usize,
) -> Result<bool, KryptoError> {
    let params = PasswordHashConfig {
        salt_size,
        ..Default::default()
    };
    PasswordHasher::new(params, KryptoProvider::default_instance())?.verify(password, record)
}
