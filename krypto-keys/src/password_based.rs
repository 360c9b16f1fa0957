// Copyright (c) 2022 MASSA LABS <info@massa.net>

use krypto_logging::krypto_trace;
use krypto_models::bytes::generate_random_bytes;
use krypto_models::config::PasswordHashConfig;
use krypto_models::{Key, KryptoError};
use krypto_provider::algorithms::{AES, PBKDF2_PREFIX};
use krypto_provider::KryptoProvider;

/// A key derived from a password, with everything needed to derive it again.
///
/// The derived key is tagged `AES` whatever PBKDF2 variant produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordBasedKey {
    key: Key,
    salt: Vec<u8>,
    iterations: u32,
    key_length: usize,
    derivation_algorithm: String,
}

impl PasswordBasedKey {
    /// Derive a key from `password` with PBKDF2.
    ///
    /// `params.derivation_algorithm` is either a full name such as
    /// `PBKDF2WithHmacSHA256` or just its MAC part (`HmacSHA256`). When
    /// `salt` is `None`, `params.salt_size` random bytes are drawn and kept
    /// in [`PasswordBasedKey::salt`].
    pub fn derive(
        password: &str,
        salt: Option<&[u8]>,
        params: &PasswordHashConfig,
        provider: &KryptoProvider,
    ) -> Result<Self, KryptoError> {
        let derivation_algorithm = full_derivation_name(&params.derivation_algorithm);
        let salt = match salt {
            Some(salt) => salt.to_vec(),
            None => generate_random_bytes(params.salt_size)?,
        };
        let key = provider
            .secret_key_factory(&derivation_algorithm)?
            .generate_secret(password, &salt, params.iterations, params.key_length)?
            .retagged(AES);
        krypto_trace!("keys.derive", {
            "algorithm": derivation_algorithm,
            "iterations": params.iterations,
            "key_length": params.key_length,
            "salt_len": salt.len()
        });
        Ok(PasswordBasedKey {
            key,
            salt,
            iterations: params.iterations,
            key_length: params.key_length,
            derivation_algorithm,
        })
    }

    /// derived key
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// salt the key was derived with
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// PBKDF2 iteration count
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// derived key length in bits
    pub fn key_length(&self) -> usize {
        self.key_length
    }

    /// full derivation algorithm name, e.g. `PBKDF2WithHmacSHA1`
    pub fn derivation_algorithm(&self) -> &str {
        &self.derivation_algorithm
    }

    /// Drop the derivation parameters, keeping the key.
    pub fn into_key(self) -> Key {
        self.key
    }
}

fn full_derivation_name(name: &str) -> String {
    let has_prefix = name
        .get(..PBKDF2_PREFIX.len())
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case(PBKDF2_PREFIX));
    if has_prefix {
        name.to_string()
    } else {
        format!("{}{}", PBKDF2_PREFIX, name)
    }
}

/// Derive a 128-bit AES key with `PBKDF2WithHmacSHA1` and 65536 iterations,
/// using the default provider. A random 8-byte salt is drawn when `salt` is
/// `None`.
pub fn derive_aes_key_from_password(
    password: &str,
    salt: Option<&[u8]>,
) -> Result<PasswordBasedKey, KryptoError> {
    PasswordBasedKey::derive(
        password,
        salt,
        &PasswordHashConfig::default(),
        &KryptoProvider::default_instance(),
    )
}
