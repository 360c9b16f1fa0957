// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::sync::Arc;

use krypto_logging::krypto_trace;
use krypto_models::{Key, KryptoError};
use krypto_provider::algorithms;
use krypto_provider::KryptoProvider;

use crate::digester::{DigestBuilder, DigestState, Digester};

/// HMAC algorithm names.
pub struct HmacAlgorithms;

impl HmacAlgorithms {
    /// HMAC-MD5
    pub const MD5: &'static str = algorithms::HMAC_MD5;
    /// HMAC-SHA1
    pub const SHA1: &'static str = algorithms::HMAC_SHA1;
    /// HMAC-SHA256
    pub const SHA256: &'static str = algorithms::HMAC_SHA256;
    /// HMAC-SHA384
    pub const SHA384: &'static str = algorithms::HMAC_SHA384;
    /// HMAC-SHA512
    pub const SHA512: &'static str = algorithms::HMAC_SHA512;
}

/// Keyed digester.
///
/// # Example
/// ```
/// # use krypto_hash::{Digester, HmacDigester};
/// # use krypto_models::{Key, KeyKind};
/// let key = Key::new(KeyKind::Secret, "AES", vec![1u8; 16]);
/// let hmac = HmacDigester::new(key).unwrap();
/// let tag = hmac.digest_builder().update(b"Hello ").update(b"World!").digest();
/// assert_eq!(tag, hmac.digest(b"Hello World!"));
/// ```
pub struct HmacDigester {
    key: Key,
    algorithm: String,
    state: DigestState,
}

impl HmacDigester {
    /// HMAC-SHA256 with the default provider.
    pub fn new(key: Key) -> Result<Self, KryptoError> {
        Self::with_algorithm(key, HmacAlgorithms::SHA256)
    }

    /// HMAC `algorithm` with the default provider.
    pub fn with_algorithm(key: Key, algorithm: &str) -> Result<Self, KryptoError> {
        Self::with_provider(key, algorithm, KryptoProvider::default_instance())
    }

    /// HMAC `algorithm` resolved through `provider`.
    ///
    /// Fails with [`KryptoError::InvalidKeyForAlgorithm`] when `key` is not
    /// a usable secret key.
    pub fn with_provider(
        key: Key,
        algorithm: &str,
        provider: Arc<KryptoProvider>,
    ) -> Result<Self, KryptoError> {
        let primitive = provider.mac(algorithm)?.init(&key)?;
        krypto_trace!("hmac_digester.new", {
            "algorithm": algorithm,
            "key_algorithm": key.algorithm()
        });
        Ok(HmacDigester {
            key,
            algorithm: algorithm.to_string(),
            state: DigestState::new(provider, primitive),
        })
    }

    /// Key the digester is bound to.
    pub fn key(&self) -> &Key {
        &self.key
    }
}

impl std::fmt::Debug for HmacDigester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacDigester")
            .field("algorithm", &self.algorithm)
            .field("key", &self.key)
            .finish()
    }
}

impl Digester for HmacDigester {
    fn algorithm(&self) -> &str {
        &self.algorithm
    }

    fn provider(&self) -> &Arc<KryptoProvider> {
        &self.state.provider
    }

    fn digest_builder(&self) -> DigestBuilder<'_> {
        self.state.builder()
    }
}
