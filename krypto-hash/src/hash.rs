// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::sync::Arc;

use krypto_logging::krypto_trace;
use krypto_models::KryptoError;
use krypto_provider::algorithms;
use krypto_provider::KryptoProvider;

use crate::digester::{DigestBuilder, DigestState, Digester};

/// Message digest algorithm names.
pub struct HashAlgorithms;

impl HashAlgorithms {
    /// MD5
    pub const MD5: &'static str = algorithms::MD5;
    /// SHA-1
    pub const SHA1: &'static str = algorithms::SHA1;
    /// SHA-256
    pub const SHA256: &'static str = algorithms::SHA256;
    /// SHA-384
    pub const SHA384: &'static str = algorithms::SHA384;
    /// SHA-512
    pub const SHA512: &'static str = algorithms::SHA512;
}

/// Unkeyed digester.
pub struct HashDigester {
    algorithm: String,
    state: DigestState,
}

impl HashDigester {
    /// SHA-256 with the default provider.
    pub fn new() -> Result<Self, KryptoError> {
        Self::with_algorithm(HashAlgorithms::SHA256)
    }

    /// `algorithm` with the default provider.
    pub fn with_algorithm(algorithm: &str) -> Result<Self, KryptoError> {
        Self::with_provider(algorithm, KryptoProvider::default_instance())
    }

    /// `algorithm` resolved through `provider`.
    pub fn with_provider(
        algorithm: &str,
        provider: Arc<KryptoProvider>,
    ) -> Result<Self, KryptoError> {
        let primitive = provider.message_digest(algorithm)?;
        krypto_trace!("hash_digester.new", {"algorithm": algorithm});
        Ok(HashDigester {
            algorithm: algorithm.to_string(),
            state: DigestState::new(provider, primitive),
        })
    }
}

impl std::fmt::Debug for HashDigester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashDigester")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl Digester for HashDigester {
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
