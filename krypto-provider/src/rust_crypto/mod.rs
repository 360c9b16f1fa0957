// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Built-in provider backed by the RustCrypto crates.

mod aead;
mod asymmetric;
mod block;
mod hash;
mod kdf;
mod keys;
mod mac;

use krypto_models::{Key, KeyKind, KryptoError};

use crate::algorithms::{split_transformation, HashFunction, AES, RSA};
use crate::primitives::{
    CipherPrimitive, DigestPrimitive, KeyFactory, KeyGenerator, KeyPairGenerator, MacPrimitive,
    SecretKeyFactory,
};
use crate::provider::Provider;

/// Name under which [`RustCryptoProvider`] is registered.
pub const RUST_CRYPTO_PROVIDER_NAME: &str = "RustCrypto";

pub(crate) const AES_BLOCK_SIZE: usize = 16;

/// Fails unless `key` is a secret key of `expected` algorithm.
pub(crate) fn check_secret_key(
    key: &Key,
    algorithm: &str,
    expected: &str,
) -> Result<(), KryptoError> {
    if key.kind() != KeyKind::Secret || !key.algorithm().eq_ignore_ascii_case(expected) {
        return Err(KryptoError::InvalidKeyForAlgorithm {
            algorithm: algorithm.to_string(),
            key_algorithm: format!("{} ({})", key.algorithm(), key.kind()),
        });
    }
    Ok(())
}

pub(crate) fn invalid_aes_key_length(actual: usize) -> KryptoError {
    KryptoError::InvalidKeyLength {
        expected: "16, 24 or 32".to_string(),
        actual,
    }
}

pub(crate) fn not_initialized() -> KryptoError {
    KryptoError::EngineError("cipher not initialized".to_string())
}

fn unsupported(algorithm: &str) -> KryptoError {
    KryptoError::UnsupportedAlgorithm(algorithm.to_string())
}

/// Pure-Rust provider: AES (CBC, GCM), RSA PKCS#1 v1.5, HMAC and digests
/// over MD5 and the SHA family, PBKDF2.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoProvider;

impl RustCryptoProvider {
    /// Create the provider.
    pub fn new() -> Self {
        RustCryptoProvider
    }
}

impl Provider for RustCryptoProvider {
    fn name(&self) -> &str {
        RUST_CRYPTO_PROVIDER_NAME
    }

    fn key_factory(&self, algorithm: &str) -> Result<Box<dyn KeyFactory>, KryptoError> {
        if algorithm.eq_ignore_ascii_case(AES) {
            return Ok(Box::new(keys::AesKeyFactory));
        }
        if algorithm.eq_ignore_ascii_case(RSA) {
            return Ok(Box::new(keys::RsaKeyFactory));
        }
        HashFunction::from_hmac_name(algorithm)
            .map(|hash| Box::new(keys::HmacKeyFactory::new(hash)) as Box<dyn KeyFactory>)
            .ok_or_else(|| unsupported(algorithm))
    }

    fn secret_key_factory(
        &self,
        algorithm: &str,
    ) -> Result<Box<dyn SecretKeyFactory>, KryptoError> {
        HashFunction::from_pbkdf2_name(algorithm)
            .map(|prf| Box::new(kdf::Pbkdf2KeyFactory::new(prf)) as Box<dyn SecretKeyFactory>)
            .ok_or_else(|| unsupported(algorithm))
    }

    fn key_generator(&self, algorithm: &str) -> Result<Box<dyn KeyGenerator>, KryptoError> {
        if algorithm.eq_ignore_ascii_case(AES) {
            return Ok(Box::new(keys::AesKeyGenerator));
        }
        HashFunction::from_hmac_name(algorithm)
            .map(|hash| Box::new(keys::HmacKeyGenerator::new(hash)) as Box<dyn KeyGenerator>)
            .ok_or_else(|| unsupported(algorithm))
    }

    fn key_pair_generator(
        &self,
        algorithm: &str,
    ) -> Result<Box<dyn KeyPairGenerator>, KryptoError> {
        if algorithm.eq_ignore_ascii_case(RSA) {
            return Ok(Box::new(keys::RsaKeyPairGenerator));
        }
        Err(unsupported(algorithm))
    }

    fn cipher(&self, transformation: &str) -> Result<Box<dyn CipherPrimitive>, KryptoError> {
        let (algorithm, mode, padding) =
            split_transformation(transformation).ok_or_else(|| unsupported(transformation))?;
        let cipher: Box<dyn CipherPrimitive> = match (
            algorithm.to_ascii_uppercase().as_str(),
            mode.to_ascii_uppercase().as_str(),
            padding.to_ascii_uppercase().as_str(),
        ) {
            ("AES", "CBC", "PKCS5PADDING" | "PKCS7PADDING") => {
                Box::new(block::AesCbcCipher::new(true))
            }
            ("AES", "CBC", "NOPADDING") => Box::new(block::AesCbcCipher::new(false)),
            ("AES", "GCM", "NOPADDING") => Box::new(aead::AesGcmCipher::new()),
            ("RSA", "ECB" | "NONE", "PKCS1PADDING") => Box::new(asymmetric::RsaCipher::new()),
            _ => return Err(unsupported(transformation)),
        };
        Ok(cipher)
    }

    fn mac(&self, algorithm: &str) -> Result<Box<dyn MacPrimitive>, KryptoError> {
        HashFunction::from_hmac_name(algorithm)
            .map(|hash| Box::new(mac::HmacPrimitive::new(hash)) as Box<dyn MacPrimitive>)
            .ok_or_else(|| unsupported(algorithm))
    }

    fn message_digest(&self, algorithm: &str) -> Result<Box<dyn DigestPrimitive>, KryptoError> {
        HashFunction::from_digest_name(algorithm)
            .map(|function| Box::new(hash::MessageDigest::new(function)) as Box<dyn DigestPrimitive>)
            .ok_or_else(|| unsupported(algorithm))
    }
}
