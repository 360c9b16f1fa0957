// Copyright (c) 2022 MASSA LABS <info@massa.net>

use krypto_models::KryptoError;

use crate::primitives::{
    CipherPrimitive, DigestPrimitive, KeyFactory, KeyGenerator, KeyPairGenerator, MacPrimitive,
    SecretKeyFactory,
};

/// A cryptographic backend.
///
/// Every factory returns a fresh primitive, or
/// [`KryptoError::UnsupportedAlgorithm`] when the backend cannot supply the
/// requested algorithm, mode or padding.
pub trait Provider: Send + Sync {
    /// Identifier the provider is registered under.
    fn name(&self) -> &str;

    /// Key factory importing encoded keys of `algorithm`.
    fn key_factory(&self, algorithm: &str) -> Result<Box<dyn KeyFactory>, KryptoError>;

    /// Password-based secret key factory, e.g. `PBKDF2WithHmacSHA1`.
    fn secret_key_factory(&self, algorithm: &str)
        -> Result<Box<dyn SecretKeyFactory>, KryptoError>;

    /// Random secret key generator.
    fn key_generator(&self, algorithm: &str) -> Result<Box<dyn KeyGenerator>, KryptoError>;

    /// Random key pair generator.
    fn key_pair_generator(&self, algorithm: &str)
        -> Result<Box<dyn KeyPairGenerator>, KryptoError>;

    /// Cipher for a full `Algorithm/Mode/Padding` transformation.
    fn cipher(&self, transformation: &str) -> Result<Box<dyn CipherPrimitive>, KryptoError>;

    /// Message authentication code.
    fn mac(&self, algorithm: &str) -> Result<Box<dyn MacPrimitive>, KryptoError>;

    /// One-way message digest.
    fn message_digest(&self, algorithm: &str) -> Result<Box<dyn DigestPrimitive>, KryptoError>;
}
