// Copyright (c) 2022 MASSA LABS <info@massa.net>

use krypto_models::bytes::SecureRandom;
use krypto_models::{Key, KeyPair, KryptoError};

/// Direction a [`CipherPrimitive`] is initialized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    /// encryption
    Encrypt,
    /// decryption
    Decrypt,
}

/// Stateful cipher: `init`, optionally `update_aad`, then `do_final`.
///
/// An instance must be re-initialized before every operation and must not
/// be used from several threads at once. `do_final` consumes the state set
/// by `init`, and a failed `init` leaves the cipher uninitialized.
pub trait CipherPrimitive: Send {
    /// Full transformation, e.g. `AES/CBC/PKCS5Padding`.
    fn algorithm(&self) -> &str;

    /// Block size in bytes, 0 for non-block ciphers.
    fn block_size(&self) -> usize;

    /// Initialize for one operation. When `iv` is `None` an encrypting
    /// cipher generates a fresh random one, readable through [`CipherPrimitive::iv`].
    fn init(&mut self, mode: CipherMode, key: &Key, iv: Option<&[u8]>)
        -> Result<(), KryptoError>;

    /// Feed additional authenticated data. Only valid for AEAD modes,
    /// after `init` and before `do_final`.
    fn update_aad(&mut self, aad: &[u8]) -> Result<(), KryptoError>;

    /// Process the whole input. AEAD encryption returns `ciphertext || tag`
    /// and AEAD decryption expects the same layout.
    ///
    /// Fails with [`KryptoError::EngineError`] unless `init` succeeded since
    /// the previous call.
    fn do_final(&mut self, input: &[u8]) -> Result<Vec<u8>, KryptoError>;

    /// Initialization vector of the pending operation, if the mode uses one.
    fn iv(&self) -> Option<&[u8]>;
}

/// Running digest state. Infallible once built.
pub trait DigestPrimitive: Send {
    /// Algorithm name, e.g. `SHA-256` or `HmacSHA256`.
    fn algorithm(&self) -> &str;

    /// Output length in bytes.
    fn output_size(&self) -> usize;

    /// Append data to the running state.
    fn update(&mut self, data: &[u8]);

    /// Return the digest and go back to the initial state.
    fn finalize_reset(&mut self) -> Vec<u8>;

    /// Drop everything appended so far.
    fn reset(&mut self);
}

/// Unkeyed MAC. Keying it yields a running [`DigestPrimitive`].
pub trait MacPrimitive: Send {
    /// Algorithm name, e.g. `HmacSHA256`.
    fn algorithm(&self) -> &str;

    /// Bind the MAC to a secret key.
    fn init(self: Box<Self>, key: &Key) -> Result<Box<dyn DigestPrimitive>, KryptoError>;
}

/// Derives secret keys from passwords.
pub trait SecretKeyFactory: Send {
    /// Algorithm name, e.g. `PBKDF2WithHmacSHA1`.
    fn algorithm(&self) -> &str;

    /// Derive `key_length` bits. The returned key is tagged with the
    /// derivation algorithm name.
    fn generate_secret(
        &self,
        password: &str,
        salt: &[u8],
        iterations: u32,
        key_length: usize,
    ) -> Result<Key, KryptoError>;
}

/// Generates random secret keys.
pub trait KeyGenerator: Send {
    /// Algorithm of generated keys.
    fn algorithm(&self) -> &str;

    /// Generate a key of `size` bits.
    fn generate_key(
        &self,
        size: usize,
        rng: Option<&mut dyn SecureRandom>,
    ) -> Result<Key, KryptoError>;
}

/// Generates random asymmetric key pairs.
pub trait KeyPairGenerator: Send {
    /// Algorithm of generated keys.
    fn algorithm(&self) -> &str;

    /// Generate a pair whose modulus (or equivalent) is `size` bits.
    fn generate_key_pair(
        &self,
        size: usize,
        rng: Option<&mut dyn SecureRandom>,
    ) -> Result<KeyPair, KryptoError>;
}

/// Turns encoded key material into validated [`Key`]s.
pub trait KeyFactory: Send {
    /// Algorithm of produced keys.
    fn algorithm(&self) -> &str;

    /// Import raw secret bytes.
    fn import_secret(&self, _bytes: &[u8]) -> Result<Key, KryptoError> {
        Err(KryptoError::UnsupportedAlgorithm(format!(
            "{} secret keys",
            self.algorithm()
        )))
    }

    /// Import an X.509 `SubjectPublicKeyInfo` DER public key.
    fn import_public(&self, _encoded: &[u8]) -> Result<Key, KryptoError> {
        Err(KryptoError::UnsupportedAlgorithm(format!(
            "{} public keys",
            self.algorithm()
        )))
    }

    /// Import a PKCS#8 DER private key.
    fn import_private(&self, _encoded: &[u8]) -> Result<Key, KryptoError> {
        Err(KryptoError::UnsupportedAlgorithm(format!(
            "{} private keys",
            self.algorithm()
        )))
    }
}

macro_rules! debug_by_algorithm {
    ($($primitive:ident),+) => {
        $(
            impl std::fmt::Debug for dyn $primitive {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}({})", stringify!($primitive), self.algorithm())
                }
            }
        )+
    };
}

debug_by_algorithm!(
    CipherPrimitive,
    DigestPrimitive,
    MacPrimitive,
    SecretKeyFactory,
    KeyGenerator,
    KeyPairGenerator,
    KeyFactory
);
