// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::sync::Arc;

use krypto_models::{Decrypted, Encrypted, Key, KeyKind, KeyPair, KryptoError};
use krypto_provider::algorithms::{RSA, RSA_ECB_PKCS1_PADDING};
use krypto_provider::{CipherMode, KryptoProvider};

use crate::cipher::{Cipher, CipherEngine, DecryptCipher, EncryptCipher};

/// Fails unless `key` is an RSA key of the `expected` kind.
fn check_rsa_key(key: &Key, expected: KeyKind) -> Result<(), KryptoError> {
    if !key.algorithm().eq_ignore_ascii_case(RSA) {
        return Err(KryptoError::AlgorithmMismatch {
            expected: RSA.to_string(),
            actual: key.algorithm().to_string(),
        });
    }
    if key.kind() != expected {
        return Err(KryptoError::InvalidKeyForAlgorithm {
            algorithm: RSA_ECB_PKCS1_PADDING.to_string(),
            key_algorithm: format!("{} ({})", key.algorithm(), key.kind()),
        });
    }
    Ok(())
}

/// RSA encryption with a public key.
#[derive(Debug)]
pub struct AsymmetricEncryptCipher {
    engine: CipherEngine,
}

impl AsymmetricEncryptCipher {
    /// Cipher over `public_key` with the default provider.
    pub fn new(public_key: Key) -> Result<Self, KryptoError> {
        Self::with_provider(public_key, KryptoProvider::default_instance())
    }

    /// Cipher over `public_key` resolved through `provider`.
    pub fn with_provider(
        public_key: Key,
        provider: Arc<KryptoProvider>,
    ) -> Result<Self, KryptoError> {
        check_rsa_key(&public_key, KeyKind::Public)?;
        Ok(AsymmetricEncryptCipher {
            engine: CipherEngine::new(
                RSA_ECB_PKCS1_PADDING,
                public_key,
                CipherMode::Encrypt,
                &provider,
            )?,
        })
    }

    /// Public key the cipher is bound to.
    pub fn key(&self) -> &Key {
        self.engine.key()
    }
}

impl Cipher for AsymmetricEncryptCipher {
    fn algorithm(&self) -> &str {
        self.engine.algorithm()
    }

    fn block_size(&self) -> usize {
        self.engine.block_size()
    }
}

impl EncryptCipher for AsymmetricEncryptCipher {
    /// Mode parameters of `data` are ignored and none are produced.
    fn encrypt(&self, data: &Decrypted) -> Result<Encrypted, KryptoError> {
        let processed = self
            .engine
            .process(CipherMode::Encrypt, None, None, &data.bytes)?;
        Ok(Encrypted::new(processed.bytes))
    }
}

/// RSA decryption with a private key.
#[derive(Debug)]
pub struct AsymmetricDecryptCipher {
    engine: CipherEngine,
}

impl AsymmetricDecryptCipher {
    /// Cipher over `private_key` with the default provider.
    pub fn new(private_key: Key) -> Result<Self, KryptoError> {
        Self::with_provider(private_key, KryptoProvider::default_instance())
    }

    /// Cipher over `private_key` resolved through `provider`.
    pub fn with_provider(
        private_key: Key,
        provider: Arc<KryptoProvider>,
    ) -> Result<Self, KryptoError> {
        check_rsa_key(&private_key, KeyKind::Private)?;
        Ok(AsymmetricDecryptCipher {
            engine: CipherEngine::new(
                RSA_ECB_PKCS1_PADDING,
                private_key,
                CipherMode::Decrypt,
                &provider,
            )?,
        })
    }

    /// Private key the cipher is bound to.
    pub fn key(&self) -> &Key {
        self.engine.key()
    }
}

impl Cipher for AsymmetricDecryptCipher {
    fn algorithm(&self) -> &str {
        self.engine.algorithm()
    }

    fn block_size(&self) -> usize {
        self.engine.block_size()
    }
}

impl DecryptCipher for AsymmetricDecryptCipher {
    fn decrypt(&self, data: &Encrypted) -> Result<Decrypted, KryptoError> {
        let processed = self
            .engine
            .process(CipherMode::Decrypt, None, None, &data.bytes)?;
        Ok(Decrypted::new(processed.bytes))
    }
}

/// Both directions of RSA: encrypts with the public key, decrypts with the
/// private one.
///
/// # Example
/// ```
/// # use krypto_cipher::{AsymmetricCipherPair, DecryptCipher, EncryptCipher};
/// # use krypto_keys::generate_random_rsa_key_pair;
/// # use krypto_models::Decrypted;
/// let pair = AsymmetricCipherPair::from_key_pair(generate_random_rsa_key_pair().unwrap()).unwrap();
/// let encrypted = pair.encrypt(&Decrypted::new(b"secret".to_vec())).unwrap();
/// assert_eq!(pair.decrypt(&encrypted).unwrap().bytes, b"secret");
/// ```
#[derive(Debug)]
pub struct AsymmetricCipherPair {
    encrypt: AsymmetricEncryptCipher,
    decrypt: AsymmetricDecryptCipher,
}

impl AsymmetricCipherPair {
    /// Pair over two keys with the default provider.
    pub fn new(public_key: Key, private_key: Key) -> Result<Self, KryptoError> {
        Self::with_provider(public_key, private_key, KryptoProvider::default_instance())
    }

    /// Pair over a generated or imported key pair with the default provider.
    pub fn from_key_pair(key_pair: KeyPair) -> Result<Self, KryptoError> {
        let (public_key, private_key) = key_pair.into_parts();
        Self::new(public_key, private_key)
    }

    /// Pair over two keys resolved through `provider`.
    pub fn with_provider(
        public_key: Key,
        private_key: Key,
        provider: Arc<KryptoProvider>,
    ) -> Result<Self, KryptoError> {
        Ok(AsymmetricCipherPair {
            encrypt: AsymmetricEncryptCipher::with_provider(public_key, provider.clone())?,
            decrypt: AsymmetricDecryptCipher::with_provider(private_key, provider)?,
        })
    }

    /// Encrypting half.
    pub fn encrypt_cipher(&self) -> &AsymmetricEncryptCipher {
        &self.encrypt
    }

    /// Decrypting half.
    pub fn decrypt_cipher(&self) -> &AsymmetricDecryptCipher {
        &self.decrypt
    }
}

impl Cipher for AsymmetricCipherPair {
    fn algorithm(&self) -> &str {
        self.encrypt.algorithm()
    }

    fn block_size(&self) -> usize {
        self.encrypt.block_size()
    }
}

impl EncryptCipher for AsymmetricCipherPair {
    fn encrypt(&self, data: &Decrypted) -> Result<Encrypted, KryptoError> {
        self.encrypt.encrypt(data)
    }
}

impl DecryptCipher for AsymmetricCipherPair {
    fn decrypt(&self, data: &Encrypted) -> Result<Decrypted, KryptoError> {
        self.decrypt.decrypt(data)
    }
}
