// Copyright (c) 2022 MASSA LABS <info@massa.net>

use krypto_logging::krypto_trace;
use krypto_models::{Decrypted, Encrypted, Key, KryptoError};
use krypto_provider::{CipherMode, CipherPrimitive, KryptoProvider};
use parking_lot::Mutex;

/// What every cipher reports about itself.
pub trait Cipher {
    /// Full transformation, e.g. `AES/CBC/PKCS5Padding`.
    fn algorithm(&self) -> &str;

    /// Block size in bytes, 0 for RSA.
    fn block_size(&self) -> usize;
}

/// A cipher able to encrypt.
pub trait EncryptCipher: Cipher {
    /// Encrypt `data`, returning the ciphertext with the mode parameters
    /// needed to decrypt it.
    fn encrypt(&self, data: &Decrypted) -> Result<Encrypted, KryptoError>;
}

/// A cipher able to decrypt.
pub trait DecryptCipher: Cipher {
    /// Decrypt `data`, whose mode parameters must be those produced by
    /// encryption.
    fn decrypt(&self, data: &Encrypted) -> Result<Decrypted, KryptoError>;
}

/// Output of one primitive run.
pub(crate) struct Processed {
    pub(crate) bytes: Vec<u8>,
    pub(crate) init_vector: Option<Vec<u8>>,
}

/// A key bound to one locked cipher primitive.
pub(crate) struct CipherEngine {
    key: Key,
    algorithm: String,
    block_size: usize,
    primitive: Mutex<Box<dyn CipherPrimitive>>,
}

impl CipherEngine {
    /// Resolve `transformation` and check `key` by initializing the
    /// primitive once in `check_mode`.
    pub(crate) fn new(
        transformation: &str,
        key: Key,
        check_mode: CipherMode,
        provider: &KryptoProvider,
    ) -> Result<Self, KryptoError> {
        let mut primitive = provider.cipher(transformation)?;
        primitive.init(check_mode, &key, None)?;
        krypto_trace!("cipher.new", {
            "algorithm": primitive.algorithm(),
            "key_algorithm": key.algorithm(),
            "key_size": key.size()
        });
        Ok(CipherEngine {
            algorithm: primitive.algorithm().to_string(),
            block_size: primitive.block_size(),
            key,
            primitive: Mutex::new(primitive),
        })
    }

    pub(crate) fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub(crate) fn block_size(&self) -> usize {
        self.block_size
    }

    pub(crate) fn key(&self) -> &Key {
        &self.key
    }

    /// Run one full init, AAD, final sequence under the lock.
    pub(crate) fn process(
        &self,
        mode: CipherMode,
        init_vector: Option<&[u8]>,
        aad: Option<&[u8]>,
        input: &[u8],
    ) -> Result<Processed, KryptoError> {
        let mut primitive = self.primitive.lock();
        primitive.init(mode, &self.key, init_vector)?;
        if let Some(aad) = aad {
            primitive.update_aad(aad)?;
        }
        let iv = primitive.iv().map(<[u8]>::to_vec);
        let bytes = primitive.do_final(input)?;
        krypto_trace!("cipher.process", {
            "algorithm": self.algorithm,
            "encrypt": mode == CipherMode::Encrypt,
            "input_len": input.len(),
            "output_len": bytes.len()
        });
        Ok(Processed {
            bytes,
            init_vector: iv,
        })
    }
}

impl std::fmt::Debug for CipherEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherEngine")
            .field("algorithm", &self.algorithm)
            .field("key", &self.key)
            .finish()
    }
}
