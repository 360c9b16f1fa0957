// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::sync::Arc;

use krypto_models::{Decrypted, Encrypted, Key, KryptoError};
use krypto_provider::algorithms::AES_GCM_NO_PADDING;
use krypto_provider::{CipherMode, KryptoProvider};

use crate::cipher::{Cipher, CipherEngine, DecryptCipher, EncryptCipher};

/// AES in GCM mode.
///
/// The tag is one block (16 bytes) long. Decryption returns nothing but an
/// [`KryptoError::AuthenticationFailure`] when the ciphertext, the tag or
/// the additional authenticated data were altered.
#[derive(Debug)]
pub struct AuthenticatingBlockCipher {
    engine: CipherEngine,
}

impl AuthenticatingBlockCipher {
    /// GCM cipher with the default provider.
    pub fn new(key: Key) -> Result<Self, KryptoError> {
        Self::with_provider(key, KryptoProvider::default_instance())
    }

    /// GCM cipher resolved through `provider`.
    pub fn with_provider(key: Key, provider: Arc<KryptoProvider>) -> Result<Self, KryptoError> {
        Ok(AuthenticatingBlockCipher {
            engine: CipherEngine::new(AES_GCM_NO_PADDING, key, CipherMode::Encrypt, &provider)?,
        })
    }

    /// Key the cipher is bound to.
    pub fn key(&self) -> &Key {
        self.engine.key()
    }
}

impl Cipher for AuthenticatingBlockCipher {
    fn algorithm(&self) -> &str {
        self.engine.algorithm()
    }

    fn block_size(&self) -> usize {
        self.engine.block_size()
    }
}

impl EncryptCipher for AuthenticatingBlockCipher {
    /// Uses `data.init_vector` when set, a fresh 12-byte IV otherwise, and
    /// authenticates `data.additional_authenticated_data` when set.
    fn encrypt(&self, data: &Decrypted) -> Result<Encrypted, KryptoError> {
        let aad = data.additional_authenticated_data.as_deref();
        let mut processed = self.engine.process(
            CipherMode::Encrypt,
            data.init_vector.as_deref(),
            aad,
            &data.bytes,
        )?;
        // primitive output is `ciphertext || tag`
        let split = processed
            .bytes
            .len()
            .checked_sub(self.block_size())
            .ok_or_else(|| {
                KryptoError::EngineError("sealed output shorter than the tag".to_string())
            })?;
        let tag = processed.bytes.split_off(split);
        Ok(Encrypted {
            bytes: processed.bytes,
            init_vector: processed.init_vector,
            authentication_tag: Some(tag),
            additional_authenticated_data: aad.map(<[u8]>::to_vec),
        })
    }
}

impl DecryptCipher for AuthenticatingBlockCipher {
    fn decrypt(&self, data: &Encrypted) -> Result<Decrypted, KryptoError> {
        let init_vector = data.init_vector.as_deref().ok_or_else(|| {
            KryptoError::MissingParameter("initialization vector (IV)".to_string())
        })?;
        let tag = data.authentication_tag.as_deref().ok_or_else(|| {
            KryptoError::MissingParameter("authentication tag".to_string())
        })?;
        let aad = data.additional_authenticated_data.as_deref();
        let sealed = [data.bytes.as_slice(), tag].concat();
        let processed = self
            .engine
            .process(CipherMode::Decrypt, Some(init_vector), aad, &sealed)?;
        let mut decrypted = Decrypted::new(processed.bytes).with_init_vector(init_vector);
        decrypted.additional_authenticated_data = aad.map(<[u8]>::to_vec);
        Ok(decrypted)
    }
}
