// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::sync::Arc;

use krypto_models::{Decrypted, Encrypted, Key, KryptoError};
use krypto_provider::algorithms::{AES_CBC_NO_PADDING, AES_CBC_PKCS5_PADDING};
use krypto_provider::{CipherMode, KryptoProvider};

use crate::cipher::{Cipher, CipherEngine, DecryptCipher, EncryptCipher};

/// AES in CBC mode.
///
/// Provides confidentiality only: a wrong key or altered ciphertext is
/// detected at best as a padding error, and never without padding.
///
/// # Example
/// ```
/// # use krypto_cipher::{BlockCipher, DecryptCipher, EncryptCipher};
/// # use krypto_models::{Decrypted, Key, KeyKind};
/// let key = Key::new(KeyKind::Secret, "AES", vec![3u8; 16]);
/// let cipher = BlockCipher::new(key, true).unwrap();
/// let encrypted = cipher.encrypt(&Decrypted::new(b"Hello World!".to_vec())).unwrap();
/// assert_eq!(encrypted.init_vector.as_ref().map(Vec::len), Some(16));
/// let decrypted = cipher.decrypt(&encrypted).unwrap();
/// assert_eq!(decrypted.bytes, b"Hello World!");
/// ```
#[derive(Debug)]
pub struct BlockCipher {
    engine: CipherEngine,
}

impl BlockCipher {
    /// CBC cipher with PKCS#5 padding when `padded`, with the default provider.
    pub fn new(key: Key, padded: bool) -> Result<Self, KryptoError> {
        Self::with_provider(key, padded, KryptoProvider::default_instance())
    }

    /// CBC cipher resolved through `provider`.
    pub fn with_provider(
        key: Key,
        padded: bool,
        provider: Arc<KryptoProvider>,
    ) -> Result<Self, KryptoError> {
        let transformation = if padded {
            AES_CBC_PKCS5_PADDING
        } else {
            AES_CBC_NO_PADDING
        };
        Ok(BlockCipher {
            engine: CipherEngine::new(transformation, key, CipherMode::Encrypt, &provider)?,
        })
    }

    /// Key the cipher is bound to.
    pub fn key(&self) -> &Key {
        self.engine.key()
    }
}

impl Cipher for BlockCipher {
    fn algorithm(&self) -> &str {
        self.engine.algorithm()
    }

    fn block_size(&self) -> usize {
        self.engine.block_size()
    }
}

impl EncryptCipher for BlockCipher {
    /// Uses `data.init_vector` when set, a fresh random IV otherwise.
    /// Additional authenticated data is ignored.
    fn encrypt(&self, data: &Decrypted) -> Result<Encrypted, KryptoError> {
        let processed = self.engine.process(
            CipherMode::Encrypt,
            data.init_vector.as_deref(),
            None,
            &data.bytes,
        )?;
        Ok(Encrypted {
            bytes: processed.bytes,
            init_vector: processed.init_vector,
            ..Default::default()
        })
    }
}

impl DecryptCipher for BlockCipher {
    fn decrypt(&self, data: &Encrypted) -> Result<Decrypted, KryptoError> {
        let init_vector = data.init_vector.as_deref().ok_or_else(|| {
            KryptoError::MissingParameter("initialization vector (IV)".to_string())
        })?;
        let processed =
            self.engine
                .process(CipherMode::Decrypt, Some(init_vector), None, &data.bytes)?;
        Ok(Decrypted::new(processed.bytes).with_init_vector(init_vector))
    }
}
