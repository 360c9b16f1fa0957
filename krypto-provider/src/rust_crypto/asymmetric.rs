// Copyright (c) 2022 MASSA LABS <info@massa.net>

use krypto_models::{Key, KeyKind, KryptoError};
use rand::thread_rng;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};

use super::not_initialized;
use crate::algorithms::{RSA, RSA_ECB_PKCS1_PADDING};
use crate::primitives::{CipherMode, CipherPrimitive};

enum RsaState {
    Encrypt(RsaPublicKey),
    Decrypt(RsaPrivateKey),
}

/// RSA with PKCS#1 v1.5 padding: public key encrypts, private key decrypts.
pub(crate) struct RsaCipher {
    state: Option<RsaState>,
}

impl RsaCipher {
    pub(crate) fn new() -> Self {
        RsaCipher { state: None }
    }
}

impl CipherPrimitive for RsaCipher {
    fn algorithm(&self) -> &str {
        RSA_ECB_PKCS1_PADDING
    }

    fn block_size(&self) -> usize {
        0
    }

    fn init(
        &mut self,
        mode: CipherMode,
        key: &Key,
        iv: Option<&[u8]>,
    ) -> Result<(), KryptoError> {
        self.state = None;
        if iv.is_some() {
            return Err(KryptoError::InvalidParameter(format!(
                "{} takes no initialization vector",
                self.algorithm()
            )));
        }
        let invalid_key = || KryptoError::InvalidKeyForAlgorithm {
            algorithm: RSA_ECB_PKCS1_PADDING.to_string(),
            key_algorithm: format!("{} ({})", key.algorithm(), key.kind()),
        };
        if !key.algorithm().eq_ignore_ascii_case(RSA) {
            return Err(invalid_key());
        }
        self.state = Some(match (mode, key.kind()) {
            (CipherMode::Encrypt, KeyKind::Public) => RsaState::Encrypt(
                RsaPublicKey::from_public_key_der(key.as_bytes())
                    .map_err(|e| KryptoError::KeyEncoding(e.to_string()))?,
            ),
            (CipherMode::Decrypt, KeyKind::Private) => RsaState::Decrypt(
                RsaPrivateKey::from_pkcs8_der(key.as_bytes())
                    .map_err(|e| KryptoError::KeyEncoding(e.to_string()))?,
            ),
            _ => return Err(invalid_key()),
        });
        Ok(())
    }

    fn update_aad(&mut self, _aad: &[u8]) -> Result<(), KryptoError> {
        Err(KryptoError::InvalidParameter(format!(
            "{} does not authenticate additional data",
            self.algorithm()
        )))
    }

    fn do_final(&mut self, input: &[u8]) -> Result<Vec<u8>, KryptoError> {
        match self.state.take().ok_or_else(not_initialized)? {
            RsaState::Encrypt(public_key) => public_key
                .encrypt(&mut thread_rng(), Pkcs1v15Encrypt, input)
                .map_err(|e| match e {
                    rsa::Error::MessageTooLong => KryptoError::InvalidParameter(format!(
                        "data must not be longer than {} bytes",
                        rsa::traits::PublicKeyParts::size(&public_key).saturating_sub(11)
                    )),
                    e => KryptoError::EngineError(e.to_string()),
                }),
            RsaState::Decrypt(private_key) => private_key
                .decrypt(Pkcs1v15Encrypt, input)
                .map_err(|_| KryptoError::PaddingError),
        }
    }

    fn iv(&self) -> Option<&[u8]> {
        None
    }
}
