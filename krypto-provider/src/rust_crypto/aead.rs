// Copyright (c) 2022 MASSA LABS <info@massa.net>

use aes::{Aes128, Aes192, Aes256};
use aes_gcm::aead::consts::{U12, U16};
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::AesGcm;
use krypto_models::bytes::generate_random_bytes;
use krypto_models::{Key, KryptoError};

use super::{check_secret_key, invalid_aes_key_length, not_initialized, AES_BLOCK_SIZE};
use crate::algorithms::{AES, AES_GCM_NO_PADDING};
use crate::primitives::{CipherMode, CipherPrimitive};

/// IV length generated when the caller gives none.
pub(crate) const GCM_DEFAULT_IV_SIZE: usize = 12;
/// Authentication tag length: one AES block.
pub(crate) const GCM_TAG_SIZE: usize = AES_BLOCK_SIZE;

/// Dispatch on `(key length, IV length)` to a typed AES-GCM instance.
macro_rules! gcm_dispatch {
    ($func:ident, $key:expr, $iv:expr, $aad:expr, $input:expr) => {
        match ($key.len(), $iv.len()) {
            (16, 12) => $func::<AesGcm<Aes128, U12>>($key, $iv, $aad, $input),
            (16, 16) => $func::<AesGcm<Aes128, U16>>($key, $iv, $aad, $input),
            (24, 12) => $func::<AesGcm<Aes192, U12>>($key, $iv, $aad, $input),
            (24, 16) => $func::<AesGcm<Aes192, U16>>($key, $iv, $aad, $input),
            (32, 12) => $func::<AesGcm<Aes256, U12>>($key, $iv, $aad, $input),
            (32, 16) => $func::<AesGcm<Aes256, U16>>($key, $iv, $aad, $input),
            (16 | 24 | 32, len) => Err(unsupported_iv_length(len)),
            (len, _) => Err(invalid_aes_key_length(len)),
        }
    };
}

fn unsupported_iv_length(len: usize) -> KryptoError {
    KryptoError::InvalidParameter(format!(
        "unsupported GCM IV length: {} bytes (expected 12 or 16)",
        len
    ))
}

fn seal<C: KeyInit + Aead>(
    key: &[u8],
    iv: &[u8],
    aad: &[u8],
    msg: &[u8],
) -> Result<Vec<u8>, KryptoError> {
    let cipher = C::new_from_slice(key).map_err(|_| invalid_aes_key_length(key.len()))?;
    cipher
        .encrypt(GenericArray::from_slice(iv), Payload { msg, aad })
        .map_err(|_| KryptoError::EngineError("AES-GCM encryption failed".to_string()))
}

fn open<C: KeyInit + Aead>(
    key: &[u8],
    iv: &[u8],
    aad: &[u8],
    msg: &[u8],
) -> Result<Vec<u8>, KryptoError> {
    let cipher = C::new_from_slice(key).map_err(|_| invalid_aes_key_length(key.len()))?;
    cipher
        .decrypt(GenericArray::from_slice(iv), Payload { msg, aad })
        .map_err(|_| KryptoError::AuthenticationFailure)
}

struct GcmState {
    mode: CipherMode,
    key: Vec<u8>,
    iv: Vec<u8>,
    aad: Vec<u8>,
}

/// AES in Galois/counter mode with a 128-bit tag appended to the ciphertext.
pub(crate) struct AesGcmCipher {
    state: Option<GcmState>,
}

impl AesGcmCipher {
    pub(crate) fn new() -> Self {
        AesGcmCipher { state: None }
    }

    fn state_mut(&mut self) -> Result<&mut GcmState, KryptoError> {
        self.state.as_mut().ok_or_else(not_initialized)
    }
}

impl CipherPrimitive for AesGcmCipher {
    fn algorithm(&self) -> &str {
        AES_GCM_NO_PADDING
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn init(
        &mut self,
        mode: CipherMode,
        key: &Key,
        iv: Option<&[u8]>,
    ) -> Result<(), KryptoError> {
        self.state = None;
        check_secret_key(key, self.algorithm(), AES)?;
        if !matches!(key.as_bytes().len(), 16 | 24 | 32) {
            return Err(invalid_aes_key_length(key.as_bytes().len()));
        }
        let iv = match (iv, mode) {
            (Some(iv), _) => {
                if iv.len() != 12 && iv.len() != 16 {
                    return Err(unsupported_iv_length(iv.len()));
                }
                iv.to_vec()
            }
            (None, CipherMode::Encrypt) => generate_random_bytes(GCM_DEFAULT_IV_SIZE)?,
            (None, CipherMode::Decrypt) => {
                return Err(KryptoError::MissingParameter(
                    "initialization vector (IV)".to_string(),
                ))
            }
        };
        self.state = Some(GcmState {
            mode,
            key: key.to_bytes(),
            iv,
            aad: Vec::new(),
        });
        Ok(())
    }

    fn update_aad(&mut self, aad: &[u8]) -> Result<(), KryptoError> {
        self.state_mut()?.aad.extend_from_slice(aad);
        Ok(())
    }

    fn do_final(&mut self, input: &[u8]) -> Result<Vec<u8>, KryptoError> {
        // one operation per init: an IV is never sealed twice
        let state = self.state.take().ok_or_else(not_initialized)?;
        let (key, iv, aad) = (
            state.key.as_slice(),
            state.iv.as_slice(),
            state.aad.as_slice(),
        );
        match state.mode {
            CipherMode::Encrypt => gcm_dispatch!(seal, key, iv, aad, input),
            CipherMode::Decrypt => {
                if input.len() < GCM_TAG_SIZE {
                    return Err(KryptoError::AuthenticationFailure);
                }
                gcm_dispatch!(open, key, iv, aad, input)
            }
        }
    }

    fn iv(&self) -> Option<&[u8]> {
        self.state.as_ref().map(|state| state.iv.as_slice())
    }
}
