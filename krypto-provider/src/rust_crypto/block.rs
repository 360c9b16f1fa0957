// Copyright (c) 2022 MASSA LABS <info@massa.net>

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::{NoPadding, Pkcs7};
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use krypto_models::bytes::generate_random_bytes;
use krypto_models::{Key, KryptoError};

use super::{check_secret_key, invalid_aes_key_length, not_initialized, AES_BLOCK_SIZE};
use crate::algorithms::{AES, AES_CBC_NO_PADDING, AES_CBC_PKCS5_PADDING};
use crate::primitives::{CipherMode, CipherPrimitive};

macro_rules! cbc_encrypt {
    ($aes:ty, $key:expr, $iv:expr, $input:expr, $padding:ty) => {
        cbc::Encryptor::<$aes>::new_from_slices($key, $iv)
            .map_err(|e| KryptoError::InvalidParameter(e.to_string()))?
            .encrypt_padded_vec_mut::<$padding>($input)
    };
}

macro_rules! cbc_decrypt {
    ($aes:ty, $key:expr, $iv:expr, $input:expr, $padding:ty) => {
        cbc::Decryptor::<$aes>::new_from_slices($key, $iv)
            .map_err(|e| KryptoError::InvalidParameter(e.to_string()))?
            .decrypt_padded_vec_mut::<$padding>($input)
            .map_err(|_| KryptoError::PaddingError)?
    };
}

struct CbcState {
    mode: CipherMode,
    key: Vec<u8>,
    iv: Vec<u8>,
}

/// AES in CBC mode, with PKCS#5 padding or none.
pub(crate) struct AesCbcCipher {
    padded: bool,
    state: Option<CbcState>,
}

impl AesCbcCipher {
    pub(crate) fn new(padded: bool) -> Self {
        AesCbcCipher {
            padded,
            state: None,
        }
    }

    fn check_aligned(&self, length: usize) -> Result<(), KryptoError> {
        if length % AES_BLOCK_SIZE != 0 {
            return Err(KryptoError::InvalidBlockSize {
                length,
                block_size: AES_BLOCK_SIZE,
            });
        }
        Ok(())
    }

    fn encrypt(&self, state: &CbcState, input: &[u8]) -> Result<Vec<u8>, KryptoError> {
        if !self.padded {
            self.check_aligned(input.len())?;
        }
        let (key, iv) = (state.key.as_slice(), state.iv.as_slice());
        Ok(match (key.len(), self.padded) {
            (16, true) => cbc_encrypt!(Aes128, key, iv, input, Pkcs7),
            (24, true) => cbc_encrypt!(Aes192, key, iv, input, Pkcs7),
            (32, true) => cbc_encrypt!(Aes256, key, iv, input, Pkcs7),
            (16, false) => cbc_encrypt!(Aes128, key, iv, input, NoPadding),
            (24, false) => cbc_encrypt!(Aes192, key, iv, input, NoPadding),
            (32, false) => cbc_encrypt!(Aes256, key, iv, input, NoPadding),
            (len, _) => return Err(invalid_aes_key_length(len)),
        })
    }

    fn decrypt(&self, state: &CbcState, input: &[u8]) -> Result<Vec<u8>, KryptoError> {
        self.check_aligned(input.len())?;
        let (key, iv) = (state.key.as_slice(), state.iv.as_slice());
        Ok(match (key.len(), self.padded) {
            (16, true) => cbc_decrypt!(Aes128, key, iv, input, Pkcs7),
            (24, true) => cbc_decrypt!(Aes192, key, iv, input, Pkcs7),
            (32, true) => cbc_decrypt!(Aes256, key, iv, input, Pkcs7),
            (16, false) => cbc_decrypt!(Aes128, key, iv, input, NoPadding),
            (24, false) => cbc_decrypt!(Aes192, key, iv, input, NoPadding),
            (32, false) => cbc_decrypt!(Aes256, key, iv, input, NoPadding),
            (len, _) => return Err(invalid_aes_key_length(len)),
        })
    }
}

impl CipherPrimitive for AesCbcCipher {
    fn algorithm(&self) -> &str {
        if self.padded {
            AES_CBC_PKCS5_PADDING
        } else {
            AES_CBC_NO_PADDING
        }
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
                if iv.len() != AES_BLOCK_SIZE {
                    return Err(KryptoError::InvalidParameter(format!(
                        "wrong IV length: must be {} bytes long, got {}",
                        AES_BLOCK_SIZE,
                        iv.len()
                    )));
                }
                iv.to_vec()
            }
            (None, CipherMode::Encrypt) => generate_random_bytes(AES_BLOCK_SIZE)?,
            (None, CipherMode::Decrypt) => {
                return Err(KryptoError::MissingParameter(
                    "initialization vector (IV)".to_string(),
                ))
            }
        };
        self.state = Some(CbcState {
            mode,
            key: key.to_bytes(),
            iv,
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
        let state = self.state.take().ok_or_else(not_initialized)?;
        match state.mode {
            CipherMode::Encrypt => self.encrypt(&state, input),
            CipherMode::Decrypt => self.decrypt(&state, input),
        }
    }

    fn iv(&self) -> Option<&[u8]> {
        self.state.as_ref().map(|state| state.iv.as_slice())
    }
}
