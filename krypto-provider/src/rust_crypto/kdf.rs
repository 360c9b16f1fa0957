// Copyright (c) 2022 MASSA LABS <info@massa.net>

use krypto_models::{Key, KeyKind, KryptoError};
use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

use crate::algorithms::{HashFunction, PBKDF2_PREFIX};
use crate::primitives::SecretKeyFactory;

/// PBKDF2 keyed by an HMAC pseudo-random function.
pub(crate) struct Pbkdf2KeyFactory {
    algorithm: String,
    prf: HashFunction,
}

impl Pbkdf2KeyFactory {
    pub(crate) fn new(prf: HashFunction) -> Self {
        Pbkdf2KeyFactory {
            algorithm: format!("{}{}", PBKDF2_PREFIX, prf.hmac_name()),
            prf,
        }
    }
}

impl SecretKeyFactory for Pbkdf2KeyFactory {
    fn algorithm(&self) -> &str {
        &self.algorithm
    }

    fn generate_secret(
        &self,
        password: &str,
        salt: &[u8],
        iterations: u32,
        key_length: usize,
    ) -> Result<Key, KryptoError> {
        if salt.is_empty() {
            return Err(KryptoError::InvalidParameter(
                "the salt must not be empty".to_string(),
            ));
        }
        if iterations == 0 {
            return Err(KryptoError::InvalidParameter(
                "the iteration count must be positive".to_string(),
            ));
        }
        if key_length == 0 || key_length % 8 != 0 {
            return Err(KryptoError::InvalidParameter(format!(
                "the key length must be a positive multiple of 8 bits, got {}",
                key_length
            )));
        }
        let mut derived = vec![0u8; key_length / 8];
        let password = password.as_bytes();
        match self.prf {
            HashFunction::Sha1 => pbkdf2_hmac::<Sha1>(password, salt, iterations, &mut derived),
            HashFunction::Sha256 => pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut derived),
            HashFunction::Sha384 => pbkdf2_hmac::<Sha384>(password, salt, iterations, &mut derived),
            HashFunction::Sha512 => pbkdf2_hmac::<Sha512>(password, salt, iterations, &mut derived),
            HashFunction::Md5 => {
                return Err(KryptoError::UnsupportedAlgorithm(self.algorithm.clone()))
            }
        }
        Ok(Key::new(KeyKind::Secret, &self.algorithm, derived))
    }
}
