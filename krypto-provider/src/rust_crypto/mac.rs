// Copyright (c) 2022 MASSA LABS <info@massa.net>

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use krypto_models::{Key, KeyKind, KryptoError};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

use crate::algorithms::HashFunction;
use crate::primitives::{DigestPrimitive, MacPrimitive};

#[derive(Clone)]
enum HmacState {
    Md5(Hmac<Md5>),
    Sha1(Hmac<Sha1>),
    Sha256(Hmac<Sha256>),
    Sha384(Hmac<Sha384>),
    Sha512(Hmac<Sha512>),
}

macro_rules! with_hmac {
    ($state:expr, $mac:ident => $body:expr) => {
        match $state {
            HmacState::Md5($mac) => $body,
            HmacState::Sha1($mac) => $body,
            HmacState::Sha256($mac) => $body,
            HmacState::Sha384($mac) => $body,
            HmacState::Sha512($mac) => $body,
        }
    };
}

impl HmacState {
    fn new(hash: HashFunction, key: &[u8]) -> Result<Self, KryptoError> {
        Ok(match hash {
            HashFunction::Md5 => HmacState::Md5(hmac_from_key(key)?),
            HashFunction::Sha1 => HmacState::Sha1(hmac_from_key(key)?),
            HashFunction::Sha256 => HmacState::Sha256(hmac_from_key(key)?),
            HashFunction::Sha384 => HmacState::Sha384(hmac_from_key(key)?),
            HashFunction::Sha512 => HmacState::Sha512(hmac_from_key(key)?),
        })
    }
}

fn hmac_from_key<M: Mac + KeyInit>(key: &[u8]) -> Result<M, KryptoError> {
    <M as KeyInit>::new_from_slice(key).map_err(|e| KryptoError::EngineError(e.to_string()))
}

/// Unkeyed HMAC.
pub(crate) struct HmacPrimitive {
    hash: HashFunction,
}

impl HmacPrimitive {
    pub(crate) fn new(hash: HashFunction) -> Self {
        HmacPrimitive { hash }
    }
}

impl MacPrimitive for HmacPrimitive {
    fn algorithm(&self) -> &str {
        self.hash.hmac_name()
    }

    fn init(self: Box<Self>, key: &Key) -> Result<Box<dyn DigestPrimitive>, KryptoError> {
        if key.kind() != KeyKind::Secret || key.as_bytes().is_empty() {
            return Err(KryptoError::InvalidKeyForAlgorithm {
                algorithm: self.hash.hmac_name().to_string(),
                key_algorithm: format!("{} ({})", key.algorithm(), key.kind()),
            });
        }
        let initial = HmacState::new(self.hash, key.as_bytes())?;
        Ok(Box::new(KeyedHmac {
            hash: self.hash,
            current: initial.clone(),
            initial,
        }))
    }
}

/// HMAC bound to a key. Resetting restores the freshly keyed state.
struct KeyedHmac {
    hash: HashFunction,
    initial: HmacState,
    current: HmacState,
}

impl DigestPrimitive for KeyedHmac {
    fn algorithm(&self) -> &str {
        self.hash.hmac_name()
    }

    fn output_size(&self) -> usize {
        self.hash.output_size()
    }

    fn update(&mut self, data: &[u8]) {
        with_hmac!(&mut self.current, mac => mac.update(data))
    }

    fn finalize_reset(&mut self) -> Vec<u8> {
        let state = std::mem::replace(&mut self.current, self.initial.clone());
        with_hmac!(state, mac => mac.finalize().into_bytes().to_vec())
    }

    fn reset(&mut self) {
        self.current = self.initial.clone();
    }
}
