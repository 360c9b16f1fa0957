// Copyright (c) 2022 MASSA LABS <info@massa.net>

use md5::Md5;
use sha1::Sha1;
use sha2::digest::DynDigest;
use sha2::{Sha256, Sha384, Sha512};

use crate::algorithms::HashFunction;
use crate::primitives::DigestPrimitive;

/// Unkeyed message digest.
pub(crate) struct MessageDigest {
    hash: HashFunction,
    inner: Box<dyn DynDigest + Send>,
}

impl MessageDigest {
    pub(crate) fn new(hash: HashFunction) -> Self {
        let inner: Box<dyn DynDigest + Send> = match hash {
            HashFunction::Md5 => Box::<Md5>::default(),
            HashFunction::Sha1 => Box::<Sha1>::default(),
            HashFunction::Sha256 => Box::<Sha256>::default(),
            HashFunction::Sha384 => Box::<Sha384>::default(),
            HashFunction::Sha512 => Box::<Sha512>::default(),
        };
        MessageDigest { hash, inner }
    }
}

impl DigestPrimitive for MessageDigest {
    fn algorithm(&self) -> &str {
        self.hash.digest_name()
    }

    fn output_size(&self) -> usize {
        self.inner.output_size()
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize_reset(&mut self) -> Vec<u8> {
        self.inner.finalize_reset().into_vec()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}
