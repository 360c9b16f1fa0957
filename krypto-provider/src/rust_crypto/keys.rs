// Copyright (c) 2022 MASSA LABS <info@massa.net>

use krypto_models::bytes::{fill_random, SecureRandom};
use krypto_models::{Key, KeyKind, KeyPair, KryptoError};
use rand::{thread_rng, CryptoRng, RngCore};
use rsa::pkcs8::{
    DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, PrivateKeyInfo,
    SubjectPublicKeyInfoRef,
};
use rsa::{RsaPrivateKey, RsaPublicKey};

use super::invalid_aes_key_length;
use crate::algorithms::{HashFunction, AES, RSA};
use crate::primitives::{KeyFactory, KeyGenerator, KeyPairGenerator};

const RSA_ENCRYPTION_OID: &str = "1.2.840.113549.1.1.1";

/// Common name of a key algorithm OID, or the dotted OID itself.
fn key_algorithm_name(oid: &str) -> String {
    match oid {
        RSA_ENCRYPTION_OID => RSA.to_string(),
        "1.2.840.10045.2.1" => "EC".to_string(),
        "1.3.101.112" => "Ed25519".to_string(),
        "1.3.101.110" => "X25519".to_string(),
        "1.2.840.10040.4.1" => "DSA".to_string(),
        other => other.to_string(),
    }
}

fn check_rsa_oid(oid: String) -> Result<(), KryptoError> {
    if oid != RSA_ENCRYPTION_OID {
        return Err(KryptoError::AlgorithmMismatch {
            expected: RSA.to_string(),
            actual: key_algorithm_name(&oid),
        });
    }
    Ok(())
}

/// Lends a caller-supplied generator to APIs expecting a sized RNG.
struct RngAdapter<'a>(&'a mut dyn SecureRandom);

impl RngCore for RngAdapter<'_> {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for RngAdapter<'_> {}

/// Random AES keys of 128, 192 or 256 bits.
pub(crate) struct AesKeyGenerator;

impl KeyGenerator for AesKeyGenerator {
    fn algorithm(&self) -> &str {
        AES
    }

    fn generate_key(
        &self,
        size: usize,
        rng: Option<&mut dyn SecureRandom>,
    ) -> Result<Key, KryptoError> {
        if !matches!(size, 128 | 192 | 256) {
            return Err(KryptoError::InvalidParameter(format!(
                "AES key size must be 128, 192 or 256 bits, got {}",
                size
            )));
        }
        let mut bytes = vec![0u8; size / 8];
        fill_random(&mut bytes, rng)?;
        Ok(Key::new(KeyKind::Secret, AES, bytes))
    }
}

/// Random HMAC keys of any whole number of bytes.
pub(crate) struct HmacKeyGenerator {
    hash: HashFunction,
}

impl HmacKeyGenerator {
    pub(crate) fn new(hash: HashFunction) -> Self {
        HmacKeyGenerator { hash }
    }
}

impl KeyGenerator for HmacKeyGenerator {
    fn algorithm(&self) -> &str {
        self.hash.hmac_name()
    }

    fn generate_key(
        &self,
        size: usize,
        rng: Option<&mut dyn SecureRandom>,
    ) -> Result<Key, KryptoError> {
        if size == 0 || size % 8 != 0 {
            return Err(KryptoError::InvalidParameter(format!(
                "HMAC key size must be a positive multiple of 8 bits, got {}",
                size
            )));
        }
        let mut bytes = vec![0u8; size / 8];
        fill_random(&mut bytes, rng)?;
        Ok(Key::new(KeyKind::Secret, self.hash.hmac_name(), bytes))
    }
}

/// RSA key pairs, exported as X.509 public and PKCS#8 private DER.
pub(crate) struct RsaKeyPairGenerator;

impl KeyPairGenerator for RsaKeyPairGenerator {
    fn algorithm(&self) -> &str {
        RSA
    }

    fn generate_key_pair(
        &self,
        size: usize,
        rng: Option<&mut dyn SecureRandom>,
    ) -> Result<KeyPair, KryptoError> {
        if size < 512 {
            return Err(KryptoError::InvalidParameter(format!(
                "RSA modulus must be at least 512 bits, got {}",
                size
            )));
        }
        let private_key = match rng {
            Some(rng) => RsaPrivateKey::new(&mut RngAdapter(rng), size),
            None => RsaPrivateKey::new(&mut thread_rng(), size),
        }
        .map_err(|e| KryptoError::EngineError(e.to_string()))?;
        let public_der = RsaPublicKey::from(&private_key)
            .to_public_key_der()
            .map_err(|e| KryptoError::KeyEncoding(e.to_string()))?;
        let private_der = private_key
            .to_pkcs8_der()
            .map_err(|e| KryptoError::KeyEncoding(e.to_string()))?;
        Ok(KeyPair::new(
            Key::new(KeyKind::Public, RSA, public_der.as_bytes().to_vec()),
            Key::new(KeyKind::Private, RSA, private_der.as_bytes().to_vec()),
        ))
    }
}

/// Imports raw AES key bytes.
pub(crate) struct AesKeyFactory;

impl KeyFactory for AesKeyFactory {
    fn algorithm(&self) -> &str {
        AES
    }

    fn import_secret(&self, bytes: &[u8]) -> Result<Key, KryptoError> {
        if !matches!(bytes.len(), 16 | 24 | 32) {
            return Err(invalid_aes_key_length(bytes.len()));
        }
        Ok(Key::new(KeyKind::Secret, AES, bytes.to_vec()))
    }
}

/// Imports raw HMAC key bytes.
pub(crate) struct HmacKeyFactory {
    hash: HashFunction,
}

impl HmacKeyFactory {
    pub(crate) fn new(hash: HashFunction) -> Self {
        HmacKeyFactory { hash }
    }
}

impl KeyFactory for HmacKeyFactory {
    fn algorithm(&self) -> &str {
        self.hash.hmac_name()
    }

    fn import_secret(&self, bytes: &[u8]) -> Result<Key, KryptoError> {
        if bytes.is_empty() {
            return Err(KryptoError::InvalidKeyLength {
                expected: "at least 1".to_string(),
                actual: 0,
            });
        }
        Ok(Key::new(KeyKind::Secret, self.hash.hmac_name(), bytes.to_vec()))
    }
}

/// Imports DER-encoded RSA keys. Keys of any other algorithm are refused.
pub(crate) struct RsaKeyFactory;

impl KeyFactory for RsaKeyFactory {
    fn algorithm(&self) -> &str {
        RSA
    }

    fn import_public(&self, encoded: &[u8]) -> Result<Key, KryptoError> {
        let info = SubjectPublicKeyInfoRef::try_from(encoded)
            .map_err(|e| KryptoError::KeyEncoding(e.to_string()))?;
        check_rsa_oid(info.algorithm.oid.to_string())?;
        RsaPublicKey::from_public_key_der(encoded)
            .map_err(|e| KryptoError::KeyEncoding(e.to_string()))?;
        Ok(Key::new(KeyKind::Public, RSA, encoded.to_vec()))
    }

    fn import_private(&self, encoded: &[u8]) -> Result<Key, KryptoError> {
        let info = PrivateKeyInfo::try_from(encoded)
            .map_err(|e| KryptoError::KeyEncoding(e.to_string()))?;
        check_rsa_oid(info.algorithm.oid.to_string())?;
        RsaPrivateKey::from_pkcs8_der(encoded)
            .map_err(|e| KryptoError::KeyEncoding(e.to_string()))?;
        Ok(Key::new(KeyKind::Private, RSA, encoded.to_vec()))
    }
}
