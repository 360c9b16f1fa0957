// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Algorithm names understood by the built-in provider.
//!
//! Names follow the usual `Algorithm/Mode/Padding` conventions and are
//! matched case-insensitively.

/// AES block cipher / key algorithm
pub const AES: &str = "AES";
/// RSA asymmetric algorithm
pub const RSA: &str = "RSA";

/// AES in CBC mode with PKCS#5 (PKCS#7) padding
pub const AES_CBC_PKCS5_PADDING: &str = "AES/CBC/PKCS5Padding";
/// AES in CBC mode without padding
pub const AES_CBC_NO_PADDING: &str = "AES/CBC/NoPadding";
/// AES in GCM mode
pub const AES_GCM_NO_PADDING: &str = "AES/GCM/NoPadding";
/// RSA with PKCS#1 v1.5 encryption padding
pub const RSA_ECB_PKCS1_PADDING: &str = "RSA/ECB/PKCS1Padding";

/// HMAC with MD5
pub const HMAC_MD5: &str = "HmacMD5";
/// HMAC with SHA-1
pub const HMAC_SHA1: &str = "HmacSHA1";
/// HMAC with SHA-256
pub const HMAC_SHA256: &str = "HmacSHA256";
/// HMAC with SHA-384
pub const HMAC_SHA384: &str = "HmacSHA384";
/// HMAC with SHA-512
pub const HMAC_SHA512: &str = "HmacSHA512";

/// MD5 digest
pub const MD5: &str = "MD5";
/// SHA-1 digest
pub const SHA1: &str = "SHA-1";
/// SHA-256 digest
pub const SHA256: &str = "SHA-256";
/// SHA-384 digest
pub const SHA384: &str = "SHA-384";
/// SHA-512 digest
pub const SHA512: &str = "SHA-512";

/// Prefix of password-based key derivation algorithms, followed by a MAC name
pub const PBKDF2_PREFIX: &str = "PBKDF2With";

/// Hash functions usable as digests, as HMAC or as PBKDF2 pseudo-random functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    /// MD5
    Md5,
    /// SHA-1
    Sha1,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashFunction {
    const ALL: [HashFunction; 5] = [
        HashFunction::Md5,
        HashFunction::Sha1,
        HashFunction::Sha256,
        HashFunction::Sha384,
        HashFunction::Sha512,
    ];

    /// Canonical digest name, e.g. `SHA-256`.
    pub fn digest_name(&self) -> &'static str {
        match self {
            HashFunction::Md5 => MD5,
            HashFunction::Sha1 => SHA1,
            HashFunction::Sha256 => SHA256,
            HashFunction::Sha384 => SHA384,
            HashFunction::Sha512 => SHA512,
        }
    }

    /// Canonical HMAC name, e.g. `HmacSHA256`.
    pub fn hmac_name(&self) -> &'static str {
        match self {
            HashFunction::Md5 => HMAC_MD5,
            HashFunction::Sha1 => HMAC_SHA1,
            HashFunction::Sha256 => HMAC_SHA256,
            HashFunction::Sha384 => HMAC_SHA384,
            HashFunction::Sha512 => HMAC_SHA512,
        }
    }

    /// Output length in bytes.
    pub fn output_size(&self) -> usize {
        match self {
            HashFunction::Md5 => 16,
            HashFunction::Sha1 => 20,
            HashFunction::Sha256 => 32,
            HashFunction::Sha384 => 48,
            HashFunction::Sha512 => 64,
        }
    }

    /// Parse a digest name. `SHA256` is accepted as well as `SHA-256`.
    pub fn from_digest_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| {
            h.digest_name().eq_ignore_ascii_case(name)
                || h.digest_name().replace('-', "").eq_ignore_ascii_case(name)
        })
    }

    /// Parse an HMAC name such as `HmacSHA256`.
    pub fn from_hmac_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|h| h.hmac_name().eq_ignore_ascii_case(name))
    }

    /// Parse a PBKDF2 name such as `PBKDF2WithHmacSHA1`. MD5 is refused.
    pub fn from_pbkdf2_name(name: &str) -> Option<Self> {
        let prefix = name.get(..PBKDF2_PREFIX.len())?;
        if !prefix.eq_ignore_ascii_case(PBKDF2_PREFIX) {
            return None;
        }
        Self::from_hmac_name(&name[PBKDF2_PREFIX.len()..]).filter(|h| *h != HashFunction::Md5)
    }
}

/// Split a cipher transformation into `(algorithm, mode, padding)`.
///
/// A bare algorithm name gets empty mode and padding.
pub fn split_transformation(transformation: &str) -> Option<(&str, &str, &str)> {
    let mut parts = transformation.split('/');
    let algorithm = parts.next()?;
    match (parts.next(), parts.next(), parts.next()) {
        (None, None, None) => Some((algorithm, "", "")),
        (Some(mode), Some(padding), None) => Some((algorithm, mode, padding)),
        _ => None,
    }
}
