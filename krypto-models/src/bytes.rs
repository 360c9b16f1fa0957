// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Byte conversions and secure randomness used around the cipher core.

use base64::Engine;
use rand::{thread_rng, CryptoRng, RngCore};

use crate::error::KryptoError;

/// Size of generated random byte sequences (salts) when none is given.
pub const DEFAULT_RANDOM_BYTES_SIZE: usize = 8;

/// Source of cryptographically secure randomness that callers may supply
/// in place of the thread-local generator.
pub trait SecureRandom: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> SecureRandom for T {}

/// Fill `dest` from `rng`, or from the thread-local CSPRNG when `None`.
pub fn fill_random(
    dest: &mut [u8],
    rng: Option<&mut dyn SecureRandom>,
) -> Result<(), KryptoError> {
    match rng {
        Some(rng) => rng.try_fill_bytes(dest),
        None => thread_rng().try_fill_bytes(dest),
    }
    .map_err(|e| KryptoError::RandomnessFailure(e.to_string()))
}

/// Generate `size` secure random bytes.
///
/// # Example
/// ```
/// # use krypto_models::bytes::generate_random_bytes;
/// let salt = generate_random_bytes(8).unwrap();
/// assert_eq!(salt.len(), 8);
/// ```
pub fn generate_random_bytes(size: usize) -> Result<Vec<u8>, KryptoError> {
    let mut bytes = vec![0u8; size];
    fill_random(&mut bytes, None)?;
    Ok(bytes)
}

/// Standard, padded base64.
pub fn to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Decode standard, padded base64.
pub fn from_base64(data: &str) -> Result<Vec<u8>, KryptoError> {
    base64::engine::general_purpose::STANDARD
        .decode(data)
        .map_err(|e| KryptoError::DecodingError(format!("base64: {}", e)))
}

/// Upper-case hexadecimal.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Decode hexadecimal, either case.
pub fn from_hex(data: &str) -> Result<Vec<u8>, KryptoError> {
    hex::decode(data).map_err(|e| KryptoError::DecodingError(format!("hex: {}", e)))
}

/// Encode a string as UTF-8 bytes.
pub fn to_utf8(data: &str) -> Vec<u8> {
    data.as_bytes().to_vec()
}

/// Decode UTF-8 bytes.
pub fn from_utf8(bytes: &[u8]) -> Result<String, KryptoError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| KryptoError::DecodingError(e.to_string()))
}

/// Concatenate two byte sequences into a new one.
pub fn concat(first: &[u8], second: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(first.len() + second.len());
    out.extend_from_slice(first);
    out.extend_from_slice(second);
    out
}
