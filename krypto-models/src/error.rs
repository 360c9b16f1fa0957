// Copyright (c) 2022 MASSA LABS <info@massa.net>

use displaydoc::Display;
use thiserror::Error;

/// Errors surfaced by every krypto operation.
///
/// None of them is retryable without changing the input.
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum KryptoError {
    /// unsupported algorithm: {0}
    UnsupportedAlgorithm(String),
    /// provider not found: {0}
    ProviderNotFound(String),
    /// invalid key length: {actual} bytes (expected {expected})
    InvalidKeyLength {
        /// expected length description, in bytes
        expected: String,
        /// actual length in bytes
        actual: usize,
    },
    /// invalid key algorithm: {actual} (expected: {expected})
    AlgorithmMismatch {
        /// algorithm required by the operation
        expected: String,
        /// algorithm carried by the key
        actual: String,
    },
    /// key of algorithm {key_algorithm} cannot be used with {algorithm}
    InvalidKeyForAlgorithm {
        /// algorithm of the primitive
        algorithm: String,
        /// algorithm carried by the key
        key_algorithm: String,
    },
    /// {0} required for decryption
    MissingParameter(String),
    /// authentication failed: tag mismatch or tampered data
    AuthenticationFailure,
    /// bad padding: wrong key or corrupted ciphertext
    PaddingError,
    /// input length {length} is not a multiple of the block size {block_size}
    InvalidBlockSize {
        /// input length in bytes
        length: usize,
        /// cipher block size in bytes
        block_size: usize,
    },
    /// password hash record too short: {actual} bytes for a salt of {salt_size} bytes
    RecordTooShort {
        /// decoded record length
        actual: usize,
        /// expected salt size
        salt_size: usize,
    },
    /// invalid parameter: {0}
    InvalidParameter(String),
    /// key encoding error: {0}
    KeyEncoding(String),
    /// decoding error: {0}
    DecodingError(String),
    /// randomness source unavailable: {0}
    RandomnessFailure(String),
    /// engine error: {0}
    EngineError(String),
    /// configuration error: {0}
    ConfigError(String),
}

impl From<config::ConfigError> for KryptoError {
    fn from(err: config::ConfigError) -> Self {
        KryptoError::ConfigError(err.to_string())
    }
}
