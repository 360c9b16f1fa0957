// Copyright (c) 2022 MASSA LABS <info@massa.net>

use krypto_logging::krypto_trace;
use krypto_models::bytes::SecureRandom;
use krypto_models::config::{KryptoConfig, DEFAULT_AES_KEY_SIZE};
use krypto_models::{Key, KryptoError};
use krypto_provider::algorithms::AES;
use krypto_provider::KryptoProvider;

/// Wrap raw secret bytes as a key of `algorithm`.
///
/// Lengths are checked for algorithms that constrain them: AES takes 16,
/// 24 or 32 bytes, anything else fails with [`KryptoError::InvalidKeyLength`].
pub fn import_key(
    bytes: &[u8],
    algorithm: &str,
    provider: &KryptoProvider,
) -> Result<Key, KryptoError> {
    provider.key_factory(algorithm)?.import_secret(bytes)
}

/// Wrap raw bytes as an AES key, using the default provider.
///
/// # Example
/// ```
/// # use krypto_keys::import_aes_key;
/// let key = import_aes_key(&[7u8; 16]).unwrap();
/// assert_eq!(key.algorithm(), "AES");
/// assert!(import_aes_key(&[7u8; 15]).is_err());
/// ```
pub fn import_aes_key(bytes: &[u8]) -> Result<Key, KryptoError> {
    import_key(bytes, AES, &KryptoProvider::default_instance())
}

/// Generate a random secret key of `size` bits.
///
/// `rng` replaces the thread-local generator when given.
pub fn generate_random_key(
    algorithm: &str,
    size: usize,
    rng: Option<&mut dyn SecureRandom>,
    provider: &KryptoProvider,
) -> Result<Key, KryptoError> {
    let key = provider.key_generator(algorithm)?.generate_key(size, rng)?;
    krypto_trace!("keys.generate", {"algorithm": algorithm, "size": size});
    Ok(key)
}

/// Generate a random AES key of the default size (128 bits).
pub fn generate_random_aes_key() -> Result<Key, KryptoError> {
    generate_random_key(
        AES,
        DEFAULT_AES_KEY_SIZE,
        None,
        &KryptoProvider::default_instance(),
    )
}

/// Generate a random AES key of `keys.aes_key_size` bits, resolved through
/// the `provider` section of `config`.
pub fn generate_random_aes_key_from_config(config: &KryptoConfig) -> Result<Key, KryptoError> {
    config.keys.validate()?;
    generate_random_key(
        AES,
        config.keys.aes_key_size,
        None,
        &KryptoProvider::from_config(&config.provider),
    )
}
