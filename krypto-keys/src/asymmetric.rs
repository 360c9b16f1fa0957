// Copyright (c) 2022 MASSA LABS <info@massa.net>

use krypto_logging::krypto_trace;
use krypto_models::bytes::SecureRandom;
use krypto_models::config::{KryptoConfig, DEFAULT_RSA_KEY_SIZE};
use krypto_models::{Key, KeyPair, KryptoError};
use krypto_provider::algorithms::RSA;
use krypto_provider::KryptoProvider;

fn check_algorithm(key: Key, expected: &str) -> Result<Key, KryptoError> {
    if !key.algorithm().eq_ignore_ascii_case(expected) {
        return Err(KryptoError::AlgorithmMismatch {
            expected: expected.to_string(),
            actual: key.algorithm().to_string(),
        });
    }
    Ok(key)
}

/// Import an X.509 (`SubjectPublicKeyInfo`) DER public key of `algorithm`.
///
/// Fails with [`KryptoError::AlgorithmMismatch`] when the encoding holds a
/// key of another algorithm.
pub fn import_public_key(
    encoded: &[u8],
    algorithm: &str,
    provider: &KryptoProvider,
) -> Result<Key, KryptoError> {
    let key = provider.key_factory(algorithm)?.import_public(encoded)?;
    check_algorithm(key, algorithm)
}

/// Import a PKCS#8 DER private key of `algorithm`.
pub fn import_private_key(
    encoded: &[u8],
    algorithm: &str,
    provider: &KryptoProvider,
) -> Result<Key, KryptoError> {
    let key = provider.key_factory(algorithm)?.import_private(encoded)?;
    check_algorithm(key, algorithm)
}

/// Import both halves of a key pair.
pub fn import_asymmetric_key_pair(
    public: &[u8],
    private: &[u8],
    algorithm: &str,
    provider: &KryptoProvider,
) -> Result<KeyPair, KryptoError> {
    Ok(KeyPair::new(
        import_public_key(public, algorithm, provider)?,
        import_private_key(private, algorithm, provider)?,
    ))
}

/// Import an RSA key pair with the default provider.
pub fn import_rsa_key_pair(public: &[u8], private: &[u8]) -> Result<KeyPair, KryptoError> {
    import_asymmetric_key_pair(public, private, RSA, &KryptoProvider::default_instance())
}

/// Generate a random key pair whose modulus is `size` bits.
pub fn generate_random_asymmetric_key_pair(
    algorithm: &str,
    size: usize,
    rng: Option<&mut dyn SecureRandom>,
    provider: &KryptoProvider,
) -> Result<KeyPair, KryptoError> {
    let pair = provider
        .key_pair_generator(algorithm)?
        .generate_key_pair(size, rng)?;
    krypto_trace!("keys.generate_pair", {"algorithm": algorithm, "size": size});
    Ok(pair)
}

/// Generate a 1024-bit RSA key pair with the default provider.
///
/// # Example
/// ```
/// # use krypto_keys::generate_random_rsa_key_pair;
/// let pair = generate_random_rsa_key_pair().unwrap();
/// assert_eq!(pair.public().algorithm(), "RSA");
/// ```
pub fn generate_random_rsa_key_pair() -> Result<KeyPair, KryptoError> {
    generate_random_asymmetric_key_pair(
        RSA,
        DEFAULT_RSA_KEY_SIZE,
        None,
        &KryptoProvider::default_instance(),
    )
}

/// Generate an RSA key pair whose modulus is `keys.rsa_key_size` bits,
/// resolved through the `provider` section of `config`.
pub fn generate_random_rsa_key_pair_from_config(
    config: &KryptoConfig,
) -> Result<KeyPair, KryptoError> {
    config.keys.validate()?;
    generate_random_asymmetric_key_pair(
        RSA,
        config.keys.rsa_key_size,
        None,
        &KryptoProvider::from_config(&config.provider),
    )
}
