// Copyright (c) 2022 MASSA LABS <info@massa.net>

use assert_matches::assert_matches;
use hex_literal::hex;
use krypto_models::config::{KeyConfig, KryptoConfig, PasswordHashConfig, ProviderConfig};
use krypto_models::{KeyKind, KryptoError};
use krypto_provider::algorithms::{AES, HMAC_SHA256, RSA};
use krypto_provider::{CipherMode, KryptoProvider};

use crate::*;

const SALT: [u8; 8] = [219, 127, 90, 105, 121, 200, 226, 49];

#[test]
fn test_import_aes_key() {
    let key = import_aes_key(&hex!("8ad8f2eae836d6ced801c5000b96bffa")).unwrap();
    assert_eq!(key.algorithm(), AES);
    assert_eq!(key.kind(), KeyKind::Secret);
    assert_eq!(key.size(), 128);
    assert_eq!(import_aes_key(&[1u8; 32]).unwrap().size(), 256);
    assert_matches!(
        import_aes_key(&[1u8; 17]),
        Err(KryptoError::InvalidKeyLength { actual: 17, .. })
    );
    assert_matches!(
        import_key(&[1u8; 8], "DES", &KryptoProvider::default_instance()),
        Err(KryptoError::UnsupportedAlgorithm(_))
    );
}

#[test]
fn test_generate_random_keys() {
    let first = generate_random_aes_key().unwrap();
    let second = generate_random_aes_key().unwrap();
    assert_eq!(first.size(), 128);
    assert_ne!(first, second);

    let mut rng = rand::rngs::OsRng;
    let hmac_key = generate_random_key(
        HMAC_SHA256,
        256,
        Some(&mut rng),
        &KryptoProvider::default_instance(),
    )
    .unwrap();
    assert_eq!(hmac_key.algorithm(), HMAC_SHA256);
    assert_eq!(hmac_key.as_bytes().len(), 32);
}

#[test]
fn test_derive_aes_key_from_password() {
    let derived = derive_aes_key_from_password("really secure password YO!", Some(&SALT)).unwrap();
    assert_eq!(
        derived.key().as_bytes(),
        hex!("bf48e694e6f93da0282425750a2ff90f")
    );
    assert_eq!(derived.key().algorithm(), AES);
    assert_eq!(derived.salt(), SALT);
    assert_eq!(derived.iterations(), 65536);
    assert_eq!(derived.key_length(), 128);
    assert_eq!(derived.derivation_algorithm(), "PBKDF2WithHmacSHA1");

    let again = derive_aes_key_from_password("really secure password YO!", Some(&SALT)).unwrap();
    assert_eq!(derived, again);
}

#[test]
fn test_derive_with_generated_salt() {
    let params = PasswordHashConfig {
        derivation_algorithm: "HmacSHA256".to_string(),
        iterations: 1000,
        key_length: 256,
        salt_size: 16,
    };
    let provider = KryptoProvider::default_instance();
    let first = PasswordBasedKey::derive("password", None, &params, &provider).unwrap();
    let second = PasswordBasedKey::derive("password", None, &params, &provider).unwrap();
    assert_eq!(first.salt().len(), 16);
    assert_eq!(first.key().size(), 256);
    assert_eq!(first.derivation_algorithm(), "PBKDF2WithHmacSHA256");
    assert_ne!(first.salt(), second.salt());
    assert_ne!(first.key(), second.key());

    let replay =
        PasswordBasedKey::derive("password", Some(first.salt()), &params, &provider).unwrap();
    assert_eq!(replay.into_key(), first.into_key());
}

#[test]
fn test_derive_invalid_parameters() {
    let provider = KryptoProvider::default_instance();
    let params = PasswordHashConfig {
        derivation_algorithm: "HmacMD5".to_string(),
        ..Default::default()
    };
    assert_matches!(
        PasswordBasedKey::derive("password", Some(&SALT), &params, &provider),
        Err(KryptoError::UnsupportedAlgorithm(_))
    );
    let params = PasswordHashConfig {
        iterations: 0,
        ..Default::default()
    };
    assert_matches!(
        PasswordBasedKey::derive("password", Some(&SALT), &params, &provider),
        Err(KryptoError::InvalidParameter(_))
    );
}

#[test]
fn test_asymmetric_key_pair() {
    let pair = generate_random_rsa_key_pair().unwrap();
    assert_eq!(pair.public().kind(), KeyKind::Public);
    assert_eq!(pair.private().kind(), KeyKind::Private);
    assert_eq!(pair.private().algorithm(), RSA);

    let imported =
        import_rsa_key_pair(pair.public().as_bytes(), pair.private().as_bytes()).unwrap();
    assert_eq!(imported, pair);

    let provider = KryptoProvider::default_instance();
    let public = import_public_key(pair.public().as_bytes(), "rsa", &provider).unwrap();
    assert_eq!(&public, pair.public());
    assert_matches!(
        import_private_key(pair.public().as_bytes(), RSA, &provider),
        Err(KryptoError::KeyEncoding(_))
    );
}

/// Modulus size in bits, read back from one encryption.
fn rsa_modulus_bits(public: &krypto_models::Key) -> usize {
    let mut cipher = KryptoProvider::default_instance()
        .cipher("RSA/ECB/PKCS1Padding")
        .unwrap();
    cipher.init(CipherMode::Encrypt, public, None).unwrap();
    cipher.do_final(b"size").unwrap().len() * 8
}

#[test]
fn test_generate_from_key_config() {
    let defaults = KryptoConfig::default();
    assert_eq!(generate_random_aes_key_from_config(&defaults).unwrap().size(), 128);
    let pair = generate_random_rsa_key_pair_from_config(&defaults).unwrap();
    assert_eq!(rsa_modulus_bits(pair.public()), 1024);

    let config = KryptoConfig {
        keys: KeyConfig {
            aes_key_size: 256,
            rsa_key_size: 2048,
        },
        ..Default::default()
    };
    let key = generate_random_aes_key_from_config(&config).unwrap();
    assert_eq!(key.algorithm(), AES);
    assert_eq!(key.size(), 256);
    let pair = generate_random_rsa_key_pair_from_config(&config).unwrap();
    assert_eq!(rsa_modulus_bits(pair.public()), 2048);

    let invalid = KryptoConfig {
        keys: KeyConfig {
            aes_key_size: 100,
            ..Default::default()
        },
        ..Default::default()
    };
    assert_matches!(
        generate_random_aes_key_from_config(&invalid),
        Err(KryptoError::ConfigError(_))
    );
    let unknown_provider = KryptoConfig {
        provider: ProviderConfig {
            name: Some("no such provider".to_string()),
        },
        ..Default::default()
    };
    assert_matches!(
        generate_random_rsa_key_pair_from_config(&unknown_provider),
        Err(KryptoError::ProviderNotFound(_))
    );
}

#[test]
fn test_import_foreign_public_key() {
    let mut ed25519 = hex!("302a300506032b6570032100").to_vec();
    ed25519.extend_from_slice(&[3u8; 32]);
    assert_matches!(
        import_public_key(&ed25519, RSA, &KryptoProvider::default_instance()),
        Err(KryptoError::AlgorithmMismatch { expected, actual })
            if expected == "RSA" && actual == "Ed25519"
    );
}
