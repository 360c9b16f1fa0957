// Copyright (c) 2022 MASSA LABS <info@massa.net>

use assert_matches::assert_matches;
use std::io::Write;

use crate::bytes::{
    concat, fill_random, from_base64, from_hex, from_utf8, generate_random_bytes, to_base64,
    to_hex, to_utf8, DEFAULT_RANDOM_BYTES_SIZE,
};
use crate::config::{KryptoConfig, PasswordHashConfig};
use crate::{Decrypted, Encrypted, Key, KeyKind, KeyPair, KryptoError};

#[test]
fn test_base64() {
    assert_eq!(to_base64(b"foo"), "Zm9v");
    assert_eq!(from_base64("Zm9v").unwrap(), b"foo");
    assert_matches!(from_base64("Zm9v!"), Err(KryptoError::DecodingError(_)));
}

#[test]
fn test_hex() {
    assert_eq!(to_hex(b"foo"), "666F6F");
    assert_eq!(from_hex("666F6F").unwrap(), b"foo");
    assert_eq!(from_hex("666f6f").unwrap(), b"foo");
    assert_matches!(from_hex("666"), Err(KryptoError::DecodingError(_)));
}

#[test]
fn test_utf8() {
    assert_eq!(from_utf8(&to_utf8("héllo")).unwrap(), "héllo");
    assert_matches!(from_utf8(&[0xff, 0xfe]), Err(KryptoError::DecodingError(_)));
}

#[test]
fn test_random_bytes() {
    let a = generate_random_bytes(32).unwrap();
    let b = generate_random_bytes(32).unwrap();
    assert_eq!(a.len(), 32);
    assert_ne!(a, b);
    assert!(generate_random_bytes(0).unwrap().is_empty());
}

#[test]
fn test_fill_random_with_given_rng() {
    let mut rng = rand::rngs::OsRng;
    let mut buffer = [0u8; 16];
    fill_random(&mut buffer, Some(&mut rng)).unwrap();
    assert_ne!(buffer, [0u8; 16]);
}

#[test]
fn test_concat() {
    assert_eq!(concat(b"ab", b"cd"), b"abcd");
    assert_eq!(concat(b"", b"cd"), b"cd");
}

#[test]
fn test_key_accessors_and_debug_redaction() {
    let key = Key::new(KeyKind::Secret, "AES", vec![0xAB; 16]);
    assert_eq!(key.algorithm(), "AES");
    assert_eq!(key.kind(), KeyKind::Secret);
    assert_eq!(key.size(), 128);
    assert_eq!(key.to_bytes(), vec![0xAB; 16]);

    let debug = format!("{:?}", key);
    assert!(debug.contains("AES"));
    assert!(!debug.contains("171"));

    let retagged = key.clone().retagged("HmacSHA256");
    assert_eq!(retagged.algorithm(), "HmacSHA256");
    assert_eq!(retagged.as_bytes(), key.as_bytes());
}

#[test]
fn test_key_pair_parts() {
    let public = Key::new(KeyKind::Public, "RSA", vec![1]);
    let private = Key::new(KeyKind::Private, "RSA", vec![2]);
    let pair = KeyPair::new(public.clone(), private.clone());
    assert_eq!(pair.public(), &public);
    assert_eq!(pair.private(), &private);
    assert_eq!(pair.into_parts(), (public, private));
}

#[test]
fn test_message_builders() {
    let decrypted = Decrypted::new(b"hi".to_vec())
        .with_init_vector(vec![1; 16])
        .with_additional_authenticated_data(b"aad".to_vec());
    assert_eq!(decrypted.init_vector, Some(vec![1; 16]));
    assert_eq!(decrypted.additional_authenticated_data, Some(b"aad".to_vec()));

    let encrypted = Encrypted::new(b"ct".to_vec()).with_authentication_tag(vec![2; 16]);
    assert_eq!(encrypted.init_vector, None);
    assert_eq!(encrypted.authentication_tag, Some(vec![2; 16]));
}

#[test]
fn test_default_config() {
    let config = KryptoConfig::default();
    assert_eq!(config.provider.name, None);
    assert_eq!(config.password.derivation_algorithm, "HmacSHA1");
    assert_eq!(config.password.iterations, 65536);
    assert_eq!(config.password.key_length, 128);
    assert_eq!(config.password.salt_size, DEFAULT_RANDOM_BYTES_SIZE);
    assert_eq!(config.keys.aes_key_size, 128);
    assert_eq!(config.keys.rsa_key_size, 1024);
    config.validate().unwrap();
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[provider]\nname = \"RustCrypto\"\n[password]\niterations = 1000\nsalt_size = 16\n"
    )
    .unwrap();

    let config = KryptoConfig::from_file(file.path()).unwrap();
    assert_eq!(config.provider.name.as_deref(), Some("RustCrypto"));
    assert_eq!(config.password.iterations, 1000);
    assert_eq!(config.password.salt_size, 16);
    // untouched fields keep their defaults
    assert_eq!(config.password.key_length, 128);
    assert_eq!(config.keys.rsa_key_size, 1024);
}

#[test]
fn test_config_from_file_rejects_invalid_values() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[password]\nkey_length = 100\n").unwrap();
    assert_matches!(
        KryptoConfig::from_file(file.path()),
        Err(KryptoError::ConfigError(_))
    );
}

#[test]
fn test_password_config_validation() {
    let config = PasswordHashConfig {
        salt_size: 0,
        ..Default::default()
    };
    assert_matches!(config.validate(), Err(KryptoError::ConfigError(_)));
}

#[test]
fn test_missing_config_file() {
    assert_matches!(
        KryptoConfig::from_file("does/not/exist.toml"),
        Err(KryptoError::ConfigError(_))
    );
}

#[test]
fn test_error_display() {
    assert_eq!(
        KryptoError::MissingParameter("initialization vector (IV)".to_string()).to_string(),
        "initialization vector (IV) required for decryption"
    );
    assert_eq!(
        KryptoError::AlgorithmMismatch {
            expected: "RSA".to_string(),
            actual: "EC".to_string()
        }
        .to_string(),
        "invalid key algorithm: EC (expected: RSA)"
    );
}
