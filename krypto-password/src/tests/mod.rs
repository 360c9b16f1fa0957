// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::io::Write;

use assert_matches::assert_matches;
use hex_literal::hex;
use krypto_models::bytes::{from_base64, to_base64};
use krypto_models::config::{KryptoConfig, PasswordHashConfig};
use krypto_models::KryptoError;
use krypto_provider::KryptoProvider;

use crate::*;

const PASSWORD: &str = "really secure password YO!";
const SALT: [u8; 8] = hex!("db7f5a6979c8e231");
const RECORD: &str = "v0jmlOb5PaAoJCV1Ci/5D9t/Wml5yOIx";

#[test]
fn test_reference_record() {
    assert_eq!(hash_password(PASSWORD, Some(&SALT)).unwrap(), RECORD);
    assert!(matches_password_hash(PASSWORD, RECORD).unwrap());
    assert!(!matches_password_hash(&format!("{}123", PASSWORD), RECORD).unwrap());
    assert!(matches_password_hash_with_salt_size(PASSWORD, RECORD, 8).unwrap());

    let decoded = from_base64(RECORD).unwrap();
    assert_eq!(extract_salt(&decoded, 8).unwrap(), SALT);
    assert_eq!(
        extract_data(&decoded, 8).unwrap(),
        hex!("bf48e694e6f93da0282425750a2ff90f")
    );
}

#[test]
fn test_generated_salt() {
    let first = hash_password("password", None).unwrap();
    let second = hash_password("password", None).unwrap();
    assert_ne!(first, second);
    assert_eq!(from_base64(&first).unwrap().len(), 16 + 8);
    assert!(matches_password_hash("password", &first).unwrap());
    assert!(matches_password_hash("password", &second).unwrap());
    assert!(!matches_password_hash("Password", &first).unwrap());
}

#[test]
fn test_salt_must_round_trip() {
    // same derived key, other salt: the whole record is compared
    let decoded = from_base64(RECORD).unwrap();
    let mut forged = extract_data(&decoded, 8).unwrap().to_vec();
    forged.extend_from_slice(&[0u8; 8]);
    assert!(!matches_password_hash(PASSWORD, &to_base64(&forged)).unwrap());

    // a salt size that does not match the record
    assert!(!matches_password_hash_with_salt_size(PASSWORD, RECORD, 4).unwrap());
}

#[test]
fn test_malformed_records() {
    assert_matches!(
        matches_password_hash(PASSWORD, "not base64!"),
        Err(KryptoError::DecodingError(_))
    );
    assert_matches!(
        matches_password_hash(PASSWORD, "AAEC"),
        Err(KryptoError::RecordTooShort {
            actual: 3,
            salt_size: 8
        })
    );
    assert_matches!(
        hash_password(PASSWORD, Some(&SALT[..4])),
        Err(KryptoError::InvalidParameter(_))
    );
    assert_matches!(
        matches_password_hash_with_salt_size(PASSWORD, RECORD, 0),
        Err(KryptoError::ConfigError(_))
    );
}

#[test]
fn test_custom_parameters() {
    let params = PasswordHashConfig {
        derivation_algorithm: "HmacSHA256".to_string(),
        iterations: 1000,
        key_length: 256,
        salt_size: 16,
    };
    let hasher = PasswordHasher::new(params, KryptoProvider::default_instance()).unwrap();
    let record = hasher.hash("password", None).unwrap();
    assert_eq!(from_base64(&record).unwrap().len(), 32 + 16);
    assert!(hasher.verify("password", &record).unwrap());
    assert!(!hasher.verify("passwore", &record).unwrap());
    // default parameters read the record differently
    assert!(!matches_password_hash("password", &record).unwrap());
}

#[test]
fn test_hasher_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[password]\nderivation_algorithm = \"HmacSHA512\"\niterations = 2000\nsalt_size = 12"
    )
    .unwrap();
    let config = KryptoConfig::from_file(file.path()).unwrap();
    let hasher = PasswordHasher::from_config(&config).unwrap();
    assert_eq!(hasher.params().iterations, 2000);
    assert_eq!(hasher.params().key_length, 128);

    let record = hasher.hash(PASSWORD, None).unwrap();
    assert_eq!(from_base64(&record).unwrap().len(), 16 + 12);
    assert!(hasher.verify(PASSWORD, &record).unwrap());

    let invalid = PasswordHashConfig {
        iterations: 0,
        ..Default::default()
    };
    assert_matches!(
        PasswordHasher::new(invalid, KryptoProvider::default_instance()),
        Err(KryptoError::ConfigError(_))
    );
}
