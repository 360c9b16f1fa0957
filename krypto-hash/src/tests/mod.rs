// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use assert_matches::assert_matches;
use hex_literal::hex;
use krypto_keys::{generate_random_rsa_key_pair, import_aes_key};
use krypto_models::bytes::{from_base64, to_base64};
use krypto_models::{Key, KeyKind, KryptoError};
use krypto_provider::KryptoProvider;

use crate::*;

fn reference_key() -> Key {
    import_aes_key(&from_base64("itjy6ug21s7YAcUAC5a/+g==").unwrap()).unwrap()
}

#[test]
fn test_hmac_reference_vector() {
    let hmac = HmacDigester::new(reference_key()).unwrap();
    assert_eq!(hmac.algorithm(), HmacAlgorithms::SHA256);
    assert_eq!(
        to_base64(&hmac.digest(b"Hello World!")),
        "3aZ8watUQFJj5ViEJQlt7RUi4C8+ItnHkduwbt3W558="
    );
    assert_eq!(hmac.key(), &reference_key());
}

#[test]
fn test_hash_reference_vector() {
    let sha256 = HashDigester::new().unwrap();
    assert_eq!(sha256.algorithm(), HashAlgorithms::SHA256);
    assert_eq!(
        to_base64(&sha256.digest(b"Hello World!")),
        "f4OxZX/x/FO5LcGBSKHWXfwtSx+j1ncoSt3SABJtkGk="
    );
    let md5 = HashDigester::with_algorithm(HashAlgorithms::MD5).unwrap();
    assert_eq!(
        md5.digest(b"Hello World!"),
        hex!("ed076287532e86365e841e92bfc50d8c")
    );
}

#[test]
fn test_concatenation_equivalence() {
    let digesters: Vec<Box<dyn Digester>> = vec![
        Box::new(HmacDigester::with_algorithm(reference_key(), HmacAlgorithms::SHA512).unwrap()),
        Box::new(HmacDigester::with_algorithm(reference_key(), HmacAlgorithms::SHA1).unwrap()),
        Box::new(HashDigester::with_algorithm(HashAlgorithms::SHA384).unwrap()),
        Box::new(HashDigester::with_algorithm(HashAlgorithms::SHA1).unwrap()),
    ];
    for digester in digesters {
        let whole = digester.digest(b"first part, second part");
        let streamed = digester
            .digest_builder()
            .update(b"first part, ")
            .update(b"second part")
            .digest();
        assert_eq!(whole, streamed, "{}", digester.algorithm());
        assert_eq!(
            digester.digest_parts(&[&b"first"[..], &b" part, second"[..], &b" part"[..]]),
            whole
        );
    }
}

#[test]
fn test_builder_reuse_and_abandon() {
    let sha256 = HashDigester::new().unwrap();
    let expected = sha256.digest(b"abc");
    assert_eq!(sha256.digest_builder().digest(), sha256.digest(b""));

    // an abandoned builder must not leak into the next digest
    drop(sha256.digest_builder().update(b"leftover"));
    assert_eq!(sha256.digest(b"abc"), expected);
    assert_eq!(sha256.digest(b"abc"), expected);
}

#[test]
fn test_builder_holds_digester_lock() {
    let sha256 = Arc::new(HashDigester::new().unwrap());
    let expected_abc = sha256.digest(b"abc");
    let expected_xyz = sha256.digest(b"xyz");

    let builder = sha256.digest_builder().update(b"a");
    let (sender, receiver) = mpsc::channel();
    let other = sha256.clone();
    let handle = thread::spawn(move || {
        sender.send(other.digest(b"xyz")).unwrap();
    });
    // the other thread waits for the builder
    assert_matches!(
        receiver.recv_timeout(Duration::from_millis(200)),
        Err(mpsc::RecvTimeoutError::Timeout)
    );
    assert_eq!(builder.update(b"bc").digest(), expected_abc);
    assert_eq!(
        receiver.recv_timeout(Duration::from_secs(10)).unwrap(),
        expected_xyz
    );
    handle.join().unwrap();

    // sequential builders in one thread
    let first = sha256.digest_builder().update(b"abc").digest();
    let second = sha256.digest_builder().update(b"xyz").digest();
    assert_eq!((first, second), (expected_abc, expected_xyz));
}

#[test]
fn test_concurrent_digests() {
    let hmac = Arc::new(HmacDigester::new(reference_key()).unwrap());
    let expected = hmac.digest(b"Hello World!");
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let hmac = hmac.clone();
            thread::spawn(move || {
                (0..50)
                    .map(|_| {
                        hmac.digest_builder()
                            .update(b"Hello ")
                            .update(b"World!")
                            .digest()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        for digest in handle.join().unwrap() {
            assert_eq!(digest, expected);
        }
    }
}

#[test]
fn test_invalid_keys_and_algorithms() {
    let pair = generate_random_rsa_key_pair().unwrap();
    assert_matches!(
        HmacDigester::new(pair.public().clone()),
        Err(KryptoError::InvalidKeyForAlgorithm { .. })
    );
    let empty = Key::new(KeyKind::Secret, HmacAlgorithms::SHA256, Vec::new());
    assert_matches!(
        HmacDigester::new(empty),
        Err(KryptoError::InvalidKeyForAlgorithm { .. })
    );
    assert_matches!(
        HmacDigester::with_algorithm(reference_key(), "HmacWhirlpool"),
        Err(KryptoError::UnsupportedAlgorithm(_))
    );
    assert_matches!(
        HashDigester::with_provider("SHA-256", KryptoProvider::instance_for_name("Missing")),
        Err(KryptoError::ProviderNotFound(_))
    );
}

#[test]
fn test_provider_accessor() {
    let provider = KryptoProvider::default_instance();
    let sha1 = HashDigester::with_provider(HashAlgorithms::SHA1, provider.clone()).unwrap();
    assert!(Arc::ptr_eq(sha1.provider(), &provider));
}
