// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Symmetric and asymmetric ciphers over [`Encrypted`] / [`Decrypted`]
//! messages.
//!
//! - [`BlockCipher`]: AES-CBC, padded or not. Encryption reports the IV it
//!   used, decryption requires it.
//! - [`AuthenticatingBlockCipher`]: AES-GCM. Encryption reports the IV and
//!   the authentication tag separately from the ciphertext, decryption
//!   requires both and fails closed on any tampering.
//! - [`AsymmetricEncryptCipher`], [`AsymmetricDecryptCipher`] and
//!   [`AsymmetricCipherPair`]: RSA with PKCS#1 v1.5 padding.
//!
//! Each cipher resolves its primitive once. Calls on one instance are
//! serialized by an internal lock; distinct instances are independent.
//!
//! [`Encrypted`]: krypto_models::Encrypted
//! [`Decrypted`]: krypto_models::Decrypted

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod asymmetric;
mod authenticating;
mod block;
mod cipher;

pub use asymmetric::{AsymmetricCipherPair, AsymmetricDecryptCipher, AsymmetricEncryptCipher};
pub use authenticating::AuthenticatingBlockCipher;
pub use block::BlockCipher;
pub use cipher::{Cipher, DecryptCipher, EncryptCipher};
