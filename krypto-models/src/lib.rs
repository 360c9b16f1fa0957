// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Types shared by every krypto crate: the error taxonomy, key material,
//! encrypted/decrypted messages, byte conversions and configuration.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

pub mod bytes;
pub mod config;
mod error;
mod key;
mod message;

pub use error::KryptoError;
pub use key::{Key, KeyKind, KeyPair};
pub use message::{Decrypted, Encrypted};

#[cfg(test)]
mod tests;
