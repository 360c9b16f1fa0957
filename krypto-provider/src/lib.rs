// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Resolution of named algorithms to concrete primitives.
//!
//! A [`Provider`] is a backend able to build primitives (ciphers, MACs,
//! digests, key factories and generators) from algorithm names. A
//! [`KryptoProvider`] resolves every request through one fixed policy:
//! the default backend, a backend registered under a name, or an explicit
//! backend handle. Resolvers are memoized process-wide.
//!
//! The built-in backend is [`RustCryptoProvider`].

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

pub mod algorithms;
mod primitives;
mod provider;
mod resolver;
mod rust_crypto;

pub use primitives::{
    CipherMode, CipherPrimitive, DigestPrimitive, KeyFactory, KeyGenerator, KeyPairGenerator,
    MacPrimitive, SecretKeyFactory,
};
pub use provider::Provider;
pub use resolver::{register_provider, unregister_provider, KryptoProvider};
pub use rust_crypto::{RustCryptoProvider, RUST_CRYPTO_PROVIDER_NAME};
