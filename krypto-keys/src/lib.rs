// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Key management: import of raw and encoded key material, random
//! generation, and password-based derivation.
//!
//! Every operation resolves its primitives through a [`KryptoProvider`];
//! the short-named helpers (`import_aes_key`, `generate_random_aes_key`,
//! ...) use the default one.
//!
//! [`KryptoProvider`]: krypto_provider::KryptoProvider

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod asymmetric;
mod password_based;
mod secret;

pub use asymmetric::{
    generate_random_asymmetric_key_pair, generate_random_rsa_key_pair,
    generate_random_rsa_key_pair_from_config, import_asymmetric_key_pair, import_private_key,
    import_public_key, import_rsa_key_pair,
};
pub use password_based::{derive_aes_key_from_password, PasswordBasedKey};
pub use secret::{
    generate_random_aes_key, generate_random_aes_key_from_config, generate_random_key,
    import_aes_key, import_key,
};

#[cfg(test)]
mod tests;
