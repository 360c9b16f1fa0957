// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Incremental digesters: keyed ([`HmacDigester`]) and unkeyed
//! ([`HashDigester`]).
//!
//! A digester resolves its primitive once and reuses it. Each
//! [`DigestBuilder`] locks the digester until `digest()` is called, so
//! concurrent users of one instance are serialized.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod digester;
mod hash;
mod hmac;

pub use digester::{DigestBuilder, Digester};
pub use hash::{HashAlgorithms, HashDigester};
pub use hmac::{HmacAlgorithms, HmacDigester};

#[cfg(test)]
mod tests;
