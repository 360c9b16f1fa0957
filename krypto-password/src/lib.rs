// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Password hashing with embedded salt.
//!
//! A hash record is `base64(derived key || salt)`: PBKDF2 output followed by
//! the salt it was derived with. The salt length is not stored, so the
//! same salt size must be used to hash and to verify (8 bytes by default).
//!
//! ```
//! # use krypto_password::{hash_password, matches_password_hash};
//! let record = hash_password("hunter2", None).unwrap();
//! assert!(matches_password_hash("hunter2", &record).unwrap());
//! assert!(!matches_password_hash("hunter3", &record).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod hasher;
mod record;

pub use hasher::{
    hash_password, matches_password_hash, matches_password_hash_with_salt_size, PasswordHasher,
};
pub use record::{extract_data, extract_salt};

#[cfg(test)]
mod tests;
