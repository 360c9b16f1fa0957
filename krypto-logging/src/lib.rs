// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Structured trace events shared by the krypto crates.
//!
//! Never pass key bytes, plaintext, passwords or salts as parameters:
//! only algorithm names, lengths and flags.

/// Emit a `tracing` trace event tagged with `krypto_trace`, an event name
/// and a JSON object of parameters.
///
/// ```
/// # use krypto_logging::krypto_trace;
/// krypto_trace!("cipher.encrypt", {"algorithm": "AES/CBC/PKCS5Padding", "len": 12});
/// ```
#[macro_export]
macro_rules! krypto_trace {
    ($evt:expr, $params:tt) => {
        tracing::trace!("krypto_trace:{}:{}", $evt, serde_json::json!($params));
    };
}
