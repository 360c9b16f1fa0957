// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::sync::Arc;

use krypto_logging::krypto_trace;
use krypto_provider::{DigestPrimitive, KryptoProvider};
use parking_lot::{Mutex, MutexGuard};

/// Something that digests bytes.
pub trait Digester {
    /// Algorithm name, e.g. `HmacSHA256` or `SHA-256`.
    fn algorithm(&self) -> &str;

    /// Resolver the primitive came from.
    fn provider(&self) -> &Arc<KryptoProvider>;

    /// Start a digest. The digester is locked until the builder is consumed
    /// or dropped.
    ///
    /// # Deadlocks
    ///
    /// The lock is not reentrant: calling `digest_builder`, `digest` or
    /// `digest_parts` on the same digester while a builder is alive in the
    /// same thread never returns. Other threads wait for the builder.
    fn digest_builder(&self) -> DigestBuilder<'_>;

    /// Digest `bytes` in one go.
    fn digest(&self, bytes: &[u8]) -> Vec<u8> {
        self.digest_builder().update(bytes).digest()
    }

    /// Digest the concatenation of `parts`.
    fn digest_parts(&self, parts: &[&[u8]]) -> Vec<u8> {
        parts
            .iter()
            .fold(self.digest_builder(), |builder, part| builder.update(part))
            .digest()
    }
}

/// Streams data into a locked digester.
///
/// `update(a).update(b).digest()` equals `update(a ‖ b).digest()`.
pub struct DigestBuilder<'a> {
    primitive: MutexGuard<'a, Box<dyn DigestPrimitive>>,
    length: usize,
}

impl<'a> DigestBuilder<'a> {
    /// Append data.
    pub fn update(mut self, bytes: &[u8]) -> Self {
        self.primitive.update(bytes);
        self.length += bytes.len();
        self
    }

    /// Finish, leaving the digester ready for the next builder.
    pub fn digest(mut self) -> Vec<u8> {
        let digest = self.primitive.finalize_reset();
        krypto_trace!("digester.digest", {
            "algorithm": self.primitive.algorithm(),
            "len": self.length
        });
        digest
    }
}

/// Primitive and resolver shared by both digester kinds.
pub(crate) struct DigestState {
    pub(crate) provider: Arc<KryptoProvider>,
    primitive: Mutex<Box<dyn DigestPrimitive>>,
}

impl DigestState {
    pub(crate) fn new(provider: Arc<KryptoProvider>, primitive: Box<dyn DigestPrimitive>) -> Self {
        DigestState {
            provider,
            primitive: Mutex::new(primitive),
        }
    }

    pub(crate) fn builder(&self) -> DigestBuilder<'_> {
        let mut primitive = self.primitive.lock();
        // a builder dropped before `digest()` leaves data behind
        primitive.reset();
        DigestBuilder {
            primitive,
            length: 0,
        }
    }
}
