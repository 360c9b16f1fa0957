// Copyright (c) 2022 MASSA LABS <info@massa.net>

/// Which half of which kind of key a [`Key`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// symmetric secret (raw bytes)
    Secret,
    /// public half of an asymmetric pair (X.509 `SubjectPublicKeyInfo` DER)
    Public,
    /// private half of an asymmetric pair (PKCS#8 DER)
    Private,
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            KeyKind::Secret => write!(f, "secret"),
            KeyKind::Public => write!(f, "public"),
            KeyKind::Private => write!(f, "private"),
        }
    }
}

/// Immutable key material tagged with its algorithm.
///
/// `Key` does no validation on its own: use the import, generation and
/// derivation functions of `krypto_keys`, which check lengths, encodings
/// and algorithm tags through a provider before building one.
///
/// A `Key` can be shared between any number of ciphers and digesters.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Key {
    algorithm: String,
    kind: KeyKind,
    bytes: Vec<u8>,
}

impl Key {
    /// Wrap already validated material.
    ///
    /// # Example
    /// ```
    /// # use krypto_models::{Key, KeyKind};
    /// let key = Key::new(KeyKind::Secret, "AES", vec![0u8; 16]);
    /// assert_eq!(key.algorithm(), "AES");
    /// assert_eq!(key.size(), 128);
    /// ```
    pub fn new(kind: KeyKind, algorithm: &str, bytes: Vec<u8>) -> Self {
        Key {
            algorithm: algorithm.to_string(),
            kind,
            bytes,
        }
    }

    /// Algorithm tag, e.g. `AES` or `RSA`.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Kind of material held.
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// Encoded form: raw bytes for secrets, X.509 DER for public keys,
    /// PKCS#8 DER for private keys.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Owned copy of [`Key::as_bytes`].
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Size of the encoded form in bits.
    pub fn size(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Same material under another algorithm tag.
    ///
    /// PBKDF2 output is algorithm agnostic, so derived keys are re-tagged.
    pub fn retagged(self, algorithm: &str) -> Self {
        Key {
            algorithm: algorithm.to_string(),
            ..self
        }
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Key")
            .field("algorithm", &self.algorithm)
            .field("kind", &self.kind)
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

/// Public and private halves of an asymmetric key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public: Key,
    private: Key,
}

impl KeyPair {
    /// Pair two halves. No check is done that they belong together.
    pub fn new(public: Key, private: Key) -> Self {
        KeyPair { public, private }
    }

    /// Public half.
    pub fn public(&self) -> &Key {
        &self.public
    }

    /// Private half.
    pub fn private(&self) -> &Key {
        &self.private
    }

    /// Split into `(public, private)`.
    pub fn into_parts(self) -> (Key, Key) {
        (self.public, self.private)
    }
}
