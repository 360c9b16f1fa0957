// Copyright (c) 2022 MASSA LABS <info@massa.net>

/// Data that is not encrypted, possibly the result of a decryption.
///
/// `init_vector` and `additional_authenticated_data` are only read by
/// encrypting ciphers that use them: when the IV is left out a fresh
/// random one is generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decrypted {
    /// plaintext
    pub bytes: Vec<u8>,
    /// initialization vector to encrypt with
    pub init_vector: Option<Vec<u8>>,
    /// data authenticated along with the plaintext (GCM only)
    pub additional_authenticated_data: Option<Vec<u8>>,
}

impl Decrypted {
    /// Plaintext with no mode parameters.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Decrypted {
            bytes: bytes.into(),
            ..Default::default()
        }
    }

    /// Use an explicit initialization vector.
    pub fn with_init_vector(mut self, init_vector: impl Into<Vec<u8>>) -> Self {
        self.init_vector = Some(init_vector.into());
        self
    }

    /// Authenticate additional data along with the plaintext.
    pub fn with_additional_authenticated_data(mut self, aad: impl Into<Vec<u8>>) -> Self {
        self.additional_authenticated_data = Some(aad.into());
        self
    }
}

/// Data that is encrypted, with the mode parameters needed to decrypt it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encrypted {
    /// ciphertext, without any authentication tag
    pub bytes: Vec<u8>,
    /// initialization vector used for encryption
    pub init_vector: Option<Vec<u8>>,
    /// authentication tag (GCM only)
    pub authentication_tag: Option<Vec<u8>>,
    /// data authenticated along with the plaintext (GCM only)
    pub additional_authenticated_data: Option<Vec<u8>>,
}

impl Encrypted {
    /// Ciphertext with no mode parameters.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Encrypted {
            bytes: bytes.into(),
            ..Default::default()
        }
    }

    /// Attach the initialization vector.
    pub fn with_init_vector(mut self, init_vector: impl Into<Vec<u8>>) -> Self {
        self.init_vector = Some(init_vector.into());
        self
    }

    /// Attach the authentication tag.
    pub fn with_authentication_tag(mut self, tag: impl Into<Vec<u8>>) -> Self {
        self.authentication_tag = Some(tag.into());
        self
    }

    /// Attach the additional authenticated data.
    pub fn with_additional_authenticated_data(mut self, aad: impl Into<Vec<u8>>) -> Self {
        self.additional_authenticated_data = Some(aad.into());
        self
    }
}
