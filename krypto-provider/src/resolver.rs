// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use krypto_models::config::ProviderConfig;
use krypto_models::KryptoError;
use lazy_static::lazy_static;
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::primitives::{
    CipherPrimitive, DigestPrimitive, KeyFactory, KeyGenerator, KeyPairGenerator, MacPrimitive,
    SecretKeyFactory,
};
use crate::provider::Provider;
use crate::rust_crypto::{RustCryptoProvider, RUST_CRYPTO_PROVIDER_NAME};

lazy_static! {
    static ref DEFAULT_PROVIDER: Arc<dyn Provider> = Arc::new(RustCryptoProvider::new());
    static ref DEFAULT_INSTANCE: Arc<KryptoProvider> = Arc::new(KryptoProvider {
        policy: Policy::Default,
    });
    static ref REGISTRY: RwLock<HashMap<String, Arc<dyn Provider>>> = {
        let mut providers = HashMap::new();
        providers.insert(
            RUST_CRYPTO_PROVIDER_NAME.to_ascii_lowercase(),
            DEFAULT_PROVIDER.clone(),
        );
        RwLock::new(providers)
    };
    static ref BY_NAME: Mutex<HashMap<String, Arc<KryptoProvider>>> = Mutex::new(HashMap::new());
    static ref BY_INSTANCE: Mutex<HashMap<usize, Arc<KryptoProvider>>> =
        Mutex::new(HashMap::new());
}

/// Make `provider` resolvable by its name (case-insensitive). A provider
/// previously registered under the same name is replaced and returned.
pub fn register_provider(provider: Arc<dyn Provider>) -> Option<Arc<dyn Provider>> {
    let name = provider.name().to_string();
    debug!("registering crypto provider {}", name);
    REGISTRY.write().insert(name.to_ascii_lowercase(), provider)
}

/// Remove a registered provider. Named resolvers keep their name and fail
/// with [`KryptoError::ProviderNotFound`] until a provider is registered again.
pub fn unregister_provider(name: &str) -> Option<Arc<dyn Provider>> {
    debug!("unregistering crypto provider {}", name);
    REGISTRY.write().remove(&name.to_ascii_lowercase())
}

enum Policy {
    Default,
    Named(String),
    Handle(Arc<dyn Provider>),
}

/// Resolves algorithm names to fresh primitives following one fixed
/// provider-selection policy.
///
/// Instances are process-wide: the default resolver is a singleton and
/// named or handle resolvers are memoized by provider identity.
pub struct KryptoProvider {
    policy: Policy,
}

impl fmt::Debug for KryptoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.policy {
            Policy::Default => write!(f, "KryptoProvider(default)"),
            Policy::Named(name) => write!(f, "KryptoProvider(name={})", name),
            Policy::Handle(provider) => write!(f, "KryptoProvider(handle={})", provider.name()),
        }
    }
}

impl KryptoProvider {
    /// Resolver using the built-in default provider.
    pub fn default_instance() -> Arc<KryptoProvider> {
        DEFAULT_INSTANCE.clone()
    }

    /// Resolver looking providers up by `name` in the registry. The lookup
    /// happens at resolution time, so the provider may be registered later.
    pub fn instance_for_name(name: &str) -> Arc<KryptoProvider> {
        BY_NAME
            .lock()
            .entry(name.to_ascii_lowercase())
            .or_insert_with(|| {
                debug!("creating crypto provider resolver for name {}", name);
                Arc::new(KryptoProvider {
                    policy: Policy::Named(name.to_string()),
                })
            })
            .clone()
    }

    /// Resolver bound to an explicit provider handle.
    pub fn instance_for_provider(provider: Arc<dyn Provider>) -> Arc<KryptoProvider> {
        let identity = Arc::as_ptr(&provider) as *const () as usize;
        BY_INSTANCE
            .lock()
            .entry(identity)
            .or_insert_with(|| {
                debug!(
                    "creating crypto provider resolver for provider {}",
                    provider.name()
                );
                Arc::new(KryptoProvider {
                    policy: Policy::Handle(provider.clone()),
                })
            })
            .clone()
    }

    /// Resolver selected by configuration.
    pub fn from_config(config: &ProviderConfig) -> Arc<KryptoProvider> {
        match &config.name {
            Some(name) => Self::instance_for_name(name),
            None => Self::default_instance(),
        }
    }

    /// Name of the provider this resolver targets.
    pub fn provider_name(&self) -> &str {
        match &self.policy {
            Policy::Default => DEFAULT_PROVIDER.name(),
            Policy::Named(name) => name,
            Policy::Handle(provider) => provider.name(),
        }
    }

    fn backend(&self) -> Result<Arc<dyn Provider>, KryptoError> {
        match &self.policy {
            Policy::Default => Ok(DEFAULT_PROVIDER.clone()),
            Policy::Named(name) => REGISTRY
                .read()
                .get(&name.to_ascii_lowercase())
                .cloned()
                .ok_or_else(|| KryptoError::ProviderNotFound(name.clone())),
            Policy::Handle(provider) => Ok(provider.clone()),
        }
    }

    /// Key factory for `algorithm`.
    pub fn key_factory(&self, algorithm: &str) -> Result<Box<dyn KeyFactory>, KryptoError> {
        self.backend()?.key_factory(algorithm)
    }

    /// Password-based secret key factory for `algorithm`.
    pub fn secret_key_factory(
        &self,
        algorithm: &str,
    ) -> Result<Box<dyn SecretKeyFactory>, KryptoError> {
        self.backend()?.secret_key_factory(algorithm)
    }

    /// Random secret key generator for `algorithm`.
    pub fn key_generator(&self, algorithm: &str) -> Result<Box<dyn KeyGenerator>, KryptoError> {
        self.backend()?.key_generator(algorithm)
    }

    /// Random key pair generator for `algorithm`.
    pub fn key_pair_generator(
        &self,
        algorithm: &str,
    ) -> Result<Box<dyn KeyPairGenerator>, KryptoError> {
        self.backend()?.key_pair_generator(algorithm)
    }

    /// Cipher for a full `Algorithm/Mode/Padding` transformation.
    pub fn cipher(&self, transformation: &str) -> Result<Box<dyn CipherPrimitive>, KryptoError> {
        self.backend()?.cipher(transformation)
    }

    /// Message authentication code for `algorithm`.
    pub fn mac(&self, algorithm: &str) -> Result<Box<dyn MacPrimitive>, KryptoError> {
        self.backend()?.mac(algorithm)
    }

    /// Message digest for `algorithm`.
    pub fn message_digest(&self, algorithm: &str) -> Result<Box<dyn DigestPrimitive>, KryptoError> {
        self.backend()?.message_digest(algorithm)
    }
}
