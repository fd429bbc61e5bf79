// Session context and credential storage
//
// The bearer credential is carried by an explicit `Session` value that the
// caller threads into every request, instead of being read from ambient
// storage. A `CredentialStore` persists it between runs; only sign-in and
// sign-out write to it.

use std::sync::RwLock;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::debug;

/// Name of the single storage slot holding the bearer token.
pub const CREDENTIAL_SLOT: &str = "authToken";

/// Failure reading or writing the credential store.
#[derive(Debug, Error)]
#[error("credential store error: {0}")]
pub struct StoreError(pub String);

/// Persistent home for the bearer credential.
///
/// Implementations hold at most one token.
pub trait CredentialStore: Send + Sync {
    fn get(&self) -> Result<Option<SecretString>, StoreError>;
    fn set(&self, token: &SecretString) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// Process-lifetime store, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self) -> Result<Option<SecretString>, StoreError> {
        let guard = self
            .slot
            .read()
            .map_err(|_| StoreError("memory store lock poisoned".into()))?;
        Ok(guard.clone().map(SecretString::from))
    }

    fn set(&self, token: &SecretString) -> Result<(), StoreError> {
        let mut guard = self
            .slot
            .write()
            .map_err(|_| StoreError("memory store lock poisoned".into()))?;
        *guard = Some(token.expose_secret().to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self
            .slot
            .write()
            .map_err(|_| StoreError("memory store lock poisoned".into()))?;
        *guard = None;
        Ok(())
    }
}

/// Per-run authentication context.
#[derive(Debug, Clone, Default)]
pub struct Session {
    credential: Option<SecretString>,
}

impl Session {
    /// A session without a credential.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_credential(token: impl Into<String>) -> Self {
        Self {
            credential: Some(SecretString::from(token.into())),
        }
    }

    /// Load whatever credential the store holds.
    pub fn restore(store: &dyn CredentialStore) -> Result<Self, StoreError> {
        let credential = store.get()?;
        debug!(authenticated = credential.is_some(), "session restored");
        Ok(Self { credential })
    }

    pub fn credential(&self) -> Option<&SecretString> {
        self.credential.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn sign_in(&mut self, token: SecretString) {
        self.credential = Some(token);
    }

    pub fn sign_out(&mut self) {
        self.credential = None;
    }
}
