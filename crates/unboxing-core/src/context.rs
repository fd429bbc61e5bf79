// Per-run application context
//
// Owns the API client, the session, and the store the session is
// persisted in. Only the login and logout flows write the credential.

use secrecy::SecretString;
use tracing::{debug, warn};
use unboxing_api::{CredentialPolicy, CredentialStore, ResourceClient, Session, TransportConfig};

use crate::error::CoreError;

pub struct AppContext {
    pub client: ResourceClient,
    pub session: Session,
    store: Box<dyn CredentialStore>,
}

impl AppContext {
    /// Assemble a context, restoring the session from `store`.
    pub fn open(client: ResourceClient, store: Box<dyn CredentialStore>) -> Result<Self, CoreError> {
        let session = Session::restore(store.as_ref())?;
        Ok(Self {
            client,
            session,
            store,
        })
    }

    /// Build the client and restore the session in one step.
    pub fn connect(
        base_url: &str,
        transport: &TransportConfig,
        policy: CredentialPolicy,
        store: Box<dyn CredentialStore>,
    ) -> Result<Self, CoreError> {
        let client = ResourceClient::new(base_url, transport)?.with_credential_policy(policy);
        Self::open(client, store)
    }

    /// Replace the session credential for this run only, leaving the
    /// store untouched.
    pub fn override_credential(&mut self, token: SecretString) {
        self.session.sign_in(token);
    }

    /// Persist and adopt a freshly issued credential.
    pub fn sign_in(&mut self, token: SecretString) -> Result<(), CoreError> {
        self.store.set(&token)?;
        self.session.sign_in(token);
        debug!("credential stored");
        Ok(())
    }

    /// Drop the credential from the session and the store.
    ///
    /// The session is cleared even when the store cannot be.
    pub fn sign_out(&mut self) -> Result<(), CoreError> {
        self.session.sign_out();
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "credential store not cleared");
            return Err(e.into());
        }
        debug!("credential cleared");
        Ok(())
    }
}
