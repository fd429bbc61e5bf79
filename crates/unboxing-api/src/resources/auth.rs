// Authentication endpoints
//
// Both calls are form-encoded and never carry a bearer token.

use tracing::debug;

use crate::catalog;
use crate::client::ResourceClient;
use crate::descriptor::Method;
use crate::error::Error;
use crate::models::{
    AuthenticationResponse, AuthenticationToken, Credentials, Registration, to_payload,
};
use crate::outcome::Body;
use crate::session::Session;

impl ResourceClient {
    /// Exchange email and password for a bearer token.
    ///
    /// `POST /tokens/authentication`
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthenticationToken, Error> {
        debug!(email = %credentials.email, "authenticating");
        let payload = to_payload(credentials)?;
        let response: AuthenticationResponse = self
            .perform(
                &Session::anonymous(),
                &catalog::AUTHENTICATION,
                Method::Post,
                None,
                Some(&payload),
            )
            .await
            .decode()?;
        Ok(response.authentication_token.into())
    }

    /// Register an administrator account. Returns the server's reply text.
    ///
    /// `POST /admin/register`
    pub async fn register_admin(&self, registration: &Registration) -> Result<String, Error> {
        debug!(email = %registration.email, "registering administrator");
        let payload = to_payload(registration)?;
        let body = self
            .perform(
                &Session::anonymous(),
                &catalog::REGISTRATION,
                Method::Post,
                None,
                Some(&payload),
            )
            .await
            .into_body()?;
        Ok(match body {
            Body::Text(text) => text.trim().to_owned(),
            Body::Json(value) => value.to_string(),
            Body::Empty => String::new(),
        })
    }
}
