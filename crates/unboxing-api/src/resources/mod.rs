// Typed endpoint wrappers
//
// Each submodule adds inherent methods to `ResourceClient` for one
// resource. They are conveniences over `perform` that collapse the
// outcome into `Result<T, Error>`; the view layer does not use them.

mod auth;
mod billing;
mod customers;
mod payroll;
mod system;
mod users;

pub use users::USERS_ENVELOPE;

use serde::de::DeserializeOwned;

use crate::client::ResourceClient;
use crate::descriptor::{Method, ResourceDescriptor};
use crate::error::Error;
use crate::models::listing;
use crate::session::Session;

impl ResourceClient {
    /// `GET` a collection and decode every record.
    ///
    /// `envelope` names the key holding the array when the server wraps it.
    pub(crate) async fn fetch_list<T: DeserializeOwned>(
        &self,
        session: &Session,
        descriptor: &ResourceDescriptor,
        envelope: Option<&str>,
    ) -> Result<Vec<T>, Error> {
        let value: serde_json::Value = self
            .perform(session, descriptor, Method::Get, None, None)
            .await
            .decode()?;
        let raw = value.to_string();
        let items = listing(value, envelope).ok_or_else(|| Error::Deserialization {
            message: format!("expected a list of {} records", descriptor.name),
            body: raw.clone(),
        })?;
        serde_json::from_value(serde_json::Value::Array(items)).map_err(|e| {
            Error::Deserialization {
                message: e.to_string(),
                body: raw,
            }
        })
    }

    /// `GET {base}/{id}` and decode the record.
    pub(crate) async fn fetch_one<T: DeserializeOwned>(
        &self,
        session: &Session,
        descriptor: &ResourceDescriptor,
        id: i64,
    ) -> Result<T, Error> {
        let id = id.to_string();
        self.perform(session, descriptor, Method::Get, Some(&id), None)
            .await
            .decode()
    }
}
