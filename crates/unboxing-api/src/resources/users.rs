// User management endpoints
//
// The user listing may arrive bare or wrapped as `{"users": [...]}`.

use tracing::debug;

use crate::catalog;
use crate::client::ResourceClient;
use crate::descriptor::Method;
use crate::error::Error;
use crate::models::{NewUser, User, UserUpdate, to_payload};
use crate::session::Session;

/// Envelope key of the user listing.
pub const USERS_ENVELOPE: &str = "users";

impl ResourceClient {
    pub async fn list_users(&self, session: &Session) -> Result<Vec<User>, Error> {
        debug!("listing users");
        self.fetch_list(session, &catalog::USER_LIST, Some(USERS_ENVELOPE))
            .await
    }

    pub async fn get_user(&self, session: &Session, id: i64) -> Result<User, Error> {
        self.fetch_one(session, &catalog::USER_DETAIL, id).await
    }

    pub async fn create_user(&self, session: &Session, user: &NewUser) -> Result<(), Error> {
        debug!(email = %user.email, role = %user.role, "creating user");
        let payload = to_payload(user)?;
        self.perform(session, &catalog::USER_CREATE, Method::Post, None, Some(&payload))
            .await
            .into_unit()
    }

    /// `PATCH /v1/user/{id}`
    pub async fn update_user(
        &self,
        session: &Session,
        id: i64,
        update: &UserUpdate,
    ) -> Result<(), Error> {
        let payload = to_payload(update)?;
        let id = id.to_string();
        self.perform(
            session,
            &catalog::USER_UPDATE,
            Method::Patch,
            Some(&id),
            Some(&payload),
        )
        .await
        .into_unit()
    }

    pub async fn delete_user(&self, session: &Session, id: i64) -> Result<(), Error> {
        let id = id.to_string();
        self.perform(session, &catalog::USER_DELETE, Method::Delete, Some(&id), None)
            .await
            .into_unit()
    }
}
