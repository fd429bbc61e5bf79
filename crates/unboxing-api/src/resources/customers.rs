// Customer endpoints
//
// `/v1/customer[/{id}]`

use tracing::debug;

use crate::catalog;
use crate::client::ResourceClient;
use crate::descriptor::Method;
use crate::error::Error;
use crate::models::{Customer, CustomerUpdate, NewCustomer, to_payload};
use crate::session::Session;

impl ResourceClient {
    pub async fn list_customers(&self, session: &Session) -> Result<Vec<Customer>, Error> {
        debug!("listing customers");
        self.fetch_list(session, &catalog::CUSTOMER_LIST, None).await
    }

    pub async fn get_customer(&self, session: &Session, id: i64) -> Result<Customer, Error> {
        self.fetch_one(session, &catalog::CUSTOMER_DETAIL, id).await
    }

    pub async fn create_customer(
        &self,
        session: &Session,
        customer: &NewCustomer,
    ) -> Result<(), Error> {
        debug!(name = %customer.name, "creating customer");
        let payload = to_payload(customer)?;
        self.perform(
            session,
            &catalog::CUSTOMER_CREATE,
            Method::Post,
            None,
            Some(&payload),
        )
        .await
        .into_unit()
    }

    /// Partial update; unset fields are left alone.
    ///
    /// `PATCH /v1/customer/{id}`
    pub async fn update_customer(
        &self,
        session: &Session,
        id: i64,
        update: &CustomerUpdate,
    ) -> Result<(), Error> {
        let payload = to_payload(update)?;
        let id = id.to_string();
        self.perform(
            session,
            &catalog::CUSTOMER_UPDATE,
            Method::Patch,
            Some(&id),
            Some(&payload),
        )
        .await
        .into_unit()
    }

    pub async fn delete_customer(&self, session: &Session, id: i64) -> Result<(), Error> {
        let id = id.to_string();
        self.perform(
            session,
            &catalog::CUSTOMER_DELETE,
            Method::Delete,
            Some(&id),
            None,
        )
        .await
        .into_unit()
    }
}
