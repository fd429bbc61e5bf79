// Billing endpoints

use tracing::debug;

use crate::catalog;
use crate::client::ResourceClient;
use crate::descriptor::Method;
use crate::error::Error;
use crate::models::{Billing, NewBilling, to_payload};
use crate::session::Session;

impl ResourceClient {
    /// `GET /v1/billing`
    pub async fn list_billing(&self, session: &Session) -> Result<Vec<Billing>, Error> {
        debug!("listing billing records");
        self.fetch_list(session, &catalog::BILLING_LIST, None).await
    }

    /// `POST /v1/billing`
    pub async fn create_billing(&self, session: &Session, billing: &NewBilling) -> Result<(), Error> {
        debug!(customer_id = billing.customer_id, "creating billing record");
        let payload = to_payload(billing)?;
        self.perform(
            session,
            &catalog::BILLING_CREATE,
            Method::Post,
            None,
            Some(&payload),
        )
        .await
        .into_unit()
    }
}
