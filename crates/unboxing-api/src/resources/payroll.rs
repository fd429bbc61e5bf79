// Payroll endpoints
//
// `/v1/payroll[/{id}]`. Updates are partial (`PATCH`).

use tracing::debug;

use crate::catalog;
use crate::client::ResourceClient;
use crate::descriptor::Method;
use crate::error::Error;
use crate::models::{NewPayroll, Payroll, PayrollUpdate, to_payload};
use crate::session::Session;

impl ResourceClient {
    pub async fn list_payroll(&self, session: &Session) -> Result<Vec<Payroll>, Error> {
        debug!("listing payroll entries");
        self.fetch_list(session, &catalog::PAYROLL_LIST, None).await
    }

    pub async fn create_payroll(&self, session: &Session, payroll: &NewPayroll) -> Result<(), Error> {
        debug!(employee_id = payroll.employee_id, "creating payroll entry");
        let payload = to_payload(payroll)?;
        self.perform(
            session,
            &catalog::PAYROLL_CREATE,
            Method::Post,
            None,
            Some(&payload),
        )
        .await
        .into_unit()
    }

    pub async fn update_payroll(
        &self,
        session: &Session,
        id: i64,
        update: &PayrollUpdate,
    ) -> Result<(), Error> {
        let payload = to_payload(update)?;
        let id = id.to_string();
        self.perform(
            session,
            &catalog::PAYROLL_UPDATE,
            Method::Patch,
            Some(&id),
            Some(&payload),
        )
        .await
        .into_unit()
    }

    pub async fn delete_payroll(&self, session: &Session, id: i64) -> Result<(), Error> {
        let id = id.to_string();
        self.perform(
            session,
            &catalog::PAYROLL_DELETE,
            Method::Delete,
            Some(&id),
            None,
        )
        .await
        .into_unit()
    }
}
