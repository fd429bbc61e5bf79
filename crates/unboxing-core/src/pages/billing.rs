// Billing screen: add and list.

use unboxing_api::{Method, catalog};

use crate::format::Column;
use crate::page::Page;
use crate::view::{FollowUp, FormView, ListView};

pub const ADD_FORM: &str = "addBillingForm";
pub const ADD_MESSAGE: &str = "addBillingMessage";
pub const LIST: &str = "billingList";

const COLUMNS: &[Column] = &[
    Column::text("ID", "id"),
    Column::text("Customer ID", "customer_id"),
    Column::money("Amount", "amount"),
    Column::date("Date", "date"),
];

pub fn page() -> Page {
    Page::new("billing")
        .on_submit(
            ADD_FORM,
            FormView::new(ADD_MESSAGE, &catalog::BILLING_CREATE, Method::Post)
                .success("Billing added successfully!")
                .then(FollowUp::Refresh(LIST)),
        )
        .with_list(
            ListView::new(LIST, &catalog::BILLING_LIST, COLUMNS)
                .empty("No billings found.")
                .failed("An error occurred while fetching billings."),
        )
}
