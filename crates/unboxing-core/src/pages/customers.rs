// Customer screen: add, update, delete by id, look up, list.

use unboxing_api::{Method, catalog};

use crate::format::Column;
use crate::page::{ClickAction, Page};
use crate::view::{CancelFlow, DetailView, FollowUp, FormView, ListView};

pub const ADD_FORM: &str = "addCustomerForm";
pub const ADD_MESSAGE: &str = "addCustomerMessage";
pub const UPDATE_FORM: &str = "updateCustomerForm";
pub const UPDATE_MESSAGE: &str = "updateCustomerMessage";
pub const DELETE_FORM: &str = "deleteCustomerForm";
pub const DELETE_MESSAGE: &str = "deleteCustomerMessage";
pub const VIEW_FORM: &str = "viewCustomerForm";
pub const VIEW_MESSAGE: &str = "viewCustomerMessage";
pub const DETAIL: &str = "customerDetail";
pub const LIST: &str = "customerList";
pub const REFRESH_BUTTON: &str = "refreshCustomerList";
pub const CANCEL_BUTTON: &str = "cancelUpdate";

const COLUMNS: &[Column] = &[
    Column::text("ID", "id"),
    Column::text("Name", "name"),
    Column::text("Email", "email"),
    Column::text("Phone", "phone"),
];

const DETAIL_FIELDS: &[Column] = &[
    Column::text("ID", "id"),
    Column::text("Name", "name"),
    Column::text("Email", "email"),
    Column::text("Phone", "phone"),
    Column::text("Address", "address"),
];

pub fn page() -> Page {
    Page::new("customers")
        .on_submit(
            ADD_FORM,
            FormView::new(ADD_MESSAGE, &catalog::CUSTOMER_CREATE, Method::Post)
                .success("Customer added successfully!")
                .then(FollowUp::Refresh(LIST)),
        )
        .on_submit(
            UPDATE_FORM,
            FormView::new(UPDATE_MESSAGE, &catalog::CUSTOMER_UPDATE, Method::Patch)
                .addressed_by("id")
                .success("Customer updated successfully!"),
        )
        .on_submit(
            DELETE_FORM,
            FormView::new(DELETE_MESSAGE, &catalog::CUSTOMER_DELETE, Method::Delete)
                .addressed_by("id")
                .success("Customer deleted successfully!"),
        )
        .on_submit(
            VIEW_FORM,
            DetailView::new(VIEW_MESSAGE, DETAIL, &catalog::CUSTOMER_DETAIL, "id")
                .titled("Customer", "Customer Details")
                .fields(DETAIL_FIELDS),
        )
        .with_list(
            ListView::new(LIST, &catalog::CUSTOMER_LIST, COLUMNS)
                .empty("No customers found.")
                .failed("Error loading customers."),
        )
        .on_click(REFRESH_BUTTON, ClickAction::Refresh(LIST))
        .on_click(
            CANCEL_BUTTON,
            ClickAction::Cancel(CancelFlow {
                form: UPDATE_FORM,
                message: UPDATE_MESSAGE,
                section: None,
            }),
        )
}
