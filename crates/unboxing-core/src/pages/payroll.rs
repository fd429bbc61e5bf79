// Payroll screens: add/list with row edit and delete, and the edit form
// the edit button leads to.

use unboxing_api::{Method, catalog};

use crate::format::Column;
use crate::page::Page;
use crate::surface::Route;
use crate::view::{FollowUp, FormView, ListView, RowAction};

pub const ADD_FORM: &str = "addPayrollForm";
pub const ADD_MESSAGE: &str = "addPayrollMessage";
pub const LIST: &str = "payrollList";
pub const LIST_MESSAGE: &str = "payrollMessage";
pub const EDIT_FORM: &str = "editPayrollForm";
pub const EDIT_MESSAGE: &str = "editPayrollMessage";

pub const EDIT: &str = "Edit";
pub const DELETE: &str = "Delete";

const COLUMNS: &[Column] = &[
    Column::text("ID", "id"),
    Column::text("Employee ID", "employee_id"),
    Column::money("Amount", "amount"),
    Column::date("Date", "date"),
];

fn edit_route(id: &str) -> Route {
    Route::EditPayroll { id: id.to_owned() }
}

pub fn page() -> Page {
    Page::new("payroll")
        .on_submit(
            ADD_FORM,
            FormView::new(ADD_MESSAGE, &catalog::PAYROLL_CREATE, Method::Post)
                .success("Payroll added successfully!")
                .then(FollowUp::Refresh(LIST)),
        )
        .with_list(
            ListView::new(LIST, &catalog::PAYROLL_LIST, COLUMNS)
                .empty("No payrolls found.")
                .failed("Error loading payrolls")
                .messages_to(LIST_MESSAGE)
                .action(EDIT, RowAction::Navigate(edit_route))
                .action(
                    DELETE,
                    RowAction::Delete {
                        descriptor: &catalog::PAYROLL_DELETE,
                        prompt: "Are you sure you want to delete this payroll?",
                        success: Some("Payroll deleted successfully!"),
                    },
                ),
        )
}

/// `id` plus any of `employee_id`, `amount`, `date`.
pub fn edit_page() -> Page {
    Page::new("edit-payroll").on_submit(
        EDIT_FORM,
        FormView::new(EDIT_MESSAGE, &catalog::PAYROLL_UPDATE, Method::Patch)
            .addressed_by("id")
            .success("Payroll updated successfully!"),
    )
}
