// User screens
//
// `users` holds the single-purpose forms (add, look up, update, delete by
// id) and the full listing. `user-management` is the combined screen:
// create, list with inline edit and confirmed delete.

use unboxing_api::{Method, USERS_ENVELOPE, catalog};

use crate::format::Column;
use crate::page::{ClickAction, Page};
use crate::view::{CancelFlow, DetailView, FollowUp, FormView, ListView, RowAction};

pub const ADD_FORM: &str = "createUserForm";
pub const ADD_MESSAGE: &str = "createUserMessage";
pub const VIEW_FORM: &str = "viewUserForm";
pub const VIEW_MESSAGE: &str = "viewUserMessage";
pub const DETAIL: &str = "userDetail";
pub const UPDATE_FORM: &str = "updateUserForm";
pub const UPDATE_MESSAGE: &str = "updateUserMessage";
pub const UPDATE_SECTION: &str = "updateUserSection";
pub const DELETE_FORM: &str = "deleteUserForm";
pub const DELETE_MESSAGE: &str = "deleteUserMessage";
pub const LIST: &str = "userList";
pub const REFRESH_BUTTON: &str = "refreshUserList";
pub const CANCEL_BUTTON: &str = "cancelUpdate";

pub const EDIT: &str = "Edit";
pub const DELETE: &str = "Delete";

const COLUMNS: &[Column] = &[
    Column::text("ID", "id"),
    Column::text("Name", "name"),
    Column::text("Email", "email"),
    Column::text("Role", "role"),
    Column::date("Created At", "created_at"),
];

const MANAGEMENT_COLUMNS: &[Column] = &[
    Column::text("ID", "id"),
    Column::text("Email", "email"),
    Column::text("Role", "role"),
];

const DETAIL_FIELDS: &[Column] = &[
    Column::text("Name", "name"),
    Column::text("Email", "email"),
    Column::text("Role", "role"),
    Column::date("Created At", "created_at"),
];

fn user_list(columns: &'static [Column]) -> ListView {
    ListView::new(LIST, &catalog::USER_LIST, columns)
        .envelope(USERS_ENVELOPE)
        .empty("No users found.")
        .failed("Error loading users")
}

fn update_form() -> FormView {
    FormView::new(UPDATE_MESSAGE, &catalog::USER_UPDATE, Method::Patch)
        .addressed_by("id")
        .success("User updated successfully!")
}

pub fn page() -> Page {
    Page::new("users")
        .on_submit(
            ADD_FORM,
            FormView::new(ADD_MESSAGE, &catalog::USER_CREATE, Method::Post)
                .success("User created successfully!"),
        )
        .on_submit(
            VIEW_FORM,
            DetailView::new(VIEW_MESSAGE, DETAIL, &catalog::USER_DETAIL, "id")
                .titled("User", "User Details")
                .fields(DETAIL_FIELDS),
        )
        .on_submit(UPDATE_FORM, update_form())
        .on_submit(
            DELETE_FORM,
            FormView::new(DELETE_MESSAGE, &catalog::USER_DELETE, Method::Delete)
                .addressed_by("id")
                .success("User deleted successfully!"),
        )
        .with_list(user_list(COLUMNS))
}

pub fn management_page() -> Page {
    Page::new("user-management")
        .on_submit(
            ADD_FORM,
            FormView::new(ADD_MESSAGE, &catalog::USER_CREATE, Method::Post)
                .success("User created successfully!")
                .then(FollowUp::Refresh(LIST)),
        )
        .on_submit(
            UPDATE_FORM,
            update_form()
                .then(FollowUp::Hide(UPDATE_SECTION))
                .then(FollowUp::Refresh(LIST)),
        )
        .with_list(
            user_list(MANAGEMENT_COLUMNS)
                .messages_to(UPDATE_MESSAGE)
                .action(
                    EDIT,
                    RowAction::EditInline {
                        descriptor: &catalog::USER_DETAIL,
                        form: UPDATE_FORM,
                        section: UPDATE_SECTION,
                        message: UPDATE_MESSAGE,
                        fill: &[("id", "id"), ("email", "email"), ("role", "role")],
                    },
                )
                .action(
                    DELETE,
                    RowAction::Delete {
                        descriptor: &catalog::USER_DELETE,
                        prompt: "Are you sure you want to delete this user?",
                        success: None,
                    },
                ),
        )
        .on_click(REFRESH_BUTTON, ClickAction::Refresh(LIST))
        .on_click(
            CANCEL_BUTTON,
            ClickAction::Cancel(CancelFlow {
                form: UPDATE_FORM,
                message: UPDATE_MESSAGE,
                section: Some(UPDATE_SECTION),
            }),
        )
}
