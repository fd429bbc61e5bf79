// Login, registration and dashboard screens

use unboxing_api::{Method, catalog};

use crate::page::{ClickAction, Page};
use crate::surface::Route;
use crate::view::{FollowUp, FormView};

pub const LOGIN_FORM: &str = "loginForm";
pub const REGISTER_FORM: &str = "registerForm";
pub const MESSAGE: &str = "message";
pub const LOGOUT_BUTTON: &str = "logoutButton";

/// `email`, `password`; on success the token is stored and the
/// dashboard opens.
pub fn login() -> Page {
    Page::new("login").on_submit(
        LOGIN_FORM,
        FormView::new(MESSAGE, &catalog::AUTHENTICATION, Method::Post)
            .error_prefix("Login failed: ")
            .then(FollowUp::StoreCredential)
            .then(FollowUp::Redirect(Route::Dashboard)),
    )
}

/// `name`, `email`, `password`, `secret-key`. Server errors are shown
/// without a prefix.
pub fn registration() -> Page {
    Page::new("registration").on_submit(
        REGISTER_FORM,
        FormView::new(MESSAGE, &catalog::REGISTRATION, Method::Post)
            .error_prefix("")
            .then(FollowUp::Redirect(Route::Login)),
    )
}

pub fn dashboard() -> Page {
    Page::new("dashboard")
        .guarded()
        .on_click(LOGOUT_BUTTON, ClickAction::Logout { message: MESSAGE })
}
