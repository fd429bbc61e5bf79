//! User account command handlers.
//!
//! `list`, `add`, `show`, `update` use the plain users screen; `edit` and
//! `delete` go through the management screen's row buttons.

use unboxing_core::pages::users::{ADD_FORM, DELETE, EDIT, LIST, UPDATE_FORM, VIEW_FORM};
use unboxing_core::{FormData, PageId};

use crate::cli::{UserUpdateArgs, UsersArgs, UsersCommand};
use crate::error::CliError;

use super::{Screens, util};

fn update_input(args: UserUpdateArgs) -> FormData {
    let mut input = FormData::new().with("id", args.id.to_string());
    util::set_opt(&mut input, "email", args.email);
    util::set_opt(&mut input, "password", args.password);
    util::set_opt(&mut input, "role", args.role);
    input
}

pub async fn handle(screens: &mut Screens, args: UsersArgs) -> Result<(), CliError> {
    match args.command {
        UsersCommand::List => screens.load(PageId::Users).await,

        UsersCommand::Add {
            name,
            email,
            password,
            role,
        } => {
            let password = util::password_or_prompt(password)?;
            let mut input = FormData::new()
                .with("email", email)
                .with("password", password)
                .with("role", role);
            util::set_opt(&mut input, "name", name);
            screens.submit(PageId::Users, ADD_FORM, input).await
        }

        UsersCommand::Show { id } => {
            let input = FormData::new().with("id", id.to_string());
            screens.submit(PageId::Users, VIEW_FORM, input).await
        }

        UsersCommand::Update(update) => {
            screens
                .submit(PageId::Users, UPDATE_FORM, update_input(update))
                .await
        }

        UsersCommand::Delete { id } => {
            screens
                .row_action(PageId::UserManagement, LIST, DELETE, id)
                .await
        }

        UsersCommand::Edit(update) if update.has_changes() => {
            screens
                .submit(PageId::UserManagement, UPDATE_FORM, update_input(update))
                .await
        }

        UsersCommand::Edit(update) => {
            screens
                .row_action(PageId::UserManagement, LIST, EDIT, update.id)
                .await
        }
    }
}
