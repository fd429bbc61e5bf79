//! Customer command handlers.

use unboxing_core::pages::customers::{ADD_FORM, DELETE_FORM, UPDATE_FORM, VIEW_FORM};
use unboxing_core::{FormData, PageId};

use crate::cli::{CustomersArgs, CustomersCommand};
use crate::error::CliError;

use super::{Screens, util};

pub async fn handle(screens: &mut Screens, args: CustomersArgs) -> Result<(), CliError> {
    match args.command {
        CustomersCommand::List => screens.load(PageId::Customers).await,

        CustomersCommand::Add {
            name,
            email,
            phone,
            address,
        } => {
            let mut input = FormData::new()
                .with("name", name)
                .with("email", email)
                .with("phone", phone);
            util::set_opt(&mut input, "address", address);
            screens.submit(PageId::Customers, ADD_FORM, input).await
        }

        CustomersCommand::Update {
            id,
            name,
            email,
            phone,
            address,
        } => {
            let mut input = FormData::new().with("id", id.to_string());
            util::set_opt(&mut input, "name", name);
            util::set_opt(&mut input, "email", email);
            util::set_opt(&mut input, "phone", phone);
            util::set_opt(&mut input, "address", address);
            screens.submit(PageId::Customers, UPDATE_FORM, input).await
        }

        CustomersCommand::Delete { id } => {
            let input = FormData::new().with("id", id.to_string());
            screens.submit(PageId::Customers, DELETE_FORM, input).await
        }

        CustomersCommand::Show { id } => {
            let input = FormData::new().with("id", id.to_string());
            screens.submit(PageId::Customers, VIEW_FORM, input).await
        }
    }
}
