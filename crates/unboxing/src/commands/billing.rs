//! Billing command handlers.

use unboxing_core::pages::billing::ADD_FORM;
use unboxing_core::{FormData, PageId};

use crate::cli::{BillingArgs, BillingCommand};
use crate::error::CliError;

use super::Screens;

pub async fn handle(screens: &mut Screens, args: BillingArgs) -> Result<(), CliError> {
    match args.command {
        BillingCommand::List => screens.load(PageId::Billing).await,

        BillingCommand::Add {
            customer_id,
            amount,
            date,
        } => {
            let input = FormData::new()
                .with("customer_id", customer_id.to_string())
                .with("amount", amount.to_string())
                .with("date", date.format("%Y-%m-%d").to_string());
            screens.submit(PageId::Billing, ADD_FORM, input).await
        }
    }
}
