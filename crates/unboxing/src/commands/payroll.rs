//! Payroll command handlers.

use unboxing_core::pages::payroll::{ADD_FORM, DELETE, EDIT, EDIT_FORM, LIST};
use unboxing_core::{FormData, PageId};

use crate::cli::{PayrollArgs, PayrollCommand};
use crate::error::CliError;

use super::{Screens, util};

pub async fn handle(screens: &mut Screens, args: PayrollArgs) -> Result<(), CliError> {
    match args.command {
        PayrollCommand::List => screens.load(PageId::Payroll).await,

        PayrollCommand::Add {
            employee_id,
            amount,
            date,
        } => {
            let input = FormData::new()
                .with("employee_id", employee_id.to_string())
                .with("amount", amount.to_string())
                .with("date", date.format("%Y-%m-%d").to_string());
            screens.submit(PageId::Payroll, ADD_FORM, input).await
        }

        PayrollCommand::Delete { id } => {
            screens.row_action(PageId::Payroll, LIST, DELETE, id).await
        }

        // Without changes this is the list's Edit button: it only points
        // at the edit screen.
        PayrollCommand::Edit {
            id,
            employee_id: None,
            amount: None,
            date: None,
        } => screens.row_action(PageId::Payroll, LIST, EDIT, id).await,

        PayrollCommand::Edit {
            id,
            employee_id,
            amount,
            date,
        } => {
            let mut input = FormData::new().with("id", id.to_string());
            util::set_opt(&mut input, "employee_id", employee_id);
            util::set_opt(&mut input, "amount", amount);
            util::set_opt(&mut input, "date", date.map(|d| d.format("%Y-%m-%d")));
            screens.submit(PageId::EditPayroll, EDIT_FORM, input).await
        }
    }
}
