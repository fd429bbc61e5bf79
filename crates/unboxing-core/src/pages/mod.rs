// Screen catalog
//
// Each back-office screen is a `Page` assembled from the generic views.
// Element ids are exported so front ends can address forms, lists and
// buttons.

pub mod auth;
pub mod billing;
pub mod customers;
pub mod payroll;
pub mod users;

use strum::{Display, EnumIter, EnumString};

use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum PageId {
    Login,
    Registration,
    Dashboard,
    Customers,
    Billing,
    Payroll,
    EditPayroll,
    Users,
    UserManagement,
}

impl PageId {
    pub fn build(self) -> Page {
        match self {
            Self::Login => auth::login(),
            Self::Registration => auth::registration(),
            Self::Dashboard => auth::dashboard(),
            Self::Customers => customers::page(),
            Self::Billing => billing::page(),
            Self::Payroll => payroll::page(),
            Self::EditPayroll => payroll::edit_page(),
            Self::Users => users::page(),
            Self::UserManagement => users::management_page(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_page_builds_under_its_own_name() {
        for id in PageId::iter() {
            let page = id.build();
            assert_eq!(page.name(), id.to_string());
            assert_eq!(PageId::from_str(page.name()).ok(), Some(id));
        }
    }

    #[test]
    fn only_the_dashboard_is_guarded() {
        let guarded: Vec<_> = PageId::iter().filter(|id| id.build().is_guarded()).collect();
        assert_eq!(guarded, vec![PageId::Dashboard]);
    }
}
