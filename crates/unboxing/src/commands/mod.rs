//! Command dispatch: bridges CLI args -> screen triggers -> terminal output.
//!
//! Every resource command opens the matching back-office screen, feeds it
//! one trigger (load, form submit, button, row button) and lets the
//! terminal surface render whatever the screen shows.

pub mod auth;
pub mod billing;
pub mod config_cmd;
pub mod customers;
pub mod health;
pub mod payroll;
pub mod users;
pub mod util;

use secrecy::SecretString;
use tracing::debug;

use unboxing_core::{AppContext, FormData, PageId, Trigger};

use crate::cli::{Command, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;
use crate::surface::TerminalSurface;

/// A connected context plus the surface screens render to.
pub struct Screens {
    pub ctx: AppContext,
    pub surface: TerminalSurface,
    pub resolved: config::Resolved,
    /// Whether a stored token outlives this run.
    pub persistent: bool,
}

impl Screens {
    /// Resolve the profile, restore the stored credential and connect.
    pub fn open(global: &GlobalOpts) -> Result<Self, CliError> {
        let cfg = config::load_config()?;
        let resolved = config::resolve(global, &cfg)?;
        let api_url = resolved.base_url.to_string();

        let (store, persistent) = util::credential_store(&resolved.profile_name);
        let mut ctx = AppContext::connect(&api_url, &resolved.transport, resolved.policy, store)
            .map_err(|e| CliError::from(e).at_url(&api_url))?;
        if let Some(token) = &global.token {
            ctx.override_credential(SecretString::from(token.clone()));
        }

        let surface = TerminalSurface::new(global.output, global.quiet)
            .colored(output::should_color(global.color))
            .assume_yes(global.yes)
            .connected_to(&resolved.profile_name, &api_url);

        debug!(profile = %resolved.profile_name, api_url = %api_url, "screens opened");
        Ok(Self {
            ctx,
            surface,
            resolved,
            persistent,
        })
    }

    /// Dispatch one trigger on a freshly built screen.
    pub async fn run(&mut self, page: PageId, trigger: Trigger) -> Result<(), CliError> {
        let mut screen = page.build();
        let dispatch = screen.dispatch(&mut self.ctx, &mut self.surface, trigger).await;
        debug!(page = %page, ?dispatch, "dispatch finished");
        self.surface
            .finish(dispatch)
            .map_err(|e| e.at_url(self.resolved.base_url.as_str()))
    }

    pub async fn load(&mut self, page: PageId) -> Result<(), CliError> {
        self.run(page, Trigger::Load).await
    }

    pub async fn submit(&mut self, page: PageId, form: &str, input: FormData) -> Result<(), CliError> {
        self.run(
            page,
            Trigger::Submit {
                form: form.to_owned(),
                input,
            },
        )
        .await
    }

    pub async fn click(&mut self, page: PageId, control: &str) -> Result<(), CliError> {
        self.run(
            page,
            Trigger::Click {
                control: control.to_owned(),
            },
        )
        .await
    }

    pub async fn row_action(
        &mut self,
        page: PageId,
        list: &str,
        action: &str,
        id: i64,
    ) -> Result<(), CliError> {
        self.run(
            page,
            Trigger::RowAction {
                list: list.to_owned(),
                action: action.to_owned(),
                id: id.to_string(),
            },
        )
        .await
    }
}

/// Dispatch a screen-backed command to the appropriate handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Health => health::handle(global).await,
        cmd => {
            let mut screens = Screens::open(global)?;
            match cmd {
                Command::Login(args) => auth::login(&mut screens, args).await,
                Command::Register(args) => auth::register(&mut screens, args).await,
                Command::Logout => auth::logout(&mut screens).await,
                Command::Dashboard => auth::dashboard(&mut screens).await,
                Command::Customers(args) => customers::handle(&mut screens, args).await,
                Command::Billing(args) => billing::handle(&mut screens, args).await,
                Command::Payroll(args) => payroll::handle(&mut screens, args).await,
                Command::Users(args) => users::handle(&mut screens, args).await,
                // Handled before a connection is opened
                Command::Health | Command::Config(_) | Command::Completions(_) => Ok(()),
            }
        }
    }
}
