//! Terminal rendering of the back-office screens.
//!
//! Records go to stdout in the `--output` format; status messages go to
//! stderr. Error messages are collected rather than printed so the
//! command can exit with a single diagnostic.

use std::collections::BTreeMap;

use owo_colors::OwoColorize;
use tracing::{debug, warn};

use unboxing_core::{Detail, Dispatch, FormData, GENERIC_FAILURE, Route, Surface, Table, Tone, ViewState};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

/// Shell command that performs `route`'s screen.
pub fn route_hint(route: &Route) -> String {
    match route {
        Route::Login => "unboxing login".into(),
        Route::Register => "unboxing register --name <NAME> --email <EMAIL>".into(),
        Route::Dashboard => "unboxing dashboard".into(),
        Route::EditPayroll { id } => format!(
            "unboxing payroll edit --id {id} [--employee-id <ID>] [--amount <AMOUNT>] [--date <YYYY-MM-DD>]"
        ),
    }
}

pub struct TerminalSurface {
    format: OutputFormat,
    color: bool,
    quiet: bool,
    assume_yes: bool,
    profile: String,
    api_url: String,
    /// Notices not yet replaced by content, by target.
    pending: BTreeMap<String, (Tone, String)>,
    errors: Vec<String>,
    route: Option<Route>,
}

impl TerminalSurface {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self {
            format,
            color: false,
            quiet,
            assume_yes: false,
            profile: "default".into(),
            api_url: String::new(),
            pending: BTreeMap::new(),
            errors: Vec::new(),
            route: None,
        }
    }

    pub fn colored(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Approve every confirmation without prompting.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Profile and API the rendered screens talk to, for error hints.
    pub fn connected_to(mut self, profile: &str, api_url: &str) -> Self {
        self.profile = profile.to_owned();
        self.api_url = api_url.to_owned();
        self
    }

    /// Flush what is still pending and turn the dispatch result into the
    /// command's result.
    pub fn finish(&mut self, dispatch: Dispatch) -> Result<(), CliError> {
        self.flush_pending();

        match dispatch {
            Dispatch::Completed(ViewState::ErrorShown) => Err(self.failure()),
            Dispatch::Completed(_) => {
                if let Some(route) = self.route.take() {
                    self.notify(Tone::Info, &format!("Next: {}", route_hint(&route)));
                }
                Ok(())
            }
            // Declined confirmations end silently.
            Dispatch::Cancelled => Ok(()),
            Dispatch::Unauthenticated => Err(CliError::NotAuthenticated {
                profile: self.profile.clone(),
            }),
            Dispatch::Unhandled => Err(CliError::Rejected {
                message: "This screen has no handler for that action.".into(),
            }),
        }
    }

    fn failure(&mut self) -> CliError {
        let errors = std::mem::take(&mut self.errors);
        if errors.iter().any(|e| e == GENERIC_FAILURE) {
            return CliError::ConnectionFailed {
                url: self.api_url.clone(),
                reason: GENERIC_FAILURE.into(),
            };
        }
        let message = if errors.is_empty() {
            GENERIC_FAILURE.to_owned()
        } else {
            errors.join("\n")
        };
        CliError::Rejected { message }
    }

    fn flush_pending(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for (target, (tone, text)) in pending {
            debug!(target = %target, %text, "placeholder");
            match self.format {
                OutputFormat::Table => self.notify(tone, &text),
                OutputFormat::Plain => {}
                structured => {
                    let empty: [serde_json::Value; 0] = [];
                    output::print_output(
                        &output::render_single(structured, &empty[..], |_| String::new(), |_| String::new()),
                        self.quiet,
                    );
                }
            }
        }
    }

    /// Status line on stderr, unless quiet.
    pub fn notify(&self, tone: Tone, text: &str) {
        if self.quiet {
            return;
        }
        if !self.color {
            eprintln!("{text}");
            return;
        }
        match tone {
            Tone::Success => eprintln!("{}", text.green()),
            Tone::Error => eprintln!("{}", text.red()),
            Tone::Info => eprintln!("{}", text.dimmed()),
        }
    }
}

impl Surface for TerminalSurface {
    fn show_message(&mut self, target: &str, tone: Tone, text: &str) {
        debug!(target, ?tone, text, "message");
        match tone {
            Tone::Error => self.errors.push(text.to_owned()),
            _ => self.notify(tone, text),
        }
    }

    fn hide_message(&mut self, target: &str) {
        debug!(target, "message hidden");
    }

    fn reset_form(&mut self, form: &str) {
        debug!(form, "form reset");
    }

    fn fill_form(&mut self, form: &str, values: &FormData) {
        debug!(form, "form filled");
        let values: BTreeMap<&str, &str> = values.iter().collect();
        let rendered = output::render_single(
            self.format,
            &values,
            |v| output::render_fields(v.iter().map(|(k, v)| (*k, *v))),
            |v| v.get("id").copied().unwrap_or_default().to_owned(),
        );
        output::print_output(&rendered, self.quiet);
    }

    fn set_visible(&mut self, section: &str, visible: bool) {
        debug!(section, visible, "section visibility");
    }

    fn render_table(&mut self, target: &str, table: &Table) {
        self.pending.remove(target);
        output::print_output(&output::render_table(self.format, table), self.quiet);
    }

    fn render_detail(&mut self, target: &str, detail: Option<&Detail>) {
        self.pending.remove(target);
        let Some(detail) = detail else {
            return;
        };
        let rendered = output::render_single(
            self.format,
            &detail.record,
            |_| {
                let fields = output::render_fields(detail.fields.iter().map(|(l, v)| (*l, v.as_str())));
                format!("{}\n{fields}", detail.title)
            },
            |record| unboxing_core::format::text(record.get("id").unwrap_or(&serde_json::Value::Null)),
        );
        output::print_output(&rendered, self.quiet);
    }

    fn render_placeholder(&mut self, target: &str, tone: Tone, text: &str) {
        if tone == Tone::Error {
            self.pending.remove(target);
            self.errors.push(text.to_owned());
        } else {
            self.pending.insert(target.to_owned(), (tone, text.to_owned()));
        }
    }

    fn navigate(&mut self, route: &Route) {
        debug!(%route, "navigate");
        self.route = Some(route.clone());
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                warn!(error = %e, "confirmation prompt failed, treating as declined");
                false
            })
    }
}
