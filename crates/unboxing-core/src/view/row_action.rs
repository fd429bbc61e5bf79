// Per-row buttons and the cancel flow

use tracing::debug;
use unboxing_api::{Body, Method, RequestOutcome, ResourceDescriptor};

use super::{DEFAULT_ERROR_PREFIX, ViewState, report_failure};
use crate::context::AppContext;
use crate::form::FormData;
use crate::format;
use crate::surface::{Route, Surface, Tone};

/// Action bound to a button rendered on every list row.
#[derive(Debug, Clone, Copy)]
pub enum RowAction {
    /// Confirm, `DELETE {base}/{id}`, then reload the list.
    Delete {
        descriptor: &'static ResourceDescriptor,
        prompt: &'static str,
        success: Option<&'static str>,
    },
    /// Go to another screen carrying the row id.
    Navigate(fn(&str) -> Route),
    /// Fetch the record, copy it into an update form, reveal the form.
    EditInline {
        descriptor: &'static ResourceDescriptor,
        form: &'static str,
        section: &'static str,
        message: &'static str,
        /// `(form input, record key)` pairs to populate.
        fill: &'static [(&'static str, &'static str)],
    },
}

/// What the owning list does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowEffect {
    Cancelled,
    Reload,
    Settled(ViewState),
}

impl RowAction {
    pub(crate) async fn run(
        self,
        ctx: &AppContext,
        surface: &mut dyn Surface,
        message: &str,
        id: &str,
    ) -> RowEffect {
        match self {
            Self::Delete {
                descriptor,
                prompt,
                success,
            } => {
                if !surface.confirm(prompt) {
                    debug!(resource = descriptor.name, id, "delete declined");
                    return RowEffect::Cancelled;
                }
                let outcome = ctx
                    .client
                    .perform(&ctx.session, descriptor, Method::Delete, Some(id), None)
                    .await;
                if outcome.is_success() {
                    if let Some(text) = success {
                        surface.show_message(message, Tone::Success, text);
                    }
                    RowEffect::Reload
                } else {
                    report_failure(surface, message, DEFAULT_ERROR_PREFIX, &outcome, descriptor.name);
                    RowEffect::Settled(ViewState::ErrorShown)
                }
            }
            Self::Navigate(route) => {
                surface.navigate(&route(id));
                RowEffect::Settled(ViewState::Rendered)
            }
            Self::EditInline {
                descriptor,
                form,
                section,
                message,
                fill,
            } => {
                let outcome = ctx
                    .client
                    .perform(&ctx.session, descriptor, Method::Get, Some(id), None)
                    .await;
                match outcome {
                    RequestOutcome::Success(Body::Json(record)) if record.is_object() => {
                        let values: FormData = fill
                            .iter()
                            .map(|(input, key)| {
                                let value = record.get(*key).unwrap_or(&serde_json::Value::Null);
                                (*input, format::text(value))
                            })
                            .collect();
                        surface.fill_form(form, &values);
                        surface.hide_message(message);
                        surface.set_visible(section, true);
                        RowEffect::Settled(ViewState::Rendered)
                    }
                    RequestOutcome::Success(_) => {
                        surface.show_message(
                            message,
                            Tone::Error,
                            &format!("{DEFAULT_ERROR_PREFIX}no {} with ID {id}", descriptor.name),
                        );
                        RowEffect::Settled(ViewState::ErrorShown)
                    }
                    failure => {
                        report_failure(surface, message, DEFAULT_ERROR_PREFIX, &failure, descriptor.name);
                        RowEffect::Settled(ViewState::ErrorShown)
                    }
                }
            }
        }
    }
}

/// Abandon an inline edit: clear the form, hide its message and section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelFlow {
    pub form: &'static str,
    pub message: &'static str,
    pub section: Option<&'static str>,
}

impl CancelFlow {
    pub fn run(&self, surface: &mut dyn Surface) {
        if let Some(section) = self.section {
            surface.set_visible(section, false);
        }
        surface.reset_form(self.form);
        surface.hide_message(self.message);
    }
}
