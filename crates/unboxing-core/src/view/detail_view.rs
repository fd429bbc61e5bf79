// Single-record flow

use unboxing_api::{Body, Method, RequestOutcome, ResourceDescriptor};

use super::{DEFAULT_ERROR_PREFIX, ViewState, report_failure};
use crate::context::AppContext;
use crate::form::FormData;
use crate::format::Column;
use crate::surface::{Detail, Surface, Tone};

/// Looks up one record by the id typed into a form.
#[derive(Debug, Clone)]
pub struct DetailView {
    message: &'static str,
    target: &'static str,
    descriptor: &'static ResourceDescriptor,
    id_field: &'static str,
    entity: &'static str,
    title: &'static str,
    fields: &'static [Column],
    state: ViewState,
}

impl DetailView {
    pub fn new(
        message: &'static str,
        target: &'static str,
        descriptor: &'static ResourceDescriptor,
        id_field: &'static str,
    ) -> Self {
        Self {
            message,
            target,
            descriptor,
            id_field,
            entity: "Record",
            title: "Details",
            fields: &[],
            state: ViewState::Idle,
        }
    }

    /// `entity` names the record in the not-found message.
    pub fn titled(mut self, entity: &'static str, title: &'static str) -> Self {
        self.entity = entity;
        self.title = title;
        self
    }

    pub fn fields(mut self, fields: &'static [Column]) -> Self {
        self.fields = fields;
        self
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub async fn show(
        &mut self,
        ctx: &AppContext,
        surface: &mut dyn Surface,
        input: &FormData,
    ) -> ViewState {
        self.state = ViewState::Loading;
        let id = input.get(self.id_field).map(str::trim).unwrap_or_default();

        let outcome = ctx
            .client
            .perform(
                &ctx.session,
                self.descriptor,
                Method::Get,
                Some(id).filter(|id| !id.is_empty()),
                None,
            )
            .await;

        self.state = match outcome {
            RequestOutcome::Success(Body::Json(record)) if record.is_object() => {
                let detail = Detail {
                    title: self.title,
                    fields: self
                        .fields
                        .iter()
                        .map(|c| (c.header, c.render(&record)))
                        .collect(),
                    record,
                };
                surface.hide_message(self.message);
                surface.render_detail(self.target, Some(&detail));
                ViewState::Rendered
            }
            RequestOutcome::Success(_) => {
                let text = format!("{} not found with ID: {id}", self.entity);
                surface.show_message(self.message, Tone::Error, &text);
                surface.render_detail(self.target, None);
                ViewState::ErrorShown
            }
            failure => {
                report_failure(
                    surface,
                    self.message,
                    DEFAULT_ERROR_PREFIX,
                    &failure,
                    self.descriptor.name,
                );
                surface.render_detail(self.target, None);
                ViewState::ErrorShown
            }
        };
        self.state
    }
}
