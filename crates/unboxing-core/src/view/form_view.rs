// Form-submit flow

use secrecy::SecretString;
use tracing::{debug, error};
use unboxing_api::models::{AuthenticationResponse, AuthenticationToken};
use unboxing_api::{Body, Method, RequestOutcome, ResourceDescriptor};

use super::{DEFAULT_ERROR_PREFIX, GENERIC_FAILURE, ViewState, report_failure};
use crate::context::AppContext;
use crate::form::{FormData, extract_payload};
use crate::surface::{Route, Surface, Tone};

/// What happens after a successful submit, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    /// Adopt and persist the token carried by the response.
    StoreCredential,
    /// Hide a page section.
    Hide(&'static str),
    /// Re-fetch a list on the same page.
    Refresh(&'static str),
    Redirect(Route),
}

/// Result of one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub state: ViewState,
    /// Lists the page should reload.
    pub refresh: Vec<&'static str>,
}

impl Submission {
    fn settled(state: ViewState) -> Self {
        Self {
            state,
            refresh: Vec::new(),
        }
    }
}

/// Binds a form to one client call.
#[derive(Debug, Clone)]
pub struct FormView {
    message: &'static str,
    descriptor: &'static ResourceDescriptor,
    method: Method,
    id_field: Option<&'static str>,
    success: Option<&'static str>,
    error_prefix: &'static str,
    follow_ups: Vec<FollowUp>,
    state: ViewState,
}

impl FormView {
    /// A form reporting into the message area `message`.
    pub fn new(message: &'static str, descriptor: &'static ResourceDescriptor, method: Method) -> Self {
        Self {
            message,
            descriptor,
            method,
            id_field: None,
            success: None,
            error_prefix: DEFAULT_ERROR_PREFIX,
            follow_ups: Vec::new(),
            state: ViewState::Idle,
        }
    }

    /// Append the value of `input` to the URL path as the record id.
    pub fn addressed_by(mut self, input: &'static str) -> Self {
        self.id_field = Some(input);
        self
    }

    pub fn success(mut self, text: &'static str) -> Self {
        self.success = Some(text);
        self
    }

    pub fn error_prefix(mut self, prefix: &'static str) -> Self {
        self.error_prefix = prefix;
        self
    }

    pub fn then(mut self, follow_up: FollowUp) -> Self {
        self.follow_ups.push(follow_up);
        self
    }

    pub fn message_target(&self) -> &'static str {
        self.message
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Submit `input` as the content of the form `form`.
    pub async fn submit(
        &mut self,
        form: &str,
        ctx: &mut AppContext,
        surface: &mut dyn Surface,
        input: &FormData,
    ) -> Submission {
        self.state = ViewState::Loading;

        let payload = extract_payload(self.descriptor, input);
        let body = (!self.descriptor.fields.is_empty()).then_some(&payload);
        let suffix = self
            .id_field
            .and_then(|field| input.get(field))
            .map(str::trim)
            .filter(|id| !id.is_empty());

        debug!(form, resource = self.descriptor.name, "submitting");
        let outcome = ctx
            .client
            .perform(&ctx.session, self.descriptor, self.method, suffix, body)
            .await;

        let submission = match outcome {
            RequestOutcome::Success(body) => self.succeed(form, ctx, surface, body),
            failure => {
                report_failure(
                    surface,
                    self.message,
                    self.error_prefix,
                    &failure,
                    self.descriptor.name,
                );
                Submission::settled(ViewState::ErrorShown)
            }
        };
        self.state = submission.state;
        submission
    }

    fn succeed(
        &self,
        form: &str,
        ctx: &mut AppContext,
        surface: &mut dyn Surface,
        body: Body,
    ) -> Submission {
        if self.follow_ups.contains(&FollowUp::StoreCredential) {
            let stored = match token_from(body) {
                Some(token) => ctx
                    .sign_in(SecretString::from(token.token))
                    .map_err(|e| e.to_string()),
                None => Err("response carried no authentication token".to_owned()),
            };
            if let Err(reason) = stored {
                error!(%reason, "sign-in not completed");
                surface.show_message(self.message, Tone::Error, GENERIC_FAILURE);
                return Submission::settled(ViewState::ErrorShown);
            }
        }

        if let Some(text) = self.success {
            surface.show_message(self.message, Tone::Success, text);
        }
        surface.reset_form(form);

        let mut refresh = Vec::new();
        for follow_up in &self.follow_ups {
            match follow_up {
                FollowUp::StoreCredential => {}
                FollowUp::Hide(section) => surface.set_visible(section, false),
                FollowUp::Refresh(list) => refresh.push(*list),
                FollowUp::Redirect(route) => surface.navigate(route),
            }
        }

        Submission {
            state: ViewState::Rendered,
            refresh,
        }
    }
}

fn token_from(body: Body) -> Option<AuthenticationToken> {
    let Body::Json(value) = body else {
        return None;
    };
    serde_json::from_value::<AuthenticationResponse>(value)
        .ok()
        .map(|response| response.authentication_token.into())
}
