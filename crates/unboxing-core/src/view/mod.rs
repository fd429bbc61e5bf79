// Generic views
//
// `FormView` submits a form, `ListView` fetches and tabulates a collection
// (with per-row actions), `DetailView` shows one record. All of them share
// the same failure policy: server text for HTTP errors, a fixed message
// for transport failures.

mod detail_view;
mod form_view;
mod list_view;
mod row_action;
mod state;

pub use detail_view::DetailView;
pub use form_view::{FollowUp, FormView, Submission};
pub use list_view::ListView;
pub use row_action::{CancelFlow, RowAction};
pub use state::{Dispatch, ViewState};

use tracing::{debug, error};
use unboxing_api::RequestOutcome;

use crate::surface::{Surface, Tone};

/// Shown for any failure that produced no server response.
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// Prefix put in front of server error text unless a view overrides it.
pub const DEFAULT_ERROR_PREFIX: &str = "Error: ";

/// Put the failure carried by `outcome` into the message area `target`.
fn report_failure(
    surface: &mut dyn Surface,
    target: &str,
    prefix: &str,
    outcome: &RequestOutcome,
    resource: &str,
) {
    match outcome {
        RequestOutcome::HttpError { status, .. } => {
            let text = outcome.error_text().unwrap_or_default();
            debug!(status, resource, "request rejected");
            surface.show_message(target, Tone::Error, &format!("{prefix}{text}"));
        }
        RequestOutcome::TransportError { kind, reason } => {
            error!(?kind, %reason, resource, "request failed");
            surface.show_message(target, Tone::Error, GENERIC_FAILURE);
        }
        RequestOutcome::Success(_) => {}
    }
}
