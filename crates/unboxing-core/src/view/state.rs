// View lifecycle

/// Where a view stands after its latest trigger.
///
/// Every trigger re-enters `Loading`; nothing carries over between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Rendered,
    ErrorShown,
}

/// What a dispatched trigger came to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Completed(ViewState),
    /// The user declined a confirmation; no request was made.
    Cancelled,
    /// A guarded page was loaded without a credential and sent to login.
    Unauthenticated,
    /// Nothing on the page handles this trigger.
    Unhandled,
}

impl Dispatch {
    pub fn is_error(self) -> bool {
        matches!(self, Self::Completed(ViewState::ErrorShown) | Self::Unauthenticated)
    }
}
