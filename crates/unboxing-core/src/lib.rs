// unboxing-core: Views between unboxing-api and a rendering surface.
//
// A view turns one trigger (form submit, list load, row button) into one
// `ResourceClient::perform` call and projects the outcome onto a `Surface`.
// Pages group views the way the back-office screens do.

pub mod context;
pub mod error;
pub mod form;
pub mod format;
pub mod page;
pub mod pages;
pub mod surface;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use context::AppContext;
pub use error::CoreError;
pub use form::FormData;
pub use page::{ClickAction, Page, SubmitHandler, Trigger};
pub use pages::PageId;
pub use surface::{Detail, Route, Row, Surface, Table, Tone};
pub use view::{
    CancelFlow, DetailView, Dispatch, FollowUp, FormView, GENERIC_FAILURE, ListView, RowAction,
    ViewState,
};
