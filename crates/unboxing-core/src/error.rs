// ── Core error types ──
//
// View flows never fail: every request problem ends up on the surface.
// These errors cover setting up the context a page runs in.

use thiserror::Error;
use unboxing_api::StoreError;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The API client could not be built (bad base URL, bad CA file).
    #[error(transparent)]
    Api(#[from] unboxing_api::Error),

    /// The credential store could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}
