use thiserror::Error;

use crate::outcome::FailureKind;

/// Top-level error type for the `unboxing-api` crate.
///
/// Produced by the typed convenience methods, which collapse a
/// [`RequestOutcome`](crate::RequestOutcome) into a `Result`. Views work
/// with the outcome directly and never see this type.
#[derive(Debug, Error)]
pub enum Error {
    // ── Application ─────────────────────────────────────────────────
    /// Non-2xx response. `message` is the decoded server text.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// No usable response reached the client.
    #[error("Transport error: {reason}")]
    Transport { kind: FailureKind, reason: String },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS configuration or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Data ────────────────────────────────────────────────────────
    /// The response decoded as JSON but not into the expected shape.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the server rejected the credential (HTTP 401/403).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403, .. })
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }

    /// Returns `true` if the request never got a response in time or at all.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                kind: FailureKind::Timeout | FailureKind::Connect,
                ..
            }
        )
    }
}
