//! CLI error types with miette diagnostics.
//!
//! Maps library errors and failed view outcomes into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use unboxing_api::FailureKind;
use unboxing_config::ConfigError;
use unboxing_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the API at {url}: {reason}")]
    #[diagnostic(
        code(unboxing::connection_failed),
        help(
            "Check that the back-office API is running and reachable.\n\
             URL: {url}\n\
             Try: unboxing health --api-url {url}"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(unboxing::timeout),
        help("Increase the timeout with --timeout or check API responsiveness.")
    )]
    Timeout { reason: String },

    #[error("TLS setup failed: {reason}")]
    #[diagnostic(
        code(unboxing::tls_error),
        help("Check the ca_cert path configured for this profile.")
    )]
    Tls { reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Not signed in (profile '{profile}')")]
    #[diagnostic(
        code(unboxing::not_authenticated),
        help(
            "Run: unboxing login --profile {profile}\n\
             Or pass a token with --token / UNBOXING_TOKEN."
        )
    )]
    NotAuthenticated { profile: String },

    #[error("The API rejected the credential: {message}")]
    #[diagnostic(
        code(unboxing::unauthorized),
        help("The stored token may have expired. Run: unboxing login")
    )]
    Unauthorized { message: String },

    #[error("Access denied: {message}")]
    #[diagnostic(code(unboxing::forbidden))]
    Forbidden { message: String },

    #[error("Credential storage failed: {reason}")]
    #[diagnostic(
        code(unboxing::credential_store),
        help(
            "The system keyring could not be used.\n\
             Pass a token with --token / UNBOXING_TOKEN instead."
        )
    )]
    CredentialStore { reason: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(unboxing::not_found))]
    NotFound { message: String },

    #[error("{message}")]
    #[diagnostic(code(unboxing::conflict))]
    Conflict { message: String },

    #[error("API error (HTTP {status}): {message}")]
    #[diagnostic(code(unboxing::api_error))]
    Api { status: u16, message: String },

    #[error("Unexpected response: {message}")]
    #[diagnostic(code(unboxing::decode))]
    Decode { message: String },

    /// A view reported a failure; `message` is the text it showed.
    #[error("{message}")]
    #[diagnostic(code(unboxing::rejected))]
    Rejected { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(unboxing::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(unboxing::config),
        help("Inspect the file with: unboxing config show")
    )]
    Config(ConfigError),

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::Tls { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotAuthenticated { .. } | Self::Unauthorized { .. } => exit_code::AUTH,
            Self::Forbidden { .. } => exit_code::PERMISSION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Fill in the API URL on connection failures raised below the CLI.
    pub fn at_url(self, api_url: &str) -> Self {
        match self {
            Self::ConnectionFailed { reason, .. } => Self::ConnectionFailed {
                url: api_url.to_owned(),
                reason,
            },
            other => other,
        }
    }
}

// ── Library error mapping ────────────────────────────────────────────

impl From<unboxing_api::Error> for CliError {
    fn from(err: unboxing_api::Error) -> Self {
        use unboxing_api::Error;

        match err {
            Error::Http { status, message } => match status {
                401 => Self::Unauthorized { message },
                403 => Self::Forbidden { message },
                404 => Self::NotFound { message },
                409 => Self::Conflict { message },
                _ => Self::Api { status, message },
            },
            Error::Transport {
                kind: FailureKind::Timeout,
                reason,
            } => Self::Timeout { reason },
            Error::Transport {
                kind: FailureKind::Decode,
                reason,
            } => Self::Decode { message: reason },
            Error::Transport { reason, .. } => Self::ConnectionFailed {
                url: "(configured API)".into(),
                reason,
            },
            Error::InvalidUrl(e) => Self::Validation {
                field: "api_url".into(),
                reason: e.to_string(),
            },
            Error::Tls(reason) => Self::Tls { reason },
            Error::Deserialization { message, .. } => Self::Decode { message },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Api(e) => e.into(),
            CoreError::Store(e) => Self::CredentialStore { reason: e.0 },
        }
    }
}
