//! CLI configuration: thin wrapper around `unboxing_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--api-url, --timeout, ...).

use std::time::Duration;

use unboxing_api::{CredentialPolicy, TransportConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use unboxing_config::{
    AttachCredential, Config, Profile, config_path, load_config, load_config_or_default,
    save_config, validate_api_url,
};

/// Connection settings for one run.
#[derive(Debug)]
pub struct Resolved {
    pub profile_name: String,
    pub profile: Profile,
    pub base_url: url::Url,
    pub transport: TransportConfig,
    pub policy: CredentialPolicy,
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config.resolve_profile(global.profile.as_deref()).0
}

/// Merge the active profile with flag overrides.
///
/// Flags beat environment variables beat the profile beat defaults.
pub fn resolve(global: &GlobalOpts, config: &Config) -> Result<Resolved, CliError> {
    let (profile_name, profile) = config.resolve_profile(global.profile.as_deref());

    let base_url = match global.api_url.as_deref() {
        Some(raw) => validate_api_url(raw)?,
        None => profile.base_url()?,
    };

    let mut transport = profile.transport(&config.defaults);
    if let Some(secs) = global.timeout {
        transport = transport.with_timeout(Duration::from_secs(secs));
    }

    Ok(Resolved {
        policy: profile.credential_policy(),
        profile_name,
        profile,
        base_url,
        transport,
    })
}
