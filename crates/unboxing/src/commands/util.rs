//! Shared helpers for command handlers.

use dialoguer::Input;
use tracing::info;

use unboxing_api::{CredentialStore, MemoryStore};
use unboxing_config::KeyringStore;
use unboxing_core::FormData;

use crate::error::CliError;

/// The keyring slot for `profile`, or a throwaway in-memory slot when no
/// keyring is reachable (headless hosts, CI). The flag is `true` for the
/// keyring.
pub fn credential_store(profile: &str) -> (Box<dyn CredentialStore>, bool) {
    let keyring = KeyringStore::for_profile(profile);
    match keyring.get() {
        Ok(_) => (Box::new(keyring), true),
        Err(e) => {
            info!(error = %e, account = keyring.account(), "keyring unavailable, token will not persist");
            (Box::new(MemoryStore::new()), false)
        }
    }
}

/// Add `value` under `input` when present.
pub fn set_opt(form: &mut FormData, input: &str, value: Option<impl ToString>) {
    if let Some(value) = value {
        form.set(input, value.to_string());
    }
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub(crate) fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Use `given`, else ask for it on the terminal.
pub fn text_or_prompt(given: Option<String>, prompt: &str, default: Option<&str>) -> Result<String, CliError> {
    if let Some(value) = given {
        return Ok(value);
    }
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_owned());
    }
    input.interact_text().map_err(prompt_err)
}

/// Use `given`, else read a password without echo.
pub fn password_or_prompt(given: Option<String>) -> Result<String, CliError> {
    if let Some(value) = given {
        return Ok(value);
    }
    let password = rpassword::prompt_password("Password: ").map_err(prompt_err)?;
    if password.is_empty() {
        return Err(CliError::Validation {
            field: "password".into(),
            reason: "password cannot be empty".into(),
        });
    }
    Ok(password)
}
