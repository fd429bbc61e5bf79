//! Shared configuration for the unboxing CLI.
//!
//! TOML profiles (one per back-office deployment), figment loading with
//! environment overrides, translation to `unboxing_api` transport
//! settings, and the keyring-backed credential store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use unboxing_api::{
    CREDENTIAL_SLOT, CredentialPolicy, CredentialStore, StoreError, TlsMode, TransportConfig,
};

/// Keyring service name.
pub const KEYRING_SERVICE: &str = "unboxing";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named API profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Name and settings of the profile to use.
    ///
    /// An explicit name wins over `default_profile`. A profile missing from
    /// the file resolves to the built-in defaults, so a fresh install talks
    /// to `http://localhost:4000` without any setup.
    pub fn resolve_profile(&self, name: Option<&str>) -> (String, Profile) {
        let name = name
            .map(str::to_owned)
            .or_else(|| self.default_profile.clone())
            .unwrap_or_else(|| "default".into());
        let profile = self.profiles.get(&name).cloned().unwrap_or_default();
        (name, profile)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// When the bearer token is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachCredential {
    /// Only on endpoints that are known to check it.
    #[default]
    Endpoint,
    /// On every call.
    Always,
}

impl From<AttachCredential> for CredentialPolicy {
    fn from(mode: AttachCredential) -> Self {
        match mode {
            AttachCredential::Endpoint => Self::Descriptor,
            AttachCredential::Always => Self::Always,
        }
    }
}

/// A named API profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Email prefilled at login.
    pub email: Option<String>,

    /// Path to an extra CA certificate (PEM) for `https` deployments.
    pub ca_cert: Option<PathBuf>,

    /// Override `defaults.timeout`.
    pub timeout: Option<u64>,

    #[serde(default)]
    pub attach_credential: AttachCredential,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            email: None,
            ca_cert: None,
            timeout: None,
            attach_credential: AttachCredential::default(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:4000".into()
}

impl Profile {
    /// The base URL, checked for a usable `http`/`https` form.
    pub fn base_url(&self) -> Result<url::Url, ConfigError> {
        validate_api_url(&self.api_url)
    }

    pub fn transport(&self, defaults: &Defaults) -> TransportConfig {
        let tls = self
            .ca_cert
            .clone()
            .map_or(TlsMode::System, TlsMode::CustomCa);
        TransportConfig {
            tls,
            timeout: Duration::from_secs(self.timeout.unwrap_or(defaults.timeout)),
            ..TransportConfig::default()
        }
    }

    pub fn credential_policy(&self) -> CredentialPolicy {
        self.attach_credential.into()
    }
}

/// Parse an API base URL, rejecting non-HTTP schemes.
pub fn validate_api_url(raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "api_url".into(),
        reason: format!("invalid URL: {raw}"),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("expected an http or https URL, got scheme '{other}'"),
        }),
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "unboxing", "unboxing").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("unboxing");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path`, layered over defaults and under
/// `UNBOXING_*` environment variables (`__` separates nested keys, e.g.
/// `UNBOXING_DEFAULTS__TIMEOUT=5`).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("UNBOXING_").split("__"));

    let config: Config = figment.extract()?;
    debug!(path = %path.display(), profiles = config.profiles.len(), "config loaded");
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential store ────────────────────────────────────────────────

/// Bearer token kept in the system keyring, one slot per profile.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    user: String,
}

impl KeyringStore {
    pub fn for_profile(profile: &str) -> Self {
        Self {
            user: format!("{profile}/{CREDENTIAL_SLOT}"),
        }
    }

    /// Keyring account name, `<profile>/authToken`.
    pub fn account(&self) -> &str {
        &self.user
    }

    fn entry(&self) -> Result<keyring::Entry, StoreError> {
        keyring::Entry::new(KEYRING_SERVICE, &self.user).map_err(|e| StoreError(e.to_string()))
    }
}

impl CredentialStore for KeyringStore {
    fn get(&self) -> Result<Option<SecretString>, StoreError> {
        match self.entry()?.get_password() {
            Ok(secret) => Ok(Some(SecretString::from(secret))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(StoreError(e.to_string())),
        }
    }

    fn set(&self, token: &SecretString) -> Result<(), StoreError> {
        self.entry()?
            .set_password(token.expose_secret())
            .map_err(|e| StoreError(e.to_string()))
    }

    fn clear(&self) -> Result<(), StoreError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(StoreError(e.to_string())),
        }
    }
}
