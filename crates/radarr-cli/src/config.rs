//! CLI-owned configuration: TOML profiles, credential resolution, and
//! translation to a ready-to-use [`ConnectionConfig`].
//!
//! `radarr-api` never sees these types -- it receives the resolved URL,
//! API key, and transport settings.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use radarr_api::TlsMode;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Resolved connection config ───────────────────────────────────────

/// Everything needed to construct an authenticated client.
///
/// Built once per invocation from flags, environment, and profile, then
/// discarded at process exit. Holding the API key as a `SecretString`
/// keeps it out of Debug output and logs.
#[derive(Debug)]
pub struct ConnectionConfig {
    pub url: url::Url,
    pub api_key: SecretString,
    pub tls: TlsMode,
    pub timeout: Duration,
}

// ── TOML config structs ──────────────────────────────────────────────

/// CLI-owned TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name (used when --profile is not specified).
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named server profiles.
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

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

/// CLI-owned profile definition.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Radarr base URL (e.g., "http://localhost:7878").
    pub url: String,

    /// API key (plaintext -- prefer keyring or env var).
    pub api_key: Option<String>,

    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "radarrctl", "radarrctl")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        })
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("radarrctl");
    p
}

// ── Config loading ───────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, CliError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("RADARR_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Profile resolution ───────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Translate a `Profile` + global flags into a `ConnectionConfig`.
///
/// This is the single boundary where config types turn into the values
/// the API client consumes.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<ConnectionConfig, CliError> {
    // 1. Server URL (flag > env > profile)
    let url_str = global.url.as_deref().unwrap_or(&profile.url);
    let url = parse_url(url_str)?;

    // 2. API key
    let api_key = resolve_api_key(profile, profile_name, global)?;

    // 3. TLS verification
    let tls = if global.insecure || profile.insecure.unwrap_or(false) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsMode::CustomCa(ca_path.clone())
    } else {
        TlsMode::System
    };

    // 4. Timeout (profile value, else the flag / its default)
    let timeout = Duration::from_secs(profile.timeout.unwrap_or(global.timeout));

    Ok(ConnectionConfig {
        url,
        api_key,
        tls,
        timeout,
    })
}

/// Parse and validate a non-empty server URL.
pub fn parse_url(url_str: &str) -> Result<url::Url, CliError> {
    if url_str.is_empty() {
        return Err(CliError::Validation {
            field: "url".into(),
            reason: "server URL must not be empty".into(),
        });
    }
    url_str.parse().map_err(|_| CliError::Validation {
        field: "url".into(),
        reason: format!("invalid URL: {url_str}"),
    })
}

// ── Credential helpers ───────────────────────────────────────────────

/// Resolve an API key from the credential chain.
fn resolve_api_key(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<SecretString, CliError> {
    // 1. CLI flag / RADARR_API_KEY env (clap resolves the env fallback)
    if let Some(key) = non_empty(global.api_key.as_deref()) {
        return Ok(SecretString::from(key));
    }

    // 2. Profile's api_key_env -> env var lookup
    if let Some(ref env_name) = profile.api_key_env {
        if let Some(key) = non_empty(std::env::var(env_name).ok().as_deref()) {
            return Ok(SecretString::from(key));
        }
    }

    // 3. System keyring
    if let Ok(entry) = keyring::Entry::new("radarrctl", &format!("{profile_name}/api-key")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 4. Plaintext in config
    if let Some(key) = non_empty(profile.api_key.as_deref()) {
        return Ok(SecretString::from(key));
    }

    Err(CliError::NoCredentials {
        profile: profile_name.into(),
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(ToOwned::to_owned)
}

// ── Tests ────────────────────────────────────────────────────────────
