//! CLI error types with miette diagnostics.
//!
//! Maps `radarr_api::Error` variants into user-facing errors with
//! actionable help text, plus an exit-code mapping for the process.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes for process termination (zero means success).
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to Radarr at {url}")]
    #[diagnostic(
        code(radarr::connection_failed),
        help(
            "Check that the server is running and accessible.\n\
             URL: {url}\n\
             Try: radarrctl system status"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS error: {reason}")]
    #[diagnostic(
        code(radarr::tls_error),
        help(
            "If the server sits behind a self-signed reverse proxy, use\n\
             --insecure (-k) or configure ca_cert in your profile."
        )
    )]
    TlsError { reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(radarr::timeout),
        help("Increase timeout with --timeout or check server responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed")]
    #[diagnostic(
        code(radarr::auth_failed),
        help(
            "Verify the API key. Find it under Settings > General on the\n\
             Radarr web UI, or run: radarrctl config set-api-key"
        )
    )]
    AuthFailed,

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(radarr::no_credentials),
        help(
            "Configure credentials with: radarrctl config init\n\
             Or set the RADARR_API_KEY environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Remote call failures ─────────────────────────────────────────

    #[error("Error listing {resource}: {source}")]
    #[diagnostic(
        code(radarr::list_failed),
        help("Check connectivity and credentials with: radarrctl system status")
    )]
    ListFailed {
        resource: &'static str,
        #[source]
        source: radarr_api::Error,
    },

    #[error("Radarr API error ({status}): {message}")]
    #[diagnostic(code(radarr::api_error))]
    ApiError { status: u16, message: String },

    #[error("Unexpected response from server: {message}")]
    #[diagnostic(
        code(radarr::bad_response),
        help("Is the URL pointing at a Radarr server? Check --url / profile url.")
    )]
    BadResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(radarr::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(radarr::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: radarrctl config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(radarr::no_config),
        help(
            "Create one with: radarrctl config init\n\
             Or pass --url and --api-key (env: RADARR_URL, RADARR_API_KEY).\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(radarr::config))]
    Config(Box<figment::Error>),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Wrap a list-call failure with the resource it was listing.
    pub fn list_failed(resource: &'static str, source: radarr_api::Error) -> Self {
        Self::ListFailed { resource, source }
    }

    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::AuthFailed | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Validation { .. } => exit_code::USAGE,
            Self::ListFailed { source, .. } => api_exit_code(source),
            _ => exit_code::GENERAL,
        }
    }
}

fn api_exit_code(err: &radarr_api::Error) -> i32 {
    match err {
        e if e.is_auth_error() => exit_code::AUTH,
        radarr_api::Error::Transport(e) if e.is_timeout() => exit_code::TIMEOUT,
        radarr_api::Error::Transport(_) | radarr_api::Error::Tls(_) => exit_code::CONNECTION,
        _ => exit_code::GENERAL,
    }
}

// ── radarr_api::Error → CliError mapping ─────────────────────────────

impl From<radarr_api::Error> for CliError {
    fn from(err: radarr_api::Error) -> Self {
        match err {
            radarr_api::Error::InvalidApiKey | radarr_api::Error::Authentication { .. } => {
                CliError::AuthFailed
            }

            radarr_api::Error::Transport(e) if e.is_timeout() => CliError::Timeout,

            radarr_api::Error::Transport(e) => {
                let url = e
                    .url()
                    .map_or_else(|| "(unknown)".into(), ToString::to_string);
                CliError::ConnectionFailed {
                    url,
                    source: e.into(),
                }
            }

            radarr_api::Error::InvalidUrl(e) => CliError::Validation {
                field: "url".into(),
                reason: e.to_string(),
            },

            radarr_api::Error::Tls(reason) => CliError::TlsError { reason },

            radarr_api::Error::Api { status, message } => CliError::ApiError { status, message },

            radarr_api::Error::Deserialization { message, .. } => {
                CliError::BadResponse { message }
            }
        }
    }
}
