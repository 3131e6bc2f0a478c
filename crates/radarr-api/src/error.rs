use thiserror::Error;

/// Top-level error type for the `radarr-api` crate.
///
/// Covers every failure mode of the client: authentication, transport,
/// and server-side API errors. `radarr-cli` maps these into user-facing
/// diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// API key rejected by the server (HTTP 401).
    #[error("Invalid API key")]
    InvalidApiKey,

    /// API key could not be placed in a request header.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-success response from the Radarr API.
    #[error("Radarr API error (HTTP {status}): {message}")]
    Api { message: String, status: u16 },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means the credentials were rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::InvalidApiKey | Self::Authentication { .. })
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }
}
