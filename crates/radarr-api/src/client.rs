// Hand-crafted async HTTP client for the Radarr v3 API.
//
// Base path: /api/v3/
// Auth: X-Api-Key header

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::types;

// ── Error response shape from the Radarr API ─────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Radarr v3 API.
///
/// Uses API-key authentication and communicates via JSON REST endpoints
/// under `/api/v3/`.
pub struct RadarrClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RadarrClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an API key and transport config.
    ///
    /// Injects `X-Api-Key` as a default header on every request. No
    /// network traffic occurs here; the first request happens on the
    /// first list call.
    pub fn from_api_key(
        base_url: &str,
        api_key: &secrecy::SecretString,
        transport: &crate::TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut key_value =
            HeaderValue::from_str(api_key.expose_secret()).map_err(|e| Error::Authentication {
                message: format!("invalid API key header value: {e}"),
            })?;
        key_value.set_sensitive(true);
        headers.insert("X-Api-Key", key_value);

        let http = transport.build_client(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Build the base URL with the `/api/v3/` suffix.
    ///
    /// Accepts a bare server URL (`http://host:7878`), one with a URL
    /// base (`https://host/radarr`), or one that already carries the
    /// API path.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;

        // Strip trailing slash for uniform handling
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/api/v3") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/v3/"));
        }

        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"indexer"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/api/v3/`, so joining `indexer` works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::InvalidApiKey;
        }

        let raw = resp.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(ErrorResponse {
                message: Some(message),
            }) => Error::Api {
                status: status.as_u16(),
                message,
            },
            _ => Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
            },
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── System ───────────────────────────────────────────────────────

    pub async fn system_status(&self) -> Result<types::SystemStatus, Error> {
        self.get("system/status").await
    }

    // ── Indexers ─────────────────────────────────────────────────────

    /// List all configured indexers, in server order.
    pub async fn list_indexers(&self) -> Result<Vec<types::Indexer>, Error> {
        self.get("indexer").await
    }

    // ── Quality profiles ─────────────────────────────────────────────

    /// List all quality profiles, in server order.
    pub async fn list_quality_profiles(&self) -> Result<Vec<types::QualityProfile>, Error> {
        self.get("qualityprofile").await
    }
}
