//! Response types for the Radarr v3 API.
//!
//! The server speaks camelCase JSON; these types deserialize from the
//! wire names but serialize with their plain snake_case field names, so
//! rendered output carries un-aliased keys (`enable_rss`, not
//! `enableRss`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Indexers ─────────────────────────────────────────────────────────

/// Indexer definition — from `GET /api/v3/indexer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Indexer {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub enable_rss: bool,
    #[serde(default)]
    pub enable_automatic_search: bool,
    #[serde(default)]
    pub enable_interactive_search: bool,
    #[serde(default)]
    pub supports_rss: bool,
    #[serde(default)]
    pub supports_search: bool,
    /// One of: `torrent`, `usenet`.
    pub protocol: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub download_client_id: i64,
    pub implementation: String,
    #[serde(default)]
    pub implementation_name: Option<String>,
    pub config_contract: String,
    #[serde(default)]
    pub info_link: Option<String>,
    /// Tag ids attached to this indexer.
    #[serde(default)]
    pub tags: Vec<i64>,
    /// Implementation-specific settings fields.
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// One implementation-specific settings field (base URL, API path, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Field {
    #[serde(default)]
    pub order: i32,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub help_text: Option<String>,
    /// Field value — shape varies by field type, kept as opaque JSON.
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
    #[serde(default)]
    pub advanced: bool,
}

// ── Quality profiles ─────────────────────────────────────────────────

/// Quality profile — from `GET /api/v3/qualityprofile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct QualityProfile {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub upgrade_allowed: bool,
    /// Quality id the profile upgrades towards.
    #[serde(default)]
    pub cutoff: i64,
    #[serde(default)]
    pub min_format_score: i64,
    #[serde(default)]
    pub cutoff_format_score: i64,
    #[serde(default)]
    pub language: Option<Language>,
    /// Allowed qualities and groups, in ranking order.
    #[serde(rename(deserialize = "items"), default)]
    pub quality_groups: Vec<QualityGroup>,
    /// Custom-format scoring entries.
    #[serde(rename(deserialize = "formatItems"), default)]
    pub formats: Vec<FormatItem>,
}

/// One entry in a profile's quality ranking: either a single quality or
/// a named group of qualities (`items` recursion is one level deep in
/// practice, but the shape allows nesting).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct QualityGroup {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quality: Option<Quality>,
    #[serde(default)]
    pub items: Vec<QualityGroup>,
    #[serde(default)]
    pub allowed: bool,
}

/// A single quality definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Quality {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub resolution: i32,
    #[serde(default)]
    pub modifier: Option<String>,
}

/// Custom-format score entry within a quality profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct FormatItem {
    /// Custom format id.
    pub format: i64,
    pub name: String,
    #[serde(default)]
    pub score: i64,
}

/// Language reference used by quality profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Language {
    pub id: i64,
    pub name: String,
}

// ── System ───────────────────────────────────────────────────────────

/// Server status — from `GET /api/v3/system/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SystemStatus {
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub instance_name: Option<String>,
    pub version: String,
    /// ISO 8601 date-time.
    #[serde(default)]
    pub build_time: Option<String>,
    #[serde(default)]
    pub os_name: Option<String>,
    #[serde(default)]
    pub os_version: Option<String>,
    #[serde(default)]
    pub runtime_version: Option<String>,
    #[serde(default)]
    pub url_base: Option<String>,
    #[serde(default)]
    pub authentication: Option<String>,
    #[serde(default)]
    pub migration_version: Option<i64>,
    /// Catch-all for additional fields not modeled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
