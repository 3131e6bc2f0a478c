//! Quality profile command handlers.

use serde::Serialize;
use tabled::Tabled;

use radarr_api::RadarrClient;
use radarr_api::types::QualityProfile;

use crate::cli::{GlobalOpts, QualityProfilesArgs, QualityProfilesCommand};
use crate::error::CliError;
use crate::{output, query};

// ── Result envelope ─────────────────────────────────────────────────

/// Envelope for `quality-profiles list`. Read-only, so `changed` stays false.
#[derive(Serialize)]
struct QualityProfileList {
    changed: bool,
    quality_profiles: Vec<QualityProfile>,
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct QualityProfileRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Upgrades")]
    upgrade_allowed: bool,
    #[tabled(rename = "Cutoff")]
    cutoff: i64,
    #[tabled(rename = "Min Score")]
    min_format_score: i64,
    #[tabled(rename = "Language")]
    language: String,
}

impl From<&QualityProfile> for QualityProfileRow {
    fn from(p: &QualityProfile) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            upgrade_allowed: p.upgrade_allowed,
            cutoff: p.cutoff,
            min_format_score: p.min_format_score,
            language: p
                .language
                .as_ref()
                .map(|l| l.name.clone())
                .unwrap_or_default(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &RadarrClient,
    args: QualityProfilesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        QualityProfilesCommand::List(list) => {
            let fetched = client
                .list_quality_profiles()
                .await
                .map_err(|e| CliError::list_failed("quality profiles", e))?;
            let quality_profiles =
                query::select_by_name(fetched, list.name.as_deref(), |p| &p.name);

            let envelope = QualityProfileList {
                changed: false,
                quality_profiles,
            };
            let out = output::render_list(
                &global.output,
                &envelope,
                &envelope.quality_profiles,
                |p| QualityProfileRow::from(p),
                |p| p.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
