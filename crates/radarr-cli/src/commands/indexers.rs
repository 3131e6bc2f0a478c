//! Indexer command handlers.

use serde::Serialize;
use tabled::Tabled;

use radarr_api::RadarrClient;
use radarr_api::types::Indexer;

use crate::cli::{GlobalOpts, IndexersArgs, IndexersCommand};
use crate::error::CliError;
use crate::{output, query};

// ── Result envelope ─────────────────────────────────────────────────

/// Envelope for `indexers list`. Read-only, so `changed` stays false.
#[derive(Serialize)]
struct IndexerList {
    changed: bool,
    indexers: Vec<Indexer>,
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct IndexerRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Protocol")]
    protocol: String,
    #[tabled(rename = "Priority")]
    priority: i32,
    #[tabled(rename = "RSS")]
    rss: bool,
    #[tabled(rename = "Auto Search")]
    auto_search: bool,
    #[tabled(rename = "Implementation")]
    implementation: String,
}

impl From<&Indexer> for IndexerRow {
    fn from(i: &Indexer) -> Self {
        Self {
            id: i.id,
            name: i.name.clone(),
            protocol: i.protocol.clone(),
            priority: i.priority,
            rss: i.enable_rss,
            auto_search: i.enable_automatic_search,
            implementation: i.implementation.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &RadarrClient,
    args: IndexersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        IndexersCommand::List(list) => {
            let fetched = client
                .list_indexers()
                .await
                .map_err(|e| CliError::list_failed("indexers", e))?;
            let indexers = query::select_by_name(fetched, list.name.as_deref(), |i| &i.name);

            let envelope = IndexerList {
                changed: false,
                indexers,
            };
            let out = output::render_list(
                &global.output,
                &envelope,
                &envelope.indexers,
                |i| IndexerRow::from(i),
                |i| i.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
