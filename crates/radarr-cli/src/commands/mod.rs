//! Command dispatch: bridges CLI args -> API calls -> output formatting.

pub mod config_cmd;
pub mod indexers;
pub mod quality_profiles;
pub mod system;

use radarr_api::RadarrClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &RadarrClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Indexers(args) => indexers::handle(client, args, global).await,
        Command::QualityProfiles(args) => quality_profiles::handle(client, args, global).await,
        Command::System(args) => system::handle(client, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
