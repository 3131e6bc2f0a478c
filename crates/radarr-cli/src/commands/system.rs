//! System command handlers.

use radarr_api::RadarrClient;
use radarr_api::types::SystemStatus;

use crate::cli::{GlobalOpts, SystemArgs, SystemCommand};
use crate::error::CliError;
use crate::output;

fn detail(status: &SystemStatus) -> String {
    let mut lines = vec![format!(
        "{} {}",
        status.app_name.as_deref().unwrap_or("Radarr"),
        status.version
    )];
    if let Some(ref instance) = status.instance_name {
        lines.push(format!("Instance: {instance}"));
    }
    if let Some(ref os) = status.os_name {
        let os_version = status.os_version.as_deref().unwrap_or_default();
        lines.push(format!("OS:       {os} {os_version}").trim_end().to_owned());
    }
    if let Some(ref runtime) = status.runtime_version {
        lines.push(format!("Runtime:  {runtime}"));
    }
    if let Some(ref auth) = status.authentication {
        lines.push(format!("Auth:     {auth}"));
    }
    lines.join("\n")
}

pub async fn handle(
    client: &RadarrClient,
    args: SystemArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SystemCommand::Status => {
            let status = client.system_status().await?;
            let out = output::render_single(&global.output, &status, detail, |s| {
                s.version.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
