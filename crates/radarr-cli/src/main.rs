mod cli;
mod commands;
mod config;
mod error;
mod output;
mod query;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use radarr_api::{RadarrClient, TransportConfig};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a server connection
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global).await,

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "radarrctl", &mut std::io::stdout());
            Ok(())
        }

        // All other commands require a server connection
        cmd => {
            let conn = build_connection_config(&cli.global)?;
            let client = RadarrClient::from_api_key(
                conn.url.as_str(),
                &conn.api_key,
                &TransportConfig {
                    tls: conn.tls,
                    timeout: conn.timeout,
                },
            )?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &client, &cli.global).await
        }
    }
}

/// Build a `ConnectionConfig` from the config file, profile, and CLI flags.
///
/// Fails fast on missing url or credentials -- no client is constructed
/// and no network traffic happens on this path.
fn build_connection_config(global: &cli::GlobalOpts) -> Result<config::ConnectionConfig, CliError> {
    let cfg = config::load_config_or_default();
    let profile_name = config::active_profile_name(global, &cfg);

    // If a profile exists, use it with CLI flag overrides
    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return config::resolve_profile(profile, &profile_name, global);
    }

    // No profile found -- try to build from CLI flags / env vars alone
    let url_str = global.url.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config::config_path().display().to_string(),
    })?;
    let url = config::parse_url(url_str)?;

    let api_key = match global.api_key.as_deref() {
        Some(key) if !key.is_empty() => secrecy::SecretString::from(key.to_owned()),
        _ => {
            return Err(CliError::NoCredentials {
                profile: profile_name,
            });
        }
    };

    let tls = if global.insecure {
        radarr_api::TlsMode::DangerAcceptInvalid
    } else {
        radarr_api::TlsMode::System
    };

    Ok(config::ConnectionConfig {
        url,
        api_key,
        tls,
        timeout: std::time::Duration::from_secs(global.timeout),
    })
}
