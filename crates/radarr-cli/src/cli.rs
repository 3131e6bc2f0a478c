//! Clap derive structures for the `radarrctl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// radarrctl -- query Radarr configuration from the command line
#[derive(Debug, Parser)]
#[command(
    name = "radarrctl",
    version,
    about = "Query Radarr configuration from the command line",
    long_about = "A CLI for inspecting a Radarr server's configuration.\n\n\
        Talks to the v3 REST API with API-key authentication. All commands\n\
        are read-only: they list server-side configuration objects and\n\
        never modify the server.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "RADARR_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Radarr base URL (overrides profile)
    #[arg(long, short = 'u', env = "RADARR_URL", global = true)]
    pub url: Option<String>,

    /// Radarr API key
    #[arg(long, env = "RADARR_API_KEY", global = true, hide_env = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "RADARR_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "RADARR_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "RADARR_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON result envelope
    Json,
    /// Compact single-line JSON result envelope
    JsonCompact,
    /// YAML result envelope
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Query configured indexers
    #[command(alias = "idx")]
    Indexers(IndexersArgs),

    /// Query quality profiles
    #[command(alias = "qp")]
    QualityProfiles(QualityProfilesArgs),

    /// Server status and connectivity
    #[command(alias = "sys")]
    System(SystemArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

/// Shared filter arguments for all list commands.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Keep only the record whose name matches exactly (case-sensitive);
    /// with duplicate names the last match in server order wins
    #[arg(long, short = 'n')]
    pub name: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  INDEXERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct IndexersArgs {
    #[command(subcommand)]
    pub command: IndexersCommand,
}

#[derive(Debug, Subcommand)]
pub enum IndexersCommand {
    /// List configured indexers
    #[command(alias = "ls")]
    List(ListArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  QUALITY PROFILES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct QualityProfilesArgs {
    #[command(subcommand)]
    pub command: QualityProfilesCommand,
}

#[derive(Debug, Subcommand)]
pub enum QualityProfilesCommand {
    /// List quality profiles
    #[command(alias = "ls")]
    List(ListArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SYSTEM
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SystemArgs {
    #[command(subcommand)]
    pub command: SystemCommand,
}

#[derive(Debug, Subcommand)]
pub enum SystemCommand {
    /// Server version info (also a credentials/connectivity check)
    Status,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Set a configuration value on the active profile
    Set {
        /// Config key (url, api_key, api_key_env, insecure, timeout, ca_cert)
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store an API key in the system keyring
    SetApiKey {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
