//! Config subcommand handlers.

use std::collections::HashMap;

use dialoguer::{Input, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
fn save_config(cfg: &Config) -> Result<(), CliError> {
    let path = config::config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: format!("failed to serialize config: {e}"),
    })?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn empty_profile() -> Profile {
    Profile {
        url: String::new(),
        api_key: None,
        api_key_env: None,
        ca_cert: None,
        insecure: None,
        timeout: None,
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("radarrctl — configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            // 1. Profile name
            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 2. Server URL
            let url: String = Input::new()
                .with_prompt("Radarr URL")
                .default("http://localhost:7878".into())
                .interact_text()
                .map_err(prompt_err)?;
            config::parse_url(&url)?;

            // 3. API key
            let key = rpassword::prompt_password("API key: ").map_err(prompt_err)?;
            if key.is_empty() {
                return Err(CliError::Validation {
                    field: "api_key".into(),
                    reason: "API key cannot be empty".into(),
                });
            }

            // 4. Storage location
            let store_choices = &[
                "Store in system keyring (recommended)",
                "Save to config file (plaintext)",
            ];
            let store_selection = Select::new()
                .with_prompt("Where to store the API key?")
                .items(store_choices)
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            let api_key_field = if store_selection == 0 {
                store_in_keyring(&profile_name, &key)?;
                eprintln!("   API key stored in system keyring");
                None // Don't write to config file
            } else {
                Some(key)
            };

            // 5. Build profile and config
            let profile = Profile {
                url,
                api_key: api_key_field,
                api_key_env: None,
                ca_cert: None,
                insecure: None,
                timeout: None,
            };

            let mut profiles = HashMap::new();
            profiles.insert(profile_name.clone(), profile);

            let cfg = Config {
                default_profile: Some(profile_name.clone()),
                defaults: Default::default(),
                profiles,
            };

            // 6. Write config
            save_config(&cfg)?;

            eprintln!("\nConfiguration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: radarrctl system status");

            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = output::render_single(
                &global.output,
                &cfg,
                |c| format!("{c:#?}"),
                |_| "config".into(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);

            let profile = cfg
                .profiles
                .entry(profile_name.clone())
                .or_insert_with(empty_profile);

            match key.as_str() {
                "url" => {
                    config::parse_url(&value)?;
                    profile.url = value;
                }
                "api_key" | "api-key" => profile.api_key = Some(value),
                "api_key_env" | "api-key-env" => profile.api_key_env = Some(value),
                "insecure" => {
                    profile.insecure = Some(value.parse().map_err(|_| CliError::Validation {
                        field: "insecure".into(),
                        reason: "must be 'true' or 'false'".into(),
                    })?);
                }
                "timeout" => {
                    profile.timeout = Some(value.parse().map_err(|_| CliError::Validation {
                        field: "timeout".into(),
                        reason: "must be a number (seconds)".into(),
                    })?);
                }
                "ca_cert" | "ca-cert" => profile.ca_cert = Some(value.into()),
                other => {
                    return Err(CliError::Validation {
                        field: other.into(),
                        reason: format!(
                            "unknown config key '{other}'. Valid keys: url, api_key, \
                             api_key_env, insecure, timeout, ca_cert"
                        ),
                    });
                }
            }

            save_config(&cfg)?;
            eprintln!("Set {key} on profile '{profile_name}'");
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: radarrctl config init");
            } else {
                for name in cfg.profiles.keys() {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();

            if !cfg.profiles.contains_key(&name) {
                let available: Vec<_> = cfg.profiles.keys().cloned().collect();
                return Err(CliError::ProfileNotFound {
                    name,
                    available: if available.is_empty() {
                        "(none)".into()
                    } else {
                        available.join(", ")
                    },
                });
            }

            cfg.default_profile = Some(name.clone());
            save_config(&cfg)?;
            eprintln!("Default profile set to '{name}'");
            Ok(())
        }

        // ── SetApiKey ───────────────────────────────────────────────
        ConfigCommand::SetApiKey { profile } => {
            let cfg = config::load_config_or_default();
            let profile_name = profile.unwrap_or_else(|| config::active_profile_name(global, &cfg));

            if !cfg.profiles.contains_key(&profile_name) {
                let available: Vec<_> = cfg.profiles.keys().cloned().collect();
                return Err(CliError::ProfileNotFound {
                    name: profile_name,
                    available: if available.is_empty() {
                        "(none)".into()
                    } else {
                        available.join(", ")
                    },
                });
            }

            let secret = rpassword::prompt_password("API key: ").map_err(prompt_err)?;
            if secret.is_empty() {
                return Err(CliError::Validation {
                    field: "api_key".into(),
                    reason: "value cannot be empty".into(),
                });
            }

            store_in_keyring(&profile_name, &secret)?;
            eprintln!("API key stored in system keyring for profile '{profile_name}'");
            Ok(())
        }
    }
}

fn store_in_keyring(profile_name: &str, secret: &str) -> Result<(), CliError> {
    let entry = keyring::Entry::new("radarrctl", &format!("{profile_name}/api-key")).map_err(
        |e| CliError::Validation {
            field: "keyring".into(),
            reason: format!("failed to access keyring: {e}"),
        },
    )?;
    entry.set_password(secret).map_err(|e| CliError::Validation {
        field: "keyring".into(),
        reason: format!("failed to store API key in keyring: {e}"),
    })?;
    Ok(())
}
