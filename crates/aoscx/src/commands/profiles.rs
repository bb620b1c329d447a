//! `profiles` subcommand handlers. These never open a switch session.

use std::io::IsTerminal;

use aoscx_config::ConfigError;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{GlobalOpts, ProfilesArgs, ProfilesCommand};
use crate::config;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct ProfileSummary {
    name: String,
    host: String,
    username: Option<String>,
    default: bool,
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Profile")]
    name: String,
    #[tabled(rename = "Host")]
    host: String,
    #[tabled(rename = "User")]
    username: String,
    #[tabled(rename = "Default")]
    default: &'static str,
}

impl From<&ProfileSummary> for ProfileRow {
    fn from(p: &ProfileSummary) -> Self {
        Self {
            name: p.name.clone(),
            host: p.host.clone(),
            username: p.username.clone().unwrap_or_default(),
            default: if p.default { "*" } else { "" },
        }
    }
}

pub fn handle(args: ProfilesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ProfilesCommand::List => list(global),
        ProfilesCommand::SetPassword { name } => set_password(name, global),
    }
}

fn list(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load(global)?;
    let default = cfg.default_profile.as_deref().unwrap_or("default");

    let mut profiles: Vec<ProfileSummary> = cfg
        .profiles
        .iter()
        .map(|(name, p)| ProfileSummary {
            name: name.clone(),
            host: p.host.clone(),
            username: p.username.clone(),
            default: name == default,
        })
        .collect();
    profiles.sort_by(|a, b| a.name.cmp(&b.name));

    if profiles.is_empty() {
        if !global.quiet {
            eprintln!(
                "No profiles configured. Add one to {}",
                config::config_display_path(global)
            );
        }
        return Ok(());
    }

    let out = output::render_list(&global.output, &profiles, |p| ProfileRow::from(p), |p| {
        p.name.clone()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn set_password(name: Option<String>, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load(global)?;
    let requested = name.or_else(|| global.profile.clone());
    let (profile_name, profile) = match cfg.profile(requested.as_deref()) {
        Ok(found) => found,
        Err(ConfigError::UnknownProfile { name }) => {
            return Err(CliError::ProfileNotFound {
                name,
                available: config::available_profiles(&cfg),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let password = match &global.password {
        Some(pw) => pw.clone(),
        None if std::io::stdin().is_terminal() => {
            let user = profile.username.as_deref().unwrap_or("admin");
            rpassword::prompt_password(format!("Password for {user}@{}: ", profile.host))?
        }
        None => {
            return Err(CliError::Validation {
                field: "password".into(),
                reason: "not a terminal; pass --password or set AOSCX_PASSWORD".into(),
            });
        }
    };
    if password.is_empty() {
        return Err(CliError::Validation {
            field: "password".into(),
            reason: "password cannot be empty".into(),
        });
    }

    aoscx_config::store_password(profile_name, &password)?;
    if !global.quiet {
        eprintln!("✓ Password for profile '{profile_name}' stored in system keyring");
    }
    Ok(())
}
