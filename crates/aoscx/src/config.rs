//! Layering of command-line flags over `aoscx-config` profiles.
//!
//! Precedence, highest first: flags / `AOSCX_*` variables, the selected
//! profile, `[defaults]` from the config file.

use std::io::IsTerminal;

use secrecy::SecretString;
use tracing::debug;

use aoscx_config::{Config, ConfigError, Profile};
use aoscx_core::DriverConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Load the config file named by `--config`, or the platform default.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let cfg = match &global.config {
        Some(path) => aoscx_config::load_config_from(path)?,
        None => aoscx_config::load_config()?,
    };
    Ok(cfg)
}

/// Display path of the config file in use.
pub fn config_display_path(global: &GlobalOpts) -> String {
    global
        .config
        .clone()
        .unwrap_or_else(aoscx_config::config_path)
        .display()
        .to_string()
}

/// Profile selected by `--profile`, else the file's `default_profile`.
pub fn active_profile_name(global: &GlobalOpts, cfg: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Comma-separated profile names for diagnostics.
pub fn available_profiles(cfg: &Config) -> String {
    let mut names: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort_unstable();
    names.join(", ")
}

/// Build a `DriverConfig` from the config file, profile, and flag overrides.
pub fn build_driver_config(global: &GlobalOpts) -> Result<DriverConfig, CliError> {
    let cfg = load(global)?;
    let profile_name = active_profile_name(global, &cfg);

    let profile = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        // An explicitly named profile must exist.
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(&cfg),
            });
        }
        // No profile: flags / env vars alone must name the switch.
        None if global.host.is_some() => Profile::default(),
        None => {
            return Err(CliError::NoConfig {
                path: config_display_path(global),
            });
        }
    };

    let profile = apply_overrides(profile, global);
    let password = match &global.password {
        Some(pw) => SecretString::from(pw.clone()),
        None => match aoscx_config::resolve_password(&profile, &profile_name) {
            Ok(pw) => pw,
            Err(ConfigError::NoCredentials { .. }) => prompt_password(&profile, &profile_name)?,
            Err(e) => return Err(e.into()),
        },
    };

    let config =
        aoscx_config::profile_to_driver_config(&profile, &profile_name, &cfg.defaults, password)?;
    debug!(
        profile = %profile_name,
        url = %config.base_url(),
        timeout_secs = config.timeout.as_secs(),
        "driver configured"
    );
    Ok(config)
}

fn apply_overrides(mut profile: Profile, global: &GlobalOpts) -> Profile {
    if let Some(host) = &global.host {
        profile.host.clone_from(host);
    }
    if let Some(username) = &global.username {
        profile.username = Some(username.clone());
    }
    if let Some(version) = &global.api_version {
        profile.api_version = Some(version.clone());
    }
    if global.insecure {
        profile.verify_ssl = Some(false);
    }
    if let Some(secs) = global.timeout {
        profile.timeout = Some(secs);
    }
    profile
}

/// Ask for the password on the terminal; refuse when not interactive.
fn prompt_password(profile: &Profile, profile_name: &str) -> Result<SecretString, CliError> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NoCredentials {
            profile: profile_name.into(),
        });
    }
    let user = profile.username.as_deref().unwrap_or("admin");
    let prompt = format!("Password for {user}@{}: ", profile.host);
    let password = rpassword::prompt_password(prompt)?;
    Ok(SecretString::from(password))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use aoscx_core::TlsVerification;
    use clap::Parser;
    use secrecy::ExposeSecret;
    use std::io::Write as _;
    use std::time::Duration;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["aoscx"];
        argv.extend_from_slice(args);
        argv.push("facts");
        Cli::try_parse_from(argv).unwrap().global
    }

    const LAB: &str = r#"
default_profile = "lab"

[profiles.lab]
host = "10.0.0.5"
username = "admin"
password = "from-file"
"#;

    #[test]
    fn flags_override_profile() {
        let file = config_file(LAB);
        let path = file.path().to_str().unwrap();
        let g = global(&[
            "--config", path, "--host", "10.0.0.9", "--username", "ops", "--password", "flag",
            "--insecure", "--timeout", "5", "--api-version", "10.09",
        ]);
        let cfg = build_driver_config(&g).unwrap();
        assert_eq!(cfg.host, "10.0.0.9");
        assert_eq!(cfg.username, "ops");
        assert_eq!(cfg.password.expose_secret(), "flag");
        assert_eq!(cfg.tls, TlsVerification::DangerAcceptInvalid);
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.base_url(), "https://10.0.0.9/rest/v10.09/");
    }

    #[test]
    fn unknown_named_profile_lists_available() {
        let file = config_file(LAB);
        let g = global(&["--config", file.path().to_str().unwrap(), "--profile", "core"]);
        match build_driver_config(&g) {
            Err(CliError::ProfileNotFound { name, available }) => {
                assert_eq!(name, "core");
                assert_eq!(available, "lab");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn host_flag_works_without_profile() {
        let file = config_file("");
        let g = global(&[
            "--config", file.path().to_str().unwrap(), "--host", "sw1", "--username", "admin",
            "--password", "pw",
        ]);
        let cfg = build_driver_config(&g).unwrap();
        assert_eq!(cfg.base_url(), "https://sw1/rest/v1/");
        assert_eq!(cfg.tls, TlsVerification::SystemDefaults);
    }

    #[test]
    fn nothing_configured_is_reported() {
        let file = config_file("");
        let g = global(&["--config", file.path().to_str().unwrap()]);
        assert!(matches!(
            build_driver_config(&g),
            Err(CliError::NoConfig { .. })
        ));
    }
}
