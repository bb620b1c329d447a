//! Shared configuration for aoscx tools.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `aoscx_core::DriverConfig`. The CLI layers its
//! flag overrides on top of what this crate resolves.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use aoscx_core::{DriverConfig, TlsVerification};

/// Keyring service name; entries are keyed `<profile>/password`.
pub const KEYRING_SERVICE: &str = "aoscx";

/// Environment prefix for config overrides (`AOSCX_DEFAULTS__TIMEOUT=30`).
pub const ENV_PREFIX: &str = "AOSCX_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("profile '{name}' not found")]
    UnknownProfile { name: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named on the command line.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named switch profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Look up a profile by name, falling back to `default_profile`.
    pub fn profile(&self, name: Option<&str>) -> Result<(&str, &Profile), ConfigError> {
        let name = name
            .or(self.default_profile.as_deref())
            .unwrap_or("default");
        self.profiles
            .get_key_value(name)
            .map(|(k, p)| (k.as_str(), p))
            .ok_or_else(|| ConfigError::UnknownProfile { name: name.into() })
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,

    /// Seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            verify_ssl: default_verify_ssl(),
            timeout: default_timeout(),
            api_version: default_api_version(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_verify_ssl() -> bool {
    true
}
fn default_timeout() -> u64 {
    DriverConfig::DEFAULT_TIMEOUT.as_secs()
}
fn default_api_version() -> String {
    DriverConfig::DEFAULT_API_VERSION.into()
}

/// A named switch profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Switch hostname or IP address.
    pub host: String,

    /// REST API version (`"1"`, `"10.04"`, ...).
    pub api_version: Option<String>,

    pub username: Option<String>,

    /// Password (plaintext -- prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Verify the switch's TLS certificate.
    pub verify_ssl: Option<bool>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Request timeout override, seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "aoscx", "aoscx").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("aoscx");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the platform config file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path` (missing file is fine) + environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    Ok(figment.extract()?)
}

/// Parse config from a TOML string, without environment overrides.
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::string(toml));

    Ok(figment.extract()?)
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve a profile's password: `password_env` → keyring → plaintext.
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    resolve_password_with(
        profile,
        profile_name,
        |var| std::env::var(var).ok(),
        |account| {
            keyring::Entry::new(KEYRING_SERVICE, account)
                .and_then(|entry| entry.get_password())
                .ok()
        },
    )
}

fn resolve_password_with(
    profile: &Profile,
    profile_name: &str,
    env: impl Fn(&str) -> Option<String>,
    keyring: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, ConfigError> {
    // 1. Profile's password_env → env var lookup
    if let Some(pw) = profile.password_env.as_deref().and_then(&env) {
        return Ok(SecretString::from(pw));
    }

    // 2. System keyring
    if let Some(pw) = keyring(&format!("{profile_name}/password")) {
        return Ok(SecretString::from(pw));
    }

    // 3. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a profile's password in the system keyring.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password"))
        .and_then(|entry| entry.set_password(password))
        .map_err(|e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        })
}

// ── Translation ─────────────────────────────────────────────────────

/// TLS strategy for a profile: `verify_ssl = false` wins, then a CA file.
pub fn profile_tls(profile: &Profile, defaults: &Defaults) -> TlsVerification {
    let verify = profile.verify_ssl.unwrap_or(defaults.verify_ssl);
    match &profile.ca_cert {
        Some(ca) if verify => TlsVerification::CustomCa(ca.clone()),
        _ => TlsVerification::from_verify(verify),
    }
}

/// Build a `DriverConfig` from a profile and its resolved password.
pub fn profile_to_driver_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    password: SecretString,
) -> Result<DriverConfig, ConfigError> {
    if profile.host.trim().is_empty() {
        return Err(ConfigError::Validation {
            field: "host".into(),
            reason: format!("profile '{profile_name}' has no host"),
        });
    }
    let username = profile
        .username
        .clone()
        .ok_or_else(|| ConfigError::NoCredentials {
            profile: profile_name.into(),
        })?;

    let mut config = DriverConfig::new(profile.host.trim(), username, password);
    config.api_version = profile
        .api_version
        .clone()
        .unwrap_or_else(|| defaults.api_version.clone());
    config.tls = profile_tls(profile, defaults);
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    const SAMPLE: &str = r#"
default_profile = "lab"

[defaults]
timeout = 30

[profiles.lab]
host = "10.0.0.5"
username = "admin"
password = "plain"
password_env = "LAB_SWITCH_PW"
verify_ssl = false

[profiles.core]
host = "core.example.net"
api_version = "10.09"
username = "netops"
ca_cert = "/etc/ssl/core-ca.pem"
"#;

    #[test]
    fn parses_profiles_and_defaults() {
        let cfg = parse_config(SAMPLE).unwrap();
        assert_eq!(cfg.defaults.timeout, 30);
        assert!(cfg.defaults.verify_ssl);
        assert_eq!(cfg.defaults.api_version, "1");
        assert_eq!(cfg.defaults.output, "table");

        let (name, lab) = cfg.profile(None).unwrap();
        assert_eq!(name, "lab");
        assert_eq!(lab.host, "10.0.0.5");
        assert_eq!(lab.verify_ssl, Some(false));

        assert!(matches!(
            cfg.profile(Some("missing")),
            Err(ConfigError::UnknownProfile { .. })
        ));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults.timeout, 60);
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn password_chain_order() {
        let cfg = parse_config(SAMPLE).unwrap();
        let lab = &cfg.profiles["lab"];

        let from_env = resolve_password_with(
            lab,
            "lab",
            |var| (var == "LAB_SWITCH_PW").then(|| "from-env".to_owned()),
            |_| Some("from-keyring".to_owned()),
        )
        .unwrap();
        assert_eq!(from_env.expose_secret(), "from-env");

        let from_keyring = resolve_password_with(
            lab,
            "lab",
            |_| None,
            |account| (account == "lab/password").then(|| "from-keyring".to_owned()),
        )
        .unwrap();
        assert_eq!(from_keyring.expose_secret(), "from-keyring");

        let plain = resolve_password_with(lab, "lab", |_| None, |_| None).unwrap();
        assert_eq!(plain.expose_secret(), "plain");

        let core = &cfg.profiles["core"];
        assert!(matches!(
            resolve_password_with(core, "core", |_| None, |_| None),
            Err(ConfigError::NoCredentials { .. })
        ));
    }

    #[test]
    fn driver_config_from_profile() {
        let cfg = parse_config(SAMPLE).unwrap();

        let lab = profile_to_driver_config(
            &cfg.profiles["lab"],
            "lab",
            &cfg.defaults,
            SecretString::from("pw".to_string()),
        )
        .unwrap();
        assert_eq!(lab.base_url(), "https://10.0.0.5/rest/v1/");
        assert_eq!(lab.tls, TlsVerification::DangerAcceptInvalid);
        assert_eq!(lab.timeout, Duration::from_secs(30));

        let core = profile_to_driver_config(
            &cfg.profiles["core"],
            "core",
            &cfg.defaults,
            SecretString::from("pw".to_string()),
        )
        .unwrap();
        assert_eq!(core.api_version, "10.09");
        assert_eq!(core.username, "netops");
        assert_eq!(
            core.tls,
            TlsVerification::CustomCa(PathBuf::from("/etc/ssl/core-ca.pem"))
        );
    }

    #[test]
    fn profile_without_host_is_rejected() {
        let profile = Profile {
            username: Some("admin".into()),
            ..Profile::default()
        };
        assert!(matches!(
            profile_to_driver_config(
                &profile,
                "empty",
                &Defaults::default(),
                SecretString::from("pw".to_string())
            ),
            Err(ConfigError::Validation { .. })
        ));
    }
}
