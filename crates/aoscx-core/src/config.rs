// ── Runtime connection configuration ──
//
// These types describe *how* to reach one switch. They carry credential
// data and connection tuning, but never touch disk. The CLI constructs a
// `DriverConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict). Mirrors `verify_ssl = true`.
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (`verify_ssl = false`).
    DangerAcceptInvalid,
}

impl TlsVerification {
    /// Map the boolean `verify_ssl` switch onto a strategy.
    pub fn from_verify(verify: bool) -> Self {
        if verify {
            Self::SystemDefaults
        } else {
            Self::DangerAcceptInvalid
        }
    }
}

/// Configuration for connecting to a single switch.
///
/// Built by the CLI, passed to `Driver` -- core never reads config files.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Switch hostname or address (no scheme).
    pub host: String,
    /// REST API version, the `<version>` in `/rest/v<version>/`.
    pub api_version: String,
    pub username: String,
    pub password: SecretString,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Connect/read timeout of the transport.
    pub timeout: Duration,
}

impl DriverConfig {
    pub const DEFAULT_API_VERSION: &'static str = "1";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    pub fn new(host: impl Into<String>, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            host: host.into(),
            api_version: Self::DEFAULT_API_VERSION.into(),
            username: username.into(),
            password,
            tls: TlsVerification::default(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// `https://<host>/rest/v<version>/`, for display and diagnostics.
    pub fn base_url(&self) -> String {
        format!("https://{}/rest/v{}/", self.host, self.api_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_driver_conventions() {
        let cfg = DriverConfig::new("10.0.0.5", "admin", SecretString::from("pw".to_string()));
        assert_eq!(cfg.api_version, "1");
        assert_eq!(cfg.timeout, Duration::from_secs(60));
        assert_eq!(cfg.tls, TlsVerification::SystemDefaults);
        assert_eq!(cfg.base_url(), "https://10.0.0.5/rest/v1/");
    }

    #[test]
    fn verify_flag_mapping() {
        assert_eq!(
            TlsVerification::from_verify(false),
            TlsVerification::DangerAcceptInvalid
        );
        assert_eq!(
            TlsVerification::from_verify(true),
            TlsVerification::SystemDefaults
        );
    }
}
