//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use aoscx_config::ConfigError;
use aoscx_core::{CoreError, NormalizeError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const UNSUPPORTED: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to switch at {url}")]
    #[diagnostic(
        code(aoscx::connection_failed),
        help(
            "Check that the switch is reachable and the REST API is enabled\n\
             (`https-server rest access-mode read-only` on the switch).\n\
             Self-signed certificate? Try: aoscx facts --insecure"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(aoscx::timeout),
        help("Increase the timeout with --timeout or check switch responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(aoscx::auth_failed),
        help(
            "Verify the username and password for this switch.\n\
             Store a new password with: aoscx profiles set-password --name <profile>"
        )
    )]
    AuthFailed { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(aoscx::no_credentials),
        help(
            "Set username in the profile, pass --username / --password,\n\
             or set AOSCX_USERNAME and AOSCX_PASSWORD."
        )
    )]
    NoCredentials { profile: String },

    // ── Device data ──────────────────────────────────────────────────
    #[error("Could not fetch {kind}: HTTP {status}")]
    #[diagnostic(code(aoscx::config_fetch), help("Switch response: {body}"))]
    ConfigFetch {
        kind: String,
        status: u16,
        body: String,
    },

    #[error(transparent)]
    #[diagnostic(
        code(aoscx::normalize),
        help("The switch returned data in a shape this tool does not understand.")
    )]
    Normalize(NormalizeError),

    #[error("Operation '{operation}' is not supported over the REST API")]
    #[diagnostic(code(aoscx::unsupported))]
    Unsupported { operation: String },

    #[error("API error: {message}")]
    #[diagnostic(code(aoscx::api_error))]
    ApiError {
        message: String,
        status: Option<u16>,
    },

    #[error("Internal error: {0}")]
    #[diagnostic(code(aoscx::internal))]
    Internal(String),

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(aoscx::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(aoscx::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No switch configured")]
    #[diagnostic(
        code(aoscx::no_config),
        help(
            "Pass --host (or set AOSCX_HOST), or add a profile to\n\
             {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(aoscx::config))]
    Config { message: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render output: {0}")]
    #[diagnostic(code(aoscx::render))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::ProfileNotFound { .. }
            | Self::NoConfig { .. }
            | Self::ApiError {
                status: Some(404), ..
            } => exit_code::NOT_FOUND,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Validation { .. } => exit_code::USAGE,
            Self::Unsupported { .. } => exit_code::UNSUPPORTED,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },
            CoreError::NotConnected => CliError::ConnectionFailed {
                url: "(not connected)".into(),
                source: "no open session".into(),
            },
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },
            CoreError::Timeout => CliError::Timeout,
            CoreError::ConfigFetch { kind, status, body } => {
                CliError::ConfigFetch { kind, status, body }
            }
            CoreError::Normalize(e) => CliError::Normalize(e),
            CoreError::Unsupported { operation } => CliError::Unsupported { operation },
            CoreError::Api { message, status } => CliError::ApiError { message, status },
            CoreError::Config { message } => CliError::Config { message },
            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::UnknownProfile { name } => CliError::ProfileNotFound {
                name,
                available: "(none)".into(),
            },
            ConfigError::Figment(e) => CliError::Config {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_category() {
        let auth: CliError = CoreError::AuthenticationFailed {
            message: "bad".into(),
        }
        .into();
        assert_eq!(auth.exit_code(), exit_code::AUTH);

        let conn: CliError = CoreError::ConnectionFailed {
            url: "https://192.0.2.1/rest/v1/".into(),
            reason: "refused".into(),
        }
        .into();
        assert_eq!(conn.exit_code(), exit_code::CONNECTION);

        let stub: CliError = CoreError::Unsupported {
            operation: "ping".into(),
        }
        .into();
        assert_eq!(stub.exit_code(), exit_code::UNSUPPORTED);

        let missing: CliError = ConfigError::UnknownProfile {
            name: "lab".into(),
        }
        .into();
        assert_eq!(missing.exit_code(), exit_code::NOT_FOUND);
    }

    #[test]
    fn profile_errors_keep_their_detail() {
        let err: CliError = ConfigError::Validation {
            field: "host".into(),
            reason: "profile 'lab' has no host".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::USAGE);
        assert!(err.to_string().contains("no host"));
    }
}
