// ── Core error types ──
//
// User-facing errors from aoscx-core. Consumers never see raw reqwest
// errors; the `From<aoscx_api::Error>` impl translates transport-layer
// failures into domain-appropriate variants.

use thiserror::Error;

/// Failures while reshaping vendor data into the vendor-neutral shape.
///
/// Absent optional fields are never errors; they resolve to sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// None of the candidate subsystems carries data for `category`.
    #[error("no subsystem reports {category} (tried {tried})")]
    MissingSubsystemData { category: String, tried: String },

    /// An address lacks a usable `/<prefix>` suffix.
    #[error("invalid address '{address}' on interface {interface}")]
    InvalidAddress { interface: String, address: String },

    /// A statistic is present but is not a non-negative whole number.
    #[error("invalid counter {counter}={value} on interface {interface}")]
    InvalidCounter {
        interface: String,
        counter: String,
        value: String,
    },
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to switch at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Driver is not connected -- call open() first")]
    NotConnected,

    #[error("Request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Configuration fetch failed ({kind}): {status} {body}")]
    ConfigFetch {
        kind: String,
        status: u16,
        body: String,
    },

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Operation not supported: {operation}")]
    Unsupported { operation: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<aoscx_api::Error> for CoreError {
    fn from(err: aoscx_api::Error) -> Self {
        match err {
            aoscx_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            aoscx_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            aoscx_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            aoscx_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            aoscx_api::Error::Http { status, body } => CoreError::Api {
                message: body,
                status: Some(status),
            },
            aoscx_api::Error::ConfigFetch { kind, status, body } => {
                CoreError::ConfigFetch { kind, status, body }
            }
            aoscx_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
