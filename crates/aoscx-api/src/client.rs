// AOS-CX REST HTTP client
//
// Wraps `reqwest::Client` with the switch's versioned base URL
// (`https://<host>/rest/v<version>/`), query construction, and status/body
// handling. Endpoint modules (system, interfaces, vlans, configs) are
// implemented as inherent methods in separate files to keep this module
// focused on transport mechanics.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Characters escaped when a resource name is embedded in a URL path.
/// `1/1/1` becomes `1%2F1%2F1`, as the switch expects.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Raw HTTP client for one switch's REST API.
///
/// Holds a cookie-backed session once [`login`](Self::login) succeeds. All
/// methods return decoded payloads; status handling happens before the
/// caller sees anything.
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a client for `host` speaking REST API `version`.
    ///
    /// The base URL becomes `https://<host>/rest/v<version>/`.
    pub fn new(host: &str, version: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let base_url = Self::base_url_for(host, version)?;
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client` and base URL.
    ///
    /// Use this when the HTTP client is owned elsewhere (tests, proxies).
    /// `base_url` must end with `/`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Build `https://<host>/rest/v<version>/`.
    pub fn base_url_for(host: &str, version: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!("https://{host}/rest/v{version}/"))?)
    }

    /// The underlying HTTP client (for auth flows that need direct access).
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The versioned REST base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for a path relative to the REST base.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    /// Percent-encode a resource name for use as one path segment.
    pub(crate) fn encode_segment(name: &str) -> String {
        utf8_percent_encode(name, SEGMENT).to_string()
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(Error::Transport)?;

        let body = Self::success_body(resp).await?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }

    /// Send a GET request for a `text/plain` resource.
    ///
    /// Returns the status and body untouched so callers can attach their
    /// own error context.
    pub(crate) async fn get_text(&self, url: Url) -> Result<(reqwest::StatusCode, String), Error> {
        debug!("GET {} (text)", url);

        let resp = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "text/plain")
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;
        Ok((status, body))
    }

    /// Turn a response into its body, or an error for non-2xx statuses.
    async fn success_body(resp: reqwest::Response) -> Result<String, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "session expired or invalid credentials".into(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
