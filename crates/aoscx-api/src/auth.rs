// Session authentication
//
// Cookie-based login/logout. `POST login` sets the session cookie in the
// client's jar; subsequent requests use it automatically. The switch caps
// concurrent REST sessions, so callers should always log out.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::Client;
use crate::error::Error;

impl Client {
    /// Authenticate with username/password.
    ///
    /// `POST login` with a form body. Any non-2xx status is an
    /// authentication failure; transport failures surface as
    /// [`Error::Transport`].
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.api_url("login")?;
        debug!("logging in at {}", url);

        let form = [
            ("username", username),
            ("password", password.expose_secret()),
        ];

        let resp = self
            .http()
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {body}"),
            });
        }

        debug!("login successful");
        Ok(())
    }

    /// End the current session.
    ///
    /// `POST logout`
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.api_url("logout")?;
        debug!("logging out at {}", url);

        let resp = self
            .http()
            .post(url)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        debug!("logout complete");
        Ok(())
    }
}
