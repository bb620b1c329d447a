// Configuration text endpoints

use tracing::debug;

use crate::client::Client;
use crate::error::Error;

impl Client {
    /// Fetch a configuration as plain text.
    ///
    /// `GET configs/<name>` with `Accept: text/plain`, where `name` is
    /// `running-config` or `startup-config`. A non-2xx answer becomes
    /// [`Error::ConfigFetch`] carrying status and body.
    pub async fn get_config_text(&self, name: &str) -> Result<String, Error> {
        let url = self.api_url(&format!("configs/{name}"))?;
        debug!(name, "fetching configuration");

        let (status, body) = self.get_text(url).await?;
        if !status.is_success() {
            return Err(Error::ConfigFetch {
                kind: name.to_owned(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
