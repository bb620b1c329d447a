// VLAN and MAC table endpoints

use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::models::{Keyed, MacEntry, Vlan};

impl Client {
    /// List all VLANs keyed by id.
    ///
    /// `GET system/vlans?depth=2`
    pub async fn list_vlans(&self) -> Result<Keyed<Vlan>, Error> {
        let url = self.api_url("system/vlans")?;
        debug!("listing VLANs");
        self.get_json(url, &[("depth", "2")]).await
    }

    /// List the MAC entries learned or configured on one VLAN.
    ///
    /// `GET system/vlans/<id>/macs?depth=2`
    pub async fn list_vlan_macs(&self, vlan_id: u16) -> Result<Keyed<MacEntry>, Error> {
        let url = self.api_url(&format!("system/vlans/{vlan_id}/macs"))?;
        debug!(vlan_id, "listing MAC entries");
        self.get_json(url, &[("depth", "2")]).await
    }
}
