// Interface endpoints
//
// Interface state/statistics/addressing, per-interface IPv6 addresses,
// and the LLDP neighbor table.

use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::models::{Interface, Ip6Address, Keyed, LldpNeighborTable};

impl Client {
    /// List all interfaces with state, statistics and addressing.
    ///
    /// `GET system/interfaces?depth=2`
    pub async fn list_interfaces(&self) -> Result<Keyed<Interface>, Error> {
        let url = self.api_url("system/interfaces")?;
        debug!("listing interfaces");
        self.get_json(url, &[("depth", "2")]).await
    }

    /// List the IPv6 addresses configured on one interface.
    ///
    /// `GET system/interfaces/<name>/ip6_addresses?depth=2`
    ///
    /// Interfaces without an IPv6 collection answer 404; that is reported
    /// as an empty map.
    pub async fn list_interface_ip6_addresses(
        &self,
        interface: &str,
    ) -> Result<Keyed<Ip6Address>, Error> {
        let path = format!(
            "system/interfaces/{}/ip6_addresses",
            Self::encode_segment(interface)
        );
        let url = self.api_url(&path)?;
        debug!(interface, "listing IPv6 addresses");

        match self.get_json(url, &[("depth", "2")]).await {
            Err(e) if e.is_not_found() => Ok(Keyed::new()),
            other => other,
        }
    }

    /// Get LLDP neighbors of every interface.
    ///
    /// `GET system/interfaces/*/lldp_neighbors?depth=2`
    pub async fn list_lldp_neighbors(&self) -> Result<LldpNeighborTable, Error> {
        let url = self.api_url("system/interfaces/*/lldp_neighbors")?;
        debug!("listing LLDP neighbors");
        self.get_json(url, &[("depth", "2")]).await
    }
}
