// ── Switch driver ──
//
// Owns the authenticated session to one switch and exposes one operation
// per fact category. Every operation fetches a fresh snapshot through
// aoscx-api and hands it to the normalizer; nothing is cached.

use chrono::Utc;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use aoscx_api::models::{Ip6Address, Keyed, MacEntry};
use aoscx_api::transport::{TlsMode, TransportConfig};
use aoscx_api::Client;

use crate::config::{DriverConfig, TlsVerification};
use crate::error::CoreError;
use crate::model::{
    ConfigRetrieval, DeviceConfig, Environment, Facts, InterfaceCounters, InterfaceFacts,
    InterfaceIps, Liveness, LldpNeighbor, LldpNeighborDetail, MacTableEntry, VlanInfo,
};
use crate::normalize;

const RUNNING_CONFIG: &str = "running-config";
const STARTUP_CONFIG: &str = "startup-config";

/// Session-holding facade over one AOS-CX switch.
///
/// Created disconnected; call [`open()`](Self::open) before any fact
/// operation. A driver holds at most one session and never reconnects on
/// its own.
pub struct Driver {
    config: DriverConfig,
    session: Option<Client>,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Build the REST client from configuration and log in.
    pub async fn open(&mut self) -> Result<(), CoreError> {
        let transport = build_transport(&self.config);
        let client = Client::new(&self.config.host, &self.config.api_version, &transport)?;
        self.open_with(client).await
    }

    /// Log in over an already constructed client and keep it as the session.
    pub async fn open_with(&mut self, client: Client) -> Result<(), CoreError> {
        if self.session.is_some() {
            debug!("replacing existing session");
            self.close().await;
        }

        match client.login(&self.config.username, &self.config.password).await {
            Ok(()) => {}
            Err(e) if e.is_connect() => {
                return Err(CoreError::ConnectionFailed {
                    url: client.base_url().to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        info!(url = %client.base_url(), "session opened");
        self.session = Some(client);
        Ok(())
    }

    /// Log out and drop the session. Logout failures are logged, not returned.
    pub async fn close(&mut self) {
        let Some(client) = self.session.take() else {
            return;
        };
        if let Err(e) = client.logout().await {
            warn!(error = %e, "logout failed (non-fatal)");
        }
        info!("session closed");
    }

    pub fn is_alive(&self) -> Liveness {
        Liveness {
            is_alive: self.session.is_some(),
        }
    }

    fn client(&self) -> Result<&Client, CoreError> {
        self.session.as_ref().ok_or(CoreError::NotConnected)
    }

    // ── Facts ────────────────────────────────────────────────────────

    pub async fn get_facts(&self) -> Result<Facts, CoreError> {
        let client = self.client()?;
        let system = client.get_system().await?;
        let subsystems = client.get_subsystems().await?;
        let interfaces = client.list_interfaces().await?;
        Ok(normalize::facts(&system, &subsystems, &interfaces, Utc::now())?)
    }

    pub async fn get_interfaces(&self) -> Result<IndexMap<String, InterfaceFacts>, CoreError> {
        let interfaces = self.client()?.list_interfaces().await?;
        Ok(normalize::interfaces(&interfaces))
    }

    pub async fn get_interfaces_counters(
        &self,
    ) -> Result<IndexMap<String, InterfaceCounters>, CoreError> {
        let interfaces = self.client()?.list_interfaces().await?;
        Ok(normalize::interface_counters(&interfaces)?)
    }

    pub async fn get_lldp_neighbors(
        &self,
    ) -> Result<IndexMap<String, Vec<LldpNeighbor>>, CoreError> {
        let table = self.client()?.list_lldp_neighbors().await?;
        Ok(normalize::lldp_neighbors(&table))
    }

    /// Detailed LLDP neighbors, for every interface or just `interface`.
    pub async fn get_lldp_neighbors_detail(
        &self,
        interface: Option<&str>,
    ) -> Result<IndexMap<String, Vec<LldpNeighborDetail>>, CoreError> {
        let table = self.client()?.list_lldp_neighbors().await?;
        Ok(normalize::lldp_neighbors_detail(
            &table,
            interface.filter(|i| !i.is_empty()),
        ))
    }

    pub async fn get_environment(&self) -> Result<Environment, CoreError> {
        let client = self.client()?;
        let subsystems = client.get_subsystems().await?;
        let sensors = client.get_temperature_sensors().await?;
        Ok(normalize::environment(&subsystems, &sensors)?)
    }

    pub async fn get_interfaces_ip(&self) -> Result<IndexMap<String, InterfaceIps>, CoreError> {
        let client = self.client()?;
        let interfaces = client.list_interfaces().await?;

        let mut ip6: Keyed<Keyed<Ip6Address>> = Keyed::new();
        for key in interfaces.keys() {
            let addresses = client
                .list_interface_ip6_addresses(&normalize::decode_name(key))
                .await?;
            if !addresses.is_empty() {
                ip6.insert(key.clone(), addresses);
            }
        }

        Ok(normalize::interfaces_ip(&interfaces, &ip6)?)
    }

    pub async fn get_mac_address_table(&self) -> Result<Vec<MacTableEntry>, CoreError> {
        let client = self.client()?;
        let vlans = client.list_vlans().await?;

        let mut per_vlan: Vec<(u16, Keyed<MacEntry>)> = Vec::with_capacity(vlans.len());
        for (key, vlan) in &vlans {
            let Some(id) = normalize::vlan_id(key, vlan) else {
                debug!(vlan = %key, "skipping VLAN without numeric id");
                continue;
            };
            per_vlan.push((id, client.list_vlan_macs(id).await?));
        }

        Ok(normalize::mac_table(&per_vlan))
    }

    pub async fn get_vlans(&self) -> Result<IndexMap<u16, VlanInfo>, CoreError> {
        let client = self.client()?;
        let vlans = client.list_vlans().await?;
        let interfaces = client.list_interfaces().await?;
        Ok(normalize::vlans(&vlans, &interfaces))
    }

    // ── Configuration ────────────────────────────────────────────────

    pub async fn get_config(&self, retrieve: ConfigRetrieval) -> Result<DeviceConfig, CoreError> {
        let client = self.client()?;
        let mut config = DeviceConfig::default();
        if retrieve.includes_running() {
            config.running = client.get_config_text(RUNNING_CONFIG).await?;
        }
        if retrieve.includes_startup() {
            config.startup = client.get_config_text(STARTUP_CONFIG).await?;
        }
        Ok(config)
    }

    // ── Not available over REST ──────────────────────────────────────

    pub fn get_snmp_information(&self) -> Result<(), CoreError> {
        self.client()?;
        Err(unsupported("get_snmp_information"))
    }

    pub fn get_ntp_servers(&self) -> Result<(), CoreError> {
        self.client()?;
        Err(unsupported("get_ntp_servers"))
    }

    pub fn ping(&self, destination: &str) -> Result<(), CoreError> {
        self.client()?;
        debug!(destination, "ping requested");
        Err(unsupported("ping"))
    }
}

fn build_transport(config: &DriverConfig) -> TransportConfig {
    TransportConfig {
        tls: tls_to_transport(&config.tls),
        timeout: config.timeout,
        cookie_jar: None,
    }
}

fn tls_to_transport(tls: &TlsVerification) -> TlsMode {
    match tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    }
}

fn unsupported(operation: &str) -> CoreError {
    CoreError::Unsupported {
        operation: operation.into(),
    }
}
