// AOS-CX REST response types
//
// Models for the switch's `/rest/v<version>/` resources at `depth=2`.
// Collections come back as JSON objects keyed by resource name, so they
// are modelled as `IndexMap`s to keep the switch's iteration order. Fields
// use `#[serde(default)]` liberally: firmware releases disagree about which
// attributes are present, and absent data is resolved by the normalizer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A collection keyed by (possibly percent-encoded) resource name.
pub type Keyed<T> = IndexMap<String, T>;

// ── Shape-polymorphic collections ───────────────────────────────────

/// Sensor collections arrive either keyed by name/location or as a plain
/// list of records that carry their own `name`/`location` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Shaped<T> {
    Listed(Vec<T>),
    Keyed(Keyed<T>),
}

impl<T> Shaped<T> {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Listed(items) => items.is_empty(),
            Self::Keyed(items) => items.is_empty(),
        }
    }
}

impl<T> Default for Shaped<T> {
    fn default() -> Self {
        Self::Keyed(IndexMap::new())
    }
}

// ── System ──────────────────────────────────────────────────────────

/// `GET system`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct System {
    /// Boot time, epoch seconds.
    #[serde(default)]
    pub boot_time: Option<i64>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub platform_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub mgmt_intf_status: MgmtIntfStatus,
    #[serde(default, deserialize_with = "nullable")]
    pub software_info: SoftwareInfo,
    #[serde(default)]
    pub software_version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MgmtIntfStatus {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoftwareInfo {
    #[serde(default)]
    pub build_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ── Subsystems ──────────────────────────────────────────────────────

/// One hardware subsystem from `GET system/subsystems`, keyed by
/// `<type>,<name>` (e.g. `management_module,1/1`, `chassis,1`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subsystem {
    #[serde(default, deserialize_with = "nullable")]
    pub product_info: ProductInfo,
    #[serde(default)]
    pub fans: Option<Shaped<FanReading>>,
    #[serde(default)]
    pub power_supplies: Option<Shaped<PowerSupplyReading>>,
    #[serde(default)]
    pub resource_utilization: Option<ResourceReport>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductInfo {
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A fan entry: a full record, or a bare scalar on some platforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FanReading {
    Record(FanRecord),
    Scalar(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FanRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A power supply entry: a full record, or a bare scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PowerSupplyReading {
    Record(PowerSupplyRecord),
    Scalar(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerSupplyRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub characteristics: Option<PowerSupplyCharacteristics>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerSupplyCharacteristics {
    /// Rated capacity, watts.
    #[serde(default)]
    pub maximum_power: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// CPU/memory utilization: a single aggregate record for the subsystem,
/// or one record per management module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceReport {
    PerModule(Vec<ModuleUtilization>),
    Aggregate(ResourceUtilization),
}

impl ResourceReport {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::PerModule(modules) => modules.is_empty(),
            Self::Aggregate(usage) => usage.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceUtilization {
    /// CPU usage, percent.
    #[serde(default)]
    pub cpu: Option<f64>,
    /// Memory usage, percent.
    #[serde(default)]
    pub memory: Option<i64>,
    #[serde(default)]
    pub open_fds: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceUtilization {
    pub fn is_empty(&self) -> bool {
        self.cpu.is_none()
            && self.memory.is_none()
            && self.open_fds.is_none()
            && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleUtilization {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub resource_utilization: ResourceUtilization,
}

// ── Temperature sensors ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TempSensor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Reading in milli-degrees Celsius.
    #[serde(default)]
    pub temperature: Option<f64>,
    /// `normal`, `critical`, `emergency`, ...
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `GET system/subsystems?attributes=temp_sensors`
///
/// Older firmware wraps the subsystem list in `{"subsystems": [...]}`;
/// newer firmware returns the usual keyed collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TemperatureResponse {
    Wrapped { subsystems: Vec<SubsystemSensors> },
    Keyed(Keyed<SubsystemSensors>),
}

impl TemperatureResponse {
    /// Sensor collections of every subsystem, in response order.
    pub fn into_sensors(self) -> Vec<Shaped<TempSensor>> {
        let subsystems: Vec<SubsystemSensors> = match self {
            Self::Wrapped { subsystems } => subsystems,
            Self::Keyed(keyed) => keyed.into_values().collect(),
        };
        subsystems
            .into_iter()
            .filter_map(|s| s.temp_sensors)
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubsystemSensors {
    #[serde(default)]
    pub temp_sensors: Option<Shaped<TempSensor>>,
}

// ── Interfaces ──────────────────────────────────────────────────────

/// One entry of `GET system/interfaces?depth=2`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interface {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub admin_state: Option<String>,
    #[serde(default)]
    pub link_state: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub mtu: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub hw_intf_info: HwIntfInfo,
    /// Raw statistics counters; keys vary by interface type.
    #[serde(default, deserialize_with = "nullable")]
    pub statistics: Map<String, Value>,
    /// IPv4 address in CIDR form, e.g. `10.0.0.1/24`.
    #[serde(default)]
    pub ip4_address: Option<String>,
    /// Link-local IPv6 addresses keyed by CIDR string.
    #[serde(default)]
    pub ip6_address_link_local: Option<Keyed<Value>>,
    #[serde(default)]
    pub applied_vlan_tag: Option<VlanRefs>,
    #[serde(default)]
    pub applied_vlan_trunks: Option<VlanRefs>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HwIntfInfo {
    /// Maximum supported speed, as reported by the hardware.
    #[serde(default)]
    pub max_speed: Option<u64>,
    #[serde(default)]
    pub mac_addr: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// VLAN references: a map of id → URI, or a list of URIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VlanRefs {
    Keyed(Keyed<Value>),
    Uris(Vec<String>),
}

impl VlanRefs {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Keyed(refs) => refs.is_empty(),
            Self::Uris(refs) => refs.is_empty(),
        }
    }

    /// Raw VLAN identifiers: map keys, or the last path segment of each URI.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::Keyed(refs) => refs.keys().map(String::as_str).collect(),
            Self::Uris(refs) => refs.iter().map(|uri| last_segment(uri)).collect(),
        }
    }
}

/// One entry of `GET system/interfaces/<name>/ip6_addresses?depth=2`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ip6Address {
    /// CIDR string, e.g. `2001:db8::1/64`.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ── LLDP ────────────────────────────────────────────────────────────

/// `GET system/interfaces/*/lldp_neighbors?depth=2`: interface key →
/// neighbor key (`<chassis_id>,<port_id>`) → neighbor.
pub type LldpNeighborTable = Keyed<Keyed<LldpNeighbor>>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LldpNeighbor {
    #[serde(default)]
    pub chassis_id: Option<String>,
    #[serde(default)]
    pub port_id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub neighbor_info: NeighborInfo,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NeighborInfo {
    #[serde(default)]
    pub chassis_name: Option<String>,
    #[serde(default)]
    pub chassis_description: Option<String>,
    #[serde(default)]
    pub port_description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub chassis_capability_available: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub chassis_capability_enabled: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ── VLANs & MACs ────────────────────────────────────────────────────

/// One entry of `GET system/vlans?depth=2`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vlan {
    #[serde(default)]
    pub id: Option<u16>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub admin: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of `GET system/vlans/<id>/macs?depth=2`, keyed by
/// `<type>,<address>` (e.g. `dynamic,aa:bb:cc:dd:ee:ff`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacEntry {
    #[serde(default)]
    pub mac_addr: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub port: Option<PortRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Port reference: `{ "<name>": "<uri>" }` or a bare URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortRef {
    Keyed(Keyed<Value>),
    Uri(String),
}

impl PortRef {
    /// Raw (possibly percent-encoded) interface name the entry points at.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Keyed(refs) => refs.keys().next().map(String::as_str),
            Self::Uri(uri) => Some(last_segment(uri)),
        }
    }
}

/// Treat an explicit JSON `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn last_segment(uri: &str) -> &str {
    uri.rsplit('/').next().unwrap_or(uri)
}
