// ── Interface domain types ──

use indexmap::IndexMap;
use serde::Serialize;

use super::common::MaybeNa;

/// Operational snapshot of one interface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceFacts {
    pub is_up: bool,
    pub is_enabled: bool,
    pub description: String,
    /// Always `-1.0`: the switch does not expose flap timestamps.
    pub last_flapped: f64,
    pub speed: MaybeNa<u64>,
    pub mtu: MaybeNa<u64>,
    pub mac_address: MaybeNa<String>,
}

/// Traffic counters of one interface. Discards are the switch's dropped counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceCounters {
    pub tx_errors: u64,
    pub rx_errors: u64,
    pub tx_discards: u64,
    pub rx_discards: u64,
    pub tx_octets: u64,
    pub rx_octets: u64,
    pub tx_unicast_packets: u64,
    pub rx_unicast_packets: u64,
    pub tx_multicast_packets: u64,
    pub rx_multicast_packets: u64,
    pub tx_broadcast_packets: u64,
    pub rx_broadcast_packets: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrefixLength {
    pub prefix_length: u8,
}

/// Addresses of one interface keyed by bare address.
///
/// Only families with at least one address are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceIps {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub ipv4: IndexMap<String, PrefixLength>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub ipv6: IndexMap<String, PrefixLength>,
}

impl InterfaceIps {
    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }
}
