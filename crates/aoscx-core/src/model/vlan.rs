// ── VLAN and MAC table types ──

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VlanInfo {
    pub name: String,
    /// Member interfaces in the switch's interface order.
    pub interfaces: Vec<String>,
}

/// One MAC address table entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacTableEntry {
    pub mac: String,
    pub interface: String,
    pub vlan: u16,
    #[serde(rename = "static")]
    pub is_static: bool,
    /// Always `true`: stale entries are not detectable.
    pub active: bool,
    /// Unsupported, always `null`.
    pub moves: Option<u32>,
    /// Unsupported, always `null`.
    pub last_move: Option<f64>,
}
