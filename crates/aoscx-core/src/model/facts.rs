// ── Device facts ──

use serde::Serialize;

/// Identity and inventory of the switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facts {
    /// Seconds since boot.
    pub uptime: u64,
    pub vendor: String,
    pub model: String,
    pub hostname: String,
    pub fqdn: String,
    pub os_version: String,
    pub serial_number: String,
    pub interface_list: Vec<String>,
}
