// ── LLDP neighbor types ──

use serde::Serialize;

/// Brief neighbor view: who is on the other end of a local port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LldpNeighbor {
    pub hostname: String,
    pub port: String,
}

/// Detailed neighbor view.
///
/// Capabilities are the lower-cased capability names concatenated into one
/// string (`["Bridge", "Router"]` becomes `"bridgerouter"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LldpNeighborDetail {
    pub parent_interface: String,
    pub remote_chassis_id: String,
    pub remote_system_name: String,
    pub remote_port: String,
    pub remote_port_description: String,
    pub remote_system_description: String,
    pub remote_system_capab: String,
    pub remote_system_enable_capab: String,
}
