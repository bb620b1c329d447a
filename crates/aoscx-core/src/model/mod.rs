// ── Vendor-neutral domain model ──
//
// Every type in this module is the fixed output contract of one fact
// category. Field names serialize exactly as multi-vendor automation
// consumers expect them, and every documented key is always present.

pub mod common;

pub mod device_config;
pub mod environment;
pub mod facts;
pub mod interface;
pub mod lldp;
pub mod vlan;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use aoscx_core::model::*` gives you everything.

pub use common::MaybeNa;

pub use device_config::{ConfigRetrieval, DeviceConfig, Liveness};
pub use environment::{CpuUsage, Environment, FanStatus, MemoryUsage, PowerSupply, Temperature};
pub use facts::Facts;
pub use interface::{InterfaceCounters, InterfaceFacts, InterfaceIps, PrefixLength};
pub use lldp::{LldpNeighbor, LldpNeighborDetail};
pub use vlan::{MacTableEntry, VlanInfo};
