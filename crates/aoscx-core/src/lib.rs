// aoscx-core: Vendor-neutral facts between aoscx-api and consumers (CLI).

pub mod config;
pub mod driver;
pub mod error;
pub mod model;
pub mod normalize;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DriverConfig, TlsVerification};
pub use driver::Driver;
pub use error::{CoreError, NormalizeError};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    ConfigRetrieval, CpuUsage, DeviceConfig, Environment, Facts, FanStatus, InterfaceCounters,
    InterfaceFacts, InterfaceIps, Liveness, LldpNeighbor, LldpNeighborDetail, MacTableEntry,
    MaybeNa, MemoryUsage, PowerSupply, PrefixLength, Temperature, VlanInfo,
};
