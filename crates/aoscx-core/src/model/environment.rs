// ── Environment domain types ──

use indexmap::IndexMap;
use serde::Serialize;

use super::common::MaybeNa;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FanStatus {
    pub status: bool,
}

/// One temperature sensor, in degrees Celsius.
///
/// Both flags derive from the sensor's discrete status, not from numeric
/// thresholds: `critical` raises `is_alert`, `emergency` raises `is_critical`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Temperature {
    pub temperature: f64,
    pub is_alert: bool,
    pub is_critical: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerSupply {
    pub status: bool,
    /// Rated capacity, watts.
    pub capacity: f64,
    /// Always `"N/A"`: the switch does not report drawn power.
    pub output: MaybeNa<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CpuUsage {
    #[serde(rename = "%usage")]
    pub usage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryUsage {
    /// Always `"N/A"`: total RAM is not exposed.
    pub available_ram: MaybeNa<i64>,
    /// Memory in use, as reported (percent); `-1` when unknown.
    pub used_ram: i64,
}

impl Default for MemoryUsage {
    fn default() -> Self {
        Self {
            available_ram: MaybeNa::NotAvailable,
            used_ram: -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Environment {
    pub fans: IndexMap<String, FanStatus>,
    pub temperature: IndexMap<String, Temperature>,
    pub power: IndexMap<String, PowerSupply>,
    pub cpu: IndexMap<String, CpuUsage>,
    pub memory: MemoryUsage,
}
