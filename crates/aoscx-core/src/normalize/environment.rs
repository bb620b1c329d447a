use aoscx_api::models::{
    FanReading, Keyed, PowerSupplyReading, ResourceReport, Shaped, Subsystem, TempSensor,
};
use indexmap::IndexMap;
use tracing::debug;

use super::{resolve_subsystem, truthy};
use crate::error::NormalizeError;
use crate::model::{
    CpuUsage, Environment, FanStatus, MaybeNa, MemoryUsage, PowerSupply, Temperature,
};

const OK: &str = "ok";
const CRITICAL: &str = "critical";
const EMERGENCY: &str = "emergency";

/// Build the [`Environment`] from the subsystem collection and the
/// temperature sensor collections of every subsystem.
pub fn environment(
    subsystems: &Keyed<Subsystem>,
    temp_sensors: &[Shaped<TempSensor>],
) -> Result<Environment, NormalizeError> {
    let (_, fans) = resolve_subsystem(subsystems, "fans", |s| {
        s.fans.as_ref().filter(|f| !f.is_empty())
    })?;
    let (_, psus) = resolve_subsystem(subsystems, "power supplies", |s| {
        s.power_supplies.as_ref().filter(|p| !p.is_empty())
    })?;
    let (resource_key, resources) = resolve_subsystem(subsystems, "resource utilization", |s| {
        s.resource_utilization.as_ref().filter(|r| !r.is_empty())
    })?;

    let (cpu, memory) = resource_usage(resource_key, resources);

    Ok(Environment {
        fans: fan_statuses(fans),
        temperature: temperatures(temp_sensors),
        power: power_supplies(psus),
        cpu,
        memory,
    })
}

fn fan_statuses(fans: &Shaped<FanReading>) -> IndexMap<String, FanStatus> {
    let status = |reading: &FanReading| FanStatus {
        status: match reading {
            FanReading::Record(fan) => fan.status.as_deref() == Some(OK),
            FanReading::Scalar(value) => truthy(value),
        },
    };
    match fans {
        Shaped::Keyed(map) => map.iter().map(|(name, r)| (name.clone(), status(r))).collect(),
        Shaped::Listed(list) => list
            .iter()
            .enumerate()
            .map(|(idx, r)| (listed_name(r, idx), status(r)))
            .collect(),
    }
}

fn listed_name(reading: &FanReading, idx: usize) -> String {
    match reading {
        FanReading::Record(fan) => fan.name.clone().unwrap_or_else(|| idx.to_string()),
        FanReading::Scalar(_) => idx.to_string(),
    }
}

fn temperatures(collections: &[Shaped<TempSensor>]) -> IndexMap<String, Temperature> {
    let mut out = IndexMap::new();
    for sensors in collections {
        match sensors {
            Shaped::Keyed(map) => {
                out.extend(map.iter().map(|(location, s)| (location.clone(), temperature(s))));
            }
            Shaped::Listed(list) => {
                out.extend(list.iter().enumerate().map(|(idx, s)| {
                    let location = s.location.clone().or_else(|| s.name.clone());
                    (location.unwrap_or_else(|| idx.to_string()), temperature(s))
                }));
            }
        }
    }
    out
}

fn temperature(sensor: &TempSensor) -> Temperature {
    let status = sensor.status.as_deref();
    Temperature {
        temperature: sensor.temperature.map_or(-1.0, |milli| milli / 1000.0),
        is_alert: status == Some(CRITICAL),
        is_critical: status == Some(EMERGENCY),
    }
}

fn power_supplies(psus: &Shaped<PowerSupplyReading>) -> IndexMap<String, PowerSupply> {
    match psus {
        Shaped::Keyed(map) => map
            .iter()
            .map(|(name, r)| (name.clone(), power_supply(r)))
            .collect(),
        Shaped::Listed(list) => list
            .iter()
            .enumerate()
            .map(|(idx, r)| {
                let name = match r {
                    PowerSupplyReading::Record(psu) => psu.name.clone(),
                    PowerSupplyReading::Scalar(_) => None,
                };
                (name.unwrap_or_else(|| idx.to_string()), power_supply(r))
            })
            .collect(),
    }
}

fn power_supply(reading: &PowerSupplyReading) -> PowerSupply {
    let (status, capacity) = match reading {
        PowerSupplyReading::Record(psu) => (
            psu.status.as_deref() == Some(OK),
            psu.characteristics
                .as_ref()
                .and_then(|c| c.maximum_power)
                .unwrap_or(0.0),
        ),
        PowerSupplyReading::Scalar(value) => (truthy(value), 0.0),
    };
    PowerSupply {
        status,
        capacity,
        output: MaybeNa::NotAvailable,
    }
}

/// CPU per module and the memory reading. An aggregate report is filed
/// under the name part of its subsystem key (`management_module,1/1` -> `1/1`).
fn resource_usage(
    subsystem_key: &str,
    report: &ResourceReport,
) -> (IndexMap<String, CpuUsage>, MemoryUsage) {
    match report {
        ResourceReport::Aggregate(usage) => {
            let name = subsystem_key
                .split_once(',')
                .map_or(subsystem_key, |(_, name)| name);
            let cpu = IndexMap::from([(name.to_owned(), cpu_usage(usage.cpu))]);
            (cpu, memory_usage(usage.memory))
        }
        ResourceReport::PerModule(modules) => {
            if modules.len() > 1 {
                debug!(
                    modules = modules.len(),
                    "several modules report memory, keeping the last"
                );
            }
            let cpu = modules
                .iter()
                .map(|m| {
                    (
                        m.name.clone().unwrap_or_default(),
                        cpu_usage(m.resource_utilization.cpu),
                    )
                })
                .collect();
            let memory = modules
                .last()
                .map(|m| memory_usage(m.resource_utilization.memory))
                .unwrap_or_default();
            (cpu, memory)
        }
    }
}

fn cpu_usage(cpu: Option<f64>) -> CpuUsage {
    CpuUsage {
        usage: cpu.unwrap_or(-1.0),
    }
}

fn memory_usage(memory: Option<i64>) -> MemoryUsage {
    MemoryUsage {
        available_ram: MaybeNa::NotAvailable,
        used_ram: memory.unwrap_or(-1),
    }
}
