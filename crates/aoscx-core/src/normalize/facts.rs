use aoscx_api::models::{Interface, Keyed, Subsystem, System};
use chrono::{DateTime, Utc};

use super::{decode_name, resolve_subsystem};
use crate::error::NormalizeError;
use crate::model::Facts;

const VENDOR: &str = "Aruba";
const DEFAULT_HOSTNAME: &str = "ArubaCX";

/// Build [`Facts`] from the system resource, the subsystem collection and
/// the interface collection. `now` anchors the uptime computation.
pub fn facts(
    system: &System,
    subsystems: &Keyed<Subsystem>,
    interfaces: &Keyed<Interface>,
    now: DateTime<Utc>,
) -> Result<Facts, NormalizeError> {
    let (_, product) = resolve_subsystem(subsystems, "serial number", |s| {
        s.product_info
            .serial_number
            .as_deref()
            .is_some_and(|serial| !serial.is_empty())
            .then_some(&s.product_info)
    })?;

    let uptime = system
        .boot_time
        .and_then(|boot| u64::try_from(now.timestamp() - boot).ok())
        .unwrap_or(0);

    let hostname = system
        .mgmt_intf_status
        .hostname
        .as_deref()
        .filter(|h| !h.is_empty())
        .unwrap_or(DEFAULT_HOSTNAME)
        .to_owned();

    let fqdn = match system.mgmt_intf_status.domain_name.as_deref() {
        Some(domain) if !domain.is_empty() => format!("{hostname}.{domain}"),
        _ => hostname.clone(),
    };

    let os_version = system
        .software_info
        .build_id
        .clone()
        .or_else(|| system.software_version.clone())
        .unwrap_or_default();

    Ok(Facts {
        uptime,
        vendor: VENDOR.to_owned(),
        model: product.product_name.clone().unwrap_or_default(),
        hostname,
        fqdn,
        os_version,
        serial_number: product.serial_number.clone().unwrap_or_default(),
        interface_list: interfaces.keys().map(|k| decode_name(k)).collect(),
    })
}
