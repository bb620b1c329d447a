use aoscx_api::models::{Keyed, LldpNeighbor as RawNeighbor, LldpNeighborTable};
use indexmap::IndexMap;
use tracing::{debug, warn};

use super::{decode_name, display_name, slug};
use crate::model::{LldpNeighbor, LldpNeighborDetail};

/// Brief neighbor list per local interface, keyed by decoded interface name.
pub fn lldp_neighbors(table: &LldpNeighborTable) -> IndexMap<String, Vec<LldpNeighbor>> {
    let mut out: IndexMap<String, Vec<LldpNeighbor>> = IndexMap::new();
    for (raw_key, neighbors) in table {
        let entries = out.entry(decode_name(raw_key)).or_default();
        entries.extend(neighbors.values().map(|n| LldpNeighbor {
            hostname: n.neighbor_info.chassis_name.clone().unwrap_or_default(),
            port: n.port_id.clone().unwrap_or_default(),
        }));
    }
    out
}

/// Detailed neighbor list per local interface.
///
/// Each interface's list is published under several keys: the decoded
/// name (`1/1/1`), its slug (`1-1-1`), its display form (`Int 1/1/1`) and,
/// when it differs, the raw key (`1%2F1%2F1`). With `interface` set only
/// that interface (matched by decoded name) is returned; an unknown
/// interface yields an empty map.
pub fn lldp_neighbors_detail(
    table: &LldpNeighborTable,
    interface: Option<&str>,
) -> IndexMap<String, Vec<LldpNeighborDetail>> {
    let selected: Vec<(&String, &Keyed<RawNeighbor>)> = match interface {
        Some(wanted) => {
            let Some(found) = table.iter().find(|(raw, _)| decode_name(raw) == wanted) else {
                warn!(interface = wanted, "requested interface has no LLDP data");
                return IndexMap::new();
            };
            vec![found]
        }
        None => table.iter().collect(),
    };

    let mut out = IndexMap::new();
    for (raw_key, neighbors) in selected {
        let decoded = decode_name(raw_key);
        let entries: Vec<LldpNeighborDetail> = neighbors
            .values()
            .map(|n| detail(&decoded, n))
            .collect();

        let mut aliases = vec![slug(&decoded), display_name(&decoded)];
        if raw_key.as_str() != decoded {
            aliases.push(raw_key.clone());
        }
        debug!(interface = %decoded, ?aliases, count = entries.len(), "publishing LLDP entries");
        out.insert(decoded, entries.clone());
        for alias in aliases {
            out.insert(alias, entries.clone());
        }
    }
    out
}

fn detail(parent: &str, n: &RawNeighbor) -> LldpNeighborDetail {
    let info = &n.neighbor_info;
    LldpNeighborDetail {
        parent_interface: parent.to_owned(),
        remote_chassis_id: n.chassis_id.clone().unwrap_or_default(),
        remote_system_name: info.chassis_name.clone().unwrap_or_default(),
        remote_port: n.port_id.clone().unwrap_or_default(),
        remote_port_description: info.port_description.clone().unwrap_or_default(),
        remote_system_description: info.chassis_description.clone().unwrap_or_default(),
        remote_system_capab: capabilities(&info.chassis_capability_available),
        remote_system_enable_capab: capabilities(&info.chassis_capability_enabled),
    }
}

fn capabilities(caps: &[String]) -> String {
    caps.iter().map(|c| c.to_lowercase()).collect()
}
