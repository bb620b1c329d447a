//! `lldp` handler.

use tabled::Tabled;

use aoscx_core::{Driver, LldpNeighbor, LldpNeighborDetail};

use crate::cli::{GlobalOpts, LldpArgs};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct NeighborRow {
    #[tabled(rename = "Local")]
    local: String,
    #[tabled(rename = "Neighbor")]
    hostname: String,
    #[tabled(rename = "Port")]
    port: String,
}

fn neighbor_rows(local: &str, neighbors: &[LldpNeighbor]) -> Vec<NeighborRow> {
    neighbors
        .iter()
        .map(|n| NeighborRow {
            local: local.to_owned(),
            hostname: n.hostname.clone(),
            port: n.port.clone(),
        })
        .collect()
}

#[derive(Tabled)]
struct DetailRow {
    #[tabled(rename = "Local")]
    local: String,
    #[tabled(rename = "Chassis ID")]
    chassis_id: String,
    #[tabled(rename = "System")]
    system_name: String,
    #[tabled(rename = "Port")]
    port: String,
    #[tabled(rename = "Port description")]
    port_description: String,
    #[tabled(rename = "Capabilities")]
    capabilities: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
}

/// Rows for one key. Alias keys repeat the same neighbors, so only the key
/// equal to the parent interface produces rows.
fn detail_rows(key: &str, neighbors: &[LldpNeighborDetail]) -> Vec<DetailRow> {
    neighbors
        .iter()
        .filter(|n| n.parent_interface == key)
        .map(|n| DetailRow {
            local: n.parent_interface.clone(),
            chassis_id: n.remote_chassis_id.clone(),
            system_name: n.remote_system_name.clone(),
            port: n.remote_port.clone(),
            port_description: n.remote_port_description.clone(),
            capabilities: n.remote_system_capab.clone(),
            enabled: n.remote_system_enable_capab.clone(),
        })
        .collect()
}

pub async fn handle(driver: &Driver, args: LldpArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let out = if args.detail {
        let neighbors = driver
            .get_lldp_neighbors_detail(args.interface.as_deref())
            .await?;
        output::render_map(
            &global.output,
            &neighbors,
            |key, list| detail_rows(key, list),
            |key, _| key.clone(),
        )?
    } else {
        let neighbors = driver.get_lldp_neighbors().await?;
        output::render_map(
            &global.output,
            &neighbors,
            |local, list| neighbor_rows(local, list),
            |local, _| local.clone(),
        )?
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor(parent: &str) -> LldpNeighborDetail {
        LldpNeighborDetail {
            parent_interface: parent.into(),
            remote_chassis_id: "88:3a:30:aa:bb:cc".into(),
            remote_system_name: "dist-sw".into(),
            remote_port: "1/1/49".into(),
            remote_port_description: String::new(),
            remote_system_description: String::new(),
            remote_system_capab: "bridgerouter".into(),
            remote_system_enable_capab: "bridge".into(),
        }
    }

    #[test]
    fn aliases_do_not_duplicate_rows() {
        let list = vec![neighbor("1/1/1")];
        assert_eq!(detail_rows("1/1/1", &list).len(), 1);
        assert!(detail_rows("1-1-1", &list).is_empty());
        assert!(detail_rows("Int 1/1/1", &list).is_empty());
    }
}
