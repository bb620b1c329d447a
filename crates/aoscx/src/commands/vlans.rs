//! `vlans` and `mac` handlers.

use tabled::Tabled;

use aoscx_core::{Driver, MacTableEntry, VlanInfo};

use super::yes_no;
use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct VlanRow {
    #[tabled(rename = "VLAN")]
    id: u16,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Interfaces")]
    interfaces: String,
}

fn vlan_row(id: u16, vlan: &VlanInfo) -> VlanRow {
    VlanRow {
        id,
        name: vlan.name.clone(),
        interfaces: vlan.interfaces.join(", "),
    }
}

pub async fn handle(driver: &Driver, global: &GlobalOpts) -> Result<(), CliError> {
    let vlans = driver.get_vlans().await?;
    let out = output::render_map(
        &global.output,
        &vlans,
        |id, vlan| vec![vlan_row(*id, vlan)],
        |id, _| id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[derive(Tabled)]
struct MacRow {
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "VLAN")]
    vlan: u16,
    #[tabled(rename = "Static")]
    is_static: &'static str,
}

impl From<&MacTableEntry> for MacRow {
    fn from(e: &MacTableEntry) -> Self {
        Self {
            mac: e.mac.clone(),
            interface: e.interface.clone(),
            vlan: e.vlan,
            is_static: yes_no(e.is_static),
        }
    }
}

pub async fn mac_table(driver: &Driver, global: &GlobalOpts) -> Result<(), CliError> {
    let entries = driver.get_mac_address_table().await?;
    let out = output::render_list(&global.output, &entries, |e| MacRow::from(e), |e| e.mac.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vlan_row_joins_members() {
        let row = vlan_row(
            10,
            &VlanInfo {
                name: "users".into(),
                interfaces: vec!["1/1/1".into(), "1/1/2".into()],
            },
        );
        assert_eq!(row.id, 10);
        assert_eq!(row.interfaces, "1/1/1, 1/1/2");
    }
}
