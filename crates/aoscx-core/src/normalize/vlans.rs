use aoscx_api::models::{Interface, Keyed, Vlan};
use indexmap::IndexMap;
use tracing::debug;

use super::decode_name;
use crate::model::VlanInfo;

/// VLANs by id with their physical member interfaces.
///
/// Only interfaces whose name contains `/` are considered. Membership
/// comes from the trunk list when it is non-empty, else from the access tag.
pub fn vlans(vlans: &Keyed<Vlan>, interfaces: &Keyed<Interface>) -> IndexMap<u16, VlanInfo> {
    let mut out: IndexMap<u16, VlanInfo> = vlans
        .iter()
        .filter_map(|(key, vlan)| {
            let id = vlan_id(key, vlan)?;
            Some((
                id,
                VlanInfo {
                    name: vlan.name.clone().unwrap_or_default(),
                    interfaces: Vec::new(),
                },
            ))
        })
        .collect();

    for (key, intf) in interfaces {
        let name = decode_name(key);
        if !name.contains('/') {
            continue;
        }
        let refs = intf
            .applied_vlan_trunks
            .as_ref()
            .filter(|r| !r.is_empty())
            .or_else(|| intf.applied_vlan_tag.as_ref().filter(|r| !r.is_empty()));
        let Some(refs) = refs else { continue };

        for raw_id in refs.ids() {
            match raw_id.parse::<u16>().ok().and_then(|id| out.get_mut(&id)) {
                Some(info) => info.interfaces.push(name.clone()),
                None => debug!(interface = %name, vlan = raw_id, "skipping unknown VLAN"),
            }
        }
    }
    out
}

/// A VLAN's numeric id, from the record or its collection key.
pub(crate) fn vlan_id(key: &str, vlan: &Vlan) -> Option<u16> {
    vlan.id.or_else(|| key.parse().ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn vlan_table() -> Keyed<Vlan> {
        serde_json::from_value(json!({
            "10": { "id": 10, "name": "default" },
            "20": { "id": 20, "name": "data" }
        }))
        .unwrap()
    }

    #[test]
    fn access_port_joins_its_vlan() {
        let interfaces: Keyed<Interface> = serde_json::from_value(json!({
            "1%2F1%2F1": { "applied_vlan_tag": { "10": "/rest/v1/system/vlans/10" } }
        }))
        .unwrap();
        let out = vlans(&vlan_table(), &interfaces);
        assert_eq!(out[&10].name, "default");
        assert_eq!(out[&10].interfaces, vec!["1/1/1".to_owned()]);
        assert_eq!(out[&20].interfaces, Vec::<String>::new());
    }

    #[test]
    fn trunks_take_precedence_and_order_is_kept() {
        let interfaces: Keyed<Interface> = serde_json::from_value(json!({
            "1/1/2": {
                "applied_vlan_tag": { "10": "" },
                "applied_vlan_trunks": ["/rest/v1/system/vlans/20", "/rest/v1/system/vlans/10"]
            },
            "1/1/3": {
                "applied_vlan_tag": { "20": "" },
                "applied_vlan_trunks": {}
            },
            "vlan10": { "applied_vlan_tag": { "10": "" } }
        }))
        .unwrap();
        let out = vlans(&vlan_table(), &interfaces);
        assert_eq!(out[&10].interfaces, vec!["1/1/2".to_owned()]);
        assert_eq!(out[&20].interfaces, vec!["1/1/2".to_owned(), "1/1/3".to_owned()]);
    }

    #[test]
    fn unknown_vlan_references_are_skipped() {
        let interfaces: Keyed<Interface> = serde_json::from_value(json!({
            "1/1/4": { "applied_vlan_tag": { "99": "" } }
        }))
        .unwrap();
        let out = vlans(&vlan_table(), &interfaces);
        assert_eq!(out.len(), 2);
        assert!(out.values().all(|v| v.interfaces.is_empty()));
    }

    #[test]
    fn id_falls_back_to_the_key() {
        let table: Keyed<Vlan> =
            serde_json::from_value(json!({ "30": { "name": "voice" } })).unwrap();
        let out = vlans(&table, &Keyed::new());
        assert_eq!(out[&30].name, "voice");
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({ "30": { "name": "voice", "interfaces": [] } })
        );
    }
}
