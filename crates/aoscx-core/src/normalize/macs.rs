use aoscx_api::models::{Keyed, MacEntry};

use super::decode_name;
use crate::model::MacTableEntry;

const STATIC: &str = "static";

/// Flatten per-VLAN MAC collections into table entries.
///
/// Entry keys have the form `<type>,<address>`; the type tag decides
/// whether the entry is static.
pub fn mac_table(per_vlan: &[(u16, Keyed<MacEntry>)]) -> Vec<MacTableEntry> {
    per_vlan
        .iter()
        .filter(|(_, entries)| !entries.is_empty())
        .flat_map(|(vlan, entries)| {
            entries
                .iter()
                .map(move |(key, entry)| mac_entry(*vlan, key, entry))
        })
        .collect()
}

fn mac_entry(vlan: u16, key: &str, entry: &MacEntry) -> MacTableEntry {
    let key = decode_name(key);
    let (kind, address) = match key.split_once(',') {
        Some((kind, address)) => (kind, address.to_owned()),
        None => ("", entry.mac_addr.clone().unwrap_or_else(|| key.clone())),
    };
    MacTableEntry {
        mac: address,
        interface: entry
            .port
            .as_ref()
            .and_then(|p| p.name())
            .map(decode_name)
            .unwrap_or_default(),
        vlan,
        is_static: kind == STATIC,
        active: true,
        moves: None,
        last_move: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn entries(value: serde_json::Value) -> Keyed<MacEntry> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn static_key_is_parsed() {
        let table = mac_table(&[(
            10,
            entries(json!({
                "static,aa:bb:cc:dd:ee:ff": {
                    "port": { "1%2F1%2F3": "/rest/v1/system/interfaces/1%2F1%2F3" }
                }
            })),
        )]);
        assert_eq!(
            table,
            vec![MacTableEntry {
                mac: "aa:bb:cc:dd:ee:ff".into(),
                interface: "1/1/3".into(),
                vlan: 10,
                is_static: true,
                active: true,
                moves: None,
                last_move: None,
            }]
        );
        let json = serde_json::to_value(&table[0]).unwrap();
        assert_eq!(json["static"], json!(true));
        assert_eq!(json["moves"], json!(null));
        assert_eq!(json["last_move"], json!(null));
    }

    #[test]
    fn every_entry_of_every_vlan_is_kept() {
        let table = mac_table(&[
            (
                1,
                entries(json!({
                    "dynamic,00:00:00:00:00:01": { "port": "/rest/v1/system/interfaces/1%2F1%2F1" },
                    "dynamic%2C00:00:00:00:00:02": {}
                })),
            ),
            (20, Keyed::new()),
            (30, entries(json!({ "dynamic,00:00:00:00:00:03": {} }))),
        ]);
        assert_eq!(table.len(), 3);
        assert_eq!(table[0].interface, "1/1/1");
        assert!(!table[0].is_static);
        assert_eq!(table[1].mac, "00:00:00:00:00:02");
        assert_eq!(table[1].interface, "");
        assert_eq!(table[2].vlan, 30);
    }
}
