use aoscx_api::models::{Interface, Keyed};
use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::decode_name;
use crate::error::NormalizeError;
use crate::model::{InterfaceCounters, InterfaceFacts, MaybeNa};

const UP: &str = "up";

/// Operational state of every interface, keyed by interface name.
pub fn interfaces(interfaces: &Keyed<Interface>) -> IndexMap<String, InterfaceFacts> {
    interfaces
        .iter()
        .map(|(key, intf)| (decode_name(key), interface_facts(intf)))
        .collect()
}

fn interface_facts(intf: &Interface) -> InterfaceFacts {
    InterfaceFacts {
        is_up: intf.link_state.as_deref() == Some(UP),
        is_enabled: intf.admin_state.as_deref() == Some(UP),
        description: intf.description.clone().unwrap_or_default(),
        last_flapped: -1.0,
        speed: intf.hw_intf_info.max_speed.into(),
        mtu: intf.mtu.into(),
        mac_address: MaybeNa::from(intf.hw_intf_info.mac_addr.clone()),
    }
}

/// Traffic counters of every interface, keyed by interface name.
///
/// Absent statistics read as 0; a present one must be a non-negative
/// whole number.
pub fn interface_counters(
    interfaces: &Keyed<Interface>,
) -> Result<IndexMap<String, InterfaceCounters>, NormalizeError> {
    interfaces
        .iter()
        .map(|(key, intf)| {
            let name = decode_name(key);
            let counters = counters(&name, &intf.statistics)?;
            Ok((name, counters))
        })
        .collect()
}

fn counters(
    interface: &str,
    stats: &Map<String, Value>,
) -> Result<InterfaceCounters, NormalizeError> {
    let read = |key: &str| match stats.get(key) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => counter_value(value).ok_or_else(|| NormalizeError::InvalidCounter {
            interface: interface.to_owned(),
            counter: key.to_owned(),
            value: value.to_string(),
        }),
    };
    Ok(InterfaceCounters {
        tx_errors: read("tx_errors")?,
        rx_errors: read("rx_errors")?,
        tx_discards: read("tx_dropped")?,
        rx_discards: read("rx_dropped")?,
        tx_octets: read("tx_bytes")?,
        rx_octets: read("rx_bytes")?,
        tx_unicast_packets: read("if_hc_out_unicast_packets")?,
        rx_unicast_packets: read("if_hc_in_unicast_packets")?,
        tx_multicast_packets: read("if_out_multicast_packets")?,
        rx_multicast_packets: read("if_in_multicast_packets")?,
        tx_broadcast_packets: read("if_out_broadcast_packets")?,
        rx_broadcast_packets: read("if_in_broadcast_packets")?,
    })
}

/// Counters arrive as integers, floats in exponent form (`1.5e3`), or
/// numeric strings on some firmware.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
fn counter_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            let f = n.as_f64()?;
            (f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64).then_some(f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Keyed<Interface> {
        serde_json::from_value(json!({
            "1%2F1%2F1": {
                "admin_state": "up",
                "link_state": "up",
                "description": "uplink",
                "mtu": 9198,
                "hw_intf_info": { "max_speed": 10000, "mac_addr": "88:3a:30:00:00:01" },
                "statistics": {
                    "tx_bytes": 1024,
                    "rx_bytes": 2048,
                    "if_hc_out_unicast_packets": 10,
                    "if_hc_in_unicast_packets": 20,
                    "tx_dropped": 3,
                    "rx_errors": 1
                }
            },
            "vlan1": {
                "admin_state": "up",
                "link_state": "down",
                "description": null,
                "hw_intf_info": {}
            },
            "lag1": { "admin_state": "Up", "link_state": "UP" }
        }))
        .unwrap()
    }

    #[test]
    fn every_interface_has_the_documented_keys() {
        let out = interfaces(&sample());
        for facts in out.values() {
            let value = serde_json::to_value(facts).unwrap();
            let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
            keys.sort_unstable();
            assert_eq!(
                keys,
                ["description", "is_enabled", "is_up", "last_flapped", "mac_address", "mtu", "speed"]
            );
        }
    }

    #[test]
    fn physical_interface_passes_values_through() {
        let out = interfaces(&sample());
        let port = &out["1/1/1"];
        assert!(port.is_up);
        assert!(port.is_enabled);
        assert_eq!(port.description, "uplink");
        assert_eq!(port.speed, MaybeNa::Known(10000));
        assert_eq!(port.mtu, MaybeNa::Known(9198));
        assert_eq!(port.mac_address, MaybeNa::Known("88:3a:30:00:00:01".to_owned()));
        assert!((port.last_flapped + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_hardware_fields_are_not_available() {
        let out = interfaces(&sample());
        let vlan = serde_json::to_value(&out["vlan1"]).unwrap();
        assert_eq!(vlan["description"], json!(""));
        assert_eq!(vlan["speed"], json!("N/A"));
        assert_eq!(vlan["mtu"], json!("N/A"));
        assert_eq!(vlan["mac_address"], json!("N/A"));
        assert_eq!(vlan["is_up"], json!(false));
        assert_eq!(vlan["is_enabled"], json!(true));
    }

    #[test]
    fn state_comparison_is_exact() {
        let out = interfaces(&sample());
        assert!(!out["lag1"].is_up);
        assert!(!out["lag1"].is_enabled);
    }

    #[test]
    fn counters_default_to_zero_and_alias_drops() {
        let out = interface_counters(&sample()).unwrap();
        assert_eq!(
            out["1/1/1"],
            InterfaceCounters {
                tx_octets: 1024,
                rx_octets: 2048,
                tx_unicast_packets: 10,
                rx_unicast_packets: 20,
                tx_discards: 3,
                rx_errors: 1,
                ..InterfaceCounters::default()
            }
        );
        assert_eq!(out["vlan1"], InterfaceCounters::default());
    }

    fn with_statistics(stats: Value) -> Keyed<Interface> {
        serde_json::from_value(json!({ "1%2F1%2F2": { "statistics": stats } })).unwrap()
    }

    #[test]
    fn present_counters_are_converted_not_zeroed() {
        let input = with_statistics(json!({
            "tx_bytes": 1.5e3,
            "rx_bytes": "4096",
            "tx_errors": null
        }));
        let out = interface_counters(&input).unwrap();
        assert_eq!(out["1/1/2"].tx_octets, 1500);
        assert_eq!(out["1/1/2"].rx_octets, 4096);
        assert_eq!(out["1/1/2"].tx_errors, 0);
    }

    #[test]
    fn unusable_counter_is_an_error() {
        for bad in [json!(-1), json!(2.5), json!("lots"), json!([1])] {
            let input = with_statistics(json!({ "tx_bytes": 10, "rx_bytes": bad }));
            assert_eq!(
                interface_counters(&input).unwrap_err(),
                NormalizeError::InvalidCounter {
                    interface: "1/1/2".into(),
                    counter: "rx_bytes".into(),
                    value: bad.to_string(),
                }
            );
        }
    }

    #[test]
    fn output_is_stable_across_calls() {
        let input = sample();
        assert_eq!(
            serde_json::to_string(&interfaces(&input)).unwrap(),
            serde_json::to_string(&interfaces(&input)).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&interface_counters(&input).unwrap()).unwrap(),
            serde_json::to_string(&interface_counters(&input).unwrap()).unwrap()
        );
    }
}
