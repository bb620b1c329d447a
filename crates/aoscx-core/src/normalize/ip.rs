use aoscx_api::models::{Interface, Ip6Address, Keyed};
use indexmap::IndexMap;

use super::{decode_name, split_cidr};
use crate::error::NormalizeError;
use crate::model::{InterfaceIps, PrefixLength};

/// Configured addresses per interface. `ip6_addresses` holds each
/// interface's `ip6_addresses` collection, keyed like `interfaces`.
/// Interfaces without any address are left out.
pub fn interfaces_ip(
    interfaces: &Keyed<Interface>,
    ip6_addresses: &Keyed<Keyed<Ip6Address>>,
) -> Result<IndexMap<String, InterfaceIps>, NormalizeError> {
    let mut out = IndexMap::new();
    for (key, intf) in interfaces {
        let name = decode_name(key);
        let mut ips = InterfaceIps::default();

        if let Some(cidr) = intf.ip4_address.as_deref().filter(|a| !a.is_empty()) {
            let (address, prefix_length) = split_cidr(&name, cidr)?;
            ips.ipv4.insert(address, PrefixLength { prefix_length });
        }

        let link_local = intf.ip6_address_link_local.iter().flat_map(|m| m.keys());
        let configured = ip6_addresses
            .get(key)
            .into_iter()
            .flat_map(|m| m.iter().map(|(k, a)| a.address.as_ref().unwrap_or(k)));
        for cidr in link_local.chain(configured) {
            let (address, prefix_length) = split_cidr(&name, cidr)?;
            ips.ipv6.insert(address, PrefixLength { prefix_length });
        }

        if !ips.is_empty() {
            out.insert(name, ips);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn interfaces() -> Keyed<Interface> {
        serde_json::from_value(json!({
            "1%2F1%2F1": { "ip4_address": "10.0.0.1/24" },
            "vlan10": {
                "ip4_address": "192.0.2.1/25",
                "ip6_address_link_local": { "fe80::1/64": "/rest/v1/..." }
            },
            "1%2F1%2F2": { "ip4_address": "" },
            "1%2F1%2F3": { "ip4_address": null }
        }))
        .unwrap()
    }

    #[test]
    fn ipv4_is_split_at_the_prefix() {
        let out = interfaces_ip(&interfaces(), &Keyed::new()).unwrap();
        let v4 = &out["1/1/1"].ipv4;
        assert_eq!(v4["10.0.0.1"], PrefixLength { prefix_length: 24 });
        assert!(out["1/1/1"].ipv6.is_empty());
        assert_eq!(
            serde_json::to_value(&out["1/1/1"]).unwrap(),
            json!({ "ipv4": { "10.0.0.1": { "prefix_length": 24 } } })
        );
    }

    #[test]
    fn interfaces_without_addresses_are_omitted() {
        let out = interfaces_ip(&interfaces(), &Keyed::new()).unwrap();
        assert_eq!(out.keys().collect::<Vec<_>>(), ["1/1/1", "vlan10"]);
    }

    #[test]
    fn ipv6_merges_link_local_and_configured() {
        let ip6: Keyed<Keyed<Ip6Address>> = serde_json::from_value(json!({
            "vlan10": {
                "2001:db8::1/64": { "address": "2001:db8::1/64", "origin": "configuration" },
                "fe80::1/64": { "address": "fe80::1/10", "origin": "link_local" }
            }
        }))
        .unwrap();
        let out = interfaces_ip(&interfaces(), &ip6).unwrap();
        let v6 = &out["vlan10"].ipv6;
        assert_eq!(v6.len(), 2);
        assert_eq!(v6["2001:db8::1"].prefix_length, 64);
        assert_eq!(v6["fe80::1"].prefix_length, 10);
        assert_eq!(out["vlan10"].ipv4["192.0.2.1"].prefix_length, 25);
    }

    #[test]
    fn address_without_prefix_is_rejected() {
        let interfaces: Keyed<Interface> =
            serde_json::from_value(json!({ "vlan1": { "ip4_address": "10.0.0.1" } })).unwrap();
        assert_eq!(
            interfaces_ip(&interfaces, &Keyed::new()).unwrap_err(),
            NormalizeError::InvalidAddress {
                interface: "vlan1".into(),
                address: "10.0.0.1".into()
            }
        );
    }
}
