//! `interfaces`, `counters` and `ip` handlers.

use tabled::Tabled;

use aoscx_core::{Driver, InterfaceCounters, InterfaceFacts, InterfaceIps, MaybeNa};

use super::yes_no;
use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Interface")]
    name: String,
    #[tabled(rename = "Link")]
    link: String,
    #[tabled(rename = "Enabled")]
    enabled: &'static str,
    #[tabled(rename = "Speed")]
    speed: String,
    #[tabled(rename = "MTU")]
    mtu: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn interface_row(name: &str, intf: &InterfaceFacts, color: bool) -> InterfaceRow {
    InterfaceRow {
        name: name.to_owned(),
        link: output::up_down(intf.is_up, color),
        enabled: yes_no(intf.is_enabled),
        speed: format_speed(&intf.speed),
        mtu: intf.mtu.to_string(),
        mac: intf.mac_address.to_string(),
        description: intf.description.clone(),
    }
}

/// Speed in Mbit/s as `10G` / `100M`.
fn format_speed(speed: &MaybeNa<u64>) -> String {
    match speed.known() {
        Some(&mbit) if mbit >= 1000 && mbit % 1000 == 0 => format!("{}G", mbit / 1000),
        Some(&mbit) => format!("{mbit}M"),
        None => speed.to_string(),
    }
}

pub async fn handle(driver: &Driver, global: &GlobalOpts) -> Result<(), CliError> {
    let interfaces = driver.get_interfaces().await?;
    let color = output::should_color(&global.color);
    let out = output::render_map(
        &global.output,
        &interfaces,
        |name, intf| vec![interface_row(name, intf, color)],
        |name, _| name.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[derive(Tabled)]
struct CounterRow {
    #[tabled(rename = "Interface")]
    name: String,
    #[tabled(rename = "Rx octets")]
    rx_octets: u64,
    #[tabled(rename = "Tx octets")]
    tx_octets: u64,
    #[tabled(rename = "Rx ucast")]
    rx_unicast: u64,
    #[tabled(rename = "Tx ucast")]
    tx_unicast: u64,
    #[tabled(rename = "Rx errors")]
    rx_errors: u64,
    #[tabled(rename = "Tx errors")]
    tx_errors: u64,
    #[tabled(rename = "Rx discards")]
    rx_discards: u64,
    #[tabled(rename = "Tx discards")]
    tx_discards: u64,
}

impl CounterRow {
    fn new(name: &str, c: &InterfaceCounters) -> Self {
        Self {
            name: name.to_owned(),
            rx_octets: c.rx_octets,
            tx_octets: c.tx_octets,
            rx_unicast: c.rx_unicast_packets,
            tx_unicast: c.tx_unicast_packets,
            rx_errors: c.rx_errors,
            tx_errors: c.tx_errors,
            rx_discards: c.rx_discards,
            tx_discards: c.tx_discards,
        }
    }
}

pub async fn counters(driver: &Driver, global: &GlobalOpts) -> Result<(), CliError> {
    let counters = driver.get_interfaces_counters().await?;
    let out = output::render_map(
        &global.output,
        &counters,
        |name, c| vec![CounterRow::new(name, c)],
        |name, _| name.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[derive(Tabled)]
struct AddressRow {
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "Family")]
    family: &'static str,
    #[tabled(rename = "Address")]
    address: String,
}

fn address_rows(interface: &str, ips: &InterfaceIps) -> Vec<AddressRow> {
    let v4 = ips.ipv4.iter().map(|(addr, p)| ("ipv4", addr, p));
    let v6 = ips.ipv6.iter().map(|(addr, p)| ("ipv6", addr, p));
    v4.chain(v6)
        .map(|(family, addr, p)| AddressRow {
            interface: interface.to_owned(),
            family,
            address: format!("{addr}/{}", p.prefix_length),
        })
        .collect()
}

/// One `interface address/prefix` line per address.
fn address_lines(interface: &str, ips: &InterfaceIps) -> String {
    address_rows(interface, ips)
        .into_iter()
        .map(|row| format!("{} {}", row.interface, row.address))
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn addresses(driver: &Driver, global: &GlobalOpts) -> Result<(), CliError> {
    let ips = driver.get_interfaces_ip().await?;
    let out = output::render_map(
        &global.output,
        &ips,
        |name, ips| address_rows(name, ips),
        |name, ips| address_lines(name, ips),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoscx_core::PrefixLength;
    use indexmap::IndexMap;

    #[test]
    fn speed_formatting() {
        assert_eq!(format_speed(&MaybeNa::Known(10_000)), "10G");
        assert_eq!(format_speed(&MaybeNa::Known(2_500)), "2500M");
        assert_eq!(format_speed(&MaybeNa::Known(100)), "100M");
        assert_eq!(format_speed(&MaybeNa::NotAvailable), "N/A");
    }

    #[test]
    fn address_rows_cover_both_families() {
        let ips = InterfaceIps {
            ipv4: IndexMap::from([("10.0.0.1".to_owned(), PrefixLength { prefix_length: 24 })]),
            ipv6: IndexMap::from([("fe80::1".to_owned(), PrefixLength { prefix_length: 64 })]),
        };
        let rows = address_rows("vlan10", &ips);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].family, "ipv4");
        assert_eq!(rows[1].address, "fe80::1/64");
        assert_eq!(address_lines("vlan10", &ips), "vlan10 10.0.0.1/24\nvlan10 fe80::1/64");
    }
}
