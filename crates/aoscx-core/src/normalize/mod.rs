// ── Fact normalization ──
//
// Pure functions from aoscx-api response models to the vendor-neutral
// model. Nothing here touches the network or keeps state between calls:
// the driver fetches a snapshot, hands it over, and serializes the result.

mod environment;
mod facts;
mod interfaces;
mod ip;
mod lldp;
mod macs;
mod vlans;

pub use environment::environment;
pub use facts::facts;
pub use interfaces::{interface_counters, interfaces};
pub use ip::interfaces_ip;
pub use lldp::{lldp_neighbors, lldp_neighbors_detail};
pub use macs::mac_table;
pub use vlans::vlans;
pub(crate) use vlans::vlan_id;

use std::borrow::Cow;
use std::sync::LazyLock;

use aoscx_api::models::{Keyed, Subsystem};
use percent_encoding::percent_decode_str;
use regex::Regex;
use serde_json::Value;

use crate::error::NormalizeError;

/// Subsystems consulted for chassis-wide data, highest priority first.
pub const CANDIDATE_SUBSYSTEMS: [&str; 2] = ["management_module,1/1", "chassis,1"];

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("non-word pattern is valid"));

/// Walk [`CANDIDATE_SUBSYSTEMS`] in order and return the first subsystem
/// for which `pick` yields data, together with its key.
pub(crate) fn resolve_subsystem<'a, T>(
    subsystems: &'a Keyed<Subsystem>,
    category: &str,
    pick: impl Fn(&'a Subsystem) -> Option<T>,
) -> Result<(&'static str, T), NormalizeError> {
    CANDIDATE_SUBSYSTEMS
        .iter()
        .find_map(|key| subsystems.get(*key).and_then(&pick).map(|found| (*key, found)))
        .ok_or_else(|| NormalizeError::MissingSubsystemData {
            category: category.to_owned(),
            tried: CANDIDATE_SUBSYSTEMS.join(", "),
        })
}

/// Percent-decode a resource key (`1%2F1%2F1` -> `1/1/1`).
pub(crate) fn decode_name(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Lookup-friendly form of an interface name (`1/1/1` -> `1-1-1`).
pub(crate) fn slug(name: &str) -> String {
    let collapsed: Cow<'_, str> = NON_WORD.replace_all(name, "-");
    collapsed.trim_matches('-').to_lowercase()
}

/// Human-facing form of an interface name (`1/1/1` -> `Int 1/1/1`).
pub(crate) fn display_name(name: &str) -> String {
    format!("Int {name}")
}

/// Split `address/prefix` at the last `/`.
pub(crate) fn split_cidr(interface: &str, cidr: &str) -> Result<(String, u8), NormalizeError> {
    cidr.rsplit_once('/')
        .and_then(|(address, prefix)| {
            let prefix = prefix.parse::<u8>().ok()?;
            (!address.is_empty()).then(|| (address.to_owned(), prefix))
        })
        .ok_or_else(|| NormalizeError::InvalidAddress {
            interface: interface.to_owned(),
            address: cidr.to_owned(),
        })
}

/// Loose truthiness for readings some platforms report as bare scalars.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
