//! Command dispatch: bridges CLI args -> driver operations -> output formatting.

pub mod device_config;
pub mod environment;
pub mod facts;
pub mod interfaces;
pub mod lldp;
pub mod profiles;
pub mod vlans;

use aoscx_core::Driver;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a switch-bound command to the appropriate handler.
///
/// The driver is already open; the caller closes it afterwards.
pub async fn dispatch(cmd: Command, driver: &Driver, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Check => facts::check(driver, global),
        Command::Facts => facts::handle(driver, global).await,
        Command::Interfaces => interfaces::handle(driver, global).await,
        Command::Counters => interfaces::counters(driver, global).await,
        Command::Ip => interfaces::addresses(driver, global).await,
        Command::Lldp(args) => lldp::handle(driver, args, global).await,
        Command::Environment => environment::handle(driver, global).await,
        Command::Vlans => vlans::handle(driver, global).await,
        Command::Mac => vlans::mac_table(driver, global).await,
        Command::Config(args) => device_config::handle(driver, &args, global).await,
        // Profiles and Completions are handled before a session is opened
        Command::Profiles(_) | Command::Completions(_) => Err(CliError::Internal(
            "command does not use a switch session".into(),
        )),
    }
}

/// `yes` / `no` for boolean table cells.
pub(crate) fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
