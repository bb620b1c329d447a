//! `facts` and `check` handlers.

use aoscx_core::{Driver, Facts, Liveness};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn handle(driver: &Driver, global: &GlobalOpts) -> Result<(), CliError> {
    let facts = driver.get_facts().await?;
    let out = output::render_single(&global.output, &facts, detail, |f| f.hostname.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Report session liveness. Reaching this point means login succeeded.
pub fn check(driver: &Driver, global: &GlobalOpts) -> Result<(), CliError> {
    let liveness = driver.is_alive();
    let color = output::should_color(&global.color);
    let url = driver.config().base_url();
    let out = output::render_single(
        &global.output,
        &liveness,
        |l: &Liveness| {
            let state = if l.is_alive { "alive" } else { "not alive" };
            format!("{url}: {}", output::paint_health(state, l.is_alive, color))
        },
        |l| l.is_alive.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn detail(f: &Facts) -> String {
    output::render_fields(&[
        ("Hostname", f.hostname.clone()),
        ("FQDN", f.fqdn.clone()),
        ("Vendor", f.vendor.clone()),
        ("Model", f.model.clone()),
        ("Serial", f.serial_number.clone()),
        ("OS version", f.os_version.clone()),
        ("Uptime", format_uptime(f.uptime)),
        ("Interfaces", f.interface_list.len().to_string()),
    ])
}

/// `3d 04h 05m`, or `12m` below an hour.
fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = secs % 86_400 / 3_600;
    let minutes = secs % 3_600 / 60;
    match (days, hours) {
        (0, 0) => format!("{minutes}m"),
        (0, _) => format!("{hours}h {minutes:02}m"),
        _ => format!("{days}d {hours:02}h {minutes:02}m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(0), "0m");
        assert_eq!(format_uptime(59 * 60 + 59), "59m");
        assert_eq!(format_uptime(3_600 + 5 * 60), "1h 05m");
        assert_eq!(format_uptime(3 * 86_400 + 4 * 3_600 + 5 * 60), "3d 04h 05m");
    }
}
