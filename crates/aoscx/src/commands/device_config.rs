//! `config` handler: running / startup configuration text.

use aoscx_core::{DeviceConfig, Driver};

use crate::cli::{ConfigArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle(driver: &Driver, args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let config = driver.get_config(args.retrieve).await?;
    let out = output::render_single(&global.output, &config, sections, |c| {
        non_empty(c)
            .map(|(_, text)| text.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn non_empty(config: &DeviceConfig) -> impl Iterator<Item = (&'static str, &str)> {
    [
        ("running", config.running.as_str()),
        ("startup", config.startup.as_str()),
        ("candidate", config.candidate.as_str()),
    ]
    .into_iter()
    .filter(|(_, text)| !text.is_empty())
}

/// Each fetched configuration under a `── <kind> ──` banner.
fn sections(config: &DeviceConfig) -> String {
    non_empty(config)
        .map(|(kind, text)| format!("── {kind} ──\n{}", text.trim_end()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fetched_sections_are_shown() {
        let config = DeviceConfig {
            running: "hostname sw1\n".into(),
            ..DeviceConfig::default()
        };
        assert_eq!(sections(&config), "── running ──\nhostname sw1");
        assert_eq!(sections(&DeviceConfig::default()), "");
    }
}
