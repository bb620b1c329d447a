//! `environment` handler.

use tabled::Tabled;

use aoscx_core::{Driver, Environment};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct SensorRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Reading")]
    reading: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn sensor_rows(env: &Environment, color: bool) -> Vec<SensorRow> {
    let ok = |healthy: bool| output::paint_health(if healthy { "ok" } else { "fault" }, healthy, color);

    let fans = env.fans.iter().map(|(name, fan)| SensorRow {
        kind: "fan",
        name: name.clone(),
        reading: String::new(),
        status: ok(fan.status),
    });
    let temps = env.temperature.iter().map(|(name, t)| {
        let status = match (t.is_critical, t.is_alert) {
            (true, _) => output::paint_health("critical", false, color),
            (false, true) => output::paint_health("alert", false, color),
            (false, false) => output::paint_health("ok", true, color),
        };
        SensorRow {
            kind: "temperature",
            name: name.clone(),
            reading: format!("{:.1} °C", t.temperature),
            status,
        }
    });
    let power = env.power.iter().map(|(name, psu)| SensorRow {
        kind: "power",
        name: name.clone(),
        reading: format!("{} W (output {})", psu.capacity, psu.output),
        status: ok(psu.status),
    });
    let cpu = env.cpu.iter().map(|(name, c)| SensorRow {
        kind: "cpu",
        name: name.clone(),
        reading: format!("{}%", c.usage),
        status: String::new(),
    });
    let memory = std::iter::once(SensorRow {
        kind: "memory",
        name: String::new(),
        reading: format!(
            "{}% used (available {})",
            env.memory.used_ram, env.memory.available_ram
        ),
        status: String::new(),
    });

    fans.chain(temps).chain(power).chain(cpu).chain(memory).collect()
}

/// `kind name reading` lines, without color.
fn plain_lines(env: &Environment) -> String {
    sensor_rows(env, false)
        .into_iter()
        .map(|row| {
            [row.kind, row.name.as_str(), row.reading.as_str(), row.status.as_str()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn handle(driver: &Driver, global: &GlobalOpts) -> Result<(), CliError> {
    let env = driver.get_environment().await?;
    let color = output::should_color(&global.color);
    let out = output::render_single(
        &global.output,
        &env,
        |e| output::render_table(&sensor_rows(e, color)),
        plain_lines,
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoscx_core::{CpuUsage, FanStatus, MemoryUsage, Temperature};
    use indexmap::IndexMap;

    #[test]
    fn plain_lines_cover_every_category() {
        let env = Environment {
            fans: IndexMap::from([("1/1".to_owned(), FanStatus { status: true })]),
            temperature: IndexMap::from([(
                "cpu".to_owned(),
                Temperature {
                    temperature: 41.5,
                    is_alert: true,
                    is_critical: false,
                },
            )]),
            power: IndexMap::new(),
            cpu: IndexMap::from([("1/1".to_owned(), CpuUsage { usage: 7.0 })]),
            memory: MemoryUsage::default(),
        };
        assert_eq!(
            plain_lines(&env),
            "fan 1/1 ok\ntemperature cpu 41.5 °C alert\ncpu 1/1 7%\nmemory -1% used (available N/A)"
        );
    }
}
