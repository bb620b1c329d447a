// System and subsystem endpoints
//
// Device-level facts (`system`) and hardware subsystems: product info,
// fans, power supplies, resource utilization, temperature sensors.

use tracing::{debug, warn};

use crate::client::Client;
use crate::error::Error;
use crate::models::{Keyed, Shaped, Subsystem, System, TempSensor, TemperatureResponse};

const SUBSYSTEM_ATTRIBUTES: &str = "product_info,fans,power_supplies,resource_utilization";

impl Client {
    /// Get device-level system facts.
    ///
    /// `GET system?depth=2`
    pub async fn get_system(&self) -> Result<System, Error> {
        let url = self.api_url("system")?;
        debug!("fetching system");
        self.get_json(url, &[("depth", "2")]).await
    }

    /// Get hardware subsystems keyed by `<type>,<name>`.
    ///
    /// `GET system/subsystems?attributes=...&depth=2`
    pub async fn get_subsystems(&self) -> Result<Keyed<Subsystem>, Error> {
        let url = self.api_url("system/subsystems")?;
        debug!("fetching subsystems");
        self.get_json(
            url,
            &[("attributes", SUBSYSTEM_ATTRIBUTES), ("depth", "2")],
        )
        .await
    }

    /// Get temperature sensors of every subsystem.
    ///
    /// `GET system/subsystems?attributes=temp_sensors&depth=2`
    ///
    /// Virtual switches have no sensors and some firmware rejects the
    /// attribute filter; a non-2xx answer is logged and yields no sensors.
    pub async fn get_temperature_sensors(&self) -> Result<Vec<Shaped<TempSensor>>, Error> {
        let url = self.api_url("system/subsystems")?;
        debug!("fetching temperature sensors");
        let result: Result<TemperatureResponse, Error> = self
            .get_json(url, &[("attributes", "temp_sensors"), ("depth", "2")])
            .await;

        match result {
            Ok(response) => Ok(response.into_sensors()),
            Err(Error::Http { status, body }) => {
                warn!(
                    status,
                    body = %body,
                    "getting temperature sensors failed"
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
