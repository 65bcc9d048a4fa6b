//! Domain records built from tdtool output
//!
//! Devices and sensors are point-in-time snapshots: they are created fresh on
//! every listing call and never mutated afterwards. [`State`] is derived on
//! demand from a freshly fetched [`Device`].

mod device;
mod sensor;
mod state;

pub use device::{Device, DeviceType, LastSentCommand};
pub use sensor::{Sensor, SensorProtocol};
pub use state::{State, SwitchState};

use std::collections::HashMap;

/// Raw `key=value` pairs of one listing line
pub type Properties = HashMap<String, String>;

/// Parse the `id` property shared by devices and sensors
fn parse_id(properties: &Properties) -> Option<u32> {
    let raw = properties.get("id")?;
    match raw.trim().parse() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::debug!(id = %raw, "Ignoring non-numeric id");
            None
        }
    }
}
