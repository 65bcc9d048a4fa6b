//! Sensors reported by tdtool

use super::{parse_id, Properties};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Radio protocol of a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorProtocol {
    Mandolyn,
    Unknown,
}

impl SensorProtocol {
    /// Case-insensitive lookup; unrecognized protocols map to `Unknown`
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("mandolyn") {
            SensorProtocol::Mandolyn
        } else {
            SensorProtocol::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorProtocol::Mandolyn => "mandolyn",
            SensorProtocol::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SensorProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A read-only sensor as listed by `tdtool --list-sensors`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sensor {
    id: Option<u32>,
    protocol: SensorProtocol,
    name: String,
    properties: Properties,
}

impl Sensor {
    pub fn from_properties(properties: Properties) -> Self {
        let protocol = properties
            .get("protocol")
            .map(|p| SensorProtocol::from_name(p))
            .unwrap_or(SensorProtocol::Unknown);

        // tdtool names sensors only through their model
        let name = properties
            .get("name")
            .or_else(|| properties.get("model"))
            .cloned()
            .unwrap_or_default();

        Self {
            id: parse_id(&properties),
            protocol,
            name,
            properties,
        }
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn protocol(&self) -> SensorProtocol {
        self.protocol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Measured values and metadata, e.g. `temperature` or `humidity`
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_from_properties() {
        let properties: Properties = [
            ("type", "sensor"),
            ("protocol", "mandolyn"),
            ("model", "temperaturehumidity"),
            ("id", "11"),
            ("temperature", "21.5"),
            ("humidity", "40"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let sensor = Sensor::from_properties(properties);
        assert_eq!(sensor.id(), Some(11));
        assert_eq!(sensor.protocol(), SensorProtocol::Mandolyn);
        assert_eq!(sensor.name(), "temperaturehumidity");
        assert_eq!(sensor.property("temperature"), Some("21.5"));
        assert_eq!(sensor.property("humidity"), Some("40"));
    }

    #[test]
    fn test_unknown_protocol() {
        assert_eq!(SensorProtocol::from_name("MANDOLYN"), SensorProtocol::Mandolyn);
        assert_eq!(SensorProtocol::from_name("fineoffset"), SensorProtocol::Unknown);

        let sensor = Sensor::from_properties(Properties::new());
        assert_eq!(sensor.protocol(), SensorProtocol::Unknown);
        assert_eq!(sensor.id(), None);
    }
}
