//! Devices registered with tdtool

use super::{parse_id, Properties};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of controllable device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Switch,
    Dimmer,
    Unknown,
}

impl DeviceType {
    /// Case-insensitive lookup; unrecognized names map to `Unknown`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "switch" => DeviceType::Switch,
            "dimmer" => DeviceType::Dimmer,
            _ => DeviceType::Unknown,
        }
    }

    /// Infer the type from a tdtool model such as `selflearning-dimmer:nexa`
    fn from_model(model: &str) -> Self {
        let model = model.to_ascii_lowercase();
        if model.contains("dimmer") {
            DeviceType::Dimmer
        } else if model.contains("switch") {
            DeviceType::Switch
        } else {
            DeviceType::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Switch => "switch",
            DeviceType::Dimmer => "dimmer",
            DeviceType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Last control command tdtool recorded as sent to a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LastSentCommand {
    On,
    Off,
    Dimmed,
    None,
}

impl LastSentCommand {
    /// Case-insensitive lookup; anything other than ON/OFF/DIMMED maps to `None`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "ON" => LastSentCommand::On,
            "OFF" => LastSentCommand::Off,
            "DIMMED" => LastSentCommand::Dimmed,
            _ => LastSentCommand::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LastSentCommand::On => "on",
            LastSentCommand::Off => "off",
            LastSentCommand::Dimmed => "dimmed",
            LastSentCommand::None => "none",
        }
    }
}

impl fmt::Display for LastSentCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A switch or dimmer as listed by `tdtool --list-devices`
///
/// The complete set of `key=value` pairs from the listing line is kept in
/// `properties`; the typed fields are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    id: Option<u32>,
    name: String,
    device_type: DeviceType,
    last_sent_command: LastSentCommand,
    properties: Properties,
}

impl Device {
    pub fn from_properties(properties: Properties) -> Self {
        let device_type = properties
            .get("type")
            .map(|t| DeviceType::from_name(t))
            .filter(|t| *t != DeviceType::Unknown)
            .or_else(|| properties.get("model").map(|m| DeviceType::from_model(m)))
            .unwrap_or(DeviceType::Unknown);

        let last_sent_command = properties
            .get("lastsentcommand")
            .map(|c| LastSentCommand::from_name(c))
            .unwrap_or(LastSentCommand::None);

        Self {
            id: parse_id(&properties),
            name: properties.get("name").cloned().unwrap_or_default(),
            device_type,
            last_sent_command,
            properties,
        }
    }

    /// Identifier assigned by tdtool, `None` when the line carried no numeric id
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    pub fn last_sent_command(&self) -> LastSentCommand {
        self.last_sent_command
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// The `dimlevel` property, if reported
    pub fn dim_level(&self) -> Option<&str> {
        self.property("dimlevel")
    }
}
