//! Inferred operational state of a device

use super::DeviceType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// On/off position of a switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchState::On => "on",
            SwitchState::Off => "off",
        }
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a device at query time
///
/// Serializes as `{"type": "switch", "value": "on"}`,
/// `{"type": "dimmer", "value": "200"}` or `{"type": "unknown", "value": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum State {
    Switch(SwitchState),
    Dimmer(String),
    Unknown(String),
}

impl State {
    pub fn device_type(&self) -> DeviceType {
        match self {
            State::Switch(_) => DeviceType::Switch,
            State::Dimmer(_) => DeviceType::Dimmer,
            State::Unknown(_) => DeviceType::Unknown,
        }
    }

    /// `"on"`/`"off"` for switches, the dim level for dimmers, a message otherwise
    pub fn value(&self) -> &str {
        match self {
            State::Switch(state) => state.as_str(),
            State::Dimmer(level) => level,
            State::Unknown(message) => message,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.device_type(), self.value())
    }
}
