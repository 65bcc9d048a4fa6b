//! Device and sensor access through the tdtool executable
//!
//! Each operation issues exactly one tdtool invocation, blocks until it exits
//! and hands the captured stdout to [`crate::parser`]. The repository holds no
//! mutable state, so independent calls never share anything but the
//! executable path.

use crate::config::TelldusConfig;
use crate::data::{Device, LastSentCommand, Sensor, State, SwitchState};
use crate::error::{Result, TelldusError};
use crate::executor::{CommandExecutor, SystemCommandExecutor};
use crate::parser::{parse_devices, parse_dim_result, parse_sensors, parse_switch_result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Operations offered by a Telldus backend
pub trait TelldusRepository {
    /// All registered devices, in tdtool's listing order
    fn get_devices(&self) -> Result<Vec<Device>>;

    /// All reporting sensors, in tdtool's listing order
    fn get_sensors(&self) -> Result<Vec<Sensor>>;

    /// State inferred from the last command sent to device `id`
    fn get_device_state(&self, id: u32) -> Result<State>;

    /// Switch device `id` on and report the resulting switch state
    fn turn_device_on(&self, id: u32) -> Result<State>;

    /// Switch device `id` off and report the resulting switch state
    fn turn_device_off(&self, id: u32) -> Result<State>;

    /// Dim device `id` to `level` and report the level tdtool confirmed
    fn dim_device(&self, id: u32, level: u8) -> Result<State>;
}

/// [`TelldusRepository`] driving the tdtool command-line utility
#[derive(Debug, Clone)]
pub struct CliRepository<E = SystemCommandExecutor> {
    tdtool: PathBuf,
    executor: E,
}

impl CliRepository<SystemCommandExecutor> {
    /// Repository running `tdtool` as a local process
    pub fn new<P: Into<PathBuf>>(tdtool: P) -> Self {
        Self::with_executor(tdtool, SystemCommandExecutor)
    }

    pub fn from_config(config: &TelldusConfig) -> Self {
        Self::new(config.tdtool.clone())
    }
}

impl<E: CommandExecutor> CliRepository<E> {
    pub fn with_executor<P: Into<PathBuf>>(tdtool: P, executor: E) -> Self {
        Self {
            tdtool: tdtool.into(),
            executor,
        }
    }

    pub fn tdtool(&self) -> &Path {
        &self.tdtool
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run tdtool and return its stdout, failing on a non-zero exit
    fn execute(&self, args: &[String]) -> Result<String> {
        debug!(tdtool = %self.tdtool.display(), ?args, "Invoking tdtool");

        let output = self.executor.execute(&self.tdtool, args)?;
        if !output.is_success() {
            let command = format!("{} {}", self.tdtool.display(), args.join(" "));
            warn!(
                command = %command,
                status = %output.status_text(),
                "tdtool exited unsuccessfully"
            );
            return Err(TelldusError::command_failed(
                command,
                output.status_text(),
                output.stderr.trim(),
            ));
        }

        Ok(output.stdout)
    }
}

impl<E: CommandExecutor> TelldusRepository for CliRepository<E> {
    fn get_devices(&self) -> Result<Vec<Device>> {
        let stdout = self.execute(&["--list-devices".to_string()])?;
        Ok(parse_devices(&stdout))
    }

    fn get_sensors(&self) -> Result<Vec<Sensor>> {
        let stdout = self.execute(&["--list-sensors".to_string()])?;
        Ok(parse_sensors(&stdout))
    }

    // Lists every device to answer for one; tdtool has no single-device query.
    fn get_device_state(&self, id: u32) -> Result<State> {
        let device = self
            .get_devices()?
            .into_iter()
            .find(|d| d.id() == Some(id))
            .ok_or_else(|| {
                debug!(id, "No device with this id");
                TelldusError::state_unknown("state unknown")
            })?;

        let state = match device.last_sent_command() {
            LastSentCommand::On => State::Switch(SwitchState::On),
            LastSentCommand::Off => State::Switch(SwitchState::Off),
            LastSentCommand::Dimmed => match device.dim_level() {
                Some(level) => State::Dimmer(level.to_string()),
                None => State::Unknown("Dim level unknown".to_string()),
            },
            LastSentCommand::None => State::Unknown("Unknown state".to_string()),
        };
        Ok(state)
    }

    fn turn_device_on(&self, id: u32) -> Result<State> {
        let stdout = self.execute(&["--on".to_string(), id.to_string()])?;
        let state = if parse_switch_result(&stdout) {
            SwitchState::On
        } else {
            SwitchState::Off
        };
        Ok(State::Switch(state))
    }

    fn turn_device_off(&self, id: u32) -> Result<State> {
        let stdout = self.execute(&["--off".to_string(), id.to_string()])?;
        let state = if parse_switch_result(&stdout) {
            SwitchState::Off
        } else {
            SwitchState::On
        };
        Ok(State::Switch(state))
    }

    fn dim_device(&self, id: u32, level: u8) -> Result<State> {
        let stdout = self.execute(&[
            "--dimlevel".to_string(),
            level.to_string(),
            "--dim".to_string(),
            id.to_string(),
        ])?;
        let confirmed = parse_dim_result(&stdout)?;
        Ok(State::Dimmer(confirmed.to_string()))
    }
}
