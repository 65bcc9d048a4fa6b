//! telldus-cli - command-line front end for the tdtool adapter

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use telldus_cli::{
    logging::init_logging, CliRepository, Device, Sensor, State, TelldusConfig, TelldusError,
    TelldusRepository,
};
use tracing::{debug, error, Level};

/// Control Telldus devices through tdtool
#[derive(Parser, Debug)]
#[command(name = "telldus-cli")]
#[command(about = "Typed front end for the Telldus tdtool utility")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the tdtool executable
    #[arg(long, global = true, env = "TELLDUS_TDTOOL")]
    tdtool: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered devices
    Devices,
    /// List reporting sensors
    Sensors,
    /// Show the state of a device
    State { id: u32 },
    /// Turn a device on
    On { id: u32 },
    /// Turn a device off
    Off { id: u32 },
    /// Dim a device to a level between 0 and 255
    Dim { id: u32, level: u8 },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).inspect_err(report_error)
}

fn report_error(err: &anyhow::Error) {
    if let Some(telldus_error) = err.downcast_ref::<TelldusError>() {
        error!(error_type = telldus_error.error_type(), "{err:#}");
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = TelldusConfig::load(cli.config.as_deref())?;
    if let Some(tdtool) = cli.tdtool {
        config = config.with_tdtool(tdtool)?;
    }

    let mut log_config = config.log_config();
    if cli.debug {
        log_config.level = Level::DEBUG;
    }
    init_logging(log_config)?;
    debug!(tdtool = %config.tdtool.display(), "Using tdtool");

    let repository = CliRepository::from_config(&config);
    let json = cli.json;

    match cli.command {
        Command::Devices => {
            let devices = repository.get_devices().context("listing devices")?;
            if json {
                print_json(&devices)?;
            } else {
                devices.iter().for_each(|d| println!("{}", describe_device(d)));
            }
        }
        Command::Sensors => {
            let sensors = repository.get_sensors().context("listing sensors")?;
            if json {
                print_json(&sensors)?;
            } else {
                sensors.iter().for_each(|s| println!("{}", describe_sensor(s)));
            }
        }
        Command::State { id } => {
            let state = repository
                .get_device_state(id)
                .with_context(|| format!("reading state of device {id}"))?;
            print_state(&state, json)?;
        }
        Command::On { id } => {
            let state = repository
                .turn_device_on(id)
                .with_context(|| format!("turning on device {id}"))?;
            print_state(&state, json)?;
        }
        Command::Off { id } => {
            let state = repository
                .turn_device_off(id)
                .with_context(|| format!("turning off device {id}"))?;
            print_state(&state, json)?;
        }
        Command::Dim { id, level } => {
            let state = repository
                .dim_device(id, level)
                .with_context(|| format!("dimming device {id}"))?;
            print_state(&state, json)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_state(state: &State, json: bool) -> anyhow::Result<()> {
    if json {
        print_json(state)
    } else {
        println!("{state}");
        Ok(())
    }
}

fn describe_device(device: &Device) -> String {
    let id = device.id().map(|id| id.to_string()).unwrap_or_else(|| "-".into());
    format!(
        "{id}\t{}\t{}\t{}",
        device.name(),
        device.device_type(),
        device.last_sent_command()
    )
}

fn describe_sensor(sensor: &Sensor) -> String {
    let id = sensor.id().map(|id| id.to_string()).unwrap_or_else(|| "-".into());
    let mut values: Vec<String> = sensor
        .properties()
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "type" | "id" | "protocol" | "model" | "name"))
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    values.sort();
    format!("{id}\t{}\t{}\t{}", sensor.name(), sensor.protocol(), values.join(" "))
}
