//! Parsers for tdtool output
//!
//! Pure functions with no I/O. Listing output (`--list-devices`,
//! `--list-sensors`) is one entity per line made of tab-separated `key=value`
//! segments and is parsed permissively. Command confirmations are free text
//! matched against fixed sentinels.

use crate::data::{Device, Properties, Sensor};
use crate::error::{Result, TelldusError};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

// The device id group is a single ASCII digit, matching what tdtool is known to print.
static DIM_RESULT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Dimming device: ([0-9]) (.*) to ([0-9]{1,3}) - (.*)")
        .expect("dim result pattern is a valid regex")
});

/// Parse `tdtool --list-devices` output, one [`Device`] per non-blank line
pub fn parse_devices(text: &str) -> Vec<Device> {
    lines(text).map(|line| Device::from_properties(parse_properties(line))).collect()
}

/// Parse `tdtool --list-sensors` output, one [`Sensor`] per non-blank line
pub fn parse_sensors(text: &str) -> Vec<Sensor> {
    lines(text).map(|line| Sensor::from_properties(parse_properties(line))).collect()
}

/// Interpret an on/off confirmation such as `Turning on device 3, Lamp - Success`
///
/// Everything after the last `"- "` is compared case-insensitively with
/// `success`. Without a `"- "` the whole trimmed text is compared.
pub fn parse_switch_result(text: &str) -> bool {
    let trimmed = text.trim();
    let status = match trimmed.rfind("- ") {
        Some(idx) => &trimmed[idx + 2..],
        None => trimmed,
    };
    status.trim().eq_ignore_ascii_case("success")
}

/// Extract the dim level from `Dimming device: <id> <name> to <level> - <status>`
pub fn parse_dim_result(text: &str) -> Result<u8> {
    let captures = DIM_RESULT_PATTERN
        .captures(text.trim())
        .ok_or_else(|| TelldusError::parsing("could not extract dim result"))?;

    let level = &captures[3];
    level.parse().map_err(|_| {
        TelldusError::parsing(format!("dim level {level} is outside the range 0-255"))
    })
}

/// Split into lines, dropping a trailing `\r` and skipping blank lines
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
}

/// Decompose one line into its `key=value` pairs; the last duplicate key wins
fn parse_properties(line: &str) -> Properties {
    let mut properties = Properties::new();
    for segment in line.split('\t') {
        match segment.split_once('=') {
            Some((key, value)) => {
                properties.insert(key.to_string(), value.to_string());
            }
            None if segment.is_empty() => {}
            None => trace!(segment, "Skipping segment without '='"),
        }
    }
    properties
}
