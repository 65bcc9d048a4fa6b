//! Test fixtures for consistent test setup
//!
//! Listing output captured from tdtool installations, exposed as rstest
//! fixtures.

use rstest::*;
use temp_env::with_vars;

/// `tdtool --list-devices` output with a switch, a dimmer and a device without history
#[fixture]
pub fn device_listing() -> &'static str {
    "type=device\tid=1\tname=Hall Light\tmodel=selflearning-switch:nexa\tlastsentcommand=ON\n\
     type=device\tid=2\tname=Kitchen\tmodel=selflearning-dimmer:nexa\tlastsentcommand=DIMMED\t\
     dimlevel=200\n\
     type=device\tid=3\tname=Garage Door\tmodel=codeswitch:nexa\tlastsentcommand=OFF\n\
     type=device\tid=7\tname=Doorbell\tmodel=bell\tlastsentcommand=BELL\n"
}

/// `tdtool --list-sensors` output with two Mandolyn sensors and one unsupported protocol
#[fixture]
pub fn sensor_listing() -> &'static str {
    "type=sensor\tprotocol=mandolyn\tmodel=temperaturehumidity\tid=11\t\
     temperature=21.5\thumidity=40\ttime=2016-05-01 12:00:00\tage=12\n\
     type=sensor\tprotocol=mandolyn\tmodel=temperature\tid=12\t\
     temperature=-3.2\ttime=2016-05-01 12:00:05\tage=7\n\
     type=sensor\tprotocol=fineoffset\tmodel=temperature\tid=135\ttemperature=18.0\n"
}

/// Environment variables for clean testing
pub fn get_test_env_vars() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("TELLDUS_TDTOOL", Some("/opt/telldus/bin/tdtool")),
        ("TELLDUS_LOG_LEVEL", Some("debug")),
        ("TELLDUS_LOG_FILE", None),
        ("TELLDUS_LOG_STDERR", None),
        ("TELLDUS_LOG_THREAD_IDS", None),
    ]
}

/// Helper to run tests with isolated environment
pub fn with_test_env<F, R>(test_fn: F) -> R
where
    F: FnOnce() -> R,
{
    with_vars(get_test_env_vars(), test_fn)
}
