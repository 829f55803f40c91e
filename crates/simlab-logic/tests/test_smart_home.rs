//! Integration tests for the smart-home interpreter.
//!
//! Each test feeds a command script through `SmartHome::run_session` and
//! checks the printed lines.

use simlab_logic::smart_home::{DeviceState, SmartHome, Status};

fn run(script: &str) -> Vec<String> {
    SmartHome::new().run_session(script.lines())
}

#[test]
fn display_all_status_initial() {
    let out = run("DisplayAllStatus\nend");
    assert_eq!(out.len(), 10);
    assert_eq!(
        out[0],
        "Light 0 is ON, the color is YELLOW, the charging status is false, and the brightness level is LOW."
    );
    assert_eq!(
        out[5],
        "Camera 5 is ON, the angle is 45, the charging status is false, and the recording status is false."
    );
    assert_eq!(out[9], "Heater 9 is ON and the temperature is 20.");
}

#[test]
fn turn_on_off_cycle() {
    let out = run("TurnOn Light 1\nTurnOff Light 1\nTurnOff Light 1\nTurnOn Light 1\nend");
    assert_eq!(
        out,
        vec![
            "Light 1 is already on",
            "Light 1 is off",
            "Light 1 is already off",
            "Light 1 is on",
        ]
    );
}

#[test]
fn device_lookup_by_type_and_range() {
    let out = run("TurnOff Camera 1\nTurnOff Heater 10\nTurnOff Fridge 0\nTurnOff Light -1\nTurnOff Camera 4\nend");
    assert_eq!(
        out,
        vec![
            "The smart device was not found",
            "The smart device was not found",
            "The smart device was not found",
            "The smart device was not found",
            "Camera 4 is off",
        ]
    );
}

#[test]
fn charging() {
    let out = run(
        "StartCharging Light 2\nStartCharging Light 2\nStopCharging Light 2\nStopCharging Light 2\n\
         StartCharging Heater 6\nStopCharging Heater 7\nend",
    );
    assert_eq!(
        out,
        vec![
            "Light 2 is charging",
            "Light 2 is already charging",
            "Light 2 stopped charging",
            "Light 2 is not charging",
            "Heater 6 is not chargeable",
            "Heater 7 is not chargeable",
        ]
    );
}

#[test]
fn heater_temperature() {
    let out = run(
        "SetTemperature Heater 6 25\nSetTemperature Heater 6 31\nTurnOff Heater 6\n\
         SetTemperature Heater 6 20\nSetTemperature Heater 6 hot\nend",
    );
    assert_eq!(
        out,
        vec![
            "Heater 6 temperature is set to 25",
            "Heater 6 temperature should be in the range [15, 30]",
            "Heater 6 is off",
            "You can't change the status of the Heater 6 while it is off",
            "Invalid command",
        ]
    );
}

#[test]
fn light_settings_allowed_while_charging() {
    let out = run(
        "TurnOff Light 0\nSetColor Light 0 WHITE\nStartCharging Light 0\nSetColor Light 0 WHITE\n\
         SetBrightness Light 0 HIGH\nSetBrightness Light 0 BRIGHT\nSetColor Light 0 RED\nend",
    );
    assert_eq!(
        out,
        vec![
            "Light 0 is off",
            "You can't change the status of the Light 0 while it is off",
            "Light 0 is charging",
            "Light 0 color is set to WHITE",
            "Light 0 brightness level is set to HIGH",
            "The brightness can only be one of \"LOW\", \"MEDIUM\", or \"HIGH\"",
            "The light color can only be \"YELLOW\" or \"WHITE\"",
        ]
    );
}

#[test]
fn invalid_value_reported_before_switched_off() {
    let out = run("TurnOff Light 3\nSetBrightness Light 3 DIM\nend");
    assert_eq!(
        out[1],
        "The brightness can only be one of \"LOW\", \"MEDIUM\", or \"HIGH\""
    );
}

#[test]
fn camera_angle_and_recording() {
    let out = run(
        "SetAngle Camera 4 -60\nSetAngle Camera 4 90\nStartRecording Camera 4\nStartRecording Camera 4\n\
         StopRecording Camera 4\nStopRecording Camera 4\nTurnOff Camera 5\nStartRecording Camera 5\nend",
    );
    assert_eq!(
        out,
        vec![
            "Camera 4 angle is set to -60",
            "Camera 4 angle should be in the range [-60, 60]",
            "Camera 4 started recording",
            "Camera 4 is already recording",
            "Camera 4 stopped recording",
            "Camera 4 is not recording",
            "Camera 5 is off",
            "You can't change the status of the Camera 5 while it is off",
        ]
    );
}

#[test]
fn recording_status_hidden_while_off() {
    let out = run("StartRecording Camera 4\nTurnOff Camera 4\nDisplayAllStatus\nend");
    assert_eq!(
        out[6],
        "Camera 4 is OFF, the angle is 45, the charging status is false, and the recording status is false."
    );
}

#[test]
fn settings_sent_to_wrong_device_type() {
    let out = run(
        "SetTemperature Light 1 20\nSetAngle Heater 7 10\nSetColor Camera 4 WHITE\n\
         SetBrightness Camera 5 HIGH\nStartRecording Heater 8\nStopRecording Light 0\nend",
    );
    assert_eq!(
        out,
        vec![
            "Light 1 is not a heater",
            "Heater 7 is not a camera",
            "Camera 4 is not a light",
            "Camera 5 is not a light",
            "Heater 8 is not a camera",
            "Light 0 is not a camera",
        ]
    );
}

#[test]
fn invalid_commands() {
    let out = run("Jump\nDisplayAllStatus please\nTurnOn Light\nSetAngle Camera 4\n\nend");
    assert_eq!(out, vec!["Invalid command"; 5]);
}

#[test]
fn end_stops_the_session() {
    let mut home = SmartHome::new();
    let out = home.run_session("TurnOff Heater 8\nend\nTurnOn Heater 8".lines());
    assert_eq!(out, vec!["Heater 8 is off"]);
    assert_eq!(home.devices()[8].status, Status::Off);
}

#[test]
fn session_without_end_runs_to_eof() {
    let mut home = SmartHome::new();
    let out = home.run_session(["SetTemperature Heater 9 16"]);
    assert_eq!(out, vec!["Heater 9 temperature is set to 16"]);
    match &home.devices()[9].state {
        DeviceState::Heater(h) => assert_eq!(h.temperature, 16),
        other => panic!("expected heater, got {other:?}"),
    }
}
