//! Command parsing and the interpreter's error messages.
//!
//! A command line is split on single spaces (trailing empty fields dropped).
//! Field count and numeric fields are checked here; device existence, device
//! type and state are checked when the command runs.

use thiserror::Error;

use super::device::DeviceKind;
use crate::constants::devices::{
    MAX_CAMERA_ANGLE, MAX_HEATER_TEMP, MIN_CAMERA_ANGLE, MIN_HEATER_TEMP,
};

/// `<Device> <id>` as typed by the user. Resolved against the device table
/// at execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    DisplayAllStatus,
    TurnOn(Target),
    TurnOff(Target),
    StartCharging(Target),
    StopCharging(Target),
    SetTemperature(Target, i32),
    /// Level name is validated after the device checks.
    SetBrightness(Target, String),
    /// Color name is validated after the device checks.
    SetColor(Target, String),
    SetAngle(Target, i32),
    StartRecording(Target),
    StopRecording(Target),
    End,
}

/// Every way a command can be rejected. The messages are user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HomeError {
    #[error("Invalid command")]
    InvalidCommand,
    #[error("The smart device was not found")]
    DeviceNotFound,
    #[error("{kind} {id} is not a {noun}")]
    WrongDeviceType {
        kind: DeviceKind,
        id: usize,
        noun: &'static str,
    },
    #[error("{kind} {id} is not chargeable")]
    NotChargeable { kind: DeviceKind, id: usize },
    #[error("You can't change the status of the {kind} {id} while it is off")]
    SwitchedOff { kind: DeviceKind, id: usize },
    #[error("{kind} {id} is already on")]
    AlreadyOn { kind: DeviceKind, id: usize },
    #[error("{kind} {id} is already off")]
    AlreadyOff { kind: DeviceKind, id: usize },
    #[error("{kind} {id} is already charging")]
    AlreadyCharging { kind: DeviceKind, id: usize },
    #[error("{kind} {id} is not charging")]
    NotCharging { kind: DeviceKind, id: usize },
    #[error("Camera {id} is already recording")]
    AlreadyRecording { id: usize },
    #[error("Camera {id} is not recording")]
    NotRecording { id: usize },
    #[error("Heater {id} temperature should be in the range [{min}, {max}]", min = MIN_HEATER_TEMP, max = MAX_HEATER_TEMP)]
    TemperatureOutOfRange { id: usize },
    #[error("Camera {id} angle should be in the range [{min}, {max}]", min = MIN_CAMERA_ANGLE, max = MAX_CAMERA_ANGLE)]
    AngleOutOfRange { id: usize },
    #[error("The brightness can only be one of \"LOW\", \"MEDIUM\", or \"HIGH\"")]
    InvalidBrightness,
    #[error("The light color can only be \"YELLOW\" or \"WHITE\"")]
    InvalidColor,
}

/// Split on single spaces, dropping trailing empty fields.
fn split_terms(line: &str) -> Vec<&str> {
    let mut terms: Vec<&str> = line.split(' ').collect();
    while terms.last().is_some_and(|t| t.is_empty()) {
        terms.pop();
    }
    terms
}

fn number(term: &str) -> Result<i32, HomeError> {
    term.parse().map_err(|_| HomeError::InvalidCommand)
}

/// Check the field count and build the target from fields 1 and 2.
fn target(terms: &[&str], fields: usize) -> Result<Target, HomeError> {
    if terms.len() != fields {
        return Err(HomeError::InvalidCommand);
    }
    Ok(Target {
        name: terms[1].to_string(),
        id: number(terms[2])?,
    })
}

impl Command {
    /// Parse one input line. `end` (as the first field) stops the session.
    pub fn parse(line: &str) -> Result<Self, HomeError> {
        let terms = split_terms(line);
        let Some(&name) = terms.first() else {
            return Err(HomeError::InvalidCommand);
        };

        let cmd = match name {
            "end" => Self::End,
            "DisplayAllStatus" if terms.len() == 1 => Self::DisplayAllStatus,
            "TurnOn" => Self::TurnOn(target(&terms, 3)?),
            "TurnOff" => Self::TurnOff(target(&terms, 3)?),
            "StartCharging" => Self::StartCharging(target(&terms, 3)?),
            "StopCharging" => Self::StopCharging(target(&terms, 3)?),
            "StartRecording" => Self::StartRecording(target(&terms, 3)?),
            "StopRecording" => Self::StopRecording(target(&terms, 3)?),
            "SetTemperature" => {
                let t = target(&terms, 4)?;
                Self::SetTemperature(t, number(terms[3])?)
            }
            "SetAngle" => {
                let t = target(&terms, 4)?;
                Self::SetAngle(t, number(terms[3])?)
            }
            "SetBrightness" => Self::SetBrightness(target(&terms, 4)?, terms[3].to_string()),
            "SetColor" => Self::SetColor(target(&terms, 4)?, terms[3].to_string()),
            _ => return Err(HomeError::InvalidCommand),
        };
        Ok(cmd)
    }
}
