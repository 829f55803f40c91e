//! Smart-home command interpreter.
//!
//! A fixed table of ten devices (IDs are table indices):
//!
//! | IDs | Device |
//! |-----|--------|
//! | 0–3 | Light  |
//! | 4–5 | Camera |
//! | 6–9 | Heater |
//!
//! Each input line is parsed into a [`Command`] and executed against the
//! table. Execution returns the lines to print; rejected commands print their
//! [`HomeError`] message.

pub mod command;
pub mod device;

pub use command::{Command, HomeError, Target};
pub use device::{BrightnessLevel, Device, DeviceKind, DeviceState, LightColor, Status};

use crate::constants::devices::{NUMBER_OF_CAMERAS, NUMBER_OF_HEATERS, NUMBER_OF_LIGHTS};

/// The device table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartHome {
    devices: Vec<Device>,
}

impl Default for SmartHome {
    fn default() -> Self {
        Self::new()
    }
}

impl SmartHome {
    /// All devices on, in their initial configuration.
    pub fn new() -> Self {
        let devices = std::iter::repeat_with(Device::light)
            .take(NUMBER_OF_LIGHTS)
            .chain(std::iter::repeat_with(Device::camera).take(NUMBER_OF_CAMERAS))
            .chain(std::iter::repeat_with(Device::heater).take(NUMBER_OF_HEATERS))
            .collect();
        Self { devices }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Resolve `<Device> <id>`: the name must be a device type and the ID
    /// must fall in that type's range.
    fn locate(&self, target: &Target) -> Result<(usize, DeviceKind), HomeError> {
        let kind = DeviceKind::from_name(&target.name).ok_or(HomeError::DeviceNotFound)?;
        let id = usize::try_from(target.id).map_err(|_| HomeError::DeviceNotFound)?;
        if !kind.id_range().contains(&id) {
            return Err(HomeError::DeviceNotFound);
        }
        Ok((id, kind))
    }

    /// Execute one command. `End` produces no output.
    pub fn execute(&mut self, command: &Command) -> Result<Vec<String>, HomeError> {
        let line = match command {
            Command::End => return Ok(Vec::new()),
            Command::DisplayAllStatus => {
                return Ok(self
                    .devices
                    .iter()
                    .enumerate()
                    .map(|(id, d)| d.status_line(id))
                    .collect())
            }
            Command::TurnOn(t) => {
                let (id, kind) = self.locate(t)?;
                if !self.devices[id].turn_on() {
                    return Err(HomeError::AlreadyOn { kind, id });
                }
                format!("{kind} {id} is on")
            }
            Command::TurnOff(t) => {
                let (id, kind) = self.locate(t)?;
                if !self.devices[id].turn_off() {
                    return Err(HomeError::AlreadyOff { kind, id });
                }
                format!("{kind} {id} is off")
            }
            Command::StartCharging(t) => {
                let (id, kind) = self.locate(t)?;
                let charging = self.devices[id]
                    .charging_mut()
                    .ok_or(HomeError::NotChargeable { kind, id })?;
                if std::mem::replace(charging, true) {
                    return Err(HomeError::AlreadyCharging { kind, id });
                }
                format!("{kind} {id} is charging")
            }
            Command::StopCharging(t) => {
                let (id, kind) = self.locate(t)?;
                let charging = self.devices[id]
                    .charging_mut()
                    .ok_or(HomeError::NotChargeable { kind, id })?;
                if !std::mem::replace(charging, false) {
                    return Err(HomeError::NotCharging { kind, id });
                }
                format!("{kind} {id} stopped charging")
            }
            Command::SetTemperature(t, temperature) => {
                let (id, kind) = self.locate(t)?;
                let device = &mut self.devices[id];
                let is_on = device.is_on();
                let DeviceState::Heater(heater) = &mut device.state else {
                    return Err(HomeError::WrongDeviceType { kind, id, noun: "heater" });
                };
                if !is_on {
                    return Err(HomeError::SwitchedOff { kind, id });
                }
                if !heater.set_temperature(*temperature) {
                    return Err(HomeError::TemperatureOutOfRange { id });
                }
                format!("{kind} {id} temperature is set to {temperature}")
            }
            Command::SetBrightness(t, level) => {
                let (id, kind) = self.locate(t)?;
                let device = &mut self.devices[id];
                let accepts = device.accepts_settings();
                let DeviceState::Light(light) = &mut device.state else {
                    return Err(HomeError::WrongDeviceType { kind, id, noun: "light" });
                };
                let level: BrightnessLevel =
                    level.parse().map_err(|_| HomeError::InvalidBrightness)?;
                if !accepts {
                    return Err(HomeError::SwitchedOff { kind, id });
                }
                light.brightness = level;
                format!("Light {id} brightness level is set to {level}")
            }
            Command::SetColor(t, color) => {
                let (id, kind) = self.locate(t)?;
                let device = &mut self.devices[id];
                let accepts = device.accepts_settings();
                let DeviceState::Light(light) = &mut device.state else {
                    return Err(HomeError::WrongDeviceType { kind, id, noun: "light" });
                };
                let color: LightColor = color.parse().map_err(|_| HomeError::InvalidColor)?;
                if !accepts {
                    return Err(HomeError::SwitchedOff { kind, id });
                }
                light.color = color;
                format!("Light {id} color is set to {color}")
            }
            Command::SetAngle(t, angle) => {
                let (id, kind) = self.locate(t)?;
                let device = &mut self.devices[id];
                let accepts = device.accepts_settings();
                let DeviceState::Camera(camera) = &mut device.state else {
                    return Err(HomeError::WrongDeviceType { kind, id, noun: "camera" });
                };
                if !accepts {
                    return Err(HomeError::SwitchedOff { kind, id });
                }
                if !camera.set_angle(*angle) {
                    return Err(HomeError::AngleOutOfRange { id });
                }
                format!("{kind} {id} angle is set to {angle}")
            }
            Command::StartRecording(t) => {
                let (id, kind) = self.locate(t)?;
                let device = &mut self.devices[id];
                let accepts = device.accepts_settings();
                let DeviceState::Camera(camera) = &mut device.state else {
                    return Err(HomeError::WrongDeviceType { kind, id, noun: "camera" });
                };
                if !accepts {
                    return Err(HomeError::SwitchedOff { kind, id });
                }
                if !camera.start_recording() {
                    return Err(HomeError::AlreadyRecording { id });
                }
                format!("{kind} {id} started recording")
            }
            Command::StopRecording(t) => {
                let (id, kind) = self.locate(t)?;
                let device = &mut self.devices[id];
                let accepts = device.accepts_settings();
                let DeviceState::Camera(camera) = &mut device.state else {
                    return Err(HomeError::WrongDeviceType { kind, id, noun: "camera" });
                };
                if !accepts {
                    return Err(HomeError::SwitchedOff { kind, id });
                }
                if !camera.stop_recording() {
                    return Err(HomeError::NotRecording { id });
                }
                format!("{kind} {id} stopped recording")
            }
        };
        Ok(vec![line])
    }

    /// Parse and run one line. Returns `None` when the line ends the session;
    /// otherwise the lines to print, with errors rendered as messages.
    pub fn interpret(&mut self, line: &str) -> Option<Vec<String>> {
        let result = match Command::parse(line) {
            Ok(Command::End) => return None,
            Ok(command) => {
                log::debug!("Executing {:?}", command);
                self.execute(&command)
            }
            Err(e) => Err(e),
        };
        Some(result.unwrap_or_else(|e| vec![e.to_string()]))
    }

    /// Run lines until `end` or the input runs out, collecting all output.
    pub fn run_session<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut output = Vec::new();
        for line in lines {
            match self.interpret(line) {
                Some(lines) => output.extend(lines),
                None => break,
            }
        }
        output
    }
}
