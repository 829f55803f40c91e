//! Device model: lights, cameras, heaters.
//!
//! Every device can be switched on and off. Lights and cameras can also
//! charge; what else a device supports depends on its [`DeviceState`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::devices::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Off,
    On,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "OFF",
            Self::On => "ON",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrightnessLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for BrightnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        })
    }
}

impl FromStr for BrightnessLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightColor {
    White,
    Yellow,
}

impl fmt::Display for LightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "WHITE",
            Self::Yellow => "YELLOW",
        })
    }
}

impl FromStr for LightColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WHITE" => Ok(Self::White),
            "YELLOW" => Ok(Self::Yellow),
            _ => Err(()),
        }
    }
}

/// Device type, as named in commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceKind {
    Light,
    Camera,
    Heater,
}

impl DeviceKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Camera => "Camera",
            Self::Heater => "Heater",
        }
    }

    /// Lowercase name used in "is not a ..." messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Camera => "camera",
            Self::Heater => "heater",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Light" => Some(Self::Light),
            "Camera" => Some(Self::Camera),
            "Heater" => Some(Self::Heater),
            _ => None,
        }
    }

    /// IDs reserved for this kind of device.
    pub fn id_range(self) -> std::ops::Range<usize> {
        match self {
            Self::Light => 0..FIRST_CAMERA_ID,
            Self::Camera => FIRST_CAMERA_ID..FIRST_HEATER_ID,
            Self::Heater => FIRST_HEATER_ID..NUMBER_OF_DEVICES,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Light {
    pub charging: bool,
    pub brightness: BrightnessLevel,
    pub color: LightColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub charging: bool,
    pub recording: bool,
    pub angle: i32,
}

impl Camera {
    /// Set the angle if it lies in the allowed range.
    pub fn set_angle(&mut self, angle: i32) -> bool {
        if !(MIN_CAMERA_ANGLE..=MAX_CAMERA_ANGLE).contains(&angle) {
            return false;
        }
        self.angle = angle;
        true
    }

    pub fn start_recording(&mut self) -> bool {
        !std::mem::replace(&mut self.recording, true)
    }

    pub fn stop_recording(&mut self) -> bool {
        std::mem::replace(&mut self.recording, false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heater {
    pub temperature: i32,
}

impl Heater {
    /// Set the temperature if it lies in the allowed range.
    pub fn set_temperature(&mut self, temperature: i32) -> bool {
        if !(MIN_HEATER_TEMP..=MAX_HEATER_TEMP).contains(&temperature) {
            return false;
        }
        self.temperature = temperature;
        true
    }
}

/// Type-specific part of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceState {
    Light(Light),
    Camera(Camera),
    Heater(Heater),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub status: Status,
    pub state: DeviceState,
}

impl Device {
    pub fn light() -> Self {
        Self {
            status: Status::On,
            state: DeviceState::Light(Light {
                charging: false,
                brightness: BrightnessLevel::Low,
                color: LightColor::Yellow,
            }),
        }
    }

    pub fn camera() -> Self {
        Self {
            status: Status::On,
            state: DeviceState::Camera(Camera {
                charging: false,
                recording: false,
                angle: INITIAL_CAMERA_ANGLE,
            }),
        }
    }

    pub fn heater() -> Self {
        Self {
            status: Status::On,
            state: DeviceState::Heater(Heater {
                temperature: INITIAL_HEATER_TEMP,
            }),
        }
    }

    pub fn kind(&self) -> DeviceKind {
        match self.state {
            DeviceState::Light(_) => DeviceKind::Light,
            DeviceState::Camera(_) => DeviceKind::Camera,
            DeviceState::Heater(_) => DeviceKind::Heater,
        }
    }

    pub fn is_on(&self) -> bool {
        self.status == Status::On
    }

    /// Returns false if the device was already on.
    pub fn turn_on(&mut self) -> bool {
        if self.is_on() {
            return false;
        }
        self.status = Status::On;
        true
    }

    /// Returns false if the device was already off.
    pub fn turn_off(&mut self) -> bool {
        if !self.is_on() {
            return false;
        }
        self.status = Status::Off;
        true
    }

    /// Charging flag, for chargeable devices only.
    pub fn charging_mut(&mut self) -> Option<&mut bool> {
        match &mut self.state {
            DeviceState::Light(l) => Some(&mut l.charging),
            DeviceState::Camera(c) => Some(&mut c.charging),
            DeviceState::Heater(_) => None,
        }
    }

    pub fn is_charging(&self) -> bool {
        match &self.state {
            DeviceState::Light(l) => l.charging,
            DeviceState::Camera(c) => c.charging,
            DeviceState::Heater(_) => false,
        }
    }

    /// Lights and cameras accept settings while on or while charging.
    pub fn accepts_settings(&self) -> bool {
        self.is_on() || self.is_charging()
    }

    /// One-line status report.
    pub fn status_line(&self, id: usize) -> String {
        match &self.state {
            DeviceState::Light(l) => format!(
                "Light {} is {}, the color is {}, the charging status is {}, and the brightness level is {}.",
                id, self.status, l.color, l.charging, l.brightness
            ),
            // A recording camera only reports as recording while it has power
            DeviceState::Camera(c) => format!(
                "Camera {} is {}, the angle is {}, the charging status is {}, and the recording status is {}.",
                id,
                self.status,
                c.angle,
                c.charging,
                c.recording && (c.charging || self.is_on())
            ),
            DeviceState::Heater(h) => format!(
                "Heater {} is {} and the temperature is {}.",
                id, self.status, h.temperature
            ),
        }
    }
}
