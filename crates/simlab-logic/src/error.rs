//! Error types for the animal simulation.
//!
//! `SimError` aborts a run (bad input or an out-of-range entity);
//! `HuntError` only costs the hunter its meal for the day.
//! The `Display` strings are the user-facing messages.

use serde::Serialize;
use thiserror::Error;

/// Load and construction failures. Fatal to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum SimError {
    #[error("Invalid inputs")]
    InvalidInputs,
    #[error("Invalid number of animal parameters")]
    InvalidNumberOfAnimalParameters,
    #[error("The weight is out of bounds")]
    WeightOutOfBounds,
    #[error("The speed is out of bounds")]
    SpeedOutOfBounds,
    #[error("The energy is out of bounds")]
    EnergyOutOfBounds,
    #[error("The grass is out of bounds")]
    GrassOutOfBounds,
}

/// Reasons a hunter could not feed on its prey this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum HuntError {
    #[error("Self-hunting is not allowed")]
    SelfHunting,
    #[error("Cannibalism is not allowed")]
    Cannibalism,
    #[error("The prey is too strong or too fast to attack")]
    TooStrongPrey,
}
