//! Run configuration: day count, starting grass, input layout.

use serde::{Deserialize, Serialize};

use crate::constants::days::{MAX_DAYS, MIN_DAYS};
use crate::error::SimError;

/// Parameters of a single animal simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of days to simulate, `MIN_DAYS..=MAX_DAYS`.
    pub days: u32,
    /// Starting grass. Its bound is enforced when the field is built.
    pub grass: f32,
}

impl SimulationConfig {
    /// Reject a day count outside the allowed range.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.days) {
            return Err(SimError::InvalidInputs);
        }
        Ok(())
    }
}

/// Shape of the population input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLayout {
    /// Leading lines skipped before the day count.
    pub header_lines: usize,
}

impl Default for InputLayout {
    fn default() -> Self {
        Self { header_lines: 3 }
    }
}
