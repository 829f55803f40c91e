//! Animals: species tags, bounded attributes, validated construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{animal_bounds::*, feeding::DAILY_ENERGY_COST, sounds};
use crate::error::SimError;

/// The three species in the ecosystem.
///
/// Capabilities per species:
/// - Lion: hunter
/// - Zebra: grazer
/// - Boar: grazer and hunter (grazes first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Lion,
    Zebra,
    Boar,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Lion, Species::Zebra, Species::Boar];

    /// Whether this species feeds on field grass.
    pub fn is_grazer(self) -> bool {
        matches!(self, Self::Zebra | Self::Boar)
    }

    /// Whether this species feeds on other animals.
    pub fn is_hunter(self) -> bool {
        matches!(self, Self::Lion | Self::Boar)
    }

    pub fn sound(self) -> &'static str {
        match self {
            Self::Lion => sounds::LION,
            Self::Zebra => sounds::ZEBRA,
            Self::Boar => sounds::BOAR,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Lion => "Lion",
            Self::Zebra => "Zebra",
            Self::Boar => "Boar",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Species {
    type Err = SimError;

    /// Exact, case-sensitive species names. Anything else is invalid input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|species| species.name() == s)
            .ok_or(SimError::InvalidInputs)
    }
}

/// A single animal. Attributes are only settable through validated
/// construction and the feeding/metabolism operations of this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    species: Species,
    weight: f32,
    speed: f32,
    energy: f32,
}

impl Animal {
    /// Build an animal, rejecting the first out-of-range attribute
    /// (weight, then speed, then energy). Bounds are inclusive.
    pub fn new(species: Species, weight: f32, speed: f32, energy: f32) -> Result<Self, SimError> {
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(SimError::WeightOutOfBounds);
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(SimError::SpeedOutOfBounds);
        }
        if !(MIN_ENERGY..=MAX_ENERGY).contains(&energy) {
            return Err(SimError::EnergyOutOfBounds);
        }
        Ok(Self {
            species,
            weight,
            speed,
            energy,
        })
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// Alive-but-inert animals (energy exactly 0) count as dead here.
    pub fn is_dead(&self) -> bool {
        self.energy <= 0.0
    }

    pub fn sound(&self) -> &'static str {
        self.species.sound()
    }

    /// Add energy, capped at the maximum.
    pub(crate) fn gain_energy(&mut self, amount: f32) {
        self.energy = (self.energy + amount).min(MAX_ENERGY);
    }

    /// Hunted prey drops to exactly zero, regardless of what it had.
    pub(crate) fn kill(&mut self) {
        self.energy = 0.0;
    }

    /// Daily metabolic cost. May push energy below zero until the next cull.
    pub fn decrement_energy(&mut self) {
        self.energy -= DAILY_ENERGY_COST;
    }
}
