//! The shared grazing field.

use serde::{Deserialize, Serialize};

use crate::constants::feeding::GRASS_GROWTH_FACTOR;
use crate::constants::field_bounds::{MAX_GRASS, MIN_GRASS};
use crate::error::SimError;

/// A single pool of grass, always within `[MIN_GRASS, MAX_GRASS]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    grass: f32,
}

impl Field {
    pub fn new(grass: f32) -> Result<Self, SimError> {
        if !(MIN_GRASS..=MAX_GRASS).contains(&grass) {
            return Err(SimError::GrassOutOfBounds);
        }
        Ok(Self { grass })
    }

    pub fn grass(&self) -> f32 {
        self.grass
    }

    /// Daily regrowth: double, capped at the maximum.
    pub fn grow(&mut self) {
        self.grass = (self.grass * GRASS_GROWTH_FACTOR).min(MAX_GRASS);
    }

    /// Take `amount` of grass if strictly more than that is available.
    /// Returns whether anything was eaten; partial meals never happen.
    pub fn consume(&mut self, amount: f32) -> bool {
        if self.grass > amount {
            self.grass -= amount;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grass_bounds() {
        assert!(Field::new(0.0).is_ok());
        assert!(Field::new(100.0).is_ok());
        assert_eq!(Field::new(-1.0), Err(SimError::GrassOutOfBounds));
        assert_eq!(Field::new(100.5), Err(SimError::GrassOutOfBounds));
    }

    #[test]
    fn test_grow_doubles() {
        let mut f = Field::new(15.0).unwrap();
        f.grow();
        assert!((f.grass() - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_grow_capped() {
        let mut f = Field::new(60.0).unwrap();
        f.grow();
        assert_eq!(f.grass(), MAX_GRASS);
    }

    #[test]
    fn test_empty_field_stays_empty() {
        let mut f = Field::new(0.0).unwrap();
        f.grow();
        assert_eq!(f.grass(), 0.0);
    }

    #[test]
    fn test_consume_requires_strictly_more() {
        let mut f = Field::new(5.0).unwrap();
        assert!(!f.consume(5.0));
        assert_eq!(f.grass(), 5.0);
        assert!(f.consume(4.0));
        assert!((f.grass() - 1.0).abs() < 0.001);
    }
}
