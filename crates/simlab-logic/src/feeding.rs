//! Feeding rules: grazing, prey selection, hunting.
//!
//! Species behaviour is a dispatch over [`Species`] capabilities rather than
//! per-species types:
//!
//! | Species | Graze | Hunt |
//! |---------|-------|------|
//! | Zebra   | yes   | no   |
//! | Lion    | no    | yes  |
//! | Boar    | first | then |
//!
//! Animals are addressed by their index in the population slice, since prey
//! selection is positional.

use serde::Serialize;

use crate::animal::{Animal, Species};
use crate::constants::feeding::GRAZE_DIVISOR;
use crate::error::HuntError;
use crate::field::Field;

/// What an animal ate during one feeding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Meal {
    /// Energy gained from grass, if the field had enough.
    pub grazed: Option<f32>,
    /// Index of the animal that was killed, if the hunt succeeded.
    pub prey: Option<usize>,
}

impl Meal {
    pub fn is_empty(&self) -> bool {
        self.grazed.is_none() && self.prey.is_none()
    }
}

/// Energy a grazer would get from one meal of grass.
pub fn graze_gain(weight: f32) -> f32 {
    weight / GRAZE_DIVISOR
}

/// Graze on the field. All-or-nothing: only eats when the field holds
/// strictly more grass than the gain. Returns the energy gained.
pub fn graze(grazer: &mut Animal, field: &mut Field) -> Option<f32> {
    let gain = graze_gain(grazer.weight());
    if !field.consume(gain) {
        return None;
    }
    grazer.gain_energy(gain);
    Some(gain)
}

/// Pick the prey of the animal at `hunter`: the next animal in population
/// order, wrapping around to the front.
pub(crate) fn choose_prey(population: &[Animal], hunter: usize) -> Result<usize, HuntError> {
    let prey = (hunter + 1) % population.len();
    if prey == hunter {
        return Err(HuntError::SelfHunting);
    }

    let (h, p) = (&population[hunter], &population[prey]);
    if p.species() == h.species() {
        return Err(HuntError::Cannibalism);
    }
    // Prey escapes only when it is both at least as energetic and as fast
    if p.energy() >= h.energy() && p.speed() >= h.speed() {
        return Err(HuntError::TooStrongPrey);
    }
    Ok(prey)
}

/// Hunter eats prey: gains the prey's weight (capped), prey drops to zero
/// energy and is removed at the next cull.
pub(crate) fn hunt(population: &mut [Animal], hunter: usize, prey: usize) {
    let meal = population[prey].weight();
    population[prey].kill();
    population[hunter].gain_energy(meal);
}

/// Run the feeding rule of the animal at `index`.
///
/// Returns what was eaten together with the reason a hunt did not happen.
/// A boar that grazed and then fails to hunt keeps its grass, so both can
/// be set at once.
pub fn feed(population: &mut [Animal], index: usize, field: &mut Field) -> (Meal, Option<HuntError>) {
    let species: Species = population[index].species();
    let mut meal = Meal::default();

    if species.is_grazer() {
        meal.grazed = graze(&mut population[index], field);
    }
    if species.is_hunter() {
        match choose_prey(population, index) {
            Ok(prey) => {
                hunt(population, index, prey);
                meal.prey = Some(prey);
            }
            Err(error) => return (meal, Some(error)),
        }
    }
    (meal, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal(species: Species, weight: f32, speed: f32, energy: f32) -> Animal {
        Animal::new(species, weight, speed, energy).unwrap()
    }

    #[test]
    fn test_graze_gain() {
        assert!((graze_gain(50.0) - 5.0).abs() < 0.001);
        assert!((graze_gain(200.0) - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_graze_eats_when_grass_exceeds_gain() {
        let mut zebra = animal(Species::Zebra, 50.0, 10.0, 50.0);
        let mut field = Field::new(10.0).unwrap();
        assert_eq!(graze(&mut zebra, &mut field), Some(5.0));
        assert!((zebra.energy() - 55.0).abs() < 0.001);
        assert!((field.grass() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_graze_no_change_when_grass_equals_gain() {
        let mut zebra = animal(Species::Zebra, 50.0, 10.0, 50.0);
        let mut field = Field::new(5.0).unwrap();
        assert_eq!(graze(&mut zebra, &mut field), None);
        assert_eq!(zebra.energy(), 50.0);
        assert_eq!(field.grass(), 5.0);
    }

    #[test]
    fn test_graze_energy_capped_but_grass_fully_consumed() {
        let mut zebra = animal(Species::Zebra, 100.0, 10.0, 98.0);
        let mut field = Field::new(50.0).unwrap();
        graze(&mut zebra, &mut field);
        assert_eq!(zebra.energy(), 100.0);
        assert!((field.grass() - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_choose_prey_wraps_around() {
        let pop = vec![
            animal(Species::Zebra, 50.0, 10.0, 10.0),
            animal(Species::Boar, 50.0, 10.0, 10.0),
            animal(Species::Lion, 50.0, 30.0, 80.0),
        ];
        assert_eq!(choose_prey(&pop, 2), Ok(0));
    }

    #[test]
    fn test_choose_prey_next_in_order() {
        let pop = vec![
            animal(Species::Lion, 50.0, 30.0, 80.0),
            animal(Species::Zebra, 50.0, 10.0, 10.0),
        ];
        assert_eq!(choose_prey(&pop, 0), Ok(1));
    }

    #[test]
    fn test_self_hunting() {
        let pop = vec![animal(Species::Lion, 50.0, 30.0, 80.0)];
        assert_eq!(choose_prey(&pop, 0), Err(HuntError::SelfHunting));
    }

    #[test]
    fn test_cannibalism() {
        let pop = vec![
            animal(Species::Lion, 50.0, 30.0, 80.0),
            animal(Species::Lion, 50.0, 5.0, 1.0),
        ];
        assert_eq!(choose_prey(&pop, 0), Err(HuntError::Cannibalism));
    }

    #[test]
    fn test_too_strong_prey_needs_both_conditions() {
        let hunter = animal(Species::Lion, 50.0, 30.0, 50.0);

        // Stronger and faster: blocked
        let pop = vec![hunter.clone(), animal(Species::Zebra, 50.0, 30.0, 50.0)];
        assert_eq!(choose_prey(&pop, 0), Err(HuntError::TooStrongPrey));

        // Stronger but slower: huntable
        let pop = vec![hunter.clone(), animal(Species::Zebra, 50.0, 29.0, 90.0)];
        assert_eq!(choose_prey(&pop, 0), Ok(1));

        // Faster but weaker: huntable
        let pop = vec![hunter, animal(Species::Zebra, 50.0, 60.0, 49.0)];
        assert_eq!(choose_prey(&pop, 0), Ok(1));
    }

    #[test]
    fn test_hunt_transfers_weight_and_kills_prey() {
        let mut pop = vec![
            animal(Species::Lion, 150.0, 40.0, 30.0),
            animal(Species::Zebra, 40.0, 20.0, 25.0),
        ];
        hunt(&mut pop, 0, 1);
        assert!((pop[0].energy() - 70.0).abs() < 0.001);
        assert_eq!(pop[1].energy(), 0.0);
        assert!(pop[1].is_dead());
    }

    #[test]
    fn test_hunt_gain_capped() {
        let mut pop = vec![
            animal(Species::Lion, 150.0, 40.0, 90.0),
            animal(Species::Zebra, 120.0, 20.0, 25.0),
        ];
        hunt(&mut pop, 0, 1);
        assert_eq!(pop[0].energy(), 100.0);
    }

    #[test]
    fn test_zebra_only_grazes() {
        let mut pop = vec![
            animal(Species::Zebra, 50.0, 60.0, 90.0),
            animal(Species::Lion, 50.0, 5.0, 1.0),
        ];
        let mut field = Field::new(20.0).unwrap();
        let (meal, failure) = feed(&mut pop, 0, &mut field);
        assert_eq!(failure, None);
        assert_eq!(meal.grazed, Some(5.0));
        assert_eq!(meal.prey, None);
        assert_eq!(pop[1].energy(), 1.0);
    }

    #[test]
    fn test_lion_only_hunts() {
        let mut pop = vec![
            animal(Species::Lion, 100.0, 40.0, 20.0),
            animal(Species::Zebra, 30.0, 10.0, 10.0),
        ];
        let mut field = Field::new(50.0).unwrap();
        let (meal, failure) = feed(&mut pop, 0, &mut field);
        assert_eq!(failure, None);
        assert_eq!(meal.grazed, None);
        assert_eq!(meal.prey, Some(1));
        assert_eq!(field.grass(), 50.0);
        assert!((pop[0].energy() - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_boar_grazes_then_hunts() {
        let mut pop = vec![
            animal(Species::Boar, 50.0, 20.0, 40.0),
            animal(Species::Zebra, 20.0, 10.0, 10.0),
        ];
        let mut field = Field::new(20.0).unwrap();
        let (meal, failure) = feed(&mut pop, 0, &mut field);
        assert_eq!(failure, None);
        assert_eq!(meal.grazed, Some(5.0));
        assert_eq!(meal.prey, Some(1));
        // 40 + 5 grass + 20 prey weight
        assert!((pop[0].energy() - 65.0).abs() < 0.001);
        assert!((field.grass() - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_boar_keeps_grass_when_hunt_fails() {
        let mut pop = vec![animal(Species::Boar, 50.0, 20.0, 40.0)];
        let mut field = Field::new(20.0).unwrap();
        let (meal, failure) = feed(&mut pop, 0, &mut field);
        assert_eq!(failure, Some(HuntError::SelfHunting));
        assert_eq!(meal.grazed, Some(5.0));
        assert_eq!(meal.prey, None);
        assert!((pop[0].energy() - 45.0).abs() < 0.001);
        assert!((field.grass() - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_lion_failed_hunt_eats_nothing() {
        let mut pop = vec![
            animal(Species::Lion, 100.0, 40.0, 20.0),
            animal(Species::Lion, 30.0, 10.0, 10.0),
        ];
        let mut field = Field::new(50.0).unwrap();
        let (meal, failure) = feed(&mut pop, 0, &mut field);
        assert!(meal.is_empty());
        assert_eq!(failure, Some(HuntError::Cannibalism));
        assert_eq!(field.grass(), 50.0);
    }

    #[test]
    fn test_meal_is_empty() {
        assert!(Meal::default().is_empty());
        assert!(!Meal { grazed: Some(1.0), prey: None }.is_empty());
    }
}
