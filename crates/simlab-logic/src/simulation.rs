//! Day-stepping loop for the animal ecosystem.
//!
//! One tick (day):
//! 1. every living animal, in population order, runs its feeding rule
//! 2. every animal pays the flat daily energy cost
//! 3. animals at or below zero energy are culled
//! 4. the field regrows
//!
//! Already-dead animals are culled once when the simulation is built, so
//! each day's action phase starts from a living population.

use serde::Serialize;

use crate::animal::{Animal, Species};
use crate::config::SimulationConfig;
use crate::error::{HuntError, SimError};
use crate::feeding::{self, Meal};
use crate::field::Field;

/// A successful feeding during a day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Feeding {
    /// Population index of the animal at the time it fed.
    pub animal: usize,
    pub species: Species,
    pub meal: Meal,
}

/// A hunt that did not happen. Reported, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HuntFailure {
    pub hunter: usize,
    pub species: Species,
    pub error: HuntError,
}

/// Everything that happened during one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    /// 1-based day number.
    pub day: u32,
    pub feedings: Vec<Feeding>,
    pub hunt_failures: Vec<HuntFailure>,
    /// Number of animals removed at the end of the day.
    pub culled: usize,
    pub grass_after: f32,
}

/// Outcome of a full run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub config: SimulationConfig,
    pub days: Vec<DayReport>,
    /// Surviving animals' species, in population order.
    pub survivors: Vec<Species>,
}

impl RunReport {
    /// One sound per surviving animal, in population order.
    pub fn sounds(&self) -> Vec<&'static str> {
        self.survivors.iter().map(|s| s.sound()).collect()
    }

    /// Messages for every failed hunt, in the order they happened.
    pub fn hunt_messages(&self) -> Vec<String> {
        self.days
            .iter()
            .flat_map(|d| d.hunt_failures.iter())
            .map(|f| f.error.to_string())
            .collect()
    }
}

/// Owns the population and the field for the duration of a run.
#[derive(Debug, Clone)]
pub struct Simulation {
    population: Vec<Animal>,
    field: Field,
    day: u32,
}

impl Simulation {
    /// Start a simulation. Animals that are already dead are culled here.
    pub fn new(field: Field, population: Vec<Animal>) -> Self {
        let mut sim = Self {
            population,
            field,
            day: 0,
        };
        let culled = sim.cull();
        if culled > 0 {
            log::debug!("Culled {} already-dead animals before day 1", culled);
        }
        sim
    }

    pub fn population(&self) -> &[Animal] {
        &self.population
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Days simulated so far.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Remove every animal with energy ≤ 0. Returns how many were removed.
    pub fn cull(&mut self) -> usize {
        let before = self.population.len();
        self.population.retain(|a| !a.is_dead());
        before - self.population.len()
    }

    /// Simulate one day.
    pub fn step(&mut self) -> DayReport {
        self.day += 1;
        let mut feedings = Vec::new();
        let mut hunt_failures = Vec::new();

        for index in 0..self.population.len() {
            // Killed earlier today: no meal, but still in the population
            if self.population[index].is_dead() {
                continue;
            }
            let species = self.population[index].species();
            let (meal, failure) = feeding::feed(&mut self.population, index, &mut self.field);
            if !meal.is_empty() {
                feedings.push(Feeding {
                    animal: index,
                    species,
                    meal,
                });
            }
            if let Some(error) = failure {
                log::warn!("Day {}: {} {} could not hunt: {}", self.day, species, index, error);
                hunt_failures.push(HuntFailure {
                    hunter: index,
                    species,
                    error,
                });
            }
        }

        self.population.iter_mut().for_each(Animal::decrement_energy);
        let culled = self.cull();
        self.field.grow();

        log::debug!(
            "Day {}: {} fed, {} failed hunts, {} culled, {} alive, grass {:.2}",
            self.day,
            feedings.len(),
            hunt_failures.len(),
            culled,
            self.population.len(),
            self.field.grass()
        );

        DayReport {
            day: self.day,
            feedings,
            hunt_failures,
            culled,
            grass_after: self.field.grass(),
        }
    }

    /// Simulate `days` more days. Zero days is a no-op.
    pub fn run(&mut self, days: u32) -> Vec<DayReport> {
        (0..days).map(|_| self.step()).collect()
    }

    /// Sounds of the current population, in order.
    pub fn sounds(&self) -> Vec<&'static str> {
        self.population.iter().map(Animal::sound).collect()
    }
}

/// Validate the config, build the field and run to completion.
pub fn run_simulation(config: &SimulationConfig, animals: Vec<Animal>) -> Result<RunReport, SimError> {
    config.validate()?;
    let field = Field::new(config.grass)?;

    log::info!(
        "Starting simulation: {} days, grass {:.2}, {} animals",
        config.days,
        config.grass,
        animals.len()
    );

    let mut sim = Simulation::new(field, animals);
    let days = sim.run(config.days);
    let survivors: Vec<Species> = sim.population().iter().map(Animal::species).collect();

    log::info!("Simulation finished: {} survivors", survivors.len());

    Ok(RunReport {
        config: *config,
        days,
        survivors,
    })
}
