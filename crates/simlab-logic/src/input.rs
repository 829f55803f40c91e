//! Population file parsing.
//!
//! Layout, one value per line:
//!
//! ```text
//! <header lines, skipped>
//! <days>
//! <grass>                      e.g. 20 or 20.5F
//! <N>
//! <Species> <weight> <speed> <energy>   (N times)
//! ```
//!
//! Nothing may follow the last animal record. The day count is checked here,
//! before any animal is read; the grass bound is left to [`Field::new`].
//!
//! [`Field::new`]: crate::field::Field::new

use serde::Serialize;

use crate::animal::{Animal, Species};
use crate::config::{InputLayout, SimulationConfig};
use crate::error::SimError;

const ANIMAL_FIELDS: usize = 4;

/// A parsed input file, ready to run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub config: SimulationConfig,
    pub animals: Vec<Animal>,
}

/// Parse a whole input file.
pub fn parse_scenario(text: &str, layout: &InputLayout) -> Result<Scenario, SimError> {
    let mut lines = text.lines();
    for _ in 0..layout.header_lines {
        next_line(&mut lines)?;
    }

    let days = parse_int::<u32>(next_line(&mut lines)?)?;
    let grass = parse_float(next_line(&mut lines)?)?;
    let config = SimulationConfig { days, grass };
    config.validate()?;

    let count = parse_int::<usize>(next_line(&mut lines)?)?;
    let animals = (0..count)
        .map(|_| next_line(&mut lines).and_then(parse_animal))
        .collect::<Result<Vec<_>, _>>()?;

    if lines.next().is_some() {
        return Err(SimError::InvalidInputs);
    }

    log::debug!("Parsed scenario: {} days, grass {}, {} animals", days, grass, animals.len());
    Ok(Scenario { config, animals })
}

/// Parse one `<Species> <weight> <speed> <energy>` record.
///
/// Field count is checked first, then the numbers, then the species name,
/// and finally the attribute bounds.
pub fn parse_animal(line: &str) -> Result<Animal, SimError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != ANIMAL_FIELDS {
        return Err(SimError::InvalidNumberOfAnimalParameters);
    }

    let weight = parse_float(parts[1])?;
    let speed = parse_float(parts[2])?;
    let energy = parse_float(parts[3])?;
    let species: Species = parts[0].parse()?;

    Animal::new(species, weight, speed, energy)
}

fn next_line<'a>(lines: &mut impl Iterator<Item = &'a str>) -> Result<&'a str, SimError> {
    lines.next().ok_or(SimError::InvalidInputs)
}

fn parse_int<T: std::str::FromStr>(s: &str) -> Result<T, SimError> {
    s.trim().parse().map_err(|_| SimError::InvalidInputs)
}

/// Floats may carry an `F` suffix (`12.5F`), which is dropped.
fn parse_float(s: &str) -> Result<f32, SimError> {
    s.trim()
        .replace('F', "")
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(SimError::InvalidInputs)
}
