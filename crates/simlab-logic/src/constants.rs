//! Simulation constants: attribute bounds, day limits, device layout.
//!
//! Plain constants grouped by concern. Both simulations and the CLI read
//! their limits from here.

pub mod animal_bounds {
    pub const MIN_WEIGHT: f32 = 5.0;
    pub const MAX_WEIGHT: f32 = 200.0;
    pub const MIN_SPEED: f32 = 5.0;
    pub const MAX_SPEED: f32 = 60.0;
    pub const MIN_ENERGY: f32 = 0.0;
    pub const MAX_ENERGY: f32 = 100.0;
}

pub mod field_bounds {
    pub const MIN_GRASS: f32 = 0.0;
    pub const MAX_GRASS: f32 = 100.0;
}

pub mod feeding {
    /// Grazing yields `weight / GRAZE_DIVISOR` energy.
    pub const GRAZE_DIVISOR: f32 = 10.0;
    /// Flat metabolic cost applied to every animal at the end of a day.
    pub const DAILY_ENERGY_COST: f32 = 1.0;
    /// Grass multiplies by this factor each day (then capped).
    pub const GRASS_GROWTH_FACTOR: f32 = 2.0;
}

pub mod days {
    pub const MIN_DAYS: u32 = 1;
    pub const MAX_DAYS: u32 = 30;
}

pub mod sounds {
    pub const LION: &str = "Roar";
    pub const ZEBRA: &str = "Ihoho";
    pub const BOAR: &str = "Oink";
}

pub mod devices {
    pub const NUMBER_OF_LIGHTS: usize = 4;
    pub const NUMBER_OF_CAMERAS: usize = 2;
    pub const NUMBER_OF_HEATERS: usize = 4;
    pub const NUMBER_OF_DEVICES: usize = NUMBER_OF_LIGHTS + NUMBER_OF_CAMERAS + NUMBER_OF_HEATERS;

    // ID ranges, in array order: lights, cameras, heaters
    pub const FIRST_CAMERA_ID: usize = NUMBER_OF_LIGHTS;
    pub const FIRST_HEATER_ID: usize = NUMBER_OF_LIGHTS + NUMBER_OF_CAMERAS;

    pub const MIN_HEATER_TEMP: i32 = 15;
    pub const MAX_HEATER_TEMP: i32 = 30;
    pub const INITIAL_HEATER_TEMP: i32 = 20;

    pub const MIN_CAMERA_ANGLE: i32 = -60;
    pub const MAX_CAMERA_ANGLE: i32 = 60;
    pub const INITIAL_CAMERA_ANGLE: i32 = 45;
}
