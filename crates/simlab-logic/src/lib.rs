//! Pure simulation logic for SimLab.
//!
//! This crate holds both simulations with no I/O of its own: functions take
//! plain data and return results, so the CLI only reads input and prints
//! what comes back.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`animal`] | Species tags and bounded, validated animals |
//! | [`config`] | Run configuration (days, grass) and input layout |
//! | [`constants`] | Attribute bounds, day limits, sounds, device layout |
//! | [`error`] | Fatal `SimError` and per-tick `HuntError` |
//! | [`feeding`] | Grazing, prey selection, hunting, per-species dispatch |
//! | [`field`] | The shared grass field |
//! | [`input`] | Population file parser |
//! | [`simulation`] | Day-stepping loop and run reports |
//! | [`smart_home`] | Device table and line-command interpreter |

pub mod animal;
pub mod config;
pub mod constants;
pub mod error;
pub mod feeding;
pub mod field;
pub mod input;
pub mod simulation;
pub mod smart_home;
