//! Fleetrate
//!
//! Fleetrate is a deterministic rental pricing engine: it prices a car rental
//! from a base daily rate, seasonal rate rules and length-of-stay discount
//! brackets.

pub mod calculator;
pub mod calendar;
pub mod durations;
pub mod fixtures;
pub mod matrix;
pub mod multiplier;
pub mod prelude;
pub mod pricing;
pub mod quote;
pub mod seasons;
pub mod utils;
