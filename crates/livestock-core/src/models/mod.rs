//! Domain models for the livestock dashboard.

mod animal;
pub mod coerce;
mod health;

pub use animal::*;
pub use health::*;
