//! Quantity types and unit helpers shared across models.

mod quantities;
mod temperature_difference;

pub use quantities::{LineLoad, newtons_per_meter};
pub use temperature_difference::TemperatureDifference;
