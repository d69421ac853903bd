//! Sag-tension change-of-state model.
//!
//! Given a span at a known equilibrium (weather and horizontal tension),
//! this model computes the distributed loads of a target weather case,
//! solves the change-of-state equation for the new equilibrium horizontal
//! tension, and evaluates the catenary sag that tension produces, split
//! into vertical and blowout components.
//!
//! The computational core lives in the internal `core` module; its input
//! and result types are re-exported here.
//!
//! # Example
//!
//! ```
//! use catenary_models::models::line::sag_tension::{
//!     CableSpan, EquilibriumState, Known, SagTension, WeatherCase,
//! };
//! use catenary_models::support::span::HorizontalTension;
//! use catenary_models::support::units::newtons_per_meter;
//! use twine_core::Model;
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, Length, Pressure, TemperatureCoefficient, ThermodynamicTemperature},
//!     force::newton,
//!     length::{meter, millimeter},
//!     pressure::{gigapascal, pascal},
//!     temperature_coefficient::per_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let span = CableSpan::new(
//!     Length::new::<meter>(300.0),
//!     Length::new::<millimeter>(1.0),
//!     newtons_per_meter(14.72),
//!     Area::new::<square_meter>(4.032_25e-4),
//!     Pressure::new::<gigapascal>(79.0),
//!     TemperatureCoefficient::new::<per_kelvin>(1.9e-5),
//! )?;
//!
//! let known = Known {
//!     span,
//!     initial: EquilibriumState {
//!         weather: WeatherCase::still_air(
//!             ThermodynamicTemperature::new::<degree_celsius>(25.0),
//!         ),
//!         tension: HorizontalTension::new::<newton>(10_000.0)?,
//!     },
//!     target: WeatherCase::new(
//!         Length::new::<millimeter>(50.0),
//!         Pressure::new::<pascal>(10.0),
//!         ThermodynamicTemperature::new::<degree_celsius>(40.0),
//!     )?,
//! };
//!
//! let results = SagTension.call(&known)?;
//!
//! // Heavy ice loading pulls the span to a much higher tension.
//! assert!(*results.solution.tension > *known.initial.tension);
//! # Ok(())
//! # }
//! ```

mod core;

pub use self::core::{
    CableSpan, EquilibriumState, Known, Results, SolveError, StateConstants, TensionSolution,
    WeatherCase,
};

use twine_core::Model;

use self::core::solve;

/// Change-of-state sag-tension model for a single span.
///
/// A thin [`Model`] adapter over the core solver: the input is a [`Known`]
/// description of the span and both states, the output is the solved
/// [`Results`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SagTension;

impl Model for SagTension {
    type Input = Known;
    type Output = Results;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve(input)
    }
}
