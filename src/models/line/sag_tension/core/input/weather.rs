use uom::si::f64::{Length, Pressure, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

/// One ambient condition a span is exposed to: ice, wind, and conductor
/// temperature.
#[derive(Debug, Clone, Copy)]
pub struct WeatherCase {
    /// Radial thickness of accreted ice.
    pub ice_thickness: Constrained<Length, NonNegative>,

    /// Wind pressure on the iced silhouette.
    pub wind_pressure: Constrained<Pressure, NonNegative>,

    /// Conductor temperature.
    pub temperature: ThermodynamicTemperature,
}

impl WeatherCase {
    /// Validates and assembles a weather case.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the ice thickness or wind pressure is negative.
    pub fn new(
        ice_thickness: Length,
        wind_pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            ice_thickness: NonNegative::new(ice_thickness)?,
            wind_pressure: NonNegative::new(wind_pressure)?,
            temperature,
        })
    }

    /// A bare conductor in still air at the given temperature.
    #[must_use]
    pub fn still_air(temperature: ThermodynamicTemperature) -> Self {
        Self {
            ice_thickness: NonNegative::zero(),
            wind_pressure: NonNegative::zero(),
            temperature,
        }
    }
}
