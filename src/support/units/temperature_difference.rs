use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// This trait provides a [`minus`](Self::minus) method that subtracts two
/// [`ThermodynamicTemperature`] values (absolute temperatures) and returns a
/// [`TemperatureInterval`] (temperature difference). The change-of-state
/// equation works with the interval between two conductor temperatures, not
/// the absolute temperatures themselves.
///
/// For background on this distinction and why this extension is needed:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289),
/// [#403](https://github.com/iliekturtles/uom/issues/403).
///
/// [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn conductor_temperature_swings() {
        let everyday = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let summer_peak = ThermodynamicTemperature::new::<degree_celsius>(40.0);
        let winter_storm = ThermodynamicTemperature::new::<degree_celsius>(-5.0);

        // Heating from the everyday condition.
        assert_relative_eq!(summer_peak.minus(everyday).get::<delta_celsius>(), 15.0);

        // Cooling is a negative interval.
        assert_relative_eq!(winter_storm.minus(everyday).get::<delta_celsius>(), -30.0);

        // Celsius intervals and kelvin intervals coincide.
        assert_relative_eq!(summer_peak.minus(everyday).get::<delta_kelvin>(), 15.0);
    }
}
