use uom::si::f64::{Area, Length, Pressure, TemperatureCoefficient};

use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    units::LineLoad,
};

/// Span geometry and conductor properties, fixed across weather states.
#[derive(Debug, Clone, Copy)]
pub struct CableSpan {
    /// Horizontal distance between supports.
    pub length: Constrained<Length, StrictlyPositive>,

    /// Conductor outer diameter.
    pub diameter: Constrained<Length, StrictlyPositive>,

    /// Bare conductor weight per unit length.
    pub unit_weight: Constrained<LineLoad, StrictlyPositive>,

    /// Conductor cross-sectional area.
    pub cross_section: Constrained<Area, StrictlyPositive>,

    /// Effective Young's modulus of the composite conductor.
    pub elastic_modulus: Constrained<Pressure, StrictlyPositive>,

    /// Coefficient of linear thermal expansion.
    pub thermal_expansion: TemperatureCoefficient,
}

impl CableSpan {
    /// Validates and assembles a span description.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the length, diameter, weight, area, or modulus is
    /// not strictly positive.
    pub fn new(
        length: Length,
        diameter: Length,
        unit_weight: LineLoad,
        cross_section: Area,
        elastic_modulus: Pressure,
        thermal_expansion: TemperatureCoefficient,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            length: StrictlyPositive::new(length)?,
            diameter: StrictlyPositive::new(diameter)?,
            unit_weight: StrictlyPositive::new(unit_weight)?,
            cross_section: StrictlyPositive::new(cross_section)?,
            elastic_modulus: StrictlyPositive::new(elastic_modulus)?,
            thermal_expansion,
        })
    }
}
