use std::{f64::consts::PI, ops::Deref};

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        acceleration::meter_per_second_squared,
        angle::radian,
        f64::{Acceleration, Angle, Length, MassDensity, Pressure},
        mass_density::kilogram_per_cubic_meter,
    },
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive},
    units::{LineLoad, newtons_per_meter},
};

/// Gravitational acceleration applied to accreted ice, m/s².
const GRAVITY: f64 = 9.81;

/// Density of glaze ice accreted on a conductor, kg/m³.
const ICE_DENSITY: f64 = 915.0;

/// Resultant distributed load on a span, acting in the swung load plane.
///
/// The value must be strictly positive; a span with no load on it has no
/// defined catenary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ResultantLoad(Constrained<LineLoad, StrictlyPositive>);

impl ResultantLoad {
    /// Create a [`ResultantLoad`] from a value in newtons per meter.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(newtons_per_meter(value))
    }

    /// Create a [`ResultantLoad`] from a line-load quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: LineLoad) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }
}

impl Deref for ResultantLoad {
    type Target = LineLoad;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// An error from load geometry with no defined swing angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadingError {
    /// The gravity load is zero, so the load vector has no vertical
    /// component and its angle from vertical is undefined.
    #[error("vertical load is zero; the swing angle is undefined")]
    ZeroVerticalLoad,
}

/// Per-unit-length weight of a radial ice sleeve on a conductor.
///
/// Models the ice as an annulus of the given radial thickness around the
/// conductor, so the weight is `g·ρ·π·t·(D + t)`. Zero thickness yields
/// zero weight.
#[must_use]
pub fn ice_weight(
    thickness: Constrained<Length, NonNegative>,
    diameter: Constrained<Length, StrictlyPositive>,
) -> LineLoad {
    let t = thickness.into_inner();
    let d = diameter.into_inner();

    let g = Acceleration::new::<meter_per_second_squared>(GRAVITY);
    let rho = MassDensity::new::<kilogram_per_cubic_meter>(ICE_DENSITY);

    g * rho * t * (d + t) * PI
}

/// Per-unit-length wind load on the iced conductor silhouette.
///
/// The exposed width is the conductor diameter plus ice on both sides,
/// `D + 2t`, and the wind pressure is assumed to act horizontally on it.
#[must_use]
pub fn wind_weight(
    pressure: Constrained<Pressure, NonNegative>,
    diameter: Constrained<Length, StrictlyPositive>,
    ice_thickness: Constrained<Length, NonNegative>,
) -> LineLoad {
    let t = ice_thickness.into_inner();
    pressure.into_inner() * (diameter.into_inner() + t * 2.0)
}

/// Vector sum of the gravity loads and the transverse wind load.
///
/// Bare weight and ice weight act downward, wind acts perpendicular to
/// them, so the resultant is `√((W_bare + W_ice)² + W_wind²)`.
///
/// # Errors
///
/// Returns `Err` if every component is zero (an unloaded span has no
/// resultant direction).
pub fn resultant(bare: LineLoad, ice: LineLoad, wind: LineLoad) -> ConstraintResult<ResultantLoad> {
    let vertical = bare + ice;
    ResultantLoad::from_quantity((vertical * vertical + wind * wind).sqrt())
}

/// Angle of the resultant load vector from vertical.
///
/// `atan(W_wind / (W_bare + W_ice))`, in `[0°, 90°)` for nonnegative loads
/// with a nonzero gravity component.
///
/// # Errors
///
/// Returns [`LoadingError::ZeroVerticalLoad`] when the gravity load is
/// zero; the quotient is degenerate there and must not silently become an
/// angle.
pub fn blowout_angle(
    bare: LineLoad,
    ice: LineLoad,
    wind: LineLoad,
) -> Result<Angle, LoadingError> {
    let vertical = bare + ice;
    if vertical == LineLoad::ZERO {
        return Err(LoadingError::ZeroVerticalLoad);
    }

    Ok(Angle::new::<radian>(wind.value.atan2(vertical.value)))
}

/// Distributed loads on a span under one weather condition.
#[derive(Debug, Clone, Copy)]
pub struct LoadCase {
    /// Bare conductor weight per unit length.
    pub bare: LineLoad,

    /// Ice sleeve weight per unit length.
    pub ice: LineLoad,

    /// Wind load per unit length.
    pub wind: LineLoad,

    /// Resultant load in the swung plane.
    pub resultant: ResultantLoad,

    /// Swing of the load plane from vertical.
    pub blowout: Angle,
}

impl LoadCase {
    /// Computes the loads produced by ice thickness and wind pressure on a
    /// conductor of the given diameter and bare weight.
    ///
    /// The bare weight is strictly positive, so the resultant and the swing
    /// angle always exist.
    #[must_use]
    pub fn compute(
        bare_weight: Constrained<LineLoad, StrictlyPositive>,
        diameter: Constrained<Length, StrictlyPositive>,
        ice_thickness: Constrained<Length, NonNegative>,
        wind_pressure: Constrained<Pressure, NonNegative>,
    ) -> Self {
        let bare = bare_weight.into_inner();
        let ice = ice_weight(ice_thickness, diameter);
        let wind = wind_weight(wind_pressure, diameter, ice_thickness);

        let resultant = resultant(bare, ice, wind)
            .expect("bare weight is strictly positive, so the resultant cannot vanish");
        let blowout = blowout_angle(bare, ice, wind)
            .expect("bare weight is strictly positive, so the swing angle is defined");

        Self {
            bare,
            ice,
            wind,
            resultant,
            blowout,
        }
    }
}
