use std::ops::Deref;

use thiserror::Error;
use uom::si::{
    angle::radian,
    f64::{Angle, Force, Length},
    force::newton,
    length::meter,
};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

use super::ResultantLoad;

/// Horizontal component of conductor tension, constant along the span.
///
/// The value must be strictly positive; the catenary degenerates as the
/// horizontal tension approaches zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HorizontalTension(Constrained<Force, StrictlyPositive>);

impl HorizontalTension {
    /// Create a [`HorizontalTension`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::force::Unit + uom::Conversion<f64, T = f64>,
    {
        let quantity = Force::new::<U>(value);
        Self::from_quantity(quantity)
    }

    /// Create a [`HorizontalTension`] from a force quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Force) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }
}

impl Deref for HorizontalTension {
    type Target = Force;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// An error from evaluating catenary geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CatenaryError {
    /// The catenary argument `S·W / 2H` is too large for the sag to be
    /// representable; the span/load/tension combination is far outside the
    /// physical regime.
    #[error("catenary argument {argument} overflows the sag evaluation")]
    ArgumentOverflow { argument: f64 },
}

/// Mid-span sag of a level span under a uniform resultant load.
///
/// Evaluates the exact catenary `(H/W)·(cosh(S·W/2H) − 1)` in the
/// equivalent form `(H/W)·2·sinh²(S·W/4H)`, which loses no precision in
/// the shallow limit where `cosh(x) − 1` cancels catastrophically and
/// reduces smoothly to the parabolic value.
///
/// # Errors
///
/// Returns [`CatenaryError::ArgumentOverflow`] when the argument is so
/// large the sag overflows `f64`.
pub fn sag(
    span: Constrained<Length, StrictlyPositive>,
    load: ResultantLoad,
    tension: HorizontalTension,
) -> Result<Length, CatenaryError> {
    let s = span.into_inner().get::<meter>();
    let w = load.value;
    let h = tension.get::<newton>();

    let argument = s * w / (2.0 * h);
    let sag = (h / w) * 2.0 * (0.5 * argument).sinh().powi(2);

    if !sag.is_finite() {
        return Err(CatenaryError::ArgumentOverflow { argument });
    }

    Ok(Length::new::<meter>(sag))
}

/// Parabolic approximation of mid-span sag, `W·S² / 8H`.
///
/// The first term of the catenary series; adequate for shallow spans where
/// `S·W/2H` is small, and always an underestimate of the exact sag. Kept
/// for cross-checking and for callers that want the textbook formula.
#[must_use]
pub fn parabolic_sag(
    span: Constrained<Length, StrictlyPositive>,
    load: ResultantLoad,
    tension: HorizontalTension,
) -> Length {
    let s = span.into_inner().get::<meter>();
    let w = load.value;
    let h = tension.get::<newton>();

    Length::new::<meter>(w * s * s / (8.0 * h))
}

/// Sag split into vertical and horizontal parts by the blowout angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SagComponents {
    /// Sag along the swung load plane.
    pub total: Length,

    /// Vertical component, `sag·cos θ`; the part that consumes ground
    /// clearance.
    pub vertical: Length,

    /// Horizontal component, `sag·sin θ`; the blowout toward the edge of
    /// the right-of-way.
    pub horizontal: Length,
}

/// Projects a sag value onto vertical and horizontal axes.
#[must_use]
pub fn swing_components(sag: Length, blowout: Angle) -> SagComponents {
    let theta = blowout.get::<radian>();

    SagComponents {
        total: sag,
        vertical: sag * theta.cos(),
        horizontal: sag * theta.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use uom::si::angle::degree;

    fn span(m: f64) -> Constrained<Length, StrictlyPositive> {
        StrictlyPositive::new(Length::new::<meter>(m)).unwrap()
    }

    #[test]
    fn matches_the_cosh_formula() {
        let sag = sag(
            span(300.0),
            ResultantLoad::new(20.0).unwrap(),
            HorizontalTension::new::<newton>(10_000.0).unwrap(),
        )
        .unwrap();

        let x: f64 = 300.0 * 20.0 / (2.0 * 10_000.0);
        let expected = (10_000.0 / 20.0) * (x.cosh() - 1.0);
        assert_relative_eq!(sag.get::<meter>(), expected, epsilon = 1e-12);
    }

    #[test]
    fn shallow_spans_agree_with_the_parabola() {
        let s = span(10.0);
        let load = ResultantLoad::new(1.0).unwrap();
        let tension = HorizontalTension::new::<newton>(1.0e6).unwrap();

        // S·W/2H = 5e-6, far below any cancellation threshold.
        let exact = sag(s, load, tension).unwrap();
        let parabolic = parabolic_sag(s, load, tension);

        assert_relative_eq!(
            exact.get::<meter>(),
            parabolic.get::<meter>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn deep_spans_exceed_the_parabola() {
        let s = span(1_000.0);
        let load = ResultantLoad::new(30.0).unwrap();
        let tension = HorizontalTension::new::<newton>(5_000.0).unwrap();

        let exact = sag(s, load, tension).unwrap();
        let parabolic = parabolic_sag(s, load, tension);

        assert!(exact > parabolic);
    }

    #[test]
    fn extreme_arguments_overflow_explicitly() {
        let result = sag(
            span(3_000.0),
            ResultantLoad::new(1.0e6).unwrap(),
            HorizontalTension::new::<newton>(1.0).unwrap(),
        );

        match result {
            Err(CatenaryError::ArgumentOverflow { argument }) => {
                assert_relative_eq!(argument, 1.5e9);
            }
            other => panic!("expected overflow, got {other:?}"),
        }
    }

    #[test]
    fn slack_or_compressive_tension_is_rejected_up_front() {
        assert!(HorizontalTension::new::<newton>(0.0).is_err());
        assert!(HorizontalTension::new::<newton>(-500.0).is_err());
        assert!(ResultantLoad::new(0.0).is_err());
        assert!(ResultantLoad::new(-1.0).is_err());
    }

    #[test]
    fn components_recombine_to_the_total() {
        let total = Length::new::<meter>(8.4);
        let components = swing_components(total, Angle::new::<degree>(30.0));

        let v = components.vertical.get::<meter>();
        let h = components.horizontal.get::<meter>();
        assert_relative_eq!((v * v + h * h).sqrt(), 8.4, epsilon = 1e-12);
    }

    #[test]
    fn no_swing_keeps_sag_vertical() {
        let total = Length::new::<meter>(5.0);
        let components = swing_components(total, Angle::new::<degree>(0.0));

        assert_relative_eq!(components.vertical.get::<meter>(), 5.0);
        assert_abs_diff_eq!(components.horizontal.get::<meter>(), 0.0);
    }
}
