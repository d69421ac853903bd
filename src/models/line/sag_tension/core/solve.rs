//! Core change-of-state solve.

mod error;

pub use error::SolveError;

use uom::si::{
    area::square_meter, f64::Force, force::newton, length::meter, pressure::pascal,
    temperature_coefficient::per_kelvin, temperature_interval::kelvin,
};

use crate::support::{
    cubic,
    span::{self, HorizontalTension, LoadCase},
    units::TemperatureDifference,
};

use super::{Known, Results, StateConstants, TensionSolution};

/// Solves the change of state described by `known`.
///
/// Computes both load cases, forms the governing cubic from elastic and
/// thermal strain compatibility, selects the admissible root, and
/// evaluates the final sag geometry.
///
/// # Errors
///
/// Returns [`SolveError`] when the cubic coefficients are not finite, no
/// admissible root exists, or the final catenary cannot be evaluated.
pub(in crate::models::line::sag_tension) fn solve(known: &Known) -> Result<Results, SolveError> {
    let cable = &known.span;

    let initial = LoadCase::compute(
        cable.unit_weight,
        cable.diameter,
        known.initial.weather.ice_thickness,
        known.initial.weather.wind_pressure,
    );
    let target = LoadCase::compute(
        cable.unit_weight,
        cable.diameter,
        known.target.ice_thickness,
        known.target.wind_pressure,
    );

    let s = cable.length.as_ref().get::<meter>();
    let e = cable.elastic_modulus.as_ref().get::<pascal>();
    let a = cable.cross_section.as_ref().get::<square_meter>();
    let alpha = cable.thermal_expansion.get::<per_kelvin>();

    let h1 = known.initial.tension.get::<newton>();
    let w1 = initial.resultant.value;
    let w2 = target.resultant.value;
    let delta_t = known
        .target
        .temperature
        .minus(known.initial.weather.temperature)
        .get::<kelvin>();

    let elastic_root = (e * a / 24.0).sqrt();
    let thermal_rate = alpha * e * a;

    // Strain compatibility between the two states reduces to
    // H₂³ + quadratic·H₂² − constant = 0.
    let quadratic = thermal_rate * delta_t + (w1 * s * elastic_root / h1).powi(2) - h1;
    let constant = (w2 * s * elastic_root).powi(2);

    let constants = StateConstants {
        elastic_root,
        thermal_rate,
        quadratic,
        constant,
    };

    if !quadratic.is_finite() || !constant.is_finite() {
        return Err(SolveError::NonFiniteCoefficients { constants });
    }

    let candidates = cubic::real_roots(quadratic, 0.0, -constant);

    let admissible: Vec<Force> = candidates
        .iter()
        .filter(|root| root.is_finite() && *root > 0.0)
        .map(Force::new::<newton>)
        .collect();

    let Some(selected) = admissible.iter().copied().reduce(Force::max) else {
        return Err(SolveError::NoAdmissibleTension {
            candidates,
            constants,
        });
    };

    let tension =
        HorizontalTension::from_quantity(selected).expect("admissible roots are strictly positive");

    let total_sag = span::sag(cable.length, target.resultant, tension)?;
    let sag = span::swing_components(total_sag, target.blowout);

    Ok(Results {
        initial,
        target,
        solution: TensionSolution {
            candidates,
            admissible,
            tension,
            constants,
        },
        sag,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use uom::si::{
        f64::{Area, Length, Pressure, TemperatureCoefficient, ThermodynamicTemperature},
        length::millimeter,
        pressure::gigapascal,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::models::line::sag_tension::core::{CableSpan, EquilibriumState, WeatherCase};
    use crate::support::units::newtons_per_meter;

    fn test_span() -> CableSpan {
        CableSpan::new(
            Length::new::<meter>(300.0),
            Length::new::<millimeter>(1.0),
            newtons_per_meter(14.72),
            Area::new::<square_meter>(4.032_25e-4),
            Pressure::new::<gigapascal>(79.0),
            TemperatureCoefficient::new::<per_kelvin>(1.9e-5),
        )
        .expect("span properties are physical")
    }

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn initial_at(temperature: f64, tension: f64) -> EquilibriumState {
        EquilibriumState {
            weather: WeatherCase::still_air(celsius(temperature)),
            tension: HorizontalTension::new::<newton>(tension).unwrap(),
        }
    }

    #[test]
    fn unchanged_conditions_keep_the_tension() {
        let known = Known {
            span: test_span(),
            initial: initial_at(25.0, 10_000.0),
            target: WeatherCase::still_air(celsius(25.0)),
        };

        let results = solve(&known).unwrap();

        assert_relative_eq!(
            results.solution.tension.get::<newton>(),
            10_000.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn solved_tension_satisfies_the_cubic() {
        let known = Known {
            span: test_span(),
            initial: initial_at(25.0, 10_000.0),
            target: WeatherCase::new(
                Length::new::<millimeter>(50.0),
                Pressure::new::<pascal>(10.0),
                celsius(40.0),
            )
            .unwrap(),
        };

        let results = solve(&known).unwrap();
        let solution = &results.solution;

        let h2 = solution.tension.get::<newton>();
        let scale = h2.powi(3);
        assert_abs_diff_eq!(
            solution.constants.residual(h2) / scale,
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn heavy_ice_raises_tension_and_swings_the_span() {
        let known = Known {
            span: test_span(),
            initial: initial_at(25.0, 10_000.0),
            target: WeatherCase::new(
                Length::new::<millimeter>(50.0),
                Pressure::new::<pascal>(10.0),
                celsius(40.0),
            )
            .unwrap(),
        };

        let results = solve(&known).unwrap();

        // One admissible root: the coefficient signs allow a single
        // positive real root whenever the target load is nonzero.
        assert_eq!(results.solution.admissible.len(), 1);

        // Ice load dominates the bare weight, so tension climbs well above
        // the initial 10 kN.
        let h2 = results.solution.tension.get::<newton>();
        assert!(h2 > 10_000.0, "expected tension rise, got {h2}");

        // Wind is light relative to 86 N/m of gravity load, so the swing
        // is under a degree and the vertical sag dominates.
        assert!(results.sag.vertical < results.sag.total);
        assert!(results.sag.horizontal.get::<meter>() > 0.0);
        assert!(results.sag.vertical.get::<meter>() > 0.0);
    }

    #[test]
    fn heating_slackens_an_unchanged_load() {
        let cool = Known {
            span: test_span(),
            initial: initial_at(25.0, 10_000.0),
            target: WeatherCase::still_air(celsius(25.0)),
        };
        let hot = Known {
            span: test_span(),
            initial: initial_at(25.0, 10_000.0),
            target: WeatherCase::still_air(celsius(40.0)),
        };

        let tension_cool = solve(&cool).unwrap().solution.tension.get::<newton>();
        let tension_hot = solve(&hot).unwrap().solution.tension.get::<newton>();

        assert!(
            tension_hot < tension_cool,
            "heating must slacken the span: {tension_hot} vs {tension_cool}"
        );
    }

    #[test]
    fn cooling_tightens_an_unchanged_load() {
        let cold = Known {
            span: test_span(),
            initial: initial_at(25.0, 10_000.0),
            target: WeatherCase::still_air(celsius(-20.0)),
        };

        let tension_cold = solve(&cold).unwrap().solution.tension.get::<newton>();
        assert!(tension_cold > 10_000.0);
    }

    #[test]
    fn sag_grows_when_the_span_heats() {
        let cool = Known {
            span: test_span(),
            initial: initial_at(25.0, 10_000.0),
            target: WeatherCase::still_air(celsius(25.0)),
        };
        let hot = Known {
            span: test_span(),
            initial: initial_at(25.0, 10_000.0),
            target: WeatherCase::still_air(celsius(60.0)),
        };

        let sag_cool = solve(&cool).unwrap().sag.total.get::<meter>();
        let sag_hot = solve(&hot).unwrap().sag.total.get::<meter>();

        assert!(sag_hot > sag_cool);
    }

    #[test]
    fn non_finite_coefficients_are_a_typed_outcome() {
        // An absurd modulus overflows the constant term of the cubic.
        let span = CableSpan::new(
            Length::new::<meter>(300.0),
            Length::new::<millimeter>(1.0),
            newtons_per_meter(14.72),
            Area::new::<square_meter>(4.032_25e-4),
            Pressure::new::<pascal>(1.0e308),
            TemperatureCoefficient::new::<per_kelvin>(1.9e-5),
        )
        .unwrap();

        let known = Known {
            span,
            initial: initial_at(25.0, 10_000.0),
            target: WeatherCase::still_air(celsius(25.0)),
        };

        match solve(&known) {
            Err(SolveError::NonFiniteCoefficients { .. }) => {}
            other => panic!("expected non-finite coefficients, got {other:?}"),
        }
    }

    #[test]
    fn audit_constants_match_their_definitions() {
        let known = Known {
            span: test_span(),
            initial: initial_at(25.0, 10_000.0),
            target: WeatherCase::still_air(celsius(40.0)),
        };

        let constants = solve(&known).unwrap().solution.constants;

        let ea: f64 = 79.0e9 * 4.032_25e-4;
        assert_relative_eq!(constants.elastic_root, (ea / 24.0).sqrt(), epsilon = 1e-9);
        assert_relative_eq!(constants.thermal_rate, 1.9e-5 * ea, epsilon = 1e-9);

        let expected_quadratic = constants.thermal_rate * 15.0
            + (14.72 * 300.0 * constants.elastic_root / 10_000.0).powi(2)
            - 10_000.0;
        assert_relative_eq!(constants.quadratic, expected_quadratic, max_relative = 1e-12);

        let expected_constant = (14.72 * 300.0 * constants.elastic_root).powi(2);
        assert_relative_eq!(constants.constant, expected_constant, max_relative = 1e-12);
    }
}
