use thiserror::Error;

use crate::models::line::sag_tension::core::StateConstants;
use crate::support::{cubic::CubicRoots, span::CatenaryError};

/// Errors that can occur while solving a change of state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The governing cubic has no real, finite, strictly positive root, so
    /// no physical equilibrium tension exists for the requested condition.
    ///
    /// This is a reportable outcome of the computation, not a numeric
    /// failure; the rejected roots and the constants behind the cubic are
    /// carried for diagnosis.
    #[error("no admissible tension: the governing cubic has no positive real root")]
    NoAdmissibleTension {
        /// Real roots that were found and rejected.
        candidates: CubicRoots,

        /// Constants behind the cubic.
        constants: StateConstants,
    },

    /// A cubic coefficient overflowed `f64` or is otherwise not a number,
    /// so root finding was not attempted.
    #[error("change-of-state coefficients are not finite")]
    NonFiniteCoefficients {
        /// The offending constants.
        constants: StateConstants,
    },

    /// The final catenary could not be evaluated at the solved tension.
    #[error(transparent)]
    Catenary(#[from] CatenaryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let constants = StateConstants {
            elastic_root: 0.0,
            thermal_rate: 0.0,
            quadratic: f64::NAN,
            constant: 0.0,
        };

        let error = SolveError::NonFiniteCoefficients { constants };
        assert!(error.to_string().contains("not finite"));

        let error = SolveError::NoAdmissibleTension {
            candidates: CubicRoots::One(-1.0),
            constants,
        };
        assert!(error.to_string().contains("no admissible tension"));
    }
}
