//! Core change-of-state solver for a single span.
//!
//! The change of state balances elastic stretch, thermal expansion, and
//! catenary elongation between two equilibrium conditions of the same
//! span, which reduces to a cubic in the final horizontal tension. The
//! cubic is solved in closed form and the admissible root is handed back
//! to the catenary geometry.

mod input;
mod results;
mod solve;

pub use input::{CableSpan, EquilibriumState, Known, WeatherCase};
pub use results::{Results, StateConstants, TensionSolution};
pub use solve::SolveError;

pub(super) use solve::solve;
