use crate::support::span::HorizontalTension;

use super::{CableSpan, WeatherCase};

/// A weather case together with the horizontal tension that balances it.
#[derive(Debug, Clone, Copy)]
pub struct EquilibriumState {
    /// The ambient condition.
    pub weather: WeatherCase,

    /// Horizontal tension in that condition.
    pub tension: HorizontalTension,
}

/// Core inputs for a change-of-state computation.
///
/// The initial state is a known equilibrium; the target weather is the
/// condition to re-solve for. Combined with the span description, these
/// inputs define the problem completely.
#[derive(Debug, Clone, Copy)]
pub struct Known {
    /// Span geometry and conductor properties.
    pub span: CableSpan,

    /// The known equilibrium.
    pub initial: EquilibriumState,

    /// The condition to solve for.
    pub target: WeatherCase,
}
