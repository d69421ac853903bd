mod cable_span;
mod known;
mod weather;

pub use cable_span::CableSpan;
pub use known::{EquilibriumState, Known};
pub use weather::WeatherCase;
