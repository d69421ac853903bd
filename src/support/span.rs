//! Overhead span analysis toolkit.
//!
//! This module provides general-purpose utilities for a single conductor
//! span: the distributed loads produced by ice accretion and wind pressure,
//! and the catenary geometry those loads produce at a given horizontal
//! tension.
//!
//! # Overview
//!
//! A bare conductor hangs under its own weight. Radial ice adds vertical
//! load; wind pressure on the iced silhouette adds transverse load. The
//! vector sum of the two acts in a swung plane, tilted from vertical by the
//! blowout angle, and the cable shape in that plane is a catenary set by the
//! resultant load and the horizontal tension.
//!
//! This toolkit provides:
//!
//! - **Core types**: [`LoadCase`], [`ResultantLoad`], [`HorizontalTension`]
//! - **Load functions**: [`ice_weight`], [`wind_weight`], [`resultant`],
//!   [`blowout_angle`]
//! - **Geometry functions**: [`sag`], [`parabolic_sag`], [`swing_components`]
//!
//! # Example
//!
//! ```
//! use catenary_models::support::constraint::{
//!     ConstraintResult, NonNegative, StrictlyPositive,
//! };
//! use catenary_models::support::span::{HorizontalTension, LoadCase, sag};
//! use catenary_models::support::units::newtons_per_meter;
//! use uom::si::{
//!     f64::{Length, Pressure},
//!     force::newton,
//!     length::{meter, millimeter},
//!     pressure::pascal,
//! };
//!
//! fn main() -> ConstraintResult<()> {
//!     let loads = LoadCase::compute(
//!         StrictlyPositive::new(newtons_per_meter(10.3))?,
//!         StrictlyPositive::new(Length::new::<millimeter>(28.1))?,
//!         NonNegative::new(Length::new::<millimeter>(12.7))?,
//!         NonNegative::new(Pressure::new::<pascal>(190.0))?,
//!     );
//!
//!     let midspan_sag = sag(
//!         StrictlyPositive::new(Length::new::<meter>(250.0))?,
//!         loads.resultant,
//!         HorizontalTension::new::<newton>(12_000.0)?,
//!     )
//!     .expect("tension is high enough to evaluate");
//!
//!     assert!(midspan_sag.get::<meter>() > 0.0);
//!     Ok(())
//! }
//! ```

mod catenary;
mod loading;

pub use catenary::{
    CatenaryError, HorizontalTension, SagComponents, parabolic_sag, sag, swing_components,
};
pub use loading::{
    LoadCase, LoadingError, ResultantLoad, blowout_angle, ice_weight, resultant, wind_weight,
};
