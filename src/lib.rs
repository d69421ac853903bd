//! # Catenary Models
//!
//! Opinionated sag-tension and conductor loading models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The crate computes the mechanical state of a single overhead conductor
//! span under combined ice, wind, and thermal loading: distributed loads and
//! swing angle, catenary sag, and the new equilibrium horizontal tension
//! after a change of state (added load, temperature change, or both).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Scope
//!
//! Every operation is a pure function of its inputs. The crate performs no
//! I/O, no logging, and holds no state between calls; request handling,
//! default substitution, and presentation rounding belong to the caller.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code in this crate follows a natural progression as needs emerge:
//!
//! 1. **Model-specific**: Starts in a model's internal `core` module
//! 2. **Domain-specific**: If useful across models in a domain (e.g., `span`),
//!    it moves to a domain-level support module
//! 3. **Crate-level**: If useful across multiple domains or potentially useful
//!    outside this crate, it moves to [`support`]
//! 4. **Standalone**: If broadly useful and stable, it may become its own crate
//!    (and be removed from here in a future release)

pub mod models;
pub mod support;
