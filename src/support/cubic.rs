//! Closed-form real roots of monic cubic polynomials.
//!
//! Solves `x³ + a₂·x² + a₁·x + a₀ = 0` by shifting to the depressed cubic
//! `t³ + p·t + q = 0` and classifying its discriminant, instead of handing
//! the polynomial to an iterative or symbolic solver. The evaluation cost is
//! O(1) and deterministic.
//!
//! Only real roots are materialized. When the discriminant indicates a
//! complex-conjugate pair, the returned [`CubicRoots::One`] variant records
//! that the other two roots are not real.

use std::f64::consts::PI;

/// Real roots of a monic cubic, classified by its discriminant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CubicRoots {
    /// One real root; the other two form a complex-conjugate pair.
    One(f64),

    /// A simple real root and a double real root.
    Double { simple: f64, double: f64 },

    /// A single real root of multiplicity three.
    Triple(f64),

    /// Three distinct real roots, in ascending order.
    Three([f64; 3]),
}

impl CubicRoots {
    /// Iterates over the distinct real roots.
    pub fn iter(self) -> impl Iterator<Item = f64> {
        let (roots, len) = match self {
            Self::One(r) | Self::Triple(r) => ([r, 0.0, 0.0], 1),
            Self::Double { simple, double } => ([simple, double, 0.0], 2),
            Self::Three(r) => (r, 3),
        };
        roots.into_iter().take(len)
    }
}

/// Computes the real roots of `x³ + a2·x² + a1·x + a0`.
///
/// The substitution `x = t − a2/3` produces the depressed cubic
/// `t³ + p·t + q` with discriminant `Δ = (q/2)² + (p/3)³`:
///
/// - `Δ > 0`: one real root, from Cardano's formula in the
///   `u − p/(3u)` form (avoids cancellation between the cube roots);
/// - `Δ = 0`: repeated roots, directly from `p` and `q`;
/// - `Δ < 0`: three distinct real roots, from Viète's trigonometric form.
#[must_use]
pub fn real_roots(a2: f64, a1: f64, a0: f64) -> CubicRoots {
    let shift = a2 / 3.0;
    let p = a1 - a2 * a2 / 3.0;
    let q = a2 * (2.0 * a2 * a2 - 9.0 * a1) / 27.0 + a0;

    let half_q = 0.5 * q;
    let third_p = p / 3.0;
    let disc = half_q * half_q + third_p.powi(3);

    if p == 0.0 && q == 0.0 {
        return CubicRoots::Triple(-shift);
    }

    if disc > 0.0 {
        // Pick the larger-magnitude cube-root operand so u never cancels.
        let sqrt_disc = disc.sqrt();
        let r = if q <= 0.0 {
            -half_q + sqrt_disc
        } else {
            -half_q - sqrt_disc
        };
        let u = r.cbrt();
        return CubicRoots::One(u - third_p / u - shift);
    }

    if disc == 0.0 {
        // p is nonzero here, so both repeated-root expressions are defined.
        return CubicRoots::Double {
            simple: 3.0 * q / p - shift,
            double: -1.5 * q / p - shift,
        };
    }

    // Δ < 0 requires p < 0, so the trigonometric form applies.
    let m = 2.0 * (-third_p).sqrt();
    let acos_arg = (3.0 * q / (p * m)).clamp(-1.0, 1.0);
    let phi = acos_arg.acos();

    let mut roots = [
        m * (phi / 3.0).cos() - shift,
        m * ((phi + 2.0 * PI) / 3.0).cos() - shift,
        m * ((phi + 4.0 * PI) / 3.0).cos() - shift,
    ];
    roots.sort_by(f64::total_cmp);
    CubicRoots::Three(roots)
}
