use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Force, Length},
        force::newton,
        length::meter,
    },
    typenum::{N2, P1, Z0},
};

/// Distributed load along a span, N/m in SI.
///
/// Conductor self-weight, ice weight, and wind load are all expressed as
/// force per unit length of span.
pub type LineLoad = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`LineLoad`] from a value in newtons per meter.
///
/// `uom` has no named unit for force per length, so this constructor stands
/// in for `LineLoad::new::<newton_per_meter>`.
#[must_use]
pub fn newtons_per_meter(value: f64) -> LineLoad {
    Force::new::<newton>(value) / Length::new::<meter>(1.0)
}
