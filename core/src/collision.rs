//! Coalescence formulae used when two protoplanets are judged too close
//! (spec §4.4). Both are mass-weighted conservation laws: linear for the
//! axis, angular-momentum for the eccentricity.

use crate::protoplanet::ProtoPlanet;

/// Mass-weighted mean semi-major axis of the coalesced body.
#[must_use]
pub fn coalesce_axis(mass_a: f64, axis_a: f64, mass_b: f64, axis_b: f64) -> f64 {
    (mass_a * axis_a + mass_b * axis_b) / (mass_a + mass_b)
}

/// Eccentricity of the coalesced body, from conservation of angular
/// momentum in the two-body reduced system: each body contributes
/// `m * sqrt(a * (1 - e^2))` to the total, which is divided by the new
/// mass and axis to recover the new eccentricity.
///
/// Rounding can occasionally push the argument of the final `sqrt` slightly
/// negative; spec §7 calls this out as mathematical degeneracy to clamp
/// silently rather than propagate as an error.
#[must_use]
pub fn coalesce_eccentricity(mass_a: f64, axis_a: f64, ecc_a: f64, mass_b: f64, axis_b: f64, ecc_b: f64) -> f64 {
    let angular_momentum = mass_a * (axis_a * (1.0 - ecc_a * ecc_a)).sqrt()
        + mass_b * (axis_b * (1.0 - ecc_b * ecc_b)).sqrt();
    let total_mass = mass_a + mass_b;
    let new_axis = coalesce_axis(mass_a, axis_a, mass_b, axis_b);

    let term = angular_momentum / (total_mass * new_axis.sqrt());
    (1.0 - term * term).max(0.0).sqrt()
}

/// Coalesces two protoplanets into the union body described in spec §4.4:
/// mass-weighted axis, angular-momentum-conserving eccentricity, and
/// summed mass.
#[must_use]
pub fn coalesce(a: &ProtoPlanet, b: &ProtoPlanet) -> ProtoPlanet {
    let axis = coalesce_axis(a.mass, a.axis, b.mass, b.axis);
    let ecc = coalesce_eccentricity(a.mass, a.axis, a.ecc, b.mass, b.axis, b.ecc);
    let mass = a.mass + b.mass;
    ProtoPlanet::new(axis, ecc, mass)
}
