//! Pure geometry and density calculators over a [`Star`] and
//! [`DoleConstants`], per spec §4.2. None of these functions hold or
//! mutate state; they are plain functions of their arguments so the
//! accretion driver can call them freely without owning a calculator
//! object.

use crate::consts::{DoleConstants, Star};

/// Surface dust density at a given orbital radius, monotonically decreasing
/// with distance from the star: `A * exp(-alpha * axis^(1/gamma))`.
#[must_use]
pub fn dust_density(axis: f64, consts: &DoleConstants) -> f64 {
    debug_assert!(axis > 0.0);
    let exponent = axis.powf(1.0 / consts.dust_density_gamma);
    consts.dust_density_coeff * (-consts.dust_density_alpha * exponent).exp()
}

/// Gas-capture threshold at a given orbit and eccentricity: decreases with
/// increasing perihelion luminosity, so bodies closer to a bright star need
/// more mass before they can hold on to gas.
#[must_use]
pub fn critical_mass(axis: f64, ecc: f64, stellar_luminosity: f64, consts: &DoleConstants) -> f64 {
    debug_assert!((0.0..1.0).contains(&ecc));
    let perihelion_dist = axis * (1.0 - ecc);
    consts.critical_mass_b * (perihelion_dist * stellar_luminosity.sqrt()).powf(-0.75)
}

/// The classic Dole reduced-mass term: how much a protoplanet's own gravity
/// widens its reach beyond its bare orbit, as a fraction of the semi-major
/// axis. Grows toward 1 as `mass` grows relative to the star.
fn reduced_margin(mass: f64) -> f64 {
    (mass / (1.0 + mass)).powf(0.25)
}

/// Inner edge of the radial annulus a protoplanet sweeps clean in one
/// orbit. Clamped to 0 for sampling purposes per spec §4.2's edge-case
/// policy.
#[must_use]
pub fn inner_sweep_limit(axis: f64, ecc: f64, mass: f64) -> f64 {
    let margin = reduced_margin(mass);
    (axis * (1.0 - ecc) * (1.0 - margin)).max(0.0)
}

/// Outer edge of the radial annulus a protoplanet sweeps clean in one
/// orbit.
#[must_use]
pub fn outer_sweep_limit(axis: f64, ecc: f64, mass: f64) -> f64 {
    let margin = reduced_margin(mass);
    axis * (1.0 + ecc) * (1.0 + margin)
}

/// Widens the sweep annulus' reduced-mass margin by a Hill-sphere-like term
/// for use in the gravitational annulus used for collision detection.
/// Mirrors the `hill_sphere_limit` computation used elsewhere in this
/// workspace for moon/planet separation, scaled by the stellar mass ratio.
/// Always `>= reduced_margin(mass)` so the gravitational annulus is never
/// narrower than the sweep annulus it widens.
fn grav_margin(mass: f64, star: &Star, grav_k: f64) -> f64 {
    let hill_term = (mass / (3.0 * (mass + star.mass))).cbrt();
    reduced_margin(mass) + grav_k * hill_term
}

/// Inner edge of the wider gravitational annulus used by the driver's
/// `too_close` merge test.
#[must_use]
pub fn inner_grav_limit(axis: f64, ecc: f64, mass: f64, star: &Star, consts: &DoleConstants) -> f64 {
    let margin = grav_margin(mass, star, consts.grav_k);
    (axis * (1.0 - ecc) * (1.0 - margin)).max(0.0)
}

/// Outer edge of the wider gravitational annulus used by the driver's
/// `too_close` merge test.
#[must_use]
pub fn outer_grav_limit(axis: f64, ecc: f64, mass: f64, star: &Star, consts: &DoleConstants) -> f64 {
    let margin = grav_margin(mass, star, consts.grav_k);
    axis * (1.0 + ecc) * (1.0 + margin)
}

/// Initial disc outer edge: bigger for more massive stars.
#[must_use]
pub fn outer_dust_limit(stellar_mass: f64) -> f64 {
    debug_assert!(stellar_mass > 0.0);
    200.0 * stellar_mass.cbrt()
}

/// Effective swept volume of the intersection between a protoplanet's
/// sweep annulus and one dust band; `0.0` when the two don't overlap.
///
/// The overlap uses the driver's edge-case convention (spec §4.6): a band
/// overlaps the sweep annulus when `band.outer_edge > sweep_inner &&
/// band.inner_edge < sweep_outer`.
#[must_use]
pub fn band_volume(
    _mass: f64,
    axis: f64,
    ecc: f64,
    sweep_inner: f64,
    sweep_outer: f64,
    band_inner: f64,
    band_outer: f64,
) -> f64 {
    if !(band_outer > sweep_inner && band_inner < sweep_outer) {
        return 0.0;
    }
    let clipped_inner = sweep_inner.max(band_inner);
    let clipped_outer = sweep_outer.min(band_outer);
    let width = (clipped_outer - clipped_inner).max(0.0);
    // A thin torus of radius `axis` and radial width `width`; eccentricity
    // reduces the swept volume because the body spends more of its orbit
    // away from the circular approximation.
    2.0 * crate::consts::float::PI * axis * width * (1.0 - ecc * ecc).sqrt()
}

/// Amplifies dust density with a gas contribution once a body is
/// super-critical (spec §4.2). Below the critical mass this is the
/// identity on `dust_density`; the amplification factor is continuous at
/// `mass == critical_mass` (factor `1.0`) and approaches `gas_to_dust_ratio`
/// as `mass` grows far beyond `critical_mass`.
#[must_use]
pub fn dust_and_gas_density(
    dust_density: f64,
    critical_mass: f64,
    mass: f64,
    consts: &DoleConstants,
) -> f64 {
    if mass <= critical_mass {
        return dust_density;
    }
    let k = consts.gas_to_dust_ratio;
    k * dust_density / (1.0 + (k - 1.0) * (critical_mass / mass).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn dust_density_decreases_outward() {
        let consts = DoleConstants::default();
        assert!(dust_density(1.0, &consts) > dust_density(10.0, &consts));
    }

    #[test]
    fn critical_mass_decreases_with_luminosity() {
        let consts = DoleConstants::default();
        assert!(critical_mass(1.0, 0.0, 4.0, &consts) < critical_mass(1.0, 0.0, 1.0, &consts));
    }

    #[test]
    fn sweep_limit_brackets_axis() {
        let axis = 1.0;
        let ecc = 0.1;
        let mass = 1e-6;
        assert!(inner_sweep_limit(axis, ecc, mass) <= axis);
        assert!(outer_sweep_limit(axis, ecc, mass) >= axis);
    }

    #[test]
    fn sweep_limit_never_goes_negative_even_at_high_eccentricity() {
        assert!(inner_sweep_limit(0.01, 0.999, 1e-10) >= 0.0);
        assert!(inner_sweep_limit(0.01, 0.999_999, 50.0) >= 0.0);
    }

    #[test]
    fn grav_limit_is_wider_than_sweep_limit() {
        let star = Star::sol();
        let consts = DoleConstants::default();
        let axis = 1.0;
        let ecc = 0.1;
        let mass = 1e-3;
        assert!(inner_grav_limit(axis, ecc, mass, &star, &consts) <= inner_sweep_limit(axis, ecc, mass));
        assert!(outer_grav_limit(axis, ecc, mass, &star, &consts) >= outer_sweep_limit(axis, ecc, mass));
    }

    #[test]
    fn band_volume_zero_when_disjoint() {
        assert_float_absolute_eq!(band_volume(1e-6, 1.0, 0.1, 0.5, 0.9, 1.0, 2.0), 0.0, 1e-12);
    }

    #[test]
    fn band_volume_positive_when_overlapping() {
        assert!(band_volume(1e-6, 1.0, 0.1, 0.5, 1.5, 0.0, 2.0) > 0.0);
    }

    #[test]
    fn gas_amplification_continuous_at_threshold() {
        let consts = DoleConstants::default();
        let dust = 0.01;
        let critical = 1e-6;
        assert_float_absolute_eq!(
            dust_and_gas_density(dust, critical, critical, &consts),
            dust,
            1e-12
        );
        assert!(dust_and_gas_density(dust, critical, critical * 10.0, &consts) > dust);
    }
}
