//! The forming body (spec §3's `ProtoPlanet`). Derived geometry is computed
//! on demand from `(axis, ecc, mass)` plus, where a star's gravity matters,
//! a [`Star`] and [`DoleConstants`] passed in explicitly. Per spec §9's
//! design note, nothing here holds a back-reference to a calculator: that
//! would reintroduce the cyclic ownership the design notes call out as
//! something to avoid.

use serde::{Deserialize, Serialize};

use crate::consts::{DoleConstants, Star};
use crate::geometry;

/// A forming body: semi-major axis, eccentricity, and mass, with every
/// other attribute computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProtoPlanet {
    /// Semi-major axis, in AU. Always `> 0`.
    pub axis: f64,
    /// Orbital eccentricity, `0 <= ecc < 1`.
    pub ecc: f64,
    /// Mass, in solar masses. Non-decreasing during a single accretion
    /// phase (spec §3's invariant).
    pub mass: f64,
}

impl ProtoPlanet {
    /// Creates a new protoplanet with the given orbital elements and seed
    /// mass.
    #[must_use]
    pub fn new(axis: f64, ecc: f64, mass: f64) -> Self {
        debug_assert!(axis > 0.0);
        debug_assert!((0.0..1.0).contains(&ecc));
        debug_assert!(mass > 0.0);
        Self { axis, ecc, mass }
    }

    /// Inner edge of the annulus this body sweeps clean in one orbit.
    #[must_use]
    pub fn inner_sweep_limit(&self) -> f64 {
        geometry::inner_sweep_limit(self.axis, self.ecc, self.mass)
    }

    /// Outer edge of the annulus this body sweeps clean in one orbit.
    #[must_use]
    pub fn outer_sweep_limit(&self) -> f64 {
        geometry::outer_sweep_limit(self.axis, self.ecc, self.mass)
    }

    /// Inner edge of the wider annulus used to test for gravitational
    /// overlap with a neighbor.
    #[must_use]
    pub fn inner_grav_limit(&self, star: &Star, consts: &DoleConstants) -> f64 {
        geometry::inner_grav_limit(self.axis, self.ecc, self.mass, star, consts)
    }

    /// Outer edge of the wider annulus used to test for gravitational
    /// overlap with a neighbor.
    #[must_use]
    pub fn outer_grav_limit(&self, star: &Star, consts: &DoleConstants) -> f64 {
        geometry::outer_grav_limit(self.axis, self.ecc, self.mass, star, consts)
    }

    /// The gas-capture threshold at this body's current orbit.
    #[must_use]
    pub fn critical_mass(&self, star: &Star, consts: &DoleConstants) -> f64 {
        geometry::critical_mass(self.axis, self.ecc, star.luminosity, consts)
    }

    /// True once this body has accreted enough mass to hold on to gas and
    /// become a gas giant.
    #[must_use]
    pub fn is_gas_giant(&self, star: &Star, consts: &DoleConstants) -> bool {
        self.mass > self.critical_mass(star, consts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_limit_brackets_axis() {
        let proto = ProtoPlanet::new(2.0, 0.2, 1e-6);
        assert!(proto.inner_sweep_limit() <= proto.axis);
        assert!(proto.outer_sweep_limit() >= proto.axis);
    }

    #[test]
    fn low_mass_body_is_not_a_gas_giant() {
        let star = Star::sol();
        let consts = DoleConstants::default();
        let proto = ProtoPlanet::new(1.0, 0.0, 1e-15);
        assert!(!proto.is_gas_giant(&star, &consts));
    }

    #[test]
    fn sufficiently_massive_body_becomes_a_gas_giant() {
        let star = Star::sol();
        let consts = DoleConstants::default();
        let proto = ProtoPlanet::new(5.0, 0.0, 1.0);
        assert!(proto.is_gas_giant(&star, &consts));
    }
}
