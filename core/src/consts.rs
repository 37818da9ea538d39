use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Constants shared with [`crate::Float`] style libraries that need
/// full-precision transcendental constants.
pub mod float {
    pub use core::f64::consts::*;
}

/// Gravitational constant, solar masses / AU^3 / year^2 (Gaussian form, `k^2`).
pub const GRAVITATIONAL_CONSTANT: f64 = 0.000_295_912_208_284;

/// A primary star, as produced by the (external) stellar generator.
///
/// This crate only reads `mass` and `luminosity`; everything else about a
/// star (spectral class, age, colour, ...) is the stellar generator's
/// business, not the accretion engine's.
#[derive(Debug, Clone, Copy, PartialEq, Builder, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct Star {
    /// Mass of the star, in solar masses.
    pub mass: f64,
    /// Luminosity of the star, in solar luminosities.
    pub luminosity: f64,
}

impl StarBuilder {
    /// Rejects non-physical stars at construction time (spec §7,
    /// "Configuration errors... fail fast at construction").
    fn validate(&self) -> Result<(), String> {
        if self.mass.is_some_and(|m| m <= 0.0) {
            return Err("star mass must be positive".to_string());
        }
        if self.luminosity.is_some_and(|l| l <= 0.0) {
            return Err("star luminosity must be positive".to_string());
        }
        Ok(())
    }
}

impl Star {
    /// A sun-like star, useful for examples and tests.
    #[must_use]
    pub fn sol() -> Self {
        Self {
            mass: 1.0,
            luminosity: 1.0,
        }
    }
}

/// The accretion constants that parameterize one run: the "profile" bundle
/// from spec §6. Defaults reproduce the classic Dole/Fogg `accrete`
/// constants.
#[derive(Debug, Clone, Copy, PartialEq, Builder, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"), default)]
#[serde(default)]
pub struct DoleConstants {
    /// Innermost legal orbit for a planet, in AU.
    pub innermost_planet: f64,
    /// Outermost legal orbit for a planet, in AU.
    pub outermost_planet: f64,
    /// Seed mass given to every freshly injected planetesimal, in solar
    /// masses.
    pub protoplanet_mass: f64,
    /// Exponent `Q` in the eccentricity distribution `1 - U^Q`.
    pub eccentricity_coeff: f64,
    /// Dust-density scale factor `A` in `A * exp(-alpha * axis^(1/gamma))`.
    pub dust_density_coeff: f64,
    /// Exponential decay rate `alpha` in the dust-density law.
    pub dust_density_alpha: f64,
    /// Root exponent `gamma` in the dust-density law.
    pub dust_density_gamma: f64,
    /// Scalar multiplier applied to the Hill-sphere term when widening the
    /// sweep annulus into the gravitational annulus used for collision
    /// detection (spec §4.2's "wider bracket used for collision detection").
    pub grav_k: f64,
    /// Scalar `B` controlling the critical mass threshold for gas capture.
    pub critical_mass_b: f64,
    /// Gas-to-dust amplification ratio `K` applied by
    /// [`crate::geometry::dust_and_gas_density`] once a body is
    /// super-critical.
    pub gas_to_dust_ratio: f64,
    /// Number of injections that use uniform sampling across the whole
    /// legal range before switching to dust-weighted band sampling.
    pub randomised_count: u32,
    /// Safety bound on injections per run before the driver aborts with
    /// [`Error::NonTerminating`].
    pub injection_limit: u32,
}

impl Default for DoleConstants {
    fn default() -> Self {
        Self {
            innermost_planet: 0.3,
            outermost_planet: 50.0,
            protoplanet_mass: 1e-15,
            eccentricity_coeff: 0.077,
            dust_density_coeff: 0.001_5,
            dust_density_alpha: 5.0,
            dust_density_gamma: 3.0,
            grav_k: 1.0,
            critical_mass_b: 1.2e-5,
            gas_to_dust_ratio: 50.0,
            randomised_count: 20,
            injection_limit: 10_000,
        }
    }
}

impl DoleConstantsBuilder {
    /// Rejects degenerate constants at construction time (spec §7).
    fn validate(&self) -> Result<(), String> {
        let innermost = self.innermost_planet.unwrap_or(0.3);
        let outermost = self.outermost_planet.unwrap_or(50.0);
        if innermost >= outermost {
            return Err("innermost_planet must be < outermost_planet".to_string());
        }
        if innermost <= 0.0 {
            return Err("innermost_planet must be positive".to_string());
        }
        if self.protoplanet_mass.unwrap_or(1e-15) <= 0.0 {
            return Err("protoplanet_mass must be positive".to_string());
        }
        if self.eccentricity_coeff.unwrap_or(0.077) <= 0.0 {
            return Err("eccentricity_coeff must be positive".to_string());
        }
        if self.dust_density_coeff.unwrap_or(0.001_5) <= 0.0 {
            return Err("dust_density_coeff must be positive".to_string());
        }
        if self.dust_density_alpha.unwrap_or(5.0) <= 0.0 {
            return Err("dust_density_alpha must be positive".to_string());
        }
        if self.critical_mass_b.unwrap_or(1.2e-5) <= 0.0 {
            return Err("critical_mass_b must be positive".to_string());
        }
        if self.gas_to_dust_ratio.unwrap_or(50.0) <= 0.0 {
            return Err("gas_to_dust_ratio must be positive".to_string());
        }
        Ok(())
    }
}

impl DoleConstants {
    /// Validates an already-built set of constants, for callers that
    /// construct `Self` directly (e.g. deserialized from JSON) instead of
    /// going through [`DoleConstantsBuilder`].
    pub fn validate(&self) -> Result<(), Error> {
        if self.innermost_planet >= self.outermost_planet {
            return Err(Error::InvalidConstants(
                "innermost_planet must be < outermost_planet",
            ));
        }
        if self.innermost_planet <= 0.0 {
            return Err(Error::InvalidConstants("innermost_planet must be positive"));
        }
        if self.protoplanet_mass <= 0.0 {
            return Err(Error::InvalidConstants("protoplanet_mass must be positive"));
        }
        if self.eccentricity_coeff <= 0.0 {
            return Err(Error::InvalidConstants(
                "eccentricity_coeff must be positive",
            ));
        }
        if self.dust_density_coeff <= 0.0 {
            return Err(Error::InvalidConstants(
                "dust_density_coeff must be positive",
            ));
        }
        if self.dust_density_alpha <= 0.0 {
            return Err(Error::InvalidConstants(
                "dust_density_alpha must be positive",
            ));
        }
        if self.critical_mass_b <= 0.0 {
            return Err(Error::InvalidConstants("critical_mass_b must be positive"));
        }
        if self.gas_to_dust_ratio <= 0.0 {
            return Err(Error::InvalidConstants(
                "gas_to_dust_ratio must be positive",
            ));
        }
        Ok(())
    }
}
