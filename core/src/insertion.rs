//! Sampling strategy for new planetesimal candidates (spec §4.3). Early
//! injections explore the whole disc; later injections bias toward
//! remaining dust pockets to accelerate termination.

use crate::consts::DoleConstants;
use crate::dust_band::DustBand;
use crate::rng::GilhamRng;

/// Draws a candidate semi-major axis for the `injected_count`-th
/// injection.
///
/// While `injected_count < consts.randomised_count`, draws uniformly from
/// `[innermost_planet, outermost_planet]`. Afterward, enumerates the dusty
/// bands (in disc order) that still overlap the legal range, picks one
/// uniformly, then draws uniformly from its range clipped to the legal
/// bounds.
///
/// Returns `None` only if no dusty band overlaps the legal range at all —
/// the driver's own [`crate::dust_band::is_dust_available`] check means
/// this only happens once the main loop is already about to stop.
#[must_use]
pub fn semi_major_axis(
    injected_count: u32,
    bands: &[DustBand],
    consts: &DoleConstants,
    rng: &mut GilhamRng,
) -> Option<f64> {
    if injected_count < consts.randomised_count {
        return Some(rng.uniform_range(consts.innermost_planet, consts.outermost_planet));
    }

    let candidates: Vec<&DustBand> = bands
        .iter()
        .filter(|b| {
            b.has_dust && b.outer_edge > consts.innermost_planet && b.inner_edge < consts.outermost_planet
        })
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let index = (rng.uniform() * candidates.len() as f64) as usize;
    let band = candidates[index.min(candidates.len() - 1)];

    let low = band.inner_edge.max(consts.innermost_planet);
    let high = band.outer_edge.min(consts.outermost_planet);
    Some(rng.uniform_range(low, high))
}

/// Draws an eccentricity `1 - U^Q`, where `U` is a fresh uniform draw and
/// `Q = consts.eccentricity_coeff`: concentrated near 0 with a heavy tail
/// toward 1.
#[must_use]
pub fn eccentricity(consts: &DoleConstants, rng: &mut GilhamRng) -> f64 {
    let u = rng.uniform();
    1.0 - u.powf(consts.eccentricity_coeff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dust_band::initial_disc;
    use rand_core::SeedableRng;

    #[test]
    fn early_draws_span_the_whole_range() {
        let consts = DoleConstants::default();
        let bands = initial_disc(consts.outermost_planet * 2.0);
        let mut rng = GilhamRng::seed_from_u64(1);
        for i in 0..consts.randomised_count {
            let axis = semi_major_axis(i, &bands, &consts, &mut rng).unwrap();
            assert!((consts.innermost_planet..consts.outermost_planet).contains(&axis));
        }
    }

    #[test]
    fn late_draws_respect_legal_range() {
        let consts = DoleConstants::default();
        let bands = initial_disc(consts.outermost_planet * 2.0);
        let mut rng = GilhamRng::seed_from_u64(1);
        let axis = semi_major_axis(consts.randomised_count, &bands, &consts, &mut rng).unwrap();
        assert!((consts.innermost_planet..consts.outermost_planet).contains(&axis));
    }

    #[test]
    fn returns_none_when_no_dust_in_legal_range() {
        let consts = DoleConstants::default();
        let bands = vec![DustBand::new(0.0, consts.innermost_planet, false, false)];
        let mut rng = GilhamRng::seed_from_u64(1);
        assert!(semi_major_axis(consts.randomised_count, &bands, &consts, &mut rng).is_none());
    }

    #[test]
    fn eccentricity_stays_in_unit_interval() {
        let consts = DoleConstants::default();
        let mut rng = GilhamRng::seed_from_u64(99);
        for _ in 0..1000 {
            let e = eccentricity(&consts, &mut rng);
            assert!((0.0..1.0).contains(&e));
        }
    }

    #[test]
    fn same_seed_gives_same_draws() {
        let consts = DoleConstants::default();
        let mut rng_a = GilhamRng::seed_from_u64(7);
        let mut rng_b = GilhamRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(eccentricity(&consts, &mut rng_a), eccentricity(&consts, &mut rng_b));
        }
    }
}
