//! The ordered dust-band list and its `split`/`merge`/`is_dust_available`
//! transforms (spec §4.5). These are expressed as single-pass iteration over
//! a `Vec`, not recursion, per the design notes in spec §9.

use serde::{Deserialize, Serialize};

use crate::protoplanet::ProtoPlanet;

/// A radial annulus of the disc with uniform dust/gas presence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DustBand {
    /// Inner edge, in AU.
    pub inner_edge: f64,
    /// Outer edge, in AU. Always `> inner_edge`.
    pub outer_edge: f64,
    /// Whether dust remains in this band.
    pub has_dust: bool,
    /// Whether gas remains in this band.
    pub has_gas: bool,
}

/// Below this width, in AU, a band is treated as already swept clean rather
/// than carrying real dust. Repeated splits against adjacent, slightly
/// overlapping sweep annuli otherwise leave slivers a few float ULPs wide
/// that no protoplanet can ever grow from, which would keep
/// [`is_dust_available`] true forever; a band this thin is below the scale
/// the model resolves individual planetesimals at, so it is physically
/// indistinguishable from empty.
const MIN_DUST_BAND_WIDTH: f64 = 1e-6;

impl DustBand {
    /// Builds a new band, asserting the `inner_edge < outer_edge` invariant.
    #[must_use]
    pub fn new(inner_edge: f64, outer_edge: f64, has_dust: bool, has_gas: bool) -> Self {
        debug_assert!(inner_edge < outer_edge);
        let has_dust = has_dust && outer_edge - inner_edge >= MIN_DUST_BAND_WIDTH;
        Self {
            inner_edge,
            outer_edge,
            has_dust,
            has_gas,
        }
    }

    /// Two bands with the same dust/gas presence flags can be merged into
    /// one without losing information.
    fn mergeable_with(&self, other: &Self) -> bool {
        self.has_dust == other.has_dust && self.has_gas == other.has_gas
    }
}

/// Creates the initial single-band disc covering `[0, outer_dust_limit]`
/// with dust and gas both present everywhere.
#[must_use]
pub fn initial_disc(outer_dust_limit: f64) -> Vec<DustBand> {
    vec![DustBand::new(0.0, outer_dust_limit, true, true)]
}

/// Splits every band against a protoplanet's sweep annulus, per the five
/// cases in spec §4.5. `retain_gas` should be `!proto.is_gas_giant(..)`:
/// gas giants strip gas from the bands they sweep permanently, sub-critical
/// bodies leave it behind for future bodies.
#[must_use]
pub fn split(bands: &[DustBand], proto: &ProtoPlanet, retain_gas: bool) -> Vec<DustBand> {
    let sweep_inner = proto.inner_sweep_limit();
    let sweep_outer = proto.outer_sweep_limit();

    let mut result = Vec::with_capacity(bands.len() + 2);
    for band in bands {
        // Case 1: band fully outside the sweep annulus.
        if band.outer_edge <= sweep_inner || band.inner_edge >= sweep_outer {
            result.push(*band);
            continue;
        }

        let stripped_gas = band.has_gas && retain_gas;

        let inside_inner = sweep_inner > band.inner_edge;
        let inside_outer = sweep_outer < band.outer_edge;

        match (inside_inner, inside_outer) {
            // Case 2: sweep annulus strictly inside the band: three pieces.
            (true, true) => {
                result.push(DustBand::new(
                    band.inner_edge,
                    sweep_inner,
                    band.has_dust,
                    band.has_gas,
                ));
                result.push(DustBand::new(sweep_inner, sweep_outer, false, stripped_gas));
                result.push(DustBand::new(
                    sweep_outer,
                    band.outer_edge,
                    band.has_dust,
                    band.has_gas,
                ));
            }
            // Case 3: sweep overlaps the band's outer edge only.
            (true, false) => {
                result.push(DustBand::new(
                    band.inner_edge,
                    sweep_inner,
                    band.has_dust,
                    band.has_gas,
                ));
                result.push(DustBand::new(
                    sweep_inner,
                    band.outer_edge,
                    false,
                    stripped_gas,
                ));
            }
            // Case 4: sweep overlaps the band's inner edge only.
            (false, true) => {
                result.push(DustBand::new(
                    band.inner_edge,
                    sweep_outer,
                    false,
                    stripped_gas,
                ));
                result.push(DustBand::new(
                    sweep_outer,
                    band.outer_edge,
                    band.has_dust,
                    band.has_gas,
                ));
            }
            // Case 5: band fully inside the sweep annulus.
            (false, false) => {
                result.push(DustBand::new(
                    band.inner_edge,
                    band.outer_edge,
                    false,
                    stripped_gas,
                ));
            }
        }
    }
    result
}

/// Collapses adjacent bands with equal `(has_dust, has_gas)` into one band,
/// in a single left-to-right pass. Idempotent: `merge(merge(x)) == merge(x)`.
#[must_use]
pub fn merge(bands: &[DustBand]) -> Vec<DustBand> {
    let mut result: Vec<DustBand> = Vec::with_capacity(bands.len());
    for band in bands {
        match result.last_mut() {
            Some(last) if last.mergeable_with(band) => {
                last.outer_edge = band.outer_edge;
            }
            _ => result.push(*band),
        }
    }
    result
}

/// True iff any dusty band overlaps `(inner, outer)`.
#[must_use]
pub fn is_dust_available(bands: &[DustBand], inner: f64, outer: f64) -> bool {
    bands
        .iter()
        .any(|b| b.has_dust && b.outer_edge > inner && b.inner_edge < outer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage(bands: &[DustBand]) -> f64 {
        bands.iter().map(|b| b.outer_edge - b.inner_edge).sum()
    }

    fn assert_well_formed(bands: &[DustBand]) {
        assert_eq!(bands[0].inner_edge, 0.0);
        for pair in bands.windows(2) {
            assert_eq!(pair[0].outer_edge, pair[1].inner_edge);
            assert!(!pair[0].mergeable_with(&pair[1]));
        }
    }

    fn sample_proto() -> ProtoPlanet {
        ProtoPlanet::new(1.0, 0.1, 1e-6)
    }

    #[test]
    fn initial_disc_is_one_band() {
        let disc = initial_disc(10.0);
        assert_eq!(disc.len(), 1);
        assert_eq!(disc[0], DustBand::new(0.0, 10.0, true, true));
    }

    #[test]
    fn merge_is_idempotent() {
        let disc = initial_disc(10.0);
        let proto = sample_proto();
        let split_once = split(&disc, &proto, true);
        let merged_once = merge(&split_once);
        let merged_twice = merge(&merged_once);
        assert_eq!(merged_once, merged_twice);
    }

    #[test]
    fn split_then_merge_preserves_radial_measure() {
        let disc = initial_disc(10.0);
        let proto = sample_proto();
        let split_bands = split(&disc, &proto, true);
        let merged_bands = merge(&split_bands);
        assert_float_eq::assert_float_absolute_eq!(coverage(&disc), coverage(&split_bands), 1e-9);
        assert_float_eq::assert_float_absolute_eq!(coverage(&disc), coverage(&merged_bands), 1e-9);
        assert_well_formed(&merged_bands);
    }

    #[test]
    fn split_is_noop_for_disjoint_proto() {
        let disc = initial_disc(10.0);
        // A proto whose sweep annulus sits entirely beyond the disc.
        let proto = ProtoPlanet::new(100.0, 0.0, 1e-20);
        let split_bands = split(&disc, &proto, true);
        assert_eq!(split_bands, disc);
        assert_eq!(merge(&split_bands), disc);
    }

    #[test]
    fn is_dust_available_detects_overlap() {
        let disc = initial_disc(10.0);
        assert!(is_dust_available(&disc, 1.0, 2.0));
        assert!(!is_dust_available(&disc, 10.0, 20.0));
    }

    #[test]
    fn gas_giant_strips_gas_but_sub_critical_retains_it() {
        let disc = initial_disc(10.0);
        let proto = sample_proto();

        let stripped = merge(&split(&disc, &proto, false));
        assert!(stripped.iter().any(|b| !b.has_dust && !b.has_gas));

        let retained = merge(&split(&disc, &proto, true));
        assert!(retained.iter().any(|b| !b.has_dust && b.has_gas));
    }
}
