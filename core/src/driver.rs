//! The accretion state machine (spec §4.6): `INIT -> SEEDED -> LOOP ->
//! (SWEEP -> UPDATE_DISC -> MAYBE_MERGE) -> TERMINAL`. This is the one
//! stateful component in the crate; every calculator it calls is a pure
//! function.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};
use rand_core::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::collision;
use crate::consts::{DoleConstants, Star};
use crate::dust_band::{self, DustBand};
use crate::error::Error;
use crate::geometry;
use crate::insertion;
use crate::protoplanet::ProtoPlanet;
use crate::rng::GilhamRng;

/// Monotone counters maintained by the driver for a single run (spec §3).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Number of planetesimals injected into the disc.
    pub injected_nuclei: u32,
    /// Number of accepted merges between two planetesimals.
    pub merged_nuclei: u32,
    /// Wall-clock duration of the run, in milliseconds.
    pub elapsed_ms: u64,
}

/// The result of one `generate_system` call: the seed that was used (so a
/// caller-supplied `None` can be recovered and replayed), the run's stats,
/// and the final ordered planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemReport {
    /// The seed this run used, whether caller-supplied or derived from the
    /// wall clock.
    pub seed: u64,
    /// Monotone counters for the run.
    pub stats: SimulationStats,
    /// The surviving protoplanets, ordered by ascending `axis`.
    pub planets: Vec<ProtoPlanet>,
}

/// Runs one Dole/Fogg accretion simulation to completion.
///
/// `seed` fixes the RNG for bit-for-bit reproducibility (spec §8, invariant
/// 5); if absent, the wall-clock millisecond count is used and reported
/// back in [`SystemReport::seed`] so the caller can replay the run.
///
/// # Errors
///
/// Returns [`Error::InvalidConstants`] if `consts` fail validation, or
/// [`Error::NonTerminating`] if more than `consts.injection_limit`
/// planetesimals are injected without the dust disc becoming exhausted
/// (spec §7's non-terminating-loop safety bound).
pub fn generate_system(
    seed: Option<u64>,
    star: &Star,
    consts: &DoleConstants,
) -> Result<SystemReport, Error> {
    consts.validate()?;

    let start = Instant::now();
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    let mut rng = GilhamRng::seed_from_u64(seed);

    let mut stats = SimulationStats::default();
    let mut planets: Vec<ProtoPlanet> = Vec::new();
    let mut disc: Vec<DustBand> = dust_band::initial_disc(geometry::outer_dust_limit(star.mass));

    while dust_band::is_dust_available(&disc, consts.innermost_planet, consts.outermost_planet) {
        let Some(axis) =
            insertion::semi_major_axis(stats.injected_nuclei, &disc, consts, &mut rng)
        else {
            break;
        };
        let ecc = insertion::eccentricity(consts, &mut rng);
        let candidate = ProtoPlanet::new(axis, ecc, consts.protoplanet_mass);

        stats.injected_nuclei += 1;
        if stats.injected_nuclei > consts.injection_limit {
            warn!(
                "accretion did not terminate after {} injections",
                stats.injected_nuclei
            );
            return Err(Error::NonTerminating {
                injected_nuclei: stats.injected_nuclei,
            });
        }

        let grown = sweep(candidate, &disc, star, consts);

        if grown.mass <= consts.protoplanet_mass {
            debug!(
                "rejected candidate at axis={:.6} (mass stayed at seed mass)",
                grown.axis
            );
            continue;
        }

        // A single merge can bring the coalesced body close enough to pull
        // in further neighbors, so keep merging until the planetesimal
        // list's no-overlap invariant (spec §8, invariant 3) is restored.
        let mut candidate = grown;
        let finalized = loop {
            match find_overlapping_neighbor(&planets, &candidate, star, consts) {
                Some(index) => {
                    let neighbor = planets.remove(index);
                    let merged = collision::coalesce(&neighbor, &candidate);
                    let merged = sweep(merged, &disc, star, consts);
                    info!(
                        "merged neighbor at axis={:.6} with candidate at axis={:.6} -> axis={:.6}, mass={:.6e}",
                        neighbor.axis, candidate.axis, merged.axis, merged.mass
                    );
                    stats.merged_nuclei += 1;
                    candidate = merged;
                }
                None => break candidate,
            }
        };
        let pos = planets.partition_point(|existing| existing.axis < finalized.axis);
        planets.insert(pos, finalized);
        info!(
            "placed planetesimal at axis={:.6}, mass={:.6e}",
            finalized.axis, finalized.mass
        );

        let retain_gas = !finalized.is_gas_giant(star, consts);
        disc = dust_band::merge(&dust_band::split(&disc, &finalized, retain_gas));
        debug!("disc now has {} bands", disc.len());
    }

    stats.elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(SystemReport {
        seed,
        stats,
        planets,
    })
}

/// Repeatedly sweeps dust (and, for super-critical bodies, gas) out of the
/// overlapping bands of `disc` until the accreted mass stabilizes (spec
/// §4.6's SWEEP sub-phase).
fn sweep(mut proto: ProtoPlanet, disc: &[DustBand], star: &Star, consts: &DoleConstants) -> ProtoPlanet {
    loop {
        let last = proto.mass;
        let sweep_inner = proto.inner_sweep_limit();
        let sweep_outer = proto.outer_sweep_limit();
        let is_giant = proto.is_gas_giant(star, consts);
        let critical = proto.critical_mass(star, consts);

        let mut next = 0.0;
        for band in disc {
            if !(band.outer_edge > sweep_inner && band.inner_edge < sweep_outer) {
                continue;
            }
            if !band.has_dust {
                continue;
            }
            let mut density = geometry::dust_density(proto.axis, consts);
            if band.has_gas && is_giant {
                density = geometry::dust_and_gas_density(density, critical, proto.mass, consts);
            }
            next += density
                * geometry::band_volume(
                    proto.mass,
                    proto.axis,
                    proto.ecc,
                    sweep_inner,
                    sweep_outer,
                    band.inner_edge,
                    band.outer_edge,
                );
        }

        proto.mass = last.max(next);

        if last <= 0.0 || (proto.mass - last) / last <= 1e-4 {
            break;
        }
    }
    proto
}

/// Scans `planets` in ascending-axis order for the first neighbor whose
/// gravitational annulus overlaps `candidate`'s, per the `too_close`
/// predicate in spec §4.6.
fn find_overlapping_neighbor(
    planets: &[ProtoPlanet],
    candidate: &ProtoPlanet,
    star: &Star,
    consts: &DoleConstants,
) -> Option<usize> {
    planets
        .iter()
        .position(|neighbor| too_close(neighbor, candidate, star, consts))
}

/// `true` iff `p` and `q`'s gravitational annuli overlap, per spec §4.6:
///
/// ```text
/// (p.axis > q.axis && (p.inner_grav_limit < q.axis || q.outer_grav_limit > p.axis))
/// || (p.axis <= q.axis && (p.outer_grav_limit > q.axis || q.inner_grav_limit < p.axis))
/// ```
fn too_close(p: &ProtoPlanet, q: &ProtoPlanet, star: &Star, consts: &DoleConstants) -> bool {
    if p.axis > q.axis {
        p.inner_grav_limit(star, consts) < q.axis || q.outer_grav_limit(star, consts) > p.axis
    } else {
        p.outer_grav_limit(star, consts) > q.axis || q.inner_grav_limit(star, consts) < p.axis
    }
}
