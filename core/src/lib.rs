//! Deterministic planetary-system generation using the Dole accretion model
//! with Fogg's extensions.
//!
//! Given a seed, a set of accretion constants, and a star, [`generate_system`]
//! simulates planetesimals sweeping dust and gas out of a circumstellar disc
//! and returns the resulting protoplanets in ascending order of semi-major
//! axis. The same seed and constants always produce the same result.

#![warn(clippy::missing_docs_in_private_items)]

/// Physical and tunable constants that parameterize a run, and the `Star`
/// input the geometry calculator reads from.
pub mod consts;
/// The fixed, reproducible pseudo-random source.
pub mod rng;

/// Pure geometry/density calculators (sweep limits, critical mass, band
/// volume) over a [`crate::consts::DoleConstants`] and [`crate::consts::Star`].
pub mod geometry;
/// Coalescence formulae used when two protoplanets merge.
pub mod collision;
/// The ordered dust-band list and its split/merge transforms.
pub mod dust_band;
/// The forming body and its derived geometry.
pub mod protoplanet;
/// Sampling strategy for new planetesimal candidates.
pub mod insertion;
/// The accretion state machine that ties every other module together.
pub mod driver;
/// The crate's error type.
pub mod error;

pub use consts::{DoleConstants, Star};
pub use driver::{generate_system, SimulationStats, SystemReport};
pub use error::Error;
pub use protoplanet::ProtoPlanet;

/// Convenience re-export so callers don't need to depend on `rand_core`
/// directly just to seed a run.
pub use rand_core::SeedableRng;
