//! Heading noise sources.
//!
//! The heading model draws one perturbation per explore tick from a
//! [`NoiseSource`].  Injecting the source (instead of reaching for a
//! thread-local RNG) keeps the simulation reproducible:
//!
//! - [`SimRng`]: `SmallRng` seeded from a `u64`, or from OS entropy when the
//!   run is unseeded.
//! - [`NoNoise`]: always returns 0; the walk becomes a deterministic curve.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Anything that can produce a symmetric heading perturbation.
pub trait NoiseSource {
    /// Sample uniformly from `[-amplitude, amplitude]`.
    ///
    /// `amplitude` is non-negative (validated by `NavConfig`).  An amplitude
    /// of zero must return exactly `0.0`.
    fn perturbation(&mut self, amplitude: f64) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    #[inline]
    fn perturbation(&mut self, amplitude: f64) -> f64 {
        (**self).perturbation(amplitude)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// One per driver; the simulation is single-threaded so it is never shared.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Successive runs produce different walks.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy-seeded otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }
}

impl NoiseSource for SimRng {
    #[inline]
    fn perturbation(&mut self, amplitude: f64) -> f64 {
        if amplitude <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-amplitude..=amplitude)
    }
}

// ── NoNoise ───────────────────────────────────────────────────────────────────

/// A [`NoiseSource`] that never perturbs.  Used for analytic tests and
/// `--zero-noise` demo runs.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoNoise;

impl NoiseSource for NoNoise {
    #[inline]
    fn perturbation(&mut self, _amplitude: f64) -> f64 {
        0.0
    }
}
