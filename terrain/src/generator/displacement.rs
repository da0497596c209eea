//! Random offsets for the midpoint recursion.
//!
//! The synthesizer only ever asks for "a uniform value in `[-d, +d]`", so any
//! source of such values can drive it. A fixed seed (or a fixed scripted
//! sequence) always yields the same heightfield.

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::OnceCell;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::TerrainError;

static GLOBAL_SOURCE: OnceCell<Mutex<SeededDisplacement>> = OnceCell::new();

pub trait DisplacementSource {
    /// Returns a value drawn uniformly from `[-magnitude, magnitude]`.
    fn displace(&mut self, magnitude: f64) -> f64;
}

impl<T: DisplacementSource + ?Sized> DisplacementSource for &mut T {
    fn displace(&mut self, magnitude: f64) -> f64 {
        (**self).displace(magnitude)
    }
}

/// ChaCha8-backed source; identical seeds give identical terrain on every
/// platform.
#[derive(Clone, Debug)]
pub struct SeededDisplacement {
    rng: ChaCha8Rng,
}

impl SeededDisplacement {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

impl DisplacementSource for SeededDisplacement {
    fn displace(&mut self, magnitude: f64) -> f64 {
        // Scaling a unit draw keeps the range width finite for any magnitude.
        if magnitude > 0.0 && magnitude.is_finite() {
            self.rng.gen_range(-1.0..=1.0) * magnitude
        } else {
            0.0
        }
    }
}

/// Never displaces: the recursion degrades to pure neighbour averaging.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroDisplacement;

impl DisplacementSource for ZeroDisplacement {
    fn displace(&mut self, _magnitude: f64) -> f64 {
        0.0
    }
}

/// Seeds the process-wide source. Only the first call succeeds.
pub fn seed_global(seed: u64) -> Result<(), TerrainError> {
    GLOBAL_SOURCE
        .set(Mutex::new(SeededDisplacement::new(seed)))
        .map_err(|_| TerrainError::GlobalSourceAlreadySeeded)?;
    log::debug!("Seeded global displacement source with {seed}");
    Ok(())
}

/// Exclusive handle on the process-wide source for the duration of one or
/// more generations. Draws continue where the previous holder stopped.
pub struct GlobalDisplacement {
    guard: MutexGuard<'static, SeededDisplacement>,
}

impl GlobalDisplacement {
    pub fn acquire() -> Result<Self, TerrainError> {
        let source = GLOBAL_SOURCE
            .get()
            .ok_or(TerrainError::GlobalSourceNotSeeded)?;
        // A panic mid-generation leaves the rng itself intact.
        let guard = source.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(Self { guard })
    }
}

impl DisplacementSource for GlobalDisplacement {
    fn displace(&mut self, magnitude: f64) -> f64 {
        self.guard.displace(magnitude)
    }
}
