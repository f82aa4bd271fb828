use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform randomness for scene and fallback selection.
///
/// Selection code never reaches for a global generator; callers hand in a `SceneRng` so tests can
/// substitute a fixed sequence and assert exact outcomes.
pub trait SceneRng {
    /// Uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

impl<R: SceneRng + ?Sized> SceneRng for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Entropy-seeded generator used by the server and CLI.
#[derive(Clone, Debug)]
pub struct ThreadSceneRng {
    inner: StdRng,
}

impl ThreadSceneRng {
    /// Seed from the operating system.
    pub fn new() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Seed from a fixed value (reproducible runs).
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ThreadSceneRng {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRng for ThreadSceneRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`. An empty list always yields `0.0`.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceRng {
    /// Create a generator replaying `values` in order.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }
}

impl SceneRng for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos = self.pos.wrapping_add(1);
        if v.is_finite() {
            v.clamp(0.0, 1.0 - f64::EPSILON)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
