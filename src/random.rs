use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness used when drawing a command from the catalog.
///
/// Implementations only need to pick an index; the catalog does the lookup.
pub trait RandomSource {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Pseudo-random source backed by [`StdRng`].
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    /// Seed from operating system entropy. Draws differ on every run.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seed deterministically, so the same seed replays the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SystemRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, wrapping around when exhausted.
///
/// Each index is reduced modulo `len`, so any script is valid for any
/// non-empty catalog.
pub struct ScriptedRandom {
    indices: Vec<usize>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, pos: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let idx = self.indices[self.pos % self.indices.len()];
        self.pos += 1;
        idx % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_random_stays_in_range() {
        let mut rng = SystemRandom::from_entropy();
        for len in 1..50 {
            assert!(rng.pick_index(len) < len);
        }
    }

    #[test]
    fn test_same_seed_replays_same_draws() {
        let mut a = SystemRandom::seeded(7);
        let mut b = SystemRandom::seeded(7);
        let first: Vec<usize> = (0..20).map(|_| a.pick_index(10)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.pick_index(10)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scripted_random_wraps_and_reduces() {
        let mut rng = ScriptedRandom::new(vec![1, 5]);
        assert_eq!(rng.pick_index(3), 1);
        assert_eq!(rng.pick_index(3), 2);
        assert_eq!(rng.pick_index(3), 1);
    }

    #[test]
    fn test_empty_script_always_picks_first() {
        let mut rng = ScriptedRandom::new(Vec::new());
        assert_eq!(rng.pick_index(4), 0);
    }
}
