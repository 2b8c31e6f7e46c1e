//! RNG module - uniform random piece selection
//!
//! Every spawn picks one of the seven catalog shapes with equal probability.
//! There is no bag and no history: repeats are allowed.
//!
//! The generator is a small seedable LCG so a seed fully determines the
//! piece sequence, which keeps simulations and tests replayable.

use crate::types::PieceKind;

/// 32-bit linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    const MUL: u32 = 1_664_525;
    const INC: u32 = 1_013_904_223;

    /// A zero seed is bumped to 1.
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Advance the state and return it.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(Self::MUL).wrapping_add(Self::INC);
        self.state
    }

    /// Uniform value in `0..max`.
    ///
    /// Multiply-shift reduction: the result comes from the high bits.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Uniform piece picker.
#[derive(Debug, Clone)]
pub struct PiecePicker {
    seed: u32,
    rng: SimpleRng,
}

impl PiecePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Pick the next piece kind, uniformly over all seven.
    pub fn pick(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// The seed this picker was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PiecePicker {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_picker_replays_with_same_seed() {
        let mut a = PiecePicker::new(99);
        let mut b = PiecePicker::new(99);
        for _ in 0..200 {
            assert_eq!(a.pick(), b.pick());
        }
        assert_eq!(a.seed(), 99);
    }

    #[test]
    fn test_picker_covers_every_kind_roughly_evenly() {
        let mut picker = PiecePicker::new(2024);
        let mut counts = [0u32; 7];
        let draws = 7_000;
        for _ in 0..draws {
            counts[(picker.pick().code() - 1) as usize] += 1;
        }

        // Expected 1000 each; allow a wide tolerance.
        for (i, &count) in counts.iter().enumerate() {
            assert!(
                (700..=1300).contains(&count),
                "kind {} drawn {} times",
                i + 1,
                count
            );
        }
    }
}
