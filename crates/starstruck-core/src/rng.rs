//! Deterministic pseudo-random source.
//!
//! Every randomized step of generation (column shuffling, frontier selection)
//! draws from a `PuzzleRng` that is passed in explicitly, never from global
//! state. A fixed seed therefore replays an identical puzzle, and parallel
//! batch generation needs no synchronization: each worker owns its own stream.

/// Simple PRNG for no-std/WASM compatibility.
///
/// PCG-like: 64-bit LCG state with an output permutation. Not cryptographic,
/// but fast, seedable, and stable across platforms, which is all puzzle
/// reproducibility needs.
#[derive(Debug, Clone)]
pub struct PuzzleRng {
    state: u64,
}

impl PuzzleRng {
    /// Create a stream seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_seed(random_seed())
    }

    /// Create a deterministic stream for the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    /// Uniform value in `0..bound`. `bound` must be non-zero.
    pub fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }

    /// Shuffle a slice in place using Fisher-Yates.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Draw a seed from OS entropy, suitable for reporting back to the caller.
pub fn random_seed() -> u64 {
    let mut seed_bytes = [0u8; 8];
    getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
        // Fallback: use a static counter if getrandom fails
        static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
        let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        seed_bytes = counter.to_le_bytes();
    });
    u64::from_le_bytes(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_streams_match() {
        let mut a = PuzzleRng::with_seed(42);
        let mut b = PuzzleRng::with_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = PuzzleRng::with_seed(1);
        let mut b = PuzzleRng::with_seed(2);
        let same = (0..32).filter(|_| a.next_u64() == b.next_u64()).count();
        assert!(same < 32);
    }

    #[test]
    fn test_next_usize_in_bounds() {
        let mut rng = PuzzleRng::with_seed(7);
        for _ in 0..1000 {
            assert!(rng.next_usize(9) < 9);
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = PuzzleRng::with_seed(3);
        let mut values: Vec<usize> = (0..20).collect();
        rng.shuffle(&mut values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}
