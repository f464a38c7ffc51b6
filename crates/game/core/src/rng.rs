//! Injectable random source for intent selection and deck shuffling.
//!
//! Every random decision in combat (enemy intent choice, reshuffling the
//! discard pile) is routed through [`RandomSource`], so a session replays
//! identically when it is driven by the same seeded generator.

/// Source of uniformly distributed random numbers.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `0..bound` (Lemire's multiply-shift with rejection).
    /// Returns 0 when `bound <= 1`. Bounds above `u32::MAX` are clamped.
    fn below(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        let bound = u64::from(u32::try_from(bound).unwrap_or(u32::MAX));
        // (2^32 - bound) % bound: low products under this would over-weight
        // the first few results.
        let threshold = (1u64 << 32).wrapping_sub(bound) % bound;
        loop {
            let product = u64::from(self.next_u32()) * bound;
            if product & u64::from(u32::MAX) >= threshold {
                return (product >> 32) as usize;
            }
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Default generator: PCG-XSH-RR, 64-bit state and 32-bit output.
///
/// One LCG step per draw, then a xorshift and a state-dependent rotation of
/// the high bits. See <https://www.pcg-random.org/>.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    ///
    /// The seed is avalanched first so that neighbouring seeds (0, 1, 2, ...)
    /// start from unrelated states.
    pub fn new(seed: u64) -> Self {
        Self {
            state: mix_seed(seed),
        }
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state = state;

        let mixed = (((state >> 18) ^ state) >> 27) as u32;
        mixed.rotate_right((state >> 59) as u32)
    }
}

/// Avalanche a raw seed into a well-mixed generator state.
///
/// Constants are the SplitMix64 / MurmurHash3 finalizer multipliers.
pub fn mix_seed(seed: u64) -> u64 {
    let mut z = seed ^ 0x9e3779b97f4a7c15;
    z = (z ^ (z >> 33)).wrapping_mul(0xff51afd7ed558ccd);
    z = (z ^ (z >> 33)).wrapping_mul(0xc4ceb9fe1a85ec53);
    z ^ (z >> 33)
}
