//! RNG module - deterministic tile generation
//!
//! A 32-bit xorshift generator (shifts 13/17/5). The same seed always produces
//! the same sequence on every platform, so the same seed also produces the
//! same boards and cascades (for reproducible tests and replays).

use crate::types::TileKind;

/// 32-bit xorshift RNG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // 0 is a fixed point of xorshift and would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        let mut s = self.state;
        s ^= s << 13;
        s ^= s >> 17;
        s ^= s << 5;
        self.state = s;
        s
    }

    /// Generate a float in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Generate an index in [0, len) as `floor(next_f64() * len)`
    ///
    /// `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        let i = (self.next_f64() * len as f64) as usize;
        // Float rounding can land exactly on len for very large len.
        i.min(len - 1)
    }

    /// Draw a kind uniformly from `kinds` (must be non-empty)
    pub fn pick_kind(&mut self, kinds: &[TileKind]) -> TileKind {
        kinds[self.next_index(kinds.len())]
    }

    /// Current internal state (resume a sequence with `XorShiftRng::new(state)`)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for XorShiftRng {
    fn default() -> Self {
        Self::new(1)
    }
}
