//! RNG module - seeded pseudo-random source
//!
//! A simple LCG shared by map generation and encounter rolls. The generator
//! is an explicit handle threaded through the code rather than process-global
//! state, so a fixed seed reproduces an entire run: same map, same encounter
//! stream. Single-threaded use only.

use std::time::{SystemTime, UNIX_EPOCH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate a uniformly distributed value in `[min, max]` inclusive.
    pub fn next_in_range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (max - min) as u32 + 1;
        min + self.next_range(span) as i32
    }

    /// True with approximate probability `chance / 100`.
    pub fn roll_percent(&mut self, chance: i32) -> bool {
        self.next_in_range(0, 99) < chance
    }
}

/// Derive a seed from the wall clock (Unix seconds).
///
/// Resolution is coarse; two runs started within the same second share a
/// seed, which is acceptable for this use. Called once at startup, no
/// reseeding afterwards.
pub fn seed_from_time() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}
