use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// 8-bit-per-channel color assigned to a speaker box.
///
/// Displays as the CSS hex form `#RRGGBB` (uppercase digits), which is what
/// the canvas fill style receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Supplies colors for newly added boxes.
///
/// Production code uses [`RandomColors`]; tests can pass a closure returning
/// a fixed sequence.
pub trait ColorSource {
    fn next_color(&mut self) -> Rgb;
}

impl<F> ColorSource for F
where
    F: FnMut() -> Rgb,
{
    fn next_color(&mut self) -> Rgb {
        self()
    }
}

/// Uniformly random colors, one independent byte per channel.
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Rgb {
        Rgb::new(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}
