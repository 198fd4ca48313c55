//! Random series colors, cached so that assignments stay stable across
//! repeated draws.

use std::fmt::Display;
use std::fmt::Formatter;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl Rgb {
    /// The CSS form with an alpha channel, e.g. `rgba(12, 34, 56, 0.4)`.
    pub fn with_opacity(&self, opacity: f64) -> String {
        format!("rgba({}, {}, {}, {opacity})", self.r, self.g, self.b)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A grow-only cache of randomly generated series colors.
///
/// The color at index `i` stays stable for the lifetime of the cache as
/// long as the requested series count does not shrink below `i + 1`.
pub struct ColorCache {
    colors: Vec<Rgb>,
    rng: StdRng,
}

impl ColorCache {
    /// Creates an empty cache backed by OS entropy.
    pub fn new() -> ColorCache {
        Self {
            colors: Vec::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an empty cache with a fixed seed, for reproducible pages.
    pub fn seeded(seed: u64) -> ColorCache {
        Self {
            colors: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// An ordinal scale over `count` series, extending the cache when it
    /// holds fewer colors. The cache is never truncated.
    pub fn scale(&mut self, count: usize) -> ColorScale {
        while self.colors.len() < count {
            let color = Rgb {
                r: self.rng.random_range(0..=u8::MAX),
                g: self.rng.random_range(0..=u8::MAX),
                b: self.rng.random_range(0..=u8::MAX),
            };
            self.colors.push(color);
        }

        ColorScale {
            colors: self.colors[..count].to_vec(),
        }
    }
}

impl Default for ColorCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a series index to its color. Indexes beyond the scale's count
/// wrap around.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    colors: Vec<Rgb>,
}

impl ColorScale {
    /// The color assigned to the series at `index`.
    pub fn get(&self, index: usize) -> Rgb {
        self.colors[index % self.colors.len()]
    }

    /// The number of colors held by the scale.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the scale holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
