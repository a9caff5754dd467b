//! Procedural field generator: star particles and glow orbs.
//!
//! A [`Field`] is generated once per page load and never mutated afterwards.
//! The default path draws from the thread-local RNG, so two loads produce
//! different layouts. [`Field::generate_seeded`] exists for reproducible
//! layouts in regression tests.

use std::fmt;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Number of particles in every generated field
pub const PARTICLE_COUNT: usize = 80;
/// Number of glow orbs in every generated field
pub const UNIVERSE_COUNT: usize = 12;

pub const PARTICLE_POSITION: Range<f64> = 0.0..100.0;
pub const PARTICLE_SIZE: Range<f64> = 1.0..4.0;
pub const PARTICLE_SPEED: Range<f64> = 10.0..30.0;
pub const PARTICLE_OPACITY: Range<f64> = 0.3..1.0;
/// Blue to violet band
pub const PARTICLE_HUE: Range<f64> = 240.0..300.0;

/// Orbs are inset from the edges so they are not clipped
pub const UNIVERSE_POSITION: Range<f64> = 5.0..95.0;
pub const UNIVERSE_SIZE: Range<f64> = 80.0..280.0;
pub const UNIVERSE_DELAY: Range<f64> = 0.0..5.0;

/// A translucent RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Fixed orb palette
pub const PALETTE: [Rgba; 5] = [
    Rgba { r: 147, g: 112, b: 219, a: 0.4 },
    Rgba { r: 255, g: 182, b: 193, a: 0.3 },
    Rgba { r: 100, g: 149, b: 237, a: 0.35 },
    Rgba { r: 255, g: 215, b: 0, a: 0.25 },
    Rgba { r: 64, g: 224, b: 208, a: 0.3 },
];

/// A small twinkling star
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub id: usize,
    /// Horizontal position, percent of the viewport
    pub x: f64,
    /// Vertical position, percent of the viewport
    pub y: f64,
    /// Diameter in px
    pub size: f64,
    /// Animation duration in seconds
    pub speed: f64,
    pub opacity: f64,
    pub hue: f64,
}

/// A large, softly glowing orb
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Universe {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    /// Diameter in px
    pub size: f64,
    /// Animation start delay in seconds
    pub delay: f64,
    pub color: Rgba,
}

/// The two decorative collections painted behind the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    particles: Vec<Particle>,
    universes: Vec<Universe>,
}

impl Field {
    /// Generate a field from ambient randomness.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate a reproducible field from a seed.
    pub fn generate_seeded(seed: u64) -> Self {
        Self::generate_with(&mut StdRng::seed_from_u64(seed))
    }

    /// Generate a field drawing every value from `rng`.
    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|id| Particle {
                id,
                x: rng.gen_range(PARTICLE_POSITION),
                y: rng.gen_range(PARTICLE_POSITION),
                size: rng.gen_range(PARTICLE_SIZE),
                speed: rng.gen_range(PARTICLE_SPEED),
                opacity: rng.gen_range(PARTICLE_OPACITY),
                hue: rng.gen_range(PARTICLE_HUE),
            })
            .collect();

        let universes = (0..UNIVERSE_COUNT)
            .map(|id| Universe {
                id,
                x: rng.gen_range(UNIVERSE_POSITION),
                y: rng.gen_range(UNIVERSE_POSITION),
                size: rng.gen_range(UNIVERSE_SIZE),
                delay: rng.gen_range(UNIVERSE_DELAY),
                // PALETTE is non-empty
                color: *PALETTE.choose(rng).unwrap_or(&PALETTE[0]),
            })
            .collect();

        Self { particles, universes }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn universes(&self) -> &[Universe] {
        &self.universes
    }

    /// SHA-256 fingerprint of every generated value, hex encoded.
    ///
    /// Two fields share a digest only if all of their values are identical.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for p in &self.particles {
            hasher.update((p.id as u64).to_le_bytes());
            for v in [p.x, p.y, p.size, p.speed, p.opacity, p.hue] {
                hasher.update(v.to_le_bytes());
            }
        }
        for u in &self.universes {
            hasher.update((u.id as u64).to_le_bytes());
            for v in [u.x, u.y, u.size, u.delay] {
                hasher.update(v.to_le_bytes());
            }
            hasher.update(u.color.to_string().as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_fixed_cardinality_with_sequential_ids() {
        let f = Field::generate();
        assert_eq!(f.particles().len(), PARTICLE_COUNT);
        assert_eq!(f.universes().len(), UNIVERSE_COUNT);
        for (i, p) in f.particles().iter().enumerate() {
            assert_eq!(p.id, i);
        }
        for (i, u) in f.universes().iter().enumerate() {
            assert_eq!(u.id, i);
        }
    }

    #[test]
    fn seeded_fields_are_reproducible() {
        let a = Field::generate_seeded(42);
        let b = Field::generate_seeded(42);
        assert_eq!(a, b);
        assert_eq!(a.digest(), b.digest());
        assert_ne!(a.digest(), Field::generate_seeded(43).digest());
    }

    #[test]
    fn palette_formats_as_css_rgba() {
        assert_eq!(PALETTE[0].to_string(), "rgba(147, 112, 219, 0.4)");
        assert_eq!(PALETTE[2].to_string(), "rgba(100, 149, 237, 0.35)");
        assert_eq!(PALETTE[3].to_string(), "rgba(255, 215, 0, 0.25)");
    }

    #[test]
    fn digest_is_hex_sha256() {
        let d = Field::generate_seeded(7).digest();
        assert_eq!(d.len(), 64);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
