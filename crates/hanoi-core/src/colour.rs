//! Disk colours.
//!
//! Colours are opaque to the puzzle logic. The generators below aim for
//! bright, saturated colours that contrast with the black towers.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// RGB colour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Colour = Colour::rgb(0, 0, 0);

    /// Random colour picked in HSV space with saturation and value kept in
    /// `[0.5, 1]`, so only the hue is left fully to chance.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hue = f64::from(rng.random_range(0..=359_u16));
        let saturation = f64::from(rng.random_range(40..=80_u8)) / 80.0;
        let value = f64::from(rng.random_range(40..=80_u8)) / 80.0;
        Self::from_hsv(hue, saturation, value)
    }

    /// Random colour built from one low, one middle and one high channel
    /// value, assigned to R, G and B in random order.
    pub fn random_alternative<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut channels = [
            rng.random_range(0..=127_u8),
            rng.random_range(64..=192_u8),
            rng.random_range(128..=255_u8),
        ];
        channels.shuffle(rng);
        Self::rgb(channels[0], channels[1], channels[2])
    }

    /// Converts HSV to RGB. `hue` is in degrees `[0, 360)`, `saturation` and
    /// `value` in `[0, 1]`.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = (hue / 60.0).rem_euclid(6.0);
        let sector = h.floor();
        let f = h - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - f * saturation);
        let t = value * (1.0 - (1.0 - f) * saturation);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (r, g, b) = match sector as u8 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };

        Self::rgb(to_channel(r), to_channel(g), to_channel(b))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(component: f64) -> u8 {
    (component * 256.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}
