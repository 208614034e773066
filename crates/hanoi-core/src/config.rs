//! Session configuration and layout constants.

use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::error::HanoiError;

/// Smallest playable disk count.
pub const MIN_DISK_COUNT: usize = 1;

/// Disk count used when the player has not picked one.
pub const DEFAULT_DISK_COUNT: usize = 4;

/// Geometric constants shared by every tower and disk of a session.
///
/// All values are in surface pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Height of every disk.
    pub disk_height: f64,
    /// Width of the narrowest disk.
    pub first_disk_width: f64,
    /// Width added for each wider disk.
    pub disk_width_step: f64,
    /// Extra base width beyond the widest disk.
    pub base_padding: f64,
    pub base_height: f64,
    pub stem_width: f64,
    /// Stem height beyond a full stack of disks.
    pub stem_clearance: f64,
    /// Horizontal gap between neighbouring bases.
    pub tower_separation: f64,
    /// Space above and below the towers.
    pub vertical_padding: f64,
    pub tower_colour: Colour,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            disk_height: 15.0,
            first_disk_width: 60.0,
            disk_width_step: 20.0,
            base_padding: 30.0,
            base_height: 20.0,
            stem_width: 20.0,
            stem_clearance: 40.0,
            tower_separation: 16.0,
            vertical_padding: 42.0,
            tower_colour: Colour::BLACK,
        }
    }
}

impl Layout {
    /// Disk widths in strictly increasing order.
    #[allow(clippy::cast_precision_loss)]
    pub fn disk_widths(&self, disk_count: usize) -> Vec<f64> {
        (0..disk_count)
            .map(|i| self.first_disk_width + self.disk_width_step * i as f64)
            .collect()
    }

    /// Base width: the widest disk plus padding.
    #[allow(clippy::cast_precision_loss)]
    pub fn base_width(&self, disk_count: usize) -> f64 {
        let widest = self.first_disk_width
            + self.disk_width_step * disk_count.saturating_sub(1) as f64;
        widest + self.base_padding
    }

    /// Stem height: room for every disk plus clearance.
    #[allow(clippy::cast_precision_loss)]
    pub fn stem_height(&self, disk_count: usize) -> f64 {
        disk_count as f64 * self.disk_height + self.stem_clearance
    }

    pub fn validate(&self) -> Result<(), HanoiError> {
        let positive = [
            ("disk_height", self.disk_height),
            ("first_disk_width", self.first_disk_width),
            ("disk_width_step", self.disk_width_step),
            ("base_height", self.base_height),
            ("stem_width", self.stem_width),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(HanoiError::InvalidLayout(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("base_padding", self.base_padding),
            ("stem_clearance", self.stem_clearance),
            ("tower_separation", self.tower_separation),
            ("vertical_padding", self.vertical_padding),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(HanoiError::InvalidLayout(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Parameters for one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub disk_count: usize,
    /// Seed for disk colours. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
    pub layout: Layout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            disk_count: DEFAULT_DISK_COUNT,
            seed: None,
            layout: Layout::default(),
        }
    }
}

impl GameConfig {
    pub fn with_disk_count(disk_count: usize) -> Self {
        Self {
            disk_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), HanoiError> {
        if self.disk_count < MIN_DISK_COUNT {
            return Err(HanoiError::InvalidDiskCount {
                count: self.disk_count,
                min: MIN_DISK_COUNT,
            });
        }
        self.layout.validate()
    }
}
