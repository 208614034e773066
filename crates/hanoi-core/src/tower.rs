//! Tower entity: a fixed peg holding a stack of disks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::config::Layout;
use crate::disk::{Disk, DiskId};
use crate::error::HanoiError;
use crate::geometry::{Point, Rect};
use crate::surface::{CompositeOperation, DrawSurface};

/// Number of towers in every game.
pub const TOWER_COUNT: usize = 3;

/// Identifier of a tower, numbered left to right from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TowerId(u8);

impl TowerId {
    pub const FIRST: TowerId = TowerId(0);
    pub const ALL: [TowerId; TOWER_COUNT] = [TowerId(0), TowerId(1), TowerId(2)];

    /// Returns `None` for indices past the last tower.
    pub fn new(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tower {}", self.0)
    }
}

/// A tower and its stack. The last element of the stack is the top disk.
#[derive(Debug, Clone)]
pub struct Tower {
    id: TowerId,
    position: Point,
    base: Rect,
    stem: Rect,
    top: Point,
    disks_top: f64,
    colour: Colour,
    disks: Vec<DiskId>,
}

impl Tower {
    pub fn new(
        id: TowerId,
        position: Point,
        base_width: f64,
        stem_height: f64,
        layout: &Layout,
    ) -> Self {
        let base = Rect::new(
            Point::new(position.x, position.y + stem_height),
            base_width,
            layout.base_height,
        );
        let stem = Rect::new(
            Point::new(
                position.x + (base_width / 2.0 - layout.stem_width / 2.0),
                position.y,
            ),
            layout.stem_width,
            stem_height,
        );
        let top = Point::new(stem.position.x + stem.width / 2.0, stem.position.y);

        Self {
            id,
            position,
            base,
            stem,
            top,
            disks_top: base.position.y,
            colour: layout.tower_colour,
            disks: Vec::new(),
        }
    }

    pub fn id(&self) -> TowerId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn base(&self) -> Rect {
        self.base
    }

    pub fn stem(&self) -> Rect {
        self.stem
    }

    /// Centre of the stem's top edge; drops snap to the nearest one.
    pub fn top(&self) -> Point {
        self.top
    }

    /// Y coordinate the bottom edge of the next disk rests at.
    pub fn disks_top(&self) -> f64 {
        self.disks_top
    }

    /// Stem plus base.
    pub fn height(&self) -> f64 {
        self.stem.height + self.base.height
    }

    /// Stack from bottom to top.
    pub fn disks(&self) -> &[DiskId] {
        &self.disks
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    pub fn top_disk(&self) -> Option<DiskId> {
        self.disks.last().copied()
    }

    pub fn add_disk(&mut self, disk: &Disk) {
        self.disks.push(disk.id());
        self.disks_top -= disk.height();
    }

    pub fn remove_disk(&mut self, disk: &Disk) -> Result<(), HanoiError> {
        let index = self
            .disks
            .iter()
            .position(|&id| id == disk.id())
            .ok_or(HanoiError::DiskNotOnTower {
                disk: disk.id(),
                tower: self.id,
            })?;
        self.disks.remove(index);
        self.disks_top += disk.height();
        Ok(())
    }

    /// Draws the tower behind whatever is already on the surface, then its
    /// disks bottom to top.
    pub fn draw(&self, surface: &mut dyn DrawSurface, disks: &[Disk]) {
        self.draw_self(surface);
        for id in &self.disks {
            if let Some(disk) = disks.get(id.0) {
                disk.draw(surface);
            }
        }
    }

    fn draw_self(&self, surface: &mut dyn DrawSurface) {
        surface.save();
        surface.set_composite_operation(CompositeOperation::DestinationOver);
        surface.set_fill_colour(self.colour);
        surface.begin_path();
        surface.rect(self.base);
        surface.rect(self.stem);
        surface.close_path();
        surface.fill();
        surface.restore();
    }
}

impl fmt::Display for Tower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tower(x={}, y={})", self.position.x, self.position.y)
    }
}
