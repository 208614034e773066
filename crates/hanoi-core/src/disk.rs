//! Disk entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::geometry::{Point, Rect};
use crate::surface::DrawSurface;
use crate::tower::{TOWER_COUNT, Tower, TowerId};

/// Identifier of a disk within its session. Disks are numbered in creation
/// order, widest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiskId(pub usize);

impl fmt::Display for DiskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk #{}", self.0)
    }
}

/// A stackable disk.
#[derive(Debug, Clone)]
pub struct Disk {
    id: DiskId,
    width: f64,
    height: f64,
    colour: Colour,
    position: Point,
    centre: Point,
    tower: Option<TowerId>,
}

impl Disk {
    /// Creates an unplaced disk at the origin. It gets a tower on its first
    /// transfer.
    pub fn new(id: DiskId, width: f64, height: f64, colour: Colour) -> Self {
        let mut disk = Self {
            id,
            width,
            height,
            colour,
            position: Point::ORIGIN,
            centre: Point::ORIGIN,
            tower: None,
        };
        disk.move_to(Point::ORIGIN);
        disk
    }

    pub fn id(&self) -> DiskId {
        self.id
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn centre(&self) -> Point {
        self.centre
    }

    /// The tower currently holding this disk.
    pub fn tower(&self) -> Option<TowerId> {
        self.tower
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.width, self.height)
    }

    /// Moves the disk without any legality check.
    pub fn move_to(&mut self, point: Point) {
        self.position = point;
        self.centre = self.bounds().centre();
    }

    pub(crate) fn set_tower(&mut self, tower: TowerId) {
        self.tower = Some(tower);
    }

    /// Right and bottom edges are not part of the disk.
    pub fn is_clicked_on(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    pub fn is_top_disk(&self, towers: &[Tower; TOWER_COUNT]) -> bool {
        self.tower
            .is_some_and(|tower| towers[tower.index()].top_disk() == Some(self.id))
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.begin_path();
        surface.rect(self.bounds());
        surface.close_path();

        surface.save();
        surface.set_fill_colour(self.colour);
        surface.fill();
        surface.restore();
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Disk(width={}, colour={})", self.width, self.colour)
    }
}
