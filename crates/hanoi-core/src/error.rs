//! Error type for the puzzle core.

use crate::disk::DiskId;
use crate::tower::TowerId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HanoiError {
    #[error("Disk count must be at least {min}, got {count}")]
    InvalidDiskCount { count: usize, min: usize },
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
    #[error("{disk} is not on {tower}")]
    DiskNotOnTower { disk: DiskId, tower: TowerId },
    #[error("{0} was placed illegally before it had a tower to return to")]
    NoOriginTower(DiskId),
    #[error("Unknown {0}")]
    UnknownDisk(DiskId),
}
