//! Hanoi-Live Core Library
//!
//! Puzzle state machine for the Towers of Hanoi: disks, towers, layout,
//! drag-and-drop protocol and win detection.
//!
//! The crate knows nothing about the browser. Hosts implement [`DrawSurface`]
//! for their canvas and feed surface-local pointer coordinates into [`Game`].

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod colour;
pub mod config;
pub mod diagnostics;
pub mod disk;
pub mod error;
pub mod game;
pub mod game_state;
pub mod geometry;
pub mod input;
pub mod session;
pub mod surface;
pub mod tower;
pub mod tower_manager;

pub use colour::Colour;
pub use config::{DEFAULT_DISK_COUNT, GameConfig, Layout, MIN_DISK_COUNT};
pub use diagnostics::{Diagnostics, NoopDiagnostics, RecordingDiagnostics, TracingDiagnostics};
pub use disk::{Disk, DiskId};
pub use error::HanoiError;
pub use game::{Game, VictoryCelebrator};
pub use game_state::{GamePhase, GameState, Victory};
pub use geometry::{Point, Rect};
pub use input::{Drag, InputHandler, InputOutcome};
pub use session::{GameSession, Generation, RedrawRequest, SessionResponse};
pub use surface::{CompositeOperation, DrawCommand, DrawSurface, RecordingSurface};
pub use tower::{TOWER_COUNT, Tower, TowerId};
pub use tower_manager::{TowerManager, Transfer, TransferObserver};
