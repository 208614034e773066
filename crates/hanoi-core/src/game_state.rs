//! Win detection.

use serde::{Deserialize, Serialize};

use crate::tower::TowerId;
use crate::tower_manager::{TowerManager, Transfer, TransferObserver};

/// Game phase. The only transition is `InProgress` to `Won`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    InProgress,
    Won,
}

/// Raised once when every disk has been moved onto a new tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Victory {
    pub tower: TowerId,
}

/// Watches transfers and decides when the puzzle is solved.
#[derive(Debug, Clone)]
pub struct GameState {
    phase: GamePhase,
    /// Tower last seen holding every disk; a stack is only a win when it
    /// completes somewhere else.
    last_complete_tower: Option<TowerId>,
    pending_victory: Option<Victory>,
}

impl GameState {
    pub fn new(board: &TowerManager) -> Self {
        Self {
            phase: GamePhase::InProgress,
            last_complete_tower: Self::find_complete_tower(board),
            pending_victory: None,
        }
    }

    /// The tower holding every disk, if any.
    pub fn find_complete_tower(board: &TowerManager) -> Option<TowerId> {
        let total = board.disk_count();
        board
            .towers()
            .iter()
            .find(|tower| tower.len() == total)
            .map(|tower| tower.id())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    pub fn last_complete_tower(&self) -> Option<TowerId> {
        self.last_complete_tower
    }

    /// Returns the victory raised by the latest transfer, once.
    pub fn take_victory(&mut self) -> Option<Victory> {
        self.pending_victory.take()
    }
}

impl TransferObserver for GameState {
    fn on_disk_transferred(&mut self, board: &TowerManager, _transfer: &Transfer) {
        let Some(complete) = Self::find_complete_tower(board) else {
            return;
        };
        if Some(complete) == self.last_complete_tower {
            return;
        }

        self.last_complete_tower = Some(complete);
        if self.phase == GamePhase::InProgress {
            self.phase = GamePhase::Won;
            self.pending_victory = Some(Victory { tower: complete });
            tracing::info!(tower = complete.index(), "[hanoi] puzzle solved");
        }
    }
}
