//! One game session: board, win detection and input, tagged with the
//! generation that created it.

use std::fmt;
use std::rc::Rc;

use crate::config::GameConfig;
use crate::diagnostics::Diagnostics;
use crate::disk::DiskId;
use crate::error::HanoiError;
use crate::game_state::{GameState, Victory};
use crate::geometry::Point;
use crate::input::{InputHandler, InputOutcome};
use crate::surface::DrawSurface;
use crate::tower::TowerId;
use crate::tower_manager::{TowerManager, Transfer};

/// Identifies a session. Each new session gets a higher generation than the
/// one it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen {}", self.0)
    }
}

/// Request to redraw the board of the session with `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawRequest {
    pub generation: Generation,
}

/// Side effects a session operation asks its host to perform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionResponse {
    pub redraw: Option<RedrawRequest>,
    pub victory: Option<Victory>,
}

impl SessionResponse {
    pub const NONE: SessionResponse = SessionResponse {
        redraw: None,
        victory: None,
    };
}

pub struct GameSession {
    generation: Generation,
    board: TowerManager,
    game_state: GameState,
    input: InputHandler,
}

impl GameSession {
    pub fn new(
        generation: Generation,
        config: &GameConfig,
        surface: &mut dyn DrawSurface,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Result<Self, HanoiError> {
        let board = TowerManager::new(config, surface)?;
        let game_state = GameState::new(&board);
        let input = InputHandler::new(diagnostics);

        tracing::info!(%generation, disks = board.disk_count(), "[hanoi] new game");
        Ok(Self {
            generation,
            board,
            game_state,
            input,
        })
    }

    pub fn pointer_down(&mut self, point: Point) -> SessionResponse {
        self.input.pointer_down(&self.board, point);
        SessionResponse::NONE
    }

    pub fn pointer_move(&mut self, point: Point) -> Result<SessionResponse, HanoiError> {
        let outcome = self.input.pointer_move(&mut self.board, point)?;
        Ok(self.respond(outcome))
    }

    pub fn pointer_up(&mut self) -> Result<SessionResponse, HanoiError> {
        let outcome = self
            .input
            .pointer_up(&mut self.board, &mut self.game_state)?;
        Ok(self.respond(outcome))
    }

    /// Transfers a disk directly, bypassing the pointer protocol.
    pub fn transfer_disk(
        &mut self,
        disk: DiskId,
        tower: TowerId,
    ) -> Result<(Transfer, SessionResponse), HanoiError> {
        let transfer = self
            .board
            .transfer_disk(disk, tower, &mut self.game_state)?;
        Ok((transfer, self.respond(InputOutcome::Dropped(transfer))))
    }

    fn respond(&mut self, outcome: InputOutcome) -> SessionResponse {
        SessionResponse {
            redraw: outcome.needs_redraw().then_some(RedrawRequest {
                generation: self.generation,
            }),
            victory: self.game_state.take_victory(),
        }
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        self.board.draw(surface);
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn board(&self) -> &TowerManager {
        &self.board
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn input(&self) -> &InputHandler {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }
}
