//! Host for a sequence of game sessions sharing one drawing surface.
//!
//! Starting a new game replaces the session wholesale and bumps the
//! generation. Redraw requests carry the generation of the session that made
//! them, and requests from a replaced session are dropped, so an old board
//! can never paint over a new one.

use std::rc::Rc;

use crate::config::GameConfig;
use crate::diagnostics::Diagnostics;
use crate::disk::DiskId;
use crate::error::HanoiError;
use crate::geometry::Point;
use crate::input::InputHandler;
use crate::session::{GameSession, Generation, RedrawRequest, SessionResponse};
use crate::surface::DrawSurface;
use crate::tower::TowerId;
use crate::tower_manager::Transfer;

/// Reacts to a solved puzzle: freezes input and tells the host UI.
pub struct VictoryCelebrator {
    on_victory: Box<dyn FnMut()>,
    diagnostics: Rc<dyn Diagnostics>,
}

impl VictoryCelebrator {
    pub fn new(on_victory: Box<dyn FnMut()>, diagnostics: Rc<dyn Diagnostics>) -> Self {
        Self {
            on_victory,
            diagnostics,
        }
    }

    pub fn celebrate(&mut self, input: &mut InputHandler) {
        self.diagnostics.message("Victory!");
        input.disable_input();
        (self.on_victory)();
    }
}

pub struct Game<S: DrawSurface> {
    surface: S,
    session: GameSession,
    celebrator: VictoryCelebrator,
    diagnostics: Rc<dyn Diagnostics>,
}

impl<S: DrawSurface> Game<S> {
    /// Starts the first session and draws it. `on_victory` runs at most once
    /// per session.
    pub fn new(
        mut surface: S,
        config: &GameConfig,
        diagnostics: Rc<dyn Diagnostics>,
        on_victory: Box<dyn FnMut()>,
    ) -> Result<Self, HanoiError> {
        diagnostics.message("New game");
        let session = GameSession::new(
            Generation::default().next(),
            config,
            &mut surface,
            diagnostics.clone(),
        )?;
        session.draw(&mut surface);

        Ok(Self {
            surface,
            session,
            celebrator: VictoryCelebrator::new(on_victory, diagnostics.clone()),
            diagnostics,
        })
    }

    /// Replaces the current session with a fresh one and draws it.
    ///
    /// On error the current session stays in place.
    pub fn start_new(&mut self, config: &GameConfig) -> Result<Generation, HanoiError> {
        self.diagnostics.message("New game");
        let generation = self.session.generation().next();
        self.session = GameSession::new(
            generation,
            config,
            &mut self.surface,
            self.diagnostics.clone(),
        )?;
        self.session.draw(&mut self.surface);
        Ok(generation)
    }

    pub fn pointer_down(&mut self, point: Point) {
        let response = self.session.pointer_down(point);
        self.handle(response);
    }

    pub fn pointer_move(&mut self, point: Point) -> Result<(), HanoiError> {
        let response = self.session.pointer_move(point)?;
        self.handle(response);
        Ok(())
    }

    pub fn pointer_up(&mut self) -> Result<(), HanoiError> {
        let response = self.session.pointer_up()?;
        self.handle(response);
        Ok(())
    }

    /// Transfers a disk directly, as if it had been dragged onto `tower`.
    pub fn transfer_disk(&mut self, disk: DiskId, tower: TowerId) -> Result<Transfer, HanoiError> {
        let (transfer, response) = self.session.transfer_disk(disk, tower)?;
        self.handle(response);
        Ok(transfer)
    }

    fn handle(&mut self, response: SessionResponse) {
        if response.victory.is_some() {
            self.celebrator.celebrate(self.session.input_mut());
        }
        if let Some(request) = response.redraw {
            self.redraw(request);
        }
    }

    /// Draws the current session if `request` belongs to it. Returns whether
    /// anything was drawn.
    pub fn redraw(&mut self, request: RedrawRequest) -> bool {
        let current = self.session.generation();
        if request.generation != current {
            tracing::warn!(
                stale = %request.generation,
                %current,
                "[hanoi] dropping redraw from a replaced session"
            );
            return false;
        }
        self.session.draw(&mut self.surface);
        true
    }

    /// A redraw request for the current session.
    pub fn redraw_request(&self) -> RedrawRequest {
        RedrawRequest {
            generation: self.session.generation(),
        }
    }

    pub fn generation(&self) -> Generation {
        self.session.generation()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
