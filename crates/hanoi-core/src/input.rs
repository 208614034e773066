//! Drag-and-drop protocol.
//!
//! Pointer-down grabs a top disk, pointer-move drags it, pointer-up drops it
//! on the nearest tower. Points are in surface-local coordinates.

use std::rc::Rc;

use crate::diagnostics::Diagnostics;
use crate::disk::DiskId;
use crate::error::HanoiError;
use crate::geometry::Point;
use crate::tower_manager::{TowerManager, Transfer, TransferObserver};

/// A disk being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub disk: DiskId,
    /// Pointer position minus disk position at grab time.
    pub grab_offset: Point,
}

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputOutcome {
    Ignored,
    Grabbed(DiskId),
    Dragged(DiskId),
    Dropped(Transfer),
}

impl InputOutcome {
    /// Moves and drops change what is on screen; grabs do not.
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Self::Dragged(_) | Self::Dropped(_))
    }
}

pub struct InputHandler {
    input_enabled: bool,
    drag: Option<Drag>,
    diagnostics: Rc<dyn Diagnostics>,
}

impl InputHandler {
    pub fn new(diagnostics: Rc<dyn Diagnostics>) -> Self {
        let mut handler = Self {
            input_enabled: false,
            drag: None,
            diagnostics,
        };
        handler.enable_input();
        handler
    }

    pub fn pointer_down(&mut self, board: &TowerManager, point: Point) -> InputOutcome {
        if !self.input_enabled {
            return InputOutcome::Ignored;
        }
        let Some(id) = board.get_clicked_disk(point) else {
            return InputOutcome::Ignored;
        };
        if !board.is_top_disk(id) {
            return InputOutcome::Ignored;
        }
        let Some(disk) = board.disk(id) else {
            return InputOutcome::Ignored;
        };

        self.drag = Some(Drag {
            disk: id,
            grab_offset: point - disk.position(),
        });
        tracing::debug!(disk = id.0, %point, "[input] grabbed");
        InputOutcome::Grabbed(id)
    }

    pub fn pointer_move(
        &mut self,
        board: &mut TowerManager,
        point: Point,
    ) -> Result<InputOutcome, HanoiError> {
        let Some(drag) = self.drag else {
            return Ok(InputOutcome::Ignored);
        };

        board.move_disk(drag.disk, point - drag.grab_offset)?;
        self.show_distance_to_each_tower(board, drag.disk);
        Ok(InputOutcome::Dragged(drag.disk))
    }

    /// Drops the dragged disk on the tower nearest its centre. The transfer
    /// notifies `observer`.
    pub fn pointer_up(
        &mut self,
        board: &mut TowerManager,
        observer: &mut dyn TransferObserver,
    ) -> Result<InputOutcome, HanoiError> {
        let Some(drag) = self.drag.take() else {
            return Ok(InputOutcome::Ignored);
        };

        let centre = board
            .disk(drag.disk)
            .ok_or(HanoiError::UnknownDisk(drag.disk))?
            .centre();
        let closest = board.find_closest_tower(centre);
        let transfer = board.transfer_disk(drag.disk, closest, observer)?;
        Ok(InputOutcome::Dropped(transfer))
    }

    fn show_distance_to_each_tower(&self, board: &TowerManager, id: DiskId) {
        let Some(disk) = board.disk(id) else {
            return;
        };
        self.diagnostics.clear();
        for tower in board.towers() {
            self.diagnostics.message(&format!(
                "Distance to tower {}: {}",
                tower.id().index() + 1,
                disk.centre().distance_to(tower.top())
            ));
        }
    }

    /// Only stops new grabs; a drag in progress can still be dropped.
    pub fn disable_input(&mut self) {
        self.diagnostics.message("Input disabled");
        self.input_enabled = false;
    }

    pub fn enable_input(&mut self) {
        self.diagnostics.message("Input enabled");
        self.input_enabled = true;
    }

    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag(&self) -> Option<Drag> {
        self.drag
    }
}
