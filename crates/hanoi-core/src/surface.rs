//! Drawing-surface contract.
//!
//! The methods mirror the subset of `CanvasRenderingContext2d` the game
//! needs, so a browser host can forward them one to one.

use crate::colour::Colour;
use crate::geometry::{Point, Rect};

/// How new paint combines with what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeOperation {
    /// New paint covers existing content.
    #[default]
    SourceOver,
    /// New paint goes behind existing content.
    DestinationOver,
}

impl CompositeOperation {
    /// Canvas `globalCompositeOperation` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SourceOver => "source-over",
            Self::DestinationOver => "destination-over",
        }
    }
}

/// A 2D drawing context.
pub trait DrawSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn set_height(&mut self, height: f64);

    fn clear_rect(&mut self, rect: Rect);
    fn begin_path(&mut self);
    fn close_path(&mut self);
    /// Adds a rectangle to the current path.
    fn rect(&mut self, rect: Rect);
    /// Fills the current path with the current fill colour.
    fn fill(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn set_fill_colour(&mut self, colour: Colour);
    fn set_composite_operation(&mut self, operation: CompositeOperation);

    /// Clears the whole surface.
    fn clear(&mut self) {
        let area = Rect::new(Point::ORIGIN, self.width(), self.height());
        self.clear_rect(area);
    }
}

/// A single call recorded by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect(Rect),
    BeginPath,
    ClosePath,
    Rect(Rect),
    Fill,
    Save,
    Restore,
    SetFillColour(Colour),
    SetCompositeOperation(CompositeOperation),
}

/// In-memory surface that records every call. Used for headless runs and
/// tests.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands issued since the most recent full clear, i.e. the current
    /// frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::ClearRect(_)))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Number of full clears, i.e. frames started.
    pub fn frame_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::ClearRect(_)))
            .count()
    }

    /// Filled rectangles of the current frame, paired with the colour they
    /// were filled with. Tower paths contribute one entry per rectangle.
    pub fn filled_rects(&self) -> Vec<(Rect, Colour)> {
        let mut fill = Colour::BLACK;
        let mut saved = Vec::new();
        let mut path = Vec::new();
        let mut filled = Vec::new();

        for command in self.last_frame() {
            match command {
                DrawCommand::BeginPath => path.clear(),
                DrawCommand::Rect(rect) => path.push(*rect),
                DrawCommand::SetFillColour(colour) => fill = *colour,
                DrawCommand::Save => saved.push(fill),
                DrawCommand::Restore => fill = saved.pop().unwrap_or(Colour::BLACK),
                DrawCommand::Fill => filled.extend(path.iter().map(|r| (*r, fill))),
                DrawCommand::ClearRect(_)
                | DrawCommand::ClosePath
                | DrawCommand::SetCompositeOperation(_) => {}
            }
        }

        filled
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        self.commands.push(DrawCommand::SetFillColour(colour));
    }

    fn set_composite_operation(&mut self, operation: CompositeOperation) {
        self.commands
            .push(DrawCommand::SetCompositeOperation(operation));
    }
}
