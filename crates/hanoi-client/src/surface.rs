//! `DrawSurface` backed by a `<canvas>` 2D context.

use hanoi_core::{Colour, CompositeOperation, DrawSurface, Rect};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wraps `canvas`, resizing it to the window's inner width.
    ///
    /// Returns `None` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let mut surface = Self { canvas, ctx };
        surface.resize_to_client_width();
        Some(surface)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize_to_client_width(&mut self) {
        let width = web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64());
        if let Some(width) = width {
            self.canvas.set_width(width.max(0.0) as u32);
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn width(&self) -> f64 {
        f64::from(self.canvas.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.canvas.height())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn set_height(&mut self, height: f64) {
        self.canvas.set_height(height.ceil().max(0.0) as u32);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.position.x, rect.position.y, rect.width, rect.height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn rect(&mut self, rect: Rect) {
        self.ctx
            .rect(rect.position.x, rect.position.y, rect.width, rect.height);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        self.ctx.set_fill_style_str(&colour.to_string());
    }

    fn set_composite_operation(&mut self, operation: CompositeOperation) {
        if let Err(err) = self.ctx.set_global_composite_operation(operation.as_str()) {
            tracing::warn!(?err, operation = operation.as_str(), "[canvas] composite operation rejected");
        }
    }
}
