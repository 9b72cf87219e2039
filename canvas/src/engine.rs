use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::export::{self, ExportError};
use crate::geom::{Point, Rect};
use crate::input::{InputState, PointerInput, StrokeEnd};
use crate::render;
use crate::script::StrokeScript;
use crate::surface::RasterSurface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub surface: RasterSurface,
    pub input: InputState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Input events ---

    /// Begin a stroke at the event's local point. Events without a usable
    /// point (empty touch list) leave the machine idle.
    pub fn on_pointer_down(&mut self, input: &PointerInput, bounds: &Rect) -> Action {
        let Some(local) = input.local_point(bounds) else {
            return Action::None;
        };
        self.surface.begin_stroke(local);
        self.input = InputState::Drawing;
        Action::None
    }

    /// Extend the current stroke. Ignored while idle.
    pub fn on_pointer_move(&mut self, input: &PointerInput, bounds: &Rect) -> Action {
        if !self.input.is_drawing() {
            return Action::None;
        }
        let Some(local) = input.local_point(bounds) else {
            return Action::None;
        };
        self.surface.extend_stroke(local);
        Action::RenderNeeded
    }

    /// End the current stroke, whatever ended it.
    pub fn on_stroke_end(&mut self, _reason: StrokeEnd) -> Action {
        self.input = InputState::Idle;
        Action::None
    }

    pub fn on_pointer_up(&mut self) -> Action {
        self.on_stroke_end(StrokeEnd::PointerUp)
    }

    pub fn on_pointer_leave(&mut self) -> Action {
        self.on_stroke_end(StrokeEnd::PointerLeave)
    }

    pub fn on_touch_end(&mut self) -> Action {
        self.on_stroke_end(StrokeEnd::TouchEnd)
    }

    // --- Surface ---

    /// Repaint the surface blank. Input state is left alone.
    pub fn reset(&mut self) -> Action {
        self.surface.reset();
        Action::RenderNeeded
    }

    /// Draw every stroke in `script` through the regular pointer path, with
    /// the canvas anchored at the client origin.
    pub fn replay(&mut self, script: &StrokeScript) -> Action {
        let bounds = Rect::default();
        for stroke in &script.strokes {
            let mut points = stroke.iter().map(|&[x, y]| Point::new(x, y));
            let Some(first) = points.next() else {
                continue;
            };
            self.on_pointer_down(&PointerInput::Mouse { client: first }, &bounds);
            for p in points {
                self.on_pointer_move(&PointerInput::Mouse { client: p }, &bounds);
            }
            self.on_pointer_up();
        }
        Action::RenderNeeded
    }

    // --- Queries ---

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.input.is_drawing()
    }

    /// Whether nothing has been drawn since the last reset.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.surface.is_blank()
    }

    /// Encode the current buffer as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the encoder rejects the buffer.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        export::encode_png(&self.surface)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element and paint the
    /// initial blank surface.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context or the first paint fails.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let core = EngineCore::new();
        canvas.set_width(core.surface.width());
        canvas.set_height(core.surface.height());
        let engine = Self { canvas, ctx, core };
        engine.render()?;
        Ok(engine)
    }

    /// Current on-screen bounding box of the canvas element.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let r = self.canvas.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, input: &PointerInput) -> Action {
        let bounds = self.bounds();
        self.core.on_pointer_down(input, &bounds)
    }

    pub fn on_pointer_move(&mut self, input: &PointerInput) -> Action {
        let bounds = self.bounds();
        self.core.on_pointer_move(input, &bounds)
    }

    pub fn on_stroke_end(&mut self, reason: StrokeEnd) -> Action {
        self.core.on_stroke_end(reason)
    }

    pub fn reset(&mut self) -> Action {
        self.core.reset()
    }

    // --- Render ---

    /// Copy the raster buffer to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the `ImageData` cannot be built or blitted.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core.surface)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.core.is_drawing()
    }

    /// Encode the current buffer as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the encoder rejects the buffer.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        self.core.export_png()
    }
}
