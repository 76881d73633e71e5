//! DisplayList - a [`Surface`] that records commands instead of rasterizing.
//!
//! Hosts can replay the list onto a real backend; tests use it to assert on
//! exactly what a paint pass emitted.

use crate::geometry::Rect;
use crate::types::Rgba;

use super::surface::Surface;

/// One recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    QuadraticCurveTo { cx: f32, cy: f32, x: f32, y: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32 },
    Arc { cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32 },
    ClosePath,
    SetFill(Rgba),
    Fill,
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    Scale { sx: f32, sy: f32 },
    Clear(Rect),
}

/// Current transform: scale then offset, as canvas `scale`/`translate` compose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub sx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self { sx: 1.0, sy: 1.0, tx: 0.0, ty: 0.0 }
    }
}

/// Recording surface.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    transform: Transform,
    saved: Vec<Transform>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The transform in effect right now.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Number of `save` calls not yet matched by `restore`.
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    fn record(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl Surface for DisplayList {
    fn begin_path(&mut self) {
        self.record(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.record(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.record(DrawCommand::LineTo { x, y });
    }

    fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.record(DrawCommand::QuadraticCurveTo { cx, cy, x, y });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.record(DrawCommand::Rect { x, y, width, height });
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.record(DrawCommand::Arc { cx, cy, radius, start_angle, end_angle });
    }

    fn close_path(&mut self) {
        self.record(DrawCommand::ClosePath);
    }

    fn set_fill(&mut self, color: Rgba) {
        self.record(DrawCommand::SetFill(color));
    }

    fn fill(&mut self) {
        self.record(DrawCommand::Fill);
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
        self.record(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
        self.record(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform.tx += dx * self.transform.sx;
        self.transform.ty += dy * self.transform.sy;
        self.record(DrawCommand::Translate { dx, dy });
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform.sx *= sx;
        self.transform.sy *= sy;
        self.record(DrawCommand::Scale { sx, sy });
    }

    fn clear(&mut self, area: Rect) {
        self.record(DrawCommand::Clear(area));
    }
}
