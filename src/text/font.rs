//! Font faces and the font table.
//!
//! Loading font files is the host's job. The host registers each loaded face
//! under a short identifier; text nodes and the measurement engine only ever
//! look faces up by that identifier.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use unicode_width::UnicodeWidthChar;

use crate::error::{Result, SceneError};
use crate::geometry::{CornerRect, Rect};
use crate::renderer::Surface;
use crate::types::Rgba;

/// Identifier used by text nodes that do not name a font.
pub const DEFAULT_FONT: &str = "normal";

/// A drawable, already shaped run of text.
pub trait Outline: fmt::Debug {
    /// Fill the outline at the surface's current origin.
    fn paint(&self, surface: &mut dyn Surface, fill: Rgba);
}

/// Glyph outline provider for one font.
pub trait FontFace {
    /// Shape `text` into a single outline with its baseline at y = 0, and
    /// return it with its bounding box in the same coordinates.
    fn outline(&self, text: &str, font_size: f32) -> (Rc<dyn Outline>, CornerRect);
}

// =============================================================================
// Font table
// =============================================================================

thread_local! {
    /// Registered faces by identifier.
    static FONTS: RefCell<HashMap<String, Rc<dyn FontFace>>> = RefCell::new(HashMap::new());
}

/// Register (or replace) the face for `id`.
pub fn register_font(id: impl Into<String>, face: Rc<dyn FontFace>) {
    FONTS.with(|fonts| {
        fonts.borrow_mut().insert(id.into(), face);
    })
}

/// Look up a registered face.
pub fn font(id: &str) -> Result<Rc<dyn FontFace>> {
    FONTS.with(|fonts| {
        fonts
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| SceneError::UnknownFont(id.to_string()))
    })
}

// =============================================================================
// CellFace
// =============================================================================

/// Fixed-advance face that draws each visible character as a filled cell.
///
/// Every character advances by its Unicode display width times `advance` em,
/// so wide CJK characters take two cells and zero-width marks take none.
/// Useful when no real font data is available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFace {
    /// Cell width as a fraction of the font size.
    pub advance: f32,
    /// Height above the baseline as a fraction of the font size.
    pub ascent: f32,
    /// Depth below the baseline as a fraction of the font size.
    pub descent: f32,
}

impl Default for CellFace {
    fn default() -> Self {
        Self { advance: 0.5, ascent: 0.75, descent: 0.25 }
    }
}

/// One rectangle per visible glyph cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellOutline {
    pub cells: Vec<Rect>,
}

impl Outline for CellOutline {
    fn paint(&self, surface: &mut dyn Surface, fill: Rgba) {
        if self.cells.is_empty() {
            return;
        }
        surface.begin_path();
        for cell in &self.cells {
            surface.rect(cell.x, cell.y, cell.width, cell.height);
        }
        surface.set_fill(fill);
        surface.fill();
    }
}

impl FontFace for CellFace {
    fn outline(&self, text: &str, font_size: f32) -> (Rc<dyn Outline>, CornerRect) {
        let cell_width = self.advance * font_size;
        let top = -self.ascent * font_size;
        let height = (self.ascent + self.descent) * font_size;

        let mut cells = Vec::new();
        let mut pen = 0.0;
        for c in text.chars() {
            let width = c.width().unwrap_or(0) as f32 * cell_width;
            if width > 0.0 && !c.is_whitespace() {
                cells.push(Rect::new(pen, top, width, height));
            }
            pen += width;
        }

        let bounds = cells
            .iter()
            .copied()
            .reduce(|a, b| a.combine(&b))
            .map(|r| CornerRect { x1: r.x, y1: r.y, x2: r.right(), y2: r.bottom() })
            .unwrap_or_default();

        (Rc::new(CellOutline { cells }), bounds)
    }
}
