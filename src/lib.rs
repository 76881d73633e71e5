//! # spark-canvas
//!
//! Retained-mode box and text scene graph for 2D canvases.
//!
//! Layout is flexbox, computed by [Taffy](https://github.com/DioxusLabs/taffy)
//! behind a narrow engine interface. Painting goes to any [`Surface`]: a
//! canvas-like sink with paths, fills and a save/restore transform stack.
//!
//! ## Architecture
//!
//! Scene nodes live in a [`NodeTree`] arena and are addressed by [`NodeId`].
//! Each node carries a sparse [`Style`]; unset properties resolve through
//! ancestors (for inherited properties) and then to the property table's
//! defaults.
//!
//! ```text
//! Style maps → NodeTree → recompute (engine mirror) → LayoutResults → draw → Surface
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Colors, lengths and flex enums
//! - [`geometry`] - `Rect`, per-edge values
//! - [`style`] - Property table, validators, inheritance
//! - [`layout`] - Layout engine interface and the Taffy adapter
//! - [`text`] - Fonts, measurement, line wrapping
//! - [`renderer`] - Drawing surface, box painting, recording surface
//! - [`tree`] - The scene tree, layout and paint passes
//! - [`pipeline`] - One-call frame rendering
//!
//! ## Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use spark_canvas::*;
//!
//! register_font(DEFAULT_FONT, Rc::new(CellFace::default()));
//!
//! let mut tree = NodeTree::new();
//! let root = tree.create_box();
//! let title = tree.create_text("Hello");
//! tree.append_child(root, title)?;
//! tree.style_mut(root)?.apply_named([("padding", 32.into()), ("bg", "#223".into())])?;
//!
//! let mut surface = DisplayList::new();
//! render_frame(&mut tree, &mut TaffyEngine::new(), root, &mut surface, &FrameOptions::new(800.0, 600.0))?;
//! ```

pub mod error;
pub mod geometry;
pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod style;
pub mod text;
pub mod tree;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{Result, SceneError};

pub use geometry::{CornerRect, EdgeValues, Rect};

pub use style::{props, Prop, PropId, Style, StyleInput, StyleValue, StyleView};

pub use layout::{EngineLayout, EngineNodeId, LayoutEngine, MeasureFn, TaffyEngine};

pub use text::{
    clear_cache, measure_text, register_font, CellFace, FontFace, Measurement, Outline, TextOptions,
    DEFAULT_FONT,
};

pub use renderer::{DisplayList, DrawCommand, SavedState, Surface, Translation};

pub use tree::{LayoutResult, NodeId, NodeKind, NodeTree};

pub use pipeline::{render_frame, FrameOptions};
