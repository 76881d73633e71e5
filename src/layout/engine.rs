//! The layout engine interface.
//!
//! The scene tree never talks to a flexbox implementation directly. It builds a
//! transient mirror tree through this trait, asks for one layout computation,
//! reads the geometry back and frees every handle it created.

use crate::error::Result;
use crate::geometry::{EdgeValues, Rect};
use crate::types::{Align, Direction, Flow, Justify, Length};

/// Handle to a node owned by a [`LayoutEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EngineNodeId(pub u64);

/// Intrinsic content measurement for leaf nodes.
///
/// Receives the available width, or `None` when the engine imposes no width
/// constraint, and returns the content rect.
pub type MeasureFn = Box<dyn FnMut(Option<f32>) -> Result<Rect>>;

/// Geometry computed for one engine node.
///
/// `left`/`top` are relative to the parent node's outer edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineLayout {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub padding: EdgeValues<f32>,
    pub border: EdgeValues<f32>,
}

/// Operations the scene tree needs from a flexbox engine.
///
/// Setters apply to all edges/axes at once; the style system has no per-edge
/// properties.
pub trait LayoutEngine {
    fn create_node(&mut self) -> Result<EngineNodeId>;
    fn free_node(&mut self, node: EngineNodeId);

    fn set_width(&mut self, node: EngineNodeId, value: Length);
    fn set_height(&mut self, node: EngineNodeId, value: Length);
    fn set_min_width(&mut self, node: EngineNodeId, value: Option<Length>);
    fn set_min_height(&mut self, node: EngineNodeId, value: Option<Length>);
    fn set_max_width(&mut self, node: EngineNodeId, value: Option<Length>);
    fn set_max_height(&mut self, node: EngineNodeId, value: Option<Length>);

    fn set_padding(&mut self, node: EngineNodeId, value: Length);
    fn set_margin(&mut self, node: EngineNodeId, value: Length);
    fn set_border(&mut self, node: EngineNodeId, width: f32);
    fn set_gap(&mut self, node: EngineNodeId, value: Length);

    fn set_align_items(&mut self, node: EngineNodeId, value: Align);
    fn set_align_content(&mut self, node: EngineNodeId, value: Align);
    fn set_justify_content(&mut self, node: EngineNodeId, value: Justify);
    fn set_wrap(&mut self, node: EngineNodeId, wrap: bool);
    fn set_flex_direction(&mut self, node: EngineNodeId, value: Flow);
    fn set_flex_shrink(&mut self, node: EngineNodeId, factor: f32);
    fn set_flex_grow(&mut self, node: EngineNodeId, factor: f32);
    /// A ratio of 0 clears the constraint.
    fn set_aspect_ratio(&mut self, node: EngineNodeId, ratio: f32);
    fn set_display(&mut self, node: EngineNodeId, visible: bool);

    fn set_measure(&mut self, node: EngineNodeId, measure: MeasureFn);

    /// Append `child` as the last child of `parent`.
    fn insert_child(&mut self, parent: EngineNodeId, child: EngineNodeId);

    /// Run one layout pass rooted at `root`.
    ///
    /// `None` on an axis leaves it unconstrained, sizing the root to its content.
    fn compute(&mut self, root: EngineNodeId, width: Option<f32>, height: Option<f32>, direction: Direction) -> Result<()>;

    fn computed(&self, node: EngineNodeId) -> Result<EngineLayout>;
}
