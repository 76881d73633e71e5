//! Taffy Bridge - Integration with the Taffy layout engine
//!
//! Implements [`LayoutEngine`] on top of a `TaffyTree`. Each setter rewrites one
//! field of the node's Taffy `Style`; measurement callbacks are stored as the
//! node context and invoked from `compute_layout_with_measure`.

use std::collections::HashMap;

use taffy::{
    AlignContent as TaffyAlignContent, AlignItems as TaffyAlignItems, AvailableSpace,
    Dimension as TaffyDimension, Display, FlexDirection as TaffyFlexDirection,
    FlexWrap as TaffyFlexWrap, JustifyContent as TaffyJustifyContent, LengthPercentage,
    LengthPercentageAuto, NodeId, Rect as TaffyRect, Size, Style, TaffyTree,
};
use tracing::{debug, warn};

use crate::error::{Result, SceneError};
use crate::geometry::EdgeValues;
use crate::types::{Align, Direction, Flow, Justify, Length};

use super::engine::{EngineLayout, EngineNodeId, LayoutEngine, MeasureFn};

// =============================================================================
// VALUE CONVERSION
// =============================================================================

/// Convert our Length to Taffy's Dimension.
fn to_taffy_dimension(length: Length) -> TaffyDimension {
    match length {
        Length::Auto => TaffyDimension::Auto,
        Length::Points(n) => TaffyDimension::Length(n),
        Length::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

/// Absent min/max constraints map to `Auto`.
fn to_taffy_limit(length: Option<Length>) -> TaffyDimension {
    length.map_or(TaffyDimension::Auto, to_taffy_dimension)
}

fn to_taffy_lp(length: Length) -> LengthPercentage {
    match length {
        // Padding and gap validators never produce Auto.
        Length::Auto => LengthPercentage::Length(0.0),
        Length::Points(n) => LengthPercentage::Length(n),
        Length::Percent(p) => LengthPercentage::Percent(p / 100.0),
    }
}

fn to_taffy_lpa(length: Length) -> LengthPercentageAuto {
    match length {
        Length::Auto => LengthPercentageAuto::Auto,
        Length::Points(n) => LengthPercentageAuto::Length(n),
        Length::Percent(p) => LengthPercentageAuto::Percent(p / 100.0),
    }
}

fn to_taffy_align_items(align: Align) -> TaffyAlignItems {
    match align {
        Align::Start => TaffyAlignItems::FlexStart,
        Align::End => TaffyAlignItems::FlexEnd,
        Align::Center => TaffyAlignItems::Center,
        Align::Stretch => TaffyAlignItems::Stretch,
    }
}

fn to_taffy_align_content(align: Align) -> TaffyAlignContent {
    match align {
        Align::Start => TaffyAlignContent::FlexStart,
        Align::End => TaffyAlignContent::FlexEnd,
        Align::Center => TaffyAlignContent::Center,
        Align::Stretch => TaffyAlignContent::Stretch,
    }
}

fn to_taffy_justify_content(justify: Justify) -> TaffyJustifyContent {
    match justify {
        Justify::Start => TaffyJustifyContent::FlexStart,
        Justify::End => TaffyJustifyContent::FlexEnd,
        Justify::Center => TaffyJustifyContent::Center,
        Justify::SpaceBetween => TaffyJustifyContent::SpaceBetween,
        Justify::SpaceAround => TaffyJustifyContent::SpaceAround,
        Justify::SpaceEvenly => TaffyJustifyContent::SpaceEvenly,
    }
}

fn to_taffy_flex_direction(flow: Flow) -> TaffyFlexDirection {
    match flow {
        Flow::Row => TaffyFlexDirection::Row,
        Flow::Column => TaffyFlexDirection::Column,
    }
}

fn edges(rect: TaffyRect<f32>) -> EdgeValues<f32> {
    EdgeValues {
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
        left: rect.left,
    }
}

// =============================================================================
// ENGINE
// =============================================================================

/// [`LayoutEngine`] backed by Taffy's flexbox implementation.
pub struct TaffyEngine {
    tree: TaffyTree<MeasureFn>,
    // Maps: our handle → Taffy NodeId
    nodes: HashMap<EngineNodeId, NodeId>,
    next_id: u64,
}

impl Default for TaffyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TaffyEngine {
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            nodes: HashMap::new(),
            next_id: 0,
        }
    }

    /// Number of handles created and not yet freed.
    pub fn live_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, node: EngineNodeId) -> Result<NodeId> {
        self.nodes
            .get(&node)
            .copied()
            .ok_or_else(|| SceneError::Engine(format!("unknown layout node {}", node.0)))
    }

    /// Rewrite one node's style in place.
    fn update(&mut self, node: EngineNodeId, edit: impl FnOnce(&mut Style)) {
        let Some(&id) = self.nodes.get(&node) else {
            warn!(node = node.0, "style update for unknown layout node");
            return;
        };

        let mut style = match self.tree.style(id) {
            Ok(style) => style.clone(),
            Err(err) => {
                warn!(node = node.0, %err, "cannot read layout style");
                return;
            }
        };
        edit(&mut style);

        if let Err(err) = self.tree.set_style(id, style) {
            warn!(node = node.0, %err, "cannot write layout style");
        }
    }
}

impl LayoutEngine for TaffyEngine {
    fn create_node(&mut self) -> Result<EngineNodeId> {
        let id = self.tree.new_leaf(Style::default())?;
        let handle = EngineNodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(handle, id);
        Ok(handle)
    }

    fn free_node(&mut self, node: EngineNodeId) {
        let Some(id) = self.nodes.remove(&node) else {
            warn!(node = node.0, "free of unknown layout node");
            return;
        };
        if let Err(err) = self.tree.remove(id) {
            warn!(node = node.0, %err, "cannot remove layout node");
        }
    }

    fn set_width(&mut self, node: EngineNodeId, value: Length) {
        self.update(node, |s| s.size.width = to_taffy_dimension(value));
    }

    fn set_height(&mut self, node: EngineNodeId, value: Length) {
        self.update(node, |s| s.size.height = to_taffy_dimension(value));
    }

    fn set_min_width(&mut self, node: EngineNodeId, value: Option<Length>) {
        self.update(node, |s| s.min_size.width = to_taffy_limit(value));
    }

    fn set_min_height(&mut self, node: EngineNodeId, value: Option<Length>) {
        self.update(node, |s| s.min_size.height = to_taffy_limit(value));
    }

    fn set_max_width(&mut self, node: EngineNodeId, value: Option<Length>) {
        self.update(node, |s| s.max_size.width = to_taffy_limit(value));
    }

    fn set_max_height(&mut self, node: EngineNodeId, value: Option<Length>) {
        self.update(node, |s| s.max_size.height = to_taffy_limit(value));
    }

    fn set_padding(&mut self, node: EngineNodeId, value: Length) {
        let lp = to_taffy_lp(value);
        self.update(node, |s| {
            s.padding = TaffyRect { left: lp, right: lp, top: lp, bottom: lp };
        });
    }

    fn set_margin(&mut self, node: EngineNodeId, value: Length) {
        let lpa = to_taffy_lpa(value);
        self.update(node, |s| {
            s.margin = TaffyRect { left: lpa, right: lpa, top: lpa, bottom: lpa };
        });
    }

    fn set_border(&mut self, node: EngineNodeId, width: f32) {
        let lp = LengthPercentage::Length(width);
        self.update(node, |s| {
            s.border = TaffyRect { left: lp, right: lp, top: lp, bottom: lp };
        });
    }

    fn set_gap(&mut self, node: EngineNodeId, value: Length) {
        let lp = to_taffy_lp(value);
        self.update(node, |s| s.gap = Size { width: lp, height: lp });
    }

    fn set_align_items(&mut self, node: EngineNodeId, value: Align) {
        self.update(node, |s| s.align_items = Some(to_taffy_align_items(value)));
    }

    fn set_align_content(&mut self, node: EngineNodeId, value: Align) {
        self.update(node, |s| s.align_content = Some(to_taffy_align_content(value)));
    }

    fn set_justify_content(&mut self, node: EngineNodeId, value: Justify) {
        self.update(node, |s| s.justify_content = Some(to_taffy_justify_content(value)));
    }

    fn set_wrap(&mut self, node: EngineNodeId, wrap: bool) {
        self.update(node, |s| {
            s.flex_wrap = if wrap { TaffyFlexWrap::Wrap } else { TaffyFlexWrap::NoWrap };
        });
    }

    fn set_flex_direction(&mut self, node: EngineNodeId, value: Flow) {
        self.update(node, |s| s.flex_direction = to_taffy_flex_direction(value));
    }

    fn set_flex_shrink(&mut self, node: EngineNodeId, factor: f32) {
        self.update(node, |s| s.flex_shrink = factor);
    }

    fn set_flex_grow(&mut self, node: EngineNodeId, factor: f32) {
        self.update(node, |s| s.flex_grow = factor);
    }

    fn set_aspect_ratio(&mut self, node: EngineNodeId, ratio: f32) {
        self.update(node, |s| s.aspect_ratio = (ratio > 0.0).then_some(ratio));
    }

    fn set_display(&mut self, node: EngineNodeId, visible: bool) {
        self.update(node, |s| s.display = if visible { Display::Flex } else { Display::None });
    }

    fn set_measure(&mut self, node: EngineNodeId, measure: MeasureFn) {
        let Some(&id) = self.nodes.get(&node) else {
            warn!(node = node.0, "measure callback for unknown layout node");
            return;
        };
        if let Err(err) = self.tree.set_node_context(id, Some(measure)) {
            warn!(node = node.0, %err, "cannot attach measure callback");
        }
    }

    fn insert_child(&mut self, parent: EngineNodeId, child: EngineNodeId) {
        let (Some(&parent_id), Some(&child_id)) = (self.nodes.get(&parent), self.nodes.get(&child)) else {
            warn!(parent = parent.0, child = child.0, "insert with unknown layout node");
            return;
        };
        if let Err(err) = self.tree.add_child(parent_id, child_id) {
            warn!(parent = parent.0, child = child.0, %err, "cannot insert layout child");
        }
    }

    fn compute(
        &mut self,
        root: EngineNodeId,
        width: Option<f32>,
        height: Option<f32>,
        _direction: Direction,
    ) -> Result<()> {
        // Taffy only lays out left-to-right, which is the only direction we use.
        let root = self.node(root)?;
        let available = Size {
            width: width.map_or(AvailableSpace::MaxContent, AvailableSpace::Definite),
            height: height.map_or(AvailableSpace::MaxContent, AvailableSpace::Definite),
        };

        debug!(?width, ?height, nodes = self.nodes.len(), "computing layout");

        // First measurement failure wins; the pass itself runs to completion.
        let mut failure: Option<SceneError> = None;
        let mut measure_fn = |known_dimensions: Size<Option<f32>>,
                              available_space: Size<AvailableSpace>,
                              _node_id: NodeId,
                              context: Option<&mut MeasureFn>,
                              _style: &Style| {
            let Some(measure) = context else {
                return Size::ZERO;
            };

            let max_width = known_dimensions.width.or(match available_space.width {
                AvailableSpace::Definite(w) => Some(w),
                AvailableSpace::MinContent | AvailableSpace::MaxContent => None,
            });

            match measure(max_width) {
                Ok(rect) => Size {
                    width: known_dimensions.width.unwrap_or(rect.width),
                    height: known_dimensions.height.unwrap_or(rect.height),
                },
                Err(err) => {
                    failure.get_or_insert(err);
                    Size::ZERO
                }
            }
        };

        self.tree.compute_layout_with_measure(root, available, &mut measure_fn)?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn computed(&self, node: EngineNodeId) -> Result<EngineLayout> {
        let layout = self.tree.layout(self.node(node)?)?;
        Ok(EngineLayout {
            left: layout.location.x,
            top: layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
            padding: edges(layout.padding),
            border: edges(layout.border),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn sized(engine: &mut TaffyEngine, width: f32, height: f32) -> EngineNodeId {
        let node = engine.create_node().unwrap();
        engine.set_flex_shrink(node, 0.0);
        engine.set_width(node, Length::Points(width));
        engine.set_height(node, Length::Points(height));
        node
    }

    #[test]
    fn test_dimension_conversion() {
        assert!(matches!(to_taffy_dimension(Length::Auto), TaffyDimension::Auto));
        assert!(matches!(to_taffy_dimension(Length::Points(50.0)), TaffyDimension::Length(50.0)));
        // Percent: 50% → 0.5
        if let TaffyDimension::Percent(p) = to_taffy_dimension(Length::Percent(50.0)) {
            assert!((p - 0.5).abs() < 0.001);
        } else {
            panic!("Expected Percent variant");
        }
        assert!(matches!(to_taffy_limit(None), TaffyDimension::Auto));
    }

    #[test]
    fn test_padding_and_border_read_back() {
        let mut engine = TaffyEngine::new();
        let root = sized(&mut engine, 100.0, 100.0);
        engine.set_padding(root, Length::Points(10.0));
        engine.set_border(root, 2.0);

        engine.compute(root, Some(100.0), Some(100.0), Direction::Ltr).unwrap();
        let layout = engine.computed(root).unwrap();

        assert_eq!(layout.width, 100.0);
        assert_eq!(layout.height, 100.0);
        assert_eq!(layout.padding, EdgeValues::all(10.0));
        assert_eq!(layout.border, EdgeValues::all(2.0));
    }

    #[test]
    fn test_flex_row() {
        let mut engine = TaffyEngine::new();
        let parent = sized(&mut engine, 40.0, 10.0);
        engine.set_flex_direction(parent, Flow::Row);
        engine.set_align_items(parent, Align::Start);

        let first = sized(&mut engine, 10.0, 5.0);
        let second = sized(&mut engine, 10.0, 5.0);
        engine.insert_child(parent, first);
        engine.insert_child(parent, second);

        engine.compute(parent, Some(40.0), Some(10.0), Direction::Ltr).unwrap();

        assert_eq!(engine.computed(first).unwrap().left, 0.0);
        assert_eq!(engine.computed(second).unwrap().left, 10.0);
    }

    #[test]
    fn test_justify_content_center() {
        let mut engine = TaffyEngine::new();
        let parent = sized(&mut engine, 100.0, 10.0);
        engine.set_flex_direction(parent, Flow::Row);
        engine.set_justify_content(parent, Justify::Center);

        let child = sized(&mut engine, 20.0, 5.0);
        engine.insert_child(parent, child);

        engine.compute(parent, Some(100.0), Some(10.0), Direction::Ltr).unwrap();

        // (100 - 20) / 2 = 40
        assert_eq!(engine.computed(child).unwrap().left, 40.0);
    }

    #[test]
    fn test_hidden_node_takes_no_space() {
        let mut engine = TaffyEngine::new();
        let parent = sized(&mut engine, 100.0, 100.0);
        engine.set_flex_direction(parent, Flow::Column);

        let hidden = sized(&mut engine, 10.0, 30.0);
        engine.set_display(hidden, false);
        let shown = sized(&mut engine, 10.0, 5.0);
        engine.insert_child(parent, hidden);
        engine.insert_child(parent, shown);

        engine.compute(parent, Some(100.0), Some(100.0), Direction::Ltr).unwrap();

        assert_eq!(engine.computed(shown).unwrap().top, 0.0);
    }

    #[test]
    fn test_measure_callback_sizes_leaf() {
        let mut engine = TaffyEngine::new();
        let parent = engine.create_node().unwrap();
        engine.set_align_items(parent, Align::Start);

        let leaf = engine.create_node().unwrap();
        engine.set_measure(leaf, Box::new(|_: Option<f32>| -> Result<Rect> { Ok(Rect::new(0.0, 0.0, 42.0, 12.0)) }));
        engine.insert_child(parent, leaf);

        engine.compute(parent, Some(200.0), Some(200.0), Direction::Ltr).unwrap();
        let layout = engine.computed(leaf).unwrap();

        assert_eq!(layout.width, 42.0);
        assert_eq!(layout.height, 12.0);
    }

    #[test]
    fn test_measure_failure_is_reported() {
        let mut engine = TaffyEngine::new();
        let root = engine.create_node().unwrap();
        engine.set_align_items(root, Align::Start);
        let leaf = engine.create_node().unwrap();
        engine.set_measure(leaf, Box::new(|_: Option<f32>| -> Result<Rect> { Err(SceneError::UnknownFont("mono".into())) }));
        engine.insert_child(root, leaf);

        let err = engine.compute(root, Some(50.0), Some(50.0), Direction::Ltr).unwrap_err();
        assert_eq!(err, SceneError::UnknownFont("mono".into()));
    }

    #[test]
    fn test_unconstrained_height_fits_content() {
        let mut engine = TaffyEngine::new();
        let root = engine.create_node().unwrap();
        engine.set_width(root, Length::Points(100.0));
        let child = sized(&mut engine, 10.0, 25.0);
        engine.insert_child(root, child);

        engine.compute(root, Some(100.0), None, Direction::Ltr).unwrap();

        assert_eq!(engine.computed(root).unwrap().height, 25.0);
    }

    #[test]
    fn test_free_releases_handles() {
        let mut engine = TaffyEngine::new();
        let parent = engine.create_node().unwrap();
        let child = engine.create_node().unwrap();
        engine.insert_child(parent, child);
        assert_eq!(engine.live_nodes(), 2);

        engine.free_node(parent);
        engine.free_node(child);
        assert_eq!(engine.live_nodes(), 0);
        assert!(engine.computed(child).is_err());
    }
}
