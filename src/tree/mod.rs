//! Scene Tree - Box and text nodes in an index arena.
//!
//! Nodes are indices into the tree's node table rather than objects. Each node
//! owns its ordered child list and its [`Style`]; the parent link is a plain
//! index and never owns anything.
//!
//! ```text
//! NodeId(0): Box  (parent=None,    children=[1, 2], style={padding: 32})
//! NodeId(1): Text (parent=Some(0), children=[],     style={fontSize: 32})
//! NodeId(2): Box  (parent=Some(0), children=[...],  style={dir: row})
//! ```
//!
//! A node gains a [`LayoutResult`] once a [`recompute`](NodeTree::recompute)
//! pass on it or an ancestor completes; [`draw`](NodeTree::draw) paints from
//! those results.

mod draw;
mod recompute;

use std::rc::Rc;

use crate::error::{Result, SceneError};
use crate::geometry::Rect;
use crate::layout::EngineNodeId;
use crate::style::{props, Style, StyleView};
use crate::text::{TextOptions, DEFAULT_FONT};

/// Index of a node in its [`NodeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The two node variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Container; may hold boxes and text.
    Box,
    /// Leaf holding an immutable run of text.
    Text { text: Rc<str>, font: String },
}

/// Geometry from the latest layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutResult {
    /// Outer rect, relative to the parent's content origin.
    pub bounds: Rect,
    /// Bounds shrunk by padding and border, relative to the bounds origin.
    pub content: Rect,
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    style: Style,
    layout: Option<LayoutResult>,
    /// Engine counterpart, alive only during a layout pass.
    engine: Option<EngineNodeId>,
}

/// Arena owning every node of one or more scene trees.
#[derive(Debug, Default)]
pub struct NodeTree {
    nodes: Vec<NodeData>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // =========================================================================
    // Creation
    // =========================================================================

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
            style: Style::new(),
            layout: None,
            engine: None,
        });
        id
    }

    /// Create a detached box node.
    pub fn create_box(&mut self) -> NodeId {
        self.push(NodeKind::Box)
    }

    /// Create a detached text node using [`DEFAULT_FONT`].
    pub fn create_text(&mut self, text: impl Into<Rc<str>>) -> NodeId {
        self.create_text_with_font(text, DEFAULT_FONT)
    }

    /// Create a detached text node drawn with a registered font.
    pub fn create_text_with_font(&mut self, text: impl Into<Rc<str>>, font: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text {
            text: text.into(),
            font: font.into(),
        })
    }

    // =========================================================================
    // Structure
    // =========================================================================

    fn data(&self, id: NodeId) -> Result<&NodeData> {
        self.nodes.get(id.0).ok_or(SceneError::UnknownNode(id))
    }

    fn data_mut(&mut self, id: NodeId) -> Result<&mut NodeData> {
        self.nodes.get_mut(id.0).ok_or(SceneError::UnknownNode(id))
    }

    pub fn kind(&self, id: NodeId) -> Result<&NodeKind> {
        Ok(&self.data(id)?.kind)
    }

    /// The text of a text node, `None` for boxes.
    pub fn text(&self, id: NodeId) -> Result<Option<&str>> {
        Ok(match &self.data(id)?.kind {
            NodeKind::Text { text, .. } => Some(text),
            NodeKind::Box => None,
        })
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.data(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.data(id)?.children)
    }

    /// `id` followed by its parent, grandparent, ... up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), |&node| self.nodes.get(node.0).and_then(|data| data.parent))
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that already has a parent is detached from it first. Text
    /// nodes cannot hold children, and a node cannot be placed under itself
    /// or one of its descendants.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if let NodeKind::Text { .. } = self.data(parent)?.kind {
            return Err(SceneError::NotAContainer(parent));
        }
        self.data(child)?;
        if self.ancestors(parent).any(|node| node == child) {
            return Err(SceneError::CyclicParent { parent, child });
        }

        self.detach(child)?;
        self.data_mut(parent)?.children.push(child);
        self.data_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Append several children in order.
    pub fn append_children(&mut self, parent: NodeId, children: impl IntoIterator<Item = NodeId>) -> Result<()> {
        for child in children {
            self.append_child(parent, child)?;
        }
        Ok(())
    }

    /// Remove `id` from its parent's child list, if it has a parent.
    pub fn detach(&mut self, id: NodeId) -> Result<()> {
        let Some(parent) = self.data_mut(id)?.parent.take() else {
            return Ok(());
        };
        self.data_mut(parent)?.children.retain(|&c| c != id);
        Ok(())
    }

    // =========================================================================
    // Style
    // =========================================================================

    /// Resolving view of a node's style.
    pub fn style(&self, id: NodeId) -> Result<StyleView<'_>> {
        self.data(id)?;
        let chain = self.ancestors(id).map(|node| &self.nodes[node.0].style).collect();
        Ok(StyleView::new(chain))
    }

    /// The node's own style storage, for setting properties.
    pub fn style_mut(&mut self, id: NodeId) -> Result<&mut Style> {
        Ok(&mut self.data_mut(id)?.style)
    }

    /// Measurement options for a text node, from its resolved style.
    fn text_options(&self, id: NodeId, font: &str) -> Result<TextOptions> {
        let style = self.style(id)?;
        Ok(TextOptions {
            font: font.to_string(),
            font_size: style.get::<props::FontSize>(),
            line_height: style.get::<props::LineHeight>(),
        })
    }

    // =========================================================================
    // Layout results
    // =========================================================================

    /// Geometry from the last completed layout pass.
    pub fn layout(&self, id: NodeId) -> Result<&LayoutResult> {
        self.data(id)?
            .layout
            .as_ref()
            .ok_or(SceneError::MissingLayoutResult(id))
    }
}
