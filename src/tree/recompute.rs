//! Layout pass: mirror the subtree into a [`LayoutEngine`], compute, read back.

use tracing::{debug, trace};

use crate::error::{Result, SceneError};
use crate::geometry::Rect;
use crate::layout::{EngineNodeId, LayoutEngine, MeasureFn};
use crate::style::PropId;
use crate::text::measure_text;
use crate::types::{Direction, Length};

use super::{LayoutResult, NodeId, NodeKind, NodeTree};

impl NodeTree {
    /// Lay out the subtree at `root` inside a `width` x `height` viewport.
    ///
    /// Pins the root's width and height to the viewport and zeroes its margin,
    /// then stores a [`LayoutResult`] on every node of the subtree. Engine
    /// nodes are released before returning, whether or not the pass
    /// succeeded.
    ///
    /// A plain number is a fixed size. [`Length::Auto`] leaves that axis
    /// unconstrained so the root shrinks to its content; a percentage has no
    /// parent to resolve against and behaves the same way.
    pub fn recompute(
        &mut self,
        engine: &mut dyn LayoutEngine,
        root: NodeId,
        width: impl Into<Length>,
        height: impl Into<Length>,
    ) -> Result<()> {
        let (width, height) = (width.into(), height.into());
        {
            let style = self.style_mut(root)?;
            style.set(PropId::Width, width)?;
            style.set(PropId::Height, height)?;
            style.set(PropId::Margin, 0.0)?;
        }

        let available = |length: Length| match length {
            Length::Points(n) => Some(n),
            Length::Auto | Length::Percent(_) => None,
        };
        let (avail_w, avail_h) = (available(width), available(height));

        let order = self.preorder(root);
        debug!(?root, ?width, ?height, nodes = order.len(), "layout pass");

        let outcome = self
            .build(engine, root)
            .and_then(|handle| engine.compute(handle, avail_w, avail_h, Direction::Ltr))
            .and_then(|()| self.read_back(engine, &order));

        self.release(engine, &order);
        outcome
    }

    /// `root` and its descendants, parents before children.
    fn preorder(&self, root: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(data) = self.nodes.get(id.0) {
                stack.extend(data.children.iter().rev());
            }
        }
        order
    }

    /// Phase 1: create engine nodes and push resolved styles into them.
    fn build(&mut self, engine: &mut dyn LayoutEngine, id: NodeId) -> Result<EngineNodeId> {
        if let Some(handle) = self.data(id)?.engine {
            return Ok(handle);
        }

        let handle = engine.create_node()?;
        self.data_mut(id)?.engine = Some(handle);
        self.style(id)?.write_to_layout_node(engine, handle);

        if let NodeKind::Text { text, font } = &self.data(id)?.kind {
            let options = self.text_options(id, font)?;
            let text = text.clone();
            let measure: MeasureFn = Box::new(move |max_width: Option<f32>| -> Result<Rect> {
                trace!(?max_width, "measuring text leaf");
                Ok(measure_text(&text, &options, max_width)?.bounds)
            });
            engine.set_measure(handle, measure);
        }

        let children = self.data(id)?.children.clone();
        for child in children {
            let child_handle = self.build(engine, child)?;
            engine.insert_child(handle, child_handle);
        }

        Ok(handle)
    }

    /// Phase 3: convert engine geometry into bounds and content rects.
    ///
    /// The engine reports positions from the parent's outer edge; bounds are
    /// stored relative to the parent's content origin instead.
    fn read_back(&mut self, engine: &dyn LayoutEngine, order: &[NodeId]) -> Result<()> {
        for (index, &id) in order.iter().enumerate() {
            let Some(handle) = self.data(id)?.engine else {
                continue;
            };
            let computed = engine.computed(handle)?;

            let origin = match self.data(id)?.parent {
                Some(parent) if index > 0 => {
                    let parent_layout = self.data(parent)?.layout.ok_or(SceneError::MissingLayoutResult(parent))?;
                    (parent_layout.content.x, parent_layout.content.y)
                }
                _ => (0.0, 0.0),
            };

            let bounds = Rect::new(computed.left - origin.0, computed.top - origin.1, computed.width, computed.height);
            let gaps = computed.padding.add(computed.border);
            let content = Rect::new(
                gaps.left,
                gaps.top,
                computed.width - gaps.left - gaps.right,
                computed.height - gaps.top - gaps.bottom,
            );

            self.data_mut(id)?.layout = Some(LayoutResult { bounds, content });
        }
        Ok(())
    }

    /// Phase 4: free every engine node the pass created.
    fn release(&mut self, engine: &mut dyn LayoutEngine, order: &[NodeId]) {
        let mut freed = 0usize;
        for &id in order {
            if let Some(handle) = self.nodes.get_mut(id.0).and_then(|data| data.engine.take()) {
                engine.free_node(handle);
                freed += 1;
            }
        }
        trace!(freed, "released engine nodes");
    }
}
