//! Paint pass: boxes first, then children, then a text node's glyphs.

use crate::error::Result;
use crate::renderer::{draw_box, SavedState, Surface, Translation};
use crate::style::props;
use crate::text::measure_text;

use super::{NodeId, NodeKind, NodeTree};

impl NodeTree {
    /// Paint `id` and its subtree from the last layout pass.
    ///
    /// The surface transform must be at the parent's content origin; it is
    /// back there when this returns, including on error. Nodes with `hide`
    /// set are skipped along with their subtree.
    pub fn draw(&self, surface: &mut dyn Surface, id: NodeId) -> Result<()> {
        let data = self.data(id)?;
        let layout = *self.layout(id)?;
        let style = self.style(id)?;

        if style.get::<props::Hide>() {
            return Ok(());
        }

        {
            let mut saved = SavedState::new(&mut *surface);
            saved.translate(layout.bounds.x, layout.bounds.y);
            draw_box(
                &mut *saved,
                layout.bounds.width,
                layout.bounds.height,
                style.get::<props::BorderRadius>(),
                style.get::<props::Bg>(),
            );

            saved.translate(layout.content.x, layout.content.y);
            for &child in &data.children {
                self.draw(&mut *saved, child)?;
            }
        }

        if let NodeKind::Text { text, font } = &data.kind {
            let options = self.text_options(id, font)?;
            let measured = measure_text(text, &options, Some(layout.content.width))?;
            let color = style.get::<props::Color>();

            let mut origin = Translation::new(
                surface,
                layout.bounds.x + layout.content.x,
                layout.bounds.y + layout.content.y,
            );
            for placement in &measured.outlines {
                let mut at = Translation::new(&mut *origin, placement.x, placement.y);
                placement.outline.paint(&mut *at, color);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SceneError;
    use crate::geometry::Rect;
    use crate::layout::TaffyEngine;
    use crate::renderer::{DisplayList, DrawCommand, Transform};
    use crate::style::PropId;
    use crate::text::{register_font, CellFace, DEFAULT_FONT};
    use crate::types::Rgba;
    use std::rc::Rc;

    fn count(list: &DisplayList, wanted: DrawCommand) -> usize {
        list.commands().iter().filter(|&&c| c == wanted).count()
    }

    #[test]
    fn test_single_box_commands() {
        let mut tree = NodeTree::new();
        let root = tree.create_box();
        tree.style_mut(root).unwrap().set(PropId::Bg, "#f00").unwrap();
        tree.recompute(&mut TaffyEngine::new(), root, 100.0, 50.0).unwrap();

        let mut list = DisplayList::new();
        tree.draw(&mut list, root).unwrap();

        assert_eq!(
            list.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::Translate { dx: 0.0, dy: 0.0 },
                DrawCommand::BeginPath,
                DrawCommand::Rect { x: 0.0, y: 0.0, width: 100.0, height: 50.0 },
                DrawCommand::ClosePath,
                DrawCommand::SetFill(Rgba::rgb(255, 0, 0)),
                DrawCommand::Fill,
                DrawCommand::Translate { dx: 0.0, dy: 0.0 },
                DrawCommand::Restore,
            ]
        );
    }

    #[test]
    fn test_draw_restores_transform() {
        register_font(DEFAULT_FONT, Rc::new(CellFace::default()));
        let mut tree = NodeTree::new();
        let root = tree.create_box();
        let card = tree.create_box();
        let label = tree.create_text("two words");
        tree.append_child(root, card).unwrap();
        tree.append_child(card, label).unwrap();
        tree.style_mut(root).unwrap().set(PropId::Padding, 8.0).unwrap();
        tree.style_mut(card).unwrap().set(PropId::Padding, 4.0).unwrap();
        tree.style_mut(card).unwrap().set(PropId::BorderRadius, 3.0).unwrap();
        tree.recompute(&mut TaffyEngine::new(), root, 200.0, 100.0).unwrap();

        let mut list = DisplayList::new();
        tree.draw(&mut list, root).unwrap();

        assert_eq!(list.save_depth(), 0);
        assert_eq!(list.transform(), Transform::default());
        assert_eq!(count(&list, DrawCommand::Save), 3);
        assert_eq!(count(&list, DrawCommand::Restore), 3);
    }

    #[test]
    fn test_text_painted_with_inherited_color() {
        register_font(DEFAULT_FONT, Rc::new(CellFace::default()));
        let mut tree = NodeTree::new();
        let root = tree.create_box();
        let label = tree.create_text("hi");
        tree.append_child(root, label).unwrap();
        tree.style_mut(root).unwrap().set(PropId::Color, "#0f0").unwrap();
        tree.recompute(&mut TaffyEngine::new(), root, 100.0, 100.0).unwrap();

        let mut list = DisplayList::new();
        tree.draw(&mut list, label).unwrap();

        assert_eq!(count(&list, DrawCommand::SetFill(Rgba::rgb(0, 255, 0))), 1);
        // Two 8px cells, shifted down to the baseline.
        assert_eq!(count(&list, DrawCommand::Rect { x: 0.0, y: -12.0, width: 8.0, height: 16.0 }), 1);
        assert_eq!(count(&list, DrawCommand::Rect { x: 8.0, y: -12.0, width: 8.0, height: 16.0 }), 1);
        assert!(list.commands().contains(&DrawCommand::Translate { dx: 0.0, dy: 12.0 }));
        assert_eq!(list.transform(), Transform::default());
    }

    #[test]
    fn test_hidden_subtree_is_skipped() {
        register_font(DEFAULT_FONT, Rc::new(CellFace::default()));
        let mut tree = NodeTree::new();
        let root = tree.create_box();
        let hidden = tree.create_box();
        let label = tree.create_text("secret");
        tree.append_child(root, hidden).unwrap();
        tree.append_child(hidden, label).unwrap();
        tree.style_mut(hidden).unwrap().set(PropId::Hide, true).unwrap();
        tree.recompute(&mut TaffyEngine::new(), root, 100.0, 100.0).unwrap();

        let mut list = DisplayList::new();
        tree.draw(&mut list, root).unwrap();

        assert_eq!(count(&list, DrawCommand::Save), 1);
        assert_eq!(count(&list, DrawCommand::Fill), 0);
    }

    #[test]
    fn test_draw_without_layout_fails() {
        let mut tree = NodeTree::new();
        let root = tree.create_box();
        let mut list = DisplayList::new();

        assert_eq!(tree.draw(&mut list, root), Err(SceneError::MissingLayoutResult(root)));
        assert!(list.commands().is_empty());
    }

    #[test]
    fn test_text_draw_uses_content_width() {
        register_font(DEFAULT_FONT, Rc::new(CellFace::default()));
        let mut tree = NodeTree::new();
        let root = tree.create_box();
        let label = tree.create_text("aa bb cc");
        tree.append_child(root, label).unwrap();
        tree.style_mut(root).unwrap().set(PropId::AlignItems, "stretch").unwrap();
        tree.recompute(&mut TaffyEngine::new(), root, 40.0, 200.0).unwrap();

        let layout = *tree.layout(label).unwrap();
        assert_eq!(layout.content, Rect::new(0.0, 0.0, layout.bounds.width, layout.bounds.height));

        let mut list = DisplayList::new();
        tree.draw(&mut list, label).unwrap();

        // "aa bb" (40px) fits, "cc" wraps: one fill per line.
        assert_eq!(count(&list, DrawCommand::Fill), 2);
    }
}
