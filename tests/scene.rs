//! End-to-end scenes against the Taffy engine and the cell font.

use std::rc::Rc;

use spark_canvas::{
    props, register_font, render_frame, CellFace, DisplayList, DrawCommand, FrameOptions, Length, NodeId, NodeTree,
    PropId, Rect, Rgba, SceneError, TaffyEngine, DEFAULT_FONT,
};

fn setup() -> (NodeTree, NodeId, TaffyEngine) {
    register_font(DEFAULT_FONT, Rc::new(CellFace::default()));
    let mut tree = NodeTree::new();
    let root = tree.create_box();
    (tree, root, TaffyEngine::new())
}

fn sized_box(tree: &mut NodeTree, width: f32, height: f32) -> NodeId {
    let node = tree.create_box();
    tree.style_mut(node)
        .unwrap()
        .apply([(PropId::Width, width), (PropId::Height, height)])
        .unwrap();
    node
}

#[test]
fn content_rect_excludes_padding_and_border() {
    let (mut tree, root, mut engine) = setup();
    tree.style_mut(root)
        .unwrap()
        .apply_named([("padding", 10.0), ("borderWidth", 2.0)])
        .unwrap();

    tree.recompute(&mut engine, root, 100.0, 100.0).unwrap();

    let layout = tree.layout(root).unwrap();
    assert_eq!(layout.bounds, Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(layout.content, Rect::new(12.0, 12.0, 76.0, 76.0));
}

#[test]
fn child_bounds_are_relative_to_parent_content() {
    let (mut tree, root, mut engine) = setup();
    tree.style_mut(root).unwrap().set(PropId::Padding, 10.0).unwrap();
    let child = sized_box(&mut tree, 30.0, 20.0);
    tree.append_child(root, child).unwrap();

    tree.recompute(&mut engine, root, 100.0, 100.0).unwrap();

    assert_eq!(tree.layout(child).unwrap().bounds, Rect::new(0.0, 0.0, 30.0, 20.0));
}

#[test]
fn row_flow_with_gap() {
    let (mut tree, root, mut engine) = setup();
    tree.style_mut(root).unwrap().set(PropId::Dir, "row").unwrap();
    tree.style_mut(root).unwrap().set(PropId::Gap, 5.0).unwrap();
    let first = sized_box(&mut tree, 30.0, 20.0);
    let second = sized_box(&mut tree, 30.0, 20.0);
    tree.append_children(root, [first, second]).unwrap();

    tree.recompute(&mut engine, root, 200.0, 100.0).unwrap();

    assert_eq!(tree.layout(first).unwrap().bounds.x, 0.0);
    assert_eq!(tree.layout(second).unwrap().bounds, Rect::new(35.0, 0.0, 30.0, 20.0));
}

#[test]
fn justify_center_in_row() {
    let (mut tree, root, mut engine) = setup();
    tree.style_mut(root)
        .unwrap()
        .apply_named([("dir", "row"), ("justifyContent", "center")])
        .unwrap();
    let child = sized_box(&mut tree, 20.0, 20.0);
    tree.append_child(root, child).unwrap();

    tree.recompute(&mut engine, root, 100.0, 100.0).unwrap();

    assert_eq!(tree.layout(child).unwrap().bounds.x, 40.0);
}

#[test]
fn percent_width_resolves_against_parent() {
    let (mut tree, root, mut engine) = setup();
    let child = tree.create_box();
    tree.style_mut(child).unwrap().set(PropId::Width, "50%").unwrap();
    tree.append_child(root, child).unwrap();

    tree.recompute(&mut engine, root, 120.0, 80.0).unwrap();

    assert_eq!(tree.layout(child).unwrap().bounds.width, 60.0);
}

#[test]
fn engine_nodes_never_leak() {
    let (mut tree, root, mut engine) = setup();
    let panel = tree.create_box();
    let label = tree.create_text("hello world");
    tree.append_child(root, panel).unwrap();
    tree.append_child(panel, label).unwrap();

    for size in [100.0, 200.0, 50.0, 300.0] {
        tree.recompute(&mut engine, root, size, size).unwrap();
        assert_eq!(engine.live_nodes(), 0);
    }
}

#[test]
fn font_size_inherits_into_text_measurement() {
    let (mut tree, root, mut engine) = setup();
    let label = tree.create_text("ab");
    tree.append_child(root, label).unwrap();
    tree.style_mut(root).unwrap().set(PropId::FontSize, 32.0).unwrap();

    tree.recompute(&mut engine, root, 200.0, 200.0).unwrap();

    assert_eq!(tree.style(label).unwrap().get::<props::FontSize>(), 32.0);
    let bounds = tree.layout(label).unwrap().bounds;
    assert_eq!((bounds.width, bounds.height), (32.0, 32.0));
}

#[test]
fn text_wraps_to_stretched_width() {
    let (mut tree, root, mut engine) = setup();
    tree.style_mut(root).unwrap().set(PropId::AlignItems, "stretch").unwrap();
    let label = tree.create_text("aa bb cc");
    tree.append_child(root, label).unwrap();

    tree.recompute(&mut engine, root, 40.0, 200.0).unwrap();

    // Two 16px lines, 24px apart.
    let bounds = tree.layout(label).unwrap().bounds;
    assert_eq!(bounds.width, 40.0);
    assert_eq!(bounds.height, 40.0);
}

#[test]
fn hidden_node_takes_no_space() {
    let (mut tree, root, mut engine) = setup();
    let hidden = sized_box(&mut tree, 50.0, 50.0);
    let shown = sized_box(&mut tree, 10.0, 10.0);
    tree.style_mut(hidden).unwrap().set(PropId::Hide, true).unwrap();
    tree.append_children(root, [hidden, shown]).unwrap();

    tree.recompute(&mut engine, root, 100.0, 100.0).unwrap();

    assert_eq!(tree.layout(shown).unwrap().bounds.y, 0.0);
}

#[test]
fn rejected_value_keeps_previous() {
    let (mut tree, root, _) = setup();
    let style = tree.style_mut(root).unwrap();
    style.set(PropId::Bg, "#123456").unwrap();

    let err = style.set_named("bg", "#12345").unwrap_err();
    assert!(matches!(err, SceneError::InvalidStyleValue { property: "bg", .. }));
    assert_eq!(tree.style(root).unwrap().get::<props::Bg>(), Rgba::new(0x12, 0x34, 0x56, 0xff));

    assert_eq!(
        tree.style_mut(root).unwrap().set_named("fontWeight", 700),
        Err(SceneError::UnknownProperty("fontWeight".into()))
    );
}

#[test]
fn auto_height_root_shrinks_to_content() {
    let (mut tree, root, mut engine) = setup();
    tree.style_mut(root).unwrap().set(PropId::Padding, 5.0).unwrap();
    let child = sized_box(&mut tree, 30.0, 20.0);
    tree.append_child(root, child).unwrap();

    tree.recompute(&mut engine, root, 100.0, Length::Auto).unwrap();

    assert_eq!(tree.layout(root).unwrap().bounds, Rect::new(0.0, 0.0, 100.0, 30.0));
    assert_eq!(tree.layout(root).unwrap().content, Rect::new(5.0, 5.0, 90.0, 20.0));
    assert_eq!(engine.live_nodes(), 0);
}

#[test]
fn root_size_tracks_viewport() {
    let (mut tree, root, mut engine) = setup();

    tree.recompute(&mut engine, root, 640.0, 480.0).unwrap();
    tree.recompute(&mut engine, root, 320.0, 240.0).unwrap();

    assert_eq!(tree.style(root).unwrap().get::<props::Width>(), Length::Points(320.0));
    assert_eq!(tree.layout(root).unwrap().bounds, Rect::new(0.0, 0.0, 320.0, 240.0));
}

#[test]
fn layout_missing_before_first_pass() {
    let (tree, root, _) = setup();

    assert_eq!(tree.layout(root), Err(SceneError::MissingLayoutResult(root)));
}

#[test]
fn unknown_font_fails_the_pass() {
    let (mut tree, root, mut engine) = setup();
    let label = tree.create_text_with_font("hello", "serif");
    tree.append_child(root, label).unwrap();

    let err = tree.recompute(&mut engine, root, 100.0, 100.0).unwrap_err();

    assert_eq!(err, SceneError::UnknownFont("serif".into()));
    assert_eq!(engine.live_nodes(), 0);
}

#[test]
fn sample_scene_renders_balanced() {
    let (mut tree, root, mut engine) = setup();
    tree.style_mut(root).unwrap().set(PropId::Padding, 32.0).unwrap();
    tree.style_mut(root).unwrap().set(PropId::Bg, "#202030").unwrap();
    tree.style_mut(root).unwrap().set(PropId::Color, "#eee").unwrap();

    let title = tree.create_text("Scene graph");
    let row = tree.create_box();
    tree.style_mut(row).unwrap().set(PropId::Dir, "row").unwrap();
    tree.style_mut(row).unwrap().set(PropId::Gap, 8.0).unwrap();
    tree.append_children(root, [title, row]).unwrap();

    let mut cards = Vec::new();
    for (i, radius) in [0.0, 6.0, 20.0].into_iter().enumerate() {
        let card = sized_box(&mut tree, 40.0, 40.0);
        tree.style_mut(card).unwrap().set(PropId::BorderRadius, radius).unwrap();
        tree.style_mut(card).unwrap().set(PropId::Bg, "#f80").unwrap();
        let caption = tree.create_text(format!("#{i}"));
        tree.append_child(card, caption).unwrap();
        cards.push(card);
    }
    tree.append_children(row, cards.iter().copied()).unwrap();

    let mut surface = DisplayList::new();
    render_frame(&mut tree, &mut engine, root, &mut surface, &FrameOptions::new(400.0, 300.0).with_scale(2.0)).unwrap();

    let commands = surface.commands();
    let saves = commands.iter().filter(|c| **c == DrawCommand::Save).count();
    let restores = commands.iter().filter(|c| **c == DrawCommand::Restore).count();
    assert_eq!(saves, restores);
    // Frame + root + title + row + 3 cards + 3 captions.
    assert_eq!(saves, 10);
    assert_eq!(surface.save_depth(), 0);
    assert_eq!(engine.live_nodes(), 0);

    // One of each corner style.
    assert!(commands.iter().any(|c| matches!(c, DrawCommand::Rect { width, .. } if *width == 40.0)));
    assert!(commands.iter().any(|c| matches!(c, DrawCommand::QuadraticCurveTo { .. })));
    assert!(commands.iter().any(|c| matches!(c, DrawCommand::Arc { radius, .. } if *radius == 20.0)));

    assert_eq!(tree.layout(cards[1]).unwrap().bounds.x, 48.0);
}
