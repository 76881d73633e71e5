//! The fixed property table.
//!
//! Properties are a closed enumeration ([`PropId`]). Each one has a static
//! definition in [`PROPS`] and a marker type in [`props`] that carries its
//! value type for typed lookups.

use std::str::FromStr;

use crate::error::SceneError;
use crate::layout::{EngineNodeId, LayoutEngine};
use crate::types::{Align, Flow, Justify, Length, Rgba};

use super::validate::ValueKind;
use super::{typed, FromStyleValue, StyleValue};

/// Pushes one resolved value into an engine node.
pub type LayoutEffect = fn(&mut dyn LayoutEngine, EngineNodeId, StyleValue);

/// Static definition of a style property.
#[derive(Debug, Clone, Copy)]
pub struct PropDef {
    pub id: PropId,
    /// camelCase name used in error messages and string-keyed style maps.
    pub name: &'static str,
    pub kind: ValueKind,
    pub default: StyleValue,
    pub inherited: bool,
    /// `None` for paint-only properties.
    pub layout: Option<LayoutEffect>,
}

/// Every style property. Discriminants index into [`PROPS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropId {
    Color,
    Bg,
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    FontSize,
    LineHeight,
    Wrap,
    AlignItems,
    AlignContent,
    JustifyContent,
    Dir,
    Shrink,
    Grow,
    Gap,
    BorderColor,
    BorderRadius,
    BorderWidth,
    Hide,
    Opacity,
    Padding,
    Margin,
    AspectRatio,
}

impl PropId {
    pub fn def(self) -> &'static PropDef {
        &PROPS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }
}

impl FromStr for PropId {
    type Err = SceneError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        PROPS
            .iter()
            .find(|def| def.name == name)
            .map(|def| def.id)
            .ok_or_else(|| SceneError::UnknownProperty(name.to_string()))
    }
}

const fn prop(
    id: PropId,
    name: &'static str,
    kind: ValueKind,
    default: StyleValue,
    inherited: bool,
    layout: Option<LayoutEffect>,
) -> PropDef {
    PropDef { id, name, kind, default, inherited, layout }
}

const ZERO: StyleValue = StyleValue::Length(Length::Points(0.0));

pub static PROPS: [PropDef; 26] = [
    prop(PropId::Color, "color", ValueKind::Color, StyleValue::Color(Rgba::BLACK), true, None),
    prop(PropId::Bg, "bg", ValueKind::Color, StyleValue::Color(Rgba::TRANSPARENT), false, None),
    prop(PropId::Width, "width", ValueKind::LengthAuto, StyleValue::Length(Length::Auto), false, Some(width)),
    prop(PropId::Height, "height", ValueKind::LengthAuto, StyleValue::Length(Length::Auto), false, Some(height)),
    prop(PropId::MinWidth, "minWidth", ValueKind::LengthOptional, StyleValue::OptionalLength(None), false, Some(min_width)),
    prop(PropId::MinHeight, "minHeight", ValueKind::LengthOptional, StyleValue::OptionalLength(None), false, Some(min_height)),
    prop(PropId::MaxWidth, "maxWidth", ValueKind::LengthOptional, StyleValue::OptionalLength(None), false, Some(max_width)),
    prop(PropId::MaxHeight, "maxHeight", ValueKind::LengthOptional, StyleValue::OptionalLength(None), false, Some(max_height)),
    // Font size and line height only reach layout through text measurement.
    prop(PropId::FontSize, "fontSize", ValueKind::Unitless, StyleValue::Number(16.0), true, None),
    prop(PropId::LineHeight, "lineHeight", ValueKind::Unitless, StyleValue::Number(1.5), true, None),
    prop(PropId::Wrap, "wrap", ValueKind::Bool, StyleValue::Bool(false), false, Some(wrap)),
    prop(PropId::AlignItems, "alignItems", ValueKind::Align, StyleValue::Align(Align::Start), false, Some(align_items)),
    prop(PropId::AlignContent, "alignContent", ValueKind::Align, StyleValue::Align(Align::Start), false, Some(align_content)),
    prop(PropId::JustifyContent, "justifyContent", ValueKind::Justify, StyleValue::Justify(Justify::Start), false, Some(justify_content)),
    prop(PropId::Dir, "dir", ValueKind::Flow, StyleValue::Flow(Flow::Column), false, Some(dir)),
    prop(PropId::Shrink, "shrink", ValueKind::Unitless, StyleValue::Number(0.0), false, Some(shrink)),
    prop(PropId::Grow, "grow", ValueKind::Unitless, StyleValue::Number(0.0), false, Some(grow)),
    prop(PropId::Gap, "gap", ValueKind::LengthPercent, ZERO, false, Some(gap)),
    prop(PropId::BorderColor, "borderColor", ValueKind::Color, StyleValue::Color(Rgba::TRANSPARENT), false, None),
    prop(PropId::BorderRadius, "borderRadius", ValueKind::Unitless, StyleValue::Number(0.0), false, None),
    prop(PropId::BorderWidth, "borderWidth", ValueKind::Unitless, StyleValue::Number(0.0), false, Some(border_width)),
    prop(PropId::Hide, "hide", ValueKind::Bool, StyleValue::Bool(false), false, Some(hide)),
    prop(PropId::Opacity, "opacity", ValueKind::Unitless, StyleValue::Number(1.0), false, None),
    prop(PropId::Padding, "padding", ValueKind::LengthPercent, ZERO, false, Some(padding)),
    prop(PropId::Margin, "margin", ValueKind::LengthAuto, ZERO, false, Some(margin)),
    prop(PropId::AspectRatio, "aspectRatio", ValueKind::Unitless, StyleValue::Number(0.0), false, Some(aspect_ratio)),
];

// =============================================================================
// LAYOUT EFFECTS
// =============================================================================

fn width(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_width(node, typed(value));
}

fn height(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_height(node, typed(value));
}

fn min_width(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_min_width(node, typed(value));
}

fn min_height(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_min_height(node, typed(value));
}

fn max_width(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_max_width(node, typed(value));
}

fn max_height(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_max_height(node, typed(value));
}

fn wrap(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_wrap(node, typed(value));
}

fn align_items(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_align_items(node, typed(value));
}

fn align_content(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_align_content(node, typed(value));
}

fn justify_content(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_justify_content(node, typed(value));
}

fn dir(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_flex_direction(node, typed(value));
}

fn shrink(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_flex_shrink(node, typed(value));
}

fn grow(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_flex_grow(node, typed(value));
}

fn gap(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_gap(node, typed(value));
}

fn border_width(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_border(node, typed(value));
}

fn hide(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    let hidden: bool = typed(value);
    engine.set_display(node, !hidden);
}

fn padding(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_padding(node, typed(value));
}

fn margin(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_margin(node, typed(value));
}

fn aspect_ratio(engine: &mut dyn LayoutEngine, node: EngineNodeId, value: StyleValue) {
    engine.set_aspect_ratio(node, typed(value));
}

// =============================================================================
// TYPED MARKERS
// =============================================================================

/// A style property known at compile time, with its value type.
pub trait Prop {
    const ID: PropId;
    type Value: FromStyleValue;
}

/// Marker types for [`StyleView::get`](crate::style::StyleView::get).
pub mod props {
    use super::{Align, Flow, Justify, Length, Prop, PropId, Rgba};

    macro_rules! markers {
        ($($name:ident: $value:ty),* $(,)?) => {
            $(
                pub struct $name;

                impl Prop for $name {
                    const ID: PropId = PropId::$name;
                    type Value = $value;
                }
            )*
        };
    }

    markers! {
        Color: Rgba,
        Bg: Rgba,
        Width: Length,
        Height: Length,
        MinWidth: Option<Length>,
        MinHeight: Option<Length>,
        MaxWidth: Option<Length>,
        MaxHeight: Option<Length>,
        FontSize: f32,
        LineHeight: f32,
        Wrap: bool,
        AlignItems: Align,
        AlignContent: Align,
        JustifyContent: Justify,
        Dir: Flow,
        Shrink: f32,
        Grow: f32,
        Gap: Length,
        BorderColor: Rgba,
        BorderRadius: f32,
        BorderWidth: f32,
        Hide: bool,
        Opacity: f32,
        Padding: Length,
        Margin: Length,
        AspectRatio: f32,
    }
}
