//! Style registry and resolver.
//!
//! A node's [`Style`] is sparse: it stores only explicitly set properties.
//! Reading a property goes through a [`StyleView`], which walks the ownership
//! chain for inherited properties and falls back to the declared default.
//!
//! # Example
//!
//! ```ignore
//! use spark_canvas::style::{props, PropId};
//!
//! let root = tree.create_box();
//! tree.style_mut(root)?.set(PropId::Padding, 32)?;
//! tree.style_mut(root)?.set(PropId::Color, "#fff")?;
//!
//! let padding = tree.style(root)?.get::<props::Padding>();
//! ```

mod registry;
mod validate;

pub use registry::*;
pub use validate::ValueKind;

use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, SceneError};
use crate::layout::{EngineNodeId, LayoutEngine};
use crate::types::{Align, Flow, Justify, Length, Rgba};

// =============================================================================
// RAW AND RESOLVED VALUES
// =============================================================================

/// Unvalidated input handed to [`Style::set`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleInput {
    Number(f32),
    Text(String),
    Bool(bool),
    Null,
}

impl StyleInput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for StyleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<f32> for StyleInput {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

/// Narrowed to `f32` with `as`: style values are single precision, so digits
/// beyond `f32` are dropped.
impl From<f64> for StyleInput {
    fn from(value: f64) -> Self {
        Self::Number(value as f32)
    }
}

impl From<i32> for StyleInput {
    fn from(value: i32) -> Self {
        Self::Number(value as f32)
    }
}

impl From<bool> for StyleInput {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for StyleInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StyleInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The textual form the length validators accept back.
impl From<Length> for StyleInput {
    fn from(value: Length) -> Self {
        match value {
            Length::Auto => Self::Text("auto".to_string()),
            Length::Points(n) => Self::Number(n),
            Length::Percent(p) => Self::Text(format!("{p}%")),
        }
    }
}

impl<T: Into<StyleInput>> From<Option<T>> for StyleInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A validated, normalized property value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    Number(f32),
    Length(Length),
    OptionalLength(Option<Length>),
    Color(Rgba),
    Bool(bool),
    Flow(Flow),
    Align(Align),
    Justify(Justify),
}

/// Conversion from a resolved [`StyleValue`] into a property's static type.
pub trait FromStyleValue: Sized + Default {
    fn from_style_value(value: StyleValue) -> Option<Self>;
}

macro_rules! from_style_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromStyleValue for $ty {
                fn from_style_value(value: StyleValue) -> Option<Self> {
                    match value {
                        StyleValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

from_style_value! {
    f32 => Number,
    Length => Length,
    Option<Length> => OptionalLength,
    Rgba => Color,
    bool => Bool,
    Flow => Flow,
    Align => Align,
    Justify => Justify,
}

/// Unpack a value that has already passed its property's validator.
pub(crate) fn typed<T: FromStyleValue>(value: StyleValue) -> T {
    T::from_style_value(value).unwrap_or_default()
}

// =============================================================================
// PER-NODE STORAGE
// =============================================================================

/// Locally set properties of one node.
#[derive(Debug, Clone, Default)]
pub struct Style {
    stored: HashMap<PropId, StyleValue>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `input` against the property's kind and store it.
    ///
    /// On rejection the previous value is left untouched.
    pub fn set(&mut self, prop: PropId, input: impl Into<StyleInput>) -> Result<()> {
        let input = input.into();
        let def = prop.def();

        let Some(value) = def.kind.validate(&input) else {
            return Err(SceneError::InvalidStyleValue {
                property: def.name,
                value: input.to_string(),
            });
        };

        self.stored.insert(prop, value);
        Ok(())
    }

    /// Set a property by its camelCase name.
    pub fn set_named(&mut self, name: &str, input: impl Into<StyleInput>) -> Result<()> {
        let prop: PropId = name.parse()?;
        self.set(prop, input)
    }

    /// Set each entry in order.
    ///
    /// Not atomic: the first rejected entry aborts the batch, and entries
    /// before it stay applied.
    pub fn apply<I, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (PropId, V)>,
        V: Into<StyleInput>,
    {
        for (prop, input) in entries {
            self.set(prop, input)?;
        }
        Ok(())
    }

    /// [`apply`](Self::apply) keyed by camelCase property names.
    pub fn apply_named<'a, I, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Into<StyleInput>,
    {
        for (name, input) in entries {
            self.set_named(name, input)?;
        }
        Ok(())
    }

    /// Remove a local override so the property resolves through inheritance again.
    pub fn unset(&mut self, prop: PropId) -> Option<StyleValue> {
        self.stored.remove(&prop)
    }

    /// The locally stored value, without inheritance or defaults.
    pub fn local(&self, prop: PropId) -> Option<StyleValue> {
        self.stored.get(&prop).copied()
    }

    pub fn len(&self) -> usize {
        self.stored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stored.is_empty()
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Resolves properties for one node through its ancestor chain.
///
/// `chain[0]` is the node's own style, followed by its parent's, up to the root.
#[derive(Debug, Clone)]
pub struct StyleView<'a> {
    chain: Vec<&'a Style>,
}

impl<'a> StyleView<'a> {
    pub fn new(chain: Vec<&'a Style>) -> Self {
        Self { chain }
    }

    /// Local value, else nearest ancestor's value if inherited, else default.
    pub fn value(&self, prop: PropId) -> StyleValue {
        let def = prop.def();
        let mut chain = self.chain.iter();

        if let Some(value) = chain.next().and_then(|own| own.local(prop)) {
            return value;
        }

        if def.inherited {
            if let Some(value) = chain.find_map(|style| style.local(prop)) {
                return value;
            }
        }

        def.default
    }

    /// Typed lookup.
    pub fn get<P: Prop>(&self) -> P::Value {
        typed(self.value(P::ID))
    }

    /// Push every layout-relevant property into an engine node.
    pub fn write_to_layout_node(&self, engine: &mut dyn LayoutEngine, node: EngineNodeId) {
        for def in PROPS.iter() {
            if let Some(effect) = def.layout {
                effect(engine, node, self.value(def.id));
            }
        }
    }
}
