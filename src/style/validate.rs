//! Value validators.
//!
//! Every property declares one [`ValueKind`]. A kind is a first-match
//! alternation over small parsers; each parser either accepts the raw input and
//! returns its normalized [`StyleValue`], or declines with `None`.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Align, Flow, Justify, Length, Rgba};

use super::{StyleInput, StyleValue};

type Parser = fn(&StyleInput) -> Option<StyleValue>;

/// Closed set of value types a property can accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Any number.
    Unitless,
    /// `true` or `false`.
    Bool,
    /// A percentage string such as `"50%"`.
    Percent,
    /// Number or percentage.
    LengthPercent,
    /// Number, percentage or `null`.
    LengthOptional,
    /// Number, percentage or `"auto"`.
    LengthAuto,
    /// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` or `"transparent"`.
    Color,
    /// `"row"` or `"column"`.
    Flow,
    /// `"start"`, `"end"`, `"center"` or `"stretch"`.
    Align,
    /// `"start"`, `"end"`, `"center"`, `"space-between"`, `"space-around"` or `"space-evenly"`.
    Justify,
}

impl ValueKind {
    /// Validate and normalize `input`. `None` means the value is rejected.
    pub fn validate(self, input: &StyleInput) -> Option<StyleValue> {
        let parsers: &[Parser] = match self {
            Self::Unitless => &[unitless],
            Self::Bool => &[boolean],
            Self::Percent => &[percent],
            Self::LengthPercent => &[points, percent],
            Self::LengthOptional => &[optional_points, optional_percent, null],
            Self::LengthAuto => &[points, percent, auto],
            Self::Color => &[hex_color, transparent],
            Self::Flow => &[flow],
            Self::Align => &[align],
            Self::Justify => &[justify],
        };

        first_match(parsers, input)
    }
}

fn first_match(parsers: &[Parser], input: &StyleInput) -> Option<StyleValue> {
    parsers.iter().find_map(|parse| parse(input))
}

// =============================================================================
// PARSERS
// =============================================================================

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?%$").expect("static pattern"));

fn unitless(input: &StyleInput) -> Option<StyleValue> {
    match input {
        StyleInput::Number(n) => Some(StyleValue::Number(*n)),
        _ => None,
    }
}

fn boolean(input: &StyleInput) -> Option<StyleValue> {
    match input {
        StyleInput::Bool(b) => Some(StyleValue::Bool(*b)),
        _ => None,
    }
}

fn points(input: &StyleInput) -> Option<StyleValue> {
    match input {
        StyleInput::Number(n) => Some(StyleValue::Length(Length::Points(*n))),
        _ => None,
    }
}

fn percent(input: &StyleInput) -> Option<StyleValue> {
    let StyleInput::Text(text) = input else {
        return None;
    };
    if !PERCENT_RE.is_match(text) {
        return None;
    }
    let value = text.trim_end_matches('%').parse::<f32>().ok()?;
    Some(StyleValue::Length(Length::Percent(value)))
}

fn auto(input: &StyleInput) -> Option<StyleValue> {
    match input {
        StyleInput::Text(text) if text == "auto" => Some(StyleValue::Length(Length::Auto)),
        _ => None,
    }
}

fn null(input: &StyleInput) -> Option<StyleValue> {
    match input {
        StyleInput::Null => Some(StyleValue::OptionalLength(None)),
        _ => None,
    }
}

fn optional_points(input: &StyleInput) -> Option<StyleValue> {
    match points(input)? {
        StyleValue::Length(length) => Some(StyleValue::OptionalLength(Some(length))),
        _ => None,
    }
}

fn optional_percent(input: &StyleInput) -> Option<StyleValue> {
    match percent(input)? {
        StyleValue::Length(length) => Some(StyleValue::OptionalLength(Some(length))),
        _ => None,
    }
}

fn hex_color(input: &StyleInput) -> Option<StyleValue> {
    match input {
        StyleInput::Text(text) => Rgba::from_hex(text).map(StyleValue::Color),
        _ => None,
    }
}

fn transparent(input: &StyleInput) -> Option<StyleValue> {
    match input {
        StyleInput::Text(text) if text == "transparent" => Some(StyleValue::Color(Rgba::TRANSPARENT)),
        _ => None,
    }
}

fn flow(input: &StyleInput) -> Option<StyleValue> {
    let value = match input.as_text()? {
        "row" => Flow::Row,
        "column" => Flow::Column,
        _ => return None,
    };
    Some(StyleValue::Flow(value))
}

fn align(input: &StyleInput) -> Option<StyleValue> {
    let value = match input.as_text()? {
        "start" => Align::Start,
        "end" => Align::End,
        "center" => Align::Center,
        "stretch" => Align::Stretch,
        _ => return None,
    };
    Some(StyleValue::Align(value))
}

fn justify(input: &StyleInput) -> Option<StyleValue> {
    let value = match input.as_text()? {
        "start" => Justify::Start,
        "end" => Justify::End,
        "center" => Justify::Center,
        "space-between" => Justify::SpaceBetween,
        "space-around" => Justify::SpaceAround,
        "space-evenly" => Justify::SpaceEvenly,
        _ => return None,
    };
    Some(StyleValue::Justify(value))
}
