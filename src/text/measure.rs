//! Text Measurement
//!
//! Greedy line wrapping over shaped text with a memoization cache.
//!
//! Every string that is measured as a whole (a single line, or a wrapping
//! candidate) is shaped once per `(text, font, font size)` and cached for the
//! life of the thread. Wrapping re-measures whole candidate lines instead of
//! slicing one shaped paragraph, so a cached entry never depends on line height
//! or on the width being wrapped to.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use tracing::trace;

use crate::error::{Result, SceneError};
use crate::geometry::Rect;

use super::font::{font, Outline, DEFAULT_FONT};

/// Font selection for a measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    pub font: String,
    pub font_size: f32,
    /// Line advance as a multiple of `font_size`.
    pub line_height: f32,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            font_size: 16.0,
            line_height: 1.5,
        }
    }
}

/// A shaped outline and where to draw it, relative to the content origin.
#[derive(Debug, Clone)]
pub struct OutlinePlacement {
    pub outline: Rc<dyn Outline>,
    pub x: f32,
    pub y: f32,
}

impl PartialEq for OutlinePlacement {
    /// Same shaped outline at the same offset.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.outline, &other.outline) && self.x == other.x && self.y == other.y
    }
}

/// Size of a text run and the outlines that draw it.
///
/// `bounds` always starts at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub bounds: Rect,
    pub outlines: Vec<OutlinePlacement>,
}

impl Measurement {
    pub fn empty() -> Self {
        Self { bounds: Rect::ZERO, outlines: Vec::new() }
    }
}

// =============================================================================
// Cache
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    text: String,
    font: String,
    font_size: u32,
}

impl CacheKey {
    fn new(text: &str, options: &TextOptions) -> Self {
        Self {
            text: text.to_string(),
            font: options.font.clone(),
            font_size: options.font_size.to_bits(),
        }
    }
}

// Both tables are per thread: a measurement on one thread is never a cache hit
// on another.
thread_local! {
    /// Shaped single-line results.
    static LINE_CACHE: RefCell<HashMap<CacheKey, Measurement>> = RefCell::new(HashMap::new());

    /// Every key ever requested. Diagnostics only; nothing is evicted.
    static REQUESTED_KEYS: RefCell<HashSet<CacheKey>> = RefCell::new(HashSet::new());
}

/// Number of cached single-line results on the calling thread.
pub fn cache_len() -> usize {
    LINE_CACHE.with(|cache| cache.borrow().len())
}

/// Number of distinct keys ever requested.
pub fn requested_key_count() -> usize {
    REQUESTED_KEYS.with(|keys| keys.borrow().len())
}

/// Drop all cached results, e.g. after replacing a registered font.
pub fn clear_cache() {
    LINE_CACHE.with(|cache| cache.borrow_mut().clear());
    REQUESTED_KEYS.with(|keys| keys.borrow_mut().clear());
}

/// Measure `text` as one unbreakable line, shaping it only on a cache miss.
fn measure_line(text: &str, options: &TextOptions) -> Result<Measurement> {
    let key = CacheKey::new(text, options);
    REQUESTED_KEYS.with(|keys| {
        keys.borrow_mut().insert(key.clone());
    });

    if let Some(hit) = LINE_CACHE.with(|cache| cache.borrow().get(&key).cloned()) {
        trace!(text, "line cache hit");
        return Ok(hit);
    }

    trace!(text, font = %options.font, size = options.font_size, "shaping line");
    let face = font(&options.font)?;
    let (outline, corners) = face.outline(text, options.font_size);
    let rect = Rect::from_corners(corners);

    let result = Measurement {
        bounds: Rect::new(0.0, 0.0, rect.width, rect.height),
        outlines: vec![OutlinePlacement { outline, x: -rect.x, y: -rect.y }],
    };

    LINE_CACHE.with(|cache| {
        cache.borrow_mut().insert(key, result.clone());
    });

    Ok(result)
}

// =============================================================================
// Wrapping
// =============================================================================

/// Accumulates committed lines.
struct Lines<'a> {
    options: &'a TextOptions,
    bounds: Option<Rect>,
    outlines: Vec<OutlinePlacement>,
    y: f32,
}

impl Lines<'_> {
    fn commit(&mut self, line: &str) -> Result<()> {
        let measured = measure_line(line, self.options)?;
        let rect = measured.bounds.shift(0.0, self.y);

        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.combine(&rect),
            None => rect,
        });

        let y = self.y;
        self.outlines.extend(
            measured
                .outlines
                .into_iter()
                .map(|placement| OutlinePlacement { y: placement.y + y, ..placement }),
        );

        self.y += self.options.font_size * self.options.line_height;
        Ok(())
    }
}

/// Measure `text`, wrapping greedily at spaces when `max_width` is given.
///
/// Tokens are never split: a single word wider than `max_width` gets a line
/// of its own and overflows it. When that word is the first token, the empty
/// line before it is still committed, so it starts one line advance down.
pub fn measure_text(text: &str, options: &TextOptions, max_width: Option<f32>) -> Result<Measurement> {
    if text.is_empty() {
        return Ok(Measurement::empty());
    }

    let Some(max_width) = max_width else {
        return measure_line(text, options);
    };

    let mut lines = Lines {
        options,
        bounds: None,
        outlines: Vec::new(),
        y: 0.0,
    };
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure_line(&candidate, options)?.bounds.width > max_width {
            // Commits even an empty buffer, leaving a blank first line.
            lines.commit(&current)?;
            current = word.to_string();
        } else {
            current = candidate;
        }
    }

    lines.commit(&current)?;

    let bounds = lines.bounds.ok_or(SceneError::EmptyMeasurementBounds)?;
    Ok(Measurement { bounds, outlines: lines.outlines })
}
