//! Text Module
//!
//! Shaping, measurement and line wrapping for text nodes.
//!
//! - [`FontFace`] / [`Outline`] - glyph outline provider interface
//! - [`register_font`] / [`font`] - the thread's font table
//! - [`CellFace`] - a fixed-advance face that needs no font data
//! - [`measure_text`] - greedy wrapping backed by a line cache
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use spark_canvas::text::{measure_text, register_font, CellFace, TextOptions};
//!
//! register_font("normal", Rc::new(CellFace::default()));
//! let m = measure_text("hello wrapped world", &TextOptions::default(), Some(80.0))?;
//! println!("{} x {}", m.bounds.width, m.bounds.height);
//! ```

mod font;
mod measure;

pub use font::*;
pub use measure::*;
