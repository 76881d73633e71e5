//! Geometry primitives.
//!
//! `Rect` is a plain value: every operation returns a new rectangle and never
//! mutates its receiver.

/// Axis-aligned rectangle. Width and height may be negative while a rect is
/// being assembled, but layout only ever stores non-negative extents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Two opposite corners, as glyph bounding boxes are reported.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// One value per box edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeValues<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> EdgeValues<T> {
    /// Same value on all four edges.
    pub const fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl EdgeValues<f32> {
    /// Edge-wise sum, used to fold padding and border into a single gap.
    pub fn add(self, other: Self) -> Self {
        Self {
            top: self.top + other.top,
            right: self.right + other.right,
            bottom: self.bottom + other.bottom,
            left: self.left + other.left,
        }
    }
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rect spanning two corners.
    pub fn from_corners(corners: CornerRect) -> Self {
        let CornerRect { x1, y1, x2, y2 } = corners;
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Translate by `(dx, dy)`.
    pub fn shift(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Smallest rect covering both `self` and `other`.
    pub fn combine(&self, other: &Rect) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let width = self.right().max(other.right()) - x;
        let height = self.bottom().max(other.bottom()) - y;
        Self::new(x, y, width, height)
    }

    /// Distances from each edge of `self` to the matching edge of `inner`.
    pub fn gaps(&self, inner: &Rect) -> EdgeValues<f32> {
        EdgeValues {
            top: inner.y - self.y,
            right: self.right() - inner.right(),
            bottom: self.bottom() - inner.bottom(),
            left: inner.x - self.x,
        }
    }

    /// Shrink by the given edge distances. The origin is kept as-is.
    pub fn with_gaps(&self, gaps: EdgeValues<f32>) -> Self {
        Self::new(
            self.x,
            self.y,
            self.width - gaps.left - gaps.right,
            self.height - gaps.top - gaps.bottom,
        )
    }

    /// True when `other` lies entirely within `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}
