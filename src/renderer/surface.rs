//! Drawing surface interface and scoped transform guards.

use std::ops::{Deref, DerefMut};

use crate::geometry::Rect;
use crate::types::Rgba;

/// A 2D immediate-mode drawing target with a canvas-style path API.
pub trait Surface {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn quadratic_curve_to(&mut self, cx: f32, cy: f32, x: f32, y: f32);
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Angles in radians, clockwise from the positive x axis.
    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32);
    fn close_path(&mut self);

    fn set_fill(&mut self, color: Rgba);
    fn fill(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn scale(&mut self, sx: f32, sy: f32);

    fn clear(&mut self, area: Rect);
}

/// Saves the surface state on creation and restores it on drop.
pub struct SavedState<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SavedState<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for SavedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// Translates the surface on creation and applies the inverse on drop.
pub struct Translation<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    dx: f32,
    dy: f32,
}

impl<'a, S: Surface + ?Sized> Translation<'a, S> {
    pub fn new(surface: &'a mut S, dx: f32, dy: f32) -> Self {
        surface.translate(dx, dy);
        Self { surface, dx, dy }
    }
}

impl<S: Surface + ?Sized> Deref for Translation<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for Translation<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for Translation<'_, S> {
    fn drop(&mut self) {
        self.surface.translate(-self.dx, -self.dy);
    }
}
