//! Box painting.

use std::f32::consts::PI;

use crate::types::Rgba;

use super::surface::Surface;

/// Trace a rounded rectangle at the origin into the current path.
///
/// Radius 0 is a plain rect and a radius of half the width is a full circle;
/// anything else is four edges joined by quadratic corners.
pub fn trace_rounded_rect(surface: &mut dyn Surface, width: f32, height: f32, radius: f32) {
    if radius == 0.0 {
        surface.rect(0.0, 0.0, width, height);
        return;
    }

    if radius == width / 2.0 {
        surface.arc(width / 2.0, height / 2.0, radius, 0.0, PI * 2.0);
        return;
    }

    surface.move_to(radius, 0.0);
    surface.line_to(width - radius, 0.0);
    surface.quadratic_curve_to(width, 0.0, width, radius);
    surface.line_to(width, height - radius);
    surface.quadratic_curve_to(width, height, width - radius, height);
    surface.line_to(radius, height);
    surface.quadratic_curve_to(0.0, height, 0.0, height - radius);
    surface.line_to(0.0, radius);
    surface.quadratic_curve_to(0.0, 0.0, radius, 0.0);
}

/// Paint a filled rounded box at the origin. Fully transparent fills emit the
/// path only.
pub fn draw_box(surface: &mut dyn Surface, width: f32, height: f32, radius: f32, background: Rgba) {
    surface.begin_path();
    trace_rounded_rect(surface, width, height, radius);
    surface.close_path();

    if !background.is_transparent() {
        surface.set_fill(background);
        surface.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DisplayList, DrawCommand};

    fn count(list: &DisplayList, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        list.commands().iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn test_zero_radius_is_plain_rect() {
        let mut list = DisplayList::new();
        draw_box(&mut list, 40.0, 20.0, 0.0, Rgba::WHITE);

        assert_eq!(
            list.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::Rect { x: 0.0, y: 0.0, width: 40.0, height: 20.0 },
                DrawCommand::ClosePath,
                DrawCommand::SetFill(Rgba::WHITE),
                DrawCommand::Fill,
            ]
        );
    }

    #[test]
    fn test_half_width_radius_is_circle() {
        let mut list = DisplayList::new();
        draw_box(&mut list, 50.0, 50.0, 25.0, Rgba::BLACK);

        assert_eq!(count(&list, |c| matches!(c, DrawCommand::Arc { .. })), 1);
        assert_eq!(count(&list, |c| matches!(c, DrawCommand::Rect { .. })), 0);
        assert_eq!(count(&list, |c| matches!(c, DrawCommand::QuadraticCurveTo { .. })), 0);
        assert!(list.commands().contains(&DrawCommand::Arc {
            cx: 25.0,
            cy: 25.0,
            radius: 25.0,
            start_angle: 0.0,
            end_angle: PI * 2.0,
        }));
    }

    #[test]
    fn test_other_radius_uses_four_curves() {
        let mut list = DisplayList::new();
        draw_box(&mut list, 100.0, 60.0, 8.0, Rgba::BLACK);

        assert_eq!(count(&list, |c| matches!(c, DrawCommand::QuadraticCurveTo { .. })), 4);
        assert_eq!(count(&list, |c| matches!(c, DrawCommand::LineTo { .. })), 4);
        assert_eq!(count(&list, |c| matches!(c, DrawCommand::MoveTo { .. })), 1);
        assert_eq!(list.commands()[1], DrawCommand::MoveTo { x: 8.0, y: 0.0 });
    }

    #[test]
    fn test_transparent_background_skips_fill() {
        let mut list = DisplayList::new();
        draw_box(&mut list, 10.0, 10.0, 0.0, Rgba::TRANSPARENT);

        assert_eq!(count(&list, |c| matches!(c, DrawCommand::Fill)), 0);
        assert_eq!(count(&list, |c| matches!(c, DrawCommand::Rect { .. })), 1);
    }
}
