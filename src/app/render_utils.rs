use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2, vec2};

use graph_playground::util::parse_hex_color;

/// Side length of the square the unit-square node positions are stretched over.
pub(super) const WORLD_SPAN: f32 = 1600.0;

pub(super) fn node_world_pos(x: f32, y: f32) -> Vec2 {
    vec2(x - 0.5, y - 0.5) * WORLD_SPAN
}

pub(super) fn node_color(color: &str) -> Color32 {
    parse_hex_color(color)
        .map(|(r, g, b)| Color32::from_rgb(r, g, b))
        .unwrap_or(Color32::from_gray(102))
}

pub(super) fn screen_radius(size: f32, zoom: f32) -> f32 {
    (size * 0.5 * zoom.powf(0.4)).clamp(1.5, 40.0)
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, pan: Vec2, zoom: f32) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));

    let step = (56.0 * zoom.clamp(0.6, 1.8)).max(20.0);
    let origin = rect.center() + pan;
    let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 70));

    let mut x = rect.left() + (origin.x - rect.left()).rem_euclid(step);
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += step;
    }

    let mut y = rect.top() + (origin.y - rect.top()).rem_euclid(step);
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += step;
    }
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}

// bounding-box test; cheap enough for a few thousand edges per frame
pub(super) fn edge_visible(rect: Rect, start: Pos2, end: Pos2) -> bool {
    let bounds = Rect::from_two_pos(start, end);
    bounds.intersects(rect)
}

pub(super) fn world_to_screen(rect: Rect, pan: Vec2, zoom: f32, world: Vec2) -> Pos2 {
    rect.center() + pan + world * zoom
}

pub(super) fn screen_to_world(rect: Rect, pan: Vec2, zoom: f32, screen: Pos2) -> Vec2 {
    (screen - rect.center() - pan) / zoom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_and_world_round_trip() {
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0));
        let pan = vec2(30.0, -12.0);
        let world = vec2(120.0, -40.0);

        let screen = world_to_screen(rect, pan, 1.5, world);
        let back = screen_to_world(rect, pan, 1.5, screen);
        assert!((back - world).length() < 1e-3);
    }

    #[test]
    fn unparseable_colors_fall_back_to_gray() {
        assert_eq!(node_color("#ff0000"), Color32::from_rgb(255, 0, 0));
        assert_eq!(node_color("red"), Color32::from_gray(102));
    }

    #[test]
    fn offscreen_circles_are_culled() {
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0));
        assert!(circle_visible(rect, Pos2::new(50.0, 50.0), 2.0));
        assert!(circle_visible(rect, Pos2::new(-3.0, 50.0), 5.0));
        assert!(!circle_visible(rect, Pos2::new(-30.0, 50.0), 5.0));
    }
}
