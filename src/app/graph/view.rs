use eframe::egui::{Align2, Color32, FontId, Pos2, Sense, Stroke, Ui, vec2};

use graph_playground::UiEvent;

use super::super::render_utils::{
    circle_visible, draw_background, edge_visible, node_color, node_world_pos, screen_radius,
    world_to_screen,
};
use super::super::{GraphView, PlaygroundApp};

impl PlaygroundApp {
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui, events: &mut Vec<UiEvent>) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        self.view.handle_graph_zoom(ui, rect, &response);
        self.view.handle_graph_pan(&response);

        let pan = self.view.pan;
        let zoom = self.view.zoom;
        draw_background(&painter, rect, pan, zoom);

        let graph = self.session.graph();
        let store = self.session.store();
        let is_visible = |index: usize| store.at(index).is_some_and(|attrs| !attrs.hidden);

        let mut screen_positions: Vec<Pos2> = Vec::with_capacity(graph.node_count());
        let mut screen_radii: Vec<f32> = Vec::with_capacity(graph.node_count());
        let mut drawn = Vec::new();
        for (index, node) in graph.nodes().iter().enumerate() {
            let position = world_to_screen(rect, pan, zoom, node_world_pos(node.x, node.y));
            let radius = store
                .at(index)
                .map_or(0.0, |attrs| screen_radius(attrs.size, zoom));
            if is_visible(index) && circle_visible(rect, position, radius) {
                drawn.push(index);
            }
            screen_positions.push(position);
            screen_radii.push(radius);
        }

        let edge_stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(204, 204, 204, 110));
        for &(source, target) in graph.edge_indices() {
            if !is_visible(source) || !is_visible(target) {
                continue;
            }
            let start = screen_positions[source];
            let end = screen_positions[target];
            if edge_visible(rect, start, end) {
                painter.line_segment([start, end], edge_stroke);
            }
        }

        let hovered_id = store.hovered();
        for &index in &drawn {
            let node = &graph.nodes()[index];
            let position = screen_positions[index];
            let radius = screen_radii[index];
            let is_hovered = hovered_id == Some(node.id.as_str());

            painter.circle_filled(position, radius, node_color(&node.color));
            painter.circle_stroke(
                position,
                radius,
                Stroke::new(
                    if is_hovered { 2.0 } else { 1.0 },
                    Color32::from_rgba_unmultiplied(15, 15, 15, 190),
                ),
            );

            if is_hovered || zoom > 1.35 {
                painter.text(
                    position + vec2(radius + 5.0, 0.0),
                    Align2::LEFT_CENTER,
                    &node.label,
                    FontId::proportional(12.0),
                    Color32::from_gray(238),
                );
            }
        }

        let hovered_now = GraphView::hovered_index(&response, &drawn, &screen_positions, &screen_radii)
            .map(|index| graph.nodes()[index].id.as_str());
        if hovered_now != hovered_id {
            if let Some(previous) = hovered_id {
                events.push(UiEvent::PointerLeft(previous.to_owned()));
            }
            if let Some(next) = hovered_now {
                events.push(UiEvent::PointerEntered(next.to_owned()));
            }
        }

        if let (Some(tooltip), Some(pointer)) = (store.tooltip(), response.hover_pos()) {
            painter.text(
                pointer + vec2(20.0, 20.0),
                Align2::LEFT_TOP,
                tooltip,
                FontId::proportional(13.0),
                Color32::from_gray(240),
            );
        }

        if let Some(error) = &self.last_error {
            painter.text(
                rect.left_bottom() + vec2(10.0, -10.0),
                Align2::LEFT_BOTTOM,
                error,
                FontId::proportional(12.0),
                Color32::from_rgb(246, 137, 92),
            );
        }
    }
}
