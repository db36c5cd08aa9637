use eframe::egui::{Align, Layout, Ui};

use super::super::PlaygroundApp;

impl PlaygroundApp {
    pub(in crate::app) fn draw_top_bar(&mut self, ui: &mut Ui) {
        let graph = self.session.graph();
        ui.horizontal(|ui| {
            ui.heading("graph-playground");
            ui.separator();
            ui.label(format!("nodes: {}", graph.node_count()));
            ui.label(format!("edges: {}", graph.edge_count()));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(format!("zoom: {:.2}x", self.view.zoom));
                ui.label(format!(
                    "visible graph: {} nodes / {} edges",
                    self.view.visible_node_count, self.view.visible_edge_count
                ));
            });
        });
    }
}
