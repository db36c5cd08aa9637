use eframe::egui::{self, Key, Ui};

use graph_playground::UiEvent;

use super::super::PlaygroundApp;

impl PlaygroundApp {
    fn search_event(&self) -> UiEvent {
        if self.controls.fuzzy {
            UiEvent::FuzzySearchChanged(self.controls.search.clone())
        } else {
            UiEvent::SearchChanged(self.controls.search.clone())
        }
    }

    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui, events: &mut Vec<UiEvent>) {
        ui.heading("Graph Controls");
        ui.separator();
        ui.add_space(4.0);

        ui.label("Search (id or label)")
            .on_hover_text("Hide every node whose id and label do not contain the query.");
        let search_response = ui.text_edit_singleline(&mut self.controls.search);
        let submitted =
            search_response.lost_focus() && ui.input(|input| input.key_pressed(Key::Enter));

        let mut search_requested = search_response.changed() || submitted;
        ui.horizontal(|ui| {
            search_requested |= ui
                .toggle_value(&mut self.controls.fuzzy, "Fuzzy")
                .on_hover_text("Match characters in order instead of a plain substring.")
                .changed();
            search_requested |= ui.button("Search").clicked();
            if ui.button("Reset").clicked() {
                self.controls.search.clear();
                self.controls.show_half = false;
                events.push(UiEvent::ResetClicked);
            }
        });
        if search_requested {
            events.push(self.search_event());
        }

        ui.separator();

        let half_toggle = ui
            .checkbox(&mut self.controls.show_half, "Show half")
            .on_hover_text("Hide a random half of the nodes. Re-checking draws a new half.");
        if half_toggle.changed() {
            events.push(UiEvent::HalfFilterToggled(self.controls.show_half));
        }

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Zoom in").clicked() {
                events.push(UiEvent::ZoomIn);
            }
            if ui.button("Zoom out").clicked() {
                events.push(UiEvent::ZoomOut);
            }
        });

        ui.separator();

        let params = self.session.params();
        ui.label(format!(
            "{} preset, {} nodes, p = {:.2}{}",
            params.preset.label(),
            params.count,
            params.edge_probability,
            if params.chain_only { "" } else { ", open topology" }
        ));
        if ui
            .add(egui::Button::new("Regenerate"))
            .on_hover_text("Draw a new random graph with the same settings.")
            .clicked()
        {
            self.controls = Default::default();
            self.last_error = None;
            events.push(UiEvent::RegenerateClicked);
        }
    }
}
