use eframe::egui::{self, Context, Vec2};
use log::warn;
use rand::rngs::StdRng;

use graph_playground::{AttributeFilterStore, Graph, RenderAdapter, Session, UiEvent};

mod graph;
mod render_utils;
mod ui;

pub struct PlaygroundApp {
    session: Session<StdRng>,
    view: GraphView,
    controls: ControlState,
    last_error: Option<String>,
}

#[derive(Default)]
struct ControlState {
    search: String,
    fuzzy: bool,
    show_half: bool,
}

/// Camera and per-frame counters; the egui side of the [`RenderAdapter`].
struct GraphView {
    pan: Vec2,
    zoom: f32,
    visible_node_count: usize,
    visible_edge_count: usize,
}

impl GraphView {
    const MIN_ZOOM: f32 = 0.05;
    const MAX_ZOOM: f32 = 8.0;

    fn new(graph: &Graph, store: &AttributeFilterStore) -> Self {
        let mut view = Self {
            pan: Vec2::ZERO,
            zoom: 0.5,
            visible_node_count: 0,
            visible_edge_count: 0,
        };
        view.refresh(graph, store);
        view
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }
}

impl RenderAdapter for GraphView {
    fn refresh(&mut self, graph: &Graph, store: &AttributeFilterStore) {
        let is_visible = |index: usize| store.at(index).is_some_and(|attrs| !attrs.hidden);

        self.visible_node_count = store.visible_count();
        self.visible_edge_count = graph
            .edge_indices()
            .iter()
            .filter(|(source, target)| is_visible(*source) && is_visible(*target))
            .count();
    }

    fn zoom_by(&mut self, factor: f32) {
        let previous = self.zoom;
        self.set_zoom(self.zoom * factor);
        // keep the viewport center fixed
        self.pan *= self.zoom / previous;
    }
}

impl PlaygroundApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: Session<StdRng>) -> Self {
        let view = GraphView::new(session.graph(), session.store());
        Self {
            session,
            view,
            controls: ControlState::default(),
            last_error: None,
        }
    }

    fn apply_events(&mut self, events: Vec<UiEvent>) {
        for event in events {
            if let Err(error) = self.session.dispatch(event, &mut self.view) {
                warn!(error:%; "UI event rejected");
                self.last_error = Some(error.to_string());
            }
        }
    }
}

impl eframe::App for PlaygroundApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| self.draw_top_bar(ui));

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| self.draw_controls(ui, &mut events));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_graph(ui, &mut events));

        self.apply_events(events);
    }
}
