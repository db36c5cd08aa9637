//! Event dispatch between a UI and whatever draws the graph.
//!
//! A [`Session`] owns the generated [`Graph`], its [`AttributeFilterStore`]
//! and the random source used for regeneration and the half filter. UI code
//! turns user input into [`UiEvent`]s and hands them to
//! [`Session::dispatch`] together with its [`RenderAdapter`].

use log::debug;
use rand::Rng;

use crate::error::GraphError;
use crate::filter::AttributeFilterStore;
use crate::graph::{GenerateParams, Graph, generate};

/// Zoom step applied by a single zoom button press.
pub const ZOOM_STEP: f32 = 1.2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    SearchChanged(String),
    FuzzySearchChanged(String),
    HalfFilterToggled(bool),
    ResetClicked,
    RegenerateClicked,
    PointerEntered(String),
    PointerLeft(String),
    ZoomIn,
    ZoomOut,
}

/// Drawing side of a session. Called after every state change.
pub trait RenderAdapter {
    fn refresh(&mut self, graph: &Graph, store: &AttributeFilterStore);

    fn zoom_by(&mut self, factor: f32);
}

pub struct Session<R> {
    params: GenerateParams,
    graph: Graph,
    store: AttributeFilterStore,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn generate(params: GenerateParams, mut rng: R) -> Result<Self, GraphError> {
        let graph = generate(&params, &mut rng)?;
        let store = AttributeFilterStore::from_graph(&graph);
        Ok(Self {
            params,
            graph,
            store,
            rng,
        })
    }

    pub fn params(&self) -> &GenerateParams {
        &self.params
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn store(&self) -> &AttributeFilterStore {
        &self.store
    }

    /// Applies `event` and notifies `adapter`. A failed event leaves the
    /// session untouched and skips the refresh.
    pub fn dispatch<A: RenderAdapter + ?Sized>(
        &mut self,
        event: UiEvent,
        adapter: &mut A,
    ) -> Result<(), GraphError> {
        debug!(event:?; "Dispatching UI event");

        match event {
            UiEvent::SearchChanged(query) => self.store.apply_search(&query),
            UiEvent::FuzzySearchChanged(query) => {
                self.store.apply_fuzzy_search(&query);
            }
            UiEvent::HalfFilterToggled(enabled) => {
                self.store.apply_half_filter(enabled, &mut self.rng)
            }
            UiEvent::ResetClicked => self.store.reset(),
            UiEvent::RegenerateClicked => self.regenerate()?,
            UiEvent::PointerEntered(id) => self.store.on_hover_enter(&id)?,
            UiEvent::PointerLeft(id) => self.store.on_hover_leave(&id)?,
            UiEvent::ZoomIn => {
                adapter.zoom_by(ZOOM_STEP);
                return Ok(());
            }
            UiEvent::ZoomOut => {
                adapter.zoom_by(1.0 / ZOOM_STEP);
                return Ok(());
            }
        }

        adapter.refresh(&self.graph, &self.store);
        Ok(())
    }

    fn regenerate(&mut self) -> Result<(), GraphError> {
        let graph = generate(&self.params, &mut self.rng)?;
        self.store = AttributeFilterStore::from_graph(&graph);
        self.graph = graph;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[derive(Default)]
    struct RecordingAdapter {
        refreshes: usize,
        last_visible: Option<usize>,
        zooms: Vec<f32>,
    }

    impl RenderAdapter for RecordingAdapter {
        fn refresh(&mut self, _graph: &Graph, store: &AttributeFilterStore) {
            self.refreshes += 1;
            self.last_visible = Some(store.visible_count());
        }

        fn zoom_by(&mut self, factor: f32) {
            self.zooms.push(factor);
        }
    }

    fn session() -> Session<StdRng> {
        Session::generate(
            GenerateParams::new(20, 0.5, true),
            StdRng::seed_from_u64(4),
        )
        .unwrap()
    }

    #[test]
    fn mutating_events_refresh_once() {
        let mut session = session();
        let mut adapter = RecordingAdapter::default();

        session
            .dispatch(UiEvent::SearchChanged("node1".to_owned()), &mut adapter)
            .unwrap();
        assert_eq!(adapter.refreshes, 1);
        assert_eq!(adapter.last_visible, Some(11));

        session.dispatch(UiEvent::ResetClicked, &mut adapter).unwrap();
        assert_eq!(adapter.refreshes, 2);
        assert_eq!(adapter.last_visible, Some(20));
    }

    #[test]
    fn zoom_events_only_zoom() {
        let mut session = session();
        let mut adapter = RecordingAdapter::default();

        session.dispatch(UiEvent::ZoomIn, &mut adapter).unwrap();
        session.dispatch(UiEvent::ZoomOut, &mut adapter).unwrap();

        assert_eq!(adapter.refreshes, 0);
        assert_eq!(adapter.zooms, vec![ZOOM_STEP, 1.0 / ZOOM_STEP]);
    }

    #[test]
    fn failed_hover_skips_refresh() {
        let mut session = session();
        let mut adapter = RecordingAdapter::default();

        let result = session.dispatch(UiEvent::PointerEntered("ghost".to_owned()), &mut adapter);

        assert_eq!(result, Err(GraphError::NotFound("ghost".to_owned())));
        assert_eq!(adapter.refreshes, 0);
        assert!(session.store().hovered().is_none());
    }

    #[test]
    fn hover_round_trip_through_dispatch() {
        let mut session = session();
        let mut adapter = RecordingAdapter::default();

        session
            .dispatch(UiEvent::PointerEntered("node3".to_owned()), &mut adapter)
            .unwrap();
        assert_eq!(session.store().hovered(), Some("node3"));

        session
            .dispatch(UiEvent::PointerLeft("node3".to_owned()), &mut adapter)
            .unwrap();
        assert!(session.store().hovered().is_none());
        assert_eq!(session.store().get("node3").unwrap().size, 10.0);
        assert_eq!(adapter.refreshes, 2);
    }

    #[test]
    fn regenerate_replaces_graph_and_filters() {
        let mut session = session();
        let mut adapter = RecordingAdapter::default();
        let before = session.graph().nodes().to_vec();

        session
            .dispatch(UiEvent::SearchChanged("node19".to_owned()), &mut adapter)
            .unwrap();
        session
            .dispatch(UiEvent::RegenerateClicked, &mut adapter)
            .unwrap();

        assert_eq!(session.graph().node_count(), 20);
        assert_ne!(session.graph().nodes(), before.as_slice());
        assert_eq!(session.store().visible_count(), 20);
        assert_eq!(adapter.last_visible, Some(20));
    }
}
