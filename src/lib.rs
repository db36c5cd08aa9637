//! Random graph generation and the node attribute filters driven by a
//! graph viewer.
//!
//! [`graph::generate`] builds a chain-biased random graph,
//! [`filter::AttributeFilterStore`] tracks which nodes are hidden or
//! enlarged, and [`session::Session`] routes UI events into the store and
//! back out to a [`session::RenderAdapter`].

pub mod error;
pub mod filter;
pub mod graph;
pub mod session;
pub mod util;

pub use error::GraphError;
pub use filter::{AttributeFilterStore, HOVER_SIZE, NodeAttributes};
pub use graph::{Edge, GenerateParams, Graph, Node, Preset, generate};
pub use session::{RenderAdapter, Session, UiEvent, ZOOM_STEP};
