use clap::ValueEnum;
use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::error::GraphError;
use crate::util::random_hex_color;

use super::model::{Edge, Graph, Node};

/// Node styling and default density of one of the demo pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Labels are the node ids, size grows with weight, half of the links kept.
    Cytoscape,
    /// Labels read `Node <i>`, uniform size, sparse links.
    #[default]
    Sigma,
}

impl Preset {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cytoscape => "cytoscape",
            Self::Sigma => "sigma",
        }
    }

    pub fn default_edge_probability(self) -> f64 {
        match self {
            Self::Cytoscape => 0.5,
            Self::Sigma => 0.2,
        }
    }

    fn node_label(self, index: usize) -> String {
        match self {
            Self::Cytoscape => format!("node{index}"),
            Self::Sigma => format!("Node {index}"),
        }
    }

    // weight 0..=10 maps onto 10..=40
    fn node_size(self, weight: f64) -> f32 {
        match self {
            Self::Cytoscape => (10.0 + weight * 3.0) as f32,
            Self::Sigma => 10.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerateParams {
    pub count: usize,
    pub edge_probability: f64,
    /// Link only to the immediate predecessor; otherwise to a random earlier node.
    pub chain_only: bool,
    pub preset: Preset,
}

impl GenerateParams {
    pub fn new(count: usize, edge_probability: f64, chain_only: bool) -> Self {
        Self {
            count,
            edge_probability,
            chain_only,
            preset: Preset::default(),
        }
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    fn validate(&self) -> Result<(), GraphError> {
        if self.count == 0 {
            return Err(GraphError::InvalidArgument(
                "node count must be greater than zero".to_owned(),
            ));
        }

        if !self.edge_probability.is_finite() || !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(GraphError::InvalidArgument(format!(
                "edge probability must be within [0, 1], got {}",
                self.edge_probability
            )));
        }

        Ok(())
    }
}

/// Builds `params.count` nodes named `node0..node{count-1}` and links each
/// node to an earlier one with probability `params.edge_probability`.
///
/// With `chain_only` the earlier node is always the immediate predecessor, so
/// the edges form path fragments. Otherwise the predecessor is drawn
/// uniformly from all earlier nodes, which still yields a forest.
pub fn generate<R: Rng + ?Sized>(
    params: &GenerateParams,
    rng: &mut R,
) -> Result<Graph, GraphError> {
    params.validate()?;

    let mut nodes = Vec::with_capacity(params.count);
    let mut edges = Vec::new();
    let link_threshold = 1.0 - params.edge_probability;

    for index in 0..params.count {
        let weight = (rng.r#gen::<f64>() * 10.0).round();
        nodes.push(Node {
            id: node_id(index),
            label: params.preset.node_label(index),
            weight,
            x: rng.r#gen::<f32>(),
            y: rng.r#gen::<f32>(),
            color: random_hex_color(rng),
            size: params.preset.node_size(weight),
        });

        if index == 0 {
            continue;
        }

        // (0, 1] so that p = 1 always links and p = 0 never does
        let sample = 1.0 - rng.r#gen::<f64>();
        if sample > link_threshold {
            let source = if params.chain_only {
                index - 1
            } else {
                rng.gen_range(0..index)
            };
            edges.push(Edge {
                source: node_id(source),
                target: node_id(index),
            });
        }
    }

    debug!(
        count = params.count,
        edge_probability = params.edge_probability,
        chain_only = params.chain_only;
        "Generated graph topology",
    );
    info!(
        preset = params.preset.label(),
        nodes = nodes.len(),
        edges = edges.len();
        "Generated random graph",
    );

    Graph::new(nodes, edges)
}

fn node_id(index: usize) -> String {
    format!("node{index}")
}
