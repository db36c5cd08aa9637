use std::collections::HashMap;

use serde::Serialize;

use crate::error::GraphError;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub weight: f64,
    pub x: f32,
    pub y: f32,
    pub color: String,
    pub size: f32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Node and edge set produced by the generator.
///
/// Node order is preserved and every edge endpoint refers to a node in the
/// set; [`Graph::new`] refuses anything else.
#[derive(Clone, Debug, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    index_by_id: HashMap<String, usize>,
    #[serde(skip)]
    edge_indices: Vec<(usize, usize)>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut index_by_id = HashMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            if index_by_id.insert(node.id.clone(), index).is_some() {
                return Err(GraphError::InvalidArgument(format!(
                    "duplicate node id {}",
                    node.id
                )));
            }
        }

        let edge_indices = edges
            .iter()
            .map(|edge| {
                let source = index_by_id.get(&edge.source).copied();
                let target = index_by_id.get(&edge.target).copied();
                match (source, target) {
                    (Some(source), Some(target)) => Ok((source, target)),
                    _ => Err(GraphError::InvalidArgument(format!(
                        "edge {} -> {} references a missing node",
                        edge.source, edge.target
                    ))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            nodes,
            edges,
            index_by_id,
            edge_indices,
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|index| &self.nodes[index])
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// Edge endpoints as positions into [`Graph::nodes`], in edge order.
    pub fn edge_indices(&self) -> &[(usize, usize)] {
        &self.edge_indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> Node {
        Node {
            id: id.to_owned(),
            label: id.to_owned(),
            weight: 1.0,
            x: 0.5,
            y: 0.5,
            color: "#666666".to_owned(),
            size: 10.0,
        }
    }

    fn edge(source: &str, target: &str) -> Edge {
        Edge {
            source: source.to_owned(),
            target: target.to_owned(),
        }
    }

    #[test]
    fn resolves_edge_endpoints_to_indices() {
        let graph = Graph::new(
            vec![node("a"), node("b"), node("c")],
            vec![edge("a", "b"), edge("c", "b")],
        )
        .unwrap();

        assert_eq!(graph.edge_indices(), &[(0, 1), (2, 1)]);
        assert_eq!(graph.index_of("c"), Some(2));
        assert_eq!(graph.node("b").map(|n| n.id.as_str()), Some("b"));
        assert!(graph.node("missing").is_none());
    }

    #[test]
    fn rejects_dangling_edges() {
        let result = Graph::new(vec![node("a")], vec![edge("a", "ghost")]);
        assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Graph::new(vec![node("a"), node("a")], Vec::new());
        assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn serializes_nodes_and_edges_only() {
        let graph = Graph::new(vec![node("a"), node("b")], vec![edge("a", "b")]).unwrap();
        let value = serde_json::to_value(&graph).unwrap();

        assert_eq!(value["nodes"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["edges"][0]["source"], "a");
        assert_eq!(value["edges"][0]["target"], "b");
        assert!(value.get("index_by_id").is_none());
    }
}
