//! Per-node display attributes and the operations the UI drives on them.

use std::collections::HashMap;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use log::{debug, trace, warn};
use rand::Rng;

use crate::error::GraphError;
use crate::graph::Graph;

/// Size a node is drawn at while the pointer is over it.
pub const HOVER_SIZE: f32 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeAttributes {
    pub hidden: bool,
    pub size: f32,
    pub original_size: f32,
}

#[derive(Clone, Debug)]
struct FilterEntry {
    id: String,
    label: String,
    attributes: NodeAttributes,
}

/// Visibility and size of every node of a [`Graph`], in graph node order.
#[derive(Clone, Debug)]
pub struct AttributeFilterStore {
    entries: Vec<FilterEntry>,
    index_by_id: HashMap<String, usize>,
    hovered: Option<String>,
}

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_lowercase(), &query.to_lowercase()))
}

impl AttributeFilterStore {
    pub fn from_graph(graph: &Graph) -> Self {
        let entries = graph
            .nodes()
            .iter()
            .map(|node| FilterEntry {
                id: node.id.clone(),
                label: node.label.clone(),
                attributes: NodeAttributes {
                    hidden: false,
                    size: node.size,
                    original_size: node.size,
                },
            })
            .collect::<Vec<_>>();
        let index_by_id = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.id.clone(), index))
            .collect();

        Self {
            entries,
            index_by_id,
            hovered: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&NodeAttributes> {
        self.index_by_id
            .get(id)
            .map(|&index| &self.entries[index].attributes)
    }

    /// Attributes by position, matching [`Graph::nodes`] order.
    pub fn at(&self, index: usize) -> Option<&NodeAttributes> {
        self.entries.get(index).map(|entry| &entry.attributes)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeAttributes)> {
        self.entries
            .iter()
            .map(|entry| (entry.id.as_str(), &entry.attributes))
    }

    pub fn visible_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.attributes.hidden)
            .count()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn tooltip(&self) -> Option<String> {
        self.hovered.as_ref().map(|id| format!("Node: {id}"))
    }

    /// Hides every node whose id and label both lack `query`, ignoring case.
    /// An empty query shows everything.
    pub fn apply_search(&mut self, query: &str) {
        let query = query.to_lowercase();
        for entry in &mut self.entries {
            let matches = entry.id.to_lowercase().contains(&query)
                || entry.label.to_lowercase().contains(&query);
            entry.attributes.hidden = !matches;
        }
        debug!(query = query.as_str(), visible = self.visible_count(); "Applied search");
    }

    /// Like [`apply_search`](Self::apply_search) with skim fuzzy matching.
    /// Returns how many nodes stay visible.
    pub fn apply_fuzzy_search(&mut self, query: &str) -> usize {
        if query.is_empty() {
            self.reset();
            return self.entries.len();
        }

        let matcher = SkimMatcherV2::default();
        for entry in &mut self.entries {
            let matches = fuzzy_match_score(&matcher, &entry.id, query).is_some()
                || fuzzy_match_score(&matcher, &entry.label, query).is_some();
            entry.attributes.hidden = !matches;
        }

        let visible = self.visible_count();
        debug!(query, visible; "Applied fuzzy search");
        visible
    }

    /// Hides each node with probability one half when `enabled`; shows all
    /// nodes otherwise. Every enabled call draws a fresh subset.
    pub fn apply_half_filter<R: Rng + ?Sized>(&mut self, enabled: bool, rng: &mut R) {
        for entry in &mut self.entries {
            entry.attributes.hidden = enabled && rng.r#gen::<f64>() > 0.5;
        }
        debug!(enabled, visible = self.visible_count(); "Applied half filter");
    }

    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.attributes.hidden = false;
        }
        debug!("Reset node visibility");
    }

    pub fn on_hover_enter(&mut self, id: &str) -> Result<(), GraphError> {
        let index = self.lookup(id)?;
        self.entries[index].attributes.size = HOVER_SIZE;
        self.hovered = Some(id.to_owned());
        trace!(id; "Hover enter");
        Ok(())
    }

    pub fn on_hover_leave(&mut self, id: &str) -> Result<(), GraphError> {
        let index = self.lookup(id)?;
        let attributes = &mut self.entries[index].attributes;
        attributes.size = attributes.original_size;
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
        trace!(id; "Hover leave");
        Ok(())
    }

    fn lookup(&self, id: &str) -> Result<usize, GraphError> {
        self.index_by_id.get(id).copied().ok_or_else(|| {
            warn!(id; "Hover event for unknown node");
            GraphError::NotFound(id.to_owned())
        })
    }
}
