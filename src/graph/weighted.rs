// src/graph/weighted.rs
//! Undirected weighted graph over terms.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::Term;

/// Canonical key for an undirected edge: endpoints stored in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    low: Term,
    high: Term,
}

impl EdgeKey {
    /// Returns `None` for a self-pair.
    #[must_use]
    pub fn new(u: &str, v: &str) -> Option<Self> {
        match u.cmp(v) {
            std::cmp::Ordering::Less => Some(Self {
                low: u.to_string(),
                high: v.to_string(),
            }),
            std::cmp::Ordering::Greater => Some(Self {
                low: v.to_string(),
                high: u.to_string(),
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[must_use]
    pub fn low(&self) -> &str {
        &self.low
    }

    #[must_use]
    pub fn high(&self) -> &str {
        &self.high
    }

    #[must_use]
    pub fn touches(&self, term: &str) -> bool {
        self.low == term || self.high == term
    }
}

/// Nodes and edges iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedGraph {
    nodes: BTreeSet<Term>,
    edges: BTreeMap<EdgeKey, f64>,
}

impl WeightedGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, term: &str) {
        if !self.nodes.contains(term) {
            self.nodes.insert(term.to_string());
        }
    }

    /// Inserts or replaces the edge `{u, v}` and adds both endpoints.
    /// Self-loops and weights that are not positive and finite are rejected.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) -> bool {
        if !weight.is_finite() || weight <= 0.0 {
            return false;
        }
        let Some(key) = EdgeKey::new(u, v) else {
            return false;
        };
        self.add_node(u);
        self.add_node(v);
        self.edges.insert(key, weight);
        true
    }

    #[must_use]
    pub fn weight(&self, u: &str, v: &str) -> Option<f64> {
        EdgeKey::new(u, v).and_then(|key| self.edges.get(&key).copied())
    }

    #[must_use]
    pub fn contains_node(&self, term: &str) -> bool {
        self.nodes.contains(term)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Edges as `(low, high, weight)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.edges.iter().map(|(k, &w)| (k.low(), k.high(), w))
    }

    /// Number of distinct incident edges for every node, zero included.
    #[must_use]
    pub fn degrees(&self) -> BTreeMap<&str, usize> {
        let mut degrees: BTreeMap<&str, usize> = self.nodes().map(|n| (n, 0)).collect();
        for key in self.edges.keys() {
            *degrees.entry(key.low()).or_default() += 1;
            *degrees.entry(key.high()).or_default() += 1;
        }
        degrees
    }

    #[must_use]
    pub fn degree(&self, term: &str) -> usize {
        self.edges.keys().filter(|k| k.touches(term)).count()
    }

    #[must_use]
    pub fn neighbors(&self, term: &str) -> Vec<&str> {
        self.edges
            .keys()
            .filter_map(|k| {
                if k.low() == term {
                    Some(k.high())
                } else if k.high() == term {
                    Some(k.low())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Induced subgraph on the nodes matching `keep`.
    #[must_use]
    pub fn subgraph<F>(&self, keep: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        let nodes: BTreeSet<Term> = self.nodes.iter().filter(|n| keep(n.as_str())).cloned().collect();
        let edges = self
            .edges
            .iter()
            .filter(|(k, _)| nodes.contains(k.low()) && nodes.contains(k.high()))
            .map(|(k, &w)| (k.clone(), w))
            .collect();
        Self { nodes, edges }
    }
}
