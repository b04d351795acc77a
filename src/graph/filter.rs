// src/graph/filter.rs
//! Minimum-degree pruning.

use tracing::debug;

use super::weighted::WeightedGraph;
use crate::config::FilterMode;

/// Removes nodes whose degree is below `min_degree`, along with their edges.
///
/// With [`FilterMode::SinglePass`] degrees are measured once on the incoming
/// edge set, so a survivor may end below the threshold after its neighbours
/// are removed. [`FilterMode::Cascade`] repeats until nothing else drops.
#[must_use]
pub fn filter_by_degree(graph: &WeightedGraph, min_degree: usize, mode: FilterMode) -> WeightedGraph {
    let mut current = single_pass(graph, min_degree);
    let mut passes = 1;

    if mode == FilterMode::Cascade {
        loop {
            let next = single_pass(&current, min_degree);
            if next.node_count() == current.node_count() {
                break;
            }
            current = next;
            passes += 1;
        }
    }

    debug!(
        min_degree,
        passes,
        nodes_before = graph.node_count(),
        nodes_after = current.node_count(),
        edges_after = current.edge_count(),
        "degree filter applied"
    );
    current
}

fn single_pass(graph: &WeightedGraph, min_degree: usize) -> WeightedGraph {
    let degrees = graph.degrees();
    graph.subgraph(|term| degrees.get(term).copied().unwrap_or(0) >= min_degree)
}
