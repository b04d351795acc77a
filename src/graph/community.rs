// src/graph/community.rs
//! Community detection for presentation grouping.
//!
//! ## References
//!
//! - Clauset, Newman & Moore (2004) "Finding community structure in very large networks"

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::weighted::WeightedGraph;
use crate::types::Term;

/// A disjoint group of terms.
pub type Community = BTreeSet<Term>;

/// Strategy for grouping graph nodes into disjoint communities.
pub trait CommunityDetector: Send + Sync {
    fn name(&self) -> &'static str;

    fn detect(&self, graph: &WeightedGraph) -> Vec<Community>;
}

/// Greedy modularity maximization on the unweighted graph.
///
/// Starts from singleton communities and repeatedly merges the connected
/// pair with the largest modularity gain until no merge gains. Ties go to
/// the pair with the smallest community indices (nodes are indexed in
/// lexicographic order), so results are deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyModularity;

impl CommunityDetector for GreedyModularity {
    fn name(&self) -> &'static str {
        "greedy-modularity"
    }

    #[allow(clippy::cast_precision_loss)]
    fn detect(&self, graph: &WeightedGraph) -> Vec<Community> {
        let terms: Vec<&str> = graph.nodes().collect();
        if terms.is_empty() {
            return Vec::new();
        }
        let index: BTreeMap<&str, usize> = terms.iter().enumerate().map(|(i, t)| (*t, i)).collect();

        let mut members: Vec<Vec<usize>> = (0..terms.len()).map(|i| vec![i]).collect();
        let mut alive = vec![true; terms.len()];

        let m = graph.edge_count();
        if m > 0 {
            let two_m = 2.0 * m as f64;
            let degrees = graph.degrees();
            let mut a: Vec<f64> = terms
                .iter()
                .map(|t| degrees.get(t).copied().unwrap_or(0) as f64 / two_m)
                .collect();
            let mut e: BTreeMap<(usize, usize), f64> = BTreeMap::new();
            for (u, v, _) in graph.edges() {
                if let (Some(&i), Some(&j)) = (index.get(u), index.get(v)) {
                    e.insert((i.min(j), i.max(j)), 1.0 / two_m);
                }
            }

            let mut merges = 0usize;
            while let Some((i, j)) = best_merge(&e, &a) {
                merge(&mut e, &mut a, &mut members, &mut alive, i, j);
                merges += 1;
            }
            debug!(merges, "greedy modularity finished");
        }

        let mut communities: Vec<Community> = members
            .into_iter()
            .zip(alive)
            .filter(|(_, live)| *live)
            .map(|(group, _)| group.into_iter().map(|i| terms[i].to_string()).collect())
            .collect();
        communities.sort_by(|x: &Community, y: &Community| {
            y.len().cmp(&x.len()).then_with(|| x.first().cmp(&y.first()))
        });
        communities
    }
}

/// Pair with the largest strictly positive gain `2·(e_ij − a_i·a_j)`.
fn best_merge(e: &BTreeMap<(usize, usize), f64>, a: &[f64]) -> Option<(usize, usize)> {
    let mut best: Option<((usize, usize), f64)> = None;
    for (&(i, j), &eij) in e {
        let gain = 2.0 * (eij - a[i] * a[j]);
        if gain > 0.0 && best.map_or(true, |(_, g)| gain > g) {
            best = Some(((i, j), gain));
        }
    }
    best.map(|(pair, _)| pair)
}

/// Folds community `j` into community `i`.
fn merge(
    e: &mut BTreeMap<(usize, usize), f64>,
    a: &mut [f64],
    members: &mut [Vec<usize>],
    alive: &mut [bool],
    i: usize,
    j: usize,
) {
    let touching_j: Vec<((usize, usize), f64)> = e
        .iter()
        .filter(|((x, y), _)| *x == j || *y == j)
        .map(|(&k, &w)| (k, w))
        .collect();

    for ((x, y), w) in touching_j {
        e.remove(&(x, y));
        let other = if x == j { y } else { x };
        if other == i {
            continue;
        }
        *e.entry((i.min(other), i.max(other))).or_default() += w;
    }

    a[i] += a[j];
    a[j] = 0.0;
    let moved = std::mem::take(&mut members[j]);
    members[i].extend(moved);
    alive[j] = false;
}

/// Newman modularity of a partition on the unweighted graph.
/// Nodes missing from every community count as singletons.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn modularity(graph: &WeightedGraph, communities: &[Community]) -> f64 {
    let m = graph.edge_count();
    if m == 0 {
        return 0.0;
    }
    let m = m as f64;
    let label = community_index(communities);
    let degrees = graph.degrees();

    let mut internal: BTreeMap<usize, f64> = BTreeMap::new();
    for (u, v, _) in graph.edges() {
        if let (Some(cu), Some(cv)) = (label.get(u), label.get(v)) {
            if cu == cv {
                *internal.entry(*cu).or_default() += 1.0;
            }
        }
    }

    let mut total_degree: BTreeMap<usize, f64> = BTreeMap::new();
    let mut singleton_penalty = 0.0;
    for (term, degree) in degrees {
        let d = degree as f64;
        match label.get(term) {
            Some(c) => *total_degree.entry(*c).or_default() += d,
            None => singleton_penalty += (d / (2.0 * m)).powi(2),
        }
    }

    let grouped: f64 = total_degree
        .iter()
        .map(|(c, d)| internal.get(c).copied().unwrap_or(0.0) / m - (d / (2.0 * m)).powi(2))
        .sum();
    grouped - singleton_penalty
}

/// Maps each term to the position of its community in `communities`.
#[must_use]
pub fn community_index(communities: &[Community]) -> BTreeMap<&str, usize> {
    communities
        .iter()
        .enumerate()
        .flat_map(|(i, c)| c.iter().map(move |t| (t.as_str(), i)))
        .collect()
}
