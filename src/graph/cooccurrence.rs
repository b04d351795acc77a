// src/graph/cooccurrence.rs
//! Raw co-occurrence counting: which words literally share a title.
//!
//! Cost is O(Σ len²) over the term sequences, with the vocabulary bounded
//! by `max_terms` before pairs are enumerated.

use std::collections::HashMap;

use tracing::debug;

use super::vocabulary;
use super::weighted::{EdgeKey, WeightedGraph};
use crate::text::{tokenize, StopWords};
use crate::types::{Document, Term};

/// Builds the co-occurrence graph.
///
/// Every pair of positions `i < j` within one title increments the counter
/// for `{term_i, term_j}`, so a repeated word contributes once per position.
/// Pairs of the same term are skipped. Only pairs counted at least
/// `min_weight` times become edges; no degree pruning happens here.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build_cooccurrence_graph(
    documents: &[Document],
    stopwords: &StopWords,
    min_weight: usize,
    max_terms: usize,
) -> WeightedGraph {
    let sequences: Vec<Vec<Term>> = documents
        .iter()
        .map(|d| tokenize(&d.title, stopwords))
        .collect();

    let kept = vocabulary::most_frequent(&term_counts(&sequences), max_terms);
    let counts = count_pairs(&sequences, |t| kept.contains(t));

    let mut graph = WeightedGraph::new();
    for (key, count) in &counts {
        if *count >= min_weight {
            graph.add_edge(key.low(), key.high(), *count as f64);
        }
    }

    debug!(
        documents = documents.len(),
        terms = kept.len(),
        pairs = counts.len(),
        edges = graph.edge_count(),
        "co-occurrence graph built"
    );
    graph
}

fn term_counts(sequences: &[Vec<Term>]) -> HashMap<Term, usize> {
    let mut counts: HashMap<Term, usize> = HashMap::new();
    for term in sequences.iter().flatten() {
        *counts.entry(term.clone()).or_default() += 1;
    }
    counts
}

fn count_pairs<F>(sequences: &[Vec<Term>], keep: F) -> HashMap<EdgeKey, usize>
where
    F: Fn(&str) -> bool,
{
    let mut counts: HashMap<EdgeKey, usize> = HashMap::new();
    for words in sequences {
        let words: Vec<&str> = words.iter().map(String::as_str).filter(|&w| keep(w)).collect();
        for (i, first) in words.iter().enumerate() {
            for second in words.iter().skip(i + 1) {
                if let Some(key) = EdgeKey::new(first, second) {
                    *counts.entry(key).or_default() += 1;
                }
            }
        }
    }
    counts
}
