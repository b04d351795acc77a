// src/graph/similarity.rs
//! Keyword similarity: cosine similarity between TF-IDF term vectors.
//!
//! Each document becomes an L2-normalized row of `count × idf` weights; a
//! term's vector is its column across all documents. Pairwise cost is
//! O(V² · D) for V vocabulary terms and D documents, with V bounded by
//! `max_terms`.

use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use tracing::debug;

use super::vocabulary;
use super::weighted::WeightedGraph;
use crate::text::keyword_tokens;
use crate::types::{Document, Term};

/// Term-by-document weights, stored column-wise.
#[derive(Debug, Clone, Default)]
pub struct TermMatrix {
    terms: Vec<Term>,
    /// One sparse column per term: document index -> weight.
    columns: Vec<BTreeMap<usize, f64>>,
}

impl TermMatrix {
    /// Builds the smoothed TF-IDF matrix for `documents`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_documents(documents: &[Document], max_terms: usize) -> Self {
        let tokens: Vec<Vec<Term>> = documents.iter().map(|d| keyword_tokens(&d.title)).collect();

        let mut corpus: HashMap<Term, usize> = HashMap::new();
        for token in tokens.iter().flatten() {
            *corpus.entry(token.clone()).or_default() += 1;
        }
        let terms: Vec<Term> = vocabulary::most_frequent(&corpus, max_terms)
            .into_iter()
            .collect();
        if terms.is_empty() {
            return Self::default();
        }
        let index: HashMap<&str, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let rows: Vec<BTreeMap<usize, usize>> = tokens
            .iter()
            .map(|doc| {
                let mut row: BTreeMap<usize, usize> = BTreeMap::new();
                for idx in doc.iter().filter_map(|t| index.get(t.as_str())) {
                    *row.entry(*idx).or_default() += 1;
                }
                row
            })
            .collect();

        let mut df = vec![0usize; terms.len()];
        for row in &rows {
            for &idx in row.keys() {
                df[idx] += 1;
            }
        }
        let n = documents.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let mut columns = vec![BTreeMap::new(); terms.len()];
        for (doc, row) in rows.iter().enumerate() {
            let weights: Vec<(usize, f64)> = row
                .iter()
                .map(|(&idx, &count)| (idx, count as f64 * idf[idx]))
                .collect();
            let norm = canonical_sum(weights.iter().map(|(_, w)| w * w)).sqrt();
            if norm <= 0.0 {
                continue;
            }
            for (idx, w) in weights {
                columns[idx].insert(doc, w / norm);
            }
        }

        Self { terms, columns }
    }

    /// Vocabulary in lexicographic order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Cosine similarity of the column vectors of terms `i` and `j`,
    /// always within `[0, 1]`. Degenerate vectors score 0.
    #[must_use]
    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        match (self.columns.get(i), self.columns.get(j)) {
            (Some(a), Some(b)) => cosine(a, b),
            _ => 0.0,
        }
    }
}

/// Builds the keyword similarity graph: an edge for every pair of distinct
/// terms whose similarity is strictly above `min_similarity`.
#[must_use]
pub fn build_similarity_graph(
    documents: &[Document],
    min_similarity: f64,
    max_terms: usize,
) -> WeightedGraph {
    let matrix = TermMatrix::from_documents(documents, max_terms);
    let mut graph = WeightedGraph::new();
    if matrix.is_empty() {
        debug!(documents = documents.len(), "empty vocabulary, no similarity graph");
        return graph;
    }

    let v = matrix.terms.len();
    let pairs: Vec<(usize, usize, f64)> = (0..v)
        .into_par_iter()
        .flat_map_iter(|i| {
            let matrix = &matrix;
            ((i + 1)..v).filter_map(move |j| {
                let sim = matrix.similarity(i, j);
                (sim > min_similarity).then_some((i, j, sim))
            })
        })
        .collect();

    for (i, j, sim) in pairs {
        graph.add_edge(&matrix.terms[i], &matrix.terms[j], sim);
    }

    debug!(
        documents = documents.len(),
        terms = v,
        edges = graph.edge_count(),
        "similarity graph built"
    );
    graph
}

fn cosine(a: &BTreeMap<usize, f64>, b: &BTreeMap<usize, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot = canonical_sum(
        small
            .iter()
            .filter_map(|(doc, x)| large.get(doc).map(|y| x * y)),
    );
    if dot == 0.0 {
        return 0.0;
    }
    let norm_a = canonical_sum(a.values().map(|x| x * x)).sqrt();
    let norm_b = canonical_sum(b.values().map(|x| x * x)).sqrt();
    let denom = norm_a * norm_b;
    if denom <= 0.0 || !denom.is_finite() {
        return 0.0;
    }
    let sim = dot / denom;
    if sim.is_nan() {
        0.0
    } else {
        sim.clamp(0.0, 1.0)
    }
}

/// Sums in ascending value order so the result is independent of the order
/// documents were supplied in.
fn canonical_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}
