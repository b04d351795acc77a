// src/graph/vocabulary.rs
//! Bounds the number of distinct terms entering the quadratic stages.

use std::collections::{BTreeSet, HashMap};

use crate::types::Term;

/// Keeps the `max_terms` most frequent terms; ties go to the
/// lexicographically smaller term so the result never depends on input order.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn most_frequent(counts: &HashMap<Term, usize>, max_terms: usize) -> BTreeSet<Term> {
    if counts.len() <= max_terms {
        return counts.keys().cloned().collect();
    }
    let mut ranked: Vec<(&Term, usize)> = counts.iter().map(|(t, &c)| (t, c)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(max_terms)
        .map(|(t, _)| t.clone())
        .collect()
}
