// tests/unit_similarity.rs
use titlegraph_core::graph::{build_similarity_graph, TermMatrix};
use titlegraph_core::Document;

fn docs(titles: &[&str]) -> Vec<Document> {
    titles.iter().map(|t| Document::titled(*t)).collect()
}

const TITLES: [&str; 6] = [
    "rust compiler release",
    "rust borrow checker",
    "compiler borrow checker",
    "garden tomato harvest",
    "tomato garden soil",
    "rust garden",
];

#[test]
fn test_identical_usage_scores_one() {
    let g = build_similarity_graph(&docs(&["rust compiler", "rust compiler", "garden tomato"]), 0.1, 2000);
    let sim = g.weight("compiler", "rust").unwrap_or_default();
    assert!((sim - 1.0).abs() < 1e-12);
    assert_eq!(g.weight("rust", "garden"), None);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn test_scores_stay_in_unit_interval() {
    let g = build_similarity_graph(&docs(&TITLES), 0.0, 2000);
    assert!(g.edge_count() > 0);
    for (u, v, w) in g.edges() {
        assert_ne!(u, v);
        assert!(w > 0.0 && w <= 1.0, "{u}-{v} scored {w}");
    }
}

#[test]
fn test_matrix_similarity_bounds() {
    let matrix = TermMatrix::from_documents(&docs(&TITLES), 2000);
    let n = matrix.terms().len();
    for i in 0..n {
        for j in 0..n {
            let s = matrix.similarity(i, j);
            assert!((0.0..=1.0).contains(&s));
        }
    }
    assert_eq!(matrix.similarity(0, n + 5), 0.0);
}

#[test]
fn test_threshold_is_strict() {
    let g = build_similarity_graph(&docs(&["rust compiler", "rust compiler"]), 0.999_999, 2000);
    assert_eq!(g.edge_count(), 1);
    let g = build_similarity_graph(&docs(&TITLES), 0.999_999, 2000);
    assert!(g.edges().all(|(_, _, w)| w > 0.999_999));
}

#[test]
fn test_shuffled_documents_give_identical_graph() {
    let shuffled = [TITLES[3], TITLES[0], TITLES[5], TITLES[1], TITLES[4], TITLES[2]];
    let a = build_similarity_graph(&docs(&TITLES), 0.1, 2000);
    let b = build_similarity_graph(&docs(&shuffled), 0.1, 2000);
    assert_eq!(a, b);
}

#[test]
fn test_empty_input_gives_empty_graph() {
    assert!(build_similarity_graph(&[], 0.1, 2000).is_empty());
}

#[test]
fn test_stopword_only_titles_give_empty_graph() {
    let g = build_similarity_graph(&docs(&["the and of", "is it a"]), 0.1, 2000);
    assert!(g.is_empty());
    assert!(TermMatrix::from_documents(&docs(&["the and of"]), 2000).is_empty());
}

#[test]
fn test_vocabulary_cap_keeps_most_frequent_terms() {
    let titles = ["rust compiler", "rust compiler", "garden tomato rust"];
    let matrix = TermMatrix::from_documents(&docs(&titles), 2);
    assert_eq!(matrix.terms(), ["compiler", "rust"]);

    let g = build_similarity_graph(&docs(&titles), 0.1, 2);
    assert_eq!(g.node_count(), 2);
    assert!(g.contains_node("rust"));
    assert!(!g.contains_node("garden"));
    assert!(!g.contains_node("tomato"));
}
