// tests/integration_pipeline.rs
use titlegraph_core::config::{FilterMode, PipelineConfig};
use titlegraph_core::graph::{ForceLayout, Layout, Point, WeightedGraph};
use titlegraph_core::text::StopWords;
use titlegraph_core::{rank_communities, Document, Pipeline, RenderOutcome};

fn docs(titles: &[&str]) -> Vec<Document> {
    titles.iter().map(|t| Document::titled(*t)).collect()
}

fn pipeline() -> Pipeline {
    Pipeline::new(PipelineConfig::default()).unwrap()
}

const RUST: [&str; 6] = [
    "rust compiler release notes",
    "rust compiler borrow checker",
    "borrow checker rust compiler",
    "compiler borrow rust",
    "async rust runtime",
    "rust runtime async",
];

#[test]
fn test_empty_input_gives_sentinels() {
    let p = pipeline();
    let cooc = p.cooccurrence("rust", &[]);
    let sim = p.similarity("rust", &[]);
    assert!(cooc.is_empty());
    assert!(sim.is_empty());
    assert_eq!(cooc.title(), "Co-Occurrence Network for rust");
    assert_eq!(sim.title(), "Keyword Map for rust");
}

#[test]
fn test_scenario_ends_empty() {
    let p = pipeline();
    let d = docs(&["big cat problem", "big cat solution", "dog issue"]);
    assert!(p.cooccurrence_graph(&d).is_empty());
    assert!(matches!(p.cooccurrence("pets", &d), RenderOutcome::Empty { .. }));
}

#[test]
fn test_cooccurrence_renders_with_communities() {
    let p = pipeline();
    let outcome = p.cooccurrence("rust", &docs(&RUST));
    let req = outcome.request().expect("dense titles survive filtering");
    assert!(req.community_count >= 1);
    assert!(req.nodes.iter().all(|n| n.degree >= 2));
    assert!(req.nodes.iter().all(|n| n.community.is_some()));
}

#[test]
fn test_detection_can_be_switched_off() {
    let p = pipeline().with_detector(None);
    let outcome = p.cooccurrence("rust", &docs(&RUST));
    let req = outcome.request().expect("dense titles survive filtering");
    assert_eq!(req.community_count, 0);
    assert!(req.nodes.iter().all(|n| n.community.is_none()));
}

#[test]
fn test_extra_stopwords_apply() {
    let extra: StopWords = ["rust"].into_iter().collect();
    let p = pipeline().with_stopwords(&extra);
    assert!(p.stopwords().contains("rust"));
    assert!(!p.cooccurrence_graph(&docs(&RUST)).contains_node("rust"));
}

#[test]
fn test_similarity_is_deterministic() {
    let p = pipeline();
    let a = p.similarity("rust", &docs(&RUST));
    let b = p.similarity("rust", &docs(&RUST));
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn test_cascade_config_is_honoured() {
    let config = PipelineConfig {
        degree_filter: FilterMode::Cascade,
        ..PipelineConfig::default()
    };
    let p = Pipeline::new(config).unwrap();
    let g = p.cooccurrence_graph(&docs(&RUST));
    assert!(g.degrees().values().all(|&d| d >= 2));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = PipelineConfig {
        max_terms: 0,
        ..PipelineConfig::default()
    };
    assert!(Pipeline::new(config).is_err());
}

#[test]
fn test_analyze_all_keeps_input_order() {
    let p = pipeline();
    let batches = vec![
        ("rust".to_string(), docs(&RUST)),
        ("empty".to_string(), Vec::new()),
        ("pets".to_string(), docs(&["cat dog", "cat dog", "dog bone"])),
    ];
    let reports = p.analyze_all(&batches);
    let names: Vec<&str> = reports.iter().map(|r| r.community.as_str()).collect();
    assert_eq!(names, vec!["rust", "empty", "pets"]);
    assert_eq!(reports[0].stats.posts, 6);
    assert_eq!(reports[0].top_words[0].word, "rust");
    assert!(reports[1].cooccurrence.is_empty());
    assert!(reports[1].similarity.is_empty());
}

#[test]
fn test_report_serializes() {
    let p = pipeline();
    let report = p.analyze("rust", &docs(&RUST));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["community"], "rust");
    assert_eq!(json["cooccurrence"]["status"], "ready");
}

/// Places every node at one fixed point.
struct Pinned(Point);

impl ForceLayout for Pinned {
    fn layout(&self, graph: &WeightedGraph) -> Layout {
        graph.nodes().map(|term| (term.to_string(), self.0)).collect()
    }
}

#[test]
fn test_each_graph_kind_uses_its_own_layout() {
    let spot = Point::new(0.25, -0.25);
    let p = pipeline().with_keyword_layout(Box::new(Pinned(spot)));

    let keywords = p.similarity("rust", &docs(&RUST));
    let req = keywords.request().expect("similar terms present");
    assert!(req.nodes.iter().all(|n| n.position == spot));

    let cooc = p.cooccurrence("rust", &docs(&RUST));
    let req = cooc.request().expect("dense titles survive filtering");
    assert!(req.nodes.iter().any(|n| n.position != spot));
}

#[test]
fn test_communities_rank_by_karma_then_posts_then_name() {
    let scored = |scores: &[i64]| -> Vec<Document> {
        scores.iter().map(|&s| Document::titled("cat dog").with_score(s)).collect()
    };
    let batches = vec![
        ("alpha".to_string(), scored(&[10])),
        ("beta".to_string(), scored(&[4, 6])),
        ("delta".to_string(), scored(&[5, 5])),
        ("gamma".to_string(), scored(&[50])),
        ("quiet".to_string(), Vec::new()),
    ];
    let mut reports = pipeline().analyze_all(&batches);
    rank_communities(&mut reports);

    let names: Vec<&str> = reports.iter().map(|r| r.community.as_str()).collect();
    assert_eq!(names, vec!["gamma", "beta", "delta", "alpha", "quiet"]);
    assert_eq!(reports[0].stats.karma, 50);
}
