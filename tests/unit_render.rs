// tests/unit_render.rs
use std::collections::BTreeSet;
use titlegraph_core::graph::{Community, Layout, Point, WeightedGraph};
use titlegraph_core::render::{build_render_request, community_color, ramp_color, GraphKind, COMMUNITY_COLORS};
use titlegraph_core::RenderOutcome;

fn path() -> (WeightedGraph, Layout) {
    let mut g = WeightedGraph::new();
    g.add_edge("cat", "dog", 3.0);
    g.add_edge("dog", "fish", 2.0);
    let layout: Layout = [
        ("cat".to_string(), Point::new(-1.0, 0.0)),
        ("dog".to_string(), Point::new(0.0, 0.0)),
        ("fish".to_string(), Point::new(1.0, 0.5)),
    ]
    .into_iter()
    .collect();
    (g, layout)
}

#[test]
fn test_nodes_scale_with_degree() {
    let (g, layout) = path();
    let outcome = build_render_request(GraphKind::Cooccurrence, "t", &g, &layout, None);
    let req = outcome.request().expect("graph is not empty");
    let dog = req.nodes.iter().find(|n| n.term == "dog").expect("dog rendered");
    let cat = req.nodes.iter().find(|n| n.term == "cat").expect("cat rendered");
    assert_eq!(dog.size, 10.0);
    assert_eq!(cat.size, 5.0);
    assert_eq!(dog.intensity, 1.0);
    assert_eq!(cat.intensity, 0.5);
    assert_eq!(dog.hover, "dog (2 connections)");
    assert_eq!(dog.position, Point::new(0.0, 0.0));
    assert_eq!(dog.community, None);
    assert_eq!(dog.group_color, None);
}

#[test]
fn test_cooccurrence_edges_carry_counts() {
    let (g, layout) = path();
    let outcome = build_render_request(GraphKind::Cooccurrence, "t", &g, &layout, None);
    let req = outcome.request().expect("graph is not empty");
    let edge = req.edges.iter().find(|e| e.source == "cat").expect("cat edge");
    assert_eq!(edge.width, 3.0);
    assert_eq!(edge.hover.as_deref(), Some("cat + dog: 3 co-occurrences"));
    assert_eq!(edge.from, Point::new(-1.0, 0.0));
}

#[test]
fn test_similarity_edges_have_no_hover() {
    let mut g = WeightedGraph::new();
    g.add_edge("rust", "compiler", 0.4);
    let outcome = build_render_request(GraphKind::Similarity, "k", &g, &Layout::new(), None);
    let req = outcome.request().expect("graph is not empty");
    assert_eq!(req.edges[0].hover, None);
    assert!((req.edges[0].width - 2.0).abs() < 1e-12);
}

#[test]
fn test_community_annotations() {
    let (g, layout) = path();
    let groups: Vec<Community> = vec![
        ["cat", "dog"].iter().map(ToString::to_string).collect::<BTreeSet<_>>(),
        ["fish"].iter().map(ToString::to_string).collect::<BTreeSet<_>>(),
    ];
    let outcome = build_render_request(GraphKind::Cooccurrence, "t", &g, &layout, Some(&groups));
    let req = outcome.request().expect("graph is not empty");
    assert_eq!(req.community_count, 2);
    let fish = req.nodes.iter().find(|n| n.term == "fish").expect("fish rendered");
    assert_eq!(fish.community, Some(1));
    assert_eq!(fish.group_color.as_deref(), Some(community_color(1)));
    let cat = req.nodes.iter().find(|n| n.term == "cat").expect("cat rendered");
    assert_eq!(cat.group_color.as_deref(), Some(COMMUNITY_COLORS[0]));
}

#[test]
fn test_empty_graph_is_sentinel() {
    let outcome = build_render_request(GraphKind::Similarity, "Keyword Map for x", &WeightedGraph::new(), &Layout::new(), None);
    assert!(outcome.is_empty());
    assert_eq!(outcome.title(), "Keyword Map for x");
    assert!(matches!(outcome, RenderOutcome::Empty { .. }));
}

#[test]
fn test_titles_and_colors() {
    assert_eq!(GraphKind::Cooccurrence.title("rust"), "Co-Occurrence Network for rust");
    assert_eq!(GraphKind::Similarity.title("rust"), "Keyword Map for rust");
    assert_eq!(ramp_color(0.0), "#ffffd9");
    assert_eq!(ramp_color(1.0), "#081d58");
    assert_eq!(ramp_color(7.0), "#081d58");
    assert_eq!(community_color(COMMUNITY_COLORS.len()), COMMUNITY_COLORS[0]);
}

#[test]
fn test_outcome_serializes_with_status_tag() {
    let outcome = RenderOutcome::empty("t", "no significant connections");
    let json = serde_json::to_value(&outcome).expect("serializes");
    assert_eq!(json["status"], "empty");
    assert_eq!(json["reason"], "no significant connections");
}
