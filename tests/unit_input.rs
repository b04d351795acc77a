// tests/unit_input.rs
use std::fs;
use titlegraph_core::cli::input::{load_batches, parse_batches, select};
use titlegraph_core::TitleGraphError;

const INPUT: &str = r#"{
  "rust": [
    {"title": "borrow checker tips", "score": 12, "author": "ferris", "created_utc": 0, "num_comments": 3},
    {"title": "async runtime", "over_18": false, "created_utc": 1, "num_comments": 0}
  ],
  "gardening": [
    {"title": "tomato blight", "created_utc": 2, "num_comments": 7, "is_adult": true}
  ]
}"#;

#[test]
fn test_batches_sorted_by_name() {
    let batches = parse_batches(INPUT).unwrap();
    let names: Vec<&str> = batches.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["gardening", "rust"]);
    assert!(batches[0].1[0].is_adult);
    assert_eq!(batches[1].1[0].author.as_deref(), Some("ferris"));
    assert_eq!(batches[1].1[1].score, 0);
}

#[test]
fn test_load_from_file() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("posts.json");
    fs::write(&path, INPUT).unwrap();
    assert_eq!(load_batches(&path).unwrap().len(), 2);
}

#[test]
fn test_select_requires_name_when_ambiguous() {
    let batches = parse_batches(INPUT).unwrap();
    assert!(matches!(select(&batches, None), Err(TitleGraphError::AmbiguousCommunity(_))));
    assert!(matches!(select(&batches, Some("cooking")), Err(TitleGraphError::UnknownCommunity(_))));
    let (name, docs) = select(&batches, Some("rust")).unwrap();
    assert_eq!(name, "rust");
    assert_eq!(docs.len(), 2);
}

#[test]
fn test_select_single_community_without_name() {
    let batches = parse_batches(r#"{"solo": []}"#).unwrap();
    assert_eq!(select(&batches, None).unwrap().0, "solo");
}

#[test]
fn test_bad_json_is_reported() {
    assert!(matches!(parse_batches("[1, 2]"), Err(TitleGraphError::Json(_))));
}
