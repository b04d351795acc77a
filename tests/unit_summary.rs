// tests/unit_summary.rs
use titlegraph_core::summary::{top_authors, top_words, CommunityStats};
use titlegraph_core::text::StopWords;
use titlegraph_core::Document;

fn fixture() -> Vec<Document> {
    vec![
        Document::titled("cat videos cat").with_author("alice").with_score(10).with_comments(4),
        Document::titled("dog videos").with_author("bob").with_score(25).with_comments(1),
        Document::titled("cat facts").with_author("alice").with_score(20).adult(true).with_comments(5),
        Document::titled("the end").with_score(100),
    ]
}

#[test]
fn test_top_words_rank_by_count_then_word() {
    let stop: StopWords = ["the"].into_iter().collect();
    let words = top_words(&fixture(), &stop, 3);
    let ranked: Vec<(&str, usize)> = words.iter().map(|w| (w.word.as_str(), w.count)).collect();
    assert_eq!(ranked, vec![("cat", 3), ("videos", 2), ("dog", 1)]);
}

#[test]
fn test_top_authors_sum_karma_and_skip_anonymous() {
    let authors = top_authors(&fixture(), 10);
    let ranked: Vec<(&str, i64)> = authors.iter().map(|a| (a.author.as_str(), a.karma)).collect();
    assert_eq!(ranked, vec![("alice", 30), ("bob", 25)]);
}

#[test]
fn test_stats_split_by_adult_flag() {
    let stats = CommunityStats::from_documents(&fixture());
    assert_eq!(stats.posts, 4);
    assert_eq!(stats.karma, 155);
    assert_eq!(stats.comments, 10);
    assert_eq!(stats.nsfw_posts, 1);
    assert_eq!(stats.sfw_posts, 3);
    assert_eq!(stats.nsfw_comments, 5);
    assert!((stats.sfw_percentage() - 75.0).abs() < 1e-9);
    assert!((stats.nsfw_percentage() - 25.0).abs() < 1e-9);
}

#[test]
fn test_stats_of_nothing() {
    let stats = CommunityStats::from_documents(&[]);
    assert_eq!(stats, CommunityStats::default());
    assert_eq!(stats.sfw_percentage(), 0.0);
}

#[test]
fn test_karma_totals_saturate() {
    let docs = vec![
        Document::titled("big win").with_author("alice").with_score(i64::MAX),
        Document::titled("small win").with_author("alice").with_score(5),
    ];
    assert_eq!(CommunityStats::from_documents(&docs).karma, i64::MAX);
    assert_eq!(top_authors(&docs, 1)[0].karma, i64::MAX);

    let losses = vec![
        Document::titled("downvoted").with_score(i64::MIN),
        Document::titled("also downvoted").with_score(-1),
    ];
    assert_eq!(CommunityStats::from_documents(&losses).karma, i64::MIN);
}
