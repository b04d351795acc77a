// src/summary.rs
//! Per-community side statistics: frequent words, top authors, post totals.

use std::collections::HashMap;

use serde::Serialize;

use crate::text::{tokenize, StopWords};
use crate::types::{Document, Term};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: Term,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorKarma {
    pub author: String,
    pub karma: i64,
}

/// Most frequent filtered words, by count then alphabetically.
#[must_use]
pub fn top_words(documents: &[Document], stopwords: &StopWords, limit: usize) -> Vec<WordCount> {
    let mut counts: HashMap<Term, usize> = HashMap::new();
    for word in documents.iter().flat_map(|d| tokenize(&d.title, stopwords)) {
        *counts.entry(word).or_default() += 1;
    }
    let mut ranked: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked.truncate(limit);
    ranked
}

/// Authors ranked by summed score. Posts without an author are skipped.
#[must_use]
pub fn top_authors(documents: &[Document], limit: usize) -> Vec<AuthorKarma> {
    let mut karma: HashMap<&str, i64> = HashMap::new();
    for doc in documents {
        if let Some(author) = doc.author.as_deref() {
            let total = karma.entry(author).or_default();
            *total = total.saturating_add(doc.score);
        }
    }
    let mut ranked: Vec<AuthorKarma> = karma
        .into_iter()
        .map(|(author, karma)| AuthorKarma {
            author: author.to_string(),
            karma,
        })
        .collect();
    ranked.sort_by(|a, b| b.karma.cmp(&a.karma).then_with(|| a.author.cmp(&b.author)));
    ranked.truncate(limit);
    ranked
}

/// Activity totals for one community, split by adult-content flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommunityStats {
    pub posts: usize,
    pub karma: i64,
    pub comments: u64,
    pub sfw_posts: usize,
    pub nsfw_posts: usize,
    pub sfw_comments: u64,
    pub nsfw_comments: u64,
}

impl CommunityStats {
    #[must_use]
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut stats = Self::default();
        for doc in documents {
            stats.posts += 1;
            stats.karma = stats.karma.saturating_add(doc.score);
            stats.comments = stats.comments.saturating_add(doc.num_comments);
            if doc.is_adult {
                stats.nsfw_posts += 1;
                stats.nsfw_comments = stats.nsfw_comments.saturating_add(doc.num_comments);
            } else {
                stats.sfw_posts += 1;
                stats.sfw_comments = stats.sfw_comments.saturating_add(doc.num_comments);
            }
        }
        stats
    }

    /// Share of posts not flagged adult, in percent; 0 with no posts.
    #[must_use]
    pub fn sfw_percentage(&self) -> f64 {
        percentage(self.sfw_posts, self.posts)
    }

    #[must_use]
    pub fn nsfw_percentage(&self) -> f64 {
        percentage(self.nsfw_posts, self.posts)
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}
