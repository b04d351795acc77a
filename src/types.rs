// src/types.rs
//! Input records shared by every stage of the pipeline.

use serde::{Deserialize, Serialize};

/// A normalized lowercase token.
pub type Term = String;

/// A single post as supplied by the data-fetching collaborator.
///
/// Only `title` feeds the graph stages; the remaining fields are used by
/// the community summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default, alias = "over_18")]
    pub is_adult: bool,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_utc: i64,
    #[serde(default)]
    pub num_comments: u64,
}

impl Document {
    /// Creates a document with only a title; every other field is zeroed.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            score: 0,
            is_adult: false,
            author: None,
            created_utc: 0,
            num_comments: 0,
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    #[must_use]
    pub fn with_comments(mut self, num_comments: u64) -> Self {
        self.num_comments = num_comments;
        self
    }

    #[must_use]
    pub fn adult(mut self, is_adult: bool) -> Self {
        self.is_adult = is_adult;
        self
    }
}
