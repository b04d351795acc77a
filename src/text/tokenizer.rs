// src/text/tokenizer.rs
//! Title tokenization for both graph strategies.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::stopwords::is_english_stop_word;
use crate::types::Term;

/// Words of two or more word characters, the keyword path's token shape.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Letters only (general category L). Letter numbers and combining marks fail.
static LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+$").unwrap_or_else(|_| panic!("Invalid Regex")));

/// A case-insensitive set of words to drop before counting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from newline-separated text, one word per line.
    /// Blank lines are skipped; entries are trimmed and lowercased.
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        text.lines().collect()
    }

    pub fn insert(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.words.insert(word.to_lowercase());
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}

impl<S: AsRef<str>> Extend<S> for StopWords {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

/// Splits a title into candidate terms for co-occurrence counting.
///
/// Lowercases, splits on whitespace, and drops stop words and any token
/// containing a non-alphabetic character. Order follows the title.
#[must_use]
pub fn tokenize(title: &str, stopwords: &StopWords) -> Vec<Term> {
    title
        .to_lowercase()
        .split_whitespace()
        .filter(|word| is_alphabetic(word) && !stopwords.contains(word))
        .map(str::to_string)
        .collect()
}

/// Extracts keyword-path tokens: runs of two or more word characters,
/// lowercased, minus the built-in English stop words.
#[must_use]
pub fn keyword_tokens(title: &str) -> Vec<Term> {
    let lower = title.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|word| !is_english_stop_word(word))
        .map(str::to_string)
        .collect()
}

fn is_alphabetic(word: &str) -> bool {
    LETTERS.is_match(word)
}
