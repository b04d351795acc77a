// src/text/mod.rs
pub mod stopwords;
pub mod tokenizer;

pub use tokenizer::{keyword_tokens, tokenize, StopWords};
