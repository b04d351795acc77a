//! Co-occurrence and keyword-similarity graphs over community post titles.
//!
//! Documents flow through tokenization, pairwise accumulation, degree
//! pruning, optional community grouping and a seeded spring layout, ending
//! in a [`render::RenderOutcome`] for an external renderer.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod pipeline;
pub mod render;
pub mod summary;
pub mod text;
pub mod types;

pub use config::PipelineConfig;
pub use error::{Result, TitleGraphError};
pub use pipeline::{rank_communities, CommunityReport, Pipeline};
pub use render::{RenderOutcome, RenderRequest};
pub use types::{Document, Term};
