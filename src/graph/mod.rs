// src/graph/mod.rs
//! Graph construction, pruning, grouping and placement over title vocabulary.

pub mod community;
pub mod cooccurrence;
pub mod filter;
pub mod layout;
pub mod similarity;
pub mod vocabulary;
pub mod weighted;

pub use community::{Community, CommunityDetector, GreedyModularity};
pub use cooccurrence::build_cooccurrence_graph;
pub use filter::filter_by_degree;
pub use layout::{ForceLayout, Layout, Point, SpringLayout};
pub use similarity::{build_similarity_graph, TermMatrix};
pub use weighted::{EdgeKey, WeightedGraph};
