// src/pipeline.rs
//! Runs the stages end to end for one or many communities.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::graph::{
    build_cooccurrence_graph, build_similarity_graph, filter_by_degree, CommunityDetector,
    ForceLayout, GreedyModularity, SpringLayout, WeightedGraph,
};
use crate::render::{build_render_request, GraphKind, RenderOutcome};
use crate::summary::{self, AuthorKarma, CommunityStats, WordCount};
use crate::text::StopWords;
use crate::types::Document;

/// Everything computed for a single community.
#[derive(Debug, Clone, Serialize)]
pub struct CommunityReport {
    pub community: String,
    pub stats: CommunityStats,
    pub top_words: Vec<WordCount>,
    pub top_authors: Vec<AuthorKarma>,
    pub cooccurrence: RenderOutcome,
    pub similarity: RenderOutcome,
}

/// Stateless between calls; one instance can serve many communities at once.
pub struct Pipeline {
    config: PipelineConfig,
    stopwords: StopWords,
    layout: Box<dyn ForceLayout>,
    keyword_layout: Box<dyn ForceLayout>,
    detector: Option<Box<dyn CommunityDetector>>,
}

impl Pipeline {
    /// # Errors
    /// Returns `InvalidConfig` if any threshold is out of range.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let stopwords: StopWords = config.stopwords.iter().collect();
        let layout: Box<dyn ForceLayout> = Box::new(SpringLayout::new(config.layout.clone()));
        let keyword_layout: Box<dyn ForceLayout> =
            Box::new(SpringLayout::new(config.layout.for_keywords()));
        let detector: Option<Box<dyn CommunityDetector>> = if config.detect_communities {
            Some(Box::new(GreedyModularity))
        } else {
            None
        };
        Ok(Self {
            config,
            stopwords,
            layout,
            keyword_layout,
            detector,
        })
    }

    /// Adds custom stop words on top of those named in the config.
    #[must_use]
    pub fn with_stopwords(mut self, extra: &StopWords) -> Self {
        self.stopwords = merge(&self.stopwords, extra);
        self
    }

    /// Replaces the layout used for co-occurrence graphs.
    #[must_use]
    pub fn with_layout(mut self, layout: Box<dyn ForceLayout>) -> Self {
        self.layout = layout;
        self
    }

    /// Replaces the layout used for keyword similarity graphs.
    #[must_use]
    pub fn with_keyword_layout(mut self, layout: Box<dyn ForceLayout>) -> Self {
        self.keyword_layout = layout;
        self
    }

    #[must_use]
    pub fn with_detector(mut self, detector: Option<Box<dyn CommunityDetector>>) -> Self {
        self.detector = detector;
        self
    }

    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    #[must_use]
    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Co-occurrence graph after edge-weight and degree pruning.
    #[must_use]
    pub fn cooccurrence_graph(&self, documents: &[Document]) -> WeightedGraph {
        let raw = build_cooccurrence_graph(
            documents,
            &self.stopwords,
            self.config.min_cooccurrence,
            self.config.max_terms,
        );
        filter_by_degree(&raw, self.config.min_degree_cooc, self.config.degree_filter)
    }

    /// Similarity graph after score and degree pruning.
    #[must_use]
    pub fn similarity_graph(&self, documents: &[Document]) -> WeightedGraph {
        let raw = build_similarity_graph(documents, self.config.min_similarity, self.config.max_terms);
        filter_by_degree(&raw, self.config.min_degree_sim, self.config.degree_filter)
    }

    #[must_use]
    pub fn cooccurrence(&self, community: &str, documents: &[Document]) -> RenderOutcome {
        let graph = self.cooccurrence_graph(documents);
        self.finish(GraphKind::Cooccurrence, community, &graph)
    }

    #[must_use]
    pub fn similarity(&self, community: &str, documents: &[Document]) -> RenderOutcome {
        let graph = self.similarity_graph(documents);
        self.finish(GraphKind::Similarity, community, &graph)
    }

    #[must_use]
    pub fn analyze(&self, community: &str, documents: &[Document]) -> CommunityReport {
        debug!(community, documents = documents.len(), "analyzing community");
        CommunityReport {
            community: community.to_string(),
            stats: CommunityStats::from_documents(documents),
            top_words: summary::top_words(documents, &self.stopwords, self.config.top_words),
            top_authors: summary::top_authors(documents, self.config.top_authors),
            cooccurrence: self.cooccurrence(community, documents),
            similarity: self.similarity(community, documents),
        }
    }

    /// Analyzes independent communities in parallel; output keeps input order.
    #[must_use]
    pub fn analyze_all(&self, batches: &[(String, Vec<Document>)]) -> Vec<CommunityReport> {
        batches
            .par_iter()
            .map(|(community, documents)| self.analyze(community, documents))
            .collect()
    }

    fn finish(&self, kind: GraphKind, community: &str, graph: &WeightedGraph) -> RenderOutcome {
        let title = kind.title(community);
        if graph.is_empty() {
            info!(community, kind = kind.label(), "no significant connections found");
            return RenderOutcome::empty(title, "no significant connections");
        }

        // Grouping only annotates co-occurrence figures and never gates rendering.
        let communities = match (&self.detector, kind) {
            (Some(detector), GraphKind::Cooccurrence) => {
                let found = detector.detect(graph);
                debug!(community, detector = detector.name(), groups = found.len(), "communities detected");
                Some(found)
            }
            _ => None,
        };

        let engine = match kind {
            GraphKind::Cooccurrence => &self.layout,
            GraphKind::Similarity => &self.keyword_layout,
        };
        let layout = engine.layout(graph);
        build_render_request(kind, &title, graph, &layout, communities.as_deref())
    }
}

/// Orders reports by total karma, then post count, both descending, then by
/// community name.
pub fn rank_communities(reports: &mut [CommunityReport]) {
    reports.sort_by(|a, b| {
        b.stats
            .karma
            .cmp(&a.stats.karma)
            .then_with(|| b.stats.posts.cmp(&a.stats.posts))
            .then_with(|| a.community.cmp(&b.community))
    });
}

fn merge(base: &StopWords, extra: &StopWords) -> StopWords {
    let mut merged = base.clone();
    merged.extend(extra.iter());
    merged
}
