// src/render.rs
//! Assembles the display-ready graph handed to the rendering collaborator.

use serde::Serialize;

use crate::graph::community::{community_index, Community};
use crate::graph::{Layout, Point, WeightedGraph};

/// Marker size per unit of degree.
const SIZE_PER_DEGREE: f64 = 5.0;

/// Line-width multiplier for similarity edges, whose weights lie in `[0, 1]`.
const SIMILARITY_WIDTH_SCALE: f64 = 5.0;

/// Light and dark ends of the degree color ramp (yellow-green-blue).
const RAMP_LIGHT: (u8, u8, u8) = (0xff, 0xff, 0xd9);
const RAMP_DARK: (u8, u8, u8) = (0x08, 0x1d, 0x58);

/// Distinguishable colors for community grouping, cycled by index.
pub const COMMUNITY_COLORS: [&str; 8] = [
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#a65628", "#f781bf", "#999999",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    Cooccurrence,
    Similarity,
}

impl GraphKind {
    #[must_use]
    pub fn title(self, community: &str) -> String {
        match self {
            Self::Cooccurrence => format!("Co-Occurrence Network for {community}"),
            Self::Similarity => format!("Keyword Map for {community}"),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cooccurrence => "cooccurrence",
            Self::Similarity => "similarity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeMarker {
    pub term: String,
    pub position: Point,
    pub degree: usize,
    pub size: f64,
    /// Degree relative to the busiest node, in `[0, 1]`.
    pub intensity: f64,
    pub color: String,
    pub hover: String,
    pub community: Option<usize>,
    /// Palette color of the assigned community.
    pub group_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeLine {
    pub source: String,
    pub target: String,
    pub from: Point,
    pub to: Point,
    pub weight: f64,
    pub width: f64,
    pub hover: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRequest {
    pub title: String,
    pub kind: GraphKind,
    pub nodes: Vec<NodeMarker>,
    pub edges: Vec<EdgeLine>,
    pub community_count: usize,
}

/// Either a drawable graph or the placeholder sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderOutcome {
    Empty { title: String, reason: String },
    Ready(RenderRequest),
}

impl RenderOutcome {
    #[must_use]
    pub fn empty(title: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Empty {
            title: title.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    #[must_use]
    pub fn request(&self) -> Option<&RenderRequest> {
        match self {
            Self::Ready(req) => Some(req),
            Self::Empty { .. } => None,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Ready(req) => &req.title,
            Self::Empty { title, .. } => title,
        }
    }
}

/// Builds the render request. An empty graph yields [`RenderOutcome::Empty`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build_render_request(
    kind: GraphKind,
    title: &str,
    graph: &WeightedGraph,
    layout: &Layout,
    communities: Option<&[Community]>,
) -> RenderOutcome {
    if graph.is_empty() {
        return RenderOutcome::empty(title, "no significant connections");
    }

    let degrees = graph.degrees();
    let max_degree = degrees.values().copied().max().unwrap_or(0);
    let groups = communities.map(community_index).unwrap_or_default();
    let position = |term: &str| layout.get(term).copied().unwrap_or_default();

    let nodes = degrees
        .iter()
        .map(|(&term, &degree)| {
            let intensity = if max_degree == 0 {
                0.0
            } else {
                degree as f64 / max_degree as f64
            };
            let community = groups.get(term).copied();
            NodeMarker {
                term: term.to_string(),
                position: position(term),
                degree,
                size: degree as f64 * SIZE_PER_DEGREE,
                intensity,
                color: ramp_color(intensity),
                hover: format!("{term} ({degree} connections)"),
                community,
                group_color: community.map(|c| community_color(c).to_string()),
            }
        })
        .collect();

    let edges = graph
        .edges()
        .map(|(u, v, weight)| {
            let (width, hover) = match kind {
                GraphKind::Cooccurrence => (weight, Some(format!("{u} + {v}: {weight} co-occurrences"))),
                GraphKind::Similarity => (weight * SIMILARITY_WIDTH_SCALE, None),
            };
            EdgeLine {
                source: u.to_string(),
                target: v.to_string(),
                from: position(u),
                to: position(v),
                weight,
                width,
                hover,
            }
        })
        .collect();

    RenderOutcome::Ready(RenderRequest {
        title: title.to_string(),
        kind,
        nodes,
        edges,
        community_count: communities.map_or(0, <[Community]>::len),
    })
}

/// Color for a community index, cycling through the palette.
#[must_use]
pub fn community_color(community: usize) -> &'static str {
    COMMUNITY_COLORS[community % COMMUNITY_COLORS.len()]
}

/// Interpolates the degree ramp; higher intensity is darker.
#[must_use]
pub fn ramp_color(intensity: f64) -> String {
    let t = intensity.clamp(0.0, 1.0);
    let mix = |light: u8, dark: u8| -> u8 {
        let v = f64::from(light) + (f64::from(dark) - f64::from(light)) * t;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = v.round() as u8;
        v
    };
    format!(
        "#{:02x}{:02x}{:02x}",
        mix(RAMP_LIGHT.0, RAMP_DARK.0),
        mix(RAMP_LIGHT.1, RAMP_DARK.1),
        mix(RAMP_LIGHT.2, RAMP_DARK.2)
    )
}
