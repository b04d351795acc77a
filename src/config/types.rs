use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// How the minimum-degree filter treats nodes orphaned by its own removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Degrees are computed once; survivors are not re-checked.
    #[default]
    SinglePass,
    /// Passes repeat until no node falls below the threshold.
    Cascade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Optimal inter-node distance for co-occurrence graphs. `None` (`"auto"`
    /// in TOML) means `1/sqrt(n)`.
    #[serde(
        default = "default_spring_constant",
        deserialize_with = "deserialize_spring_constant",
        serialize_with = "serialize_spring_constant"
    )]
    pub spring_constant: Option<f64>,
    /// Same, for keyword similarity graphs. Defaults to `1/sqrt(n)`.
    #[serde(
        default,
        deserialize_with = "deserialize_spring_constant",
        serialize_with = "serialize_spring_constant"
    )]
    pub keyword_spring_constant: Option<f64>,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Mean displacement below which the simulation stops early.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Scale attraction by edge weight instead of edge presence.
    #[serde(default)]
    pub weighted: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spring_constant: default_spring_constant(),
            keyword_spring_constant: None,
            iterations: default_iterations(),
            seed: default_seed(),
            threshold: default_threshold(),
            weighted: false,
        }
    }
}

#[allow(clippy::unnecessary_wraps)]
fn default_spring_constant() -> Option<f64> { Some(0.5) }
const fn default_iterations() -> usize { 50 }
const fn default_seed() -> u64 { 42 }
const fn default_threshold() -> f64 { 1e-4 }

impl LayoutConfig {
    /// The same settings with the keyword spring constant in effect.
    #[must_use]
    pub fn for_keywords(&self) -> Self {
        Self {
            spring_constant: self.keyword_spring_constant,
            ..self.clone()
        }
    }
}

/// A spring constant is either a number or the word `auto`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SpringConstant {
    Fixed(f64),
    Named(String),
}

fn deserialize_spring_constant<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match SpringConstant::deserialize(deserializer)? {
        SpringConstant::Fixed(k) => Ok(Some(k)),
        SpringConstant::Named(name) if name.eq_ignore_ascii_case("auto") => Ok(None),
        SpringConstant::Named(name) => Err(de::Error::custom(format!(
            "expected a number or \"auto\", got {name:?}"
        ))),
    }
}

fn serialize_spring_constant<S>(k: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match k {
        Some(k) => serializer.serialize_f64(*k),
        None => serializer.serialize_str("auto"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_min_cooccurrence")]
    pub min_cooccurrence: usize,
    #[serde(default = "default_min_similarity")]
    pub min_similarity: f64,
    #[serde(default = "default_min_degree_cooc")]
    pub min_degree_cooc: usize,
    #[serde(default = "default_min_degree_sim")]
    pub min_degree_sim: usize,
    #[serde(default)]
    pub degree_filter: FilterMode,
    /// Upper bound on distinct terms entering the pairwise stages.
    #[serde(default = "default_max_terms")]
    pub max_terms: usize,
    #[serde(default = "default_true")]
    pub detect_communities: bool,
    #[serde(default = "default_top_limit")]
    pub top_words: usize,
    #[serde(default = "default_top_limit")]
    pub top_authors: usize,
    /// Custom stop words for the co-occurrence path and word counts.
    #[serde(default)]
    pub stopwords: Vec<String>,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_cooccurrence: default_min_cooccurrence(),
            min_similarity: default_min_similarity(),
            min_degree_cooc: default_min_degree_cooc(),
            min_degree_sim: default_min_degree_sim(),
            degree_filter: FilterMode::default(),
            max_terms: default_max_terms(),
            detect_communities: true,
            top_words: default_top_limit(),
            top_authors: default_top_limit(),
            stopwords: Vec::new(),
            layout: LayoutConfig::default(),
        }
    }
}

const fn default_true() -> bool { true }
const fn default_min_cooccurrence() -> usize { 2 }
const fn default_min_similarity() -> f64 { 0.1 }
const fn default_min_degree_cooc() -> usize { 2 }
const fn default_min_degree_sim() -> usize { 1 }
const fn default_max_terms() -> usize { 2000 }
const fn default_top_limit() -> usize { 10 }
