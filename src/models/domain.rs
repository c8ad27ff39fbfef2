use serde::{Deserialize, Deserializer, Serialize};

/// Weight assumed for a bare keyword string or a weighted entry without a weight
pub const IMPLICIT_WEIGHT: f64 = 1.0;

/// Deserialize a list where the list itself or any entry may be `null`.
///
/// A `null` list becomes empty and `null` entries are dropped.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(entries.unwrap_or_default().into_iter().flatten().collect())
}

/// Deserialize a list of lists; `null` members become empty lists so they
/// still count as members.
pub fn null_members_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let members = Option::<Vec<Option<Vec<Option<T>>>>>::deserialize(deserializer)?;
    Ok(members
        .unwrap_or_default()
        .into_iter()
        .map(|member| member.unwrap_or_default().into_iter().flatten().collect())
        .collect())
}

/// A normalized skill keyword belonging to one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sources: Vec<String>,
}

impl Keyword {
    pub fn new(keyword: impl Into<String>, weight: f64) -> Self {
        Self {
            keyword: keyword.into(),
            weight,
            category: None,
            sources: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let source = source.into();
        if !self.sources.contains(&source) {
            self.sources.push(source);
        }
        self
    }
}

/// Keyword as it arrives from extraction (PDF parsing, manual entry).
///
/// Nothing is guaranteed: the keyword may be missing or unnormalized, and
/// provenance may come as a single `source` or a `sources` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawKeyword {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}

impl RawKeyword {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Default::default()
        }
    }

    pub fn weighted(keyword: impl Into<String>, weight: f64) -> Self {
        Self {
            keyword: Some(keyword.into()),
            weight: Some(weight),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = Some(sources);
        self
    }

    /// `sources` when present, otherwise the single `source`
    pub fn source_list(&self) -> Vec<String> {
        match (&self.sources, &self.source) {
            (Some(sources), _) => sources.clone(),
            (None, Some(source)) => vec![source.clone()],
            (None, None) => Vec::new(),
        }
    }
}

/// A keyword reference with its weight, used for comparisons and results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedKeyword {
    pub keyword: String,
    pub weight: f64,
}

/// Keyword input accepted by the compatibility scorer: either a bare string
/// or an object carrying a weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordInput {
    Bare(String),
    Weighted {
        #[serde(default)]
        keyword: Option<String>,
        #[serde(default)]
        weight: Option<f64>,
    },
}

impl KeywordInput {
    pub fn keyword(&self) -> &str {
        match self {
            KeywordInput::Bare(keyword) => keyword,
            KeywordInput::Weighted { keyword, .. } => keyword.as_deref().unwrap_or(""),
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            KeywordInput::Bare(_) => IMPLICIT_WEIGHT,
            KeywordInput::Weighted { weight, .. } => weight.unwrap_or(IMPLICIT_WEIGHT),
        }
    }
}

impl From<&str> for KeywordInput {
    fn from(keyword: &str) -> Self {
        KeywordInput::Bare(keyword.to_string())
    }
}

impl From<(&str, f64)> for KeywordInput {
    fn from((keyword, weight): (&str, f64)) -> Self {
        KeywordInput::Weighted {
            keyword: Some(keyword.to_string()),
            weight: Some(weight),
        }
    }
}

impl From<&Keyword> for KeywordInput {
    fn from(keyword: &Keyword) -> Self {
        KeywordInput::Weighted {
            keyword: Some(keyword.keyword.clone()),
            weight: Some(keyword.weight),
        }
    }
}

/// A keyword in a team's combined profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedTeamKeyword {
    pub keyword: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Number of contributing entries across all members
    pub occurrences: u32,
    #[serde(rename = "isUnique")]
    pub is_unique: bool,
}

/// Weighted-Jaccard comparison of two keyword profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    #[serde(rename = "commonKeywords")]
    pub common_keywords: Vec<WeightedKeyword>,
    #[serde(rename = "totalCommon")]
    pub total_common: usize,
}

impl MatchResult {
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            common_keywords: Vec::new(),
            total_common: 0,
        }
    }
}

/// Anything that can be ranked against a user's keyword profile
pub trait KeywordSource {
    fn keywords(&self) -> &[KeywordInput];
}

/// Candidate profile as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<KeywordInput>,
}

impl KeywordSource for CandidateProfile {
    fn keywords(&self) -> &[KeywordInput] {
        &self.keywords
    }
}

/// A candidate with its compatibility against the requesting user attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate<C> {
    #[serde(flatten)]
    pub candidate: C,
    pub compatibility: f64,
    #[serde(rename = "commonKeywords")]
    pub common_keywords: Vec<WeightedKeyword>,
    #[serde(rename = "totalCommon")]
    pub total_common: usize,
}

/// Qualitative label for a compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchQuality {
    Excellent,
    Great,
    Good,
    Moderate,
    Low,
}

impl MatchQuality {
    /// First threshold the score reaches wins
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            MatchQuality::Excellent
        } else if score >= 50.0 {
            MatchQuality::Great
        } else if score >= 30.0 {
            MatchQuality::Good
        } else if score >= 15.0 {
            MatchQuality::Moderate
        } else {
            MatchQuality::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchQuality::Excellent => "Excellent Match",
            MatchQuality::Great => "Great Match",
            MatchQuality::Good => "Good Match",
            MatchQuality::Moderate => "Moderate Match",
            MatchQuality::Low => "Low Match",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MatchQuality::Excellent => "green",
            MatchQuality::Great => "blue",
            MatchQuality::Good => "yellow",
            MatchQuality::Moderate => "orange",
            MatchQuality::Low => "gray",
        }
    }
}

impl Serialize for MatchQuality {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("MatchQuality", 2)?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("color", self.color())?;
        state.end()
    }
}

/// Independently sourced sub-scores, each 0-100 and each optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synergy_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_score: Option<f64>,
}

/// Sub-score weights for the final ranking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub synergy: f64,
    pub consistency: f64,
    pub technical: f64,
    pub social: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            synergy: 0.25,
            consistency: 0.20,
            technical: 0.35,
            social: 0.20,
        }
    }
}

/// Score set together with the final score derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreReport {
    pub scores: ScoreSet,
    pub final_score: f64,
}
