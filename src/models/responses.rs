use serde::{Deserialize, Serialize};
use crate::models::domain::{
    CandidateProfile, CombinedTeamKeyword, Keyword, MatchQuality, MatchResult, RankedCandidate,
    ScoreSet,
};

/// Response for the merge endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeKeywordsResponse {
    pub keywords: Vec<Keyword>,
    pub total: usize,
}

/// Response for the compatibility endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub quality: MatchQuality,
}

/// Response for the top matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopMatchesResponse {
    pub matches: Vec<RankedCandidate<CandidateProfile>>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the team keywords endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamKeywordsResponse {
    pub keywords: Vec<CombinedTeamKeyword>,
    #[serde(rename = "memberCount")]
    pub member_count: usize,
}

/// Response for the consistency endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyResponse {
    #[serde(rename = "consistencyScore")]
    pub consistency_score: f64,
}

/// Response for the final score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalScoreResponse {
    pub scores: ScoreSet,
    #[serde(rename = "finalScore")]
    pub final_score: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
