// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, CombinedTeamKeyword, Keyword, KeywordInput, KeywordSource, MatchQuality,
    MatchResult, RankedCandidate, RawKeyword, ScoreReport, ScoreSet, ScoreWeights,
    WeightedKeyword, IMPLICIT_WEIGHT,
};
pub use requests::{
    CompatibilityRequest, ConsistencyRequest, MergeKeywordsRequest, TeamKeywordsRequest,
    TopMatchesRequest,
};
pub use responses::{
    CompatibilityResponse, ConsistencyResponse, ErrorResponse, FinalScoreResponse,
    HealthResponse, MergeKeywordsResponse, TeamKeywordsResponse, TopMatchesResponse,
};
