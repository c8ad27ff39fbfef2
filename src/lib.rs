//! Skill Match - skill-compatibility and team scoring engine
//!
//! This library provides the pure scoring core of the professional-matching
//! platform: keyword normalization and merging, weighted-Jaccard compatibility,
//! team keyword aggregation and the final competition score.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    calculate_compatibility, calculate_consistency_score, calculate_final_score,
    combine_team_keywords, find_top_matches, merge_keywords, normalize_keyword,
    CompatibilityScorer, ScorePipeline, SubScoreEvaluator,
};
pub use crate::models::{CombinedTeamKeyword, Keyword, KeywordInput, MatchQuality, MatchResult, RawKeyword, ScoreSet};
