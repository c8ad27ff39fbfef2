// Core algorithm exports
pub mod compatibility;
pub mod merge;
pub mod normalize;
pub mod pipeline;
pub mod team;

pub use compatibility::{calculate_compatibility, find_top_matches, CompatibilityScorer};
pub use merge::merge_keywords;
pub use normalize::normalize_keyword;
pub use pipeline::{
    calculate_consistency_score, calculate_final_score, ScorePipeline, SubScoreEvaluator,
    TeamSubmission,
};
pub use team::combine_team_keywords;
