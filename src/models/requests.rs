use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{
    null_as_empty, null_members_as_empty, CandidateProfile, Keyword, KeywordInput, RawKeyword,
};

/// Request to merge freshly extracted keywords into an existing profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MergeKeywordsRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub existing: Vec<Keyword>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub incoming: Vec<RawKeyword>,
}

/// Request to compare two keyword profiles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompatibilityRequest {
    #[serde(alias = "keywords_a", rename = "keywordsA", default, deserialize_with = "null_as_empty")]
    pub keywords_a: Vec<KeywordInput>,
    #[serde(alias = "keywords_b", rename = "keywordsB", default, deserialize_with = "null_as_empty")]
    pub keywords_b: Vec<KeywordInput>,
}

/// Request to rank a candidate pool against a user's keywords
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopMatchesRequest {
    #[serde(alias = "user_keywords", rename = "userKeywords", default, deserialize_with = "null_as_empty")]
    pub user_keywords: Vec<KeywordInput>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub candidates: Vec<CandidateProfile>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to aggregate a team's keyword profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TeamKeywordsRequest {
    #[serde(default, deserialize_with = "null_members_as_empty")]
    pub members: Vec<Vec<RawKeyword>>,
}

/// Request for a consistency sub-score
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConsistencyRequest {
    #[serde(alias = "logs_count", rename = "logsCount")]
    pub logs_count: u32,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub required: Option<u32>,
}
