use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::{
    calculate_compatibility, calculate_consistency_score, combine_team_keywords, merge_keywords,
    CompatibilityScorer, ScorePipeline,
};
use crate::error::ApiError;
use crate::models::{
    CompatibilityRequest, CompatibilityResponse, ConsistencyRequest, ConsistencyResponse,
    FinalScoreResponse, HealthResponse, MatchQuality, MergeKeywordsRequest, MergeKeywordsResponse,
    ScoreSet, TeamKeywordsRequest, TeamKeywordsResponse, TopMatchesRequest, TopMatchesResponse,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub scorer: CompatibilityScorer,
    pub pipeline: ScorePipeline,
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            scorer: CompatibilityScorer::default(),
            pipeline: ScorePipeline::default(),
            default_limit: crate::core::compatibility::DEFAULT_MATCH_LIMIT,
            max_limit: 100,
        }
    }
}

/// Configure all scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/keywords/merge", web::post().to(merge))
        .route("/compatibility", web::post().to(compatibility))
        .route("/matches/top", web::post().to(top_matches))
        .route("/teams/keywords", web::post().to(team_keywords))
        .route("/scores/consistency", web::post().to(consistency))
        .route("/scores/final", web::post().to(final_score));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Merge keywords endpoint
///
/// POST /api/v1/keywords/merge
///
/// Request body:
/// ```json
/// {
///   "existing": [{"keyword": "python", "weight": 0.8, "sources": ["pdf"]}],
///   "incoming": [{"keyword": " Python ", "weight": 0.9, "source": "manual"}]
/// }
/// ```
async fn merge(req: web::Json<MergeKeywordsRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let MergeKeywordsRequest { existing, incoming } = req.into_inner();
    let keywords = merge_keywords(existing, incoming);

    Ok(HttpResponse::Ok().json(MergeKeywordsResponse {
        total: keywords.len(),
        keywords,
    }))
}

/// Compatibility endpoint
///
/// POST /api/v1/compatibility
///
/// Request body:
/// ```json
/// {
///   "keywordsA": ["rust", {"keyword": "sql", "weight": 0.6}],
///   "keywordsB": [{"keyword": "rust", "weight": 0.5}]
/// }
/// ```
async fn compatibility(req: web::Json<CompatibilityRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let result = calculate_compatibility(&req.keywords_a, &req.keywords_b);
    let quality = MatchQuality::from_score(result.score);

    tracing::debug!("Compatibility {} ({} common keywords)", result.score, result.total_common);

    Ok(HttpResponse::Ok().json(CompatibilityResponse { result, quality }))
}

/// Top matches endpoint
///
/// POST /api/v1/matches/top
///
/// Request body:
/// ```json
/// {
///   "userKeywords": ["rust", "sql"],
///   "candidates": [{"userId": "u1", "keywords": ["rust"]}],
///   "limit": 10
/// }
/// ```
async fn top_matches(
    state: web::Data<AppState>,
    req: web::Json<TopMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let TopMatchesRequest { user_keywords, candidates, limit } = req.into_inner();
    let limit = limit
        .map(usize::from)
        .unwrap_or(state.default_limit)
        .min(state.max_limit);
    let total_candidates = candidates.len();

    tracing::info!("Ranking {} candidates, limit: {}", total_candidates, limit);

    // Large pools fan out over rayon; keep that off the async workers
    let scorer = state.scorer;
    let matches = tokio::task::spawn_blocking(move || {
        scorer.find_top_matches(&user_keywords, candidates, limit)
    })
    .await
    .map_err(|e| {
        tracing::error!("Ranking task failed: {}", e);
        ApiError::Blocking(e.to_string())
    })?;

    tracing::info!("Returning {} matches (from {} candidates)", matches.len(), total_candidates);

    Ok(HttpResponse::Ok().json(TopMatchesResponse {
        matches,
        total_candidates,
    }))
}

/// Team keywords endpoint
///
/// POST /api/v1/teams/keywords
///
/// Request body:
/// ```json
/// {
///   "members": [
///     [{"keyword": "python", "weight": 0.7}, {"keyword": "kubernetes"}],
///     [{"keyword": "Python", "weight": 0.6}]
///   ]
/// }
/// ```
async fn team_keywords(req: web::Json<TeamKeywordsRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let keywords = combine_team_keywords(&req.members);

    Ok(HttpResponse::Ok().json(TeamKeywordsResponse {
        keywords,
        member_count: req.members.len(),
    }))
}

/// Consistency score endpoint
///
/// POST /api/v1/scores/consistency
async fn consistency(
    state: web::Data<AppState>,
    req: web::Json<ConsistencyRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let required = req.required.unwrap_or(state.pipeline.required_logs());
    let consistency_score = calculate_consistency_score(req.logs_count, required);

    Ok(HttpResponse::Ok().json(ConsistencyResponse { consistency_score }))
}

/// Final score endpoint
///
/// POST /api/v1/scores/final
///
/// Request body:
/// ```json
/// {
///   "synergy_score": 72.5,
///   "technical_score": 80
/// }
/// ```
async fn final_score(
    state: web::Data<AppState>,
    req: web::Json<ScoreSet>,
) -> HttpResponse {
    let scores = req.into_inner();
    let final_score = state.pipeline.calculate_final_score(&scores);

    HttpResponse::Ok().json(FinalScoreResponse { scores, final_score })
}
