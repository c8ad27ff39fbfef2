use indexmap::IndexMap;
use rayon::prelude::*;
use crate::core::normalize::normalize_keyword;
use crate::models::{KeywordInput, KeywordSource, MatchResult, RankedCandidate, WeightedKeyword};

/// Default number of candidates returned by `find_top_matches`
pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// Candidate pools at least this large are scored on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Compute the weighted-Jaccard compatibility of two keyword profiles
///
/// Scoring formula:
/// intersection = sum over shared keywords of (weight_a + weight_b) / 2
/// union        = total_a + total_b - intersection
/// score        = intersection / union * 100, rounded to 2 decimals
///
/// Either side empty yields a zero result.
pub fn calculate_compatibility(keywords_a: &[KeywordInput], keywords_b: &[KeywordInput]) -> MatchResult {
    if keywords_a.is_empty() || keywords_b.is_empty() {
        return MatchResult::empty();
    }

    let map_a = weight_map(keywords_a);
    let map_b = weight_map(keywords_b);

    let total_a: f64 = map_a.values().sum();
    let total_b: f64 = map_b.values().sum();

    // Walk shared keys in sorted order so the sum is identical for (a, b) and (b, a)
    let mut shared: Vec<(&String, f64, f64)> = map_a
        .iter()
        .filter_map(|(key, weight_a)| map_b.get(key).map(|weight_b| (key, *weight_a, *weight_b)))
        .collect();
    shared.sort_by(|a, b| a.0.cmp(b.0));

    let mut weighted_intersection = 0.0;
    let mut common_keywords = Vec::with_capacity(shared.len());

    for (keyword, weight_a, weight_b) in shared {
        let avg = (weight_a + weight_b) / 2.0;
        weighted_intersection += avg;
        common_keywords.push(WeightedKeyword {
            keyword: keyword.clone(),
            weight: avg,
        });
    }

    let weighted_union = total_a + total_b - weighted_intersection;
    let score = if weighted_union > 0.0 {
        round_to_cents((weighted_intersection / weighted_union) * 100.0)
    } else {
        0.0
    };

    common_keywords.sort_by(|a, b| b.weight.total_cmp(&a.weight).then_with(|| a.keyword.cmp(&b.keyword)));

    MatchResult {
        score,
        total_common: common_keywords.len(),
        common_keywords,
    }
}

/// Build a normalized keyword -> weight map; a later duplicate overwrites an earlier one
fn weight_map(keywords: &[KeywordInput]) -> IndexMap<String, f64> {
    let mut map = IndexMap::with_capacity(keywords.len());
    for input in keywords {
        let key = normalize_keyword(input.keyword());
        if key.is_empty() {
            continue;
        }
        map.insert(key, input.weight());
    }
    map
}

#[inline]
pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Candidate ranking over a pool of keyword profiles
///
/// Every candidate is scored independently, so pools at or above
/// `parallel_threshold` are fanned out across rayon's worker pool. The
/// filter/sort/truncate step that follows always runs on the calling thread.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityScorer {
    parallel_threshold: usize,
}

impl CompatibilityScorer {
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Rank `candidates` by compatibility with `user_keywords`
    ///
    /// Candidates with a zero score are dropped; the rest are sorted by
    /// descending compatibility and truncated to `limit`.
    pub fn find_top_matches<C>(
        &self,
        user_keywords: &[KeywordInput],
        candidates: Vec<C>,
        limit: usize,
    ) -> Vec<RankedCandidate<C>>
    where
        C: KeywordSource + Send,
    {
        let total_candidates = candidates.len();

        let rank = |candidate: C| {
            let result = calculate_compatibility(user_keywords, candidate.keywords());
            RankedCandidate {
                candidate,
                compatibility: result.score,
                common_keywords: result.common_keywords,
                total_common: result.total_common,
            }
        };

        let scored: Vec<RankedCandidate<C>> = if total_candidates >= self.parallel_threshold {
            tracing::debug!("Scoring {} candidates in parallel", total_candidates);
            candidates.into_par_iter().map(rank).collect()
        } else {
            candidates.into_iter().map(rank).collect()
        };

        let mut ranked: Vec<RankedCandidate<C>> = scored
            .into_iter()
            .filter(|ranked| ranked.compatibility > 0.0)
            .collect();

        // Stable sort keeps the caller's order among equal scores
        ranked.sort_by(|a, b| b.compatibility.total_cmp(&a.compatibility));
        ranked.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} candidates (limit {})",
            ranked.len(),
            total_candidates,
            limit
        );

        ranked
    }
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLEL_THRESHOLD)
    }
}

/// Rank candidates with the default scorer
pub fn find_top_matches<C>(user_keywords: &[KeywordInput], candidates: Vec<C>, limit: usize) -> Vec<RankedCandidate<C>>
where
    C: KeywordSource + Send,
{
    CompatibilityScorer::default().find_top_matches(user_keywords, candidates, limit)
}
