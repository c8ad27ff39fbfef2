use crate::core::compatibility::round_to_cents;
use crate::models::{CombinedTeamKeyword, ScoreReport, ScoreSet, ScoreWeights};

/// Activity logs needed for a full consistency score
pub const DEFAULT_REQUIRED_LOGS: u32 = 5;

/// Consistency sub-score (0-100) from an activity log count, capped at 100
///
/// A zero requirement is treated as already met.
pub fn calculate_consistency_score(logs_count: u32, required: u32) -> f64 {
    if required == 0 {
        return 100.0;
    }
    ((logs_count as f64 / required as f64) * 100.0).min(100.0)
}

/// Externally computed sub-scores, such as a language-model judge.
///
/// Implementations are supplied by the caller; returning `None` leaves the
/// sub-score out of the final ranking instead of counting it as zero.
pub trait SubScoreEvaluator: Send + Sync {
    fn synergy_score(&self, team_keywords: &[CombinedTeamKeyword]) -> Option<f64>;

    fn technical_score(&self, team_keywords: &[CombinedTeamKeyword]) -> Option<f64>;
}

/// Everything the pipeline needs to score one team submission
#[derive(Debug, Clone, Default)]
pub struct TeamSubmission {
    pub team_keywords: Vec<CombinedTeamKeyword>,
    pub logs_count: Option<u32>,
    pub social_score: Option<f64>,
}

/// Combines independently sourced sub-scores into the final ranking number
#[derive(Debug, Clone, Copy)]
pub struct ScorePipeline {
    weights: ScoreWeights,
    required_logs: u32,
}

impl ScorePipeline {
    pub fn new(weights: ScoreWeights, required_logs: u32) -> Self {
        Self { weights, required_logs }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoreWeights::default(), DEFAULT_REQUIRED_LOGS)
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn required_logs(&self) -> u32 {
        self.required_logs
    }

    pub fn consistency_score(&self, logs_count: u32) -> f64 {
        calculate_consistency_score(logs_count, self.required_logs)
    }

    /// Weighted mean of the sub-scores that are present, rounded to 2 decimals
    ///
    /// Absent sub-scores drop out of both the numerator and the weight sum, so
    /// partial data is renormalized rather than pulled toward zero. No
    /// sub-scores at all yields 0.
    pub fn calculate_final_score(&self, scores: &ScoreSet) -> f64 {
        let components = [
            (scores.synergy_score, self.weights.synergy),
            (scores.consistency_score, self.weights.consistency),
            (scores.technical_score, self.weights.technical),
            (scores.social_score, self.weights.social),
        ];

        let (total, weight_sum) = components
            .iter()
            .filter_map(|(score, weight)| score.map(|score| (score, *weight)))
            .fold((0.0, 0.0), |(total, weight_sum), (score, weight)| {
                (total + score * weight, weight_sum + weight)
            });

        if weight_sum > 0.0 {
            round_to_cents(total / weight_sum)
        } else {
            0.0
        }
    }

    /// Assemble a score set for a submission and derive its final score
    pub fn evaluate(&self, submission: &TeamSubmission, evaluator: &dyn SubScoreEvaluator) -> ScoreReport {
        let scores = ScoreSet {
            synergy_score: evaluator.synergy_score(&submission.team_keywords),
            consistency_score: submission.logs_count.map(|logs| self.consistency_score(logs)),
            technical_score: evaluator.technical_score(&submission.team_keywords),
            social_score: submission.social_score,
        };

        let final_score = self.calculate_final_score(&scores);

        tracing::debug!("Evaluated submission: {:?} -> {}", scores, final_score);

        ScoreReport { scores, final_score }
    }
}

impl Default for ScorePipeline {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Final score under the default weights
pub fn calculate_final_score(scores: &ScoreSet) -> f64 {
    ScorePipeline::default().calculate_final_score(scores)
}
