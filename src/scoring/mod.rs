pub mod policy;
pub mod status;

use crate::types::evaluation::Evaluation;
use crate::types::report::{ScoreCard, ScoredEvaluation};
use crate::types::scoring::{Criteria, Score, Weights};
use status::Status;

/// Weighted sum of the four ratings, rounded to two decimals.
pub fn overall_score(criteria: &Criteria, weights: &Weights) -> Score {
    let raw = criteria.quality * weights.quality
        + criteria.delivery * weights.delivery
        + criteria.price * weights.price
        + criteria.service * weights.service;
    round2(raw)
}

/// Rounds half away from zero at the second decimal.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn score_card(criteria: Criteria, weights: &Weights) -> ScoreCard {
    let score = overall_score(&criteria, weights);
    ScoreCard {
        criteria,
        weights: *weights,
        score,
        status: Status::classify(score),
    }
}

pub fn scored(evaluation: &Evaluation, weights: &Weights) -> ScoredEvaluation {
    let score = overall_score(&evaluation.criteria, weights);
    ScoredEvaluation {
        evaluation: evaluation.clone(),
        score,
        status: Status::classify(score),
    }
}
