use crate::scoring::status::Status;
use crate::types::evaluation::Evaluation;
use crate::types::scoring::{Criteria, Score, Weights};
use serde::Serialize;

/// Live preview of a criteria set: what the form shows before submitting.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreCard {
    pub criteria: Criteria,
    pub weights: Weights,
    pub score: Score,
    pub status: Status,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredEvaluation {
    #[serde(flatten)]
    pub evaluation: Evaluation,
    pub score: Score,
    pub status: Status,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusShare {
    pub status: Status,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub total: usize,
    pub general_average: Score,
    pub criteria_average: Criteria,
    pub top_performer: Option<ScoredEvaluation>,
    pub distribution: Vec<StatusShare>,
}
