pub mod distribution;
pub mod filter;

use crate::scoring::{overall_score, round2, scored};
use crate::types::evaluation::Evaluation;
use crate::types::report::SummaryReport;
use crate::types::scoring::{Criteria, Score, Weights};

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationStats<'a> {
    pub general_average: Score,
    pub criteria_average: Criteria,
    pub top_performer: Option<&'a Evaluation>,
}

/// Averages over an empty slice are 0 and there is no top performer.
pub fn summarize<'a>(evaluations: &'a [Evaluation], weights: &Weights) -> EvaluationStats<'a> {
    if evaluations.is_empty() {
        return EvaluationStats {
            general_average: 0.0,
            criteria_average: Criteria::zero(),
            top_performer: None,
        };
    }

    let count = evaluations.len() as f64;
    let mut score_sum = 0.0;
    let mut sums = Criteria::zero();
    let mut top: Option<(&Evaluation, Score)> = None;

    for evaluation in evaluations {
        let score = overall_score(&evaluation.criteria, weights);
        score_sum += score;
        sums.quality += evaluation.criteria.quality;
        sums.delivery += evaluation.criteria.delivery;
        sums.price += evaluation.criteria.price;
        sums.service += evaluation.criteria.service;

        // Strict comparison keeps the earliest record on ties.
        if top.map_or(true, |(_, best)| score > best) {
            top = Some((evaluation, score));
        }
    }

    EvaluationStats {
        general_average: round2(score_sum / count),
        criteria_average: Criteria::new(
            round2(sums.quality / count),
            round2(sums.delivery / count),
            round2(sums.price / count),
            round2(sums.service / count),
        ),
        top_performer: top.map(|(evaluation, _)| evaluation),
    }
}

pub fn summary_report(evaluations: &[Evaluation], weights: &Weights) -> SummaryReport {
    let stats = summarize(evaluations, weights);
    SummaryReport {
        total: evaluations.len(),
        general_average: stats.general_average,
        criteria_average: stats.criteria_average,
        top_performer: stats
            .top_performer
            .map(|evaluation| scored(evaluation, weights)),
        distribution: distribution::status_distribution(evaluations, weights),
    }
}
