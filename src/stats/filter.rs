use crate::scoring::overall_score;
use crate::scoring::status::Status;
use crate::types::evaluation::Evaluation;
use crate::types::scoring::Weights;

/// Keeps records whose supplier or evaluator contains `query` (case-insensitive)
/// and, when given, whose status matches. Input order is preserved.
pub fn filter_evaluations<'a>(
    evaluations: &'a [Evaluation],
    query: Option<&str>,
    status: Option<Status>,
    weights: &Weights,
) -> Vec<&'a Evaluation> {
    let needle = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    evaluations
        .iter()
        .filter(|evaluation| match &needle {
            Some(needle) => matches_text(evaluation, needle),
            None => true,
        })
        .filter(|evaluation| match status {
            Some(wanted) => Status::classify(overall_score(&evaluation.criteria, weights)) == wanted,
            None => true,
        })
        .collect()
}

fn matches_text(evaluation: &Evaluation, needle: &str) -> bool {
    evaluation.supplier.to_lowercase().contains(needle)
        || evaluation
            .evaluator
            .as_ref()
            .is_some_and(|evaluator| evaluator.to_lowercase().contains(needle))
}
