use crate::scoring::overall_score;
use crate::scoring::status::Status;
use crate::types::evaluation::Evaluation;
use crate::types::report::StatusShare;
use crate::types::scoring::Weights;

/// One entry per status, best first, including statuses with no records.
pub fn status_distribution(evaluations: &[Evaluation], weights: &Weights) -> Vec<StatusShare> {
    let total = evaluations.len();
    let statuses = evaluations
        .iter()
        .map(|evaluation| Status::classify(overall_score(&evaluation.criteria, weights)))
        .collect::<Vec<_>>();

    Status::ALL
        .iter()
        .map(|&status| {
            let count = statuses.iter().filter(|&&s| s == status).count();
            let percentage = if total == 0 {
                0.0
            } else {
                ((count as f64 / total as f64) * 1000.0).round() / 10.0
            };
            StatusShare {
                status,
                count,
                percentage,
            }
        })
        .collect()
}
