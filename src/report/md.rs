use super::View;
use crate::scoring::policy::MAX_RATING;
use crate::types::report::{ScoreCard, ScoredEvaluation, SummaryReport};
use crate::types::scoring::Criteria;
use chrono::NaiveDate;

pub fn to_markdown(view: View<'_>) -> String {
    match view {
        View::Preview(card) => preview(card),
        View::Detail(evaluation) => detail(evaluation),
        View::List { shown, total } => list(shown, total),
        View::Summary(summary) => summary_panel(summary),
    }
}

/// Five slots: floor(score) full stars, one half star when the fraction is >= 0.5.
pub fn stars(score: f64) -> String {
    let slots = MAX_RATING as usize;
    let score = score.clamp(0.0, MAX_RATING);
    let full = score.floor() as usize;
    let half = usize::from(full < slots && score.fract() >= 0.5);
    let empty = slots - full - half;
    format!("{}{}{}", "★".repeat(full), "½".repeat(half), "☆".repeat(empty))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn criteria_lines(output: &mut String, criteria: &Criteria) {
    output.push_str(&format!(
        "- quality: {:.1}\n- delivery: {:.1}\n- price: {:.1}\n- service: {:.1}\n",
        criteria.quality, criteria.delivery, criteria.price, criteria.service
    ));
}

fn preview(card: &ScoreCard) -> String {
    let mut output = String::new();
    output.push_str("# Score Preview\n\n");
    output.push_str(&format!(
        "Overall score: {:.2} / 5 {} ({})\n\n",
        card.score,
        stars(card.score),
        card.status
    ));
    output.push_str("## Criteria\n\n");
    output.push_str(&format!(
        "- quality: {:.1} (weight {:.2})\n- delivery: {:.1} (weight {:.2})\n- price: {:.1} (weight {:.2})\n- service: {:.1} (weight {:.2})\n",
        card.criteria.quality,
        card.weights.quality,
        card.criteria.delivery,
        card.weights.delivery,
        card.criteria.price,
        card.weights.price,
        card.criteria.service,
        card.weights.service
    ));
    output
}

fn detail(scored: &ScoredEvaluation) -> String {
    let evaluation = &scored.evaluation;
    let mut output = String::new();
    output.push_str(&format!("# Evaluation {}\n\n", evaluation.id));
    output.push_str(&format!("Supplier: {}\n", evaluation.supplier));
    output.push_str(&format!("Date: {}\n", format_date(evaluation.date)));
    if let Some(evaluator) = &evaluation.evaluator {
        output.push_str(&format!("Evaluator: {evaluator}\n"));
    }
    output.push_str(&format!(
        "Overall score: {:.2} / 5 {} ({})\n\n",
        scored.score,
        stars(scored.score),
        scored.status
    ));
    if let Some(comment) = &evaluation.comment {
        output.push_str(&format!("> {comment}\n\n"));
    }
    output.push_str("## Criteria\n\n");
    criteria_lines(&mut output, &evaluation.criteria);
    output
}

fn list(shown: &[ScoredEvaluation], total: usize) -> String {
    let mut output = String::new();
    output.push_str("# Evaluations\n\n");
    if shown.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for scored in shown {
            let evaluation = &scored.evaluation;
            output.push_str(&format!(
                "- {} {} ({}): {:.2} {} [{}]",
                evaluation.id,
                evaluation.supplier,
                format_date(evaluation.date),
                scored.score,
                stars(scored.score),
                scored.status
            ));
            if let Some(evaluator) = &evaluation.evaluator {
                output.push_str(&format!(" by {evaluator}"));
            }
            output.push('\n');
        }
        output.push('\n');
    }
    output.push_str(&format!(
        "Showing {} of {} evaluations\n",
        shown.len(),
        total
    ));
    output
}

fn summary_panel(summary: &SummaryReport) -> String {
    let mut output = String::new();
    output.push_str("# Evaluation Summary\n\n");
    output.push_str(&format!("Evaluations: {}\n", summary.total));
    output.push_str(&format!(
        "General average: {:.2} / 5\n",
        summary.general_average
    ));
    match &summary.top_performer {
        Some(top) => output.push_str(&format!(
            "Top supplier: {} ({:.2}, {})\n\n",
            top.evaluation.supplier, top.score, top.status
        )),
        None => output.push_str("Top supplier: none\n\n"),
    }

    output.push_str("## Criteria Averages\n\n");
    criteria_lines(&mut output, &summary.criteria_average);
    output.push('\n');

    output.push_str("## Status Distribution\n\n");
    for share in &summary.distribution {
        output.push_str(&format!(
            "- {}: {} ({:.1}%)\n",
            share.status, share.count, share.percentage
        ));
    }
    output
}
