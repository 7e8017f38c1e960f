use super::View;

pub fn to_json(view: View<'_>) -> Result<String, serde_json::Error> {
    match view {
        View::Preview(card) => serde_json::to_string_pretty(card),
        View::Detail(evaluation) => serde_json::to_string_pretty(evaluation),
        View::List { shown, .. } => serde_json::to_string_pretty(shown),
        View::Summary(summary) => serde_json::to_string_pretty(summary),
    }
}
