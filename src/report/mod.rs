pub mod json;
pub mod md;

use crate::error::EvalError;
use crate::types::report::{ScoreCard, ScoredEvaluation, SummaryReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Anything the CLI prints.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Preview(&'a ScoreCard),
    Detail(&'a ScoredEvaluation),
    List {
        shown: &'a [ScoredEvaluation],
        total: usize,
    },
    Summary(&'a SummaryReport),
}

pub fn render(view: View<'_>, format: OutputFormat) -> Result<String, EvalError> {
    match format {
        OutputFormat::Json => json::to_json(view).map_err(EvalError::Json),
        OutputFormat::Md => Ok(md::to_markdown(view)),
    }
}
