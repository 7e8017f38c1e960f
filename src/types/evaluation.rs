use crate::error::{EvalError, Result};
use crate::scoring::policy::RatingPolicy;
use crate::types::scoring::Criteria;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const ID_LEN: usize = 12;

/// One supplier assessment. The overall score is never stored here; it is
/// derived from `criteria` whenever it is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: String,
    pub supplier: String,
    pub date: NaiveDate,
    pub criteria: Criteria,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluator: Option<String>,
}

/// Raw form input for a new evaluation, before trimming and rating checks.
#[derive(Debug, Clone)]
pub struct EvaluationDraft {
    pub supplier: String,
    pub date: Option<String>,
    pub criteria: Criteria,
    pub comment: Option<String>,
    pub evaluator: Option<String>,
}

impl Evaluation {
    pub fn from_draft(
        draft: EvaluationDraft,
        policy: RatingPolicy,
        created_at: DateTime<Utc>,
        position: usize,
    ) -> Result<Self> {
        let supplier = draft.supplier.trim().to_string();
        if supplier.is_empty() {
            return Err(EvalError::EmptySupplier);
        }
        let date = match draft.date.as_deref().map(str::trim) {
            Some(raw) => parse_date(raw)?,
            None => created_at.date_naive(),
        };
        let criteria = policy.apply(draft.criteria)?;
        let comment = non_empty(draft.comment);
        let evaluator = non_empty(draft.evaluator);
        let id = record_id(&supplier, date, &criteria, created_at, position);

        Ok(Self {
            id,
            supplier,
            date,
            criteria,
            comment,
            evaluator,
        })
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| EvalError::InvalidDate(raw.to_string()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn record_id(
    supplier: &str,
    date: NaiveDate,
    criteria: &Criteria,
    created_at: DateTime<Utc>,
    position: usize,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(supplier.as_bytes());
    hasher.update(date.to_string().as_bytes());
    for value in criteria.values() {
        hasher.update(value.to_le_bytes());
    }
    hasher.update(created_at.to_rfc3339().as_bytes());
    hasher.update(position.to_le_bytes());
    let digest = hasher.finalize();
    let digest = format!("{digest:x}");
    digest[..ID_LEN].to_string()
}
