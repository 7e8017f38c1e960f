use crate::error::{EvalError, Result};
use crate::scoring::policy::RatingPolicy;
use crate::scoring::scored;
use crate::types::evaluation::{Evaluation, EvaluationDraft};
use crate::types::report::ScoredEvaluation;
use crate::types::scoring::Weights;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const LOG_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct LogFile {
    version: u32,
    #[serde(default)]
    evaluations: Vec<Evaluation>,
}

#[derive(Debug, Serialize)]
struct LogFileOut {
    version: u32,
    evaluations: Vec<ScoredEvaluation>,
}

/// Evaluation history kept as one JSON file, newest record first.
#[derive(Debug)]
pub struct EvaluationLog {
    path: PathBuf,
    evaluations: Vec<Evaluation>,
}

impl EvaluationLog {
    /// A missing file is an empty log.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "evaluation log not found; starting empty");
            return Ok(Self {
                path: path.to_path_buf(),
                evaluations: Vec::new(),
            });
        }

        let content = fs::read_to_string(path)?;
        let file: LogFile = serde_json::from_str(&content)
            .map_err(|e| EvalError::CorruptLog(format!("{}: {}", path.display(), e)))?;
        if file.version != LOG_VERSION {
            return Err(EvalError::CorruptLog(format!(
                "{}: unsupported log version {}",
                path.display(),
                file.version
            )));
        }
        for evaluation in &file.evaluations {
            RatingPolicy::Accept
                .apply(evaluation.criteria)
                .map_err(|e| {
                    EvalError::CorruptLog(format!(
                        "{}: record {}: {}",
                        path.display(),
                        evaluation.id,
                        e
                    ))
                })?;
        }
        debug!(
            path = %path.display(),
            count = file.evaluations.len(),
            "loaded evaluation log"
        );
        Ok(Self {
            path: path.to_path_buf(),
            evaluations: file.evaluations,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    pub fn find(&self, id: &str) -> Result<&Evaluation> {
        self.evaluations
            .iter()
            .find(|evaluation| evaluation.id == id)
            .ok_or_else(|| EvalError::EvaluationNotFound(id.to_string()))
    }

    /// Builds a record from `draft` and places it at the front of the log.
    pub fn record(
        &mut self,
        draft: EvaluationDraft,
        policy: RatingPolicy,
        created_at: DateTime<Utc>,
    ) -> Result<&Evaluation> {
        let evaluation =
            Evaluation::from_draft(draft, policy, created_at, self.evaluations.len())?;
        info!(id = %evaluation.id, supplier = %evaluation.supplier, "recorded evaluation");
        self.evaluations.insert(0, evaluation);
        Ok(&self.evaluations[0])
    }

    /// Writes through a sibling temp file so a failed write leaves the old log intact.
    pub fn save(&self, weights: &Weights) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let out = LogFileOut {
            version: LOG_VERSION,
            evaluations: self
                .evaluations
                .iter()
                .map(|evaluation| scored(evaluation, weights))
                .collect(),
        };
        let json = serde_json::to_string_pretty(&out)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), count = self.evaluations.len(), "saved evaluation log");
        Ok(())
    }
}
