use crate::error::{EvalError, Result};
use crate::types::scoring::Criteria;
use serde::Deserialize;
use tracing::{debug, warn};

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;
/// Largest magnitude `Accept` lets through; keeps the weighted sum and its rounding finite.
pub const MAX_ACCEPTED_MAGNITUDE: f64 = 1.0e6;

/// What to do with a rating outside `[MIN_RATING, MAX_RATING]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingPolicy {
    Accept,
    Clamp,
    #[default]
    Reject,
}

impl RatingPolicy {
    /// Non-finite ratings are rejected under every policy.
    pub fn apply(self, criteria: Criteria) -> Result<Criteria> {
        criteria.try_map(|criterion, value| {
            if !value.is_finite() {
                return Err(EvalError::NonFiniteRating { criterion });
            }
            if (MIN_RATING..=MAX_RATING).contains(&value) {
                return Ok(value);
            }
            match self {
                RatingPolicy::Accept => {
                    if value.abs() > MAX_ACCEPTED_MAGNITUDE {
                        return Err(EvalError::UnscorableRating { criterion, value });
                    }
                    debug!(criterion, value, "accepting out-of-range rating");
                    Ok(value)
                }
                RatingPolicy::Clamp => {
                    let clamped = value.clamp(MIN_RATING, MAX_RATING);
                    warn!(criterion, value, clamped, "clamping out-of-range rating");
                    Ok(clamped)
                }
                RatingPolicy::Reject => Err(EvalError::RatingOutOfRange { criterion, value }),
            }
        })
    }
}
