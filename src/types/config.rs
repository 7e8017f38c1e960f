use crate::error::EvalError;
use crate::scoring::policy::RatingPolicy;
use crate::types::scoring::{Weights, CRITERIA_NAMES, DEFAULT_WEIGHTS};
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_STORE_FILE: &str = "evaluations.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupevalConfig {
    pub weights: Option<HashMap<String, f64>>,
    pub ratings: Option<RatingsConfig>,
    pub store: Option<StoreConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatingsConfig {
    #[serde(default)]
    pub policy: RatingPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_path() -> String {
    DEFAULT_STORE_FILE.to_string()
}

impl SupevalConfig {
    pub fn weights(&self) -> Weights {
        match &self.weights {
            Some(weights) => Weights {
                quality: *weights.get("quality").unwrap_or(&DEFAULT_WEIGHTS.quality),
                delivery: *weights.get("delivery").unwrap_or(&DEFAULT_WEIGHTS.delivery),
                price: *weights.get("price").unwrap_or(&DEFAULT_WEIGHTS.price),
                service: *weights.get("service").unwrap_or(&DEFAULT_WEIGHTS.service),
            },
            None => DEFAULT_WEIGHTS,
        }
    }

    pub fn rating_policy(&self) -> RatingPolicy {
        self.ratings
            .as_ref()
            .map(|ratings| ratings.policy)
            .unwrap_or_default()
    }

    pub fn store_path(&self) -> &str {
        self.store
            .as_ref()
            .map(|store| store.path.as_str())
            .unwrap_or(DEFAULT_STORE_FILE)
    }

    pub fn validate(&self) -> Result<(), EvalError> {
        if let Some(weights) = &self.weights {
            let unknown = weights
                .keys()
                .filter(|key| !CRITERIA_NAMES.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(EvalError::ConfigParse(format!(
                    "weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights();
        if weights
            .values()
            .iter()
            .any(|weight| !(0.0..=1.0).contains(weight))
        {
            return Err(EvalError::ConfigParse(
                "weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum = weights.sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(EvalError::ConfigParse(format!(
                "weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        if self.store_path().trim().is_empty() {
            return Err(EvalError::ConfigParse(
                "store.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
