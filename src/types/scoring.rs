use serde::{Deserialize, Serialize};

pub type Score = f64;

pub const CRITERIA_NAMES: [&str; 4] = ["quality", "delivery", "price", "service"];

/// The four rated dimensions of one supplier assessment, each nominally 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub quality: f64,
    pub delivery: f64,
    pub price: f64,
    pub service: f64,
}

impl Criteria {
    pub fn new(quality: f64, delivery: f64, price: f64, service: f64) -> Self {
        Self {
            quality,
            delivery,
            price,
            service,
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn values(&self) -> [f64; 4] {
        [self.quality, self.delivery, self.price, self.service]
    }

    /// Applies `f` to every rating in `CRITERIA_NAMES` order, stopping at the first error.
    pub fn try_map<E>(
        &self,
        mut f: impl FnMut(&'static str, f64) -> Result<f64, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            quality: f(CRITERIA_NAMES[0], self.quality)?,
            delivery: f(CRITERIA_NAMES[1], self.delivery)?,
            price: f(CRITERIA_NAMES[2], self.price)?,
            service: f(CRITERIA_NAMES[3], self.service)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    pub quality: f64,
    pub delivery: f64,
    pub price: f64,
    pub service: f64,
}

pub const DEFAULT_WEIGHTS: Weights = Weights {
    quality: 0.40,
    delivery: 0.30,
    price: 0.20,
    service: 0.10,
};

impl Weights {
    pub fn values(&self) -> [f64; 4] {
        [self.quality, self.delivery, self.price, self.service]
    }

    pub fn sum(&self) -> f64 {
        self.values().iter().sum()
    }
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
