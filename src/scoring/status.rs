use crate::types::scoring::Score;
use serde::Serialize;
use std::fmt;

/// Ordinal performance label, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Excellent,
    VeryGood,
    Good,
    Deficient,
    Critical,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Excellent,
        Status::VeryGood,
        Status::Good,
        Status::Deficient,
        Status::Critical,
    ];

    /// Thresholds are checked top-down with `>=`, so every boundary belongs to the higher label.
    pub fn classify(score: Score) -> Self {
        if score >= 4.5 {
            Status::Excellent
        } else if score >= 4.0 {
            Status::VeryGood
        } else if score >= 3.0 {
            Status::Good
        } else if score >= 2.0 {
            Status::Deficient
        } else {
            Status::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Excellent => "Excellent",
            Status::VeryGood => "Very Good",
            Status::Good => "Good",
            Status::Deficient => "Deficient",
            Status::Critical => "Critical",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
