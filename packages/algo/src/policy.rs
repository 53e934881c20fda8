//! Category Policy
//!
//! Ordered decision list mapping (importance, mastery) to a recommendation.
//! The first matching rule wins:
//!
//! 1. `Mastered`     - mastery >= mastered_threshold
//! 2. `Study Now`    - importance >= importance_threshold && mastery < weak_mastery_threshold
//! 3. `Revise Later` - importance >= importance_threshold && mastery >= weak_mastery_threshold
//! 4. `Deprioritize` - everything else
//!
//! Boundary values fall into the higher-priority bucket.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PriorityError, PriorityResult};
use crate::types::{
    Recommendation, DEFAULT_IMPORTANCE_THRESHOLD, DEFAULT_MASTERED_THRESHOLD,
    DEFAULT_WEAK_MASTERY_THRESHOLD,
};

/// Category thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryPolicy {
    pub mastered_threshold: f64,
    pub importance_threshold: f64,
    pub weak_mastery_threshold: f64,
}

impl Default for CategoryPolicy {
    fn default() -> Self {
        Self {
            mastered_threshold: DEFAULT_MASTERED_THRESHOLD,
            importance_threshold: DEFAULT_IMPORTANCE_THRESHOLD,
            weak_mastery_threshold: DEFAULT_WEAK_MASTERY_THRESHOLD,
        }
    }
}

impl CategoryPolicy {
    /// Every threshold must be a finite value in [0, 1]
    pub fn validate(&self) -> PriorityResult<()> {
        let fields = [
            ("mastered_threshold", self.mastered_threshold),
            ("importance_threshold", self.importance_threshold),
            ("weak_mastery_threshold", self.weak_mastery_threshold),
        ];
        for (name, value) in fields {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PriorityError::InvalidPolicy(format!(
                    "{name} = {value} must be within [0, 1]"
                )));
            }
        }
        Ok(())
    }

    pub fn classify(&self, importance: f64, mastery: f64) -> Recommendation {
        if mastery >= self.mastered_threshold {
            Recommendation::Mastered
        } else if importance >= self.importance_threshold {
            if mastery < self.weak_mastery_threshold {
                Recommendation::StudyNow
            } else {
                Recommendation::ReviseLater
            }
        } else {
            Recommendation::Deprioritize
        }
    }
}

/// Handling of scores outside [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreValidation {
    /// Clamp into [0, 1]
    #[default]
    Clamp,
    /// Reject with `InvalidScore`
    Strict,
}

impl FromStr for ScoreValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clamp" => Ok(ScoreValidation::Clamp),
            "strict" => Ok(ScoreValidation::Strict),
            _ => Err(format!("unknown score validation mode: {s}")),
        }
    }
}

impl ScoreValidation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreValidation::Clamp => "clamp",
            ScoreValidation::Strict => "strict",
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub policy: CategoryPolicy,
    pub validation: ScoreValidation,
}
