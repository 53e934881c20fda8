//! Priority Engine
//!
//! Scores, categorizes and ranks a snapshot of topic records.
//!
//! Per record:
//! 1. `priority = importance × (1 − mastery)` (plain f64, no rounding)
//! 2. category from the ordered [`CategoryPolicy`] rules
//!
//! Then the whole snapshot is stable-sorted by priority descending (ties keep
//! input order) and ranked from 1. Any invalid record fails the whole call.

use rayon::prelude::*;

use crate::error::PriorityResult;
use crate::policy::{CategoryPolicy, EngineConfig, ScoreValidation};
use crate::sanitize::sanitize_record;
use crate::types::{PriorityEntry, TopicRecord};

/// importance × (1 − mastery)
#[inline]
pub fn priority_score(importance: f64, mastery: f64) -> f64 {
    importance * (1.0 - mastery)
}

/// Stateless priority engine; cheap to share across threads
#[derive(Debug, Clone, Default)]
pub struct PriorityEngine {
    config: EngineConfig,
}

impl PriorityEngine {
    pub fn new(config: EngineConfig) -> PriorityResult<Self> {
        config.policy.validate()?;
        Ok(Self { config })
    }

    pub fn with_policy(policy: CategoryPolicy) -> PriorityResult<Self> {
        Self::new(EngineConfig {
            policy,
            ..EngineConfig::default()
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn policy(&self) -> &CategoryPolicy {
        &self.config.policy
    }

    pub fn validation(&self) -> ScoreValidation {
        self.config.validation
    }

    /// Compute the ranked, categorized entries for one snapshot
    pub fn compute(&self, records: &[TopicRecord]) -> PriorityResult<Vec<PriorityEntry>> {
        let mut entries = records
            .iter()
            .map(|record| self.score_record(record))
            .collect::<PriorityResult<Vec<_>>>()?;

        // sort_by is stable: equal priorities keep input order
        entries.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = i + 1;
        }

        Ok(entries)
    }

    /// Compute many independent snapshots in parallel, preserving order
    pub fn compute_batch(
        &self,
        snapshots: &[Vec<TopicRecord>],
    ) -> Vec<PriorityResult<Vec<PriorityEntry>>> {
        snapshots
            .par_iter()
            .map(|records| self.compute(records))
            .collect()
    }

    fn score_record(&self, record: &TopicRecord) -> PriorityResult<PriorityEntry> {
        let clean = sanitize_record(record, self.config.validation)?;
        let priority = priority_score(clean.importance_score, clean.mastery_score);
        let recommendation = self
            .config
            .policy
            .classify(clean.importance_score, clean.mastery_score);

        Ok(PriorityEntry {
            subject: clean.subject,
            topic_name: clean.topic_name,
            importance_score: clean.importance_score,
            mastery_score: clean.mastery_score,
            priority_score: priority,
            recommendation,
            rank: 0,
        })
    }
}
