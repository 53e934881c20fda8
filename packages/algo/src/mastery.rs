//! Topic Mastery
//!
//! Accuracy-based mastery with damping: fewer than `min_confident_attempts`
//! answers is not enough evidence for full mastery, so the raw accuracy is
//! scaled by `low_attempt_damping`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{AnswerRecord, TopicMastery};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MasteryConfig {
    pub min_confident_attempts: u32,
    pub low_attempt_damping: f64,
}

impl Default for MasteryConfig {
    fn default() -> Self {
        Self {
            min_confident_attempts: 3,
            low_attempt_damping: 0.7,
        }
    }
}

pub fn damped_mastery(correct: u32, attempts: u32, config: &MasteryConfig) -> f64 {
    if attempts == 0 {
        return 0.0;
    }
    let raw = f64::from(correct) / f64::from(attempts);
    if attempts < config.min_confident_attempts {
        raw * config.low_attempt_damping
    } else {
        raw
    }
}

/// Per-topic mastery, topics in first-appearance order
pub fn compute_mastery(answers: &[AnswerRecord], config: &MasteryConfig) -> Vec<TopicMastery> {
    let mut out: Vec<TopicMastery> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for answer in answers {
        let key = (answer.subject.as_str(), answer.topic.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            out.push(TopicMastery {
                subject: answer.subject.clone(),
                topic_name: answer.topic.clone(),
                attempts: 0,
                correct: 0,
                raw_mastery: 0.0,
                mastery_score: 0.0,
            });
            out.len() - 1
        });

        let m = &mut out[slot];
        m.attempts += 1;
        if answer.is_correct {
            m.correct += 1;
        }
    }

    for m in &mut out {
        m.raw_mastery = f64::from(m.correct) / f64::from(m.attempts);
        m.mastery_score = damped_mastery(m.correct, m.attempts, config);
    }

    out
}
