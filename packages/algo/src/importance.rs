//! Topic Importance
//!
//! Derives a per-topic exam importance in [0, 1] from past exam questions:
//!
//! - Frequency: how often the topic appears
//! - Weightage: total marks on the topic
//! - Recency: `1 / (current_year - avg_year + 1)`, recent years weigh more
//!
//! Each signal is min-max normalized across topics, then blended with
//! [`ImportanceWeights`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{ExamQuestion, TopicImportance};

/// Recency assigned when the average exam year lies in the future
const FUTURE_YEAR_RECENCY: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImportanceWeights {
    pub frequency: f64,
    pub marks: f64,
    pub recency: f64,
}

impl Default for ImportanceWeights {
    fn default() -> Self {
        Self {
            frequency: 0.35,
            marks: 0.45,
            recency: 0.20,
        }
    }
}

struct TopicStats {
    subject: String,
    topic: String,
    frequency: u32,
    total_marks: u64,
    year_sum: i64,
}

/// Min-max normalization. When every value is equal, positive values map to
/// 1.0 and the rest to 0.0.
pub fn robust_normalize(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return values
            .iter()
            .map(|&x| if x > 0.0 { 1.0 } else { 0.0 })
            .collect();
    }

    let span = max - min;
    values.iter().map(|&x| (x - min) / span).collect()
}

pub fn recency_score(avg_year: f64, current_year: i32) -> f64 {
    let gap = current_year as f64 - avg_year;
    if gap >= 0.0 {
        1.0 / (gap + 1.0)
    } else {
        FUTURE_YEAR_RECENCY
    }
}

/// Per-topic importance, topics in first-appearance order
pub fn compute_importance(
    questions: &[ExamQuestion],
    current_year: i32,
    weights: &ImportanceWeights,
) -> Vec<TopicImportance> {
    let mut stats: Vec<TopicStats> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for q in questions {
        let key = (q.subject.as_str(), q.topic.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            stats.push(TopicStats {
                subject: q.subject.clone(),
                topic: q.topic.clone(),
                frequency: 0,
                total_marks: 0,
                year_sum: 0,
            });
            stats.len() - 1
        });

        let s = &mut stats[slot];
        s.frequency += 1;
        s.total_marks += u64::from(q.marks);
        s.year_sum += i64::from(q.year);
    }

    if stats.is_empty() {
        return Vec::new();
    }

    let avg_years: Vec<f64> = stats
        .iter()
        .map(|s| s.year_sum as f64 / f64::from(s.frequency))
        .collect();

    let norm_freq = robust_normalize(
        &stats.iter().map(|s| f64::from(s.frequency)).collect::<Vec<_>>(),
    );
    let norm_marks = robust_normalize(
        &stats.iter().map(|s| s.total_marks as f64).collect::<Vec<_>>(),
    );
    let norm_recency = robust_normalize(
        &avg_years
            .iter()
            .map(|&y| recency_score(y, current_year))
            .collect::<Vec<_>>(),
    );

    stats
        .into_iter()
        .enumerate()
        .map(|(i, s)| TopicImportance {
            subject: s.subject,
            topic_name: s.topic,
            frequency: s.frequency,
            total_marks: s.total_marks,
            avg_year: avg_years[i],
            importance_score: norm_freq[i] * weights.frequency
                + norm_marks[i] * weights.marks
                + norm_recency[i] * weights.recency,
        })
        .collect()
}
