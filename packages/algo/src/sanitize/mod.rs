//! Data Sanitization
//!
//! Score validation utilities.
//!
//! Functions:
//! - Unit-interval clamping
//! - Signed zero folding
//! - Topic record sanitization

use crate::error::{PriorityError, PriorityResult, ScoreField};
use crate::policy::ScoreValidation;
use crate::types::{TopicRecord, MAX_SCORE, MIN_SCORE};

pub fn is_unit_interval(value: f64) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&value)
}

/// 限制到 [0, 1]；NaN 由调用方提前拒绝
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// -0.0 折叠为 +0.0，保证排序时与 0.0 视为相等
pub fn fold_signed_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn sanitize_score(
    topic: &str,
    field: ScoreField,
    value: f64,
    mode: ScoreValidation,
) -> PriorityResult<f64> {
    if !value.is_finite() {
        return Err(PriorityError::malformed(
            topic,
            field.as_str(),
            format!("is not a finite number ({value})"),
        ));
    }

    if is_unit_interval(value) {
        return Ok(fold_signed_zero(value));
    }

    match mode {
        ScoreValidation::Clamp => Ok(fold_signed_zero(clamp_unit(value))),
        ScoreValidation::Strict => Err(PriorityError::InvalidScore {
            topic: topic.to_string(),
            field,
            value,
        }),
    }
}

/// 校验并清理单条记录，返回新记录
pub fn sanitize_record(record: &TopicRecord, mode: ScoreValidation) -> PriorityResult<TopicRecord> {
    let subject = record.subject.trim();
    let topic_name = record.topic_name.trim();

    if topic_name.is_empty() {
        let topic = if subject.is_empty() { "<unnamed>" } else { subject };
        return Err(PriorityError::malformed(topic, "topic_name", "is missing"));
    }
    if subject.is_empty() {
        return Err(PriorityError::malformed(topic_name, "subject", "is missing"));
    }

    let importance_score = sanitize_score(
        &record.topic_name,
        ScoreField::Importance,
        record.importance_score,
        mode,
    )?;
    let mastery_score = sanitize_score(
        &record.topic_name,
        ScoreField::Mastery,
        record.mastery_score,
        mode,
    )?;

    Ok(TopicRecord {
        subject: record.subject.clone(),
        topic_name: record.topic_name.clone(),
        importance_score,
        mastery_score,
    })
}
