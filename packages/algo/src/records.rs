//! Record Source Adapter
//!
//! Turns loosely typed JSON into [`TopicRecord`]s and joins derived
//! importance / mastery into the engine's input. Missing or non-numeric
//! fields are reported, never defaulted.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::{PriorityError, PriorityResult};
use crate::types::{TopicImportance, TopicMastery, TopicRecord};

/// Parse a JSON array of records, or an object holding one under
/// `records` / `priorities`
pub fn parse_records(value: &Value) -> PriorityResult<Vec<TopicRecord>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(obj) => match obj.get("records").or_else(|| obj.get("priorities")) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(PriorityError::malformed(
                    "<document>",
                    "records",
                    "is not an array",
                ))
            }
            None => {
                return Err(PriorityError::malformed(
                    "<document>",
                    "records",
                    "is missing",
                ))
            }
        },
        _ => {
            return Err(PriorityError::malformed(
                "<document>",
                "records",
                "document must be an array or an object",
            ))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_record(i, item))
        .collect()
}

fn parse_record(index: usize, item: &Value) -> PriorityResult<TopicRecord> {
    let position = format!("#{index}");
    let Some(obj) = item.as_object() else {
        return Err(PriorityError::malformed(position, "record", "is not an object"));
    };

    let topic_name = text_field(obj, "topic_name", &position)?;
    let subject = text_field(obj, "subject", &topic_name)?;
    let importance_score = score_field(obj, "importance_score", &topic_name)?;
    let mastery_score = score_field(obj, "mastery_score", &topic_name)?;

    Ok(TopicRecord {
        subject,
        topic_name,
        importance_score,
        mastery_score,
    })
}

fn text_field(obj: &Map<String, Value>, field: &str, topic: &str) -> PriorityResult<String> {
    match obj.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::String(_)) | None | Some(Value::Null) => {
            Err(PriorityError::malformed(topic, field, "is missing"))
        }
        Some(_) => Err(PriorityError::malformed(topic, field, "is not a string")),
    }
}

fn score_field(obj: &Map<String, Value>, field: &str, topic: &str) -> PriorityResult<f64> {
    match obj.get(field) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| PriorityError::malformed(topic, field, "is not representable as f64")),
        None | Some(Value::Null) => Err(PriorityError::malformed(topic, field, "is missing")),
        Some(_) => Err(PriorityError::malformed(topic, field, "is not numeric")),
    }
}

/// One record per importance entry; topics never answered get mastery 0.0
pub fn assemble_records(
    importance: &[TopicImportance],
    mastery: &[TopicMastery],
) -> Vec<TopicRecord> {
    let by_topic: HashMap<(&str, &str), f64> = mastery
        .iter()
        .map(|m| ((m.subject.as_str(), m.topic_name.as_str()), m.mastery_score))
        .collect();

    importance
        .iter()
        .map(|t| TopicRecord {
            subject: t.subject.clone(),
            topic_name: t.topic_name.clone(),
            importance_score: t.importance_score,
            mastery_score: by_topic
                .get(&(t.subject.as_str(), t.topic_name.as_str()))
                .copied()
                .unwrap_or(0.0),
        })
        .collect()
}
