//! Common Types and Constants
//!
//! Shared data structures used across all algorithm modules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Mastery at or above which a topic is considered mastered
pub const DEFAULT_MASTERED_THRESHOLD: f64 = 0.8;

/// Importance at or above which a topic counts as high-stakes
pub const DEFAULT_IMPORTANCE_THRESHOLD: f64 = 0.6;

/// Mastery below which a high-stakes topic needs immediate study
pub const DEFAULT_WEAK_MASTERY_THRESHOLD: f64 = 0.5;

/// Lower bound of every score
pub const MIN_SCORE: f64 = 0.0;

/// Upper bound of every score
pub const MAX_SCORE: f64 = 1.0;

/// Floating-point tolerance used by score comparisons in tests and diagnostics
pub const EPSILON: f64 = 1e-9;

// ==================== Engine Input / Output ====================

/// Topic record supplied by the record source
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub subject: String,
    pub topic_name: String,
    /// Exam weight [0, 1]
    pub importance_score: f64,
    /// Current competence [0, 1]
    pub mastery_score: f64,
}

impl TopicRecord {
    pub fn new(
        subject: impl Into<String>,
        topic_name: impl Into<String>,
        importance_score: f64,
        mastery_score: f64,
    ) -> Self {
        Self {
            subject: subject.into(),
            topic_name: topic_name.into(),
            importance_score,
            mastery_score,
        }
    }
}

/// Scored, categorized and ranked topic
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriorityEntry {
    pub subject: String,
    pub topic_name: String,
    pub importance_score: f64,
    pub mastery_score: f64,
    /// importance × (1 − mastery)
    pub priority_score: f64,
    pub recommendation: Recommendation,
    /// 1-based position after sorting by priority descending
    pub rank: usize,
}

// ==================== Recommendation ====================

/// Recommendation category assigned by the category policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Study Now")]
    StudyNow,
    #[serde(rename = "Revise Later")]
    ReviseLater,
    #[serde(rename = "Mastered")]
    Mastered,
    #[serde(rename = "Deprioritize")]
    Deprioritize,
}

impl Recommendation {
    /// All categories in study-plan order
    pub const ALL: [Recommendation; 4] = [
        Recommendation::StudyNow,
        Recommendation::ReviseLater,
        Recommendation::Mastered,
        Recommendation::Deprioritize,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StudyNow => "Study Now",
            Recommendation::ReviseLater => "Revise Later",
            Recommendation::Mastered => "Mastered",
            Recommendation::Deprioritize => "Deprioritize",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Study Now" => Some(Recommendation::StudyNow),
            "Revise Later" => Some(Recommendation::ReviseLater),
            "Mastered" => Some(Recommendation::Mastered),
            "Deprioritize" => Some(Recommendation::Deprioritize),
            _ => None,
        }
    }

    pub fn to_index(&self) -> usize {
        match self {
            Recommendation::StudyNow => 0,
            Recommendation::ReviseLater => 1,
            Recommendation::Mastered => 2,
            Recommendation::Deprioritize => 3,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Recommendation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("unknown recommendation: {s}"))
    }
}

// ==================== Derivation Inputs ====================

/// Past exam question used to derive topic importance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExamQuestion {
    pub subject: String,
    pub topic: String,
    /// Exam year
    pub year: i32,
    /// Weightage
    pub marks: u32,
}

/// Mock-test answer used to derive topic mastery
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub subject: String,
    pub topic: String,
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_taken_seconds: Option<u32>,
}

// ==================== Derivation Outputs ====================

/// Per-topic importance statistics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicImportance {
    pub subject: String,
    pub topic_name: String,
    /// Number of questions on this topic
    pub frequency: u32,
    /// Sum of marks across questions
    pub total_marks: u64,
    /// Mean exam year
    pub avg_year: f64,
    pub importance_score: f64,
}

/// Per-topic mastery statistics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicMastery {
    pub subject: String,
    pub topic_name: String,
    pub attempts: u32,
    pub correct: u32,
    /// correct / attempts
    pub raw_mastery: f64,
    /// raw_mastery after low-attempt damping
    pub mastery_score: f64,
}
