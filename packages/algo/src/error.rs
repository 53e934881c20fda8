//! Error types for the priority engine

/// Score field of a topic record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    Importance,
    Mastery,
}

impl ScoreField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreField::Importance => "importance_score",
            ScoreField::Mastery => "mastery_score",
        }
    }
}

impl std::fmt::Display for ScoreField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriorityError {
    /// Missing required field or non-numeric score
    #[error("malformed record '{topic}': field '{field}' {reason}")]
    MalformedRecord {
        topic: String,
        field: String,
        reason: String,
    },
    /// Score outside [0, 1] under strict validation
    #[error("invalid score for topic '{topic}': {field} = {value} is outside [0, 1]")]
    InvalidScore {
        topic: String,
        field: ScoreField,
        value: f64,
    },
    #[error("invalid category policy: {0}")]
    InvalidPolicy(String),
}

impl PriorityError {
    pub fn malformed(
        topic: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            topic: topic.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Topic identifier carried by record-level errors
    pub fn topic(&self) -> Option<&str> {
        match self {
            PriorityError::MalformedRecord { topic, .. } => Some(topic),
            PriorityError::InvalidScore { topic, .. } => Some(topic),
            PriorityError::InvalidPolicy(_) => None,
        }
    }
}

pub type PriorityResult<T> = Result<T, PriorityError>;
