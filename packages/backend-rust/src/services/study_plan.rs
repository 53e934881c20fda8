//! Study plan assembly and text export.
//!
//! Consumes ranked entries from the engine as-is: grouping partitions by the
//! `recommendation` field and never reorders or re-scores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use study_priority_algo::{
    assemble_records, compute_importance, compute_mastery, AnswerRecord, ExamQuestion,
    ImportanceWeights, MasteryConfig, PriorityEngine, PriorityEntry, PriorityResult,
    Recommendation,
};

use crate::services::category_display::category_display;

const HEAVY_DIVIDER: &str = "═══════════════════════════════════════";
const LIGHT_DIVIDER: &str = "───────────────────────────────────────";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlan {
    pub student_id: i64,
    pub generated_at: DateTime<Utc>,
    pub priorities: Vec<PriorityEntry>,
}

impl StudyPlan {
    pub fn new(student_id: i64, priorities: Vec<PriorityEntry>) -> Self {
        Self {
            student_id,
            generated_at: Utc::now(),
            priorities,
        }
    }
}

/// Exam history and mock-test answers for one student
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentEvidence {
    pub student_id: i64,
    #[serde(default)]
    pub questions: Vec<ExamQuestion>,
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
}

pub fn build_study_plan(
    engine: &PriorityEngine,
    evidence: &StudentEvidence,
    current_year: i32,
) -> PriorityResult<StudyPlan> {
    let importance = compute_importance(
        &evidence.questions,
        current_year,
        &ImportanceWeights::default(),
    );
    let mastery = compute_mastery(&evidence.answers, &MasteryConfig::default());
    let records = assemble_records(&importance, &mastery);
    let priorities = engine.compute(&records)?;

    tracing::debug!(
        student_id = evidence.student_id,
        questions = evidence.questions.len(),
        answers = evidence.answers.len(),
        topics = priorities.len(),
        "study plan computed"
    );

    Ok(StudyPlan::new(evidence.student_id, priorities))
}

/// Entries partitioned by category, each group in rank order
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryGroups {
    pub study_now: Vec<PriorityEntry>,
    pub revise_later: Vec<PriorityEntry>,
    pub mastered: Vec<PriorityEntry>,
    pub deprioritize: Vec<PriorityEntry>,
}

impl CategoryGroups {
    pub fn get(&self, recommendation: Recommendation) -> &[PriorityEntry] {
        match recommendation {
            Recommendation::StudyNow => &self.study_now,
            Recommendation::ReviseLater => &self.revise_later,
            Recommendation::Mastered => &self.mastered,
            Recommendation::Deprioritize => &self.deprioritize,
        }
    }

    pub fn len(&self) -> usize {
        self.study_now.len() + self.revise_later.len() + self.mastered.len() + self.deprioritize.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn group_by_recommendation(entries: &[PriorityEntry]) -> CategoryGroups {
    let mut groups = CategoryGroups::default();
    for entry in entries {
        let bucket = match entry.recommendation {
            Recommendation::StudyNow => &mut groups.study_now,
            Recommendation::ReviseLater => &mut groups.revise_later,
            Recommendation::Mastered => &mut groups.mastered,
            Recommendation::Deprioritize => &mut groups.deprioritize,
        };
        bucket.push(entry.clone());
    }
    groups
}

/// Score in [0, 1] as a percentage with one decimal place
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

pub fn export_file_name(student_id: i64) -> String {
    format!("study-plan-student-{student_id}.txt")
}

fn entry_line(entry: &PriorityEntry) -> String {
    let head = format!("  {}. {} ({})", entry.rank, entry.topic_name, entry.subject);
    match entry.recommendation {
        Recommendation::StudyNow => format!(
            "{head}\n     Priority: {} | Exam Importance: {} | Your Mastery: {}",
            format_percent(entry.priority_score),
            format_percent(entry.importance_score),
            format_percent(entry.mastery_score),
        ),
        Recommendation::ReviseLater => {
            format!("{head} - Priority: {}", format_percent(entry.priority_score))
        }
        Recommendation::Mastered => {
            format!("{head} - Mastery: {}", format_percent(entry.mastery_score))
        }
        Recommendation::Deprioritize => head,
    }
}

pub fn render_text(plan: &StudyPlan) -> String {
    let mut lines = vec![
        "📚 PERSONALIZED STUDY PLAN".to_string(),
        format!("Student ID: {}", plan.student_id),
        format!(
            "Generated: {}",
            plan.generated_at.format("%Y-%m-%d %H:%M UTC")
        ),
        format!("Total Topics Analyzed: {}", plan.priorities.len()),
        HEAVY_DIVIDER.to_string(),
    ];

    let groups = group_by_recommendation(&plan.priorities);
    let mut first_section = true;
    for rec in Recommendation::ALL {
        let entries = groups.get(rec);
        if entries.is_empty() {
            continue;
        }
        if !first_section {
            lines.push(LIGHT_DIVIDER.to_string());
        }
        first_section = false;

        let display = category_display(rec);
        lines.push(format!(
            "{} {} ({} topics)",
            display.icon,
            display.title,
            entries.len()
        ));
        lines.push(display.description.to_string());
        lines.extend(entries.iter().map(entry_line));
    }

    if plan.priorities.is_empty() {
        lines.push("No topics to prioritize yet.".to_string());
    }

    lines.extend([
        HEAVY_DIVIDER.to_string(),
        "📊 RECOMMENDED ACTION PLAN".to_string(),
        "  1. This Week: Complete all \"Study Now\" topics with practice problems".to_string(),
        "  2. Next Week: Begin \"Revise Later\" topics and re-test \"Study Now\" areas".to_string(),
        "  3. Ongoing: Light review of \"Mastered\" topics every 2 weeks".to_string(),
        "  4. Mock Tests: Take practice tests monthly to refresh this plan".to_string(),
        LIGHT_DIVIDER.to_string(),
        "Formula: Priority = Exam Importance × (1 - Your Mastery)".to_string(),
        "Generated by Study Priority Engine".to_string(),
    ]);

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
