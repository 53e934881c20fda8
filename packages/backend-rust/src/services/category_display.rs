//! Presentation metadata per recommendation category

use serde::Serialize;
use study_priority_algo::Recommendation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDisplay {
    pub recommendation: Recommendation,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub empty_message: &'static str,
}

// Indexed by Recommendation::to_index
static CATEGORY_DISPLAY: [CategoryDisplay; 4] = [
    CategoryDisplay {
        recommendation: Recommendation::StudyNow,
        title: "IMMEDIATE PRIORITY - Study These Now",
        icon: "🔴",
        description: "These topics have HIGH exam importance but LOW mastery. \
                      Focus here to maximize score improvement.",
        color: "red",
        empty_message: "No urgent tasks!",
    },
    CategoryDisplay {
        recommendation: Recommendation::ReviseLater,
        title: "SECONDARY PRIORITY - Revise After Core Topics",
        icon: "🟡",
        description: "Moderate priority topics. Schedule these after completing \"Study Now\" items.",
        color: "yellow",
        empty_message: "Nothing to revise.",
    },
    CategoryDisplay {
        recommendation: Recommendation::Mastered,
        title: "EXCELLENT WORK - Already Mastered",
        icon: "⭐",
        description: "Strong performance here. Light periodic review is sufficient.",
        color: "blue",
        empty_message: "Keep working!",
    },
    CategoryDisplay {
        recommendation: Recommendation::Deprioritize,
        title: "LOW PRIORITY - Deprioritize",
        icon: "🟢",
        description: "Lower exam weightage. Study only if time permits.",
        color: "green",
        empty_message: "Nothing to deprioritize.",
    },
];

pub fn category_display(recommendation: Recommendation) -> &'static CategoryDisplay {
    &CATEGORY_DISPLAY[recommendation.to_index()]
}
