pub mod category_display;
pub mod study_plan;
