// ABOUTME: Coaching intelligence: scoring, assessment, training plans and nutrition
// ABOUTME: Pure functions that reconcile model replies into validated, budget-accurate results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! # Intelligence Module
//!
//! The coaching core. Nothing here performs I/O or returns an error: every
//! operation has a deterministic fallback, and randomness is limited to the
//! remainder-day draw in training schedules, supplied by the caller.
//!
//! - `scoring_engine`: field measurements to 0-100 subscores
//! - `assessment`: objective, subjective and combined reports
//! - `training_plan`: plan reconciliation and the default generator
//! - `nutrition_calculator`: calories, macros and advice reconciliation
//! - `placeholder` / `model_reply`: shared model-reply screening

/// Player assessment aggregation
pub mod assessment;
/// Tagged parsing of raw model replies
pub mod model_reply;
/// Youth nutrition formulas and advice reconciliation
pub mod nutrition_calculator;
/// Template placeholder detection
pub mod placeholder;
/// Rule-based subscore computation
pub mod scoring_engine;
/// Weekly training plans
pub mod training_plan;

pub use assessment::{
    combine_assessments, overall_assessment, AssessmentAggregator, AssessmentMode,
    BaselineQualitativeAnalyzer, FixedPositionFit, PositionFit, PositionFitEstimator,
    QualitativeAnalyzer,
};
pub use model_reply::{parse_model_reply, ParseOutcome};
pub use nutrition_calculator::{
    calculate_bmr, calculate_daily_calories, calculate_macronutrients, default_nutrition_advice,
    duration_multiplier, intensity_multiplier, macro_ratios, passes_plausibility_gate,
    reconcile_nutrition_advice,
};
pub use placeholder::{is_nutrition_placeholder, is_placeholder};
pub use scoring_engine::{
    attack_score, ball_control_score, defense_score, endurance_score, passing_score,
    performance_overall, physical_overall, score_objective, shooting_score, speed_score,
    strength_score, teamwork_score, technical_overall,
};
pub use training_plan::{
    distribute_minutes, drills_for_goal, drills_for_position, extract_minutes,
    generate_default_plan, reconcile_training_plan, split_tokens, training_types,
    validate_schedule_time, MinuteDistribution, ScheduleValidation,
};
