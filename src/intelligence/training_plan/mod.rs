// ABOUTME: Weekly training plan reconciliation and deterministic plan generation
// ABOUTME: Schedule arithmetic, drill lookup tables, default generator and model reply reconciler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! # Training Plans
//!
//! Every plan leaving this module has seven populated days whose embedded
//! minutes sum to within the configured tolerance of the weekly target, and
//! carries no template placeholder text.

/// Deterministic fallback plan
pub mod default_plan;
/// Goal and position drill tables
pub mod drills;
/// Model reply reconciliation
pub mod reconciler;
/// Minute distribution and time validation
pub mod schedule;

pub use default_plan::generate_default_plan;
pub use drills::{drills_for_goal, drills_for_position, position_focus_areas, split_tokens, training_types};
pub use reconciler::reconcile_training_plan;
pub use schedule::{
    distribute_minutes, extract_minutes, validate_schedule_time, MinuteDistribution,
    ScheduleValidation,
};
