// ABOUTME: Core data models for player profiles, training plans, nutrition advice and assessments
// ABOUTME: Re-exports inbound records, profiles and the JSON-serializable result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! # Data Models
//!
//! Every model is constructed fresh per request and never mutated after it is
//! returned.
//!
//! ## Inbound
//!
//! - `FieldRecord`: lenient view over a request body
//! - `PlayerProfile`: drives training plans
//! - `NutritionProfile`: drives nutrition advice
//!
//! ## Outbound
//!
//! - `TrainingPlan`: seven-day schedule meeting the weekly minute budget
//! - `NutritionAdvice`: calories, macronutrients and meal guidance
//! - `AssessmentReport`: subscores plus narrative summary

/// Player assessment report types
pub mod assessment;
/// Nutrition advice types
pub mod nutrition;
/// Training plan types
pub mod plan;
/// Player and nutrition profiles
pub mod profile;
/// Lenient inbound field records
pub mod record;

pub use assessment::{
    AssessmentReport, CategoryScores, OverallAssessment, PerformanceScores, PhysicalScores,
    Potential, TechnicalScores,
};
pub use nutrition::{MacroGrams, Macronutrients, NutritionAdvice};
pub use plan::{TrainingPlan, WeekDay, WeeklySchedule};
pub use profile::{
    split_tokens, Gender, NutritionProfile, PlayerProfile, ResolvedBodyMetrics, TrainingIntensity,
};
pub use record::{parse_leading_number, parse_lenient_number, FieldRecord};
