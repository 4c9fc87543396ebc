// ABOUTME: Configuration management module for coaching thresholds and formula constants
// ABOUTME: Exposes the intelligence configuration tree with environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors
//! Configuration module
//!
//! - **Intelligence**: scoring thresholds, weekly schedule budget rules and
//!   nutrition formula constants used by the coaching core

/// Intelligence module configuration
pub mod intelligence;

pub use intelligence::{
    CoachConfig, ConfigError, NutritionConfig, PlanningConfig, ScoringConfig,
};
