// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, request builders and a seeded random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `academy_coach`

use academy_coach::config::CoachConfig;
use academy_coach::models::{FieldRecord, NutritionProfile, PlayerProfile, TrainingPlan};
use academy_coach::services::CoachingService;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Deterministic random source for remainder-day draws
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Record from a `json!` object literal
pub fn record(value: Value) -> FieldRecord {
    FieldRecord::from_value(value)
}

/// Service over default configuration
pub fn test_service() -> CoachingService {
    init_test_logging();
    CoachingService::new(&CoachConfig::default())
}

/// Player who passes and plays forward, seven hours a week
pub fn forward_player() -> PlayerProfile {
    PlayerProfile::from_record(&record(json!({
        "age": 12,
        "level": "中级",
        "goals": "传球技术",
        "specialGoals": "前锋",
        "availableTime": 7,
    })))
}

/// 12-year-old girl, 45 kg, medium intensity, five hours a week
pub fn reference_girl() -> NutritionProfile {
    NutritionProfile::from_record(&record(json!({
        "age": 12,
        "weight": 45,
        "height": 150,
        "gender": "女",
        "intensity": "中等强度",
        "duration": 5,
    })))
}

/// Sum of the first embedded minute count of every day
pub fn total_minutes(plan: &TrainingPlan) -> u32 {
    plan.weekly_schedule
        .iter()
        .map(|(_, entry)| academy_coach::intelligence::extract_minutes(entry).unwrap_or(0))
        .sum()
}

/// Assert the plan carries seven timed days within `tolerance` of `target`
pub fn assert_plan_within_budget(plan: &TrainingPlan, target: u32, tolerance: u32) {
    for (day, entry) in plan.weekly_schedule.iter() {
        let minutes = academy_coach::intelligence::extract_minutes(entry);
        assert!(
            minutes.is_some_and(|m| m > 0),
            "{day} has no duration: {entry:?}"
        );
    }
    let total = total_minutes(plan);
    assert!(
        total.abs_diff(target) <= tolerance,
        "total {total} not within {tolerance} of {target}"
    );
}
