// ABOUTME: Deterministic weekly training plan built only from the player profile
// ABOUTME: Terminal fallback when the model reply is missing or unparsable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

use rand::Rng;
use tracing::info;

use super::drills::{dedupe, training_types};
use super::schedule::{build_schedule, canonical_notes, distribute_minutes};
use crate::config::intelligence::PlanningConfig;
use crate::constants::plan_labels::BASIC_SKILLS_GOAL;
use crate::models::{PlayerProfile, TrainingIntensity, TrainingPlan};

/// Advice sentence for a position or special goal
#[must_use]
pub fn position_advice(special_goals: &str) -> String {
    format!("重点关注{special_goals}专项训练")
}

/// Advice sentence for the goal list
#[must_use]
pub fn goal_advice(goals: &str) -> String {
    format!("重点提升{goals}技能")
}

/// Build a complete plan without model input
///
/// Drills come from the goal and position tables, the weekly target is spread
/// evenly with the remainder on a day drawn from `rng`, and drills repeat with
/// wraparound across the seven days. Never fails.
pub fn generate_default_plan<R>(
    profile: &PlayerProfile,
    config: &PlanningConfig,
    rng: &mut R,
) -> TrainingPlan
where
    R: Rng + ?Sized,
{
    let mut goals = profile.goal_tokens();
    if goals.is_empty() {
        goals.push(BASIC_SKILLS_GOAL.to_owned());
    }
    let positions = profile.position_tokens();

    let drills = training_types(&goals, &positions);
    let target_minutes = profile.target_minutes(config);
    let distribution = distribute_minutes(target_minutes, rng);

    let mut special_advice = Vec::new();
    if let Some(special_goals) = profile.special_goals.as_deref() {
        special_advice.push(position_advice(special_goals));
    }
    if let Some(raw_goals) = profile.goals.as_deref() {
        special_advice.push(goal_advice(raw_goals));
    }

    info!(
        "Generated default training plan: {} drills over {target_minutes} weekly minutes",
        drills.len()
    );

    TrainingPlan {
        focus_areas: dedupe(goals.iter().chain(&positions).cloned()),
        training_goals: goals,
        weekly_schedule: build_schedule(&drills, &distribution),
        intensity: TrainingIntensity::Medium,
        special_advice,
        notes: canonical_notes(&distribution),
    }
}
