// ABOUTME: Reconciles a model-supplied training plan against the weekly minute budget
// ABOUTME: Parse, validate, repair and finalize; unparsable replies route to the default plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! Plan Reconciler
//!
//! ```text
//! reply ──parse──► Unparsable ──────────────────────────► default plan
//!          │
//!          └────► Parsed ─► validate ─► repair ─► finalize ─► plan
//!                                                    │
//!                                   budget missed ───┴─► regenerated schedule
//! ```
//!
//! Repair is field by field: each day entry, list item or note is kept when
//! it carries real content and replaced from the player profile otherwise.

use rand::Rng;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::default_plan::{generate_default_plan, goal_advice, position_advice};
use super::drills::{dedupe, generic_drills, position_focus_areas};
use super::schedule::{
    build_schedule, canonical_notes, day_figures, distribute_minutes, extract_minutes,
    format_entry, minute_figures, validate_schedule_time, MinuteDistribution,
};
use crate::config::intelligence::PlanningConfig;
use crate::constants::plan_labels::{
    BASIC_SKILLS_FOCUS, BASIC_SKILLS_GOAL, COMPREHENSIVE_TRAINING, DURATION_SEPARATOR,
    MINUTES_UNIT, NOTES_PREFIX, NOTES_SEPARATOR, STEADY_PROGRESS_ADVICE,
};
use crate::intelligence::model_reply::{
    joined_text_field, list_field, object_field, parse_model_reply, text_field, ParseOutcome,
};
use crate::intelligence::placeholder::is_placeholder;
use crate::models::{PlayerProfile, TrainingIntensity, TrainingPlan, WeekDay, WeeklySchedule};

/// Model reply after shape coercion, before any repair
#[derive(Debug, Default)]
struct DraftPlan {
    training_goals: Vec<String>,
    weekly_schedule: WeeklySchedule,
    focus_areas: Vec<String>,
    intensity: Option<TrainingIntensity>,
    special_advice: Vec<String>,
    notes: String,
}

impl DraftPlan {
    /// Coerce every field to its expected shape; wrong shapes become empty
    fn from_reply(fields: &Map<String, Value>) -> Self {
        let mut weekly_schedule = WeeklySchedule::default();
        let mut seen = Vec::with_capacity(WeekDay::ALL.len());
        if let Some(days) = object_field(fields, "weeklySchedule") {
            for (key, value) in days {
                let (Some(day), Some(entry)) = (WeekDay::parse_key(key), value.as_str()) else {
                    continue;
                };
                if !seen.contains(&day) {
                    seen.push(day);
                    weekly_schedule.set(day, entry.trim().to_owned());
                }
            }
        }

        Self {
            training_goals: list_field(fields, "trainingGoals"),
            weekly_schedule,
            focus_areas: list_field(fields, "focusAreas"),
            intensity: text_field(fields, "intensity")
                .as_deref()
                .and_then(TrainingIntensity::parse),
            special_advice: list_field(fields, "specialAdvice"),
            notes: joined_text_field(fields, "notes", NOTES_SEPARATOR).unwrap_or_default(),
        }
    }
}

/// Per-request context shared by the repair steps
struct RepairContext<'a> {
    profile: &'a PlayerProfile,
    config: &'a PlanningConfig,
    tokens: Vec<String>,
    target_minutes: u32,
    distribution: MinuteDistribution,
}

/// Turn a raw model reply into a plan meeting every plan invariant
///
/// A missing or unparsable reply is not an error: the default plan is
/// returned instead. The remainder day is drawn from `rng`.
pub fn reconcile_training_plan<R>(
    reply: Option<&str>,
    profile: &PlayerProfile,
    config: &PlanningConfig,
    rng: &mut R,
) -> TrainingPlan
where
    R: Rng + ?Sized,
{
    match parse_model_reply(reply) {
        ParseOutcome::Parsed(fields) => reconcile_parsed(&fields, profile, config, rng),
        ParseOutcome::Unparsable => {
            warn!("Training plan reply unusable, generating default plan");
            generate_default_plan(profile, config, rng)
        }
    }
}

fn reconcile_parsed<R>(
    fields: &Map<String, Value>,
    profile: &PlayerProfile,
    config: &PlanningConfig,
    rng: &mut R,
) -> TrainingPlan
where
    R: Rng + ?Sized,
{
    let draft = DraftPlan::from_reply(fields);
    let target_minutes = profile.target_minutes(config);
    let context = RepairContext {
        profile,
        config,
        tokens: profile.all_tokens(),
        target_minutes,
        distribution: distribute_minutes(target_minutes, rng),
    };

    let mut plan = TrainingPlan {
        training_goals: repair_training_goals(draft.training_goals, &context),
        weekly_schedule: repair_schedule(&draft.weekly_schedule, &context),
        focus_areas: repair_focus_areas(draft.focus_areas, &context),
        intensity: draft.intensity.unwrap_or_default(),
        special_advice: repair_special_advice(draft.special_advice, &context),
        notes: repair_notes(&draft.notes, &context),
    };

    finalize(&mut plan, &context);
    plan
}

fn repair_training_goals(goals: Vec<String>, context: &RepairContext<'_>) -> Vec<String> {
    let kept: Vec<String> = goals
        .into_iter()
        .map(|goal| goal.trim().to_owned())
        .filter(|goal| !is_placeholder(goal))
        .collect();
    if !kept.is_empty() {
        return dedupe(kept);
    }

    let from_profile = context.profile.goal_tokens();
    if from_profile.is_empty() {
        vec![BASIC_SKILLS_GOAL.to_owned()]
    } else {
        from_profile
    }
}

fn repair_schedule(draft: &WeeklySchedule, context: &RepairContext<'_>) -> WeeklySchedule {
    let mut schedule = WeeklySchedule::default();
    for day in WeekDay::ALL {
        let minutes = context.distribution.minutes_for(day);
        let entry = draft.get(day);

        let unusable =
            entry.chars().count() < context.config.min_entry_chars || is_placeholder(entry);

        let repaired = if unusable {
            let activity = context
                .tokens
                .get(day.index() % context.tokens.len().max(1))
                .map_or(COMPREHENSIVE_TRAINING, String::as_str);
            debug!("Filling {day} with {activity}");
            format_entry(activity, minutes)
        } else if extract_minutes(entry).is_none() {
            format!("{entry}{DURATION_SEPARATOR}{minutes}{MINUTES_UNIT}")
        } else {
            entry.to_owned()
        };
        schedule.set(day, repaired);
    }
    schedule
}

/// Replacement for a placeholder focus area
fn focus_replacement(context: &RepairContext<'_>) -> String {
    context
        .tokens
        .first()
        .cloned()
        .unwrap_or_else(|| BASIC_SKILLS_FOCUS.to_owned())
}

fn repair_focus_areas(areas: Vec<String>, context: &RepairContext<'_>) -> Vec<String> {
    let repaired: Vec<String> = areas
        .into_iter()
        .map(|area| {
            if is_placeholder(&area) {
                warn!("Replacing placeholder focus area {area:?}");
                focus_replacement(context)
            } else {
                area.trim().to_owned()
            }
        })
        .collect();
    if !repaired.is_empty() {
        return dedupe(repaired);
    }

    let from_positions: Vec<String> = context
        .profile
        .position_tokens()
        .iter()
        .flat_map(|position| position_focus_areas(position))
        .collect();
    if !from_positions.is_empty() {
        return dedupe(from_positions);
    }

    let goals = context.profile.goal_tokens();
    if goals.is_empty() {
        vec![BASIC_SKILLS_FOCUS.to_owned()]
    } else {
        goals
    }
}

/// Replacement for a placeholder advice sentence
fn advice_replacement(profile: &PlayerProfile) -> String {
    profile
        .goals
        .as_deref()
        .map(goal_advice)
        .or_else(|| profile.special_goals.as_deref().map(position_advice))
        .unwrap_or_else(|| STEADY_PROGRESS_ADVICE.to_owned())
}

fn repair_special_advice(advice: Vec<String>, context: &RepairContext<'_>) -> Vec<String> {
    let repaired: Vec<String> = advice
        .into_iter()
        .map(|sentence| {
            if is_placeholder(&sentence) {
                warn!("Replacing placeholder advice {sentence:?}");
                advice_replacement(context.profile)
            } else {
                sentence.trim().to_owned()
            }
        })
        .collect();
    if !repaired.is_empty() {
        return dedupe(repaired);
    }

    let profile = context.profile;
    let generated: Vec<String> = profile
        .special_goals
        .as_deref()
        .map(position_advice)
        .into_iter()
        .chain(profile.goals.as_deref().map(goal_advice))
        .collect();
    if generated.is_empty() {
        vec![STEADY_PROGRESS_ADVICE.to_owned()]
    } else {
        generated
    }
}

/// Keep model notes only when they already state the cadence and the exact total
fn repair_notes(notes: &str, context: &RepairContext<'_>) -> String {
    let notes = notes.trim();
    let canonical = canonical_notes(&context.distribution);
    if notes.is_empty() || is_placeholder(notes) {
        return canonical;
    }

    let minutes = minute_figures(notes);
    let states_total = minutes.contains(&context.target_minutes)
        && minutes.iter().all(|figure| *figure <= context.target_minutes);
    if states_total && day_figures(notes).contains(&7) {
        if notes.starts_with(NOTES_PREFIX) {
            return notes.to_owned();
        }
        return format!("{NOTES_PREFIX}{notes}");
    }

    if minutes.is_empty() {
        format!("{canonical}{NOTES_SEPARATOR}{notes}")
    } else {
        debug!("Discarding model notes with conflicting minute figures");
        canonical
    }
}

/// Re-check the time budget and rebuild the schedule when it is missed
fn finalize(plan: &mut TrainingPlan, context: &RepairContext<'_>) {
    let validation = validate_schedule_time(
        &plan.weekly_schedule,
        context.target_minutes,
        context.config.tolerance_minutes,
    );
    if validation.is_valid {
        info!(
            "Reconciled model training plan: {} minutes over {} days",
            validation.total_minutes, validation.training_days
        );
        return;
    }

    warn!("{}, regenerating schedule", validation.message());
    let activities = if context.tokens.is_empty() {
        generic_drills()
    } else {
        context.tokens.clone()
    };
    plan.weekly_schedule = build_schedule(&activities, &context.distribution);
    plan.notes = canonical_notes(&context.distribution);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_draft_accepts_day_aliases_and_ignores_non_strings() {
        let draft = DraftPlan::from_reply(&fields(json!({
            "weeklySchedule": { "Mon": "传球练习：60分钟", "tuesday": 60, "周三": "射门练习：60分钟" },
            "trainingGoals": "not a list",
        })));

        assert_eq!(draft.weekly_schedule.monday, "传球练习：60分钟");
        assert_eq!(draft.weekly_schedule.tuesday, "");
        assert_eq!(draft.weekly_schedule.wednesday, "射门练习：60分钟");
        assert!(draft.training_goals.is_empty());
    }

    #[test]
    fn test_notes_with_conflicting_minutes_are_replaced() {
        let profile = PlayerProfile {
            weekly_available_hours: Some(7.0),
            ..PlayerProfile::default()
        };
        let config = PlanningConfig::default();
        let context = RepairContext {
            profile: &profile,
            config: &config,
            tokens: Vec::new(),
            target_minutes: 420,
            distribution: MinuteDistribution {
                base_minutes: 60,
                remainder_minutes: 0,
                extra_day: WeekDay::Monday,
            },
        };

        let notes = repair_notes("每天训练90分钟", &context);
        assert_eq!(notes, "训练计划：每周训练7天，每天约60分钟，总训练时长420分钟");

        let notes = repair_notes("注意补水", &context);
        assert!(notes.ends_with("；注意补水"));

        let notes = repair_notes("每周7天，共420分钟", &context);
        assert_eq!(notes, "训练计划：每周7天，共420分钟");

        let notes = repair_notes("每周训练7天，总训练时长1420分钟", &context);
        assert_eq!(notes, "训练计划：每周训练7天，每天约60分钟，总训练时长420分钟");

        let notes = repair_notes("每周训练17天，总训练时长420分钟", &context);
        assert_eq!(notes, "训练计划：每周训练7天，每天约60分钟，总训练时长420分钟");
    }
}
