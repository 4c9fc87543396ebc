// ABOUTME: Integration tests for the deterministic default training plan generator
// ABOUTME: Covers drill lookup, tokenization, minute distribution and seeded reproducibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use academy_coach::config::intelligence::PlanningConfig;
use academy_coach::intelligence::training_plan::{
    drills_for_goal, drills_for_position, generate_default_plan, split_tokens, training_types,
};
use academy_coach::models::{PlayerProfile, TrainingIntensity, WeekDay};
use serde_json::json;

mod common;

use common::{assert_plan_within_budget, forward_player, record, seeded_rng};

// ============================================================================
// TOKENS AND DRILL TABLES
// ============================================================================

#[test]
fn test_split_tokens_handles_mixed_separators() {
    assert_eq!(
        split_tokens("射门技术， 传球技术,体能、 、速度"),
        vec!["射门技术", "传球技术", "体能", "速度"]
    );
    assert!(split_tokens(" ，, ").is_empty());
}

#[test]
fn test_drill_lookup_and_unknown_tokens() {
    assert_eq!(drills_for_goal("速度").len(), 4);
    assert_eq!(drills_for_position("门将")[0], "扑救练习");
    assert_eq!(drills_for_goal("头球"), vec!["头球训练"]);
    assert_eq!(drills_for_position("自由人"), vec!["自由人专项训练"]);
}

#[test]
fn test_training_types_dedupes_in_order() {
    let goals = vec!["传球技术".to_owned(), "改善传球技术".to_owned()];
    let positions = vec!["中场".to_owned()];
    let drills = training_types(&goals, &positions);

    assert_eq!(drills[0], "传球练习");
    assert_eq!(drills.iter().filter(|d| *d == "传球练习").count(), 1);
    assert!(drills.contains(&"视野训练".to_owned()));
}

#[test]
fn test_training_types_falls_back_to_generic() {
    let drills = training_types(&[], &[]);
    assert_eq!(drills.len(), 5);
    assert_eq!(drills[0], "基础技术训练");
}

// ============================================================================
// GENERATED PLANS
// ============================================================================

#[test]
fn test_forward_player_seven_even_days() {
    common::init_test_logging();
    let config = PlanningConfig::default();
    let plan = generate_default_plan(&forward_player(), &config, &mut seeded_rng(1));

    for (_, entry) in plan.weekly_schedule.iter() {
        assert!(entry.ends_with("：60分钟"), "{entry}");
    }
    assert_eq!(plan.weekly_schedule.get(WeekDay::Monday), "传球练习：60分钟");
    assert_eq!(plan.weekly_schedule.get(WeekDay::Friday), "射门练习：60分钟");
    assert_eq!(plan.weekly_schedule.get(WeekDay::Sunday), "进攻配合：60分钟");

    assert_eq!(plan.training_goals, vec!["传球技术"]);
    assert_eq!(plan.focus_areas, vec!["传球技术", "前锋"]);
    assert_eq!(
        plan.special_advice,
        vec!["重点关注前锋专项训练", "重点提升传球技术技能"]
    );
    assert_eq!(plan.intensity, TrainingIntensity::Medium);
    assert_eq!(plan.notes, "训练计划：每周训练7天，每天约60分钟，总训练时长420分钟");
}

#[test]
fn test_remainder_lands_on_exactly_one_day() {
    let profile = PlayerProfile::from_record(&record(json!({ "goals": "体能", "availableTime": "5.5" })));
    let config = PlanningConfig::default();

    for seed in 0..20 {
        let plan = generate_default_plan(&profile, &config, &mut seeded_rng(seed));
        assert_plan_within_budget(&plan, 330, 0);
        let long_days = plan
            .weekly_schedule
            .iter()
            .filter(|(_, entry)| entry.ends_with("：48分钟"))
            .count();
        assert_eq!(long_days, 1);
    }
}

#[test]
fn test_empty_profile_uses_defaults() {
    let config = PlanningConfig::default();
    let plan = generate_default_plan(&PlayerProfile::default(), &config, &mut seeded_rng(3));

    assert_plan_within_budget(&plan, 300, 0);
    assert_eq!(plan.training_goals, vec!["提升基础技能"]);
    assert_eq!(plan.focus_areas, vec!["提升基础技能"]);
    assert!(plan.special_advice.is_empty());
    assert!(plan.weekly_schedule.get(WeekDay::Monday).starts_with("基础技术训练"));
}

#[test]
fn test_tiny_budget_still_trains_every_day() {
    let profile = PlayerProfile::from_record(&record(json!({ "availableTime": 0.05 })));
    let plan = generate_default_plan(&profile, &PlanningConfig::default(), &mut seeded_rng(9));

    assert_plan_within_budget(&plan, 7, 0);
}

#[test]
fn test_same_seed_same_plan() {
    let config = PlanningConfig::default();
    let profile = PlayerProfile::from_record(&record(json!({
        "goals": "射门技术,速度",
        "specialGoals": "边锋",
        "availableTime": 6.2,
    })));

    let first = generate_default_plan(&profile, &config, &mut seeded_rng(42));
    let second = generate_default_plan(&profile, &config, &mut seeded_rng(42));

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
