// ABOUTME: Instruction prompts sent to the local model for plans and nutrition advice
// ABOUTME: Embeds the player's numbers and drill requirements; reply formats are loaded at compile time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! # Model Prompts
//!
//! The prompts state the same budget and formulas the reconciler enforces,
//! so a well-behaved model reply passes through with little repair. Required
//! JSON reply shapes live in markdown files next to this module.

use std::fmt::Write as _;

use crate::config::intelligence::{NutritionConfig, PlanningConfig};
use crate::intelligence::nutrition_calculator::bmr_band;
use crate::intelligence::training_plan::drills::{
    drills_for_goal, drills_for_position, is_known_goal, is_known_position,
};
use crate::models::{NutritionProfile, PlayerProfile};

/// Reply shape for training plans
pub const TRAINING_PLAN_FORMAT: &str = include_str!("training_plan_format.md");

/// Reply shape for nutrition advice
pub const NUTRITION_FORMAT: &str = include_str!("nutrition_format.md");

const UNKNOWN: &str = "未知";

fn goal_requirement(goal: &str) -> String {
    if is_known_goal(goal) {
        format!("- {goal}：必须安排{}", drills_for_goal(goal).join("、"))
    } else {
        format!("- {goal}：根据目标制定针对性训练内容")
    }
}

fn position_requirement(position: &str) -> String {
    if is_known_position(position) {
        format!("- {position}：必须安排{}", drills_for_position(position).join("、"))
    } else {
        format!("- {position}：根据位置特点制定专项训练")
    }
}

fn requirement_block(lines: Vec<String>, fallback: &str) -> String {
    if lines.is_empty() {
        fallback.to_owned()
    } else {
        lines.join("\n")
    }
}

/// Prompt asking for a seven-day plan that meets the weekly minute budget
#[must_use]
pub fn training_plan_prompt(profile: &PlayerProfile, config: &PlanningConfig) -> String {
    let target = profile.target_minutes(config);
    let goals = requirement_block(
        profile.goal_tokens().iter().map(|goal| goal_requirement(goal)).collect(),
        "- 综合训练：全面提升基础技能",
    );
    let positions = requirement_block(
        profile
            .position_tokens()
            .iter()
            .map(|position| position_requirement(position))
            .collect(),
        "- 综合位置：全面提升各位置技能",
    );
    let training_years = profile
        .training_years
        .map_or_else(|| UNKNOWN.to_owned(), |years| years.to_string());

    let mut prompt = String::new();
    prompt.push_str("你是一名专业青训足球教练，请根据以下球员的具体情况制定科学、个性化的训练计划。\n\n");
    let _ = writeln!(prompt, "球员信息：");
    let _ = writeln!(prompt, "- 当前水平：{}", profile.level.as_deref().unwrap_or(UNKNOWN));
    let _ = writeln!(prompt, "- 训练年限：{training_years}年");
    let _ = writeln!(prompt, "- 训练目标：{}", profile.goals.as_deref().unwrap_or(UNKNOWN));
    let _ = writeln!(prompt, "- 司职位置：{}", profile.special_goals.as_deref().unwrap_or("无"));
    let _ = writeln!(prompt, "- 每周可用训练时间：{}小时\n", profile.weekly_hours(config));

    let _ = writeln!(prompt, "重要时间限制要求（必须严格遵守）：");
    let _ = writeln!(prompt, "- 每周总训练时间必须严格等于{target}分钟");
    let _ = writeln!(
        prompt,
        "- 训练时间平均分配到7天，基础每天{}分钟，余下{}分钟分配到其中一天",
        target / 7,
        target % 7
    );
    let _ = writeln!(prompt, "- 每天都必须有训练内容，不设置休息日\n");

    let _ = writeln!(prompt, "训练目标针对性要求：\n{goals}\n");
    let _ = writeln!(prompt, "司职位置专项要求：\n{positions}\n");
    prompt.push_str(TRAINING_PLAN_FORMAT);
    prompt
}

/// Prompt asking for nutrition advice computed from the stated formulas
#[must_use]
pub fn nutrition_prompt(profile: &NutritionProfile, config: &NutritionConfig) -> String {
    let metrics = profile.resolve(&config.defaults);
    let band = bmr_band(metrics.age_years, profile.gender, &config.bmr);
    let activity = &config.activity;
    let intensity = profile
        .training_intensity
        .map_or(UNKNOWN, |intensity| intensity.questionnaire_label());

    let mut prompt = String::new();
    prompt.push_str("你是一名专业运动营养师，请根据以下小球员的具体情况制定科学的、个性化的营养建议。\n\n");
    let _ = writeln!(prompt, "球员信息：");
    let _ = writeln!(prompt, "- 年龄：{}岁", metrics.age_years);
    let _ = writeln!(prompt, "- 性别：{}", profile.gender_display());
    let _ = writeln!(prompt, "- 体重：{}kg", metrics.weight_kg);
    let _ = writeln!(prompt, "- 身高：{}cm", metrics.height_cm);
    let _ = writeln!(prompt, "- 饮食禁忌：{}", profile.diet_taboo.as_deref().unwrap_or("无"));
    let _ = writeln!(prompt, "- 特殊需求：{}\n", profile.special_needs.as_deref().unwrap_or("无"));

    let _ = writeln!(prompt, "训练数据：");
    let _ = writeln!(prompt, "- 训练强度：{intensity}");
    let _ = writeln!(prompt, "- 训练时长：{}小时/周\n", metrics.weekly_hours);

    let _ = writeln!(prompt, "每日热量计算（必须执行）：");
    let _ = writeln!(
        prompt,
        "1. 基础代谢率 BMR = {} × {} + {}",
        band.weight_coef, metrics.weight_kg, band.intercept
    );
    let _ = writeln!(
        prompt,
        "2. 训练强度系数：低强度{}倍，中等强度{}倍，高强度{}倍",
        activity.low, activity.medium, activity.high
    );
    let _ = writeln!(
        prompt,
        "3. 训练时长调整：每周每训练1小时，增加{}%热量",
        (activity.per_weekly_hour * 100.0).round()
    );
    let _ = writeln!(prompt, "4. 每日热量 = BMR × 训练强度系数 × (1 + 训练时长调整)");
    let _ = writeln!(
        prompt,
        "5. 每日热量必须在{}到{}kcal之间\n",
        config.plausibility.min_daily_calories, config.plausibility.max_daily_calories
    );
    prompt.push_str(NUTRITION_FORMAT);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    #[test]
    fn test_training_prompt_states_budget_and_drills() {
        let profile = PlayerProfile {
            goals: Some("射门技术,意识".to_owned()),
            special_goals: Some("前锋".to_owned()),
            weekly_available_hours: Some(5.0),
            ..PlayerProfile::default()
        };
        let prompt = training_plan_prompt(&profile, &PlanningConfig::default());

        assert!(prompt.contains("严格等于300分钟"));
        assert!(prompt.contains("基础每天42分钟，余下6分钟"));
        assert!(prompt.contains("- 射门技术：必须安排射门练习、射门技巧训练"));
        assert!(prompt.contains("- 意识：根据目标制定针对性训练内容"));
        assert!(prompt.contains("- 前锋：必须安排射门练习、跑位训练"));
        assert!(prompt.contains("\"weeklySchedule\""));
    }

    #[test]
    fn test_nutrition_prompt_uses_gender_band() {
        let profile = NutritionProfile {
            age: Some(12),
            weight_kg: Some(45.0),
            gender: Some(Gender::Female),
            gender_label: Some("女".to_owned()),
            ..NutritionProfile::default()
        };
        let prompt = nutrition_prompt(&profile, &NutritionConfig::default());

        assert!(prompt.contains("BMR = 13.384 × 45 + 692.6"));
        assert!(prompt.contains("- 性别：女"));
        assert!(prompt.contains("\"dailyCalories\""));
    }
}
