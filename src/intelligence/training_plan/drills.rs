// ABOUTME: Goal and position lookup tables mapping player input to concrete drill names
// ABOUTME: Unknown goals and positions degrade to a generic drill named after the token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

pub use crate::models::split_tokens;

use crate::constants::plan_labels::GENERIC_DRILLS;

/// Drills per training goal
const GOAL_DRILLS: &[(&str, &[&str])] = &[
    ("射门技术", &["射门练习", "射门技巧训练", "射门力量训练", "射门准确性训练"]),
    ("传球技术", &["传球练习", "传球准确性训练", "传球技巧训练", "传球力量控制"]),
    ("改善传球技术", &["传球练习", "传球准确性训练", "传球技巧训练", "传球力量控制"]),
    ("控球技术", &["控球练习", "控球技巧训练", "控球稳定性训练", "转身突破"]),
    ("防守技术", &["防守练习", "防守站位训练", "防守技巧训练", "拦截训练"]),
    ("体能", &["体能训练", "耐力训练", "力量训练", "爆发力训练"]),
    ("速度", &["速度训练", "爆发力训练", "敏捷性训练", "反应速度训练"]),
    ("战术理解", &["战术训练", "战术分析", "战术执行", "阵型理解"]),
    ("团队配合", &["团队训练", "配合练习", "团队战术", "沟通训练"]),
    ("提升基础技能", &["基础技术训练", "技能练习", "基础配合"]),
    ("增强体能", &["体能训练", "耐力训练", "力量训练"]),
    ("改善团队配合", &["团队训练", "配合练习", "团队战术"]),
];

/// Drills per playing position
const POSITION_DRILLS: &[(&str, &[&str])] = &[
    ("前锋", &["射门练习", "跑位训练", "进攻配合", "射门技巧", "门前嗅觉训练"]),
    ("中场", &["传球练习", "控球训练", "战术理解", "组织进攻", "视野训练"]),
    ("后卫", &["防守练习", "防守站位", "防守技巧", "防守配合", "头球训练"]),
    ("门将", &["扑救练习", "门将技术", "门将反应", "门将指挥", "手抛球训练"]),
    ("边锋", &["边路突破", "传中练习", "速度训练", "边路配合"]),
    ("中锋", &["射门练习", "头球训练", "背身拿球", "进攻配合"]),
    ("后腰", &["防守练习", "拦截训练", "传球组织", "防守指挥"]),
    ("中后卫", &["防守练习", "头球训练", "防守站位", "防守指挥"]),
    ("边后卫", &["防守练习", "边路突破", "传中练习", "防守配合"]),
];

/// Focus areas for the four main positions, used when a plan names none
const POSITION_FOCUS: &[(&str, &[&str])] = &[
    ("前锋", &["射门技巧", "跑位训练", "进攻配合"]),
    ("中场", &["传球技巧", "控球训练", "战术理解"]),
    ("后卫", &["防守技巧", "防守站位", "防守配合"]),
    ("门将", &["扑救技巧", "门将技术", "门将反应"]),
];

fn lookup(table: &[(&str, &'static [&'static str])], token: &str) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, drills)| *drills)
}

fn owned(drills: &[&str]) -> Vec<String> {
    drills.iter().map(|drill| (*drill).to_owned()).collect()
}

/// Drills for one goal; unknown goals become `"{goal}训练"`
#[must_use]
pub fn drills_for_goal(goal: &str) -> Vec<String> {
    let goal = goal.trim();
    lookup(GOAL_DRILLS, goal).map_or_else(|| vec![format!("{goal}训练")], owned)
}

/// Drills for one position; unknown positions become `"{position}专项训练"`
#[must_use]
pub fn drills_for_position(position: &str) -> Vec<String> {
    let position = position.trim();
    lookup(POSITION_DRILLS, position).map_or_else(|| vec![format!("{position}专项训练")], owned)
}

/// Whether a goal has a dedicated drill list
#[must_use]
pub fn is_known_goal(goal: &str) -> bool {
    lookup(GOAL_DRILLS, goal.trim()).is_some()
}

/// Whether a position has a dedicated drill list
#[must_use]
pub fn is_known_position(position: &str) -> bool {
    lookup(POSITION_DRILLS, position.trim()).is_some()
}

/// Focus areas for a position; positions without a table entry focus on themselves
#[must_use]
pub fn position_focus_areas(position: &str) -> Vec<String> {
    let position = position.trim();
    lookup(POSITION_FOCUS, position).map_or_else(|| vec![position.to_owned()], owned)
}

/// Goal drills followed by position drills, de-duplicated in first-seen order
///
/// Falls back to the generic drill list when both inputs are empty.
#[must_use]
pub fn training_types(goals: &[String], positions: &[String]) -> Vec<String> {
    let combined = goals
        .iter()
        .flat_map(|goal| drills_for_goal(goal))
        .chain(positions.iter().flat_map(|position| drills_for_position(position)));

    let drills = dedupe(combined);
    if drills.is_empty() {
        owned(&GENERIC_DRILLS)
    } else {
        drills
    }
}

/// Keep the first occurrence of every string
pub(crate) fn dedupe(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

/// Generic drill cycle as owned strings
#[must_use]
pub fn generic_drills() -> Vec<String> {
    owned(&GENERIC_DRILLS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tokens_degrade_to_named_training() {
        assert_eq!(drills_for_goal("头球"), vec!["头球训练"]);
        assert_eq!(drills_for_position("自由人"), vec!["自由人专项训练"]);
    }

    #[test]
    fn test_training_types_dedupes_across_tables() {
        let types = training_types(&["射门技术".to_owned()], &["前锋".to_owned()]);

        assert_eq!(types.iter().filter(|t| *t == "射门练习").count(), 1);
        assert_eq!(types.first().map(String::as_str), Some("射门练习"));
        assert_eq!(types.len(), 8);
    }

    #[test]
    fn test_position_focus_falls_back_to_token() {
        assert_eq!(position_focus_areas("门将"), vec!["扑救技巧", "门将技术", "门将反应"]);
        assert_eq!(position_focus_areas("边锋"), vec!["边锋"]);
    }
}
