// ABOUTME: Fixed linear scoring of physical, technical and match metrics into 0-100 subscores
// ABOUTME: Missing or unparsable metrics are excluded; empty categories fall back to neutral scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! Scoring Engine
//!
//! Each metric maps to a raw score through one affine rule, is clamped to
//! `[0, 100]`, and the available metrics of a subscore are averaged. A subscore
//! with no usable metric returns its configured neutral value. A category
//! overall is the rounded mean of its three (already rounded) subscores.
//!
//! | Subscore | Metric | Rule |
//! |---|---|---|
//! | speed | `sprint30m` / `sprint50m` / `sprint100m` (s) | `100 - (t - 4.5)*20` / `100 - (t - 7)*15` / `100 - (t - 13)*10` |
//! | endurance | `run12min` (m) / `yoyoTest` (level) | `d / 20` / `level * 10` |
//! | strength | `longJump` (cm) / `pullUps` / `squat` (kg) | `d / 2` / `n * 5` / `kg / 2` |
//! | ball control | `juggling` / `ballControl` / `dribbling` (s) | `n * 2` / `n * 2` / `100 - (t - 15)*5` |
//! | passing | `shortPass` / `longPass` (%) / `passSpeed` (s) | raw / raw / `100 - (t - 2)*20` |
//! | shooting | `shootingAccuracy` (%) / `shootingPower` / `shootingDistance` (m) | raw / `p / 2` / `d * 2` |
//! | attack | `goals` / `assists` | `n * 10` / `n * 8` |
//! | teamwork | `passes` / `passRate` (%) | `n / 5` / raw |
//!
//! Defense has no formula and always returns its neutral value.

use crate::config::intelligence::NeutralScores;
use crate::models::{CategoryScores, FieldRecord, PerformanceScores, PhysicalScores, TechnicalScores};

/// How one raw metric becomes a score
#[derive(Debug, Clone, Copy)]
enum MetricRule {
    /// The value already is a percentage
    Raw,
    /// `value * factor`
    Scaled(f64),
    /// `value / divisor`
    Divided(f64),
    /// `100 - (value - baseline) * per_unit`; lower is better
    TimedBelow { baseline: f64, per_unit: f64 },
}

impl MetricRule {
    fn apply(self, value: f64) -> f64 {
        match self {
            Self::Raw => value,
            Self::Scaled(factor) => value * factor,
            Self::Divided(divisor) => value / divisor,
            Self::TimedBelow { baseline, per_unit } => 100.0 - (value - baseline) * per_unit,
        }
    }
}

const SPEED_METRICS: &[(&str, MetricRule)] = &[
    ("sprint30m", MetricRule::TimedBelow { baseline: 4.5, per_unit: 20.0 }),
    ("sprint50m", MetricRule::TimedBelow { baseline: 7.0, per_unit: 15.0 }),
    ("sprint100m", MetricRule::TimedBelow { baseline: 13.0, per_unit: 10.0 }),
];

const ENDURANCE_METRICS: &[(&str, MetricRule)] = &[
    ("run12min", MetricRule::Divided(20.0)),
    ("yoyoTest", MetricRule::Scaled(10.0)),
];

const STRENGTH_METRICS: &[(&str, MetricRule)] = &[
    ("longJump", MetricRule::Divided(2.0)),
    ("pullUps", MetricRule::Scaled(5.0)),
    ("squat", MetricRule::Divided(2.0)),
];

const BALL_CONTROL_METRICS: &[(&str, MetricRule)] = &[
    ("juggling", MetricRule::Scaled(2.0)),
    ("ballControl", MetricRule::Scaled(2.0)),
    ("dribbling", MetricRule::TimedBelow { baseline: 15.0, per_unit: 5.0 }),
];

const PASSING_METRICS: &[(&str, MetricRule)] = &[
    ("shortPass", MetricRule::Raw),
    ("longPass", MetricRule::Raw),
    ("passSpeed", MetricRule::TimedBelow { baseline: 2.0, per_unit: 20.0 }),
];

const SHOOTING_METRICS: &[(&str, MetricRule)] = &[
    ("shootingAccuracy", MetricRule::Raw),
    ("shootingPower", MetricRule::Divided(2.0)),
    ("shootingDistance", MetricRule::Scaled(2.0)),
];

const ATTACK_METRICS: &[(&str, MetricRule)] = &[
    ("goals", MetricRule::Scaled(10.0)),
    ("assists", MetricRule::Scaled(8.0)),
];

const TEAMWORK_METRICS: &[(&str, MetricRule)] = &[
    ("passes", MetricRule::Divided(5.0)),
    ("passRate", MetricRule::Raw),
];

/// Clamp and round a raw score into a subscore
fn to_score(raw: f64) -> u8 {
    raw.clamp(0.0, 100.0).round() as u8
}

/// Average the available metrics of one subscore, or `None` when there are none
fn average_metrics(metrics: &FieldRecord, rules: &[(&str, MetricRule)]) -> Option<u8> {
    let scores: Vec<f64> = rules
        .iter()
        .filter_map(|(key, rule)| metrics.number(key).map(|value| rule.apply(value).clamp(0.0, 100.0)))
        .collect();

    if scores.is_empty() {
        return None;
    }
    Some(to_score(scores.iter().sum::<f64>() / scores.len() as f64))
}

/// Rounded mean of already rounded subscores
fn category_overall(subscores: [u8; 3]) -> u8 {
    let sum: u32 = subscores.iter().map(|score| u32::from(*score)).sum();
    to_score(f64::from(sum) / 3.0)
}

/// Speed from sprint times
#[must_use]
pub fn speed_score(physical: &FieldRecord, neutral: &NeutralScores) -> u8 {
    average_metrics(physical, SPEED_METRICS).unwrap_or(neutral.speed)
}

/// Endurance from the 12-minute run and yo-yo test
#[must_use]
pub fn endurance_score(physical: &FieldRecord, neutral: &NeutralScores) -> u8 {
    average_metrics(physical, ENDURANCE_METRICS).unwrap_or(neutral.endurance)
}

/// Strength from long jump, pull-ups and squat
#[must_use]
pub fn strength_score(physical: &FieldRecord, neutral: &NeutralScores) -> u8 {
    average_metrics(physical, STRENGTH_METRICS).unwrap_or(neutral.strength)
}

/// Physical category subscores and overall
#[must_use]
pub fn physical_overall(physical: &FieldRecord, neutral: &NeutralScores) -> PhysicalScores {
    let speed = speed_score(physical, neutral);
    let endurance = endurance_score(physical, neutral);
    let strength = strength_score(physical, neutral);
    PhysicalScores {
        speed,
        endurance,
        strength,
        overall: category_overall([speed, endurance, strength]),
    }
}

/// Ball control from juggling counts and dribbling time
#[must_use]
pub fn ball_control_score(skills: &FieldRecord, neutral: &NeutralScores) -> u8 {
    average_metrics(skills, BALL_CONTROL_METRICS).unwrap_or(neutral.ball_control)
}

/// Passing from pass accuracy and pass speed
#[must_use]
pub fn passing_score(skills: &FieldRecord, neutral: &NeutralScores) -> u8 {
    average_metrics(skills, PASSING_METRICS).unwrap_or(neutral.passing)
}

/// Shooting from accuracy, power and distance
#[must_use]
pub fn shooting_score(skills: &FieldRecord, neutral: &NeutralScores) -> u8 {
    average_metrics(skills, SHOOTING_METRICS).unwrap_or(neutral.shooting)
}

/// Technical category subscores and overall
#[must_use]
pub fn technical_overall(skills: &FieldRecord, neutral: &NeutralScores) -> TechnicalScores {
    let ball_control = ball_control_score(skills, neutral);
    let passing = passing_score(skills, neutral);
    let shooting = shooting_score(skills, neutral);
    TechnicalScores {
        ball_control,
        passing,
        shooting,
        overall: category_overall([ball_control, passing, shooting]),
    }
}

/// Attack from goals and assists
#[must_use]
pub fn attack_score(match_stats: &FieldRecord, neutral: &NeutralScores) -> u8 {
    average_metrics(match_stats, ATTACK_METRICS).unwrap_or(neutral.attack)
}

/// Defense; no metric feeds it yet
#[must_use]
pub const fn defense_score(_match_stats: &FieldRecord, neutral: &NeutralScores) -> u8 {
    neutral.defense
}

/// Teamwork from completed passes and pass rate
#[must_use]
pub fn teamwork_score(match_stats: &FieldRecord, neutral: &NeutralScores) -> u8 {
    average_metrics(match_stats, TEAMWORK_METRICS).unwrap_or(neutral.teamwork)
}

/// Match performance subscores and overall
#[must_use]
pub fn performance_overall(match_stats: &FieldRecord, neutral: &NeutralScores) -> PerformanceScores {
    let attack = attack_score(match_stats, neutral);
    let defense = defense_score(match_stats, neutral);
    let teamwork = teamwork_score(match_stats, neutral);
    PerformanceScores {
        attack,
        defense,
        teamwork,
        overall: category_overall([attack, defense, teamwork]),
    }
}

/// Score a full assessment request from its `physical`, `skills` and `match` records
#[must_use]
pub fn score_objective(request: &FieldRecord, neutral: &NeutralScores) -> CategoryScores {
    CategoryScores {
        physical: physical_overall(&request.record("physical"), neutral),
        technical: technical_overall(&request.record("skills"), neutral),
        performance: performance_overall(&request.record("match"), neutral),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_rule_rewards_faster_times() {
        let rule = MetricRule::TimedBelow {
            baseline: 4.5,
            per_unit: 20.0,
        };
        assert!((rule.apply(4.0) - 110.0).abs() < 1e-9);
        assert!((rule.apply(5.0) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_overall_rounds_half_up() {
        assert_eq!(category_overall([75, 70, 72]), 72);
        assert_eq!(category_overall([100, 100, 99]), 100);
        assert_eq!(category_overall([0, 0, 1]), 0);
    }

    #[test]
    fn test_to_score_clamps() {
        assert_eq!(to_score(-15.0), 0);
        assert_eq!(to_score(240.0), 100);
        assert_eq!(to_score(72.5), 73);
    }
}
