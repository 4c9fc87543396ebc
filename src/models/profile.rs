// ABOUTME: Player and nutrition profiles built from inbound request records
// ABOUTME: Training intensity and gender parsing with Chinese and English aliases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::FieldRecord;
use crate::config::intelligence::{NominalProfileConfig, PlanningConfig};

/// Separators accepted between goal or position phrases
const TOKEN_SEPARATORS: [char; 3] = [',', '，', '、'];

/// Split a free-text list on ASCII commas, full-width commas and enumeration commas
///
/// Entries are trimmed and empty ones dropped; order is preserved.
#[must_use]
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split(TOKEN_SEPARATORS)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Training intensity as chosen by the player or returned by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrainingIntensity {
    /// Light sessions
    #[serde(rename = "低", alias = "low", alias = "低强度")]
    Low,
    /// Regular sessions
    #[default]
    #[serde(
        rename = "中等",
        alias = "medium",
        alias = "moderate",
        alias = "中",
        alias = "中等强度"
    )]
    Medium,
    /// Demanding sessions
    #[serde(rename = "高", alias = "high", alias = "高强度")]
    High,
}

impl TrainingIntensity {
    /// Parse any accepted label; unrecognized text yields `None`
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" | "低" | "低强度" => Some(Self::Low),
            "medium" | "moderate" | "中" | "中等" | "中等强度" => Some(Self::Medium),
            "high" | "高" | "高强度" => Some(Self::High),
            _ => None,
        }
    }

    /// Short label used in training plans
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "低",
            Self::Medium => "中等",
            Self::High => "高",
        }
    }

    /// Form label used by the nutrition questionnaire
    #[must_use]
    pub const fn questionnaire_label(self) -> &'static str {
        match self {
            Self::Low => "低强度",
            Self::Medium => "中等强度",
            Self::High => "高强度",
        }
    }
}

impl fmt::Display for TrainingIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Player gender as used by the BMR bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Female formulas
    Female,
    /// Male formulas
    Male,
}

impl Gender {
    /// Parse common Chinese and English spellings
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "女" | "女孩" | "女生" | "female" | "f" | "girl" => Some(Self::Female),
            "男" | "男孩" | "男生" | "male" | "m" | "boy" => Some(Self::Male),
            _ => None,
        }
    }

    /// Display label used in nutrition notes
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Female => "女",
            Self::Male => "男",
        }
    }
}

/// Caller-supplied player attributes driving plan generation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    /// Age in years
    pub age: Option<u32>,
    /// Self-reported level (`"初级"`, `"中级"`, ...)
    pub level: Option<String>,
    /// Years of organized training
    pub training_years: Option<f64>,
    /// Comma-separated training goals
    pub goals: Option<String>,
    /// Comma-separated positions or special goals
    pub special_goals: Option<String>,
    /// Weekly hours available for training
    pub weekly_available_hours: Option<f64>,
}

impl PlayerProfile {
    /// Build from an inbound record, coercing numeric strings
    #[must_use]
    pub fn from_record(record: &FieldRecord) -> Self {
        Self {
            age: record.number("age").and_then(non_negative_whole),
            level: record.text("level"),
            training_years: record.number("trainingYears"),
            goals: record.text("goals"),
            special_goals: record.first_text(&["specialGoals", "position"]),
            weekly_available_hours: record.first_number(&["availableTime", "weeklyAvailableHours"]),
        }
    }

    /// Parsed goal phrases
    #[must_use]
    pub fn goal_tokens(&self) -> Vec<String> {
        self.goals.as_deref().map(split_tokens).unwrap_or_default()
    }

    /// Parsed position or special-goal phrases
    #[must_use]
    pub fn position_tokens(&self) -> Vec<String> {
        self.special_goals
            .as_deref()
            .map(split_tokens)
            .unwrap_or_default()
    }

    /// Goal phrases followed by position phrases
    #[must_use]
    pub fn all_tokens(&self) -> Vec<String> {
        let mut tokens = self.goal_tokens();
        tokens.extend(self.position_tokens());
        tokens
    }

    /// Weekly hours, substituting the configured default for absent or non-positive values
    #[must_use]
    pub fn weekly_hours(&self, config: &PlanningConfig) -> f64 {
        self.weekly_available_hours
            .filter(|hours| *hours > 0.0)
            .unwrap_or(config.default_weekly_hours)
    }

    /// Weekly minute budget every finalized schedule must meet
    #[must_use]
    pub fn target_minutes(&self, config: &PlanningConfig) -> u32 {
        let minutes = (self.weekly_hours(config) * 60.0).round();
        let minutes = if minutes > f64::from(u32::MAX) {
            u32::MAX
        } else {
            minutes as u32
        };
        minutes.max(config.min_weekly_minutes)
    }
}

/// Caller-supplied body metrics and preferences for nutrition advice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProfile {
    /// Age in years
    pub age: Option<u32>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Recognized gender
    pub gender: Option<Gender>,
    /// Gender text exactly as sent, echoed in notes
    pub gender_label: Option<String>,
    /// Recognized intensity; `None` when absent or unrecognized
    pub training_intensity: Option<TrainingIntensity>,
    /// Weekly training hours
    pub weekly_duration_hours: Option<f64>,
    /// Foods to avoid
    pub diet_taboo: Option<String>,
    /// Special dietary needs
    pub special_needs: Option<String>,
}

/// Body metrics after nominal defaults have been substituted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBodyMetrics {
    /// Age in years
    pub age_years: u32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weekly training hours
    pub weekly_hours: f64,
}

impl NutritionProfile {
    /// Build from an inbound record, coercing numeric strings
    #[must_use]
    pub fn from_record(record: &FieldRecord) -> Self {
        let gender_label = record.text("gender");
        Self {
            age: record.number("age").and_then(non_negative_whole),
            weight_kg: record.number("weight"),
            height_cm: record.number("height"),
            gender: gender_label.as_deref().and_then(Gender::parse),
            gender_label,
            training_intensity: record
                .first_text(&["intensity", "trainingIntensity"])
                .as_deref()
                .and_then(TrainingIntensity::parse),
            weekly_duration_hours: record.first_number(&["duration", "weeklyDurationHours"]),
            diet_taboo: record.text("dietTaboo"),
            special_needs: record.text("specialNeeds"),
        }
    }

    /// Substitute nominal values for absent, zero or negative metrics
    #[must_use]
    pub fn resolve(&self, defaults: &NominalProfileConfig) -> ResolvedBodyMetrics {
        ResolvedBodyMetrics {
            age_years: self
                .age
                .filter(|age| *age > 0)
                .unwrap_or(defaults.age_years),
            weight_kg: positive_or(self.weight_kg, defaults.weight_kg),
            height_cm: positive_or(self.height_cm, defaults.height_cm),
            weekly_hours: positive_or(self.weekly_duration_hours, defaults.weekly_hours),
        }
    }

    /// Gender text for notes, `未知` when not given
    #[must_use]
    pub fn gender_display(&self) -> &str {
        self.gender_label
            .as_deref()
            .or_else(|| self.gender.map(Gender::label))
            .unwrap_or("未知")
    }
}

fn positive_or(value: Option<f64>, fallback: f64) -> f64 {
    value.filter(|v| *v > 0.0).unwrap_or(fallback)
}

fn non_negative_whole(value: f64) -> Option<u32> {
    (value >= 0.0 && value <= f64::from(u32::MAX)).then(|| value.trunc() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_tokens_handles_all_separators() {
        assert_eq!(
            split_tokens(" 传球技术，射门技术,体能、 "),
            vec!["传球技术", "射门技术", "体能"]
        );
        assert!(split_tokens("，,").is_empty());
    }

    #[test]
    fn test_intensity_aliases() {
        assert_eq!(TrainingIntensity::parse("中等强度"), Some(TrainingIntensity::Medium));
        assert_eq!(TrainingIntensity::parse("HIGH"), Some(TrainingIntensity::High));
        assert_eq!(TrainingIntensity::parse("extreme"), None);
    }

    #[test]
    fn test_target_minutes_defaults_and_rounds() {
        let config = PlanningConfig::default();
        let mut profile = PlayerProfile::default();
        assert_eq!(profile.target_minutes(&config), 300);

        profile.weekly_available_hours = Some(7.0);
        assert_eq!(profile.target_minutes(&config), 420);

        profile.weekly_available_hours = Some(0.001);
        assert_eq!(profile.target_minutes(&config), 7);
    }

    #[test]
    fn test_nutrition_profile_resolves_defaults() {
        let record = FieldRecord::from_value(json!({ "age": "abc", "weight": "0", "gender": "女" }));
        let profile = NutritionProfile::from_record(&record);
        let metrics = profile.resolve(&NominalProfileConfig::default());

        assert_eq!(metrics.age_years, 12);
        assert!((metrics.weight_kg - 45.0).abs() < f64::EPSILON);
        assert_eq!(profile.gender, Some(Gender::Female));
        assert_eq!(profile.gender_display(), "女");
    }
}
