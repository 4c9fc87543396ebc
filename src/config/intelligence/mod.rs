// ABOUTME: Coaching intelligence configuration for assessment, planning and nutrition
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! Intelligence Configuration Module
//!
//! # Module Structure
//!
//! - `scoring` - Neutral subscores and narrative thresholds
//! - `planning` - Weekly time budget rules for training plans
//! - `nutrition` - BMR bands, multipliers, macro ratios and the plausibility gate
//!
//! Every value has a default; `COACH_*` environment variables override a
//! curated subset and the result is validated before use.

pub mod error;
pub mod nutrition;
pub mod planning;
pub mod scoring;

pub use error::ConfigError;
pub use nutrition::{
    ActivityMultiplierConfig, LinearBmr, MacroRatio, MacroRatioConfig, NominalProfileConfig,
    NutritionConfig, PlausibilityConfig, YouthBmrConfig,
};
pub use planning::PlanningConfig;
pub use scoring::{AssessmentThresholds, NeutralScores, ScoringConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static COACH_CONFIG: OnceLock<CoachConfig> = OnceLock::new();

/// Main coaching configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Scoring engine and assessment aggregator settings
    pub scoring: ScoringConfig,
    /// Training plan reconciliation and generation settings
    pub planning: PlanningConfig,
    /// Nutrition calculator settings
    pub nutrition: NutritionConfig,
}

impl CoachConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        COACH_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load coach config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every sub-configuration
    ///
    /// # Errors
    ///
    /// Returns the first range, weight or value violation found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.planning.validate()?;
        self.nutrition.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Planning overrides
        Self::apply_env_var(
            "COACH_PLAN_DEFAULT_WEEKLY_HOURS",
            &mut self.planning.default_weekly_hours,
        )?;
        Self::apply_env_var(
            "COACH_PLAN_TOLERANCE_MINUTES",
            &mut self.planning.tolerance_minutes,
        )?;
        Self::apply_env_var(
            "COACH_PLAN_MIN_ENTRY_CHARS",
            &mut self.planning.min_entry_chars,
        )?;

        // Nutrition overrides
        Self::apply_env_var(
            "COACH_NUTRITION_MIN_CALORIES",
            &mut self.nutrition.plausibility.min_daily_calories,
        )?;
        Self::apply_env_var(
            "COACH_NUTRITION_MAX_CALORIES",
            &mut self.nutrition.plausibility.max_daily_calories,
        )?;
        Self::apply_env_var(
            "COACH_NUTRITION_MACRO_TOLERANCE",
            &mut self.nutrition.plausibility.macro_kcal_tolerance,
        )?;

        // Scoring overrides
        Self::apply_env_var(
            "COACH_SCORE_STRENGTH_MIN",
            &mut self.scoring.thresholds.strength_min,
        )?;
        Self::apply_env_var(
            "COACH_SCORE_WEAKNESS_BELOW",
            &mut self.scoring.thresholds.weakness_below,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CoachConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_calorie_range_rejected() {
        let mut config = CoachConfig::default();
        config.nutrition.plausibility.min_daily_calories = 6000;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange(_)));
    }

    #[test]
    fn test_macro_ratios_must_sum_to_one() {
        let mut config = CoachConfig::default();
        config.nutrition.macronutrients.high.protein = 0.5;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWeights(_)));
    }

    #[test]
    fn test_zero_tolerance_rejected() {
        let mut config = CoachConfig::default();
        config.planning.tolerance_minutes = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    }
}
