// ABOUTME: Nutrition configuration for youth caloric needs and macronutrient splits
// ABOUTME: Configures age/gender-banded BMR, intensity multipliers, macro ratios and the plausibility gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! Nutrition Analysis Configuration
//!
//! BMR uses the Schofield weight-only equations banded at age 10 for
//! children (3-10) and adolescents (10-18). Daily calories are
//! `BMR x intensity multiplier x (1 + weekly hours x duration factor)`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Nutrition calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Nominal values substituted for missing or unparsable body metrics
    pub defaults: NominalProfileConfig,
    /// Age/gender-banded BMR coefficients
    pub bmr: YouthBmrConfig,
    /// Training intensity and duration multipliers
    pub activity: ActivityMultiplierConfig,
    /// Macronutrient ratios per intensity
    pub macronutrients: MacroRatioConfig,
    /// Plausibility gate applied to model-supplied calories
    pub plausibility: PlausibilityConfig,
}

/// Nominal body metrics used before formulas run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominalProfileConfig {
    /// Age in years
    pub age_years: u32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weekly training hours
    pub weekly_hours: f64,
}

/// Linear BMR coefficients (`slope x weight + intercept`) per age/gender band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouthBmrConfig {
    /// Ages strictly below this use the child band
    pub child_age_cutoff: u32,
    /// Female, child band
    pub female_child: LinearBmr,
    /// Female, adolescent band
    pub female_adolescent: LinearBmr,
    /// Male, child band (also the unspecified-gender default)
    pub male_child: LinearBmr,
    /// Male, adolescent band (also the unspecified-gender default)
    pub male_adolescent: LinearBmr,
}

/// One weight-based BMR line
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinearBmr {
    /// kcal per kg of body weight
    pub weight_coef: f64,
    /// Constant term in kcal
    pub intercept: f64,
}

/// Multipliers turning BMR into daily calories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityMultiplierConfig {
    /// Low intensity: 1.1
    pub low: f64,
    /// Medium intensity: 1.3
    pub medium: f64,
    /// High intensity: 1.5
    pub high: f64,
    /// Unrecognized intensity: 1.0
    pub unrecognized: f64,
    /// Extra fraction per weekly training hour: 0.05
    pub per_weekly_hour: f64,
}

/// Calorie fraction per macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroRatio {
    /// Protein share of calories
    pub protein: f64,
    /// Carbohydrate share of calories
    pub carbs: f64,
    /// Fat share of calories
    pub fat: f64,
}

impl MacroRatio {
    fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Macronutrient ratios per intensity band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroRatioConfig {
    /// High intensity
    pub high: MacroRatio,
    /// Medium intensity
    pub medium: MacroRatio,
    /// Low or unrecognized intensity
    pub low: MacroRatio,
}

/// Rules for trusting upstream calorie figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlausibilityConfig {
    /// Lowest plausible daily calories
    pub min_daily_calories: u32,
    /// Highest plausible daily calories
    pub max_daily_calories: u32,
    /// Values the model emits as canned answers rather than computations
    pub known_bad_calories: Vec<u32>,
    /// Allowed relative gap between stated calories and macro kcal
    pub macro_kcal_tolerance: f64,
}

impl NutritionConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let defaults = &self.defaults;
        if defaults.weight_kg <= 0.0 || defaults.height_cm <= 0.0 || defaults.weekly_hours < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "nominal weight/height must be positive and weekly hours non-negative",
            ));
        }

        let plausibility = &self.plausibility;
        if plausibility.min_daily_calories >= plausibility.max_daily_calories {
            return Err(ConfigError::InvalidRange(
                "min_daily_calories must be < max_daily_calories",
            ));
        }
        if !(0.0..1.0).contains(&plausibility.macro_kcal_tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "macro_kcal_tolerance must be within [0, 1)",
            ));
        }

        for ratio in [
            &self.macronutrients.high,
            &self.macronutrients.medium,
            &self.macronutrients.low,
        ] {
            if (ratio.sum() - 1.0).abs() > 0.01 {
                return Err(ConfigError::InvalidWeights(
                    "macronutrient ratios must sum to 1.0",
                ));
            }
        }

        let activity = &self.activity;
        if [activity.low, activity.medium, activity.high, activity.unrecognized]
            .iter()
            .any(|multiplier| *multiplier <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "intensity multipliers must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for NominalProfileConfig {
    fn default() -> Self {
        Self {
            age_years: 12,
            weight_kg: 45.0,
            height_cm: 150.0,
            weekly_hours: 5.0,
        }
    }
}

impl Default for YouthBmrConfig {
    fn default() -> Self {
        Self {
            child_age_cutoff: 10,
            female_child: LinearBmr {
                weight_coef: 22.5,
                intercept: 499.0,
            },
            female_adolescent: LinearBmr {
                weight_coef: 13.384,
                intercept: 692.6,
            },
            male_child: LinearBmr {
                weight_coef: 22.7,
                intercept: 495.0,
            },
            male_adolescent: LinearBmr {
                weight_coef: 17.686,
                intercept: 658.2,
            },
        }
    }
}

impl Default for ActivityMultiplierConfig {
    fn default() -> Self {
        Self {
            low: 1.1,
            medium: 1.3,
            high: 1.5,
            unrecognized: 1.0,
            per_weekly_hour: 0.05,
        }
    }
}

impl Default for MacroRatioConfig {
    fn default() -> Self {
        Self {
            high: MacroRatio {
                protein: 0.25,
                carbs: 0.55,
                fat: 0.20,
            },
            medium: MacroRatio {
                protein: 0.20,
                carbs: 0.60,
                fat: 0.20,
            },
            low: MacroRatio {
                protein: 0.15,
                carbs: 0.65,
                fat: 0.20,
            },
        }
    }
}

impl Default for PlausibilityConfig {
    fn default() -> Self {
        Self {
            min_daily_calories: 1000,
            max_daily_calories: 5000,
            known_bad_calories: vec![1200],
            macro_kcal_tolerance: 0.15,
        }
    }
}
