// ABOUTME: Scoring configuration for player assessment subscores and narrative thresholds
// ABOUTME: Holds neutral per-category defaults and the strength/weakness/potential cutoffs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! Assessment scoring configuration.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Scoring engine and assessment aggregator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Scores returned when a category has no usable metrics
    pub neutral: NeutralScores,
    /// Narrative thresholds for the overall assessment
    pub thresholds: AssessmentThresholds,
}

/// Neutral default subscores, one per category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeutralScores {
    /// Speed (no sprint metrics)
    pub speed: u8,
    /// Endurance (no run/yo-yo metrics)
    pub endurance: u8,
    /// Strength (no jump/pull-up/squat metrics)
    pub strength: u8,
    /// Ball control (no juggling/dribbling metrics)
    pub ball_control: u8,
    /// Passing (no pass metrics)
    pub passing: u8,
    /// Shooting (no shooting metrics)
    pub shooting: u8,
    /// Attack (no goals/assists)
    pub attack: u8,
    /// Defense (always; no defensive formula exists)
    pub defense: u8,
    /// Teamwork (no passes/pass rate)
    pub teamwork: u8,
}

/// Thresholds turning category overalls into narrative fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentThresholds {
    /// Category overall at or above this is listed as a strength
    pub strength_min: u8,
    /// Category overall below this is listed as a weakness
    pub weakness_below: u8,
    /// Overall score at or above this is "high" potential
    pub potential_high_min: u8,
    /// Overall score at or above this is "medium" potential
    pub potential_medium_min: u8,
    /// Fixed position fit reported until a real estimator exists
    pub placeholder_position_fit: u8,
}

impl ScoringConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let neutral = &self.neutral;
        let all = [
            neutral.speed,
            neutral.endurance,
            neutral.strength,
            neutral.ball_control,
            neutral.passing,
            neutral.shooting,
            neutral.attack,
            neutral.defense,
            neutral.teamwork,
        ];
        if all.iter().any(|score| *score > 100) {
            return Err(ConfigError::ValueOutOfRange(
                "neutral scores must be within 0-100",
            ));
        }

        let thresholds = &self.thresholds;
        if thresholds.weakness_below > thresholds.strength_min {
            return Err(ConfigError::InvalidRange(
                "weakness_below must be <= strength_min",
            ));
        }
        if thresholds.potential_medium_min >= thresholds.potential_high_min {
            return Err(ConfigError::InvalidRange(
                "potential_medium_min must be < potential_high_min",
            ));
        }
        if thresholds.placeholder_position_fit > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "placeholder_position_fit must be within 0-100",
            ));
        }
        Ok(())
    }
}

impl Default for NeutralScores {
    fn default() -> Self {
        Self {
            speed: 75,
            endurance: 70,
            strength: 72,
            ball_control: 78,
            passing: 75,
            shooting: 70,
            attack: 76,
            defense: 68,
            teamwork: 72,
        }
    }
}

impl Default for AssessmentThresholds {
    fn default() -> Self {
        Self {
            strength_min: 75,
            weakness_below: 70,
            potential_high_min: 80,
            potential_medium_min: 70,
            placeholder_position_fit: 80,
        }
    }
}
