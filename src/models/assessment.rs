// ABOUTME: Player assessment report with per-category subscores and narrative overall
// ABOUTME: All subscores are integers in 0-100; serialized in camelCase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

use serde::{Deserialize, Serialize};

/// Physical category subscores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalScores {
    /// Sprint-derived speed
    pub speed: u8,
    /// Run/yo-yo-derived endurance
    pub endurance: u8,
    /// Jump/pull-up/squat-derived strength
    pub strength: u8,
    /// Rounded mean of the three above
    pub overall: u8,
}

/// Technical category subscores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalScores {
    /// Juggling/dribbling-derived ball control
    pub ball_control: u8,
    /// Pass accuracy and speed
    pub passing: u8,
    /// Shooting accuracy, power and distance
    pub shooting: u8,
    /// Rounded mean of the three above
    pub overall: u8,
}

/// Match performance subscores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceScores {
    /// Goals and assists
    pub attack: u8,
    /// Defensive contribution
    pub defense: u8,
    /// Passes and pass rate
    pub teamwork: u8,
    /// Rounded mean of the three above
    pub overall: u8,
}

/// Numeric part of an assessment, before narrative fields are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    /// Physical subscores
    pub physical: PhysicalScores,
    /// Technical subscores
    pub technical: TechnicalScores,
    /// Match performance subscores
    pub performance: PerformanceScores,
}

/// Development potential band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Potential {
    /// Overall score at or above the high threshold
    High,
    /// Overall score at or above the medium threshold
    Medium,
    /// Everything else
    Low,
}

/// Narrative summary across all categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallAssessment {
    /// Rounded mean of the three category overalls
    pub score: u8,
    /// At least one entry
    pub strengths: Vec<String>,
    /// At least one entry
    pub weaknesses: Vec<String>,
    /// At least one entry
    pub improvements: Vec<String>,
    /// Potential band derived from `score`
    pub potential: Potential,
    /// Fit for the player's current position, 0-100
    pub position_fit: u8,
    /// Position advice
    pub position_suggestions: Vec<String>,
    /// General recommendations
    pub recommendations: Vec<String>,
}

/// Complete player assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Physical subscores
    pub physical: PhysicalScores,
    /// Technical subscores
    pub technical: TechnicalScores,
    /// Match performance subscores
    pub performance: PerformanceScores,
    /// Narrative summary
    pub overall: OverallAssessment,
}

impl AssessmentReport {
    /// Numeric categories without the narrative
    #[must_use]
    pub const fn scores(&self) -> CategoryScores {
        CategoryScores {
            physical: self.physical,
            technical: self.technical,
            performance: self.performance,
        }
    }
}
