// ABOUTME: Player assessment aggregation across objective metrics and qualitative input
// ABOUTME: Combines category scores and derives strengths, weaknesses and potential
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! Assessment Aggregator
//!
//! Three modes feed one report:
//!
//! - `objective`: the scoring engine over `physical`, `skills` and `match`
//! - `subjective`: a [`QualitativeAnalyzer`] over video and coach notes
//! - `comprehensive`: both, averaged leaf by leaf
//!
//! Qualitative analysis and position fit sit behind traits. The shipped
//! implementations return neutral baselines until real analyzers exist.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::scoring_engine::score_objective;
use crate::config::intelligence::{AssessmentThresholds, NeutralScores, ScoringConfig};
use crate::constants::assessment_labels;
use crate::models::{
    AssessmentReport, CategoryScores, FieldRecord, OverallAssessment, PerformanceScores,
    PhysicalScores, Potential, TechnicalScores,
};

/// Which inputs an assessment draws on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentMode {
    /// Measured metrics only
    Objective,
    /// Video and notes only
    Subjective,
    /// Both, averaged
    #[default]
    Comprehensive,
}

impl AssessmentMode {
    /// Parse a mode label; anything unrecognized scores objectively
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "subjective" | "video" | "视频数据评估" => Self::Subjective,
            "comprehensive" | "综合评估" => Self::Comprehensive,
            _ => Self::Objective,
        }
    }

    const fn uses_metrics(self) -> bool {
        matches!(self, Self::Objective | Self::Comprehensive)
    }

    const fn uses_qualitative(self) -> bool {
        matches!(self, Self::Subjective | Self::Comprehensive)
    }
}

impl fmt::Display for AssessmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Objective => "objective",
            Self::Subjective => "subjective",
            Self::Comprehensive => "comprehensive",
        };
        f.write_str(label)
    }
}

/// Turns qualitative input (video observations, coach notes) into category scores
pub trait QualitativeAnalyzer {
    /// Score the `subjective` record in the context of the `basic` player record
    fn analyze(&self, subjective: &FieldRecord, basic: &FieldRecord) -> CategoryScores;
}

/// Qualitative analyzer that reports the neutral baseline for every input
#[derive(Debug, Clone, Default)]
pub struct BaselineQualitativeAnalyzer {
    neutral: NeutralScores,
}

impl BaselineQualitativeAnalyzer {
    /// Baseline built from configured neutral scores
    #[must_use]
    pub const fn new(neutral: NeutralScores) -> Self {
        Self { neutral }
    }
}

impl QualitativeAnalyzer for BaselineQualitativeAnalyzer {
    fn analyze(&self, _subjective: &FieldRecord, _basic: &FieldRecord) -> CategoryScores {
        score_objective(&FieldRecord::default(), &self.neutral)
    }
}

/// Position fit result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionFit {
    /// Fit for the current position, 0-100
    pub fit: u8,
    /// Position advice
    pub suggestions: Vec<String>,
}

/// Estimates how well a player suits their position
pub trait PositionFitEstimator {
    /// Estimate from category scores and the `basic` player record
    fn estimate(&self, scores: &CategoryScores, basic: &FieldRecord) -> PositionFit;
}

/// Position fit estimator returning one fixed value and a generic suggestion
#[derive(Debug, Clone)]
pub struct FixedPositionFit {
    fit: u8,
}

impl FixedPositionFit {
    /// Fixed estimator reporting `fit` for everyone
    #[must_use]
    pub const fn new(fit: u8) -> Self {
        Self { fit }
    }
}

impl Default for FixedPositionFit {
    fn default() -> Self {
        Self::new(AssessmentThresholds::default().placeholder_position_fit)
    }
}

impl PositionFitEstimator for FixedPositionFit {
    fn estimate(&self, _scores: &CategoryScores, _basic: &FieldRecord) -> PositionFit {
        PositionFit {
            fit: self.fit,
            suggestions: vec![assessment_labels::POSITION_SUGGESTION.to_owned()],
        }
    }
}

/// Builds assessment reports from request records
#[derive(Debug, Clone)]
pub struct AssessmentAggregator<Q = BaselineQualitativeAnalyzer, P = FixedPositionFit> {
    config: ScoringConfig,
    qualitative: Q,
    position_fit: P,
}

impl AssessmentAggregator {
    /// Aggregator with baseline qualitative analysis and fixed position fit
    #[must_use]
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            qualitative: BaselineQualitativeAnalyzer::new(config.neutral.clone()),
            position_fit: FixedPositionFit::new(config.thresholds.placeholder_position_fit),
            config: config.clone(),
        }
    }
}

impl<Q: QualitativeAnalyzer, P: PositionFitEstimator> AssessmentAggregator<Q, P> {
    /// Aggregator with custom analyzers
    #[must_use]
    pub fn with_analyzers(config: &ScoringConfig, qualitative: Q, position_fit: P) -> Self {
        Self {
            config: config.clone(),
            qualitative,
            position_fit,
        }
    }

    /// Assess a request carrying `basic`, `physical`, `skills`, `match` and `subjective` records
    ///
    /// Never fails; malformed metrics are treated as absent.
    #[must_use]
    pub fn assess(&self, mode: AssessmentMode, request: &FieldRecord) -> AssessmentReport {
        let basic = request.record("basic");

        let objective = mode
            .uses_metrics()
            .then(|| score_objective(request, &self.config.neutral));
        let qualitative = mode
            .uses_qualitative()
            .then(|| self.qualitative.analyze(&request.record("subjective"), &basic));

        let scores = match (objective, qualitative) {
            (Some(objective), Some(qualitative)) => combine_assessments(&objective, &qualitative),
            (Some(scores), None) | (None, Some(scores)) => scores,
            (None, None) => score_objective(&FieldRecord::default(), &self.config.neutral),
        };

        let position_fit = self.position_fit.estimate(&scores, &basic);
        let overall = overall_assessment(&scores, &self.config.thresholds, position_fit);
        debug!(
            "Assessed player in {mode} mode: overall {} ({:?})",
            overall.score, overall.potential
        );

        AssessmentReport {
            physical: scores.physical,
            technical: scores.technical,
            performance: scores.performance,
            overall,
        }
    }
}

fn average_pair(a: u8, b: u8) -> u8 {
    ((f64::from(a) + f64::from(b)) / 2.0).round() as u8
}

/// Average two assessments leaf by leaf, overalls included
#[must_use]
pub fn combine_assessments(objective: &CategoryScores, subjective: &CategoryScores) -> CategoryScores {
    let (op, sp) = (&objective.physical, &subjective.physical);
    let (ot, st) = (&objective.technical, &subjective.technical);
    let (om, sm) = (&objective.performance, &subjective.performance);

    CategoryScores {
        physical: PhysicalScores {
            speed: average_pair(op.speed, sp.speed),
            endurance: average_pair(op.endurance, sp.endurance),
            strength: average_pair(op.strength, sp.strength),
            overall: average_pair(op.overall, sp.overall),
        },
        technical: TechnicalScores {
            ball_control: average_pair(ot.ball_control, st.ball_control),
            passing: average_pair(ot.passing, st.passing),
            shooting: average_pair(ot.shooting, st.shooting),
            overall: average_pair(ot.overall, st.overall),
        },
        performance: PerformanceScores {
            attack: average_pair(om.attack, sm.attack),
            defense: average_pair(om.defense, sm.defense),
            teamwork: average_pair(om.teamwork, sm.teamwork),
            overall: average_pair(om.overall, sm.overall),
        },
    }
}

/// Narrative summary from category overalls
///
/// Each category is judged independently: at or above `strength_min` it is a
/// strength, below `weakness_below` it is a weakness with a matching
/// improvement. Empty lists receive one fallback entry.
#[must_use]
pub fn overall_assessment(
    scores: &CategoryScores,
    thresholds: &AssessmentThresholds,
    position_fit: PositionFit,
) -> OverallAssessment {
    let categories = [
        (
            scores.physical.overall,
            assessment_labels::PHYSICAL_STRENGTH,
            assessment_labels::PHYSICAL_WEAKNESS,
            assessment_labels::PHYSICAL_IMPROVEMENT,
        ),
        (
            scores.technical.overall,
            assessment_labels::TECHNICAL_STRENGTH,
            assessment_labels::TECHNICAL_WEAKNESS,
            assessment_labels::TECHNICAL_IMPROVEMENT,
        ),
        (
            scores.performance.overall,
            assessment_labels::PERFORMANCE_STRENGTH,
            assessment_labels::PERFORMANCE_WEAKNESS,
            assessment_labels::PERFORMANCE_IMPROVEMENT,
        ),
    ];

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut improvements = Vec::new();
    for (overall, strength, weakness, improvement) in categories {
        if overall >= thresholds.strength_min {
            strengths.push(strength.to_owned());
        }
        if overall < thresholds.weakness_below {
            weaknesses.push(weakness.to_owned());
            improvements.push(improvement.to_owned());
        }
    }

    if strengths.is_empty() {
        strengths.push(assessment_labels::FALLBACK_STRENGTH.to_owned());
    }
    if weaknesses.is_empty() {
        weaknesses.push(assessment_labels::FALLBACK_WEAKNESS.to_owned());
    }
    if improvements.is_empty() {
        improvements.push(assessment_labels::FALLBACK_IMPROVEMENT.to_owned());
    }

    let sum = u32::from(scores.physical.overall)
        + u32::from(scores.technical.overall)
        + u32::from(scores.performance.overall);
    let score = (f64::from(sum) / 3.0).round() as u8;

    OverallAssessment {
        score,
        strengths,
        weaknesses,
        improvements,
        potential: potential_for(score, thresholds),
        position_fit: position_fit.fit,
        position_suggestions: position_fit.suggestions,
        recommendations: assessment_labels::RECOMMENDATIONS
            .iter()
            .map(|item| (*item).to_owned())
            .collect(),
    }
}

const fn potential_for(score: u8, thresholds: &AssessmentThresholds) -> Potential {
    if score >= thresholds.potential_high_min {
        Potential::High
    } else if score >= thresholds.potential_medium_min {
        Potential::Medium
    } else {
        Potential::Low
    }
}
