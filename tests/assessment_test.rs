// ABOUTME: Integration tests for the assessment aggregator
// ABOUTME: Covers objective, subjective and comprehensive modes plus the narrative summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use academy_coach::config::intelligence::{AssessmentThresholds, ScoringConfig};
use academy_coach::intelligence::assessment::{
    combine_assessments, overall_assessment, AssessmentAggregator, AssessmentMode,
    FixedPositionFit, PositionFit, PositionFitEstimator, QualitativeAnalyzer,
};
use academy_coach::intelligence::scoring_engine::score_objective;
use academy_coach::models::{CategoryScores, FieldRecord, Potential};
use serde_json::json;

mod common;

use common::record;

fn aggregator() -> AssessmentAggregator {
    common::init_test_logging();
    AssessmentAggregator::new(&ScoringConfig::default())
}

fn strong_request() -> FieldRecord {
    record(json!({
        "physical": { "sprint30m": 4.5, "run12min": 2000, "longJump": 200 },
        "skills": { "juggling": 50, "shortPass": 100, "shootingAccuracy": 100 },
        "match": { "goals": 10, "passRate": 100 },
    }))
}

// ============================================================================
// MODES
// ============================================================================

#[test]
fn test_mode_parse() {
    assert_eq!(AssessmentMode::parse("objective"), AssessmentMode::Objective);
    assert_eq!(AssessmentMode::parse("Subjective"), AssessmentMode::Subjective);
    assert_eq!(AssessmentMode::parse("video"), AssessmentMode::Subjective);
    assert_eq!(AssessmentMode::parse("comprehensive"), AssessmentMode::Comprehensive);
    assert_eq!(AssessmentMode::parse("综合评估"), AssessmentMode::Comprehensive);
    assert_eq!(AssessmentMode::parse("unheard-of"), AssessmentMode::Objective);
}

#[test]
fn test_objective_without_metrics_is_neutral() {
    let report = aggregator().assess(AssessmentMode::Objective, &FieldRecord::default());

    assert_eq!(report.physical.overall, 72);
    assert_eq!(report.technical.overall, 74);
    assert_eq!(report.performance.overall, 72);
    assert_eq!(report.overall.score, 73);
    assert_eq!(report.overall.potential, Potential::Medium);
    assert_eq!(report.overall.strengths, vec!["基础条件良好"]);
    assert_eq!(report.overall.weaknesses, vec!["各方面均衡发展"]);
    assert_eq!(report.overall.improvements, vec!["继续保持训练"]);
}

#[test]
fn test_subjective_mode_ignores_metrics() {
    let report = aggregator().assess(AssessmentMode::Subjective, &strong_request());
    let baseline = aggregator().assess(AssessmentMode::Objective, &FieldRecord::default());
    assert_eq!(report, baseline);
}

#[test]
fn test_comprehensive_averages_leaves() {
    let request = record(json!({ "physical": { "sprint30m": 5.0 } }));
    let report = aggregator().assess(AssessmentMode::Comprehensive, &request);

    // objective 90 / baseline 75
    assert_eq!(report.physical.speed, 83);
    // objective overall 77 / baseline 72
    assert_eq!(report.physical.overall, 75);
    assert!(report.overall.strengths.contains(&"体能素质优秀".to_owned()));
}

#[test]
fn test_combine_assessments_is_pairwise_mean() {
    let config = ScoringConfig::default();
    let strong = score_objective(&strong_request(), &config.neutral);
    let neutral = score_objective(&FieldRecord::default(), &config.neutral);
    let combined = combine_assessments(&strong, &neutral);

    assert_eq!(combined.physical.speed, 88);
    assert_eq!(combined.performance.defense, 68);
    assert_eq!(combine_assessments(&neutral, &neutral), neutral);
}

// ============================================================================
// NARRATIVE
// ============================================================================

#[test]
fn test_strong_player_has_high_potential() {
    let report = aggregator().assess(AssessmentMode::Objective, &strong_request());

    assert_eq!(report.physical.overall, 100);
    assert_eq!(report.technical.overall, 100);
    assert_eq!(report.performance.overall, 89);
    assert_eq!(report.overall.score, 96);
    assert_eq!(report.overall.potential, Potential::High);
    assert_eq!(
        report.overall.strengths,
        vec!["体能素质优秀", "技术基础扎实", "比赛表现良好"]
    );
    assert_eq!(report.overall.weaknesses, vec!["各方面均衡发展"]);
}

#[test]
fn test_weak_category_yields_weakness_and_improvement() {
    let request = record(json!({
        "physical": { "sprint30m": 7.0, "run12min": 1000, "longJump": 100 },
    }));
    let report = aggregator().assess(AssessmentMode::Objective, &request);

    assert_eq!(report.physical.overall, 50);
    assert_eq!(report.overall.weaknesses, vec!["体能需要提升"]);
    assert_eq!(report.overall.improvements, vec!["加强体能训练"]);
    assert_eq!(report.overall.score, 65);
    assert_eq!(report.overall.potential, Potential::Low);
}

#[test]
fn test_report_serializes_camel_case() {
    let report = aggregator().assess(AssessmentMode::Objective, &FieldRecord::default());
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["technical"]["ballControl"], 78);
    assert_eq!(value["overall"]["positionFit"], 80);
    assert_eq!(value["overall"]["potential"], "medium");
    assert!(value["overall"]["positionSuggestions"].is_array());
}

// ============================================================================
// PLUGGABLE ANALYZERS
// ============================================================================

struct FixedScores(CategoryScores);

impl QualitativeAnalyzer for FixedScores {
    fn analyze(&self, _subjective: &FieldRecord, _basic: &FieldRecord) -> CategoryScores {
        self.0
    }
}

struct PositionFromBasic;

impl PositionFitEstimator for PositionFromBasic {
    fn estimate(&self, _scores: &CategoryScores, basic: &FieldRecord) -> PositionFit {
        let position = basic.text("position").unwrap_or_default();
        PositionFit {
            fit: 90,
            suggestions: vec![format!("适合{position}")],
        }
    }
}

#[test]
fn test_custom_analyzers_are_used() {
    let config = ScoringConfig::default();
    let strong = score_objective(&strong_request(), &config.neutral);
    let aggregator = AssessmentAggregator::with_analyzers(
        &config,
        FixedScores(strong),
        PositionFromBasic,
    );
    let request = record(json!({ "basic": { "position": "前锋" } }));
    let report = aggregator.assess(AssessmentMode::Subjective, &request);

    assert_eq!(report.scores(), strong);
    assert_eq!(report.overall.position_fit, 90);
    assert_eq!(report.overall.position_suggestions, vec!["适合前锋"]);
}

#[test]
fn test_fixed_position_fit_default() {
    let thresholds = AssessmentThresholds::default();
    let scores = score_objective(&FieldRecord::default(), &ScoringConfig::default().neutral);
    let overall = overall_assessment(
        &scores,
        &thresholds,
        FixedPositionFit::default().estimate(&scores, &FieldRecord::default()),
    );

    assert_eq!(overall.position_fit, 80);
    assert_eq!(overall.position_suggestions, vec!["当前位置适配度良好"]);
    assert_eq!(overall.recommendations.len(), 2);
}
