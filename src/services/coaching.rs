// ABOUTME: Coaching service facade taking raw request records and optional model replies
// ABOUTME: Builds profiles, prompts and reconciled results for plans, nutrition and assessments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

use rand::Rng;
use tracing::{info, instrument};

use crate::config::intelligence::CoachConfig;
use crate::intelligence::assessment::{AssessmentAggregator, AssessmentMode};
use crate::intelligence::nutrition_calculator::reconcile_nutrition_advice;
use crate::intelligence::training_plan::reconcile_training_plan;
use crate::llm::prompts::{nutrition_prompt, training_plan_prompt};
use crate::models::{
    AssessmentReport, FieldRecord, NutritionAdvice, NutritionProfile, PlayerProfile, TrainingPlan,
};

/// Protocol-agnostic entry point for the coaching core
///
/// The HTTP layer hands over the request body as a [`FieldRecord`] and, when
/// the local model was consulted, its raw reply. Every operation returns a
/// complete result; a missing or broken reply only changes where the content
/// comes from.
#[derive(Debug, Clone)]
pub struct CoachingService {
    config: CoachConfig,
    assessor: AssessmentAggregator,
}

impl Default for CoachingService {
    fn default() -> Self {
        Self::new(CoachConfig::global())
    }
}

impl CoachingService {
    /// Service bound to a configuration snapshot
    #[must_use]
    pub fn new(config: &CoachConfig) -> Self {
        Self {
            assessor: AssessmentAggregator::new(&config.scoring),
            config: config.clone(),
        }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &CoachConfig {
        &self.config
    }

    /// Prompt to send to the model for a training plan request
    #[must_use]
    pub fn training_plan_prompt(&self, request: &FieldRecord) -> String {
        training_plan_prompt(&PlayerProfile::from_record(request), &self.config.planning)
    }

    /// Reconciled seven-day plan for a training plan request
    #[instrument(skip_all, fields(service = "training_plan", has_reply = reply.is_some()))]
    pub fn training_plan<R>(
        &self,
        request: &FieldRecord,
        reply: Option<&str>,
        rng: &mut R,
    ) -> TrainingPlan
    where
        R: Rng + ?Sized,
    {
        let profile = PlayerProfile::from_record(request);
        let plan = reconcile_training_plan(reply, &profile, &self.config.planning, rng);
        info!(
            "Training plan ready: {} goals, {} focus areas",
            plan.training_goals.len(),
            plan.focus_areas.len()
        );
        plan
    }

    /// Prompt to send to the model for a nutrition request
    #[must_use]
    pub fn nutrition_prompt(&self, request: &FieldRecord) -> String {
        nutrition_prompt(
            &NutritionProfile::from_record(request),
            &self.config.nutrition,
        )
    }

    /// Reconciled nutrition advice for a nutrition request
    #[instrument(skip_all, fields(service = "nutrition", has_reply = reply.is_some()))]
    #[must_use]
    pub fn nutrition_advice(&self, request: &FieldRecord, reply: Option<&str>) -> NutritionAdvice {
        let profile = NutritionProfile::from_record(request);
        let advice = reconcile_nutrition_advice(reply, &profile, &self.config.nutrition);
        info!("Nutrition advice ready: {}", advice.daily_calories);
        advice
    }

    /// Assessment report for a request carrying metric and questionnaire records
    ///
    /// The mode is read from `assessmentType`; an absent field means comprehensive.
    #[instrument(skip_all, fields(service = "assessment"))]
    #[must_use]
    pub fn player_assessment(&self, request: &FieldRecord) -> AssessmentReport {
        let mode = request
            .text("assessmentType")
            .map_or(AssessmentMode::Comprehensive, |label| {
                AssessmentMode::parse(&label)
            });
        self.assessor.assess(mode, request)
    }
}
