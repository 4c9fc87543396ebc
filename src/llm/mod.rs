// ABOUTME: Model-facing text for the local language model collaborator
// ABOUTME: Builds the instruction prompts whose replies the intelligence module reconciles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! # Local Model Integration
//!
//! Invoking the model is left to the caller. This module only produces the
//! prompt text; the raw reply goes back through
//! [`crate::services::CoachingService`] for reconciliation.

/// Instruction prompts for plans and nutrition advice
pub mod prompts;

pub use prompts::{nutrition_prompt, training_plan_prompt};
