// ABOUTME: Main library entry point for the youth football coaching core
// ABOUTME: Reconciles local-model replies into validated training plans, nutrition advice and assessments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

// Crate-level attributes:
// - deny(unsafe_code): zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Academy Coach
//!
//! The coaching core of a youth football academy. A local language model is
//! asked for training plans and nutrition advice; its replies are often
//! malformed, padded with template filler or numerically wrong. This crate
//! turns whatever came back into a result that always satisfies the
//! invariants, falling back to deterministic generation when needed.
//!
//! ## Architecture
//!
//! - **Models**: inbound field records, profiles and the result types
//! - **Intelligence**: scoring, assessment, plan reconciliation, nutrition
//! - **LLM**: prompt builders for the model collaborator
//! - **Services**: `CoachingService` facade used by protocol handlers
//! - **Config**: thresholds and formula constants with env overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use academy_coach::config::CoachConfig;
//! use academy_coach::models::FieldRecord;
//! use academy_coach::services::CoachingService;
//! use academy_coach::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let service = CoachingService::new(CoachConfig::global());
//!     let request = FieldRecord::from_json_str(r#"{"goals":"射门技术","availableTime":"5"}"#)?;
//!     let plan = service.training_plan(&request, None, &mut rand::thread_rng());
//!     println!("{}", plan.notes);
//!     Ok(())
//! }
//! ```

/// Configuration management and environment overrides
pub mod config;

/// Application constants and fallback labels
pub mod constants;

/// Unified error handling
pub mod errors;

/// Scoring, assessment, training plan and nutrition intelligence
pub mod intelligence;

/// Prompt builders for the local model
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Core data models
pub mod models;

/// Domain service layer
pub mod services;
