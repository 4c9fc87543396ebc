// ABOUTME: Domain service layer wrapping the coaching core for protocol handlers
// ABOUTME: Converts inbound request records into profiles and returns reconciled results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! Domain service layer
//!
//! Protocol-agnostic business logic. Route handlers, the CLI and tests all go
//! through the same service so fallbacks behave identically everywhere.

/// Training plan, nutrition and assessment facade
pub mod coaching;

pub use coaching::CoachingService;
