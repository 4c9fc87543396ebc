// ABOUTME: Weekly training plan configuration for time budget enforcement
// ABOUTME: Default weekly hours, total-minute tolerance and minimum day-entry length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! Training plan configuration.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Training plan reconciliation and generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Weekly hours assumed when the caller sends none (or a non-positive value)
    pub default_weekly_hours: f64,
    /// Maximum allowed distance between scheduled and target weekly minutes
    pub tolerance_minutes: u32,
    /// Day entries shorter than this (in characters) are treated as missing
    pub min_entry_chars: usize,
    /// Floor for the weekly target so every day can carry a nonzero duration
    pub min_weekly_minutes: u32,
}

impl PlanningConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_weekly_hours.is_finite() || self.default_weekly_hours <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_weekly_hours must be positive",
            ));
        }
        if self.tolerance_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "tolerance_minutes must be at least 1",
            ));
        }
        if self.min_weekly_minutes < 7 {
            return Err(ConfigError::ValueOutOfRange(
                "min_weekly_minutes must allow one minute per day",
            ));
        }
        Ok(())
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            default_weekly_hours: 5.0,
            tolerance_minutes: 10,
            min_entry_chars: 5,
            min_weekly_minutes: 7,
        }
    }
}
