// ABOUTME: Weekly training plan model with a fixed seven-day schedule
// ABOUTME: Day keys, day-key aliases and camelCase serialization for the HTTP layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

use super::profile::TrainingIntensity;

/// Days of the training week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl WeekDay {
    /// All days in schedule order
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Schedule key as serialized
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Zero-based position in the week
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Day at a zero-based position, wrapping past Sunday
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }

    /// Accept English keys, three-letter abbreviations and Chinese day names
    #[must_use]
    pub fn parse_key(key: &str) -> Option<Self> {
        let day = match key.trim().to_lowercase().as_str() {
            "monday" | "mon" | "周一" | "星期一" => Self::Monday,
            "tuesday" | "tue" | "tues" | "周二" | "星期二" => Self::Tuesday,
            "wednesday" | "wed" | "周三" | "星期三" => Self::Wednesday,
            "thursday" | "thu" | "thur" | "thurs" | "周四" | "星期四" => Self::Thursday,
            "friday" | "fri" | "周五" | "星期五" => Self::Friday,
            "saturday" | "sat" | "周六" | "星期六" => Self::Saturday,
            "sunday" | "sun" | "周日" | "周天" | "星期日" | "星期天" => Self::Sunday,
            _ => return None,
        };
        Some(day)
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One description per day, each carrying an embedded `N分钟` duration once finalized
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Monday entry
    pub monday: String,
    /// Tuesday entry
    pub tuesday: String,
    /// Wednesday entry
    pub wednesday: String,
    /// Thursday entry
    pub thursday: String,
    /// Friday entry
    pub friday: String,
    /// Saturday entry
    pub saturday: String,
    /// Sunday entry
    pub sunday: String,
}

impl WeeklySchedule {
    /// Entry for a day
    #[must_use]
    pub fn get(&self, day: WeekDay) -> &str {
        match day {
            WeekDay::Monday => &self.monday,
            WeekDay::Tuesday => &self.tuesday,
            WeekDay::Wednesday => &self.wednesday,
            WeekDay::Thursday => &self.thursday,
            WeekDay::Friday => &self.friday,
            WeekDay::Saturday => &self.saturday,
            WeekDay::Sunday => &self.sunday,
        }
    }

    /// Replace the entry for a day
    pub fn set(&mut self, day: WeekDay, entry: String) {
        let slot = match day {
            WeekDay::Monday => &mut self.monday,
            WeekDay::Tuesday => &mut self.tuesday,
            WeekDay::Wednesday => &mut self.wednesday,
            WeekDay::Thursday => &mut self.thursday,
            WeekDay::Friday => &mut self.friday,
            WeekDay::Saturday => &mut self.saturday,
            WeekDay::Sunday => &mut self.sunday,
        };
        *slot = entry;
    }

    /// Days paired with their entries, Monday first
    pub fn iter(&self) -> impl Iterator<Item = (WeekDay, &str)> {
        WeekDay::ALL.into_iter().map(move |day| (day, self.get(day)))
    }
}

/// A finalized weekly training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    /// Goals the plan works toward, in priority order
    pub training_goals: Vec<String>,
    /// Seven populated day entries
    pub weekly_schedule: WeeklySchedule,
    /// Areas the week concentrates on
    pub focus_areas: Vec<String>,
    /// Overall intensity label
    pub intensity: TrainingIntensity,
    /// Player-specific advice sentences
    pub special_advice: Vec<String>,
    /// Cadence and total-minute summary
    pub notes: String,
}
