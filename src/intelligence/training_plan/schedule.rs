// ABOUTME: Weekly minute budget arithmetic for training schedules
// ABOUTME: Even distribution with a random remainder day, minute extraction and time validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use crate::constants::plan_labels::{DURATION_SEPARATOR, MINUTES_UNIT, NOTES_PREFIX};
use crate::models::{WeekDay, WeeklySchedule};

/// First embedded `N分钟` duration in a day entry
static MINUTES_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*分钟").ok());

/// Every `N天` figure in free text
static DAYS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(\d+)\s*天").ok());

/// How a weekly minute target is spread over seven days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinuteDistribution {
    /// Minutes every day receives (`target / 7`)
    pub base_minutes: u32,
    /// Leftover minutes (`target % 7`)
    pub remainder_minutes: u32,
    /// Day that absorbs the leftover minutes
    pub extra_day: WeekDay,
}

impl MinuteDistribution {
    /// Minutes scheduled for `day`
    #[must_use]
    pub const fn minutes_for(&self, day: WeekDay) -> u32 {
        if day.index() == self.extra_day.index() {
            self.base_minutes + self.remainder_minutes
        } else {
            self.base_minutes
        }
    }

    /// Sum over the week; always equals the target
    #[must_use]
    pub const fn total_minutes(&self) -> u32 {
        self.base_minutes * 7 + self.remainder_minutes
    }
}

/// Split `target_minutes` evenly over seven days
///
/// The remainder goes to one day drawn uniformly from the week. Exactly one
/// draw is taken from `rng`, also when the remainder is zero, so a seeded
/// source yields the same sequence regardless of the target.
pub fn distribute_minutes<R>(target_minutes: u32, rng: &mut R) -> MinuteDistribution
where
    R: Rng + ?Sized,
{
    let extra_day = WeekDay::from_index(rng.gen_range(0..7));
    let distribution = MinuteDistribution {
        base_minutes: target_minutes / 7,
        remainder_minutes: target_minutes % 7,
        extra_day,
    };
    debug!(
        "Distributing {target_minutes} weekly minutes: {} per day, +{} on {extra_day}",
        distribution.base_minutes, distribution.remainder_minutes
    );
    distribution
}

/// First embedded minute count in a day entry
#[must_use]
pub fn extract_minutes(entry: &str) -> Option<u32> {
    let pattern = MINUTES_PATTERN.as_ref()?;
    pattern
        .captures(entry)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Every whole `N分钟` figure in free text, in order
#[must_use]
pub fn minute_figures(text: &str) -> Vec<u32> {
    captured_numbers(MINUTES_PATTERN.as_ref(), text)
}

/// Every whole `N天` figure in free text, in order
#[must_use]
pub fn day_figures(text: &str) -> Vec<u32> {
    captured_numbers(DAYS_PATTERN.as_ref(), text)
}

fn captured_numbers(pattern: Option<&Regex>, text: &str) -> Vec<u32> {
    pattern.map_or_else(Vec::new, |pattern| {
        pattern
            .captures_iter(text)
            .filter_map(|captures| captures.get(1)?.as_str().parse().ok())
            .collect()
    })
}

/// Format a day entry as `"{activity}：{minutes}分钟"`
#[must_use]
pub fn format_entry(activity: &str, minutes: u32) -> String {
    format!("{activity}{DURATION_SEPARATOR}{minutes}{MINUTES_UNIT}")
}

/// Notes stating the seven-day cadence, the per-day base and the weekly total
#[must_use]
pub fn canonical_notes(distribution: &MinuteDistribution) -> String {
    format!(
        "{NOTES_PREFIX}每周训练7天，每天约{}{MINUTES_UNIT}，总训练时长{}{MINUTES_UNIT}",
        distribution.base_minutes,
        distribution.total_minutes()
    )
}

/// Time budget check over a finished schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleValidation {
    /// Sum of the first embedded minute count of every day
    pub total_minutes: u32,
    /// Weekly target
    pub target_minutes: u32,
    /// Days carrying a nonzero duration
    pub training_days: usize,
    /// `total - target`
    pub difference: i64,
    /// `total / target` as a rounded percentage
    pub percentage: u32,
    /// Total is positive, within tolerance and all seven days train
    pub is_valid: bool,
}

impl ScheduleValidation {
    /// Human-readable summary for logs
    #[must_use]
    pub fn message(&self) -> String {
        if self.is_valid {
            "训练时间合理".to_owned()
        } else {
            format!(
                "训练时间不合理：总时长{}分钟，目标时长{}分钟，差异{}分钟，训练天数{}天",
                self.total_minutes,
                self.target_minutes,
                self.difference.unsigned_abs(),
                self.training_days
            )
        }
    }
}

/// Check a schedule against the weekly target
#[must_use]
pub fn validate_schedule_time(
    schedule: &WeeklySchedule,
    target_minutes: u32,
    tolerance_minutes: u32,
) -> ScheduleValidation {
    let per_day: Vec<u32> = schedule
        .iter()
        .map(|(_, entry)| extract_minutes(entry).unwrap_or(0))
        .collect();

    let total_minutes = per_day
        .iter()
        .fold(0_u32, |sum, minutes| sum.saturating_add(*minutes));
    let training_days = per_day.iter().filter(|minutes| **minutes > 0).count();
    let difference = i64::from(total_minutes) - i64::from(target_minutes);
    let percentage = if target_minutes == 0 {
        0
    } else {
        (f64::from(total_minutes) / f64::from(target_minutes) * 100.0).round() as u32
    };

    ScheduleValidation {
        total_minutes,
        target_minutes,
        training_days,
        difference,
        percentage,
        is_valid: total_minutes > 0
            && difference.unsigned_abs() <= u64::from(tolerance_minutes)
            && training_days == WeekDay::ALL.len(),
    }
}

/// Build a fresh schedule cycling through `activities` with wraparound
///
/// `activities` must not be empty; callers substitute a generic list first.
#[must_use]
pub fn build_schedule(activities: &[String], distribution: &MinuteDistribution) -> WeeklySchedule {
    let mut schedule = WeeklySchedule::default();
    for day in WeekDay::ALL {
        let activity = activities
            .get(day.index() % activities.len().max(1))
            .map_or("", String::as_str);
        schedule.set(day, format_entry(activity, distribution.minutes_for(day)));
    }
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_extract_minutes_takes_first_match() {
        assert_eq!(extract_minutes("传球练习：45 分钟，拉伸10分钟"), Some(45));
        assert_eq!(extract_minutes("传球练习"), None);
        assert_eq!(extract_minutes("训练：X分钟"), None);
    }

    #[test]
    fn test_figures_are_whole_numbers() {
        assert_eq!(minute_figures("每天60分钟，总训练时长1420分钟"), vec![60, 1420]);
        assert_eq!(day_figures("每周训练17天"), vec![17]);
        assert!(minute_figures("注意补水").is_empty());
    }

    #[test]
    fn test_distribution_sums_to_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for target in [7, 300, 301, 419, 420, 1000] {
            let distribution = distribute_minutes(target, &mut rng);
            let total: u32 = WeekDay::ALL
                .iter()
                .map(|day| distribution.minutes_for(*day))
                .sum();
            assert_eq!(total, target);
            assert_eq!(distribution.total_minutes(), target);
        }
    }

    #[test]
    fn test_validation_requires_seven_days() {
        let mut schedule = WeeklySchedule::default();
        for day in WeekDay::ALL.iter().take(6) {
            schedule.set(*day, format_entry("体能训练", 70));
        }
        let validation = validate_schedule_time(&schedule, 420, 10);

        assert_eq!(validation.total_minutes, 420);
        assert_eq!(validation.training_days, 6);
        assert!(!validation.is_valid);
        assert!(validation.message().contains("训练天数6天"));
    }
}
