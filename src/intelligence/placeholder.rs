// ABOUTME: Denylist detection of template placeholder text in model replies
// ABOUTME: Separate rules for training plan fields and nutrition advice fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! Placeholder detection.
//!
//! The local model frequently echoes the JSON template it was shown
//! (`"具体专项1"`, `"训练前饮食建议"`, `"X分钟"`) instead of writing real
//! content. These checks decide, one string at a time, whether a field must be
//! replaced before the result leaves the core.

use regex::Regex;
use std::sync::LazyLock;

/// Template fragments the training plan prompt shows the model
const PLAN_PLACEHOLDER_PATTERNS: &[&str] = &[
    "具体目标",
    "重点专项",
    "具体专项",
    "专项建议",
    "具体建议",
    "具体训练内容",
    "训练内容：x",
    "x分钟",
    "placeholder",
    "todo",
];

/// Template fragments the nutrition prompt shows the model
const NUTRITION_PLACEHOLDER_PATTERNS: &[&str] = &[
    "训练前饮食建议",
    "训练后饮食建议",
    "饮食禁忌建议",
    "注意事项",
    "补充剂1",
    "补充剂2",
    "早餐建议",
    "午餐建议",
    "晚餐建议",
    "未指定",
    "xxxx",
    "xxg",
];

/// Bare labels that carry no advice on their own
const NUTRITION_BARE_LABELS: &[&str] = &["无", "低强度", "中等强度", "高强度", "未知"];

/// Bare numbered items such as `"goal 1"` or `"目标2"`; the whole string must match
static NUMBERED_PLACEHOLDER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:goal|focus|advice|item)\s*[1-9]|(?:具体)?(?:目标|专项|建议)\s*[1-9１-９])$")
        .ok()
});

/// Minimum characters for a nutrition text field to count as content
const MIN_NUTRITION_TEXT_CHARS: usize = 8;

/// Whether a plan string is template filler rather than content
///
/// Empty and whitespace-only strings count as placeholders.
#[must_use]
pub fn is_placeholder(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }

    let lower = trimmed.to_lowercase();
    if PLAN_PLACEHOLDER_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
    {
        return true;
    }

    NUMBERED_PLACEHOLDER
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(trimmed))
}

/// Whether a nutrition text field must be replaced
///
/// Too-short text, bare labels and echoed template names are all rejected.
/// Real advice routinely contains the word `建议`, so it is not on the list.
#[must_use]
pub fn is_nutrition_placeholder(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_NUTRITION_TEXT_CHARS {
        return true;
    }
    is_nutrition_item_placeholder(trimmed)
}

/// Whether a list item (supplement, menu line) is template filler
///
/// List items are short by nature, so no length rule applies.
#[must_use]
pub fn is_nutrition_item_placeholder(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() || NUTRITION_BARE_LABELS.contains(&trimmed) {
        return true;
    }

    let lower = trimmed.to_lowercase();
    NUTRITION_PLACEHOLDER_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
        || is_placeholder(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_items_are_placeholders() {
        assert!(is_placeholder("Goal 2"));
        assert!(is_placeholder("目标3"));
        assert!(!is_placeholder("goalkeeper drills"));
    }

    #[test]
    fn test_numbers_inside_real_content_are_kept() {
        assert!(!is_placeholder("建议3组短传后加一组长传"));
        assert!(!is_placeholder("专项1对1突破"));
        assert!(!is_placeholder("goal 1 is finishing with the weaker foot"));
    }

    #[test]
    fn test_template_minutes_are_placeholders() {
        assert!(is_placeholder("具体训练内容：X分钟"));
        assert!(!is_placeholder("传球练习：60分钟"));
    }

    #[test]
    fn test_list_items_have_no_length_rule() {
        assert!(!is_nutrition_item_placeholder("钙片"));
        assert!(is_nutrition_item_placeholder("补充剂1"));
        assert!(is_nutrition_placeholder("钙片"));
    }
}
