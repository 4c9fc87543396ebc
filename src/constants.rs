// ABOUTME: System-wide constants for the coaching core
// ABOUTME: Service names, fixed fallback labels and the duration unit used in schedules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! # Constants Module
//!
//! Fixed strings shared by the plan reconciler, the default plan generator,
//! the nutrition calculator and the assessment aggregator. User-facing text is
//! Chinese because the academy front end and the local model both work in it.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Service name reported by the logging setup
    pub const ACADEMY_COACH: &str = "academy-coach";
}

/// Labels and fallback content for weekly training plans
pub mod plan_labels {
    /// Unit suffix for embedded durations (`"传球练习：60分钟"`)
    pub const MINUTES_UNIT: &str = "分钟";

    /// Full-width colon between a drill and its duration
    pub const DURATION_SEPARATOR: &str = "：";

    /// Full-width semicolon joining list-shaped notes
    pub const NOTES_SEPARATOR: &str = "；";

    /// Token used when the player gave neither goals nor a position
    pub const COMPREHENSIVE_TRAINING: &str = "综合训练";

    /// Goal assumed by the default generator when none is given
    pub const BASIC_SKILLS_GOAL: &str = "提升基础技能";

    /// Focus area used when a placeholder cannot be derived from the profile
    pub const BASIC_SKILLS_FOCUS: &str = "基础技能训练";

    /// Advice used when a placeholder cannot be derived from the profile
    pub const STEADY_PROGRESS_ADVICE: &str = "保持训练规律，循序渐进";

    /// Drill cycle used when no goal or position produced any drills
    pub const GENERIC_DRILLS: [&str; 5] = ["基础技术训练", "体能训练", "战术训练", "技能练习", "团队配合"];

    /// Prefix every normalized notes string starts with
    pub const NOTES_PREFIX: &str = "训练计划：";
}

/// Narrative strings for the overall assessment
pub mod assessment_labels {
    /// Physical category is a strength
    pub const PHYSICAL_STRENGTH: &str = "体能素质优秀";
    /// Technical category is a strength
    pub const TECHNICAL_STRENGTH: &str = "技术基础扎实";
    /// Match performance is a strength
    pub const PERFORMANCE_STRENGTH: &str = "比赛表现良好";

    /// Physical category is a weakness
    pub const PHYSICAL_WEAKNESS: &str = "体能需要提升";
    /// Technical category is a weakness
    pub const TECHNICAL_WEAKNESS: &str = "技术有待提高";
    /// Match performance is a weakness
    pub const PERFORMANCE_WEAKNESS: &str = "比赛经验不足";

    /// Improvement for a weak physical category
    pub const PHYSICAL_IMPROVEMENT: &str = "加强体能训练";
    /// Improvement for a weak technical category
    pub const TECHNICAL_IMPROVEMENT: &str = "加强技术训练";
    /// Improvement for weak match performance
    pub const PERFORMANCE_IMPROVEMENT: &str = "增加比赛机会";

    /// Fallback strength ("good baseline")
    pub const FALLBACK_STRENGTH: &str = "基础条件良好";
    /// Fallback weakness ("balanced development")
    pub const FALLBACK_WEAKNESS: &str = "各方面均衡发展";
    /// Fallback improvement ("keep training")
    pub const FALLBACK_IMPROVEMENT: &str = "继续保持训练";

    /// Generic position suggestion while position fit is a stub
    pub const POSITION_SUGGESTION: &str = "当前位置适配度良好";

    /// Standing recommendations attached to every report
    pub const RECOMMENDATIONS: [&str; 2] = ["继续加强基础训练", "参加更多比赛积累经验"];
}
