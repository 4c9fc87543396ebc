// ABOUTME: Criterion benchmarks for the coaching core reconcilers
// ABOUTME: Measures plan reconciliation, default generation, nutrition repair and assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! Criterion benchmarks for the coaching core.
//!
//! Replies are fixed strings so the numbers reflect parsing, placeholder
//! screening and repair, not model latency.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use academy_coach::config::CoachConfig;
use academy_coach::intelligence::assessment::{AssessmentAggregator, AssessmentMode};
use academy_coach::intelligence::{
    generate_default_plan, reconcile_nutrition_advice, reconcile_training_plan,
};
use academy_coach::models::{FieldRecord, NutritionProfile, PlayerProfile};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

fn player(hours: f64) -> PlayerProfile {
    PlayerProfile::from_record(&FieldRecord::from_value(json!({
        "age": 12,
        "level": "中级",
        "goals": "传球技术、射门技术，体能",
        "specialGoals": "前锋",
        "availableTime": hours,
    })))
}

fn valid_plan_reply() -> String {
    json!({
        "trainingGoals": ["提升传球准确性", "增强射门力量"],
        "weeklySchedule": {
            "monday": "传球练习：60分钟",
            "tuesday": "射门练习：60分钟",
            "wednesday": "体能训练：60分钟",
            "thursday": "跑位训练：60分钟",
            "friday": "进攻配合：60分钟",
            "saturday": "对抗赛：60分钟",
            "sunday": "恢复性慢跑与拉伸：60分钟"
        },
        "intensity": "中等",
        "focusAreas": ["射门技巧"],
        "specialAdvice": ["加强无球跑动"],
        "notes": "每周训练7天，总训练时长420分钟"
    })
    .to_string()
}

fn echoed_plan_reply() -> String {
    json!({
        "trainingGoals": ["具体目标1", "具体目标2"],
        "weeklySchedule": { "monday": "具体训练内容：X分钟" },
        "focusAreas": ["具体专项1"],
        "specialAdvice": ["具体建议1"],
        "notes": "注意事项"
    })
    .to_string()
}

fn bench_training_plan(c: &mut Criterion) {
    let config = CoachConfig::default();
    let profile = player(7.0);
    let replies = [
        ("valid", Some(valid_plan_reply())),
        ("echoed_template", Some(echoed_plan_reply())),
        ("prose", Some("好的，这是您的训练计划".to_owned())),
        ("none", None),
    ];

    let mut group = c.benchmark_group("training_plan_reconcile");
    for (label, reply) in &replies {
        group.bench_with_input(BenchmarkId::from_parameter(label), reply, |b, reply| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                reconcile_training_plan(
                    black_box(reply.as_deref()),
                    &profile,
                    &config.planning,
                    &mut rng,
                )
            });
        });
    }
    group.finish();
}

fn bench_default_plan(c: &mut Criterion) {
    let config = CoachConfig::default();

    let mut group = c.benchmark_group("default_plan");
    for hours in [1.0, 5.5, 10.0] {
        let profile = player(hours);
        group.bench_with_input(BenchmarkId::from_parameter(hours), &profile, |b, profile| {
            let mut rng = ChaCha8Rng::seed_from_u64(11);
            b.iter(|| generate_default_plan(black_box(profile), &config.planning, &mut rng));
        });
    }
    group.finish();
}

fn bench_nutrition(c: &mut Criterion) {
    let config = CoachConfig::default();
    let profile = NutritionProfile::from_record(&FieldRecord::from_value(json!({
        "age": 12, "weight": 45, "height": 150, "gender": "女", "intensity": "中等强度", "duration": 5,
    })));
    let canned = json!({
        "dailyCalories": "1200kcal",
        "macronutrients": { "protein": "xxg", "carbs": "xxg", "fats": "xxg" },
        "preTraining": "训练前饮食建议",
        "supplements": ["补充剂1"],
        "sampleMenu": ["早餐建议", "午餐建议", "晚餐建议"],
    })
    .to_string();

    let mut group = c.benchmark_group("nutrition_reconcile");
    group.bench_function("canned_reply", |b| {
        b.iter(|| reconcile_nutrition_advice(black_box(Some(&canned)), &profile, &config.nutrition));
    });
    group.bench_function("no_reply", |b| {
        b.iter(|| reconcile_nutrition_advice(black_box(None), &profile, &config.nutrition));
    });
    group.finish();
}

fn bench_assessment(c: &mut Criterion) {
    let aggregator = AssessmentAggregator::new(&CoachConfig::default().scoring);
    let request = FieldRecord::from_value(json!({
        "physical": { "sprint30m": "4.9s", "run12min": 2300, "longJump": "180cm" },
        "skills": { "juggling": 40, "shortPass": 75, "shootingAccuracy": 60 },
        "match": { "goals": 3, "assists": 2, "passRate": "78%" },
    }));

    c.bench_function("assessment_comprehensive", |b| {
        b.iter(|| aggregator.assess(AssessmentMode::Comprehensive, black_box(&request)));
    });
}

criterion_group!(
    benches,
    bench_training_plan,
    bench_default_plan,
    bench_nutrition,
    bench_assessment,
);
criterion_main!(benches);
