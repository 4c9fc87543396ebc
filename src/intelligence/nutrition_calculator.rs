// ABOUTME: Youth nutrition calculations and reconciliation of model-supplied nutrition advice
// ABOUTME: Age/gender-banded BMR, intensity and duration multipliers, macro split and plausibility gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! Nutrition Calculator Module
//!
//! Formula-driven daily calories and macronutrients for youth players. The
//! same numbers serve as ground truth for plausibility-checking a model reply
//! and as the fallback when a reply, or any single field of it, is unusable.
//!
//! # Formulas
//!
//! - BMR (Schofield, weight only), banded at age 10:
//!   female `22.5w + 499` / `13.384w + 692.6`, male `22.7w + 495` / `17.686w + 658.2`.
//!   Unspecified gender uses the male bands.
//! - Daily calories: `round(BMR x intensity x (1 + weekly hours x 0.05))`
//! - Grams: protein and carbohydrate at 4 kcal/g, fat at 9 kcal/g
//!
//! # Reference
//!
//! - Schofield, W.N. (1985). Predicting basal metabolic rate, new standards and
//!   review of previous work. *Human Nutrition: Clinical Nutrition*, 39 Suppl 1, 5-41.

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::config::intelligence::{
    ActivityMultiplierConfig, LinearBmr, MacroRatio, MacroRatioConfig, NutritionConfig,
    PlausibilityConfig, YouthBmrConfig,
};
use crate::intelligence::model_reply::{list_field, object_field, parse_model_reply, ParseOutcome};
use crate::intelligence::placeholder::{is_nutrition_item_placeholder, is_nutrition_placeholder};
use crate::models::{
    parse_leading_number, parse_lenient_number, Gender, MacroGrams, Macronutrients,
    NutritionAdvice, NutritionProfile, ResolvedBodyMetrics, TrainingIntensity,
};

/// kcal per gram of protein or carbohydrate
const KCAL_PER_GRAM_PROTEIN_CARBS: f64 = 4.0;
/// kcal per gram of fat
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Diet taboo answers meaning "nothing to avoid"
const NO_TABOO_ANSWERS: &[&str] = &["无", "没有", "未指定", "none", "n/a"];

/// Number of meals in a sample menu
const SAMPLE_MENU_MEALS: usize = 3;

fn round_u32(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

/// BMR line for an age/gender band
///
/// Ages strictly below the configured cutoff use the child band.
#[must_use]
pub const fn bmr_band(age_years: u32, gender: Option<Gender>, config: &YouthBmrConfig) -> LinearBmr {
    let child = age_years < config.child_age_cutoff;
    match (gender, child) {
        (Some(Gender::Female), true) => config.female_child,
        (Some(Gender::Female), false) => config.female_adolescent,
        (Some(Gender::Male) | None, true) => config.male_child,
        (Some(Gender::Male) | None, false) => config.male_adolescent,
    }
}

/// Basal metabolic rate in kcal/day
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    age_years: u32,
    gender: Option<Gender>,
    config: &YouthBmrConfig,
) -> f64 {
    let band = bmr_band(age_years, gender, config);
    band.weight_coef.mul_add(weight_kg, band.intercept)
}

/// Training intensity multiplier; unrecognized intensity is neutral
#[must_use]
pub const fn intensity_multiplier(
    intensity: Option<TrainingIntensity>,
    config: &ActivityMultiplierConfig,
) -> f64 {
    match intensity {
        Some(TrainingIntensity::Low) => config.low,
        Some(TrainingIntensity::Medium) => config.medium,
        Some(TrainingIntensity::High) => config.high,
        None => config.unrecognized,
    }
}

/// Weekly training volume multiplier: `1 + hours x per_weekly_hour`
#[must_use]
pub fn duration_multiplier(weekly_hours: f64, config: &ActivityMultiplierConfig) -> f64 {
    weekly_hours.mul_add(config.per_weekly_hour, 1.0)
}

/// Daily calories for a profile after nominal defaults are applied
///
/// Clamped to the plausible range so computed values always pass the gate.
#[must_use]
pub fn calculate_daily_calories(profile: &NutritionProfile, config: &NutritionConfig) -> u32 {
    let metrics = profile.resolve(&config.defaults);
    daily_calories_for(&metrics, profile, config)
}

fn daily_calories_for(
    metrics: &ResolvedBodyMetrics,
    profile: &NutritionProfile,
    config: &NutritionConfig,
) -> u32 {
    let bmr = calculate_bmr(
        metrics.weight_kg,
        metrics.age_years,
        profile.gender,
        &config.bmr,
    );
    let calories = bmr
        * intensity_multiplier(profile.training_intensity, &config.activity)
        * duration_multiplier(metrics.weekly_hours, &config.activity);
    round_u32(calories).clamp(
        config.plausibility.min_daily_calories,
        config.plausibility.max_daily_calories,
    )
}

/// Macronutrient ratio for an intensity; low and unrecognized share one split
#[must_use]
pub const fn macro_ratios(
    intensity: Option<TrainingIntensity>,
    config: &MacroRatioConfig,
) -> MacroRatio {
    match intensity {
        Some(TrainingIntensity::High) => config.high,
        Some(TrainingIntensity::Medium) => config.medium,
        Some(TrainingIntensity::Low) | None => config.low,
    }
}

/// Gram targets for a calorie figure
#[must_use]
pub fn calculate_macronutrients(daily_calories: u32, ratio: MacroRatio) -> MacroGrams {
    let calories = f64::from(daily_calories);
    MacroGrams {
        protein: round_u32(calories * ratio.protein / KCAL_PER_GRAM_PROTEIN_CARBS),
        carbs: round_u32(calories * ratio.carbs / KCAL_PER_GRAM_PROTEIN_CARBS),
        fat: round_u32(calories * ratio.fat / KCAL_PER_GRAM_FAT),
    }
}

/// Whether an upstream calorie figure can be trusted
///
/// Absent figures, canned constants and values outside the configured range fail.
#[must_use]
pub fn passes_plausibility_gate(kcal: Option<u32>, config: &PlausibilityConfig) -> bool {
    kcal.is_some_and(|kcal| {
        !config.known_bad_calories.contains(&kcal)
            && (config.min_daily_calories..=config.max_daily_calories).contains(&kcal)
    })
}

/// One meal's share of each macronutrient
#[derive(Debug, Clone, Copy)]
struct MealShare {
    protein: u32,
    carbs: u32,
    fat: u32,
}

/// Breakfast 25%, lunch 40%, dinner the remainder of every macronutrient
fn split_meals(macros: MacroGrams) -> [MealShare; 3] {
    let breakfast = MealShare {
        protein: round_u32(f64::from(macros.protein) * 0.25),
        carbs: round_u32(f64::from(macros.carbs) * 0.25),
        fat: round_u32(f64::from(macros.fat) * 0.25),
    };
    let lunch = MealShare {
        protein: round_u32(f64::from(macros.protein) * 0.4),
        carbs: round_u32(f64::from(macros.carbs) * 0.4),
        fat: round_u32(f64::from(macros.fat) * 0.4),
    };
    let dinner = MealShare {
        protein: macros
            .protein
            .saturating_sub(breakfast.protein + lunch.protein),
        carbs: macros.carbs.saturating_sub(breakfast.carbs + lunch.carbs),
        fat: macros.fat.saturating_sub(breakfast.fat + lunch.fat),
    };
    [breakfast, lunch, dinner]
}

fn extra_fat_source(meal_fat: u32, source: &str) -> String {
    if meal_fat > 8 {
        format!("+ {source}10g")
    } else {
        String::new()
    }
}

/// Breakfast, lunch and dinner lines with portions scaled to the macro split
fn sample_menu(macros: MacroGrams) -> Vec<String> {
    let [breakfast, lunch, dinner] = split_meals(macros);

    let eggs = round_u32(f64::from(breakfast.protein) / 6.0).max(1);
    let milk_ml = round_u32(f64::from(breakfast.protein) * 0.3 / 0.03).max(100);
    let oats_g = round_u32(f64::from(breakfast.carbs) * 1.2).max(30);

    let rice_g = round_u32(f64::from(lunch.carbs) * 4.0).max(80);
    let chicken_g = round_u32(f64::from(lunch.protein) / 0.22).max(50);

    let pasta_g = round_u32(f64::from(dinner.carbs) * 3.2).max(60);
    let beef_g = round_u32(f64::from(dinner.protein) / 0.20).max(50);

    vec![
        format!(
            "早餐：燕麦{oats_g}g、鸡蛋{eggs}个、牛奶{milk_ml}ml、水果1份{}",
            extra_fat_source(breakfast.fat, "坚果")
        ),
        format!(
            "午餐：米饭{rice_g}g、鸡胸肉{chicken_g}g、蔬菜1份{}",
            extra_fat_source(lunch.fat, "橄榄油")
        ),
        format!(
            "晚餐：意面{pasta_g}g、牛肉{beef_g}g、蔬菜沙拉1份{}",
            extra_fat_source(dinner.fat, "核桃")
        ),
    ]
}

fn pre_training_advice(macros: MacroGrams) -> String {
    let carbs = round_u32(f64::from(macros.carbs) * 0.15).max(20);
    let protein = round_u32(f64::from(macros.protein) * 0.1).max(5);
    let bread_slices = round_u32(f64::from(carbs) / 15.0);
    let eggs = round_u32(f64::from(protein) / 6.0).max(1);
    format!(
        "训练前2小时：全麦面包{bread_slices}片（约{carbs}g碳水），鸡蛋{eggs}个（约{protein}g蛋白），香蕉1根。\n训练前30分钟：水果1份或能量棒。"
    )
}

fn post_training_advice(macros: MacroGrams) -> String {
    let protein = round_u32(f64::from(macros.protein) * 0.2).max(15);
    let carbs = round_u32(f64::from(macros.carbs) * 0.1).max(20);
    let rice_g = carbs * 4;
    let chicken_g = round_u32(f64::from(protein) / 0.22);
    format!(
        "训练后30分钟内：蛋白粉奶昔1杯（约{protein}g蛋白），香蕉1根（约{carbs}g碳水）；\n训练后2小时：米饭{rice_g}g、鸡胸肉{chicken_g}g、蔬菜1份。"
    )
}

/// Vitamin D plus an age-banded list
fn supplements_for_age(age_years: u32) -> Vec<String> {
    let banded: &[&str] = if age_years < 8 {
        &["钙片", "维生素C", "维生素A"]
    } else if age_years < 12 {
        &["钙片", "维生素C"]
    } else {
        &["钙片", "维生素C", "复合维生素B"]
    };
    std::iter::once("维生素D")
        .chain(banded.iter().copied())
        .map(str::to_owned)
        .collect()
}

fn diet_taboo_advice(diet_taboo: Option<&str>) -> String {
    match diet_taboo.map(str::trim) {
        Some(taboo)
            if !taboo.is_empty() && !NO_TABOO_ANSWERS.contains(&taboo.to_lowercase().as_str()) =>
        {
            format!("严格避免{taboo}，选择替代食物补充营养")
        }
        _ => "保持均衡饮食，避免高糖高脂食物".to_owned(),
    }
}

fn nutrition_notes(profile: &NutritionProfile, metrics: &ResolvedBodyMetrics) -> String {
    let special = profile.special_needs.as_deref().map_or_else(
        || "根据训练强度调整热量摄入".to_owned(),
        |needs| format!("考虑{needs}的特殊需求，调整饮食方案"),
    );
    format!(
        "{special}，适合{}岁、{}kg的青少年，每周训练{}小时，性别：{}",
        metrics.age_years,
        metrics.weight_kg,
        metrics.weekly_hours,
        profile.gender_display()
    )
}

/// Complete advice computed from the profile alone
///
/// Never fails; absent metrics use the nominal defaults.
#[must_use]
pub fn default_nutrition_advice(
    profile: &NutritionProfile,
    config: &NutritionConfig,
) -> NutritionAdvice {
    let metrics = profile.resolve(&config.defaults);
    let daily_calories = daily_calories_for(&metrics, profile, config);
    let macros = calculate_macronutrients(
        daily_calories,
        macro_ratios(profile.training_intensity, &config.macronutrients),
    );

    NutritionAdvice {
        daily_calories: format!("{daily_calories}kcal"),
        macronutrients: Macronutrients::from_grams(macros),
        pre_training: pre_training_advice(macros),
        post_training: post_training_advice(macros),
        supplements: supplements_for_age(metrics.age_years),
        diet_taboo_advice: diet_taboo_advice(profile.diet_taboo.as_deref()),
        sample_menu: sample_menu(macros),
        notes: nutrition_notes(profile, &metrics),
    }
}

/// Calorie figure from a reply field given as `"2100kcal"` or `2100`
fn reply_calories(fields: &Map<String, Value>) -> Option<u32> {
    fields
        .get("dailyCalories")
        .and_then(parse_lenient_number)
        .filter(|kcal| *kcal >= 0.0 && *kcal <= f64::from(u32::MAX))
        .map(|kcal| kcal.trunc() as u32)
}

/// Gram string from a reply macro field; bare numbers gain the `g` suffix
fn reply_macro(macros: &Map<String, Value>, key: &str) -> Option<String> {
    match macros.get(key)? {
        Value::String(text) => {
            let text = text.trim();
            parse_leading_number(text).map(|_| text.to_owned())
        }
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).map(|v| format!("{v}g")),
        _ => None,
    }
}

fn reply_macronutrients(fields: &Map<String, Value>) -> Option<Macronutrients> {
    let macros = object_field(fields, "macronutrients")?;
    Some(Macronutrients {
        protein: reply_macro(macros, "protein")?,
        carbs: reply_macro(macros, "carbs")?,
        fats: reply_macro(macros, "fats").or_else(|| reply_macro(macros, "fat"))?,
    })
}

/// Whether stated grams add up to the stated calories within tolerance
fn macros_consistent(macros: &Macronutrients, kcal: u32, tolerance: f64) -> bool {
    let Some((protein, carbs, fat)) = macros.grams() else {
        return false;
    };
    let macro_kcal = (protein + carbs).mul_add(KCAL_PER_GRAM_PROTEIN_CARBS, fat * KCAL_PER_GRAM_FAT);
    let stated = f64::from(kcal);
    stated > 0.0 && ((macro_kcal - stated).abs() / stated) <= tolerance
}

fn text_or_default(fields: &Map<String, Value>, key: &str, fallback: String) -> String {
    match fields.get(key).and_then(Value::as_str) {
        Some(text) if !is_nutrition_placeholder(text) => text.trim().to_owned(),
        _ => {
            warn!("Replacing unusable nutrition field {key}");
            fallback
        }
    }
}

/// Turn a raw model reply into advice meeting the calorie and macro invariants
///
/// Unparsable replies yield the computed default. Otherwise every field is
/// judged on its own: calories must pass the plausibility gate, macros must
/// agree with the calories, and text fields must not be template filler.
#[must_use]
pub fn reconcile_nutrition_advice(
    reply: Option<&str>,
    profile: &NutritionProfile,
    config: &NutritionConfig,
) -> NutritionAdvice {
    let fallback = default_nutrition_advice(profile, config);
    let ParseOutcome::Parsed(fields) = parse_model_reply(reply) else {
        warn!("Nutrition reply unusable, using computed advice");
        return fallback;
    };

    let ratio = macro_ratios(profile.training_intensity, &config.macronutrients);
    let stated_kcal = reply_calories(&fields);
    let trusted_kcal =
        stated_kcal.filter(|kcal| passes_plausibility_gate(Some(*kcal), &config.plausibility));
    let (daily_calories, macronutrients) = if let Some(kcal) = trusted_kcal {
        let tolerance = config.plausibility.macro_kcal_tolerance;
        let macros = match reply_macronutrients(&fields) {
            Some(macros) if macros_consistent(&macros, kcal, tolerance) => macros,
            _ => {
                warn!("Reply macronutrients disagree with {kcal}kcal, recomputing");
                Macronutrients::from_grams(calculate_macronutrients(kcal, ratio))
            }
        };
        info!("Keeping model calorie figure {kcal}kcal");
        (format!("{kcal}kcal"), macros)
    } else {
        warn!(
            "Model calorie figure {stated_kcal:?} failed plausibility gate, using {}",
            fallback.daily_calories
        );
        (
            fallback.daily_calories.clone(),
            fallback.macronutrients.clone(),
        )
    };

    let supplements: Vec<String> = list_field(&fields, "supplements")
        .into_iter()
        .filter(|item| !is_nutrition_item_placeholder(item))
        .map(|item| item.trim().to_owned())
        .collect();

    let menu: Vec<String> = list_field(&fields, "sampleMenu")
        .into_iter()
        .filter(|meal| !is_nutrition_item_placeholder(meal))
        .map(|meal| meal.trim().to_owned())
        .take(SAMPLE_MENU_MEALS)
        .collect();

    NutritionAdvice {
        daily_calories,
        macronutrients,
        pre_training: text_or_default(&fields, "preTraining", fallback.pre_training),
        post_training: text_or_default(&fields, "postTraining", fallback.post_training),
        supplements: if supplements.is_empty() {
            fallback.supplements
        } else {
            supplements
        },
        diet_taboo_advice: text_or_default(&fields, "dietTabooAdvice", fallback.diet_taboo_advice),
        sample_menu: if menu.len() == SAMPLE_MENU_MEALS {
            menu
        } else {
            fallback.sample_menu
        },
        notes: text_or_default(&fields, "notes", fallback.notes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_split_dinner_takes_remainder() {
        let [breakfast, lunch, dinner] = split_meals(MacroGrams {
            protein: 105,
            carbs: 316,
            fat: 47,
        });
        assert_eq!((breakfast.protein, lunch.protein, dinner.protein), (26, 42, 37));
        assert_eq!((breakfast.carbs, lunch.carbs, dinner.carbs), (79, 126, 111));
        assert_eq!((breakfast.fat, lunch.fat, dinner.fat), (12, 19, 16));
    }

    #[test]
    fn test_supplements_by_age_band() {
        assert_eq!(supplements_for_age(7), vec!["维生素D", "钙片", "维生素C", "维生素A"]);
        assert_eq!(supplements_for_age(10), vec!["维生素D", "钙片", "维生素C"]);
        assert_eq!(supplements_for_age(12).last().map(String::as_str), Some("复合维生素B"));
    }

    #[test]
    fn test_no_taboo_answers_give_balanced_advice() {
        assert_eq!(diet_taboo_advice(Some("无")), "保持均衡饮食，避免高糖高脂食物");
        assert_eq!(diet_taboo_advice(None), "保持均衡饮食，避免高糖高脂食物");
        assert_eq!(diet_taboo_advice(Some("海鲜")), "严格避免海鲜，选择替代食物补充营养");
    }

    #[test]
    fn test_macros_consistency_tolerance() {
        let macros = Macronutrients::from_grams(MacroGrams {
            protein: 105,
            carbs: 316,
            fat: 47,
        });
        assert!(macros_consistent(&macros, 2104, 0.15));
        assert!(!macros_consistent(&macros, 3500, 0.15));
    }
}
