// ABOUTME: Nutrition advice model returned to the HTTP layer
// ABOUTME: Calorie and macronutrient strings with unit suffixes plus free-text guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

use serde::{Deserialize, Serialize};

use super::record::parse_leading_number;

/// Daily macronutrient targets as gram strings (`"105g"`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macronutrients {
    /// Protein grams
    pub protein: String,
    /// Carbohydrate grams
    pub carbs: String,
    /// Fat grams
    pub fats: String,
}

impl Macronutrients {
    /// Format gram amounts with the `g` suffix
    #[must_use]
    pub fn from_grams(grams: MacroGrams) -> Self {
        Self {
            protein: format!("{}g", grams.protein),
            carbs: format!("{}g", grams.carbs),
            fats: format!("{}g", grams.fat),
        }
    }

    /// Read back gram amounts when all three strings carry a number
    #[must_use]
    pub fn grams(&self) -> Option<(f64, f64, f64)> {
        Some((
            parse_leading_number(&self.protein)?,
            parse_leading_number(&self.carbs)?,
            parse_leading_number(&self.fats)?,
        ))
    }
}

/// Whole-gram macronutrient amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MacroGrams {
    /// Protein grams
    pub protein: u32,
    /// Carbohydrate grams
    pub carbs: u32,
    /// Fat grams
    pub fat: u32,
}

/// Daily nutrition advice for a youth player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAdvice {
    /// Daily calories with unit (`"2104kcal"`)
    pub daily_calories: String,
    /// Gram targets
    pub macronutrients: Macronutrients,
    /// What to eat before training
    pub pre_training: String,
    /// What to eat after training
    pub post_training: String,
    /// Supplement names
    pub supplements: Vec<String>,
    /// Advice about avoided foods
    pub diet_taboo_advice: String,
    /// Breakfast, lunch and dinner
    pub sample_menu: Vec<String>,
    /// Summary notes
    pub notes: String,
}

impl NutritionAdvice {
    /// Integer kcal figure at the start of `daily_calories`, if any
    #[must_use]
    pub fn calories_kcal(&self) -> Option<u32> {
        parse_leading_number(&self.daily_calories)
            .filter(|kcal| *kcal >= 0.0 && *kcal <= f64::from(u32::MAX))
            .map(|kcal| kcal.trunc() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_parse_leading_integer() {
        let advice = NutritionAdvice {
            daily_calories: "2104.7kcal".to_owned(),
            ..NutritionAdvice::default()
        };
        assert_eq!(advice.calories_kcal(), Some(2104));

        let advice = NutritionAdvice {
            daily_calories: "约2000".to_owned(),
            ..NutritionAdvice::default()
        };
        assert_eq!(advice.calories_kcal(), None);
    }

    #[test]
    fn test_macronutrient_grams_round_trip_format() {
        let macros = Macronutrients::from_grams(MacroGrams {
            protein: 105,
            carbs: 316,
            fat: 47,
        });
        assert_eq!(macros.protein, "105g");
        assert_eq!(macros.grams(), Some((105.0, 316.0, 47.0)));
    }
}
