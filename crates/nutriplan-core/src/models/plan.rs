// ABOUTME: Energy expenditure result and the published macro plan
// ABOUTME: EnergyResult, MacroGrams, MacroPercentages and MacroPlan definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::energy_density::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use crate::models::Goal;

/// Basal and total daily energy expenditure, whole kcal/day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnergyResult {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: u32,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: u32,
}

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MacroGrams {
    /// Protein (grams)
    pub protein_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
}

impl MacroGrams {
    /// Energy of these grams at 4/4/9 kcal per gram
    #[must_use]
    pub fn total_kcal(&self) -> f64 {
        f64::from(self.fat_g).mul_add(
            FAT_KCAL_PER_G,
            f64::from(self.protein_g)
                .mul_add(PROTEIN_KCAL_PER_G, f64::from(self.carbs_g) * CARBS_KCAL_PER_G),
        )
    }

    /// Achieved share of calories per macronutrient.
    ///
    /// Returns `None` when all grams are zero.
    #[must_use]
    pub fn percentages(&self) -> Option<MacroPercentages> {
        let total = self.total_kcal();
        if total <= 0.0 {
            return None;
        }
        Some(MacroPercentages {
            protein_percent: f64::from(self.protein_g) * PROTEIN_KCAL_PER_G / total * 100.0,
            carbs_percent: f64::from(self.carbs_g) * CARBS_KCAL_PER_G / total * 100.0,
            fat_percent: f64::from(self.fat_g) * FAT_KCAL_PER_G / total * 100.0,
        })
    }
}

/// Macronutrient percentage breakdown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}

/// The plan shown to the user and handed to persistence.
///
/// A plan is always replaced as a whole; nothing patches individual fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroPlan {
    /// Daily calorie target (kcal/day)
    pub target_calories: u32,
    /// Daily macro targets
    pub macros: MacroGrams,
    /// Signed weekly weight change (kg/week); negative for loss
    pub weekly_weight_change_kg: f64,
    /// Goal the plan was computed for
    pub goal: Goal,
}
