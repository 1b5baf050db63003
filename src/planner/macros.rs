// ABOUTME: Macronutrient allocation from a calorie target and a percentage split
// ABOUTME: Preset diet split lookup and custom split slider rebalancing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Allocator
//!
//! Grams per macronutrient are `round(target * pct / 100 / kcal_per_gram)` with
//! 4 kcal/g for protein and carbohydrates and 9 kcal/g for fat.

use nutriplan_core::constants::custom_split::TOTAL_PERCENT;
use nutriplan_core::constants::energy_density::{
    CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G,
};
use nutriplan_core::errors::{PlanError, PlanResult};
use nutriplan_core::models::{DietType, MacroGrams, MacroSplit, Macronutrient};

use crate::config::{CustomSplitConfig, DietSplitsConfig};

fn grams(target_calories: u32, pct: f64, kcal_per_gram: f64) -> u32 {
    (f64::from(target_calories) * pct / 100.0 / kcal_per_gram).round() as u32
}

/// Check that every percentage of a split lies in `[0, 100]`.
///
/// The total is deliberately not checked: a rebalanced custom split may exceed 100.
///
/// # Errors
///
/// Returns `PlanError::DegeneratePlan` naming the first bad macronutrient
pub fn check_split(split: &MacroSplit) -> PlanResult<()> {
    for nutrient in Macronutrient::ALL {
        let pct = split.get(nutrient);
        if !(pct.is_finite() && (0.0..=TOTAL_PERCENT).contains(&pct)) {
            return Err(PlanError::degenerate(format!(
                "{nutrient:?} percentage {pct} is not between 0 and 100"
            )));
        }
    }
    Ok(())
}

/// Split a daily calorie target into whole grams of each macronutrient.
///
/// Expects a split that passed [`check_split`].
#[must_use]
pub fn allocate_macros(target_calories: u32, split: &MacroSplit) -> MacroGrams {
    MacroGrams {
        protein_g: grams(target_calories, split.protein_pct, PROTEIN_KCAL_PER_G),
        carbs_g: grams(target_calories, split.carbs_pct, CARBS_KCAL_PER_G),
        fat_g: grams(target_calories, split.fat_pct, FAT_KCAL_PER_G),
    }
}

/// Percentage split for a diet: the preset table, or the custom payload
#[must_use]
pub fn resolve_split(diet: &DietType, presets: &DietSplitsConfig) -> MacroSplit {
    match diet.custom_split() {
        Some(split) => split,
        None => presets
            .distribution_for(diet.kind())
            .map_or_else(|| presets.balanced.as_split(), |dist| dist.as_split()),
    }
}

/// Rebalance a custom split after the user moves one slider.
///
/// The edited macro takes `value` (kept within `[floor, 100]`). The shortfall or
/// excess `100 - total` is split evenly across the other two, and each of those is
/// then raised to the floor if it fell below it. Because of that clamp the result
/// can total more than 100; callers show `MacroSplit::total()` instead of
/// assuming 100.
#[must_use]
pub fn rebalance_custom_split(
    current: MacroSplit,
    edited: Macronutrient,
    value: f64,
    config: &CustomSplitConfig,
) -> MacroSplit {
    let floor = config.floor_percent;
    let updated = current.with(edited, value.clamp(floor, TOTAL_PERCENT));
    let share = (TOTAL_PERCENT - updated.total()) / 2.0;

    edited.others().into_iter().fold(updated, |split, other| {
        let adjusted = (split.get(other) + share).max(floor);
        split.with(other, adjusted)
    })
}
