// ABOUTME: Flat persistence record combining a plan with the inputs that produced it
// ABOUTME: PlanRecord is the field set guaranteed to the storage collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    ActivityLevel, BiometricProfile, DietKind, DietType, EnergyResult, Goal, MacroPlan,
    MacroSplit, RateSpec, Sex,
};

/// Flat record of a plan and its inputs.
///
/// Storage format and versioning belong to the persistence layer; this type only
/// fixes the field set and the meaning of each number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRecord {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Weight-change goal
    pub goal: Goal,
    /// Weekly rate, percent of body weight
    pub rate_percentage: f64,
    /// Weekly rate, kilograms (magnitude)
    pub rate_kg: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Diet type
    pub diet_type: DietKind,
    /// Custom split, present only for custom diets
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub custom_split: Option<MacroSplit>,
    /// Daily calorie target
    pub target_calories: u32,
    /// Protein (grams)
    pub protein_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
    /// Signed weekly weight change (kg/week)
    pub weekly_weight_change_kg: f64,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: u32,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: u32,
    /// When the record was produced
    pub generated_at: DateTime<Utc>,
}

impl PlanRecord {
    /// Flatten a plan and its inputs, stamped with the current time
    #[must_use]
    pub fn new(
        profile: &BiometricProfile,
        activity_level: ActivityLevel,
        diet: &DietType,
        rate: &RateSpec,
        energy: &EnergyResult,
        plan: &MacroPlan,
    ) -> Self {
        Self {
            age: profile.age,
            sex: profile.sex,
            height_cm: profile.height_cm,
            weight_kg: profile.weight_kg,
            goal: plan.goal,
            rate_percentage: rate.rate_percentage(),
            rate_kg: rate.rate_kg(),
            activity_level,
            diet_type: diet.kind(),
            custom_split: diet.custom_split(),
            target_calories: plan.target_calories,
            protein_g: plan.macros.protein_g,
            carbs_g: plan.macros.carbs_g,
            fat_g: plan.macros.fat_g,
            weekly_weight_change_kg: plan.weekly_weight_change_kg,
            bmr: energy.bmr,
            tdee: energy.tdee,
            generated_at: Utc::now(),
        }
    }
}
