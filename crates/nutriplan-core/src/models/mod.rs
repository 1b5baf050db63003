// ABOUTME: Data model for the nutriplan planner
// ABOUTME: Re-exports profile, goal, diet, plan and record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Biometric profile, sex and activity level
pub mod profile;

/// Weight-change goal and the percent/kilogram rate pair
pub mod goal;

/// Diet types, macro splits and macronutrients
pub mod diet;

/// Energy result, macro grams and the published plan
pub mod plan;

/// Flat persistence record
pub mod record;

pub use diet::{DietKind, DietType, MacroSplit, Macronutrient};
pub use goal::{Goal, RateSpec};
pub use plan::{EnergyResult, MacroGrams, MacroPercentages, MacroPlan};
pub use profile::{ActivityLevel, BiometricProfile, Sex};
pub use record::PlanRecord;
