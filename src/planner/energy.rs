// ABOUTME: Energy expenditure estimation using the Mifflin-St Jeor equation
// ABOUTME: BMR and TDEE calculation with profile validation and whole-kcal rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Model
//!
//! Turns a biometric profile and an activity level into BMR and TDEE.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology.

use nutriplan_core::errors::{PlanError, PlanResult, ProfileField};
use nutriplan_core::models::{ActivityLevel, BiometricProfile, EnergyResult, Sex};
use tracing::debug;

use crate::config::{ActivityFactorsConfig, BmrConfig};

/// Round an energy value to whole kcal, refusing anything that is not a positive finite number
pub(crate) fn round_kcal(value: f64, what: &str) -> PlanResult<u32> {
    if !value.is_finite() {
        return Err(PlanError::degenerate(format!("{what} is not a finite number")));
    }
    let rounded = value.round();
    if rounded < 1.0 {
        return Err(PlanError::degenerate(format!(
            "{what} of {rounded} kcal/day is not positive"
        )));
    }
    if rounded > f64::from(u32::MAX) {
        return Err(PlanError::degenerate(format!("{what} is out of range")));
    }
    Ok(rounded as u32)
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Check that every biometric field is present and positive
///
/// # Errors
///
/// Returns `PlanError::IncompleteProfile` naming the first bad field
pub fn validate_profile(profile: &BiometricProfile) -> PlanResult<()> {
    if profile.age == 0 {
        return Err(PlanError::incomplete(ProfileField::Age));
    }
    if !is_positive(profile.height_cm) {
        return Err(PlanError::incomplete(ProfileField::Height));
    }
    if !is_positive(profile.weight_kg) {
        return Err(PlanError::incomplete(ProfileField::Weight));
    }
    Ok(())
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Men: +5
/// - Women: -161
///
/// The value is unrounded; `compute_energy` rounds it.
///
/// # Errors
///
/// Returns `PlanError::IncompleteProfile` if a field is zero, negative or not finite
pub fn calculate_mifflin_st_jeor(profile: &BiometricProfile, config: &BmrConfig) -> PlanResult<f64> {
    validate_profile(profile)?;

    let weight_component = config.msj_weight_coef * profile.weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age);

    let sex_constant = match profile.sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + sex_constant)
}

/// Calculate Total Daily Energy Expenditure from a whole-kcal BMR
///
/// Formula: TDEE = round(BMR x Activity Factor)
///
/// # Errors
///
/// Returns `PlanError::DegeneratePlan` if the product is not a positive number
pub fn calculate_tdee(
    bmr: u32,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> PlanResult<u32> {
    round_kcal(
        f64::from(bmr) * config.factor_for(activity_level),
        "TDEE",
    )
}

/// Compute BMR and TDEE for a profile
///
/// TDEE is derived from the rounded BMR, so `tdee == round(bmr * factor)` holds
/// for the integers that are reported.
///
/// # Errors
///
/// Returns `PlanError::IncompleteProfile` for a bad profile field, or
/// `PlanError::DegeneratePlan` when the formula yields a non-positive BMR
pub fn compute_energy(
    profile: &BiometricProfile,
    activity_level: ActivityLevel,
    bmr_config: &BmrConfig,
    activity_config: &ActivityFactorsConfig,
) -> PlanResult<EnergyResult> {
    let raw_bmr = calculate_mifflin_st_jeor(profile, bmr_config)?;
    let bmr = round_kcal(raw_bmr, "BMR")?;
    let tdee = calculate_tdee(bmr, activity_level, activity_config)?;

    debug!(
        bmr,
        tdee,
        activity = %activity_level,
        sex = %profile.sex,
        "Computed energy expenditure"
    );

    Ok(EnergyResult { bmr, tdee })
}
