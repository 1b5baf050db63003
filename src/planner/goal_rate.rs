// ABOUTME: Conversion between weekly weight-change rates and daily calorie targets
// ABOUTME: Rate clamping per goal band, calorie delta math, and descriptive rate labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Rate Converter
//!
//! One kilogram of body-mass change is taken as ~7700 kcal, so a weekly rate of
//! `r` kg becomes a daily delta of `r * 7700 / 7` kcal applied to TDEE.

use std::fmt;

use nutriplan_core::constants::time::DAYS_PER_WEEK;
use nutriplan_core::errors::{PlanError, PlanResult};
use nutriplan_core::models::{Goal, RateSpec};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{GoalRateConfig, RateLabelsConfig};

/// Daily calorie delta for a weekly rate in kilograms
#[must_use]
pub fn daily_energy_delta(rate_kg: f64, config: &GoalRateConfig) -> f64 {
    rate_kg * config.kcal_per_kg_body_mass / DAYS_PER_WEEK
}

/// Daily calorie target for a goal and weekly rate.
///
/// The delta is rounded before it is applied, so for weight loss
/// `tdee - target == round(rate_kg * 7700 / 7)` holds exactly.
///
/// # Errors
///
/// Returns `PlanError::DegeneratePlan` for a negative or non-finite rate, a
/// delta that is not a finite kcal count, or a target outside `1..=u32::MAX`
pub fn calories_from_rate(
    tdee: u32,
    goal: Goal,
    rate_kg: f64,
    config: &GoalRateConfig,
) -> PlanResult<u32> {
    if !goal.has_rate() {
        return Ok(tdee);
    }
    if !rate_kg.is_finite() || rate_kg < 0.0 {
        return Err(PlanError::degenerate(format!(
            "weekly rate of {rate_kg} kg is not a non-negative number"
        )));
    }

    let delta_kcal = daily_energy_delta(rate_kg, config).round();
    if !(delta_kcal.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&delta_kcal)) {
        return Err(PlanError::degenerate(format!(
            "daily delta of {delta_kcal} kcal from {rate_kg} kg/week at {} kcal/kg is out of range",
            config.kcal_per_kg_body_mass
        )));
    }
    // Within 0..=u32::MAX after the range check
    let delta = delta_kcal as i64;
    let target = match goal {
        Goal::LoseWeight => i64::from(tdee).checked_sub(delta),
        Goal::GainWeight => i64::from(tdee).checked_add(delta),
        Goal::Maintain => Some(i64::from(tdee)),
    };

    target
        .and_then(|kcal| u32::try_from(kcal).ok())
        .filter(|kcal| *kcal > 0)
        .ok_or_else(|| {
            PlanError::degenerate(format!(
                "a {delta} kcal/day {goal} adjustment to a TDEE of {tdee} leaves no usable target"
            ))
        })
}

fn invalid_rate(goal: Goal, rate_percentage: f64, config: &GoalRateConfig) -> PlanError {
    let (min, max) = config
        .band_for(goal)
        .map_or((0.0, 0.0), |band| (band.min_percent, band.max_percent));
    PlanError::InvalidRate {
        goal,
        rate_percentage,
        min,
        max,
    }
}

/// Strict check that a rate lies inside the goal's band
///
/// # Errors
///
/// Returns `PlanError::InvalidRate` when the rate is outside the band
pub fn check_rate(goal: Goal, rate_percentage: f64, config: &GoalRateConfig) -> PlanResult<()> {
    match config.band_for(goal) {
        Some(band) if band.contains(rate_percentage) => Ok(()),
        Some(_) => Err(invalid_rate(goal, rate_percentage, config)),
        None => Ok(()),
    }
}

/// Bring a rate into the goal's band.
///
/// Out-of-band rates are clamped to the nearest bound and logged; that is the
/// defined recovery for `InvalidRate`. Maintain has no rate and always yields 0.
///
/// # Errors
///
/// Returns `PlanError::InvalidRate` only for a non-finite rate, which has no
/// nearest bound
pub fn clamp_rate(goal: Goal, rate_percentage: f64, config: &GoalRateConfig) -> PlanResult<f64> {
    let Some(band) = config.band_for(goal) else {
        return Ok(0.0);
    };
    if !rate_percentage.is_finite() {
        return Err(invalid_rate(goal, rate_percentage, config));
    }
    if let Err(e) = check_rate(goal, rate_percentage, config) {
        let clamped = band.clamp(rate_percentage);
        warn!(%goal, requested = rate_percentage, clamped, "{e}; clamping to band");
        return Ok(clamped);
    }
    Ok(rate_percentage)
}

/// Rate spec for a goal: clamped percentage of the given weight, or none for maintain
///
/// # Errors
///
/// Returns `PlanError::InvalidRate` for a non-finite rate
pub fn rate_spec_for(
    goal: Goal,
    weight_kg: f64,
    rate_percentage: f64,
    config: &GoalRateConfig,
) -> PlanResult<RateSpec> {
    if !goal.has_rate() {
        return Ok(RateSpec::none());
    }
    let pct = clamp_rate(goal, rate_percentage, config)?;
    Ok(RateSpec::from_percentage(weight_kg, pct))
}

/// Signed weekly change: negative for loss, positive for gain, zero for maintain
#[must_use]
pub fn weekly_weight_change(goal: Goal, rate: &RateSpec) -> f64 {
    if goal.has_rate() {
        goal.direction() * rate.rate_kg()
    } else {
        0.0
    }
}

/// Descriptive intensity of a weekly rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RateIntensity {
    /// Slow loss, easiest to sustain
    Conservative,
    /// Middle loss rate
    Moderate,
    /// Fast loss
    Aggressive,
    /// Slow gain, minimal fat
    LeanFocus,
    /// Middle gain rate
    Balanced,
    /// Fastest gain
    MaximumGain,
}

impl RateIntensity {
    /// Label shown next to the slider
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
            Self::LeanFocus => "lean-focus",
            Self::Balanced => "balanced",
            Self::MaximumGain => "maximum gain",
        }
    }
}

impl fmt::Display for RateIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptive label for a rate. Presentation only; no calorie math reads it.
#[must_use]
pub fn describe_rate(
    goal: Goal,
    rate_percentage: f64,
    labels: &RateLabelsConfig,
) -> Option<RateIntensity> {
    match goal {
        Goal::LoseWeight => Some(if rate_percentage <= labels.loss_conservative_max {
            RateIntensity::Conservative
        } else if rate_percentage <= labels.loss_moderate_max {
            RateIntensity::Moderate
        } else {
            RateIntensity::Aggressive
        }),
        Goal::GainWeight => Some(if rate_percentage <= labels.gain_lean_max {
            RateIntensity::LeanFocus
        } else if rate_percentage <= labels.gain_balanced_max {
            RateIntensity::Balanced
        } else {
            RateIntensity::MaximumGain
        }),
        Goal::Maintain => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_maintain_ignores_rate() {
        let config = GoalRateConfig::default();
        assert_eq!(
            calories_from_rate(2000, Goal::Maintain, 0.8, &config).unwrap(),
            2000
        );
        assert!(clamp_rate(Goal::Maintain, 0.8, &config).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_rate_rejected() {
        let config = GoalRateConfig::default();
        assert!(matches!(
            calories_from_rate(2000, Goal::LoseWeight, -0.5, &config),
            Err(PlanError::DegeneratePlan { .. })
        ));
    }

    #[test]
    fn test_nan_rate_cannot_be_clamped() {
        let config = GoalRateConfig::default();
        assert!(clamp_rate(Goal::GainWeight, f64::NAN, &config).is_err());
    }

    #[test]
    fn test_deficit_larger_than_tdee_is_degenerate() {
        let config = GoalRateConfig::default();
        let result = calories_from_rate(500, Goal::LoseWeight, 1.0, &config);
        assert!(matches!(result, Err(PlanError::DegeneratePlan { .. })));
    }

    #[test]
    fn test_nan_energy_density_is_degenerate() {
        let config = GoalRateConfig {
            kcal_per_kg_body_mass: f64::NAN,
            ..GoalRateConfig::default()
        };
        assert!(matches!(
            calories_from_rate(2759, Goal::LoseWeight, 0.8, &config),
            Err(PlanError::DegeneratePlan { .. })
        ));
    }

    #[test]
    fn test_huge_energy_density_is_degenerate() {
        let config = GoalRateConfig {
            kcal_per_kg_body_mass: 1e300,
            ..GoalRateConfig::default()
        };
        for goal in [Goal::GainWeight, Goal::LoseWeight] {
            assert!(matches!(
                calories_from_rate(2759, goal, 0.4, &config),
                Err(PlanError::DegeneratePlan { .. })
            ));
        }
    }

    #[test]
    fn test_gain_target_beyond_u32_is_degenerate() {
        let config = GoalRateConfig {
            kcal_per_kg_body_mass: 7.0 * f64::from(u32::MAX),
            ..GoalRateConfig::default()
        };
        assert!(matches!(
            calories_from_rate(2759, Goal::GainWeight, 1.0, &config),
            Err(PlanError::DegeneratePlan { .. })
        ));
    }

    #[test]
    fn test_weekly_change_sign() {
        let rate = RateSpec::from_percentage(80.0, 0.5);
        assert!(weekly_weight_change(Goal::LoseWeight, &rate) < 0.0);
        assert!(weekly_weight_change(Goal::GainWeight, &rate) > 0.0);
        assert!(weekly_weight_change(Goal::Maintain, &rate).abs() < f64::EPSILON);
    }
}
