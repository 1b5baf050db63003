// ABOUTME: Goal rate configuration for weight-change planning
// ABOUTME: Rate bands per goal, body-mass energy density, and qualitative rate labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Rate Configuration
//!
//! Rate bands are product policy, not physiology. They live here so call sites
//! read them instead of repeating literals.

use nutriplan_core::constants::energy_density::{
    KCAL_PER_KG_BODY_MASS, MAX_KCAL_PER_KG_BODY_MASS,
};
use nutriplan_core::constants::rate_bands::{
    GAIN_DEFAULT_PERCENT, GAIN_MAX_PERCENT, GAIN_MIN_PERCENT, LOSS_DEFAULT_PERCENT,
    LOSS_MAX_PERCENT, LOSS_MIN_PERCENT,
};
use nutriplan_core::models::Goal;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Selectable range of weekly rates, percent of body weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RateBand {
    /// Lowest selectable rate
    pub min_percent: f64,
    /// Highest selectable rate
    pub max_percent: f64,
    /// Rate used when the user has not chosen one
    pub default_percent: f64,
}

impl RateBand {
    /// Whether a rate lies inside the band, bounds included
    #[must_use]
    pub fn contains(&self, rate_percentage: f64) -> bool {
        (self.min_percent..=self.max_percent).contains(&rate_percentage)
    }

    /// Nearest rate inside the band
    #[must_use]
    pub fn clamp(&self, rate_percentage: f64) -> f64 {
        rate_percentage.clamp(self.min_percent, self.max_percent)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_percent.is_finite()
            && self.max_percent.is_finite()
            && self.default_percent.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange(
                "Rate band bounds must be finite",
            ));
        }
        if self.min_percent <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Rate band minimum must be positive",
            ));
        }
        if !(self.min_percent <= self.default_percent && self.default_percent <= self.max_percent)
        {
            return Err(ConfigError::InvalidRange(
                "Rate band must satisfy min <= default <= max",
            ));
        }
        Ok(())
    }
}

/// Rate-to-calorie conversion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRateConfig {
    /// Energy in one kilogram of body-mass change: 7700 kcal
    pub kcal_per_kg_body_mass: f64,
    /// Weight-loss band: 0.25%-1.00% per week
    pub loss: RateBand,
    /// Weight-gain band: 0.16%-0.50% per week
    pub gain: RateBand,
}

impl Default for GoalRateConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg_body_mass: KCAL_PER_KG_BODY_MASS,
            loss: RateBand {
                min_percent: LOSS_MIN_PERCENT,
                max_percent: LOSS_MAX_PERCENT,
                default_percent: LOSS_DEFAULT_PERCENT,
            },
            gain: RateBand {
                min_percent: GAIN_MIN_PERCENT,
                max_percent: GAIN_MAX_PERCENT,
                default_percent: GAIN_DEFAULT_PERCENT,
            },
        }
    }
}

impl GoalRateConfig {
    /// Band for a goal; maintain has none
    #[must_use]
    pub const fn band_for(&self, goal: Goal) -> Option<&RateBand> {
        match goal {
            Goal::LoseWeight => Some(&self.loss),
            Goal::GainWeight => Some(&self.gain),
            Goal::Maintain => None,
        }
    }

    /// Validate both bands and the energy density
    ///
    /// # Errors
    ///
    /// Returns an error if a band is malformed or the energy density is not a
    /// finite value in `(0, MAX_KCAL_PER_KG_BODY_MASS]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let density = self.kcal_per_kg_body_mass;
        if !(density.is_finite() && density > 0.0 && density <= MAX_KCAL_PER_KG_BODY_MASS) {
            return Err(ConfigError::ValueOutOfRange(
                "kcal per kg of body mass must be positive and at most 20000",
            ));
        }
        self.loss.validate()?;
        self.gain.validate()
    }
}

/// Thresholds for the descriptive rate labels shown next to the slider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLabelsConfig {
    /// Loss rates up to this are "conservative": 0.50%
    pub loss_conservative_max: f64,
    /// Loss rates up to this are "moderate", above is "aggressive": 0.75%
    pub loss_moderate_max: f64,
    /// Gain rates up to this are "lean-focus": 0.25%
    pub gain_lean_max: f64,
    /// Gain rates up to this are "balanced", above is "maximum gain": 0.38%
    pub gain_balanced_max: f64,
}

impl Default for RateLabelsConfig {
    fn default() -> Self {
        Self {
            loss_conservative_max: 0.5,
            loss_moderate_max: 0.75,
            gain_lean_max: 0.25,
            gain_balanced_max: 0.38,
        }
    }
}

impl RateLabelsConfig {
    /// Validate threshold ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if thresholds are not ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.loss_conservative_max >= self.loss_moderate_max {
            return Err(ConfigError::InvalidRange(
                "loss_conservative_max must be < loss_moderate_max",
            ));
        }
        if self.gain_lean_max >= self.gain_balanced_max {
            return Err(ConfigError::InvalidRange(
                "gain_lean_max must be < gain_balanced_max",
            ));
        }
        Ok(())
    }
}
