// ABOUTME: Planner configuration for energy, rate, and macro calculations
// ABOUTME: Aggregates domain configs and provides unified validation and environment loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `nutrition` - BMR coefficients, activity factors, diet splits, custom split floor
//! - `goals` - rate bands, body-mass energy density, rate labels
//! - `error` - configuration errors
//!
//! Defaults reproduce the published formulas. Any value can be overridden with a
//! `NUTRIPLAN_*` environment variable; the result is validated before use.

pub mod error;
pub mod goals;
pub mod nutrition;

pub use error::ConfigError;
pub use goals::{GoalRateConfig, RateBand, RateLabelsConfig};
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CustomSplitConfig, DietSplitsConfig, MacroDistribution,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Main planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Preset diet macro splits
    pub diet_splits: DietSplitsConfig,
    /// Custom split slider rebalancing
    pub custom_split: CustomSplitConfig,
    /// Rate bands and rate-to-calorie conversion
    pub goal_rates: GoalRateConfig,
    /// Descriptive rate label thresholds
    pub rate_labels: RateLabelsConfig,
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        self.activity_factors.validate()?;
        self.diet_splits.validate()?;
        self.custom_split.validate()?;
        self.goal_rates.validate()?;
        self.rate_labels.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity factors
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var("NUTRIPLAN_ACTIVITY_LIGHT", &mut self.activity_factors.light)?;
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_MODERATE",
            &mut self.activity_factors.moderate,
        )?;
        Self::apply_env_var("NUTRIPLAN_ACTIVITY_HEAVY", &mut self.activity_factors.heavy)?;
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_EXTREME",
            &mut self.activity_factors.extreme,
        )?;

        // Rate conversion and bands
        Self::apply_env_var(
            "NUTRIPLAN_KCAL_PER_KG",
            &mut self.goal_rates.kcal_per_kg_body_mass,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_LOSS_RATE_MIN",
            &mut self.goal_rates.loss.min_percent,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_LOSS_RATE_MAX",
            &mut self.goal_rates.loss.max_percent,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_LOSS_RATE_DEFAULT",
            &mut self.goal_rates.loss.default_percent,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_GAIN_RATE_MIN",
            &mut self.goal_rates.gain.min_percent,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_GAIN_RATE_MAX",
            &mut self.goal_rates.gain.max_percent,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_GAIN_RATE_DEFAULT",
            &mut self.goal_rates.gain.default_percent,
        )?;

        // Custom split editing
        Self::apply_env_var(
            "NUTRIPLAN_CUSTOM_MACRO_FLOOR",
            &mut self.custom_split.floor_percent,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unordered_activity_factors_rejected() {
        let mut config = PlannerConfig::default();
        config.activity_factors.heavy = 1.3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_preset_split_must_total_hundred() {
        let mut config = PlannerConfig::default();
        config.diet_splits.keto.carbs_pct = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_default_outside_band_rejected() {
        let mut config = PlannerConfig::default();
        config.goal_rates.gain.default_percent = 0.9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_energy_density_rejected() {
        for density in [f64::NAN, f64::INFINITY, 1e300, 0.0] {
            let mut config = PlannerConfig::default();
            config.goal_rates.kcal_per_kg_body_mass = density;
            assert!(
                matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))),
                "density {density} accepted"
            );
        }
    }

    #[test]
    fn test_non_finite_band_bound_rejected() {
        let mut config = PlannerConfig::default();
        config.goal_rates.loss.max_percent = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
