// ABOUTME: Nutrition configuration for energy expenditure and macro allocation
// ABOUTME: Configures BMR coefficients, activity factors, diet splits, and custom split editing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! Coefficients and lookup tables for the energy model and the macro allocator.
//! Every enum-keyed table is read through an exhaustive `match`, so a new
//! `ActivityLevel` or `DietKind` without a table entry fails to compile.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use nutriplan_core::constants::custom_split::FLOOR_PERCENT;
use nutriplan_core::models::{ActivityLevel, DietKind, MacroSplit};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Heavy (6-7 days/week): 1.725
    pub heavy: f64,
    /// Extreme (hard training 2x/day): 1.9
    pub extreme: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Heavy => self.heavy,
            ActivityLevel::Extreme => self.extreme,
        }
    }

    /// Validate that factors lie in [1.0, 2.5] and strictly ascend
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` or `ConfigError::InvalidRange`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sedentary < 1.0 || self.extreme > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        let ascending = ActivityLevel::ALL
            .windows(2)
            .all(|pair| self.factor_for(pair[0]) < self.factor_for(pair[1]));
        if !ascending {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            heavy: 1.725,
            extreme: 1.9,
        }
    }
}

/// Macro distribution for a preset diet (protein%, carbs%, fat%)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct
                .saturating_add(carbs_pct)
                .saturating_add(fat_pct)
                == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.protein_pct
            .saturating_add(self.carbs_pct)
            .saturating_add(self.fat_pct)
    }

    /// As a floating-point split for the allocator
    #[must_use]
    pub fn as_split(&self) -> MacroSplit {
        MacroSplit::new(
            f64::from(self.protein_pct),
            f64::from(self.carbs_pct),
            f64::from(self.fat_pct),
        )
    }
}

/// Fixed splits for the preset diet types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietSplitsConfig {
    /// Balanced: (20% protein, 50% carbs, 30% fat)
    pub balanced: MacroDistribution,
    /// High protein: (30% protein, 40% carbs, 30% fat)
    pub high_protein: MacroDistribution,
    /// Low carb: (25% protein, 25% carbs, 50% fat)
    pub low_carb: MacroDistribution,
    /// Keto: (20% protein, 5% carbs, 75% fat)
    pub keto: MacroDistribution,
}

impl Default for DietSplitsConfig {
    fn default() -> Self {
        Self {
            balanced: MacroDistribution::new(20, 50, 30),
            high_protein: MacroDistribution::new(30, 40, 30),
            low_carb: MacroDistribution::new(25, 25, 50),
            keto: MacroDistribution::new(20, 5, 75),
        }
    }
}

impl DietSplitsConfig {
    /// Preset distribution for a diet kind; `None` for custom
    #[must_use]
    pub const fn distribution_for(&self, kind: DietKind) -> Option<MacroDistribution> {
        match kind {
            DietKind::Balanced => Some(self.balanced),
            DietKind::HighProtein => Some(self.high_protein),
            DietKind::LowCarb => Some(self.low_carb),
            DietKind::Keto => Some(self.keto),
            DietKind::Custom => None,
        }
    }

    /// Validate that all preset distributions sum to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if any preset's macro percentages
    /// (protein + carbs + fat) do not sum to exactly 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let presets = [
            ("balanced", &self.balanced),
            ("high_protein", &self.high_protein),
            ("low_carb", &self.low_carb),
            ("keto", &self.keto),
        ];

        for (name, preset) in presets {
            let sum = preset.total();
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro percentages must sum to 100, got {sum}"
                )));
            }
        }

        Ok(())
    }
}

/// Custom split slider rebalancing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomSplitConfig {
    /// Lowest percentage a rebalanced macro is pushed down to: 5%
    pub floor_percent: f64,
}

impl Default for CustomSplitConfig {
    fn default() -> Self {
        Self {
            floor_percent: FLOOR_PERCENT,
        }
    }
}

impl CustomSplitConfig {
    /// Validate the floor leaves room for three macros
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the floor is outside 0-33%
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=33.0).contains(&self.floor_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "Custom macro floor must be between 0% and 33%",
            ));
        }
        Ok(())
    }
}
