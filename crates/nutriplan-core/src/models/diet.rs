// ABOUTME: Diet types and macronutrient percentage splits
// ABOUTME: DietType, DietKind, MacroSplit and Macronutrient definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseEnumError;

/// One of the three energy-yielding macronutrients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Macronutrient {
    /// Protein
    Protein,
    /// Carbohydrates
    Carbs,
    /// Fat
    Fat,
}

impl Macronutrient {
    /// All macronutrients in display order
    pub const ALL: [Self; 3] = [Self::Protein, Self::Carbs, Self::Fat];

    /// The two macronutrients other than `self`, in display order
    #[must_use]
    pub const fn others(self) -> [Self; 2] {
        match self {
            Self::Protein => [Self::Carbs, Self::Fat],
            Self::Carbs => [Self::Protein, Self::Fat],
            Self::Fat => [Self::Protein, Self::Carbs],
        }
    }
}

impl FromStr for Macronutrient {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "protein" => Ok(Self::Protein),
            "carbs" | "carbohydrates" => Ok(Self::Carbs),
            "fat" | "fats" => Ok(Self::Fat),
            _ => Err(ParseEnumError::new("macronutrient", s)),
        }
    }
}

/// Percentage allocation of daily calories across the macronutrients.
///
/// Preset splits always total 100. A custom split edited near the rebalancing
/// floor may not, so callers display `total()` rather than assume 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    /// Protein as percentage of total calories
    pub protein_pct: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_pct: f64,
    /// Fat as percentage of total calories
    pub fat_pct: f64,
}

impl MacroSplit {
    /// Create a split from three percentages
    #[must_use]
    pub const fn new(protein_pct: f64, carbs_pct: f64, fat_pct: f64) -> Self {
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Live sum of the three percentages
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein_pct + self.carbs_pct + self.fat_pct
    }

    /// Percentage for one macronutrient
    #[must_use]
    pub const fn get(&self, nutrient: Macronutrient) -> f64 {
        match nutrient {
            Macronutrient::Protein => self.protein_pct,
            Macronutrient::Carbs => self.carbs_pct,
            Macronutrient::Fat => self.fat_pct,
        }
    }

    /// Copy of this split with one percentage replaced
    #[must_use]
    pub fn with(mut self, nutrient: Macronutrient, pct: f64) -> Self {
        match nutrient {
            Macronutrient::Protein => self.protein_pct = pct,
            Macronutrient::Carbs => self.carbs_pct = pct,
            Macronutrient::Fat => self.fat_pct = pct,
        }
        self
    }
}

/// Diet type without the custom payload, as stored in flat records
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietKind {
    /// 20/50/30
    Balanced,
    /// 30/40/30
    HighProtein,
    /// 25/25/50
    LowCarb,
    /// 20/5/75
    Keto,
    /// User-defined split
    Custom,
}

impl DietKind {
    /// Snake-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::HighProtein => "high_protein",
            Self::LowCarb => "low_carb",
            Self::Keto => "keto",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for DietKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "balanced" => Ok(Self::Balanced),
            "high_protein" => Ok(Self::HighProtein),
            "low_carb" => Ok(Self::LowCarb),
            "keto" => Ok(Self::Keto),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseEnumError::new("diet type", s)),
        }
    }
}

impl fmt::Display for DietKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diet type selected by the user; `Custom` carries its own split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DietType {
    /// Balanced preset
    Balanced,
    /// High-protein preset
    HighProtein,
    /// Low-carb preset
    LowCarb,
    /// Ketogenic preset
    Keto,
    /// User-defined split
    Custom(MacroSplit),
}

impl DietType {
    /// Kind without payload
    #[must_use]
    pub const fn kind(&self) -> DietKind {
        match self {
            Self::Balanced => DietKind::Balanced,
            Self::HighProtein => DietKind::HighProtein,
            Self::LowCarb => DietKind::LowCarb,
            Self::Keto => DietKind::Keto,
            Self::Custom(_) => DietKind::Custom,
        }
    }

    /// The custom split, if this is a custom diet
    #[must_use]
    pub const fn custom_split(&self) -> Option<MacroSplit> {
        match self {
            Self::Custom(split) => Some(*split),
            _ => None,
        }
    }
}
