// ABOUTME: Weight-change goal and the paired percent/kilogram weekly rate
// ABOUTME: RateSpec keeps rate_kg derived from rate_percentage and body weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseEnumError;

/// Weight-change goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    LoseWeight,
    /// Caloric surplus
    GainWeight,
    /// Caloric balance, no rate
    Maintain,
}

impl Goal {
    /// Whether this goal uses a weekly rate at all
    #[must_use]
    pub const fn has_rate(self) -> bool {
        !matches!(self, Self::Maintain)
    }

    /// Sign applied to the weekly rate: -1 for loss, +1 for gain, 0 for maintain
    #[must_use]
    pub const fn direction(self) -> f64 {
        match self {
            Self::LoseWeight => -1.0,
            Self::GainWeight => 1.0,
            Self::Maintain => 0.0,
        }
    }

    /// Snake-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::GainWeight => "gain_weight",
            Self::Maintain => "maintain",
        }
    }
}

impl FromStr for Goal {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose_weight" | "lose" => Ok(Self::LoseWeight),
            "gain_weight" | "gain" => Ok(Self::GainWeight),
            "maintain" | "maintenance" => Ok(Self::Maintain),
            _ => Err(ParseEnumError::new("goal", s)),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekly rate of body-weight change as a percentage and as kilograms.
///
/// Only the percentage is chosen by the user. The kilogram value is always
/// `weight_kg * rate_percentage / 100` and can only be produced by the
/// constructors, so the two never diverge. Both are magnitudes; the goal
/// supplies the direction.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RateSpec {
    rate_percentage: f64,
    rate_kg: f64,
}

impl RateSpec {
    /// Build a rate from a percentage of the given body weight
    #[must_use]
    pub fn from_percentage(weight_kg: f64, rate_percentage: f64) -> Self {
        Self {
            rate_percentage,
            rate_kg: weight_kg * rate_percentage / 100.0,
        }
    }

    /// The empty rate used by the maintain goal
    #[must_use]
    pub const fn none() -> Self {
        Self {
            rate_percentage: 0.0,
            rate_kg: 0.0,
        }
    }

    /// Percent of body weight per week
    #[must_use]
    pub const fn rate_percentage(&self) -> f64 {
        self.rate_percentage
    }

    /// Kilograms per week
    #[must_use]
    pub const fn rate_kg(&self) -> f64 {
        self.rate_kg
    }
}

impl Default for RateSpec {
    fn default() -> Self {
        Self::none()
    }
}
