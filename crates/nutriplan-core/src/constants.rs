// ABOUTME: Physical constants and default policy values for energy and macro planning
// ABOUTME: Macronutrient energy densities, body-mass energy density, and rate band defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Macronutrient energy densities (Atwater general factors)
pub mod energy_density {
    /// Protein: 4 kcal per gram
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate: 4 kcal per gram
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat: 9 kcal per gram
    pub const FAT_KCAL_PER_G: f64 = 9.0;
    /// Approximate energy content of one kilogram of body-mass change
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;
    /// Largest body-mass energy density a configuration may set
    pub const MAX_KCAL_PER_KG_BODY_MASS: f64 = 20_000.0;
}

/// Calendar conversions
pub mod time {
    /// Days in a week, used to turn a weekly rate into a daily delta
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Default rate bands in percent of body weight per week
pub mod rate_bands {
    /// Slowest selectable weight-loss rate
    pub const LOSS_MIN_PERCENT: f64 = 0.25;
    /// Fastest selectable weight-loss rate
    pub const LOSS_MAX_PERCENT: f64 = 1.0;
    /// Initial weight-loss rate when none was chosen
    pub const LOSS_DEFAULT_PERCENT: f64 = 0.5;
    /// Slowest selectable weight-gain rate
    pub const GAIN_MIN_PERCENT: f64 = 0.16;
    /// Fastest selectable weight-gain rate
    pub const GAIN_MAX_PERCENT: f64 = 0.5;
    /// Initial weight-gain rate when none was chosen
    pub const GAIN_DEFAULT_PERCENT: f64 = 0.25;
}

/// Custom macro split editing
pub mod custom_split {
    /// Lowest percentage a rebalanced macro may be pushed down to
    pub const FLOOR_PERCENT: f64 = 5.0;
    /// Target total of a macro split
    pub const TOTAL_PERCENT: f64 = 100.0;
}

/// Service names used in structured logs
pub mod service_names {
    /// Name of the planner service
    pub const NUTRIPLAN: &str = "nutriplan";
}
