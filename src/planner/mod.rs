// ABOUTME: Energy and macro planning engine
// ABOUTME: Energy model, rate conversion, macro allocation, one-shot calculator, and adjustment controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planning Engine
//!
//! Data flows one way for a full calculation
//! (profile → energy → rate → macros → plan) and in a short loop while the user
//! drags the rate slider, with BMR/TDEE held constant.

/// BMR and TDEE (Mifflin-St Jeor)
pub mod energy;

/// Weekly rate to daily calorie target
pub mod goal_rate;

/// Calorie target to macro grams, custom split rebalancing
pub mod macros;

/// One-shot plan calculation
pub mod calculator;

/// Partially completed questionnaire answers
pub mod draft;

/// Interactive slider-driven adjustment
pub mod adjustment;

pub use adjustment::{AdjustmentController, ChangeTracker, UnsavedFlag};
pub use calculator::{ComputedPlan, PlanCalculator, PlanRequest};
pub use draft::ProfileDraft;
pub use energy::compute_energy;
pub use goal_rate::{calories_from_rate, clamp_rate, describe_rate, RateIntensity};
pub use macros::{allocate_macros, check_split, rebalance_custom_split, resolve_split};
