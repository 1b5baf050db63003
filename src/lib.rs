// ABOUTME: Main library entry point for the nutrition planner
// ABOUTME: Energy model, goal rate conversion, macro allocation, and interactive plan adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! Turns a user's biometric profile and goal choices into a daily calorie target
//! and a protein/carbohydrate/fat gram allocation, then keeps that plan consistent
//! while the user drags a "goal aggressiveness" slider.
//!
//! ## Architecture
//!
//! - **Models** (`nutriplan-core`): profile, goal, diet, plan and record types plus errors
//! - **Config**: every coefficient, band and preset the engine uses, with env overrides
//! - **Planner**: energy model, rate converter, macro allocator, calculator, controller
//!
//! ## Example Usage
//!
//! ```rust
//! use nutriplan::config::PlannerConfig;
//! use nutriplan::models::{ActivityLevel, BiometricProfile, DietType, Goal, Sex};
//! use nutriplan::planner::{PlanCalculator, PlanRequest};
//!
//! let config = PlannerConfig::default();
//! let request = PlanRequest {
//!     profile: BiometricProfile::new(30, Sex::Male, 180.0, 80.0),
//!     activity_level: ActivityLevel::Moderate,
//!     goal: Goal::Maintain,
//!     rate_percentage: 0.0,
//!     diet: DietType::Balanced,
//! };
//!
//! let plan = PlanCalculator::new(&config).compute_plan(&request)?;
//! assert_eq!(plan.target_calories, 2759);
//! # Ok::<(), nutriplan::errors::PlanError>(())
//! ```

/// Planner configuration and environment overrides
pub mod config;

/// Structured logging setup
pub mod logging;

/// Energy and macro planning engine
pub mod planner;

pub use nutriplan_core::{constants, errors, models};
