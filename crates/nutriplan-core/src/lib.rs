// ABOUTME: Core types and constants for the nutriplan energy and macro planning engine
// ABOUTME: Foundation crate with the error taxonomy, data model, and physical constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing the shared data model for the nutriplan workspace.
//! It holds no formulas beyond the ones that define an invariant of a type (for
//! example the `RateSpec` percentage-to-kilogram relation), so it changes rarely.
//!
//! ## Modules
//!
//! - **errors**: `PlanError`, `ErrorCode`, `ProfileField` and enum parse errors
//! - **constants**: physical constants (kcal per gram, days per week) and defaults
//! - **models**: biometric profile, goal, diet type, rate spec, energy result and plan

/// Error taxonomy shared by the calculator and the adjustment controller
pub mod errors;

/// Physical constants and default policy values
pub mod constants;

/// Data model: profiles, goals, diet splits, rate specs, plans and persistence records
pub mod models;
