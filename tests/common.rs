// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and the reference profiles used across suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutriplan`

use std::env;
use std::sync::Once;

use nutriplan::config::PlannerConfig;
use nutriplan::models::{ActivityLevel, BiometricProfile, DietType, Goal, Sex};
use nutriplan::planner::PlanRequest;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 30-year-old male, 180 cm, 80 kg: BMR 1780, TDEE 2759 at moderate activity
pub fn male_profile() -> BiometricProfile {
    BiometricProfile::new(30, Sex::Male, 180.0, 80.0)
}

/// 28-year-old female, 165 cm, 60 kg: BMR 1330, TDEE 1829 at light activity
pub fn female_profile() -> BiometricProfile {
    BiometricProfile::new(28, Sex::Female, 165.0, 60.0)
}

/// Request for the male profile at moderate activity
pub fn male_request(goal: Goal, rate_percentage: f64, diet: DietType) -> PlanRequest {
    PlanRequest {
        profile: male_profile(),
        activity_level: ActivityLevel::Moderate,
        goal,
        rate_percentage,
        diet,
    }
}

/// Default configuration with logging initialized
pub fn test_config() -> PlannerConfig {
    init_test_logging();
    PlannerConfig::default()
}

/// Largest kcal gap whole-gram rounding can introduce: half a gram of each macro
pub const MACRO_ROUNDING_TOLERANCE_KCAL: f64 = 0.5 * 4.0 + 0.5 * 4.0 + 0.5 * 9.0;

/// Float comparison for percentages and kilograms
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
