// ABOUTME: Integration tests for the interactive adjustment controller
// ABOUTME: Slider clamping, cached energy, goal switches, diet edits, and unsaved-change tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, male_request, test_config, MACRO_ROUNDING_TOLERANCE_KCAL};
use nutriplan::errors::{PlanError, ProfileField};
use nutriplan::models::{
    ActivityLevel, BiometricProfile, DietType, Goal, MacroSplit, Macronutrient, Sex,
};
use nutriplan::planner::{AdjustmentController, ChangeTracker, RateIntensity};

fn started(goal: Goal, rate_percentage: f64, diet: DietType) -> AdjustmentController {
    let mut controller = AdjustmentController::new(test_config());
    controller
        .start(&male_request(goal, rate_percentage, diet))
        .unwrap();
    controller
}

/// Records how often the controller reported a change
#[derive(Debug, Default)]
struct CountingTracker {
    marks: usize,
    dirty: bool,
}

impl ChangeTracker for CountingTracker {
    fn mark_unsaved(&mut self) {
        self.marks += 1;
        self.dirty = true;
    }

    fn mark_saved(&mut self) {
        self.dirty = false;
    }

    fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_operations_before_start_are_not_initialized() {
    let mut controller = AdjustmentController::new(test_config());

    assert!(!controller.is_active());
    assert_eq!(controller.on_rate_changed(0.5), Err(PlanError::NotInitialized));
    assert_eq!(
        controller.on_goal_changed(Goal::GainWeight),
        Err(PlanError::NotInitialized)
    );
    assert_eq!(
        controller.on_diet_changed(DietType::Keto),
        Err(PlanError::NotInitialized)
    );
    assert!(controller.plan().is_err());
    assert!(!controller.tracker().has_unsaved_changes());
}

#[test]
fn test_failed_start_stays_uninitialized() {
    let mut controller = AdjustmentController::new(test_config());
    let mut request = male_request(Goal::Maintain, 0.0, DietType::Balanced);
    request.profile = BiometricProfile::new(30, Sex::Male, 180.0, 0.0);

    assert_eq!(
        controller.start(&request),
        Err(PlanError::incomplete(ProfileField::Weight))
    );
    assert!(!controller.is_active());
}

#[test]
fn test_start_publishes_without_marking_unsaved() {
    let controller = started(Goal::LoseWeight, 0.5, DietType::Balanced);

    assert!(controller.is_active());
    assert_eq!(controller.plan().unwrap().target_calories, 2319);
    assert!(!controller.tracker().has_unsaved_changes());
}

// ============================================================================
// Rate Slider
// ============================================================================

#[test]
fn test_rate_change_reuses_cached_energy() {
    let mut controller = started(Goal::LoseWeight, 0.5, DietType::Balanced);
    let before = controller.energy().unwrap();

    let plan = controller.on_rate_changed(0.75).unwrap();

    assert_eq!(controller.energy().unwrap(), before);
    // 0.6 kg/week -> 660 kcal/day
    assert_eq!(plan.target_calories, 2099);
    assert_close(plan.weekly_weight_change_kg, -0.6);
    assert_eq!(controller.plan().unwrap(), &plan);
}

#[test]
fn test_same_rate_twice_is_idempotent() {
    let mut controller = started(Goal::LoseWeight, 0.25, DietType::HighProtein);

    let first = controller.on_rate_changed(0.6).unwrap();
    let second = controller.on_rate_changed(0.6).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_slider_below_band_clamps_to_minimum() {
    let mut controller = started(Goal::LoseWeight, 0.5, DietType::Balanced);

    let plan = controller.on_rate_changed(0.24).unwrap();

    assert_close(controller.rate().unwrap().rate_percentage(), 0.25);
    assert_close(controller.rate().unwrap().rate_kg(), 0.2);
    assert_eq!(plan.target_calories, 2539);
}

#[test]
fn test_slider_above_band_clamps_to_maximum() {
    let mut controller = started(Goal::LoseWeight, 0.5, DietType::Balanced);

    let plan = controller.on_rate_changed(1.01).unwrap();

    assert_close(controller.rate().unwrap().rate_percentage(), 1.0);
    assert_eq!(plan.target_calories, 1879);
    assert_eq!(
        controller.rate_feedback().unwrap(),
        Some(RateIntensity::Aggressive)
    );
}

#[test]
fn test_nan_slider_keeps_previous_plan() {
    let mut controller = started(Goal::LoseWeight, 0.5, DietType::Balanced);
    let before = *controller.plan().unwrap();

    assert!(matches!(
        controller.on_rate_changed(f64::NAN),
        Err(PlanError::InvalidRate { .. })
    ));
    assert_eq!(controller.plan().unwrap(), &before);
    assert!(!controller.tracker().has_unsaved_changes());
}

#[test]
fn test_published_plan_is_internally_consistent() {
    let mut controller = started(Goal::GainWeight, 0.25, DietType::LowCarb);

    for step in 16..=50 {
        let rate = f64::from(step) / 100.0;
        let plan = controller.on_rate_changed(rate).unwrap();
        let energy = controller.energy().unwrap();
        let spec = controller.rate().unwrap();

        let delta = (spec.rate_kg() * 7700.0 / 7.0).round() as u32;
        assert_eq!(plan.target_calories, energy.tdee + delta);
        assert!(
            (plan.macros.total_kcal() - f64::from(plan.target_calories)).abs()
                <= MACRO_ROUNDING_TOLERANCE_KCAL
        );
    }
}

#[test]
fn test_rate_change_under_maintain_keeps_tdee() {
    let mut controller = started(Goal::Maintain, 0.0, DietType::Balanced);

    let plan = controller.on_rate_changed(0.8).unwrap();

    assert_eq!(plan.target_calories, 2759);
    assert_close(controller.rate().unwrap().rate_kg(), 0.0);
    assert_eq!(controller.rate_feedback().unwrap(), None);
}

#[test]
fn test_rate_change_under_maintain_leaves_no_unsaved_changes() {
    let mut controller = started(Goal::Maintain, 0.0, DietType::Balanced);

    controller.on_rate_changed(0.8).unwrap();

    assert!(!controller.tracker().has_unsaved_changes());
}

#[test]
fn test_repeated_slider_position_marks_unsaved_once() {
    let mut controller =
        AdjustmentController::with_tracker(test_config(), CountingTracker::default());
    controller
        .start(&male_request(Goal::LoseWeight, 0.5, DietType::Balanced))
        .unwrap();

    controller.on_rate_changed(0.6).unwrap();
    controller.on_rate_changed(0.6).unwrap();

    assert_eq!(controller.tracker().marks, 1);
}

// ============================================================================
// Goal Changes
// ============================================================================

#[test]
fn test_goal_switch_reclamps_rate() {
    let mut controller = started(Goal::LoseWeight, 0.75, DietType::Balanced);

    let plan = controller.on_goal_changed(Goal::GainWeight).unwrap();

    assert_close(controller.rate().unwrap().rate_percentage(), 0.5);
    assert_eq!(plan.goal, Goal::GainWeight);
    // 0.4 kg/week -> 440 kcal/day surplus
    assert_eq!(plan.target_calories, 3199);
    assert!(plan.weekly_weight_change_kg > 0.0);
    assert_eq!(controller.request().unwrap().goal, Goal::GainWeight);
}

#[test]
fn test_switch_to_maintain_and_back() {
    let mut controller = started(Goal::LoseWeight, 0.5, DietType::Balanced);

    let maintain = controller.on_goal_changed(Goal::Maintain).unwrap();
    assert_eq!(maintain.target_calories, 2759);
    assert_close(maintain.weekly_weight_change_kg, 0.0);

    let loss = controller.on_goal_changed(Goal::LoseWeight).unwrap();
    assert_close(controller.rate().unwrap().rate_percentage(), 0.25);
    assert_eq!(loss.target_calories, 2539);
}

#[test]
fn test_leaving_maintain_seeds_band_minimum() {
    let mut config = test_config();
    config.goal_rates.gain.min_percent = 0.2;
    let mut controller = AdjustmentController::new(config);
    controller
        .start(&male_request(Goal::Maintain, 0.0, DietType::Balanced))
        .unwrap();

    let plan = controller.on_goal_changed(Goal::GainWeight).unwrap();

    assert_close(controller.rate().unwrap().rate_percentage(), 0.2);
    // 0.16 kg/week -> 176 kcal/day surplus
    assert_eq!(plan.target_calories, 2935);
    assert!(controller.tracker().has_unsaved_changes());
}

// ============================================================================
// Diet and Profile Changes
// ============================================================================

#[test]
fn test_diet_change_keeps_calories() {
    let mut controller = started(Goal::LoseWeight, 0.5, DietType::Balanced);

    let plan = controller.on_diet_changed(DietType::Keto).unwrap();

    assert_eq!(plan.target_calories, 2319);
    // 2319 * 0.05 / 4 = 28.99
    assert_eq!(plan.macros.carbs_g, 29);
    assert_eq!(controller.request().unwrap().diet, DietType::Keto);
}

#[test]
fn test_custom_macro_edit_rebalances_and_recomputes() {
    let mut controller = started(
        Goal::Maintain,
        0.0,
        DietType::Custom(MacroSplit::new(25.0, 45.0, 30.0)),
    );

    let plan = controller
        .on_custom_macro_changed(Macronutrient::Protein, 35.0)
        .unwrap();

    assert_eq!(
        controller.request().unwrap().diet,
        DietType::Custom(MacroSplit::new(35.0, 40.0, 25.0))
    );
    // 2759 * 0.35 / 4 = 241.4
    assert_eq!(plan.macros.protein_g, 241);
    assert_eq!(plan.target_calories, 2759);
}

#[test]
fn test_custom_edit_from_preset_seeds_from_preset_split() {
    let mut controller = started(Goal::Maintain, 0.0, DietType::Balanced);

    controller
        .on_custom_macro_changed(Macronutrient::Carbs, 40.0)
        .unwrap();

    assert_eq!(
        controller.request().unwrap().diet,
        DietType::Custom(MacroSplit::new(25.0, 40.0, 35.0))
    );
}

#[test]
fn test_replace_profile_refreshes_energy_cache() {
    let mut controller = started(Goal::LoseWeight, 0.5, DietType::Balanced);

    let plan = controller
        .replace_profile(
            BiometricProfile::new(30, Sex::Male, 180.0, 90.0),
            ActivityLevel::Moderate,
        )
        .unwrap();

    let energy = controller.energy().unwrap();
    assert_eq!(energy.bmr, 1880);
    // 1880 * 1.55 = 2914
    assert_eq!(energy.tdee, 2914);
    // 0.5% of 90 kg = 0.45 kg/week -> 495 kcal/day
    assert_close(controller.rate().unwrap().rate_kg(), 0.45);
    assert_eq!(plan.target_calories, 2419);
}

// ============================================================================
// Unsaved Changes and Persistence
// ============================================================================

#[test]
fn test_every_edit_marks_unsaved() {
    let mut controller =
        AdjustmentController::with_tracker(test_config(), CountingTracker::default());
    controller
        .start(&male_request(Goal::LoseWeight, 0.5, DietType::Balanced))
        .unwrap();
    assert_eq!(controller.tracker().marks, 0);

    controller.on_rate_changed(0.6).unwrap();
    controller.on_goal_changed(Goal::GainWeight).unwrap();
    controller.on_diet_changed(DietType::LowCarb).unwrap();
    controller
        .on_custom_macro_changed(Macronutrient::Fat, 40.0)
        .unwrap();

    assert_eq!(controller.tracker().marks, 4);
    assert!(controller.tracker().has_unsaved_changes());

    controller.tracker_mut().mark_saved();
    assert!(!controller.tracker().has_unsaved_changes());
}

#[test]
fn test_record_reflects_latest_adjustment() {
    let mut controller = started(Goal::LoseWeight, 0.5, DietType::Balanced);
    controller.on_rate_changed(0.75).unwrap();

    let record = controller.record().unwrap();

    assert_eq!(record.target_calories, 2099);
    assert_close(record.rate_percentage, 0.75);
    assert_close(record.rate_kg, 0.6);
    assert_eq!(record.tdee, 2759);
}
