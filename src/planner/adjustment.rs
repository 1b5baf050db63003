// ABOUTME: Interactive plan adjustment driven by the goal aggressiveness slider
// ABOUTME: Caches BMR/TDEE and republishes whole plans on rate, goal, and diet changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adjustment Controller
//!
//! Two states: `Uninitialized` until the first full calculation, then `Active`
//! holding the cached `EnergyResult` and the current plan. Rate and goal changes
//! reuse the cached energy; profile and diet changes go back through
//! `PlanCalculator` and refresh it.
//!
//! Every operation builds the complete next state first and swaps it in with one
//! assignment, so no reader sees new calories next to old macros. The controller
//! assumes one caller at a time; rapid slider events are serialized upstream and
//! the last one wins.

use nutriplan_core::errors::{PlanError, PlanResult};
use nutriplan_core::models::{
    ActivityLevel, BiometricProfile, DietType, EnergyResult, Goal, MacroPlan, Macronutrient,
    PlanRecord, RateSpec,
};
use tracing::info;

use super::calculator::{ComputedPlan, PlanCalculator, PlanRequest};
use super::goal_rate::{describe_rate, rate_spec_for, RateIntensity};
use super::macros::{rebalance_custom_split, resolve_split};
use crate::config::PlannerConfig;

/// Unsaved-changes flag owned by the persistence layer.
///
/// The controller only ever sets it; persistence clears it after a save.
pub trait ChangeTracker {
    /// Record that the published plan differs from the stored one
    fn mark_unsaved(&mut self);
    /// Record that the published plan has been stored
    fn mark_saved(&mut self);
    /// Whether there are changes not yet stored
    fn has_unsaved_changes(&self) -> bool;
}

/// In-memory `ChangeTracker`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnsavedFlag {
    dirty: bool,
}

impl ChangeTracker for UnsavedFlag {
    fn mark_unsaved(&mut self) {
        self.dirty = true;
    }

    fn mark_saved(&mut self) {
        self.dirty = false;
    }

    fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }
}

#[derive(Debug, Clone)]
enum ControllerState {
    Uninitialized,
    Active(Box<ComputedPlan>),
}

/// Interactive layer over `PlanCalculator`
#[derive(Debug, Clone)]
pub struct AdjustmentController<T: ChangeTracker = UnsavedFlag> {
    config: PlannerConfig,
    state: ControllerState,
    tracker: T,
}

impl AdjustmentController<UnsavedFlag> {
    /// Create an uninitialized controller with an in-memory unsaved flag
    #[must_use]
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_tracker(config, UnsavedFlag::default())
    }
}

impl<T: ChangeTracker> AdjustmentController<T> {
    /// Create an uninitialized controller reporting to the given tracker
    #[must_use]
    pub fn with_tracker(config: PlannerConfig, tracker: T) -> Self {
        Self {
            config,
            state: ControllerState::Uninitialized,
            tracker,
        }
    }

    /// Run the full calculation and enter `Active`.
    ///
    /// Used at questionnaire completion. Does not touch the unsaved flag: the
    /// first plan is the one persistence is about to store.
    ///
    /// # Errors
    ///
    /// Propagates `PlanCalculator::compute` errors; the previous state is kept
    pub fn start(&mut self, request: &PlanRequest) -> PlanResult<MacroPlan> {
        let computed = PlanCalculator::new(&self.config).compute(request)?;
        info!(
            bmr = computed.energy.bmr,
            tdee = computed.energy.tdee,
            target_calories = computed.plan.target_calories,
            goal = %computed.plan.goal,
            "Plan calculated; adjustment session active"
        );
        Ok(self.publish(computed))
    }

    /// Apply a new slider position.
    ///
    /// The rate is clamped into the current goal's band, converted to kg against
    /// the profile weight, and turned into calories from the cached TDEE and
    /// macros from the current split.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NotInitialized` before `start`, `PlanError::InvalidRate`
    /// for a non-finite rate, or `PlanError::DegeneratePlan`
    pub fn on_rate_changed(&mut self, rate_percentage: f64) -> PlanResult<MacroPlan> {
        let current = *self.active()?;
        let next = self.adjust(&current, current.request.goal, rate_percentage)?;
        Ok(self.commit(&current, next))
    }

    /// Switch goal, reclamping the current rate into the new goal's band.
    ///
    /// Leaving maintain starts from the bottom of the new band.
    ///
    /// # Errors
    ///
    /// Same as [`AdjustmentController::on_rate_changed`]
    pub fn on_goal_changed(&mut self, goal: Goal) -> PlanResult<MacroPlan> {
        let current = *self.active()?;
        let rate_percentage = if current.request.goal.has_rate() {
            current.request.rate_percentage
        } else {
            self.config
                .goal_rates
                .band_for(goal)
                .map_or(0.0, |band| band.min_percent)
        };
        let next = self.adjust(&current, goal, rate_percentage)?;
        Ok(self.commit(&current, next))
    }

    /// Replace the diet type, recomputing through `PlanCalculator`
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NotInitialized` before `start`, or calculator errors
    pub fn on_diet_changed(&mut self, diet: DietType) -> PlanResult<MacroPlan> {
        let current = *self.active()?;
        self.recalculate(PlanRequest {
            diet,
            ..current.request
        })
    }

    /// Move one custom macro slider.
    ///
    /// The other two are rebalanced from the current split (a preset diet seeds
    /// the custom sliders) and the diet becomes custom.
    ///
    /// # Errors
    ///
    /// Same as [`AdjustmentController::on_diet_changed`], plus
    /// `PlanError::DegeneratePlan` for a non-finite value
    pub fn on_custom_macro_changed(
        &mut self,
        nutrient: Macronutrient,
        value: f64,
    ) -> PlanResult<MacroPlan> {
        let current = *self.active()?;
        if !value.is_finite() {
            return Err(PlanError::degenerate(format!(
                "{nutrient:?} percentage {value} is not a number"
            )));
        }
        let split = resolve_split(&current.request.diet, &self.config.diet_splits);
        let rebalanced = rebalance_custom_split(split, nutrient, value, &self.config.custom_split);
        self.on_diet_changed(DietType::Custom(rebalanced))
    }

    /// Replace the biometric profile and activity level, refreshing the energy cache.
    ///
    /// The rate percentage is kept and re-derived in kg against the new weight.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NotInitialized` before `start`, or calculator errors
    pub fn replace_profile(
        &mut self,
        profile: BiometricProfile,
        activity_level: ActivityLevel,
    ) -> PlanResult<MacroPlan> {
        let current = *self.active()?;
        self.recalculate(PlanRequest {
            profile,
            activity_level,
            ..current.request
        })
    }

    /// Whether a plan exists
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, ControllerState::Active(_))
    }

    /// Current plan
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NotInitialized` before `start`
    pub fn plan(&self) -> PlanResult<&MacroPlan> {
        self.active().map(|computed| &computed.plan)
    }

    /// Cached BMR and TDEE
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NotInitialized` before `start`
    pub fn energy(&self) -> PlanResult<EnergyResult> {
        self.active().map(|computed| computed.energy)
    }

    /// Current rate pair
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NotInitialized` before `start`
    pub fn rate(&self) -> PlanResult<RateSpec> {
        self.active().map(|computed| computed.rate)
    }

    /// Current inputs
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NotInitialized` before `start`
    pub fn request(&self) -> PlanResult<&PlanRequest> {
        self.active().map(|computed| &computed.request)
    }

    /// Descriptive label for the current rate; `None` under maintain
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NotInitialized` before `start`
    pub fn rate_feedback(&self) -> PlanResult<Option<RateIntensity>> {
        self.active().map(|computed| {
            describe_rate(
                computed.request.goal,
                computed.rate.rate_percentage(),
                &self.config.rate_labels,
            )
        })
    }

    /// Flat record of the current plan for persistence
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NotInitialized` before `start`
    pub fn record(&self) -> PlanResult<PlanRecord> {
        self.active().map(ComputedPlan::record)
    }

    /// Unsaved-changes tracker
    pub const fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Mutable tracker, for persistence to clear after saving
    pub fn tracker_mut(&mut self) -> &mut T {
        &mut self.tracker
    }

    /// Configuration in use
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    fn active(&self) -> PlanResult<&ComputedPlan> {
        match &self.state {
            ControllerState::Active(computed) => Ok(&**computed),
            ControllerState::Uninitialized => Err(PlanError::NotInitialized),
        }
    }

    fn adjust(
        &self,
        current: &ComputedPlan,
        goal: Goal,
        rate_percentage: f64,
    ) -> PlanResult<ComputedPlan> {
        let rate = rate_spec_for(
            goal,
            current.request.profile.weight_kg,
            rate_percentage,
            &self.config.goal_rates,
        )?;
        let plan = PlanCalculator::new(&self.config).assemble(
            goal,
            &current.energy,
            &rate,
            &current.request.diet,
        )?;

        Ok(ComputedPlan {
            request: PlanRequest {
                goal,
                rate_percentage: rate.rate_percentage(),
                ..current.request
            },
            energy: current.energy,
            rate,
            plan,
        })
    }

    fn recalculate(&mut self, request: PlanRequest) -> PlanResult<MacroPlan> {
        let computed = PlanCalculator::new(&self.config).compute(&request)?;
        info!(
            bmr = computed.energy.bmr,
            tdee = computed.energy.tdee,
            diet = %computed.request.diet.kind(),
            "Inputs replaced; energy cache refreshed"
        );
        self.tracker.mark_unsaved();
        Ok(self.publish(computed))
    }

    fn commit(&mut self, current: &ComputedPlan, next: ComputedPlan) -> MacroPlan {
        if next != *current {
            self.tracker.mark_unsaved();
        }
        self.publish(next)
    }

    fn publish(&mut self, computed: ComputedPlan) -> MacroPlan {
        let plan = computed.plan;
        self.state = ControllerState::Active(Box::new(computed));
        plan
    }
}
