// ABOUTME: One-shot plan calculation from a complete questionnaire profile
// ABOUTME: Chains energy model, rate conversion, and macro allocation into a MacroPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::errors::PlanResult;
use nutriplan_core::models::{
    ActivityLevel, BiometricProfile, DietType, EnergyResult, Goal, MacroPlan, PlanRecord,
    RateSpec,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::energy::compute_energy;
use super::goal_rate::{calories_from_rate, rate_spec_for, weekly_weight_change};
use super::macros::{allocate_macros, check_split, resolve_split};
use crate::config::PlannerConfig;

/// Complete set of questionnaire answers needed for a plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    /// Biometric inputs
    pub profile: BiometricProfile,
    /// Activity level for TDEE
    pub activity_level: ActivityLevel,
    /// Weight-change goal
    pub goal: Goal,
    /// Requested weekly rate, percent of body weight (ignored for maintain)
    pub rate_percentage: f64,
    /// Diet type, carrying its split when custom
    pub diet: DietType,
}

/// A plan together with everything that produced it.
///
/// The adjustment controller keeps one of these as its cache: `energy` is only
/// ever produced by `PlanCalculator::compute`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedPlan {
    /// Inputs, with the rate already clamped into the goal's band
    pub request: PlanRequest,
    /// BMR and TDEE
    pub energy: EnergyResult,
    /// Rate pair derived from the request and the profile weight
    pub rate: RateSpec,
    /// Published plan
    pub plan: MacroPlan,
}

impl ComputedPlan {
    /// Flat record for the persistence layer
    #[must_use]
    pub fn record(&self) -> PlanRecord {
        PlanRecord::new(
            &self.request.profile,
            self.request.activity_level,
            &self.request.diet,
            &self.rate,
            &self.energy,
            &self.plan,
        )
    }
}

/// Orchestrates the energy model, rate converter and macro allocator
#[derive(Debug, Clone, Copy)]
pub struct PlanCalculator<'a> {
    config: &'a PlannerConfig,
}

impl<'a> PlanCalculator<'a> {
    /// Create a calculator over a configuration
    #[must_use]
    pub const fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Compute BMR/TDEE and the full plan for a request
    ///
    /// # Errors
    ///
    /// Returns `PlanError::IncompleteProfile` for a bad profile field,
    /// `PlanError::InvalidRate` for a non-finite rate, or
    /// `PlanError::DegeneratePlan` when the numbers leave no usable target
    pub fn compute(&self, request: &PlanRequest) -> PlanResult<ComputedPlan> {
        let energy = compute_energy(
            &request.profile,
            request.activity_level,
            &self.config.bmr,
            &self.config.activity_factors,
        )?;
        let rate = rate_spec_for(
            request.goal,
            request.profile.weight_kg,
            request.rate_percentage,
            &self.config.goal_rates,
        )?;
        let plan = self.assemble(request.goal, &energy, &rate, &request.diet)?;

        Ok(ComputedPlan {
            request: PlanRequest {
                rate_percentage: rate.rate_percentage(),
                ..*request
            },
            energy,
            rate,
            plan,
        })
    }

    /// Compute only the published plan
    ///
    /// # Errors
    ///
    /// Same as [`PlanCalculator::compute`]
    pub fn compute_plan(&self, request: &PlanRequest) -> PlanResult<MacroPlan> {
        self.compute(request).map(|computed| computed.plan)
    }

    /// Build a plan from an already-known energy result.
    ///
    /// This is the rate and macro half of the pipeline; it never touches BMR or TDEE.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::DegeneratePlan` when the target is not positive or a
    /// custom percentage is not a number in `[0, 100]`
    pub fn assemble(
        &self,
        goal: Goal,
        energy: &EnergyResult,
        rate: &RateSpec,
        diet: &DietType,
    ) -> PlanResult<MacroPlan> {
        let target_calories =
            calories_from_rate(energy.tdee, goal, rate.rate_kg(), &self.config.goal_rates)?;
        let split = resolve_split(diet, &self.config.diet_splits);
        check_split(&split)?;
        let macros = allocate_macros(target_calories, &split);

        debug!(
            %goal,
            tdee = energy.tdee,
            target_calories,
            rate_kg = rate.rate_kg(),
            protein_g = macros.protein_g,
            carbs_g = macros.carbs_g,
            fat_g = macros.fat_g,
            "Assembled macro plan"
        );

        Ok(MacroPlan {
            target_calories,
            macros,
            weekly_weight_change_kg: weekly_weight_change(goal, rate),
            goal,
        })
    }
}
