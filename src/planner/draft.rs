// ABOUTME: Partially completed questionnaire answers and their conversion into a plan request
// ABOUTME: Reports the first missing field instead of defaulting required inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::errors::{PlanError, PlanResult, ProfileField};
use nutriplan_core::models::{ActivityLevel, BiometricProfile, DietType, Goal, Sex};
use serde::{Deserialize, Serialize};

use super::calculator::PlanRequest;
use crate::config::GoalRateConfig;

/// Answers collected so far by the step wizard
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileDraft {
    /// Age in years
    pub age: Option<u32>,
    /// Biological sex
    pub sex: Option<Sex>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Activity level
    pub activity_level: Option<ActivityLevel>,
    /// Weight-change goal
    pub goal: Option<Goal>,
    /// Weekly rate, percent of body weight
    pub rate_percentage: Option<f64>,
    /// Diet type
    pub diet: Option<DietType>,
}

impl ProfileDraft {
    /// Biometric profile and activity level, if all five are present
    ///
    /// # Errors
    ///
    /// Returns `PlanError::IncompleteProfile` naming the first missing field
    pub fn profile(&self) -> PlanResult<(BiometricProfile, ActivityLevel)> {
        let age = self.age.ok_or(PlanError::incomplete(ProfileField::Age))?;
        let sex = self.sex.ok_or(PlanError::incomplete(ProfileField::Sex))?;
        let height_cm = self
            .height_cm
            .ok_or(PlanError::incomplete(ProfileField::Height))?;
        let weight_kg = self
            .weight_kg
            .ok_or(PlanError::incomplete(ProfileField::Weight))?;
        let activity_level = self
            .activity_level
            .ok_or(PlanError::incomplete(ProfileField::ActivityLevel))?;

        Ok((
            BiometricProfile::new(age, sex, height_cm, weight_kg),
            activity_level,
        ))
    }

    /// Convert into a full request.
    ///
    /// A missing rate takes the goal's default from the band configuration.
    /// Positivity of the biometrics is checked later by the energy model.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::IncompleteProfile` naming the first missing field
    pub fn into_request(self, rates: &GoalRateConfig) -> PlanResult<PlanRequest> {
        let (profile, activity_level) = self.profile()?;
        let goal = self.goal.ok_or(PlanError::incomplete(ProfileField::Goal))?;
        let diet = self
            .diet
            .ok_or(PlanError::incomplete(ProfileField::DietType))?;
        let rate_percentage = self.rate_percentage.unwrap_or_else(|| {
            rates
                .band_for(goal)
                .map_or(0.0, |band| band.default_percent)
        });

        Ok(PlanRequest {
            profile,
            activity_level,
            goal,
            rate_percentage,
            diet,
        })
    }
}
