// ABOUTME: Error taxonomy for plan calculation and interactive adjustment
// ABOUTME: Defines PlanError, stable ErrorCode values, ProfileField, and enum parse errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Error Types
//!
//! Every failure in the planner is local and recoverable by the immediate caller.
//! None of them is ever converted into a zero or `NaN` plan value.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Goal;

/// Result alias used throughout the planner
pub type PlanResult<T> = Result<T, PlanError>;

/// Stable error codes for collaborators that map errors to UI messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A required profile field is missing or not positive
    #[serde(rename = "INCOMPLETE_PROFILE")]
    IncompleteProfile = 3001,
    /// A rate percentage is outside the goal's band
    #[serde(rename = "INVALID_RATE")]
    InvalidRate = 3003,

    // Sequencing (4000-4999)
    /// An adjustment was requested before a plan exists
    #[serde(rename = "NOT_INITIALIZED")]
    NotInitialized = 4000,

    // Computation (9000-9999)
    /// The inputs produced a non-positive or non-finite energy value
    #[serde(rename = "DEGENERATE_PLAN")]
    DegeneratePlan = 9000,
}

impl ErrorCode {
    /// Short human-readable description of the code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::IncompleteProfile => "Required profile information is missing",
            Self::InvalidRate => "Rate is outside the allowed range for this goal",
            Self::NotInitialized => "No plan has been calculated yet",
            Self::DegeneratePlan => "The inputs do not produce a usable plan",
        }
    }
}

/// Input field named by an `IncompleteProfile` error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// Age in years
    Age,
    /// Biological sex
    Sex,
    /// Height in centimeters
    Height,
    /// Weight in kilograms
    Weight,
    /// Activity level
    ActivityLevel,
    /// Weight-change goal
    Goal,
    /// Diet type
    DietType,
}

impl ProfileField {
    /// Field name as shown to collaborators
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Sex => "sex",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::ActivityLevel => "activity level",
            Self::Goal => "goal",
            Self::DietType => "diet type",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the energy, rate, macro and adjustment components
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A required biometric or activity field is missing or not positive
    #[error("incomplete profile: {field} is missing or not positive")]
    IncompleteProfile {
        /// The offending field
        field: ProfileField,
    },

    /// An adjustment operation ran before any full plan was calculated
    #[error("no plan has been calculated yet; compute a full plan first")]
    NotInitialized,

    /// A rate percentage outside the goal's allowed band
    #[error("rate {rate_percentage}% is outside the {goal} band [{min}%, {max}%]")]
    InvalidRate {
        /// Goal whose band was violated
        goal: Goal,
        /// Offending rate percentage
        rate_percentage: f64,
        /// Lower bound of the band
        min: f64,
        /// Upper bound of the band
        max: f64,
    },

    /// Inputs produced a non-positive or non-finite energy value
    #[error("degenerate plan: {reason}")]
    DegeneratePlan {
        /// What went wrong
        reason: String,
    },
}

impl PlanError {
    /// Create an incomplete profile error for a field
    #[must_use]
    pub const fn incomplete(field: ProfileField) -> Self {
        Self::IncompleteProfile { field }
    }

    /// Create a degenerate plan error
    #[must_use]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegeneratePlan {
            reason: reason.into(),
        }
    }

    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::IncompleteProfile { .. } => ErrorCode::IncompleteProfile,
            Self::NotInitialized => ErrorCode::NotInitialized,
            Self::InvalidRate { .. } => ErrorCode::InvalidRate,
            Self::DegeneratePlan { .. } => ErrorCode::DegeneratePlan,
        }
    }

    /// Whether the user can fix this by changing inputs.
    ///
    /// `NotInitialized` is a call-sequencing bug in the caller.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::NotInitialized)
    }
}

/// Failure to parse one of the model enums from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    /// Create a parse error for an enum kind and the rejected input
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_match_variants() {
        assert_eq!(
            PlanError::incomplete(ProfileField::Weight).code(),
            ErrorCode::IncompleteProfile
        );
        assert_eq!(PlanError::NotInitialized.code(), ErrorCode::NotInitialized);
        assert_eq!(
            PlanError::degenerate("negative target").code(),
            ErrorCode::DegeneratePlan
        );
    }

    #[test]
    fn test_not_initialized_is_not_recoverable() {
        assert!(!PlanError::NotInitialized.is_recoverable());
        assert!(PlanError::incomplete(ProfileField::Age).is_recoverable());
    }

    #[test]
    fn test_incomplete_profile_message_names_field() {
        let message = PlanError::incomplete(ProfileField::ActivityLevel).to_string();
        assert!(message.contains("activity level"));
    }
}
