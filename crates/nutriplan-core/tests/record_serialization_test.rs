// ABOUTME: Tests for the persisted plan record and model wire names
// ABOUTME: Checks the flat JSON field set, enum spellings, and the optional custom split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan_core::errors::{ErrorCode, PlanError, ProfileField};
use nutriplan_core::models::{
    ActivityLevel, BiometricProfile, DietType, EnergyResult, Goal, MacroGrams, MacroPlan,
    MacroSplit, PlanRecord, RateSpec, Sex,
};
use serde_json::Value;

fn sample_record(diet: DietType) -> PlanRecord {
    let plan = MacroPlan {
        target_calories: 2319,
        macros: MacroGrams {
            protein_g: 116,
            carbs_g: 290,
            fat_g: 77,
        },
        weekly_weight_change_kg: -0.4,
        goal: Goal::LoseWeight,
    };
    PlanRecord::new(
        &BiometricProfile::new(30, Sex::Male, 180.0, 80.0),
        ActivityLevel::Moderate,
        &diet,
        &RateSpec::from_percentage(80.0, 0.5),
        &EnergyResult {
            bmr: 1780,
            tdee: 2759,
        },
        &plan,
    )
}

#[test]
fn test_record_has_flat_field_set() {
    let json = serde_json::to_value(sample_record(DietType::Balanced)).unwrap();
    let object = json.as_object().unwrap();

    for field in [
        "age",
        "sex",
        "height_cm",
        "weight_kg",
        "goal",
        "rate_percentage",
        "rate_kg",
        "activity_level",
        "diet_type",
        "target_calories",
        "protein_g",
        "carbs_g",
        "fat_g",
        "weekly_weight_change_kg",
        "bmr",
        "tdee",
        "generated_at",
    ] {
        assert!(object.contains_key(field), "missing {field}");
    }
    assert!(!object.contains_key("custom_split"));
    assert_eq!(json["diet_type"], Value::from("balanced"));
    assert_eq!(json["goal"], Value::from("lose_weight"));
    assert_eq!(json["activity_level"], Value::from("moderate"));
    assert_eq!(json["target_calories"], Value::from(2319));
}

#[test]
fn test_custom_record_round_trips_split() {
    let split = MacroSplit::new(35.0, 40.0, 25.0);
    let record = sample_record(DietType::Custom(split));

    let text = serde_json::to_string(&record).unwrap();
    let back: PlanRecord = serde_json::from_str(&text).unwrap();

    assert_eq!(back.custom_split, Some(split));
    assert_eq!(back.generated_at, record.generated_at);
}

#[test]
fn test_diet_type_is_tagged() {
    let json = serde_json::to_value(DietType::Custom(MacroSplit::new(30.0, 40.0, 30.0))).unwrap();

    assert_eq!(json["type"], Value::from("custom"));
    assert_eq!(json["protein_pct"], Value::from(30.0));

    let keto: DietType = serde_json::from_str(r#"{"type":"keto"}"#).unwrap();
    assert_eq!(keto, DietType::Keto);
}

#[test]
fn test_error_code_wire_names() {
    let code = PlanError::incomplete(ProfileField::Height).code();

    assert_eq!(code, ErrorCode::IncompleteProfile);
    assert_eq!(
        serde_json::to_value(code).unwrap(),
        Value::from("INCOMPLETE_PROFILE")
    );
    assert_eq!(
        PlanError::incomplete(ProfileField::Height).to_string(),
        "incomplete profile: height is missing or not positive"
    );
}
