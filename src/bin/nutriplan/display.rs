// ABOUTME: Terminal rendering of plans for the nutriplan CLI
// ABOUTME: Human-readable plan summary, slider rows, and JSON record output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutriplan::models::{EnergyResult, MacroPlan, PlanRecord, RateSpec};
use nutriplan::planner::RateIntensity;

/// Print a full plan summary
pub fn display_plan(
    energy: &EnergyResult,
    rate: &RateSpec,
    plan: &MacroPlan,
    label: Option<RateIntensity>,
) {
    println!("Goal:            {}", plan.goal);
    println!("BMR:             {} kcal", energy.bmr);
    println!("TDEE:            {} kcal", energy.tdee);
    if let Some(label) = label {
        println!(
            "Rate:            {:.2}% of body weight ({:.2} kg/week, {label})",
            rate.rate_percentage(),
            rate.rate_kg()
        );
    }
    println!("Target:          {} kcal/day", plan.target_calories);
    println!("Protein:         {} g", plan.macros.protein_g);
    println!("Carbohydrates:   {} g", plan.macros.carbs_g);
    println!("Fat:             {} g", plan.macros.fat_g);
    if let Some(pct) = plan.macros.percentages() {
        println!(
            "Energy split:    {:.0}/{:.0}/{:.0}",
            pct.protein_percent, pct.carbs_percent, pct.fat_percent
        );
    }
    println!("Weekly change:   {:+.2} kg", plan.weekly_weight_change_kg);
}

/// Print one slider position
pub fn display_adjustment_row(rate_percentage: f64, plan: &MacroPlan, label: Option<RateIntensity>) {
    let label = label.map_or_else(|| "-".to_owned(), |l| l.to_string());
    println!(
        "{rate_percentage:>5.2}%  {:>5} kcal  P {:>4} g  C {:>4} g  F {:>4} g  {:+.2} kg/wk  {label}",
        plan.target_calories,
        plan.macros.protein_g,
        plan.macros.carbs_g,
        plan.macros.fat_g,
        plan.weekly_weight_change_kg
    );
}

/// Print a persistence record as pretty JSON
pub fn display_record_json(record: &PlanRecord) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}
