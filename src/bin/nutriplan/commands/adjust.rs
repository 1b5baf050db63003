// ABOUTME: Slider replay command for the nutriplan CLI
// ABOUTME: Starts an adjustment session and applies each requested rate in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutriplan::config::PlannerConfig;
use nutriplan::planner::{AdjustmentController, ChangeTracker};

use super::request_from_args;
use crate::display::display_adjustment_row;
use crate::ProfileArgs;

/// Start from the questionnaire answers and replay slider positions
pub fn run(config: &PlannerConfig, args: &ProfileArgs, rates: &[f64]) -> Result<()> {
    let request = request_from_args(args, config)?;
    let mut controller = AdjustmentController::new(config.clone());

    let plan = controller.start(&request)?;
    let energy = controller.energy()?;
    println!("BMR {} kcal, TDEE {} kcal", energy.bmr, energy.tdee);
    display_adjustment_row(
        controller.rate()?.rate_percentage(),
        &plan,
        controller.rate_feedback()?,
    );

    for &rate in rates {
        let plan = controller.on_rate_changed(rate)?;
        display_adjustment_row(
            controller.rate()?.rate_percentage(),
            &plan,
            controller.rate_feedback()?,
        );
    }

    if controller.tracker().has_unsaved_changes() {
        println!("(unsaved changes)");
    }

    Ok(())
}
