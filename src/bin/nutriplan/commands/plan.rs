// ABOUTME: One-shot plan command for the nutriplan CLI
// ABOUTME: Runs the calculator and prints the plan or its JSON record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutriplan::config::PlannerConfig;
use nutriplan::planner::{describe_rate, PlanCalculator};
use tracing::info;

use super::request_from_args;
use crate::display::{display_plan, display_record_json};
use crate::ProfileArgs;

/// Compute and print a plan
pub fn run(config: &PlannerConfig, args: &ProfileArgs, json: bool) -> Result<()> {
    let request = request_from_args(args, config)?;
    let computed = PlanCalculator::new(config).compute(&request)?;
    info!(
        target_calories = computed.plan.target_calories,
        "Plan computed"
    );

    if json {
        display_record_json(&computed.record())?;
    } else {
        let label = describe_rate(
            computed.request.goal,
            computed.rate.rate_percentage(),
            &config.rate_labels,
        );
        display_plan(&computed.energy, &computed.rate, &computed.plan, label);
    }

    Ok(())
}
