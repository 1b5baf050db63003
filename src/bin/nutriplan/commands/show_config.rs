// ABOUTME: Configuration dump command for the nutriplan CLI
// ABOUTME: Prints the validated planner configuration as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutriplan::config::PlannerConfig;

/// Print the effective configuration
pub fn run(config: &PlannerConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
