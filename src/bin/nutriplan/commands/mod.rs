// ABOUTME: Command modules for the nutriplan CLI
// ABOUTME: Plan, adjust, and config subcommands plus flag-to-request conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod adjust;
pub mod plan;
pub mod show_config;

use anyhow::{bail, Result};
use nutriplan::config::PlannerConfig;
use nutriplan::models::{DietKind, DietType, MacroSplit};
use nutriplan::planner::{PlanRequest, ProfileDraft};

use crate::ProfileArgs;

fn diet_from_args(args: &ProfileArgs) -> Result<Option<DietType>> {
    let Some(kind) = args.diet else {
        return Ok(None);
    };
    let diet = match kind {
        DietKind::Balanced => DietType::Balanced,
        DietKind::HighProtein => DietType::HighProtein,
        DietKind::LowCarb => DietType::LowCarb,
        DietKind::Keto => DietType::Keto,
        DietKind::Custom => match (args.protein, args.carbs, args.fat) {
            (Some(protein), Some(carbs), Some(fat)) => {
                DietType::Custom(MacroSplit::new(protein, carbs, fat))
            }
            _ => bail!("--diet custom needs --protein, --carbs and --fat"),
        },
    };
    Ok(Some(diet))
}

/// Convert flags into a complete request, naming the first missing answer
pub fn request_from_args(args: &ProfileArgs, config: &PlannerConfig) -> Result<PlanRequest> {
    let draft = ProfileDraft {
        age: args.age,
        sex: args.sex,
        height_cm: args.height,
        weight_kg: args.weight,
        activity_level: args.activity,
        goal: args.goal,
        rate_percentage: args.rate,
        diet: diet_from_args(args)?,
    };
    Ok(draft.into_request(&config.goal_rates)?)
}
