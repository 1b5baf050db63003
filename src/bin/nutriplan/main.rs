// ABOUTME: nutriplan CLI - computes and adjusts daily calorie and macro plans
// ABOUTME: Parses questionnaire answers from flags and prints plans as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # One-shot plan
//! nutriplan plan --age 30 --sex male --height 180 --weight 80 \
//!     --activity moderate --goal lose --rate 0.5 --diet balanced
//!
//! # Same plan as a flat JSON record
//! nutriplan plan ... --json
//!
//! # Custom split
//! nutriplan plan ... --diet custom --protein 35 --carbs 40 --fat 25
//!
//! # Walk the aggressiveness slider through several positions
//! nutriplan adjust ... --rates 0.25,0.5,0.75,1.0
//!
//! # Show effective configuration (defaults plus NUTRIPLAN_* overrides)
//! nutriplan config
//! ```

mod commands;
mod display;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use nutriplan::config::PlannerConfig;
use nutriplan::logging::LoggingConfig;
use nutriplan::models::{ActivityLevel, DietKind, Goal, Sex};

#[derive(Parser)]
#[command(
    name = "nutriplan",
    about = "Daily calorie and macro planner",
    long_about = "Computes BMR, TDEE, a calorie target and macro grams from a biometric profile and goal, and replays goal slider adjustments."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a plan from questionnaire answers
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the flat persistence record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute a plan, then move the rate slider through each given position
    Adjust {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Slider positions, percent of body weight per week (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        rates: Vec<f64>,
    },

    /// Print the effective planner configuration as JSON
    Config,
}

/// Questionnaire answers; missing required ones are reported by name
#[derive(Args, Debug, Clone)]
struct ProfileArgs {
    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Biological sex (male, female)
    #[arg(long)]
    sex: Option<Sex>,

    /// Height in centimeters
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Activity level (sedentary, light, moderate, heavy, extreme)
    #[arg(long)]
    activity: Option<ActivityLevel>,

    /// Goal (lose, gain, maintain)
    #[arg(long)]
    goal: Option<Goal>,

    /// Weekly rate, percent of body weight (defaults per goal)
    #[arg(long)]
    rate: Option<f64>,

    /// Diet type (balanced, high-protein, low-carb, keto, custom)
    #[arg(long)]
    diet: Option<DietKind>,

    /// Custom split: protein percent
    #[arg(long)]
    protein: Option<f64>,

    /// Custom split: carbohydrate percent
    #[arg(long)]
    carbs: Option<f64>,

    /// Custom split: fat percent
    #[arg(long)]
    fat: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = PlannerConfig::global();

    match cli.command {
        Command::Plan { profile, json } => commands::plan::run(config, &profile, json)?,
        Command::Adjust { profile, rates } => commands::adjust::run(config, &profile, &rates)?,
        Command::Config => commands::show_config::run(config)?,
    }

    Ok(())
}
