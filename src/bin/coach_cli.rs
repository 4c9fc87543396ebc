// ABOUTME: Coach CLI - offline harness over the coaching service
// ABOUTME: Reads a request body and optional model reply from files and prints the JSON result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors
//!
//! Usage:
//! ```bash
//! # Training plan from a saved model reply, reproducible remainder day
//! coach-cli plan --request player.json --reply reply.txt --seed 42
//!
//! # Default nutrition advice (no model reply)
//! coach-cli nutrition --request body.json
//!
//! # Print the prompt that would be sent to the model
//! coach-cli nutrition --request body.json --prompt
//!
//! # Player assessment
//! coach-cli assess --request assessment.json
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use academy_coach::config::CoachConfig;
use academy_coach::logging::LoggingConfig;
use academy_coach::models::FieldRecord;
use academy_coach::services::CoachingService;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "coach-cli",
    about = "Academy coaching core CLI",
    long_about = "Runs training plan, nutrition and assessment reconciliation offline against saved request bodies and model replies."
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
    /// Reconcile or generate a weekly training plan
    Plan {
        #[command(flatten)]
        input: ModelInput,

        /// Seed for the remainder-day draw (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Reconcile or compute nutrition advice
    Nutrition {
        #[command(flatten)]
        input: ModelInput,
    },

    /// Assess a player from metrics and questionnaire answers
    Assess {
        /// Request body JSON file (`-` for stdin)
        #[arg(long)]
        request: PathBuf,
    },
}

#[derive(Args)]
struct ModelInput {
    /// Request body JSON file (`-` for stdin)
    #[arg(long)]
    request: PathBuf,

    /// Raw model reply file
    #[arg(long)]
    reply: Option<PathBuf>,

    /// Print the model prompt instead of a result
    #[arg(long)]
    prompt: bool,
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read request from stdin")?;
        return Ok(body);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_request(path: &Path) -> Result<FieldRecord> {
    let body = read_input(path)?;
    Ok(FieldRecord::from_json_str(&body)?)
}

fn load_reply(path: Option<&Path>) -> Result<Option<String>> {
    path.map(read_input).transpose()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{rendered}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let service = CoachingService::new(CoachConfig::global());

    match cli.command {
        Command::Plan { input, seed } => {
            let request = load_request(&input.request)?;
            if input.prompt {
                println!("{}", service.training_plan_prompt(&request));
                return Ok(());
            }
            let reply = load_reply(input.reply.as_deref())?;
            let plan = if let Some(seed) = seed {
                info!("Using seeded remainder-day draw ({seed})");
                service.training_plan(&request, reply.as_deref(), &mut ChaCha8Rng::seed_from_u64(seed))
            } else {
                service.training_plan(&request, reply.as_deref(), &mut rand::thread_rng())
            };
            print_json(&plan)
        }
        Command::Nutrition { input } => {
            let request = load_request(&input.request)?;
            if input.prompt {
                println!("{}", service.nutrition_prompt(&request));
                return Ok(());
            }
            let reply = load_reply(input.reply.as_deref())?;
            print_json(&service.nutrition_advice(&request, reply.as_deref()))
        }
        Command::Assess { request } => {
            let request = load_request(&request)?;
            print_json(&service.player_assessment(&request))
        }
    }
}
