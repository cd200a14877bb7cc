//! floor-plan — replay plan commands from the command line
//!
//! Usage: `floor-plan [PLAN_JSON|-] [COMMANDS_JSON]`
//!
//! Without a plan file (or with `-`) the seeded demo plan is used. The
//! resulting plan, its summary and any rejected commands are printed as JSON
//! on stdout; logs go to stderr.

use std::path::Path;

use anyhow::Context;
use floor_engine::{
    CommandRejection, EngineConfig, PlanCommand, logger, normalize, summarize, validate,
};
use serde::Serialize;
use shared::models::{FloorPlan, PlanSummary};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output<'a> {
    plan: &'a FloorPlan,
    summary: PlanSummary,
    cell_size: u32,
    rejected: Vec<CommandRejection>,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = EngineConfig::from_env();
    logger::init_logger(&config.log_level, config.log_json)?;

    let mut args = std::env::args().skip(1);
    let plan_arg = args.next();
    let commands_arg = args.next();

    let mut plan = match plan_arg.as_deref() {
        None | Some("-") => {
            tracing::info!(name = %config.plan_name, "Using demo floor plan");
            config.demo_plan()
        }
        Some(path) => load_plan(Path::new(path))?,
    };

    let commands: Vec<PlanCommand> = match commands_arg {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read commands from {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("invalid commands in {path}"))?
        }
        None => Vec::new(),
    };

    let mut rejected = Vec::new();
    for (index, command) in commands.iter().enumerate() {
        match command.try_apply(&plan) {
            Ok(next) => plan = next,
            Err(e) => {
                let rejection = CommandRejection::new(index, command, &e);
                tracing::warn!(
                    index,
                    command = rejection.command,
                    code = %rejection.code,
                    reason = rejection.message,
                    "Command rejected: {}",
                    rejection.detail
                );
                rejected.push(rejection);
            }
        }
    }

    tracing::info!(
        applied = commands.len() - rejected.len(),
        rejected = rejected.len(),
        tiles = plan.tiles.len(),
        "Replay finished"
    );

    let output = Output {
        summary: summarize(&plan),
        plan: &plan,
        cell_size: config.cell_size,
        rejected,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Read a plan, check its layout, and regroup it.
///
/// Layout errors (bounds, overlaps, duplicate ids) are fatal; stale group
/// labels and seat counts are repaired.
fn load_plan(path: &Path) -> anyhow::Result<FloorPlan> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read plan from {}", path.display()))?;
    let plan: FloorPlan = serde_json::from_str(&raw)
        .with_context(|| format!("invalid plan in {}", path.display()))?;

    let plan = normalize(plan);
    validate(&plan).with_context(|| format!("inconsistent plan in {}", path.display()))?;

    tracing::info!(plan_id = %plan.id, tiles = plan.tiles.len(), "Loaded floor plan");
    Ok(plan)
}
