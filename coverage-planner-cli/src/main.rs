use std::fs;
use std::process::ExitCode;

use clap::Parser;
use coverage_planner::{plan, Orientation, PlannerError, PlannerParams, Rect, Trajectory, Wall};
use serde::Deserialize;
use thiserror::Error;

mod cli;

/// The on-disk job description consumed by this shell.
#[derive(Deserialize)]
struct Job {
    wall: Wall,
    #[serde(default)]
    obstacles: Vec<Rect>,
    params: JobParams,
}

#[derive(Deserialize)]
struct JobParams {
    tool_width: f64,
    #[serde(default)]
    overlap: f64,
    #[serde(default)]
    safe_margin: f64,
    #[serde(default = "default_orientation")]
    orientation: Orientation,
}

fn default_orientation() -> Orientation {
    Orientation::Auto
}

#[derive(Error, Debug)]
enum CliError {
    #[error("could not read job file {path}: {source}")]
    Read { path: String, #[source] source: std::io::Error },
    #[error("could not parse job file {path}: {source}")]
    Parse { path: String, #[source] source: serde_json::Error },
    #[error("could not build wall or parameters: {0}")]
    InvalidInput(#[from] PlannerError),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = cli::Cli::parse();

    match run(&cli) {
        Ok(trajectory) => {
            let rendered = if cli.pretty {
                serde_json::to_string_pretty(&trajectory)
            } else {
                serde_json::to_string(&trajectory)
            }
            .expect("Trajectory serialization is infallible for well-formed output");
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            match &err {
                CliError::Read { .. } | CliError::Parse { .. } => ExitCode::from(2),
                CliError::InvalidInput(PlannerError::InvalidParameters(_)) => ExitCode::from(64),
                CliError::InvalidInput(PlannerError::CollisionDetected { .. }) => ExitCode::from(70),
            }
        }
    }
}

fn run(cli: &cli::Cli) -> Result<Trajectory, CliError> {
    let path = cli.input.display().to_string();
    let raw = fs::read_to_string(&cli.input).map_err(|source| CliError::Read { path: path.clone(), source })?;
    let job: Job = serde_json::from_str(&raw).map_err(|source| CliError::Parse { path, source })?;
    let wall = Wall::new(job.wall.width, job.wall.height)?;

    let params = PlannerParams::new(
        job.params.tool_width,
        job.params.overlap,
        job.params.safe_margin,
        job.params.orientation,
    )?;

    log::info!(
        "planning {}x{}m wall with {} obstacle(s)",
        wall.width,
        wall.height,
        job.obstacles.len()
    );

    Ok(plan(wall, &job.obstacles, params)?)
}
