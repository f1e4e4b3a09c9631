use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about, arg_required_else_help(true))]
pub struct Cli {
    /// Job description as a JSON file: `{"wall", "obstacles", "params"}`
    #[arg(required(true))]
    pub input: PathBuf,
    /// Pretty-print the output trajectory
    #[arg(long)]
    pub pretty: bool,
}
