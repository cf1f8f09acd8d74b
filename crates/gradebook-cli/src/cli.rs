//! CLI argument definitions for gradebook.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Midterm exam grade report", version)]
pub struct Args {
    /// Scores file to report on (skip the interactive prompt)
    #[arg(short, long, value_name = "FILE", env = "GRADEBOOK_FILE")]
    pub file: Option<PathBuf>,

    /// Print a JSON summary instead of the text report
    #[arg(long)]
    pub json: bool,
}
