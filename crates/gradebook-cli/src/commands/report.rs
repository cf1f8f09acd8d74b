//! Report command implementation.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use gradebook_core::{ReportGenerator, ReportSummary, ScoresFile, acquire_scores_file};
use tracing::info;

use crate::prompter::ConsolePrompter;

enum Source {
    /// Given on the command line; opened after the header is printed.
    Path(PathBuf),
    /// Chosen at the prompt and already open.
    Opened(ScoresFile),
}

/// Run the report command
pub fn run(file: Option<&Path>, json: bool) -> Result<()> {
    execute(
        file,
        json,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// With `json`, stdout carries only the JSON summary; the prompt goes to
/// `stderr` along with the diagnostics.
fn execute<R: BufRead, O: Write, E: Write>(
    file: Option<&Path>,
    json: bool,
    input: R,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<()> {
    let source = match file {
        Some(path) => Source::Path(path.to_path_buf()),
        None if json => {
            let mut prompter = ConsolePrompter::new(input, &mut *stderr);
            Source::Opened(acquire_scores_file(&mut prompter)?)
        }
        None => {
            let mut prompter = ConsolePrompter::new(input, &mut *stdout);
            Source::Opened(acquire_scores_file(&mut prompter)?)
        }
    };

    if json {
        if let Some(summary) = generate(io::sink(), &mut *stderr, source)? {
            writeln!(stdout, "{}", summary.to_json()?)?;
        }
    } else {
        generate(&mut *stdout, &mut *stderr, source)?;
    }

    stdout.flush()?;
    Ok(())
}

fn generate<O: Write, D: Write>(out: O, diag: D, source: Source) -> Result<Option<ReportSummary>> {
    let mut generator = ReportGenerator::new(out, diag);
    let summary = match source {
        Source::Path(path) => {
            info!("Reporting on {:?}", path);
            generator.run_path(path)?
        }
        Source::Opened(file) => {
            info!("Reporting on {:?}", file.path());
            generator.run(file.into_reader())?
        }
    };
    Ok(summary)
}
