//! Report generation: the parse-and-print pass, distribution and statistics.
//!
//! Standard report output and diagnostics go to two separate sinks so the
//! binary can route them to stdout and stderr and tests can capture both.

use std::io::{BufRead, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::acquire::ScoresFile;
use crate::config::layout::{COLUMN_GAP, NAME_WIDTH, SCORE_WIDTH};
use crate::config::text;
use crate::error::{Error, Result};
use crate::grade::LetterGrade;
use crate::histogram;
use crate::lines::RecordLines;
use crate::record::ScoreRecord;
use crate::stats::{ScoreList, Statistics, round_one_decimal};
use crate::tally::{GradeCount, GradeTally};

/// Aggregates collected during one pass over a scores file.
#[derive(Debug, Clone, Default)]
pub struct ExamReport {
    scores: ScoreList,
    tally: GradeTally,
    skipped: usize,
}

impl ExamReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a record into the aggregates and return its grade.
    pub fn add(&mut self, record: &ScoreRecord) -> LetterGrade {
        let grade = record.grade();
        self.scores.push(record.score);
        self.tally.record(grade);
        grade
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    pub fn tally(&self) -> &GradeTally {
        &self.tally
    }

    pub fn record_count(&self) -> usize {
        self.scores.len()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Compute statistics; the score list is left sorted.
    pub fn statistics(&mut self) -> Statistics {
        Statistics::compute(&mut self.scores)
    }

    pub fn summary(&mut self) -> ReportSummary {
        let statistics = self.statistics();
        ReportSummary {
            records: self.record_count(),
            skipped: self.skipped,
            distribution: all_grade_counts(&self.tally),
            statistics,
        }
    }
}

fn all_grade_counts(tally: &GradeTally) -> Vec<GradeCount> {
    use strum::IntoEnumIterator;

    LetterGrade::iter()
        .map(|grade| GradeCount {
            grade,
            count: tally.count(grade),
        })
        .collect()
}

/// Machine-readable outcome of a completed report.
///
/// Unlike the printed histogram, `distribution` lists all ten grades.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub records: usize,
    pub skipped: usize,
    pub distribution: Vec<GradeCount>,
    #[serde(flatten)]
    pub statistics: Statistics,
}

impl ReportSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Writes the exam report to `out` and per-line diagnostics to `diag`.
pub struct ReportGenerator<O: Write, D: Write> {
    out: O,
    diag: D,
}

impl<O: Write, D: Write> ReportGenerator<O, D> {
    pub fn new(out: O, diag: D) -> Self {
        Self { out, diag }
    }

    pub fn into_inner(self) -> (O, D) {
        (self.out, self.diag)
    }

    /// Title, column headings and separator.
    pub fn write_header(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", text::RESULTS_TITLE)?;
        writeln!(self.out)?;
        self.write_columns(text::STUDENT_HEADING, text::SCORE_HEADING, text::GRADE_HEADING)?;
        self.write_columns("-------", "-----", "-----")?;
        Ok(())
    }

    fn write_columns(&mut self, name: &str, score: &str, grade: &str) -> Result<()> {
        writeln!(
            self.out,
            "{:<name_w$}{:>score_w$}{}{}",
            name,
            score,
            COLUMN_GAP,
            grade,
            name_w = NAME_WIDTH,
            score_w = SCORE_WIDTH
        )?;
        Ok(())
    }

    /// Parse every line of `source`, printing a row per valid record.
    ///
    /// Malformed lines are reported on the diagnostic sink and skipped. A
    /// failure to read `source` ends the pass with [`Error::Read`].
    pub fn process<R: BufRead>(&mut self, source: R) -> Result<ExamReport> {
        let mut report = ExamReport::new();

        for line in RecordLines::new(source) {
            let line = line.map_err(Error::Read)?;

            match ScoreRecord::parse(&line) {
                Ok(record) => {
                    let grade = report.add(&record);
                    debug!("Parsed {} -> {}", record.display_name(), grade);
                    self.write_record(&record, grade)?;
                }
                Err(e) => {
                    debug!("Skipping line {:?}: {}", line, e);
                    report.skip();
                    writeln!(self.diag, "Error parsing line, {} skipping", line)?;
                }
            }
        }

        info!(
            "Parsed {} records ({} skipped)",
            report.record_count(),
            report.skipped()
        );
        Ok(report)
    }

    fn write_record(&mut self, record: &ScoreRecord, grade: LetterGrade) -> Result<()> {
        writeln!(
            self.out,
            "{:<name_w$}{:>score_w$}{}{}",
            record.display_name(),
            record.score,
            COLUMN_GAP,
            grade,
            name_w = NAME_WIDTH,
            score_w = SCORE_WIDTH
        )?;
        Ok(())
    }

    pub fn write_distribution(&mut self, tally: &GradeTally) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", text::DISTRIBUTION_TITLE)?;
        writeln!(self.out)?;
        for row in histogram::format_histogram(tally) {
            writeln!(self.out, "{}", row)?;
        }
        Ok(())
    }

    pub fn write_statistics(&mut self, stats: &Statistics) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}  {}", text::AVERAGE_LABEL, format_stat(stats.average))?;
        writeln!(
            self.out,
            "{}  {}",
            text::STD_DEV_LABEL,
            format_stat(stats.standard_deviation)
        )?;
        writeln!(self.out, "{}  {}", text::MEDIAN_LABEL, format_stat(stats.median))?;
        Ok(())
    }

    /// Header, parse pass, distribution and statistics over `source`.
    ///
    /// Returns `Ok(None)` if reading `source` failed part-way; the failure is
    /// reported on the diagnostic sink and nothing after the rows is written.
    pub fn run<R: BufRead>(&mut self, source: R) -> Result<Option<ReportSummary>> {
        self.write_header()?;
        self.finish(source)
    }

    /// Like [`ReportGenerator::run`], opening `path` after the header.
    ///
    /// An unopenable path is reported as `Unexpected error opening file.` and
    /// ends the report with `Ok(None)`.
    pub fn run_path<P: AsRef<Path>>(&mut self, path: P) -> Result<Option<ReportSummary>> {
        self.write_header()?;
        let file = match ScoresFile::open(path) {
            Ok(file) => file,
            Err(e) => {
                debug!("Open failed: {}", e);
                writeln!(self.diag, "{}", text::OPEN_FAILED)?;
                return Ok(None);
            }
        };
        self.finish(file.into_reader())
    }

    fn finish<R: BufRead>(&mut self, source: R) -> Result<Option<ReportSummary>> {
        let mut report = match self.process(source) {
            Ok(report) => report,
            Err(Error::Read(e)) => {
                debug!("Read failed: {}", e);
                writeln!(self.diag, "{}", text::READ_FAILED)?;
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        self.write_distribution(report.tally())?;
        let summary = report.summary();
        self.write_statistics(&summary.statistics)?;
        self.out.flush()?;
        Ok(Some(summary))
    }
}

fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", round_one_decimal(v)),
        None => text::UNDEFINED_STAT.to_string(),
    }
}
