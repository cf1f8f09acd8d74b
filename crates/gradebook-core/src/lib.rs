//! # gradebook-core
//!
//! Core library for the gradebook exam report.
//!
//! This crate provides:
//! - Letter-grade classification on a fixed +/- scale
//! - Fail-soft parsing of `surname given-name score` records
//! - Grade tallies and the fixed-order distribution histogram
//! - Mean, sample standard deviation and median over the scores
//! - Interactive scores-file selection and the full text report

pub mod acquire;
pub mod config;
pub mod error;
pub mod grade;
pub mod histogram;
pub mod lines;
pub mod record;
pub mod report;
pub mod stats;
pub mod tally;

pub use acquire::{PathPrompter, ScoresFile, acquire_scores_file};
pub use error::{Error, ParseError, Result};
pub use grade::{DISPLAY_ORDER, LetterGrade};
pub use lines::RecordLines;
pub use record::ScoreRecord;
pub use report::{ExamReport, ReportGenerator, ReportSummary};
pub use stats::{ScoreList, Statistics};
pub use tally::{GradeCount, GradeTally};
