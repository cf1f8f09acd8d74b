//! Grade distribution rendering.

use crate::config::layout::{HISTOGRAM_LABEL_WIDTH, HISTOGRAM_MARKER};
use crate::grade::{DISPLAY_ORDER, LetterGrade};
use crate::tally::{GradeCount, GradeTally};

/// Counts for every displayed grade, in display order, including zeros.
pub fn distribution(tally: &GradeTally) -> Vec<GradeCount> {
    DISPLAY_ORDER
        .iter()
        .map(|&grade| GradeCount {
            grade,
            count: tally.count(grade),
        })
        .collect()
}

/// `"B+ : ***"`
pub fn format_row(grade: LetterGrade, count: usize) -> String {
    format!(
        "{:<width$}: {}",
        grade,
        HISTOGRAM_MARKER.repeat(count),
        width = HISTOGRAM_LABEL_WIDTH
    )
}

pub fn format_histogram(tally: &GradeTally) -> Vec<String> {
    distribution(tally)
        .into_iter()
        .map(|row| format_row(row.grade, row.count))
        .collect()
}
