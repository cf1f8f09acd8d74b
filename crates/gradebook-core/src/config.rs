//! Report layout and text constants.
//!
//! The grading scale itself is fixed and lives with [`crate::grade::LetterGrade`];
//! this module only holds how the report is laid out and worded.

/// Column widths and markers for the printed report.
pub mod layout {
    /// Width of the `"<surname>, <given-name>"` column (left-justified).
    pub const NAME_WIDTH: usize = 20;

    /// Width of the score column (right-justified).
    pub const SCORE_WIDTH: usize = 5;

    /// Gap between the score column and the grade column.
    pub const COLUMN_GAP: &str = "  ";

    /// Width of the grade label in a histogram row.
    pub const HISTOGRAM_LABEL_WIDTH: usize = 3;

    /// One marker is printed per student in a histogram row.
    pub const HISTOGRAM_MARKER: &str = "*";
}

/// Fixed wording of prompts, headings and diagnostics.
pub mod text {
    pub const PROMPT: &str = "Enter the name of the scores file: ";
    pub const CANNOT_OPEN: &str = "Sorry, I cannot open:";

    pub const RESULTS_TITLE: &str = "Results from the Midterm Exam";
    pub const DISTRIBUTION_TITLE: &str = "Distribution of Grades on the Midterm Exam";

    pub const STUDENT_HEADING: &str = "Student";
    pub const SCORE_HEADING: &str = "Score";
    pub const GRADE_HEADING: &str = "Grade";

    pub const AVERAGE_LABEL: &str = "The average score is:";
    pub const STD_DEV_LABEL: &str = "The standard deviation is:";
    pub const MEDIAN_LABEL: &str = "The median score is:";

    /// Printed in place of a statistic that is undefined for the sample size.
    pub const UNDEFINED_STAT: &str = "n/a";

    pub const OPEN_FAILED: &str = "Unexpected error opening file.";
    pub const READ_FAILED: &str = "Unexpected error reading file.";
}
