use serde::Serialize;

use crate::grade::LetterGrade;

/// Count of students who received one grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeCount {
    pub grade: LetterGrade,
    pub count: usize,
}

/// Grade → occurrence count, kept in the order grades were first seen.
#[derive(Debug, Clone, Default)]
pub struct GradeTally {
    entries: Vec<GradeCount>,
}

impl GradeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `grade`.
    pub fn record(&mut self, grade: LetterGrade) {
        match self.entries.iter_mut().find(|entry| entry.grade == grade) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(GradeCount { grade, count: 1 }),
        }
    }

    /// Occurrences of `grade`; zero if never seen.
    pub fn count(&self, grade: LetterGrade) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.grade == grade)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    /// Sum over all grades.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Number of distinct grades seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &GradeCount> {
        self.entries.iter()
    }
}
