use crate::scoring::{CategoryBreakdown, ResponseValue};

/// One stored answer with the points it earned.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResponse {
    pub question_id: String,
    pub value: ResponseValue,
    pub points: i64,
}

/// A scored weekly submission.
#[derive(Debug, Clone)]
pub struct ScoredSubmission {
    /// Caller-chosen name for the submission, e.g. "week-3" or a file name
    pub label: String,
    pub total: i64,
    pub responses: Vec<ScoredResponse>,
    pub breakdown: Vec<CategoryBreakdown>,
    /// Answered ids that the catalog does not know (scored 0)
    pub unknown_questions: Vec<String>,
}

impl ScoredSubmission {
    /// Total attainable points across all categories.
    pub fn max(&self) -> i64 {
        self.breakdown
            .iter()
            .fold(0i64, |acc, row| acc.saturating_add(row.max))
    }

    pub fn answered(&self) -> usize {
        self.responses.len()
    }
}
