mod loader;
mod types;

pub use loader::load_responses;
pub use types::{ScoredResponse, ScoredSubmission};

use crate::catalog::Catalog;
use crate::scoring::{breakdown, score_question, Responses};

/// Score a full response set against the catalog.
///
/// Every answer gets a points record; answers for ids the catalog does not
/// contain earn 0 and are listed in `unknown_questions`. The total is the sum
/// of those records, so it always agrees with them. With duplicate question
/// ids (which `validate_catalog` rejects) the first definition scores.
pub fn score_submission(
    catalog: &Catalog,
    label: impl Into<String>,
    responses: &Responses,
) -> ScoredSubmission {
    let mut unknown_questions = Vec::new();

    let scored: Vec<ScoredResponse> = responses
        .iter()
        .map(|(id, value)| {
            let points = match catalog.find(id) {
                Some((_, question)) => score_question(question, value),
                None => {
                    unknown_questions.push(id.clone());
                    0
                }
            };
            ScoredResponse {
                question_id: id.clone(),
                value: value.clone(),
                points,
            }
        })
        .collect();

    let total = scored
        .iter()
        .fold(0i64, |acc, r| acc.saturating_add(r.points));

    ScoredSubmission {
        label: label.into(),
        total,
        responses: scored,
        breakdown: breakdown(catalog, responses),
        unknown_questions,
    }
}

/// Cumulative points over a user's submissions.
pub fn grand_total(submissions: &[ScoredSubmission]) -> i64 {
    submissions
        .iter()
        .fold(0i64, |acc, s| acc.saturating_add(s.total))
}
