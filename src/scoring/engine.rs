use super::value::{ResponseValue, Responses};
use crate::catalog::{Question, QuestionType};

/// Points for likert positions 1..=5.
pub const LIKERT_POINTS: [i64; 5] = [0, 1, 3, 5, 8];

/// Score a single answered question.
///
/// Never fails: malformed, out-of-range or unrecognized input scores 0.
pub fn score_question(question: &Question, value: &ResponseValue) -> i64 {
    match question.kind {
        QuestionType::Likert => score_likert(value, question.invert),
        QuestionType::Binary | QuestionType::Multi => score_choice(question, value),
        QuestionType::Directional => value.as_number().unwrap_or(0),
        QuestionType::Unknown => 0,
    }
}

/// Sum the scores of every question that has an answer in `responses`.
///
/// Questions are visited in the order given; answers for questions not in
/// `questions` are ignored.
pub fn score_total<'a, I>(responses: &Responses, questions: I) -> i64
where
    I: IntoIterator<Item = &'a Question>,
{
    questions
        .into_iter()
        .filter_map(|q| responses.get(&q.id).map(|v| score_question(q, v)))
        .fold(0i64, |acc, points| acc.saturating_add(points))
}

fn score_likert(value: &ResponseValue, invert: bool) -> i64 {
    let Some(position) = value.to_integer() else {
        return 0;
    };
    let Some(mut index) = position.checked_sub(1) else {
        return 0;
    };
    if invert {
        index = match 4i64.checked_sub(index) {
            Some(i) => i,
            None => return 0,
        };
    }
    usize::try_from(index)
        .ok()
        .and_then(|i| LIKERT_POINTS.get(i))
        .copied()
        .unwrap_or(0)
}

fn score_choice(question: &Question, value: &ResponseValue) -> i64 {
    if *value == ResponseValue::Unsupported {
        return 0;
    }
    let label = value.to_string();

    if let Some(ref mapping) = question.mapping {
        return mapping
            .get(&label)
            .or_else(|| mapping.get_ignore_case(&label))
            .unwrap_or(0);
    }

    // Legacy yes/no questions carry a flat point value instead of a mapping
    match question.kind {
        QuestionType::Binary => {
            let label = label.to_lowercase();
            if label == "yes" || label == "true" {
                question.points.unwrap_or(0)
            } else {
                0
            }
        }
        _ => 0,
    }
}
