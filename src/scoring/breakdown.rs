use super::engine::{score_total, LIKERT_POINTS};
use super::value::Responses;
use crate::catalog::{Catalog, Question, QuestionType};
use std::fmt;

/// Points earned in one category next to what was attainable there.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: String,
    pub score: i64,
    pub max: i64,
    pub percent: f64,
}

impl CategoryBreakdown {
    pub fn rating(&self) -> Rating {
        Rating::from_percent(self.percent)
    }
}

/// Verbal tier for a category percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    Good,
    NeedsWork,
}

impl Rating {
    /// 80% and up is excellent, 50% and up is good.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            Rating::Excellent
        } else if percent >= 50.0 {
            Rating::Good
        } else {
            Rating::NeedsWork
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::NeedsWork => "Needs Work",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Most points a single question can award, whatever the answer.
pub fn question_max(question: &Question) -> i64 {
    if let Some(ref mapping) = question.mapping {
        return mapping.max_value().unwrap_or(0);
    }
    match question.kind {
        // Same for inverted questions: the reflected table has the same top
        QuestionType::Likert => LIKERT_POINTS[LIKERT_POINTS.len() - 1],
        _ => question.points.unwrap_or(0),
    }
}

/// Maximum attainable score for a group of questions.
pub fn category_max<'a, I>(questions: I) -> i64
where
    I: IntoIterator<Item = &'a Question>,
{
    questions
        .into_iter()
        .map(question_max)
        .fold(0i64, |acc, max| acc.saturating_add(max))
}

/// Points earned in a group of questions; unanswered ones add nothing.
pub fn category_score<'a, I>(responses: &Responses, questions: I) -> i64
where
    I: IntoIterator<Item = &'a Question>,
{
    score_total(responses, questions)
}

/// Score as a percentage of `max`; 0 when nothing is attainable.
pub fn percent_of(score: i64, max: i64) -> f64 {
    if max > 0 {
        score as f64 / max as f64 * 100.0
    } else {
        0.0
    }
}

/// Per-category subtotals for one response set, in catalog order.
pub fn breakdown(catalog: &Catalog, responses: &Responses) -> Vec<CategoryBreakdown> {
    catalog
        .categories
        .iter()
        .map(|c| {
            let score = category_score(responses, &c.questions);
            let max = category_max(&c.questions);
            CategoryBreakdown {
                category: c.category.clone(),
                score,
                max,
                percent: percent_of(score, max),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Mapping};
    use crate::scoring::ResponseValue;

    fn sample_catalog() -> Catalog {
        let yes_no: Mapping = vec![("Yes", 10), ("No", 2)].into_iter().collect();
        Catalog::new(vec![
            Category {
                category: "Fitness".to_string(),
                questions: vec![
                    Question::new("Q1", QuestionType::Likert),
                    Question::new("Q2", QuestionType::Binary).with_mapping(yes_no),
                ],
            },
            Category {
                category: "Sleep".to_string(),
                questions: vec![
                    Question::new("Q3", QuestionType::Directional),
                    Question::new("Q4", QuestionType::Binary).with_points(4),
                ],
            },
        ])
    }

    #[test]
    fn test_question_max_likert() {
        assert_eq!(question_max(&Question::new("Q", QuestionType::Likert)), 8);
        assert_eq!(
            question_max(&Question::new("Q", QuestionType::Likert).inverted()),
            8
        );
    }

    #[test]
    fn test_question_max_mapping() {
        let mapping: Mapping = vec![("Never", 0), ("Daily", 6), ("Once", 1)].into_iter().collect();
        let q = Question::new("Q", QuestionType::Multi).with_mapping(mapping);
        assert_eq!(question_max(&q), 6);
    }

    #[test]
    fn test_question_max_mapping_wins_over_likert() {
        let mapping: Mapping = vec![("1", 0), ("5", 20)].into_iter().collect();
        let q = Question::new("Q", QuestionType::Likert).with_mapping(mapping);
        assert_eq!(question_max(&q), 20);
    }

    #[test]
    fn test_question_max_all_negative_mapping() {
        let mapping: Mapping = vec![("Yes", -2), ("No", -5)].into_iter().collect();
        let q = Question::new("Q", QuestionType::Binary).with_mapping(mapping);
        assert_eq!(question_max(&q), -2);
    }

    #[test]
    fn test_question_max_points_fallback() {
        assert_eq!(question_max(&Question::new("Q", QuestionType::Binary).with_points(4)), 4);
        assert_eq!(question_max(&Question::new("Q", QuestionType::Directional)), 0);
        assert_eq!(question_max(&Question::new("Q", QuestionType::Multi)), 0);
        assert_eq!(
            question_max(&Question::new("Q", QuestionType::Binary).with_mapping(Mapping::default())),
            0
        );
    }

    #[test]
    fn test_category_max() {
        let catalog = sample_catalog();
        assert_eq!(category_max(&catalog.categories[0].questions), 18);
        assert_eq!(category_max(&catalog.categories[1].questions), 4);
        assert_eq!(category_max(&Vec::<Question>::new()), 0);
    }

    #[test]
    fn test_category_max_ignores_invert() {
        let plain = vec![Question::new("Q", QuestionType::Likert)];
        let inverted = vec![Question::new("Q", QuestionType::Likert).inverted()];
        assert_eq!(category_max(&plain), category_max(&inverted));
    }

    #[test]
    fn test_category_score() {
        let catalog = sample_catalog();
        let responses: Responses = vec![
            ("Q1".to_string(), ResponseValue::Number(2)),
            ("Q4".to_string(), ResponseValue::from("yes")),
        ]
        .into_iter()
        .collect();
        assert_eq!(category_score(&responses, &catalog.categories[0].questions), 1);
        assert_eq!(category_score(&responses, &catalog.categories[1].questions), 4);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(9, 18), 50.0);
        assert_eq!(percent_of(5, 0), 0.0);
        assert_eq!(percent_of(-3, 0), 0.0);
    }

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(Rating::from_percent(100.0), Rating::Excellent);
        assert_eq!(Rating::from_percent(80.0), Rating::Excellent);
        assert_eq!(Rating::from_percent(79.9), Rating::Good);
        assert_eq!(Rating::from_percent(50.0), Rating::Good);
        assert_eq!(Rating::from_percent(49.9), Rating::NeedsWork);
        assert_eq!(Rating::from_percent(0.0), Rating::NeedsWork);
        assert_eq!(Rating::from_percent(-75.0), Rating::NeedsWork);
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(Rating::Excellent.to_string(), "Excellent");
        assert_eq!(Rating::Good.to_string(), "Good");
        assert_eq!(Rating::NeedsWork.to_string(), "Needs Work");
    }

    #[test]
    fn test_breakdown() {
        let catalog = sample_catalog();
        let responses: Responses = vec![
            ("Q1".to_string(), ResponseValue::Number(4)),
            ("Q2".to_string(), ResponseValue::from("yes")),
            ("Q3".to_string(), ResponseValue::Number(-3)),
        ]
        .into_iter()
        .collect();

        let rows = breakdown(&catalog, &responses);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].category, "Fitness");
        assert_eq!(rows[0].score, 15);
        assert_eq!(rows[0].max, 18);
        assert!((rows[0].percent - 83.33).abs() < 0.01);
        assert_eq!(rows[0].rating(), Rating::Excellent);

        assert_eq!(rows[1].category, "Sleep");
        assert_eq!(rows[1].score, -3);
        assert_eq!(rows[1].max, 4);
        assert_eq!(rows[1].percent, -75.0);
        assert_eq!(rows[1].rating(), Rating::NeedsWork);
    }

    #[test]
    fn test_breakdown_subtotals_sum_to_total() {
        let catalog = sample_catalog();
        let responses: Responses = vec![
            ("Q1".to_string(), ResponseValue::Number(5)),
            ("Q4".to_string(), ResponseValue::from("true")),
        ]
        .into_iter()
        .collect();

        let subtotal: i64 = breakdown(&catalog, &responses).iter().map(|r| r.score).sum();
        assert_eq!(subtotal, score_total(&responses, catalog.questions()));
        assert_eq!(subtotal, 12);
    }

    #[test]
    fn test_breakdown_empty_responses() {
        let rows = breakdown(&sample_catalog(), &Responses::new());
        assert!(rows.iter().all(|r| r.score == 0 && r.percent == 0.0));
        assert_eq!(rows[0].max, 18);
    }
}
