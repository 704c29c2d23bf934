use super::schema::{Catalog, QuestionType};
use std::collections::HashMap;

/// Validate a survey catalog before scoring against it.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut category_names: HashMap<&str, usize> = HashMap::new();
    let mut question_ids: HashMap<&str, String> = HashMap::new();

    for (i, category) in catalog.categories.iter().enumerate() {
        let name = category.category.trim();
        if name.is_empty() {
            errors.push(format!("categories[{}].category: must not be empty", i));
        } else if let Some(first) = category_names.get(name) {
            errors.push(format!(
                "categories[{}].category: duplicate name '{}' (first used by categories[{}])",
                i, name, first
            ));
        } else {
            category_names.insert(name, i);
        }

        for (j, question) in category.questions.iter().enumerate() {
            let loc = format!("categories[{}].questions[{}]", i, j);

            if question.id.trim().is_empty() {
                errors.push(format!("{}.id: must not be empty", loc));
            } else if let Some(first) = question_ids.get(question.id.as_str()) {
                errors.push(format!(
                    "{}.id: duplicate id '{}' (first used by {})",
                    loc, question.id, first
                ));
            } else {
                question_ids.insert(question.id.as_str(), loc.clone());
            }

            if question.kind == QuestionType::Unknown {
                errors.push(format!("{}.type: unknown question type", loc));
            }

            if question.invert && question.kind != QuestionType::Likert {
                errors.push(format!(
                    "{}.invert: only applies to likert questions, not {}",
                    loc, question.kind
                ));
            }

            match question.mapping {
                Some(ref mapping) if mapping.is_empty() => {
                    errors.push(format!("{}.mapping: must have at least one entry", loc));
                }
                Some(ref mapping) => {
                    if let Some(ref options) = question.options {
                        for option in options {
                            if mapping.get_ignore_case(option).is_none() {
                                errors.push(format!(
                                    "{}.options: '{}' has no entry in mapping",
                                    loc, option
                                ));
                            }
                        }
                    }
                }
                None if question.kind == QuestionType::Multi => {
                    errors.push(format!(
                        "{}.mapping: multi questions need a mapping (every answer would score 0)",
                        loc
                    ));
                }
                None => {}
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
