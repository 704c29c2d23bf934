mod schema;
pub mod validation;

pub use schema::{Catalog, Category, Mapping, Question, QuestionType};
pub use validation::validate_catalog;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/survey_questions.json");

/// The catalog compiled into the binary (data/survey_questions.json).
pub fn builtin_catalog() -> Result<Catalog> {
    serde_json::from_str(BUILTIN_CATALOG).context("Failed to parse built-in survey catalog")
}

/// Load a catalog from a JSON or YAML file
///
/// The format is picked from the extension: `.yaml`/`.yml` is parsed as YAML,
/// anything else as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog at {}", path.display()))?;

    if is_yaml(path) {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: invalid YAML in {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: invalid JSON in {}", path.display()))
    }
}

pub(crate) fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_builtin_catalog_parses_and_validates() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.categories.len(), 4);
        assert!(catalog.question_count() > 0);
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_load_catalog_json_file() {
        let path = env::temp_dir().join("lock_in_test_catalog.json");
        fs::write(
            &path,
            r#"[{ "category": "A", "questions": [{ "id": "A1", "text": "t", "type": "likert" }] }]"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.question_count(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_catalog_yaml_file() {
        let path = env::temp_dir().join("lock_in_test_catalog.yaml");
        fs::write(
            &path,
            "- category: A\n  questions:\n    - id: A1\n      text: t\n      type: directional\n",
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.categories[0].questions[0].kind, QuestionType::Directional);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let path = env::temp_dir().join("lock_in_test_catalog_missing.json");
        let _ = fs::remove_file(&path);

        let err = load_catalog(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }

    #[test]
    fn test_load_catalog_invalid_json() {
        let path = env::temp_dir().join("lock_in_test_catalog_invalid.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_is_yaml() {
        assert!(is_yaml(Path::new("a.yaml")));
        assert!(is_yaml(Path::new("a.yml")));
        assert!(!is_yaml(Path::new("a.json")));
        assert!(!is_yaml(Path::new("a")));
    }
}
