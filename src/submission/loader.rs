use crate::catalog::is_yaml;
use crate::scoring::Responses;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load one submission's answers from a JSON or YAML object of `id: value`.
pub fn load_responses(path: &Path) -> Result<Responses> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read responses at {}", path.display()))?;

    if is_yaml(path) {
        serde_saphyr::from_str(&content).with_context(|| {
            format!("Failed to parse responses: invalid YAML in {}", path.display())
        })
    } else {
        serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse responses: invalid JSON in {}", path.display())
        })
    }
}
