pub mod output;

pub use output::{
    create_writer, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter, Report, TerminalWriter,
};

use crate::core::{Case, Error, Result, ResultExt};
use crate::lethality::DangerIndicatorSet;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::input(path, e.to_string()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(Error::from)
        .context(format!("Failed to write {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read_file(path)?;
    serde_json::from_str(&contents).map_err(|e| Error::input(path, e.to_string()))
}

/// Reads a JSON array of case records.
pub fn load_cases(path: &Path) -> Result<Vec<Case>> {
    let cases: Vec<Case> = read_json(path)?;
    debug!(path = %path.display(), count = cases.len(), "loaded cases");
    Ok(cases)
}

/// Reads a JSON object of indicator name to boolean.
pub fn load_indicators(path: &Path) -> Result<DangerIndicatorSet> {
    let indicators: DangerIndicatorSet = read_json(path)?;
    let unknown: Vec<&str> = indicators.unknown_keys().collect();
    if !unknown.is_empty() {
        debug!(path = %path.display(), ?unknown, "ignoring unrecognized indicator keys");
    }
    Ok(indicators)
}

pub fn find_case(cases: &[Case], id: u64) -> Result<&Case> {
    cases
        .iter()
        .find(|case| case.id == id)
        .ok_or(Error::CaseNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lethality::DangerIndicator;
    use tempfile::TempDir;

    #[test]
    fn test_load_cases_with_sparse_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cases.json");
        fs::write(
            &path,
            r#"[
                {"id": 1, "title": "A", "case_type": "dv_homicide", "risk_score": 80.0},
                {"id": 2}
            ]"#,
        )
        .unwrap();

        let cases = load_cases(&path).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[1].title, "");
        assert!(cases[1].suspects.is_empty());
        assert_eq!(find_case(&cases, 1).unwrap().risk_score, Some(80.0));
        assert!(matches!(find_case(&cases, 9), Err(Error::CaseNotFound(9))));
    }

    #[test]
    fn test_write_file_error_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.toml");

        let err = write_file(&path, "x").unwrap_err();
        assert!(matches!(err, Error::WithContext { .. }));
        assert!(err
            .to_string()
            .starts_with(&format!("Failed to write {}: ", path.display())));
    }

    #[test]
    fn test_malformed_json_is_input_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_cases(&path).unwrap_err();
        assert!(matches!(err, Error::Input { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_indicators_keeps_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("indicators.json");
        fs::write(&path, r#"{"stalking": true, "Stalking": true, "jealousy": false}"#).unwrap();

        let indicators = load_indicators(&path).unwrap();
        assert!(indicators.is_present(DangerIndicator::Stalking));
        assert!(!indicators.is_present(DangerIndicator::Jealousy));
        assert_eq!(indicators.unknown_keys().collect::<Vec<_>>(), vec!["Stalking"]);
    }
}
