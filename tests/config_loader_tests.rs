use dvtriage::config::{load_config_from, parse_and_validate_config, CONFIG_FILE_NAME};
use dvtriage::{CaseMatcher, MatcherConfig};
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_partial_matching_section_keeps_other_defaults() {
    let config = parse_and_validate_config(indoc! {r#"
        [matching]
        risk_level_tolerance = 10.0
    "#})
    .unwrap();

    let matcher = config.matcher();
    assert_eq!(matcher.risk_level_tolerance, 10.0);
    assert_eq!(matcher.similarity_threshold, 0.7);
    assert_eq!(matcher.max_results, 10);
}

#[test]
fn test_negative_tolerance_is_rejected_to_defaults() {
    let config = parse_and_validate_config(indoc! {r#"
        [matching]
        similarity_threshold = 0.9
        risk_level_tolerance = -5.0
    "#})
    .unwrap();

    assert_eq!(config.matcher(), MatcherConfig::default());
}

#[test]
fn test_explicit_config_file_drives_matcher() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [matching]
            max_results = 2
            parallel = false

            [output]
            default_format = "markdown"
        "#},
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    let matcher = CaseMatcher::new(config.matcher());
    assert_eq!(matcher.config().max_results, 2);
    assert!(!matcher.config().parallel);
    assert_eq!(config.default_format(), Some("markdown"));
}

#[test]
fn test_explicit_config_with_bad_types_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[matching]\nmax_results = \"ten\"\n").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, dvtriage::Error::Configuration(_)));
}
