use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::matching::MatcherConfig;
use super::DvTriageConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".dvtriage.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parses a TOML document and validates its sections.
///
/// An invalid `[matching]` section is replaced with defaults and logged; only
/// TOML syntax or type errors fail the parse.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<DvTriageConfig, String> {
    let mut config = toml::from_str::<DvTriageConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(matching) = &config.matching {
        if let Err(e) = matching.validate() {
            warn!("Invalid matching configuration: {}. Using defaults.", e);
            config.matching = Some(MatcherConfig::default());
        }
    }

    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<DvTriageConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its parents, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Finds the nearest `.dvtriage.toml` above the working directory.
///
/// Never fails: an unreadable or invalid file is logged and defaults apply.
pub fn load_config() -> DvTriageConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return DvTriageConfig::default();
        }
    };

    load_config_near(current)
}

pub(crate) fn load_config_near(start: PathBuf) -> DvTriageConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            DvTriageConfig::default()
        })
}

/// Loads an explicitly named config file; here a missing or malformed file
/// is the caller's problem, so it is reported rather than defaulted.
pub fn load_config_from(path: &Path) -> Result<DvTriageConfig> {
    let contents = read_config_file(path)?;
    parse_and_validate_config(&contents).map_err(Error::Configuration)
}
