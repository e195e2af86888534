//! Run configuration for loading tables

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// external crates
use serde::{Deserialize, Serialize};

// xstools modules
use xstools_format::f;

// crate modules
use crate::error::{Error, Result};

/// Environment variable for the data directory
pub const DATA_DIR_VAR: &str = "XSTOOLS_DATA_DIR";
/// Environment variable for the row delimiter
pub const DELIMITER_VAR: &str = "XSTOOLS_DELIMITER";
/// Environment variable for the failure policy
pub const FAILURE_POLICY_VAR: &str = "XSTOOLS_FAILURE_POLICY";

/// What the cache does after a table fails to load
///
/// - `Sticky` keeps the failure, and every later request for the same table
///   gets the same error back without touching the disk again.
/// - `Retry` forgets the failure, so the next request tries to load again.
///
/// Sticky is the default, so a broken deployment does not re-read the same
/// missing file for every simulated particle.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    #[default]
    Sticky,
    Retry,
}

impl std::str::FromStr for FailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sticky" => Ok(Self::Sticky),
            "retry" => Ok(Self::Retry),
            other => Err(Error::Config(f!("unknown failure policy \"{other}\""))),
        }
    }
}

/// Settings for finding and reading tables
///
/// Can be built directly, read from a JSON file, or taken from the
/// environment. Missing JSON fields fall back to the defaults.
///
/// ```rust
/// # use xstools_attenuation::{Config, FailurePolicy};
/// let config = Config::new("/opt/xsdata")
///     .with_delimiter('|')
///     .with_failure_policy(FailurePolicy::Retry);
///
/// assert_eq!(config.data_dir.to_str(), Some("/opt/xsdata"));
/// assert_eq!(config.delimiter, '|');
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory containing one sub-directory per particle type
    pub data_dir: PathBuf,
    /// Single character separating values on a row
    pub delimiter: char,
    /// Behaviour of the cache after a failed load
    pub failure_policy: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            delimiter: ',',
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl Config {
    /// Default settings for a given data directory
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Change the row delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Change the failure policy
    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// Read settings from a JSON file
    ///
    /// ```json
    /// {
    ///     "data_dir": "/opt/xsdata",
    ///     "delimiter": ",",
    ///     "failure_policy": "sticky"
    /// }
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Config(f!("unable to open {path:?}: {e}")))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Config(f!("unable to parse {path:?}: {e}")))
    }

    /// Defaults overridden by any `XSTOOLS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(delimiter) = lookup(DELIMITER_VAR) {
            let mut chars = delimiter.chars();
            config.delimiter = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(Error::Config(f!(
                        "{DELIMITER_VAR} must be a single character, found \"{delimiter}\""
                    )))
                }
            };
        }

        if let Some(policy) = lookup(FAILURE_POLICY_VAR) {
            config.failure_policy = policy.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn environment_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (DATA_DIR_VAR, "/tmp/tables"),
            (DELIMITER_VAR, ";"),
            (FAILURE_POLICY_VAR, "Retry"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/tables"));
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.failure_policy, FailurePolicy::Retry);
    }

    #[test]
    fn environment_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn environment_errors() {
        let result = Config::from_lookup(lookup_from(&[(DELIMITER_VAR, "::")]));
        assert!(matches!(result, Err(Error::Config(_))));

        let result = Config::from_lookup(lookup_from(&[(FAILURE_POLICY_VAR, "sometimes")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn json_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "data_dir": "/opt/xs", "failure_policy": "retry" }}"#).unwrap();

        let config = Config::from_json(file.path()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/opt/xs"));
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.failure_policy, FailurePolicy::Retry);
    }

    #[test]
    fn json_errors() {
        let result = Config::from_json("/definitely/not/here.json");
        assert!(matches!(result, Err(Error::Config(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "delimiter": "too long" }}"#).unwrap();
        assert!(matches!(
            Config::from_json(file.path()),
            Err(Error::Config(_))
        ));
    }
}
