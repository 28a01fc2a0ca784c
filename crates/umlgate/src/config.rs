//! Rule configuration and configuration file loading.
//!
//! The structures here tune the parameterized rules: how many edges of one
//! kind may join the same two nodes in one direction, and how tall a
//! lifeline's title box is. All types implement [`serde::Deserialize`] and
//! are normally read from TOML.
//!
//! # Overview
//!
//! - [`RulesConfig`] - Top-level configuration combining every section.
//! - [`LimitsConfig`] - Edge multiplicity limits, with per-diagram overrides.
//! - [`SequenceConfig`] - Geometry of sequence diagram lifelines.
//! - [`ConfigLocator`] - Where configuration files are searched for.
//! - [`load_config`] - Finds and loads a configuration file.
//!
//! # Example
//!
//! ```
//! # use umlgate::config::RulesConfig;
//! # use umlgate::model::DiagramKind;
//! let config = RulesConfig::from_toml_str(
//!     r#"
//!     [limits]
//!     default = 2
//!     "#,
//! )?;
//! assert_eq!(config.limits().max_edges(DiagramKind::Class), 2);
//! # Ok::<(), umlgate::config::ConfigError>(())
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use umlgate_core::model::DiagramKind;

use crate::{UmlGateError, constraint::sequence::DEFAULT_HEADER_HEIGHT};

/// File name searched for in every configuration directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level rule configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Edge multiplicity section.
    #[serde(default)]
    limits: LimitsConfig,

    /// Sequence diagram section.
    #[serde(default)]
    sequence: SequenceConfig,
}

impl RulesConfig {
    pub fn new(limits: LimitsConfig, sequence: SequenceConfig) -> Self {
        Self { limits, sequence }
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown diagram
    /// kinds, and [`ConfigError::Validation`] for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    pub fn sequence(&self) -> &SequenceConfig {
        &self.sequence
    }

    /// Checks that every value can drive a rule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if an edge limit is zero or the
    /// header height is not a positive finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.default == 0 {
            return Err(ConfigError::Validation(
                "limits.default must be at least 1".to_string(),
            ));
        }
        if let Some(kind) = DiagramKind::ALL
            .into_iter()
            .find(|kind| self.limits.per_diagram.get(*kind) == Some(0))
        {
            return Err(ConfigError::Validation(format!(
                "limits.per_diagram: the {kind} diagram limit must be at least 1"
            )));
        }

        let height = self.sequence.header_height;
        if !height.is_finite() || height <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "sequence.header_height must be a positive number, got {height}"
            )));
        }
        Ok(())
    }
}

/// Limits on same-kind, same-direction edges between two nodes.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Limit for diagram kinds without an override.
    #[serde(default = "default_limit")]
    default: usize,

    /// Per-diagram overrides.
    #[serde(default)]
    per_diagram: PerDiagramLimits,
}

/// Optional limit overrides, one per diagram kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PerDiagramLimits {
    class: Option<usize>,
    object: Option<usize>,
    sequence: Option<usize>,
    state: Option<usize>,
    use_case: Option<usize>,
}

impl PerDiagramLimits {
    fn get(&self, kind: DiagramKind) -> Option<usize> {
        match kind {
            DiagramKind::Class => self.class,
            DiagramKind::Object => self.object,
            DiagramKind::Sequence => self.sequence,
            DiagramKind::State => self.state,
            DiagramKind::UseCase => self.use_case,
        }
    }

    fn slot(&mut self, kind: DiagramKind) -> &mut Option<usize> {
        match kind {
            DiagramKind::Class => &mut self.class,
            DiagramKind::Object => &mut self.object,
            DiagramKind::Sequence => &mut self.sequence,
            DiagramKind::State => &mut self.state,
            DiagramKind::UseCase => &mut self.use_case,
        }
    }
}

impl LimitsConfig {
    pub fn new(default: usize) -> Self {
        Self {
            default,
            per_diagram: PerDiagramLimits::default(),
        }
    }

    /// Overrides the limit for one diagram kind.
    pub fn with_override(mut self, kind: DiagramKind, limit: usize) -> Self {
        *self.per_diagram.slot(kind) = Some(limit);
        self
    }

    pub fn default_limit(&self) -> usize {
        self.default
    }

    /// Returns the limit that applies to `kind`.
    ///
    /// An explicit override wins. Without one, state diagrams allow at least
    /// two edges.
    pub fn max_edges(&self, kind: DiagramKind) -> usize {
        match self.per_diagram.get(kind) {
            Some(limit) => limit,
            None if kind == DiagramKind::State => self.default.max(2),
            None => self.default,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self::new(default_limit())
    }
}

fn default_limit() -> usize {
    1
}

/// Geometry of sequence diagram lifelines.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceConfig {
    /// Height of the title box at the top of every lifeline.
    #[serde(default = "default_header_height")]
    header_height: f32,
}

impl SequenceConfig {
    pub fn new(header_height: f32) -> Self {
        Self { header_height }
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_HEIGHT)
    }
}

fn default_header_height() -> f32 {
    DEFAULT_HEADER_HEIGHT
}

/// Application identity used to locate configuration files.
///
/// The identity names the local `<application>/config.toml` file and is
/// handed to [`ProjectDirs`] for the platform configuration directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigLocator<'a> {
    qualifier: &'a str,
    organization: &'a str,
    application: &'a str,
}

impl<'a> ConfigLocator<'a> {
    pub fn new(qualifier: &'a str, organization: &'a str, application: &'a str) -> Self {
        Self {
            qualifier,
            organization,
            application,
        }
    }

    /// Returns the files to try, in search order.
    ///
    /// The local project file comes first, then the platform-specific one
    /// when the platform has a configuration directory.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut paths = vec![Path::new(self.application).join(CONFIG_FILE_NAME)];
        match ProjectDirs::from(self.qualifier, self.organization, self.application) {
            Some(dirs) => paths.push(dirs.config_dir().join(CONFIG_FILE_NAME)),
            None => debug!(
                application = self.application;
                "Could not determine platform-specific config directory"
            ),
        }
        paths
    }

    /// Loads the first configuration found.
    ///
    /// An explicit path is used as-is and must exist. Otherwise every
    /// [candidate](Self::candidates) is tried in order, and the default
    /// configuration is returned when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is given but does not exist, or
    /// if a configuration file is found but cannot be read, parsed or
    /// validated.
    pub fn load(&self, explicit_path: Option<impl AsRef<Path>>) -> Result<RulesConfig, UmlGateError> {
        if let Some(path) = explicit_path {
            let path = path.as_ref();
            info!(path = path.display().to_string(); "Loading configuration from explicit path");
            return load_config_file(path);
        }

        let candidates = self.candidates();
        match candidates.iter().find(|path| path.exists()) {
            Some(path) => {
                info!(path = path.display().to_string(); "Loading configuration file");
                load_config_file(path)
            }
            None => {
                debug!(
                    searched = candidates.len();
                    "No configuration file found, using default configuration"
                );
                Ok(RulesConfig::default())
            }
        }
    }
}

impl Default for ConfigLocator<'static> {
    fn default() -> Self {
        Self::new("com", "umlgate", "umlgate")
    }
}

/// Loads the umlgate configuration.
///
/// Shorthand for [`ConfigLocator::default`] followed by
/// [`ConfigLocator::load`]: the explicit path if given, then
/// `umlgate/config.toml`, then the platform configuration directory, then
/// the defaults.
///
/// # Errors
///
/// See [`ConfigLocator::load`].
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<RulesConfig, UmlGateError> {
    ConfigLocator::default().load(explicit_path)
}

fn load_config_file(path: impl AsRef<Path>) -> Result<RulesConfig, UmlGateError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config = RulesConfig::from_toml_str(&content)?;

    debug!(
        path = path.display().to_string(),
        default_limit = config.limits.default,
        header_height = config.sequence.header_height;
        "Configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use float_cmp::approx_eq;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = RulesConfig::default();

        assert_eq!(config.limits().max_edges(DiagramKind::Class), 1);
        assert_eq!(config.limits().max_edges(DiagramKind::UseCase), 1);
        assert_eq!(config.limits().max_edges(DiagramKind::State), 2);
        assert!(approx_eq!(
            f32,
            config.sequence().header_height(),
            DEFAULT_HEADER_HEIGHT
        ));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = RulesConfig::from_toml_str("").unwrap();
        assert_eq!(config.limits().default_limit(), 1);
        assert_eq!(config.limits().max_edges(DiagramKind::State), 2);
    }

    #[test]
    fn test_per_diagram_override() {
        let config = RulesConfig::from_toml_str(
            r#"
            [limits]
            default = 3

            [limits.per_diagram]
            state = 1
            use_case = 5

            [sequence]
            header_height = 45.0
            "#,
        )
        .unwrap();

        assert_eq!(config.limits().max_edges(DiagramKind::Class), 3);
        assert_eq!(config.limits().max_edges(DiagramKind::State), 1);
        assert_eq!(config.limits().max_edges(DiagramKind::UseCase), 5);
        assert!(approx_eq!(f32, config.sequence().header_height(), 45.0));
    }

    #[test]
    fn test_state_default_follows_larger_global_limit() {
        let limits = LimitsConfig::new(4);
        assert_eq!(limits.max_edges(DiagramKind::State), 4);
    }

    #[test]
    fn test_unknown_diagram_kind_is_parse_error() {
        let result = RulesConfig::from_toml_str(
            r#"
            [limits.per_diagram]
            timing = 2
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let result = RulesConfig::from_toml_str("[limits]\ndefault = 0\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let result = RulesConfig::from_toml_str("[limits.per_diagram]\nobject = 0\n");
        match result {
            Err(ConfigError::Validation(message)) => assert!(message.contains("object")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_header_height_is_rejected() {
        for content in [
            "[sequence]\nheader_height = 0.0\n",
            "[sequence]\nheader_height = -5.0\n",
            "[sequence]\nheader_height = nan\n",
        ] {
            let result = RulesConfig::from_toml_str(content);
            assert!(
                matches!(result, Err(ConfigError::Validation(_))),
                "accepted {content:?}"
            );
        }
    }

    #[test]
    fn test_unknown_keys_are_parse_errors() {
        for content in [
            "[limits]\ndefualt = 2\n",
            "[sequence]\nheader = 40.0\n",
            "[limit]\ndefault = 2\n",
        ] {
            let result = RulesConfig::from_toml_str(content);
            assert!(
                matches!(result, Err(ConfigError::Parse(_))),
                "accepted {content:?}"
            );
        }
    }

    #[test]
    fn test_locator_candidates_start_with_local_file() {
        let locator = ConfigLocator::new("org", "acme", "gatekeeper");
        let candidates = locator.candidates();

        assert_eq!(candidates[0], Path::new("gatekeeper").join("config.toml"));
        assert!(candidates.len() <= 2);
        assert!(candidates.iter().all(|path| path.ends_with("config.toml")));
    }

    #[test]
    fn test_locator_falls_back_to_defaults() {
        let locator = ConfigLocator::new("org", "umlgate-tests", "umlgate-absent-config");
        let config = locator.load(None::<&Path>).unwrap();

        assert_eq!(config.limits().default_limit(), 1);
    }

    #[test]
    fn test_load_config_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[limits]\ndefault = 2").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.limits().max_edges(DiagramKind::Object), 2);
    }

    #[test]
    fn test_load_config_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let err = load_config(Some(&missing)).unwrap_err();
        assert!(matches!(
            err,
            UmlGateError::Config(ConfigError::MissingFile(path)) if path == missing
        ));
    }

    #[test]
    fn test_load_config_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[limits\ndefault = ").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, UmlGateError::Config(ConfigError::Parse(_))));
    }
}
