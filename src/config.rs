//! Configuration loading and rule lookup.
//!
//! All rules live in one YAML document, keyed by check name. Each check
//! section holds an optional `Enabled` switch plus any number of named check
//! instances, each with its own `Parameters` and optional `Conditions`:
//!
//! ```yaml
//! CheckPackageNamespace:
//!   Enabled: true
//!   DefaultNamespace:
//!     Execution: true
//!     Parameters:
//!       RegexPattern: "^[A-Z]"
//!     Conditions:
//!       PackageFolder:
//!         RegexPattern: "TestCases"
//! ```
//!
//! `Parameters` is deliberately variant-shaped (bool, sequence, or mapping,
//! depending on the check), so rule bodies are kept as [`serde_yaml::Value`]
//! and interpreted by the individual checks.
//!
//! [`Configuration::load`] reads `CustomChecks/config.yaml` below the host's
//! parameter directory and falls back to a bundled template when the file is
//! absent. The loaded document is immutable for the duration of a run and is
//! passed by reference into every check invocation; there is no global
//! configuration state.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::Error;
use crate::keys::condition_keys as ck;

/// Folder below the host's parameter directory that holds the rule file.
pub const CONFIGURATION_FOLDER: &str = "CustomChecks";

/// Name of the rule file.
pub const CONFIGURATION_FILE: &str = "config.yaml";

/// Bundled default configuration, written to disk when no rule file exists.
pub const CONFIGURATION_TEMPLATE: &str = include_str!("config_template.yaml");

const PARAMETERS: &str = "Parameters";
const CONDITIONS: &str = "Conditions";

/// The parsed rule document plus the path shown in diagnostics.
#[derive(Debug, Clone)]
pub struct Configuration {
    config: Mapping,
    rel_path: String,
}

impl Configuration {
    /// Loads the rule file from `<parameter_dir>/CustomChecks/config.yaml`.
    ///
    /// When the file does not exist, the bundled template is copied into
    /// place first and a warning is logged; processing then continues with
    /// the template's defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file (or the template copy) cannot be read or written,
    /// or when the content is not a YAML mapping.
    pub fn load(parameter_dir: &Path) -> Result<Configuration, Error> {
        let folder = parameter_dir.join(CONFIGURATION_FOLDER);
        let path = folder.join(CONFIGURATION_FILE);
        let rel_path = format!("{CONFIGURATION_FOLDER}/{CONFIGURATION_FILE}");

        if !path.exists() {
            std::fs::create_dir_all(&folder).map_err(|source| Error::ConfigIo {
                path: folder.clone(),
                source,
            })?;
            std::fs::write(&path, CONFIGURATION_TEMPLATE).map_err(|source| Error::ConfigIo {
                path: path.clone(),
                source,
            })?;
            tracing::warn!(
                "Using a default config for the CustomChecks. Please modify your CustomCheck \
                 configuration file {CONFIGURATION_FILE} in \"{rel_path}\"!"
            );
        }

        let content = std::fs::read_to_string(&path).map_err(|source| Error::ConfigIo {
            path: path.clone(),
            source,
        })?;
        Configuration::from_str(&content, rel_path)
    }

    /// Builds a configuration from an already-loaded YAML document.
    ///
    /// `rel_path` is the path shown in diagnostics that point the config
    /// author at the rule file.
    ///
    /// # Errors
    ///
    /// Fails when `yaml` does not parse to a mapping.
    pub fn from_str(yaml: &str, rel_path: impl Into<String>) -> Result<Configuration, Error> {
        let rel_path = rel_path.into();
        let config: Mapping = serde_yaml::from_str(yaml).map_err(|source| Error::ConfigParse {
            path: rel_path.clone().into(),
            source,
        })?;
        Ok(Configuration { config, rel_path })
    }

    /// Path of the rule file relative to the host workspace, for diagnostics.
    pub fn rel_path(&self) -> &str {
        &self.rel_path
    }

    /// Returns the per-check `Enabled` switch and the configured instances
    /// of `check_name` in document order.
    ///
    /// A missing `Enabled` entry means enabled; a check name absent from the
    /// document yields an enabled check with zero instances.
    pub fn check_instances(&self, check_name: &str) -> (bool, Vec<(String, &Value)>) {
        let Some(section) = self.config.get(check_name).and_then(Value::as_mapping) else {
            return (true, Vec::new());
        };

        let mut enabled = true;
        let mut instances = Vec::new();
        for (label, instance) in section {
            let Some(label) = label.as_str() else {
                continue;
            };
            if label == ck::ENABLED {
                enabled = instance.as_bool().unwrap_or(true);
            } else {
                instances.push((label.to_string(), instance));
            }
        }
        (enabled, instances)
    }

    /// Returns the `Conditions` block of one check instance, or `None` when
    /// the instance declares no conditions.
    pub fn check_conditions(&self, check_name: &str, instance: &str) -> Option<&Mapping> {
        self.config
            .get(check_name)?
            .get(instance)?
            .get(CONDITIONS)?
            .as_mapping()
    }

    /// Returns the `Parameters` block of one check instance.
    ///
    /// # Errors
    ///
    /// A missing `Parameters` section is the one fatal configuration error:
    /// it aborts the check instance with [`Error::MissingParameters`] instead
    /// of degrading to a check result.
    pub fn check_parameters(&self, check_name: &str, instance: &str) -> Result<&Value, Error> {
        self.config
            .get(check_name)
            .and_then(|section| section.get(instance))
            .and_then(|instance| instance.get(PARAMETERS))
            .ok_or_else(|| Error::MissingParameters {
                check: check_name.to_string(),
                config_path: self.rel_path.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
CheckPackageNamespace:
  Enabled: false
  First:
    Execution: true
    Parameters:
      RegexPattern: "^[A-Z]"
  Second:
    Execution: true
    Parameters:
      RegexPattern: "^[a-z]"
"#;

    #[test]
    fn instances_split_out_the_enabled_flag() {
        let config = Configuration::from_str(SAMPLE, "CustomChecks/config.yaml").unwrap();
        let (enabled, instances) = config.check_instances("CheckPackageNamespace");
        assert!(!enabled);
        let labels: Vec<&str> = instances.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second"]);
    }

    #[test]
    fn unknown_check_is_enabled_with_no_instances() {
        let config = Configuration::from_str(SAMPLE, "CustomChecks/config.yaml").unwrap();
        let (enabled, instances) = config.check_instances("CheckPackageVariables");
        assert!(enabled);
        assert!(instances.is_empty());
    }

    #[test]
    fn missing_parameters_is_an_error() {
        let yaml = "CheckPackageNamespace:\n  First:\n    Execution: true\n";
        let config = Configuration::from_str(yaml, "CustomChecks/config.yaml").unwrap();
        let err = config
            .check_parameters("CheckPackageNamespace", "First")
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameters { .. }));
    }

    #[test]
    fn bundled_template_parses() {
        Configuration::from_str(CONFIGURATION_TEMPLATE, "CustomChecks/config.yaml").unwrap();
    }
}
