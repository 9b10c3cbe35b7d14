//! Generic attribute checker.
//!
//! Validates named attributes of a test item against per-attribute
//! expectations from the configuration. An expectation takes one of three
//! shapes:
//!
//! 1. Boolean: `true` means the attribute must be non-empty, `false` that
//!    it must be empty.
//! 2. Sequence: the attribute's comma-separated value must be a subset of
//!    the listed options.
//! 3. Mapping: the attribute must match `RegexPattern` (partial search),
//!    with optional `CustomMessage` / `RegexDescription` refining the
//!    violation text.
//!
//! Package and project checks share the engine but differ in how a missing
//! attribute and a pattern mismatch are reported; [`AttrCheckKind`] owns
//! that policy so the variant behavior lives in one place.

use regex::Regex;
use serde_yaml::Value;

use crate::checks::{format_options, Check};
use crate::config::Configuration;
use crate::item::TestItem;
use crate::keys::parameter_keys as pk;
use crate::result::CheckResult;

/// Which message policy the attribute engine applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrCheckKind {
    Package,
    Project,
}

impl AttrCheckKind {
    /// Violation for an attribute the configuration expects but the item
    /// does not carry at all, or `None` when the expectation is satisfied
    /// by absence.
    fn missing_attribute(self, key: &str, expectation: &Value) -> Option<CheckResult> {
        match self {
            // A package check spells out what the absent attribute should
            // have looked like.
            AttrCheckKind::Package => match expectation {
                Value::Bool(true) => {
                    Some(CheckResult::new(format!("\"{key}\" must not be empty!")))
                }
                Value::Sequence(options) if !options.is_empty() => Some(CheckResult::new(format!(
                    "\"{key}\" must not be empty! Allowed options: {}",
                    format_options(options)
                ))),
                Value::Mapping(expect) => {
                    let message = match expect.get(pk::CUSTOM_MESSAGE).and_then(Value::as_str) {
                        Some(custom) => format!("\"{key}\" must not be empty! {custom}"),
                        None => format!(
                            "\"{key}\" must not be empty! Intended pattern: \"{}\"",
                            expect.get(pk::REGEX_PATTERN).and_then(Value::as_str).unwrap_or("")
                        ),
                    };
                    Some(CheckResult::new(message))
                }
                _ => None,
            },
            // A project check reports any expectation other than a literal
            // `false` as a plain must-not-be-empty, even for sequence or
            // pattern expectations.
            AttrCheckKind::Project => match expectation {
                Value::Bool(false) => None,
                _ => Some(CheckResult::new(format!("\"{key}\" must not be empty"))),
            },
        }
    }

    /// Violation for a present attribute value that fails its configured
    /// regex, or `None` when the value passes.
    fn pattern_check(
        self,
        key: &str,
        value: &str,
        re: &Regex,
        expect: &serde_yaml::Mapping,
    ) -> Option<CheckResult> {
        match self {
            AttrCheckKind::Package => {
                if value.is_empty() {
                    return Some(CheckResult::new(format!("\"{key}\" must not be empty!")));
                }
                if re.is_match(value) {
                    return None;
                }
                let message = match expect.get(pk::CUSTOM_MESSAGE).and_then(Value::as_str) {
                    Some(custom) => format!("\"{key}\" does not match pattern. \"{custom}\""),
                    None => format!("\"{key}\" does not match pattern: \"{}\"", re.as_str()),
                };
                Some(CheckResult::new(message))
            }
            AttrCheckKind::Project => {
                if re.is_match(value) {
                    return None;
                }
                // The project variant historically reports the pattern's
                // description when a custom message is configured.
                let message = if expect.contains_key(pk::CUSTOM_MESSAGE) {
                    format!(
                        "\"{key}\" does not match pattern: {}",
                        expect
                            .get(pk::REGEX_DESCRIPTION)
                            .and_then(Value::as_str)
                            .unwrap_or("")
                    )
                } else {
                    format!("\"{key}\" does not match conditions: {}", re.as_str())
                };
                Some(CheckResult::new(message))
            }
        }
    }
}

/// Validates the attributes of `item` against the configured expectations.
///
/// Configured keys are partitioned into those present on the item and those
/// absent; present keys are checked against their expectation variant,
/// absent keys against the [`AttrCheckKind`] missing-attribute policy.
/// Configuration-shape problems (missing `RegexPattern` field, invalid regex
/// syntax) are reported as results for the affected key and do not stop the
/// remaining keys from being checked.
pub fn check_attributes(
    item: &TestItem,
    kind: AttrCheckKind,
    config: &Configuration,
    parameters: &Value,
) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let Some(parameters) = parameters.as_mapping() else {
        results.push(CheckResult::new(format!(
            "Attribute parameters must be a mapping of attribute names! Check \"{}\"!",
            config.rel_path()
        )));
        return results;
    };

    let mut present = Vec::new();
    let mut absent = Vec::new();
    for (key, expectation) in parameters {
        let Some(key) = key.as_str() else {
            continue;
        };
        match item.attributes.get(key) {
            Some(value) => present.push((key, value.as_str(), expectation)),
            None => absent.push((key, expectation)),
        }
    }

    for (key, value, expectation) in present {
        match expectation {
            Value::Bool(true) if value.is_empty() => {
                results.push(CheckResult::new(format!("\"{key}\" must not be empty!")));
            }
            Value::Bool(false) if !value.is_empty() => {
                results.push(CheckResult::new(format!("\"{key}\" must not be set!")));
            }
            Value::Sequence(options) => {
                // An empty value is the empty set and passes any allow-list.
                if value.is_empty() {
                    continue;
                }
                let allowed: Vec<&str> =
                    options.iter().filter_map(Value::as_str).collect();
                if value.split(',').any(|part| !allowed.contains(&part)) {
                    results.push(CheckResult::new(format!(
                        "\"{key}\" no valid option out of: {}",
                        format_options(options)
                    )));
                }
            }
            Value::Mapping(expect) => {
                let Some(pattern) = expect.get(pk::REGEX_PATTERN).and_then(Value::as_str) else {
                    results.push(CheckResult::new(format!(
                        "No field: \"{}\" was provided!",
                        pk::REGEX_PATTERN
                    )));
                    continue;
                };
                let re = match Regex::new(pattern) {
                    Ok(re) => re,
                    Err(_) => {
                        results.push(CheckResult::new(format!(
                            "{pattern} is not a valid pattern! Check \"{}\"!",
                            config.rel_path()
                        )));
                        continue;
                    }
                };
                results.extend(kind.pattern_check(key, value, &re, expect));
            }
            _ => {}
        }
    }

    for (key, expectation) in absent {
        results.extend(kind.missing_attribute(key, expectation));
    }

    results
}

/// Validates package attributes against the configured expectations.
pub struct PackageAttributesCheck;

impl Check for PackageAttributesCheck {
    fn name(&self) -> &'static str {
        "CheckPackageAttributes"
    }

    fn description(&self) -> &'static str {
        "Checks whether all package attributes are set according to the configured expectations"
    }

    fn check(
        &self,
        item: &TestItem,
        parameters: &Value,
        config: &Configuration,
    ) -> Vec<CheckResult> {
        check_attributes(item, AttrCheckKind::Package, config, parameters)
    }
}

/// Validates project attributes against the configured expectations.
pub struct ProjectAttributesCheck;

impl Check for ProjectAttributesCheck {
    fn name(&self) -> &'static str {
        "CheckProjectAttributes"
    }

    fn description(&self) -> &'static str {
        "Checks whether all project attributes are set according to the configured expectations"
    }

    fn check(
        &self,
        item: &TestItem,
        parameters: &Value,
        config: &Configuration,
    ) -> Vec<CheckResult> {
        check_attributes(item, AttrCheckKind::Project, config, parameters)
    }
}
