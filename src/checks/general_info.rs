//! General package information check.
//!
//! Validates the package description, the "test case" flag, and the version
//! field. Each sub-check is independently toggled by the presence of its
//! parameter key:
//!
//! - `Description` runs only when its `Check` sub-key is `true`; requires
//!   a non-empty description, optionally a minimum length (`MinLength`) and
//!   a `RegexPattern` the description must contain.
//! - `TestCaseFlag` is a boolean; the flag must (or must not) be set.
//! - `Version` is a boolean (`true`: version must be set; `false`: sub-check
//!   disabled) or a mapping with a `RegexPattern` the version must match.

use regex::Regex;
use serde_yaml::Value;

use crate::checks::Check;
use crate::config::Configuration;
use crate::item::TestItem;
use crate::keys::parameter_keys as pk;
use crate::result::CheckResult;

/// Validates description, version, and test-case flag of a package.
pub struct GeneralInformationCheck;

impl Check for GeneralInformationCheck {
    fn name(&self) -> &'static str {
        "CheckPackageGeneralInformation"
    }

    fn description(&self) -> &'static str {
        "Checks whether the general package information (description, version, test-case flag) is valid"
    }

    fn check(
        &self,
        item: &TestItem,
        parameters: &Value,
        config: &Configuration,
    ) -> Vec<CheckResult> {
        let mut results = Vec::new();

        if let Some(description) = parameters.get(pk::DESCRIPTION) {
            if description.get(pk::CHECK).and_then(Value::as_bool) == Some(true) {
                results.extend(check_description(item, description, config));
            }
        }

        if let Some(flag) = parameters.get(pk::TEST_CASE_FLAG).and_then(Value::as_bool) {
            results.extend(check_test_case_flag(item, flag));
        }

        if let Some(version) = parameters.get(pk::VERSION) {
            results.extend(check_version(item, version, config));
        }

        results
    }
}

fn check_description(
    item: &TestItem,
    description: &Value,
    config: &Configuration,
) -> Vec<CheckResult> {
    let mut results = Vec::new();

    if item.description.is_empty() {
        results.push(CheckResult::new("Description must not be empty!"));
        return results;
    }

    if let Some(min_len) = description.get(pk::MIN_LENGTH).and_then(Value::as_u64) {
        if (item.description.chars().count() as u64) < min_len {
            results.push(CheckResult::new(format!(
                "Description insufficient. Should contain at least {min_len} characters!"
            )));
        }
    }

    if let Some(pattern) = description.get(pk::REGEX_PATTERN).and_then(Value::as_str) {
        match Regex::new(pattern) {
            Err(_) => results.push(CheckResult::new(format!(
                "\"{pattern}\" is not a valid pattern. Check \"{}\"!",
                config.rel_path()
            ))),
            Ok(re) => {
                if !re.is_match(&item.description) {
                    let message =
                        match description.get(pk::CUSTOM_MESSAGE).and_then(Value::as_str) {
                            Some(custom) => format!("Description should contain pattern. {custom}"),
                            None => format!("Description should contain pattern: \"{pattern}\""),
                        };
                    results.push(CheckResult::new(message));
                }
            }
        }
    }

    results
}

fn check_test_case_flag(item: &TestItem, expected: bool) -> Vec<CheckResult> {
    let mut results = Vec::new();

    if expected && !item.test_case_flag {
        results.push(CheckResult::new("\"Test case\" flag must be set!"));
    } else if !expected && item.test_case_flag {
        results.push(CheckResult::new("\"Test case\" flag must not be set!"));
    }

    results
}

fn check_version(item: &TestItem, version: &Value, config: &Configuration) -> Vec<CheckResult> {
    let mut results = Vec::new();

    // Boolean shape: the version only needs to exist.
    if let Some(required) = version.as_bool() {
        if required && item.version.is_empty() {
            results.push(CheckResult::new("Version must be set!"));
        } else if !required {
            tracing::warn!("Version check is disabled!");
        }
        return results;
    }

    if item.version.is_empty() {
        results.push(CheckResult::new("Version must be set!"));
        return results;
    }

    let Some(pattern) = version.get(pk::REGEX_PATTERN).and_then(Value::as_str) else {
        results.push(CheckResult::new(format!(
            "No field: \"{}\" was provided!",
            pk::REGEX_PATTERN
        )));
        return results;
    };

    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(_) => {
            results.push(CheckResult::new(format!(
                "\"{pattern}\" is not a valid pattern. Check \"{}\"!",
                config.rel_path()
            )));
            return results;
        }
    };

    if !re.is_match(&item.version) {
        let message = match version.get(pk::CUSTOM_MESSAGE).and_then(Value::as_str) {
            Some(custom) => format!(
                "Version \"{}\" does not match pattern. {custom}",
                item.version
            ),
            None => format!(
                "Version \"{}\" does not match pattern: \"{pattern}\"",
                item.version
            ),
        };
        results.push(CheckResult::new(message));
    }

    results
}
