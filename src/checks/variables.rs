//! Package variable checks.
//!
//! Covers everything about a package's variable list:
//!
//! - **Classification**: every variable is classified via its two boolean
//!   facets (is-parameter, is-return) and its declared type into Parameter,
//!   ReturnValue, LocalVar, or Function. Combinations that fit no class are
//!   type-consistency violations.
//! - **Naming / description**: for classified variables, the name and
//!   description are validated against the regex configured for that class
//!   (keys `Parameter`, `ReturnValue`, `LocalVar`, `Function`, each with
//!   optional `Name` / `Description` sub-rules).
//! - **Undefined types**: variables of type `Undefined` are flagged unless
//!   `AllowUndefinedVariables` is set.
//! - **Unused variables**: variables the host reports as unused produce one
//!   aggregated violation.
//! - **Ordering**: the full variable list must be sorted according to the
//!   configured `Order` block (`SortMethod`: `ascending`, `descending`, or
//!   `None` to disable; `NumberOfRelevantCharacters` truncates names before
//!   comparison).

use regex::Regex;
use serde_yaml::Value;

use crate::checks::{matches_at_start, Check};
use crate::config::Configuration;
use crate::item::{TestItem, Variable};
use crate::keys::parameter_keys as pk;
use crate::result::CheckResult;

const SORT_ASCENDING: &str = "ascending";
const SORT_DESCENDING: &str = "descending";
const SORT_NONE: &str = "None";

/// Validates variable naming, classification, and ordering of a package.
pub struct VariablesCheck;

impl Check for VariablesCheck {
    fn name(&self) -> &'static str {
        "CheckPackageVariables"
    }

    fn description(&self) -> &'static str {
        "Checks variable naming, description, type consistency, and ordering of a package"
    }

    fn check(
        &self,
        item: &TestItem,
        parameters: &Value,
        config: &Configuration,
    ) -> Vec<CheckResult> {
        let mut results = Vec::new();
        results.extend(check_variables(item, parameters, config));
        results.extend(check_variable_order(item, parameters));
        results
    }
}

/// Classifies a variable, or returns `None` for inconsistent combinations.
///
/// A non-function variable may be a Parameter or a ReturnValue but not both;
/// a function must be neither.
fn classify(variable: &Variable) -> Option<&'static str> {
    if variable.var_type != pk::FUNCTION {
        return match (variable.is_parameter, variable.is_return) {
            (true, false) => Some(pk::PARAMETER),
            (false, true) => Some(pk::RETURN_VALUE),
            (false, false) => Some(pk::LOCAL_VAR),
            (true, true) => None,
        };
    }

    if !variable.is_parameter && !variable.is_return {
        Some(pk::FUNCTION)
    } else {
        None
    }
}

fn check_variables(item: &TestItem, parameters: &Value, config: &Configuration) -> Vec<CheckResult> {
    let mut results = check_unused_variables(item);

    let allow_undefined = parameters
        .get(pk::ALLOW_UNDEFINED)
        .and_then(Value::as_bool)
        .unwrap_or(false);

    for variable in &item.variables {
        if !allow_undefined {
            results.extend(check_undefined_type(variable));
        }
        match classify(variable) {
            None => results.push(type_consistency_violation(variable)),
            Some(class) => {
                // No section for this class means no naming rules apply.
                let Some(section) = parameters.get(class) else {
                    continue;
                };
                if let Some(name_rule) = section.get(pk::NAME) {
                    results.extend(check_variable_name(variable, name_rule, config));
                }
                if let Some(desc_rule) = section.get(pk::DESCRIPTION) {
                    results.extend(check_variable_description(variable, class, desc_rule, config));
                }
            }
        }
    }

    results
}

fn check_unused_variables(item: &TestItem) -> Vec<CheckResult> {
    let mut results = Vec::new();
    if !item.unused_variables.is_empty() {
        results.push(CheckResult::new(format!(
            "Unused variables detected: {:?}",
            item.unused_variables
        )));
    }
    results
}

fn check_undefined_type(variable: &Variable) -> Vec<CheckResult> {
    let mut results = Vec::new();
    if variable.var_type == pk::UNDEFINED {
        results.push(CheckResult::new(format!(
            "Variable type for \"{}\" should not be \"{}\"",
            variable.name,
            pk::UNDEFINED
        )));
    }
    results
}

fn type_consistency_violation(variable: &Variable) -> CheckResult {
    if variable.var_type == pk::FUNCTION {
        CheckResult::new(format!(
            "Function \"{}\" is not allowed to be \"Parameter\" or \"ReturnValue\"",
            variable.name
        ))
    } else {
        CheckResult::new(format!(
            "Variable \"{}\" may be only of type \"Parameter\" OR \"ReturnValue\"",
            variable.name
        ))
    }
}

fn check_variable_name(
    variable: &Variable,
    rule: &Value,
    config: &Configuration,
) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let Some(pattern) = rule.get(pk::REGEX_PATTERN).and_then(Value::as_str) else {
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

    if !matches_at_start(&re, &variable.name) {
        let message = match rule.get(pk::CUSTOM_MESSAGE).and_then(Value::as_str) {
            Some(custom) => format!(
                "Variable \"{}\" does not match pattern. {custom}",
                variable.name
            ),
            None => format!(
                "Variable \"{}\" does not match pattern: \"{pattern}\"",
                variable.name
            ),
        };
        results.push(CheckResult::new(message));
    }

    results
}

fn check_variable_description(
    variable: &Variable,
    class: &str,
    rule: &Value,
    config: &Configuration,
) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let Some(pattern) = rule.get(pk::REGEX_PATTERN).and_then(Value::as_str) else {
        results.push(CheckResult::new(format!(
            "No field: \"{}\" was provided!",
            pk::REGEX_PATTERN
        )));
        return results;
    };
    // An empty pattern disables the description rule.
    if pattern.is_empty() {
        return results;
    }
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

    if variable.description.is_empty() {
        results.push(CheckResult::new(format!(
            "Description for {class} \"{}\" should not be empty",
            variable.name
        )));
        return results;
    }

    if !matches_at_start(&re, &variable.description) {
        let message = match rule.get(pk::CUSTOM_MESSAGE).and_then(Value::as_str) {
            Some(custom) => format!(
                "Description for {class} \"{}\": [{}] does not match pattern. {custom}",
                variable.name, variable.description
            ),
            None => format!(
                "Description for {class} \"{}\": [{}] does not match pattern: \"{pattern}\"",
                variable.name, variable.description
            ),
        };
        results.push(CheckResult::new(message));
    }

    results
}

fn check_variable_order(item: &TestItem, parameters: &Value) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let Some(order) = parameters.get(pk::ORDER) else {
        return results;
    };
    let Some(sort_method) = order.get(pk::SORT_METHOD).and_then(Value::as_str) else {
        tracing::warn!("No sort method configured. Order check is skipped!");
        return results;
    };

    // 0, false, or "None" all mean: compare full variable names.
    let relevant_chars = order
        .get(pk::NUMBER_OF_RELEVANT_CHARACTERS)
        .and_then(Value::as_u64)
        .filter(|n| *n > 0)
        .map(|n| n as usize);

    let mut names: Vec<String> = item.variables.iter().map(|v| v.name.clone()).collect();
    let mut suffix = String::new();
    if let Some(n) = relevant_chars {
        names = names.iter().map(|name| name.chars().take(n).collect()).collect();
        suffix = format!(", considering the first {n} characters");
    }

    match sort_method {
        SORT_NONE => tracing::info!("Sort check is disabled!"),
        SORT_ASCENDING => {
            let mut sorted = names.clone();
            sorted.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
            if sorted != names {
                results.push(CheckResult::new(format!(
                    "Variables are not sorted in ascending order{suffix}!"
                )));
            }
        }
        SORT_DESCENDING => {
            let mut sorted = names.clone();
            sorted.sort_by(|a, b| b.to_lowercase().cmp(&a.to_lowercase()));
            if sorted != names {
                results.push(CheckResult::new(format!(
                    "Variables are not sorted in descending order{suffix}!"
                )));
            }
        }
        other => results.push(CheckResult::new(format!(
            "Sort method \"{other}\" is not supported!"
        ))),
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_covers_all_facet_combinations() {
        let local = Variable::new("v", "LocalVar");
        assert_eq!(classify(&local), Some(pk::LOCAL_VAR));
        assert_eq!(classify(&local.clone().as_parameter()), Some(pk::PARAMETER));
        assert_eq!(classify(&local.clone().as_return()), Some(pk::RETURN_VALUE));
        assert_eq!(classify(&local.as_parameter().as_return()), None);

        let function = Variable::new("f", "Function");
        assert_eq!(classify(&function), Some(pk::FUNCTION));
        assert_eq!(classify(&function.as_parameter()), None);
    }
}
