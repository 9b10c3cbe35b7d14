//! Package namespace check.
//!
//! Validates the package name against one configured pattern. The pattern is
//! anchored at the start of the name; authors do not need to write `^`.

use regex::Regex;
use serde_yaml::Value;

use crate::checks::{matches_at_start, Check};
use crate::config::Configuration;
use crate::item::TestItem;
use crate::keys::parameter_keys as pk;
use crate::result::CheckResult;

/// Validates the package name against the configured `RegexPattern`.
pub struct NamespaceCheck;

impl Check for NamespaceCheck {
    fn name(&self) -> &'static str {
        "CheckPackageNamespace"
    }

    fn description(&self) -> &'static str {
        "Checks whether the package name follows the configured naming pattern"
    }

    fn check(
        &self,
        item: &TestItem,
        parameters: &Value,
        config: &Configuration,
    ) -> Vec<CheckResult> {
        let mut results = Vec::new();

        // An unsaved package has no folder location to derive its
        // namespace from.
        if item.filename.is_none() {
            results.push(CheckResult::new(format!(
                "Please save the package \"{}\". Could not find folder location!",
                item.name
            )));
            return results;
        }

        let Some(pattern) = parameters.get(pk::REGEX_PATTERN).and_then(Value::as_str) else {
            results.push(CheckResult::new(format!(
                "No pattern configuration provided. Please check \"{}\"!",
                config.rel_path()
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

        if !matches_at_start(&re, &item.name) {
            let message = match parameters.get(pk::CUSTOM_MESSAGE).and_then(Value::as_str) {
                Some(custom) => format!("{} does not follow name pattern. {custom}", item.name),
                None => format!("{} does not follow name pattern: \"{pattern}\"", item.name),
            };
            results.push(CheckResult::new(message));
        }

        results
    }
}
