//! Step-content deny-list check.
//!
//! Scans the textual representation of every step in the package (nested
//! steps included) for the configured `Denylist` entries. Typical entries
//! are step kinds the team bans from finished test cases, such as To-Do
//! steps or pre/postconditions.

use serde_yaml::Value;

use crate::checks::Check;
use crate::config::Configuration;
use crate::item::TestItem;
use crate::keys::parameter_keys as pk;
use crate::result::CheckResult;

/// Flags steps whose textual representation contains a denied entry.
pub struct ContentForbiddenCheck;

impl Check for ContentForbiddenCheck {
    fn name(&self) -> &'static str {
        "CheckPackageContentForbidden"
    }

    fn description(&self) -> &'static str {
        "Checks whether the package contains forbidden test-step content"
    }

    fn check(
        &self,
        item: &TestItem,
        parameters: &Value,
        config: &Configuration,
    ) -> Vec<CheckResult> {
        let mut results = Vec::new();

        let Some(denied) = parameters.get(pk::DENYLIST).and_then(Value::as_sequence) else {
            results.push(CheckResult::new(format!(
                "Parameter '{}' not configured for the check '{}' in the config. \
                 Please check '{}'!",
                pk::DENYLIST,
                self.name(),
                config.rel_path()
            )));
            return results;
        };

        let steps = item.steps_recursive();
        for forbidden in denied.iter().filter_map(Value::as_str) {
            for step in &steps {
                if step.text.contains(forbidden) {
                    results.push(CheckResult::new(format!(
                        "Forbidden content of type {} in line {}!",
                        step.step_type, step.line_no
                    )));
                }
            }
        }

        results
    }
}
