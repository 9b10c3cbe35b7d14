//! Step-type allow-list check.
//!
//! Walks the package's step tree and flags every step whose declared type is
//! not in the configured `Allowlist`. The optional `SearchDepth` parameter
//! bounds the walk: recursion into a step's children stops once the current
//! layer reaches the configured depth, so with `SearchDepth: 1` top-level
//! steps and their direct children are evaluated but grandchildren are never
//! visited. A depth of `0` (or no `SearchDepth` entry) means unlimited.

use serde_yaml::Value;

use crate::checks::Check;
use crate::config::Configuration;
use crate::item::{TestItem, TestStep};
use crate::keys::parameter_keys as pk;
use crate::result::CheckResult;

/// Flags steps whose type is not in the configured allow-list.
pub struct ContentAllowedCheck;

impl Check for ContentAllowedCheck {
    fn name(&self) -> &'static str {
        "CheckPackageContentAllowed"
    }

    fn description(&self) -> &'static str {
        "Checks whether the package contains only test steps of allowed types"
    }

    fn check(
        &self,
        item: &TestItem,
        parameters: &Value,
        _config: &Configuration,
    ) -> Vec<CheckResult> {
        let mut results = Vec::new();

        let allowed: Vec<&str> = parameters
            .get(pk::ALLOWLIST)
            .and_then(Value::as_sequence)
            .map(|seq| seq.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        if allowed.is_empty() {
            return results;
        }

        let search_depth = parameters
            .get(pk::SEARCH_DEPTH)
            .and_then(Value::as_u64)
            .filter(|depth| *depth > 0);

        visit_steps(&item.steps, 0, &allowed, search_depth, &mut results);
        results
    }
}

fn visit_steps(
    steps: &[TestStep],
    layer: u64,
    allowed: &[&str],
    search_depth: Option<u64>,
    results: &mut Vec<CheckResult>,
) {
    for step in steps {
        if !allowed.contains(&step.step_type.as_str()) {
            results.push(CheckResult::new(format!(
                "Not allowed content of type {} in line {}!",
                step.step_type, step.line_no
            )));
        }
        // Recursion stops once the current layer reaches the search depth.
        if search_depth.map_or(true, |depth| layer < depth) {
            visit_steps(&step.children, layer + 1, allowed, search_depth, results);
        }
    }
}
