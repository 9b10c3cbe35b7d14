//! Pluggable checks.
//!
//! Every rule family implements the [`Check`] trait: a stable name matching
//! its configuration section plus the rule-specific `check` logic. The shared
//! orchestration in [`run_check`] resolves configured instances, evaluates
//! their conditions, and accumulates results, so individual checks never
//! touch the configuration document structure themselves.
//!
//! Use [`all_checks`] to obtain every registered check and [`run_all`] to
//! execute the full registry against one test item.
//!
//! | Check | Validates |
//! |-------|-----------|
//! | `CheckPackageAttributes` | package attribute expectations |
//! | `CheckProjectAttributes` | project attribute expectations |
//! | `CheckPackageNamespace` | package name against one pattern |
//! | `CheckPackageContentAllowed` | step types against an allow-list |
//! | `CheckPackageContentForbidden` | step text against a deny-list |
//! | `CheckPackageLocalMapping` | local-mapping access types against a deny-list |
//! | `CheckPackageGeneralInformation` | description, version, test-case flag |
//! | `CheckPackageVariables` | variable naming, classification, ordering |

pub mod attributes;
pub mod content_allowed;
pub mod content_forbidden;
pub mod general_info;
pub mod local_mapping;
pub mod namespace;
pub mod variables;

use regex::Regex;
use serde_yaml::Value;

use crate::conditions::conditions_met;
use crate::config::Configuration;
use crate::error::Error;
use crate::item::TestItem;
use crate::result::CheckResult;

/// A pluggable check.
///
/// Implementers **must** be [`Send`] + [`Sync`]: checks hold no state and
/// never mutate the test item or the configuration, so a host is free to run
/// independent check instances in parallel as long as each invocation owns
/// its result vector.
pub trait Check: Send + Sync {
    /// Stable identifier, shown in the host UI and used as the check's
    /// section name in the configuration file.
    fn name(&self) -> &'static str;

    /// Short human-readable description of the check.
    fn description(&self) -> &'static str;

    /// Rule-specific logic for one configured instance.
    ///
    /// `parameters` is that instance's `Parameters` block; `config` is only
    /// consulted for diagnostic context (the rule file's relative path).
    /// Returns one result per violation, empty when the item passes.
    fn check(&self, item: &TestItem, parameters: &Value, config: &Configuration)
        -> Vec<CheckResult>;
}

/// Runs every configured instance of `check` against `item`.
///
/// A check disabled via its `Enabled` flag returns no results. For each
/// remaining instance the `Conditions` block decides applicability; an
/// applicable instance's `Parameters` are handed to [`Check::check`] and the
/// results accumulated in instance order.
///
/// # Errors
///
/// Fails with [`Error::MissingParameters`] when an applicable instance has
/// no `Parameters` section. Sibling instances already processed are lost for
/// this call; other checks are unaffected.
pub fn run_check(
    check: &dyn Check,
    item: &TestItem,
    config: &Configuration,
) -> Result<Vec<CheckResult>, Error> {
    let mut results = Vec::new();

    let (enabled, instances) = config.check_instances(check.name());
    if !enabled {
        tracing::debug!("Check \"{}\" is disabled.", check.name());
        return Ok(results);
    }

    for (label, _) in instances {
        if !conditions_met(config.check_conditions(check.name(), &label), item) {
            tracing::debug!(
                "\"{}\": conditions not met for \"{label}\". Check will not be performed.",
                item.name
            );
            continue;
        }
        let parameters = config.check_parameters(check.name(), &label)?;
        results.extend(check.check(item, parameters, config));
    }

    Ok(results)
}

/// Returns every registered [`Check`] implementation.
///
/// The returned order is the order [`run_all`] reports in.
pub fn all_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(general_info::GeneralInformationCheck),
        Box::new(attributes::PackageAttributesCheck),
        Box::new(attributes::ProjectAttributesCheck),
        Box::new(namespace::NamespaceCheck),
        Box::new(content_allowed::ContentAllowedCheck),
        Box::new(content_forbidden::ContentForbiddenCheck),
        Box::new(local_mapping::LocalMappingCheck),
        Box::new(variables::VariablesCheck),
    ]
}

/// Runs the whole registry against one test item, accumulating all results.
///
/// # Errors
///
/// Propagates the first [`Error::MissingParameters`] encountered.
pub fn run_all(item: &TestItem, config: &Configuration) -> Result<Vec<CheckResult>, Error> {
    let mut results = Vec::new();
    for check in all_checks() {
        results.extend(run_check(check.as_ref(), item, config)?);
    }
    Ok(results)
}

/// Returns `true` when `re` matches at the very start of `text`.
///
/// The name and namespace rules anchor their patterns at the beginning of
/// the checked value without requiring the author to write `^`.
pub(crate) fn matches_at_start(re: &Regex, text: &str) -> bool {
    re.find(text).is_some_and(|m| m.start() == 0)
}

/// Renders a YAML sequence of allowed options the way violation messages
/// quote it, e.g. `["Component", "Integration"]`.
pub(crate) fn format_options(values: &[Value]) -> String {
    let parts: Vec<String> = values
        .iter()
        .map(|value| match value {
            Value::String(s) => format!("\"{s}\""),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => format!("{other:?}"),
        })
        .collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_at_start_requires_position_zero() {
        let re = Regex::new("[a-z]+").unwrap();
        assert!(matches_at_start(&re, "abc"));
        assert!(!matches_at_start(&re, "Xabc"));
    }

    #[test]
    fn format_options_quotes_strings() {
        let values = vec![Value::from("A"), Value::from(2)];
        assert_eq!(format_options(&values), "[\"A\", 2]");
    }
}
