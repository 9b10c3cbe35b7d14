//! Condition evaluation.
//!
//! A check instance may carry a `Conditions` block restricting which test
//! items it applies to. Evaluation is a logical AND across all declared
//! conditions; an absent or empty block always passes.
//!
//! Unknown condition keys are logged and contribute no constraint; the
//! evaluator is permissive by default, so a typo in a condition key widens a
//! rule's reach instead of silently disabling it.

use regex::Regex;
use serde_yaml::{Mapping, Value};

use crate::item::TestItem;
use crate::keys::condition_keys as ck;

/// Decides whether a check instance applies to `item`.
///
/// Recognized conditions: `PackageName` / `ProjectName` (regex over the item
/// name), `PackageFolder` / `ProjectFolder` (regex over the item's file
/// path), and `PackageProperties` (`TestCaseFlag` equality). Malformed
/// condition blocks (missing `RegexPattern`, invalid regex) are logged and
/// treated as no constraint; conditions never produce check results.
pub fn conditions_met(conditions: Option<&Mapping>, item: &TestItem) -> bool {
    let Some(conditions) = conditions else {
        return true;
    };

    let mut met = true;
    for (key, condition) in conditions {
        let Some(key) = key.as_str() else {
            tracing::warn!("Condition key is not a string: {key:?}");
            continue;
        };
        match key {
            ck::PACKAGE_NAME | ck::PROJECT_NAME => {
                met &= regex_condition(key, condition, Some(&item.name));
            }
            ck::PACKAGE_FOLDER | ck::PROJECT_FOLDER => {
                let filename = item.filename.as_deref().map(|p| p.to_string_lossy());
                met &= regex_condition(key, condition, filename.as_deref());
            }
            ck::PACKAGE_PROPERTIES => {
                if let Some(expected) = condition.get(ck::TEST_CASE_FLAG).and_then(Value::as_bool)
                {
                    met &= expected == item.test_case_flag;
                } else {
                    tracing::warn!(
                        "Condition \"{key}\" has no boolean \"{}\" entry!",
                        ck::TEST_CASE_FLAG
                    );
                }
            }
            _ => tracing::warn!("Condition \"{key}\" is not implemented!"),
        }
    }
    met
}

/// Applies a `{RegexPattern: ..}` condition to `candidate` with
/// partial-match semantics. `None` (an unsaved item has no folder) never
/// matches; a malformed condition is no constraint.
fn regex_condition(key: &str, condition: &Value, candidate: Option<&str>) -> bool {
    let Some(pattern) = condition.get(ck::REGEX_PATTERN).and_then(Value::as_str) else {
        tracing::warn!("Condition \"{key}\" has no \"{}\" entry!", ck::REGEX_PATTERN);
        return true;
    };
    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(_) => {
            tracing::warn!("Condition \"{key}\" pattern \"{pattern}\" is not a valid regex!");
            return true;
        }
    };
    match candidate {
        Some(candidate) => re.is_match(candidate),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn no_conditions_always_passes() {
        let item = TestItem::package("Anything");
        assert!(conditions_met(None, &item));
        assert!(conditions_met(Some(&Mapping::new()), &item));
    }

    #[test]
    fn folder_condition_fails_for_unsaved_item() {
        let block = conditions("PackageFolder:\n  RegexPattern: TestCases\n");
        let item = TestItem::package("Unsaved");
        assert!(!conditions_met(Some(&block), &item));
    }

    #[test]
    fn unknown_condition_is_ignored() {
        let block = conditions("SomeFutureCondition:\n  RegexPattern: x\n");
        let item = TestItem::package("Anything");
        assert!(conditions_met(Some(&block), &item));
    }
}
