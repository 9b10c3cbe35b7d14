//! Local-mapping access-type check.
//!
//! Iterates the entries of a package's local mapping and flags every entry
//! whose access type appears in the configured `Denylist`.

use serde_yaml::Value;

use crate::checks::Check;
use crate::config::Configuration;
use crate::item::{MappingItem, TestItem};
use crate::keys::parameter_keys as pk;
use crate::result::CheckResult;

/// Flags local-mapping entries with a forbidden access type.
pub struct LocalMappingCheck;

impl Check for LocalMappingCheck {
    fn name(&self) -> &'static str {
        "CheckPackageLocalMapping"
    }

    fn description(&self) -> &'static str {
        "Checks whether the package's local mapping uses forbidden mapping types"
    }

    fn check(
        &self,
        item: &TestItem,
        parameters: &Value,
        config: &Configuration,
    ) -> Vec<CheckResult> {
        let denied: Vec<&str> = parameters
            .get(pk::DENYLIST)
            .and_then(Value::as_sequence)
            .map(|seq| seq.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        if denied.is_empty() {
            return vec![CheckResult::new(format!(
                "Parameter '{}' not configured for the check '{}' in the config. \
                 Please check '{}'!",
                pk::DENYLIST,
                self.name(),
                config.rel_path()
            ))];
        }

        item.mapping
            .iter()
            .filter_map(|entry| check_mapping_item(entry, &denied))
            .collect()
    }
}

fn check_mapping_item(entry: &MappingItem, denied: &[&str]) -> Option<CheckResult> {
    if denied.contains(&entry.access_type.as_str()) {
        Some(CheckResult::new(format!(
            "Mapping item with name '{}' is of type '{}' which is forbidden!",
            entry.reference_name, entry.access_type
        )))
    } else {
        None
    }
}
