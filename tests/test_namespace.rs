use custom_checks::checks::namespace::NamespaceCheck;
use custom_checks::checks::Check;
use custom_checks::config::Configuration;
use custom_checks::item::TestItem;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn config() -> Configuration {
    Configuration::from_str("{}", "CustomChecks/config.yaml").unwrap()
}

fn messages(item: &TestItem, yaml: &str) -> Vec<String> {
    let params: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
    NamespaceCheck
        .check(item, &params, &config())
        .into_iter()
        .map(|r| r.message)
        .collect()
}

// ---------------------------------------------------------------------------
// Cases
// ---------------------------------------------------------------------------

#[test]
fn matching_name_passes() {
    let item = TestItem::package("PKG_Engine").with_filename("TestCases/PKG_Engine.pkg");
    let found = messages(&item, "RegexPattern: \"PKG_\"");
    assert!(found.is_empty(), "unexpected: {found:?}");
}

#[test]
fn pattern_is_anchored_at_the_name_start() {
    // "PKG_" appears in the name but not at the start.
    let item = TestItem::package("MyPKG_Engine").with_filename("TestCases/MyPKG_Engine.pkg");
    let found = messages(&item, "RegexPattern: \"PKG_\"");
    assert_eq!(
        found,
        vec!["MyPKG_Engine does not follow name pattern: \"PKG_\""]
    );
}

#[test]
fn mismatch_uses_the_custom_message() {
    let item = TestItem::package("engine").with_filename("engine.pkg");
    let yaml = "RegexPattern: \"^[A-Z]\"\nCustomMessage: \"Start with a capital letter.\"";
    let found = messages(&item, yaml);
    assert_eq!(
        found,
        vec!["engine does not follow name pattern. Start with a capital letter."]
    );
}

#[test]
fn unsaved_package_asks_to_be_saved() {
    let item = TestItem::package("Unsaved");
    let found = messages(&item, "RegexPattern: \"^[A-Z]\"");
    assert_eq!(
        found,
        vec!["Please save the package \"Unsaved\". Could not find folder location!"]
    );
}

#[test]
fn missing_pattern_reports_the_config_file() {
    let item = TestItem::package("P").with_filename("P.pkg");
    let found = messages(&item, "CustomMessage: \"x\"");
    assert_eq!(
        found,
        vec!["No pattern configuration provided. Please check \"CustomChecks/config.yaml\"!"]
    );
}

#[test]
fn invalid_pattern_reports_a_configuration_error() {
    let item = TestItem::package("P").with_filename("P.pkg");
    let found = messages(&item, "RegexPattern: \"[\"");
    assert_eq!(
        found,
        vec!["\"[\" is not a valid pattern. Check \"CustomChecks/config.yaml\"!"]
    );
}
