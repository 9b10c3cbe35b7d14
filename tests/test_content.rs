use custom_checks::checks::content_allowed::ContentAllowedCheck;
use custom_checks::checks::content_forbidden::ContentForbiddenCheck;
use custom_checks::checks::Check;
use custom_checks::config::Configuration;
use custom_checks::item::{TestItem, TestStep};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn config() -> Configuration {
    Configuration::from_str("{}", "CustomChecks/config.yaml").unwrap()
}

fn params(yaml: &str) -> serde_yaml::Value {
    serde_yaml::from_str(yaml).unwrap()
}

fn messages(check: &dyn Check, item: &TestItem, yaml: &str) -> Vec<String> {
    check
        .check(item, &params(yaml), &config())
        .into_iter()
        .map(|r| r.message)
        .collect()
}

// ---------------------------------------------------------------------------
// Allow-list check
// ---------------------------------------------------------------------------

#[test]
fn allowed_types_produce_no_results() {
    let item = TestItem::package("P")
        .with_step(TestStep::new("TestStepAction", 1))
        .with_step(TestStep::new("TestStepAction", 2));
    let found = messages(&ContentAllowedCheck, &item, "Allowlist: [\"TestStepAction\"]");
    assert!(found.is_empty(), "unexpected: {found:?}");
}

#[test]
fn disallowed_type_is_flagged_with_its_line() {
    let item = TestItem::package("P").with_step(TestStep::new("TestStepToDo", 7));
    let found = messages(&ContentAllowedCheck, &item, "Allowlist: [\"TestStepAction\"]");
    assert_eq!(
        found,
        vec!["Not allowed content of type TestStepToDo in line 7!"]
    );
}

#[test]
fn empty_allowlist_disables_the_check() {
    let item = TestItem::package("P").with_step(TestStep::new("TestStepToDo", 7));
    let found = messages(&ContentAllowedCheck, &item, "Allowlist: []");
    assert!(found.is_empty(), "unexpected: {found:?}");
}

#[test]
fn search_depth_limits_the_walk() {
    // Depth 0: folder (not allowed). Depth 1: action (allowed).
    // Depth 2: to-do step, beyond the search depth, never visited.
    let item = TestItem::package("P").with_step(
        TestStep::new("TestStepFolder", 1).with_child(
            TestStep::new("TestStepAction", 2).with_child(TestStep::new("TestStepToDo", 3)),
        ),
    );
    let yaml = "Allowlist: [\"TestStepAction\"]\nSearchDepth: 1";
    let found = messages(&ContentAllowedCheck, &item, yaml);
    assert_eq!(
        found,
        vec!["Not allowed content of type TestStepFolder in line 1!"]
    );
}

#[test]
fn missing_search_depth_walks_the_whole_tree() {
    let item = TestItem::package("P").with_step(
        TestStep::new("TestStepFolder", 1).with_child(
            TestStep::new("TestStepFolder", 2).with_child(TestStep::new("TestStepToDo", 3)),
        ),
    );
    let found = messages(&ContentAllowedCheck, &item, "Allowlist: [\"TestStepFolder\"]");
    assert_eq!(
        found,
        vec!["Not allowed content of type TestStepToDo in line 3!"]
    );
}

// ---------------------------------------------------------------------------
// Deny-list check
// ---------------------------------------------------------------------------

#[test]
fn forbidden_substring_is_flagged_in_nested_steps() {
    let item = TestItem::package("P").with_step(
        TestStep::new("TestStepFolder", 1)
            .with_child(TestStep::new("TestStepToDo", 2).with_text("To Do: implement stop")),
    );
    let found = messages(&ContentForbiddenCheck, &item, "Denylist: [\"To Do\"]");
    assert_eq!(
        found,
        vec!["Forbidden content of type TestStepToDo in line 2!"]
    );
}

#[test]
fn every_denylist_entry_is_scanned() {
    let item = TestItem::package("P")
        .with_step(TestStep::new("TestStepPrecondition", 1).with_text("Precondition: warm engine"))
        .with_step(TestStep::new("TestStepToDo", 2).with_text("To Do"));
    let found = messages(
        &ContentForbiddenCheck,
        &item,
        "Denylist: [\"To Do\", \"Precondition\"]",
    );
    assert_eq!(found.len(), 2);
}

#[test]
fn missing_denylist_reports_a_configuration_error() {
    let item = TestItem::package("P");
    let found = messages(&ContentForbiddenCheck, &item, "{}");
    assert_eq!(found.len(), 1);
    assert!(
        found[0].contains("'Denylist' not configured"),
        "got: {}",
        found[0]
    );
}

#[test]
fn clean_package_produces_no_results() {
    let item = TestItem::package("P").with_step(TestStep::new("TestStepAction", 1));
    let found = messages(&ContentForbiddenCheck, &item, "Denylist: [\"To Do\"]");
    assert!(found.is_empty(), "unexpected: {found:?}");
}
