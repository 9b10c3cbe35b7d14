//! Configuration key vocabularies.
//!
//! The YAML configuration file is a free-form document; these constants are
//! the schema contract between config authors and the checks. Every key a
//! check reads from a `Parameters` or `Conditions` block is named here;
//! string literals for config keys do not appear anywhere else in the crate.

/// Keys recognized inside a `Parameters` block.
pub mod parameter_keys {
    pub const ALLOWLIST: &str = "Allowlist";
    pub const DENYLIST: &str = "Denylist";
    pub const CHECK: &str = "Check";
    pub const CUSTOM_MESSAGE: &str = "CustomMessage";
    pub const DESCRIPTION: &str = "Description";
    pub const FUNCTION: &str = "Function";
    pub const LOCAL_VAR: &str = "LocalVar";
    pub const UNDEFINED: &str = "Undefined";
    pub const MIN_LENGTH: &str = "MinLength";
    pub const NAME: &str = "Name";
    pub const NUMBER_OF_RELEVANT_CHARACTERS: &str = "NumberOfRelevantCharacters";
    pub const ORDER: &str = "Order";
    pub const PARAMETER: &str = "Parameter";
    pub const REGEX_DESCRIPTION: &str = "RegexDescription";
    pub const REGEX_PATTERN: &str = "RegexPattern";
    pub const RETURN_VALUE: &str = "ReturnValue";
    pub const SEARCH_DEPTH: &str = "SearchDepth";
    pub const SORT_METHOD: &str = "SortMethod";
    pub const TEST_CASE_FLAG: &str = "TestCaseFlag";
    pub const VERSION: &str = "Version";
    pub const ALLOW_UNDEFINED: &str = "AllowUndefinedVariables";
}

/// Keys recognized inside a `Conditions` block, plus the per-check
/// `Enabled` switch that lives alongside the instance labels.
pub mod condition_keys {
    pub const PROJECT_NAME: &str = "ProjectName";
    pub const PACKAGE_NAME: &str = "PackageName";
    pub const PROJECT_FOLDER: &str = "ProjectFolder";
    pub const PACKAGE_FOLDER: &str = "PackageFolder";
    pub const PACKAGE_PROPERTIES: &str = "PackageProperties";
    pub const REGEX_PATTERN: &str = "RegexPattern";
    pub const TEST_CASE_FLAG: &str = "TestCaseFlag";
    pub const ENABLED: &str = "Enabled";
}
