//! # custom-checks
//!
//! Configurable quality checks for test packages and projects.
//!
//! `custom-checks` is a plugin library for test-authoring hosts: it validates
//! test items (packages, analysis packages, projects) against rules declared
//! in a YAML configuration file: attribute presence and patterns, naming
//! conventions, allowed/forbidden test-step content, variable naming and
//! ordering, and local-mapping restrictions. Every violation is reported as
//! a flat [`result::CheckResult`] message; the host owns display and
//! reporting.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use custom_checks::checks;
//! use custom_checks::config::Configuration;
//! use custom_checks::item::TestItem;
//!
//! let config = Configuration::load(Path::new("./Parameters"))?;
//! let item = TestItem::package("EngineStart")
//!     .with_filename("TestCases/EngineStart.pkg")
//!     .with_description("Starts the engine and verifies idle speed.");
//!
//! for result in checks::run_all(&item, &config)? {
//!     println!("{result}");
//! }
//! # Ok::<(), custom_checks::error::Error>(())
//! ```
//!
//! ## Architecture
//!
//! 1. **[`config`]** loads the YAML rule file (template fallback when
//!    absent) and looks up rule instances per check name.
//! 2. **[`conditions`]** decides per rule instance whether it applies to a
//!    given test item (name/folder patterns, test-case flag).
//! 3. **[`checks`]** holds the pluggable [`checks::Check`] trait, the shared
//!    orchestration ([`checks::run_check`], [`checks::run_all`]), and the
//!    built-in rule families.
//! 4. **[`item`]** is the read-only snapshot of the host's test-object model
//!    that checks consume.
//! 5. **[`result`]** / **[`error`]** provide one flat message type for
//!    violations and typed errors for the few fatal configuration problems.
//!
//! Everything is synchronous and free of shared mutable state: the loaded
//! [`config::Configuration`] is passed by reference into each run, and checks
//! never mutate the test item.

pub mod checks;
pub mod conditions;
pub mod config;
pub mod error;
pub mod item;
pub mod keys;
pub mod result;
