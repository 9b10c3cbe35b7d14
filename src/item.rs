//! Read-only view of the host's test-object model.
//!
//! The host application owns packages, projects, test steps, variables, and
//! mappings. Checks never talk to the host model directly; the host snapshots
//! the narrow accessor surface the checks consume into the plain structs in
//! this module. Nothing here is ever mutated by a check.
//!
//! The builder-style constructors keep host adapters (and tests) terse:
//!
//! ```
//! use custom_checks::item::{TestItem, TestStep, Variable};
//!
//! let item = TestItem::package("EngineStart")
//!     .with_filename("TestCases/EngineStart.pkg")
//!     .with_attribute("Designer", "qa-team")
//!     .with_variable(Variable::new("P_Speed", "LocalVar").as_parameter())
//!     .with_step(TestStep::new("TestStepFolder", 1).with_child(TestStep::new("TestStepAction", 2)));
//! assert_eq!(item.steps_recursive().len(), 2);
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Category of a test item. Decides which checks the host typically runs
/// against it and which message policy the attribute engine applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Package,
    AnalysisPackage,
    Project,
}

/// Snapshot of one test item (package, analysis package, or project).
#[derive(Debug, Clone)]
pub struct TestItem {
    pub kind: ItemKind,
    pub name: String,
    /// Path of the file the item is stored in; `None` when the item has
    /// never been saved.
    pub filename: Option<PathBuf>,
    pub description: String,
    pub version: String,
    pub test_case_flag: bool,
    /// Attribute name/value pairs as shown in the host's attribute table.
    pub attributes: BTreeMap<String, String>,
    pub variables: Vec<Variable>,
    /// Names of variables the host reports as unused.
    pub unused_variables: Vec<String>,
    /// Top-level test steps; nested steps hang off [`TestStep::children`].
    pub steps: Vec<TestStep>,
    /// Entries of the package-local mapping.
    pub mapping: Vec<MappingItem>,
}

impl TestItem {
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        TestItem {
            kind,
            name: name.into(),
            filename: None,
            description: String::new(),
            version: String::new(),
            test_case_flag: false,
            attributes: BTreeMap::new(),
            variables: Vec::new(),
            unused_variables: Vec::new(),
            steps: Vec::new(),
            mapping: Vec::new(),
        }
    }

    pub fn package(name: impl Into<String>) -> Self {
        TestItem::new(ItemKind::Package, name)
    }

    pub fn analysis_package(name: impl Into<String>) -> Self {
        TestItem::new(ItemKind::AnalysisPackage, name)
    }

    pub fn project(name: impl Into<String>) -> Self {
        TestItem::new(ItemKind::Project, name)
    }

    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_test_case_flag(mut self, flag: bool) -> Self {
        self.test_case_flag = flag;
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    pub fn with_unused_variable(mut self, name: impl Into<String>) -> Self {
        self.unused_variables.push(name.into());
        self
    }

    pub fn with_step(mut self, step: TestStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn with_mapping_item(mut self, item: MappingItem) -> Self {
        self.mapping.push(item);
        self
    }

    /// All steps of the item flattened depth-first, nested steps included.
    pub fn steps_recursive(&self) -> Vec<&TestStep> {
        let mut flat = Vec::new();
        for step in &self.steps {
            collect_steps(step, &mut flat);
        }
        flat
    }
}

fn collect_steps<'a>(step: &'a TestStep, into: &mut Vec<&'a TestStep>) {
    into.push(step);
    for child in &step.children {
        collect_steps(child, into);
    }
}

/// One variable of a package.
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub description: String,
    /// Declared type as the host reports it (e.g. `LocalVar`, `Function`,
    /// `Undefined`).
    pub var_type: String,
    pub is_parameter: bool,
    pub is_return: bool,
}

impl Variable {
    pub fn new(name: impl Into<String>, var_type: impl Into<String>) -> Self {
        Variable {
            name: name.into(),
            description: String::new(),
            var_type: var_type.into(),
            is_parameter: false,
            is_return: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn as_parameter(mut self) -> Self {
        self.is_parameter = true;
        self
    }

    pub fn as_return(mut self) -> Self {
        self.is_return = true;
        self
    }
}

/// One test step. Steps form a tree; a step with no nested steps has an
/// empty `children` vector.
#[derive(Debug, Clone)]
pub struct TestStep {
    /// Declared step type (e.g. `TestStepAction`, `TestStepFolder`).
    pub step_type: String,
    /// 1-indexed line number of the step in the host editor.
    pub line_no: usize,
    /// Textual representation of the step as rendered by the host.
    pub text: String,
    pub children: Vec<TestStep>,
}

impl TestStep {
    pub fn new(step_type: impl Into<String>, line_no: usize) -> Self {
        let step_type = step_type.into();
        TestStep {
            text: step_type.clone(),
            step_type,
            line_no,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: TestStep) -> Self {
        self.children.push(child);
        self
    }
}

/// One entry of a package-local mapping.
#[derive(Debug, Clone)]
pub struct MappingItem {
    /// Name the mapping entry is referenced by inside the package.
    pub reference_name: String,
    /// Access type of the entry (e.g. `Read`, `Write`).
    pub access_type: String,
}

impl MappingItem {
    pub fn new(reference_name: impl Into<String>, access_type: impl Into<String>) -> Self {
        MappingItem {
            reference_name: reference_name.into(),
            access_type: access_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_recursive_flattens_depth_first() {
        let item = TestItem::package("P").with_step(
            TestStep::new("TestStepFolder", 1)
                .with_child(TestStep::new("TestStepAction", 2))
                .with_child(
                    TestStep::new("TestStepFolder", 3).with_child(TestStep::new("TestStepAction", 4)),
                ),
        );
        let lines: Vec<usize> = item.steps_recursive().iter().map(|s| s.line_no).collect();
        assert_eq!(lines, vec![1, 2, 3, 4]);
    }
}
