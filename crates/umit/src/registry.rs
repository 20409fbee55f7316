//! Testcase registry - the ordered list of testcases to run

use crate::check::Checker;
use std::fmt;

/// Longest testcase name kept; longer names are cut to this many characters
pub const MAX_NAME_LEN: usize = 31;

/// Body of a testcase. Receives the check context for the current run.
pub type TestFn = Box<dyn FnMut(&mut Checker<'_>)>;

/// A registered testcase
pub struct TestCase {
    /// Display name, truncated to [`MAX_NAME_LEN`] characters
    name: String,
    /// User-defined body
    func: TestFn,
    /// Whether the "In testcase" header was already written this run
    logged: bool,
}

impl TestCase {
    fn new(func: TestFn, name: &str) -> Self {
        Self {
            name: name.chars().take(MAX_NAME_LEN).collect(),
            func,
            logged: false,
        }
    }

    /// Name of the testcase
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the header for this testcase has been emitted
    pub fn is_logged(&self) -> bool {
        self.logged
    }

    /// Borrow the reporting label and the body separately so the body can
    /// run while the reporter updates the label.
    pub(crate) fn split(&mut self) -> (CaseLabel<'_>, &mut TestFn) {
        (
            CaseLabel {
                name: &self.name,
                logged: &mut self.logged,
            },
            &mut self.func,
        )
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("logged", &self.logged)
            .finish_non_exhaustive()
    }
}

/// The part of a testcase the reporter needs while its body is running
#[derive(Debug)]
pub struct CaseLabel<'a> {
    pub name: &'a str,
    pub logged: &'a mut bool,
}

/// Append-only, ordered collection of testcases.
///
/// Registration order is execution order. The same function may be
/// registered more than once and then runs once per registration.
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a testcase
    pub fn register<F>(&mut self, func: F, name: &str)
    where
        F: FnMut(&mut Checker<'_>) + 'static,
    {
        let case = TestCase::new(Box::new(func), name);
        tracing::debug!(testcase = case.name(), position = self.cases.len(), "registered testcase");
        self.cases.push(case);
    }

    /// Number of registered testcases
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether no testcase has been registered
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterate over testcases in registration order
    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.iter()
    }

    /// Testcase names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(TestCase::name)
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, TestCase> {
        self.cases.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut Checker<'_>) {}

    #[test]
    fn test_register_preserves_order() {
        let mut registry = Registry::new();
        registry.register(noop, "alpha");
        registry.register(noop, "beta");
        registry.register(noop, "gamma");

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_duplicate_registration_is_kept() {
        let mut registry = Registry::new();
        registry.register(noop, "same");
        registry.register(noop, "same");

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_long_name_is_truncated() {
        let long = "a_really_long_testcase_name_that_goes_on_and_on";
        let mut registry = Registry::new();
        registry.register(noop, long);

        let name = registry.names().next().unwrap();
        assert_eq!(name.chars().count(), MAX_NAME_LEN);
        assert!(long.starts_with(name));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let name = "ü".repeat(40);
        let mut registry = Registry::new();
        registry.register(noop, &name);

        assert_eq!(registry.names().next().unwrap(), "ü".repeat(MAX_NAME_LEN));
    }

    #[test]
    fn test_new_case_is_not_logged() {
        let mut registry = Registry::new();
        registry.register(noop, "fresh");

        assert!(!registry.iter().next().unwrap().is_logged());
        assert!(!registry.is_empty());
    }
}
