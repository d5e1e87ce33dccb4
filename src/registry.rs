//! Test record storage for a single run.
//!
//! ## Registry Invariant
//! Records are appended, never removed or reordered. A record is registered
//! immediately before its test body executes, so the registry length always
//! equals the number of tests started, and the last record is the one every
//! assertion of the running test targets.

use std::time::Duration;

/// Capacity reserved up front; growth after that is the usual amortized doubling.
pub const INITIAL_CAPACITY: usize = 256;

/// The stored outcome of one executed test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord<'a> {
    pub name: &'a str,
    pub passed: bool,
    pub message: Option<String>,
    pub elapsed: Option<Duration>,
}

impl<'a> TestRecord<'a> {
    fn new(name: &'a str) -> Self {
        Self {
            name,
            passed: false,
            message: None,
            elapsed: None,
        }
    }

    pub fn failed(&self) -> bool {
        !self.passed
    }
}

/// Ordered, append-only list of test records.
#[derive(Debug)]
pub struct Registry<'a> {
    records: Vec<TestRecord<'a>>,
}

impl<'a> Default for Registry<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Registry<'a> {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Appends a fresh record (not passed, no message) and returns its index.
    /// The new record becomes the current one.
    pub fn register(&mut self, name: &'a str) -> usize {
        self.records.push(TestRecord::new(name));
        self.records.len() - 1
    }

    /// Sets the pass flag of a finished test.
    ///
    /// A passed record never keeps a message.
    ///
    /// # Panics
    /// Panics if `index` was not returned by [`register`](Self::register).
    pub fn mark_result(&mut self, index: usize, passed: bool) {
        let record = &mut self.records[index];
        record.passed = passed;
        if passed {
            record.message = None;
        }
    }

    /// Stores the failure message of a test. Only the first message sticks.
    pub fn set_message(&mut self, index: usize, message: String) {
        let record = &mut self.records[index];
        if record.message.is_none() {
            record.message = Some(message);
        }
    }

    pub fn set_elapsed(&mut self, index: usize, elapsed: Duration) {
        self.records[index].elapsed = Some(elapsed);
    }

    pub fn record(&self, index: usize) -> Option<&TestRecord<'a>> {
        self.records.get(index)
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn record_mut(&mut self, index: usize) -> &mut TestRecord<'a> {
        &mut self.records[index]
    }

    /// The most recently registered record.
    pub fn current(&self) -> Option<&TestRecord<'a>> {
        self.records.last()
    }

    pub fn records(&self) -> &[TestRecord<'a>] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestRecord<'a>> {
        self.records.iter()
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestRecord<'a>> {
        self.records.iter().filter(|r| r.failed())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'r, 'a> IntoIterator for &'r Registry<'a> {
    type Item = &'r TestRecord<'a>;
    type IntoIter = std::slice::Iter<'r, TestRecord<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Tests run and failed so far.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunCounters {
    pub total_run: usize,
    pub total_failed: usize,
}

impl RunCounters {
    pub fn start(&mut self) {
        self.total_run += 1;
    }

    pub fn fail(&mut self) {
        self.total_failed += 1;
    }

    pub fn total_passed(&self) -> usize {
        self.total_run - self.total_failed
    }

    pub fn all_passed(&self) -> bool {
        self.total_failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_appends_unpassed_records_in_order() {
        let mut registry = Registry::new();
        assert_eq!(registry.register("first"), 0);
        assert_eq!(registry.register("second"), 1);

        let names: Vec<_> = registry.iter().map(|r| r.name).collect();
        assert_eq!(names, ["first", "second"]);
        assert!(registry.iter().all(|r| !r.passed && r.message.is_none()));
        assert_eq!(registry.current().map(|r| r.name), Some("second"));
    }

    #[test]
    fn grows_past_initial_capacity_keeping_indices() {
        let names: Vec<String> = (0..INITIAL_CAPACITY * 2 + 3).map(|i| format!("t{i}")).collect();
        let mut registry = Registry::new();
        for (i, name) in names.iter().enumerate() {
            assert_eq!(registry.register(name), i);
        }
        assert_eq!(registry.len(), names.len());
        assert_eq!(registry.record(300).map(|r| r.name), Some("t300"));
    }

    #[test]
    fn message_is_kept_only_for_failures() {
        let mut registry = Registry::new();
        let a = registry.register("a");
        registry.set_message(a, "a.rs:1: boom".to_string());
        registry.set_message(a, "a.rs:2: later".to_string());
        registry.mark_result(a, false);
        assert_eq!(registry.record(a).and_then(|r| r.message.as_deref()), Some("a.rs:1: boom"));

        let b = registry.register("b");
        registry.set_message(b, "stray".to_string());
        registry.mark_result(b, true);
        assert_eq!(registry.record(b).map(|r| r.message.is_none()), Some(true));
        assert_eq!(registry.failures().count(), 1);
    }

    #[test]
    fn counters_track_pass_and_fail() {
        let mut counters = RunCounters::default();
        counters.start();
        counters.start();
        counters.fail();
        assert_eq!(counters.total_run, 2);
        assert_eq!(counters.total_passed(), 1);
        assert!(!counters.all_passed());
    }
}
