// Standard library imports
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::result::{ExampleResult, Status};

/// Prefix shared by every report file name.
pub const REPORT_FILE_PREFIX: &str = "SPEC";

/// Subject token used when a group describes nothing the host could name.
pub const NULL_SUBJECT: &str = "NULL";

/// Identity of a test-group scope, as supplied by the host runtime.
///
/// Hosts with incomplete metadata leave fields at their defaults (empty
/// strings, line 0, no subject); construction never fails.
#[derive(Debug, Clone, Default)]
pub struct GroupMetadata {
    /// Source file the group was declared in.
    pub file_path: String,
    /// Line the group was declared on.
    pub line_number: u32,
    /// The group's own description text.
    pub description: String,
    /// Description including all enclosing groups.
    pub full_description: String,
    /// Name of the described type, or the described literal text, if any.
    pub described_subject: Option<String>,
}

impl GroupMetadata {
    pub fn new(
        file_path: impl Into<String>,
        line_number: u32,
        description: impl Into<String>,
        full_description: impl Into<String>,
    ) -> Self {
        GroupMetadata {
            file_path: file_path.into(),
            line_number,
            description: description.into(),
            full_description: full_description.into(),
            described_subject: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.described_subject = Some(subject.into());
        self
    }
}

/// One test-group scope and the results recorded while it was active.
#[derive(Debug)]
pub struct Group {
    meta: GroupMetadata,
    results: Vec<ExampleResult>,
    start: Instant,
}

impl Group {
    pub fn new(meta: GroupMetadata) -> Self {
        Group {
            meta,
            results: Vec::new(),
            start: Instant::now(),
        }
    }

    /// Appends one completed result. Only the active (top-of-stack) group
    /// receives results.
    pub fn push(&mut self, result: ExampleResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[ExampleResult] {
        &self.results
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    fn count_status(&self, status: Status) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    pub fn successes_count(&self) -> usize {
        self.count_status(Status::Passed)
    }

    pub fn skipped_count(&self) -> usize {
        self.count_status(Status::Pending)
    }

    pub fn failures_count(&self) -> usize {
        self.count_status(Status::Failed)
    }

    pub fn tests_count(&self) -> usize {
        self.successes_count() + self.skipped_count() + self.failures_count()
    }

    /// Elapsed seconds since the group scope was entered.
    pub fn duration(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    pub fn full_description(&self) -> &str {
        &self.meta.full_description
    }

    /// Source path with any leading `spec/` segment stripped and the
    /// remaining `.` and `/` characters flattened to `-`.
    fn spec_path(&self) -> String {
        let path = self.meta.file_path.as_str();
        let sub_path = match path.find("spec/") {
            Some(index) => &path[index + "spec/".len()..],
            None => path,
        };
        sub_path.replace(['.', '/'], "-")
    }

    /// Described type or literal, `NULL` when absent. `:` is flattened to
    /// `-` so namespaced type names stay file-system safe.
    fn subject(&self) -> String {
        match &self.meta.described_subject {
            Some(subject) => subject.replace(':', "-"),
            None => NULL_SUBJECT.to_string(),
        }
    }

    /// Deterministic report file name; identical metadata always derives the
    /// identical name, so reruns overwrite earlier reports.
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}-{}-{}.xml",
            REPORT_FILE_PREFIX,
            self.subject(),
            self.spec_path(),
            self.meta.line_number
        )
    }

    pub fn file_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }
}

/// Stack of open group scopes; the last element is the single active group.
///
/// Each run owns one stack instance, so concurrent runs never share state.
#[derive(Debug, Default)]
pub struct GroupStack {
    groups: Vec<Group>,
}

impl GroupStack {
    pub fn new() -> Self {
        GroupStack { groups: Vec::new() }
    }

    pub fn push(&mut self, group: Group) {
        self.groups.push(group);
    }

    pub fn pop(&mut self) -> Option<Group> {
        self.groups.pop()
    }

    pub fn current(&self) -> Option<&Group> {
        self.groups.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut Group> {
        self.groups.last_mut()
    }

    /// Current nesting depth of open group scopes.
    pub fn depth(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }
}
