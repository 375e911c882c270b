// External crates
use log::{debug, error, warn};

// Standard library imports
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::group::{Group, GroupMetadata, GroupStack};
use crate::result::ExampleResult;
use crate::xml_output;

/// Default report directory, fixed so CI collectors can scan it.
pub const DEFAULT_OUTPUT_DIR: &str = "junit/rspec";

/// The four lifecycle events a host test runner drives into a reporter,
/// depth-first and well nested: every started group is finished exactly
/// once, and results arrive only while some group is active.
///
/// Handlers never panic or return errors back into the test run; a reporter
/// degrades report completeness instead.
pub trait RunListener {
    /// Called once, before the first group starts.
    fn on_run_start(&mut self);

    /// Called when a group scope is entered.
    fn on_group_started(&mut self, meta: GroupMetadata);

    /// Called when an example inside the active group has finished.
    fn on_example_result(&mut self, result: ExampleResult);

    /// Called when the active group scope is exited.
    fn on_group_finished(&mut self);
}

/// JUnit XML reporter: accumulates results per group scope and writes one
/// report file per group that closed with directly attached results.
#[derive(Debug)]
pub struct JUnitListener {
    stack: GroupStack,
    output_dir: PathBuf,
}

impl JUnitListener {
    /// Creates a listener reporting into the fixed [`DEFAULT_OUTPUT_DIR`].
    pub fn new() -> Self {
        Self::with_output_dir(DEFAULT_OUTPUT_DIR)
    }

    /// Creates a listener reporting into `output_dir`. Concurrent runs each
    /// construct their own listener so report directories and group stacks
    /// stay partitioned per run.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        JUnitListener {
            stack: GroupStack::new(),
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Current nesting depth of open group scopes.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Removes any previous run's reports and recreates the directory.
    fn reset_output_dir(&self) -> io::Result<()> {
        if self.output_dir.exists() {
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)
    }
}

impl Default for JUnitListener {
    fn default() -> Self {
        Self::new()
    }
}

impl RunListener for JUnitListener {
    fn on_run_start(&mut self) {
        self.stack.clear();
        if let Err(e) = self.reset_output_dir() {
            warn!(
                "Failed to reset report directory '{}': {}",
                self.output_dir.display(),
                e
            );
        }
    }

    fn on_group_started(&mut self, meta: GroupMetadata) {
        self.stack.push(Group::new(meta));
    }

    fn on_example_result(&mut self, result: ExampleResult) {
        match self.stack.current_mut() {
            Some(group) => group.push(result),
            None => error!(
                "Dropping result '{}': no group is active",
                result.description
            ),
        }
    }

    fn on_group_finished(&mut self) {
        let Some(group) = self.stack.pop() else {
            error!("Group finished but no group is active");
            return;
        };

        if !group.has_results() {
            debug!("Skipping report for '{}': no results", group.full_description());
            return;
        }

        let path = group.file_path(&self.output_dir);
        if let Err(e) = xml_output::write_group_file(&group, &path) {
            error!("Failed to write report '{}': {}", path.display(), e);
        }
    }
}
