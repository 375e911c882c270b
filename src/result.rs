/// Outcome of one executed example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Passed,
    Failed,
    Pending,
}

/// Error captured from a failed example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureDetail {
    pub message: String,
    pub backtrace: Vec<String>,
}

impl FailureDetail {
    pub fn new(message: impl Into<String>, backtrace: Vec<String>) -> Self {
        FailureDetail {
            message: message.into(),
            backtrace,
        }
    }

    /// Returns the message followed by the newline-joined backtrace.
    pub fn body(&self) -> String {
        let mut body = self.message.clone();
        body.push('\n');
        body.push_str(&self.backtrace.join("\n"));
        body
    }
}

/// One recorded test-case result. Immutable once recorded; owned by the
/// group that was active when the example finished.
#[derive(Debug, Clone)]
pub struct ExampleResult {
    pub description: String,
    pub status: Status,
    /// Measured run time of the example, in seconds.
    pub run_time: f64,
    /// Present only for failed examples whose error was captured.
    pub failure: Option<FailureDetail>,
}

impl ExampleResult {
    pub fn passed(description: impl Into<String>, run_time: f64) -> Self {
        ExampleResult {
            description: description.into(),
            status: Status::Passed,
            run_time,
            failure: None,
        }
    }

    pub fn pending(description: impl Into<String>, run_time: f64) -> Self {
        ExampleResult {
            description: description.into(),
            status: Status::Pending,
            run_time,
            failure: None,
        }
    }

    pub fn failed(
        description: impl Into<String>,
        run_time: f64,
        failure: Option<FailureDetail>,
    ) -> Self {
        ExampleResult {
            description: description.into(),
            status: Status::Failed,
            run_time,
            failure,
        }
    }

    /// Returns the failure text placed inside the report, or an empty string
    /// when no error object was captured.
    pub fn failure_body(&self) -> String {
        self.failure
            .as_ref()
            .map(FailureDetail::body)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_body_joins_backtrace() {
        let failure = FailureDetail::new(
            "boom",
            vec![
                "./spec/models/widget_spec.rb:12".to_string(),
                "./spec/spec_helper.rb:4".to_string(),
            ],
        );
        assert_eq!(
            failure.body(),
            "boom\n./spec/models/widget_spec.rb:12\n./spec/spec_helper.rb:4"
        );
    }

    #[test]
    fn test_failure_body_without_backtrace() {
        let failure = FailureDetail::new("boom", vec![]);
        assert_eq!(failure.body(), "boom\n");
    }

    #[test]
    fn test_failed_result_without_captured_error() {
        let result = ExampleResult::failed("does Y", 0.02, None);
        assert_eq!(result.status, Status::Failed);
        assert_eq!(result.failure_body(), "");
    }

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(ExampleResult::passed("a", 0.1).status, Status::Passed);
        assert_eq!(ExampleResult::pending("b", 0.0).status, Status::Pending);
        assert_eq!(
            ExampleResult::failed("c", 0.2, None).status,
            Status::Failed
        );
    }
}
