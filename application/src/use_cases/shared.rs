//! Shared utilities for use cases.

use research_domain::ToolArguments;
use serde_json::Value;

/// Unwrap a `json!({...})` literal into tool arguments.
///
/// Non-object values produce an empty map; callers only ever pass object
/// literals.
pub(crate) fn arguments(value: Value) -> ToolArguments {
    match value {
        Value::Object(map) => map,
        _ => ToolArguments::new(),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted fakes for the application ports.

    use crate::ports::cooldown::Cooldown;
    use crate::ports::report_store::{ReportStore, ReportStoreError};
    use crate::ports::tool_gateway::{ToolCallError, ToolGateway};
    use async_trait::async_trait;
    use research_domain::{ToolArguments, ToolResult};
    use std::collections::VecDeque;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Gateway that replays queued responses in order and records every call.
    pub(crate) struct MockGateway {
        responses: Mutex<VecDeque<Result<ToolResult, ToolCallError>>>,
        calls: Mutex<Vec<(String, ToolArguments)>>,
    }

    impl MockGateway {
        pub(crate) fn new(responses: Vec<Result<ToolResult, ToolCallError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> Vec<(String, ToolArguments)> {
            self.calls.lock().unwrap().clone()
        }

        pub(crate) fn tool_names(&self) -> Vec<String> {
            self.calls().into_iter().map(|(name, _)| name).collect()
        }
    }

    #[async_trait]
    impl ToolGateway for MockGateway {
        async fn invoke(
            &self,
            tool_name: &str,
            arguments: ToolArguments,
        ) -> Result<ToolResult, ToolCallError> {
            self.calls
                .lock()
                .unwrap()
                .push((tool_name.to_string(), arguments));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ToolCallError::protocol("No more responses")))
        }
    }

    /// Cooldown that returns immediately and counts invocations.
    #[derive(Default)]
    pub(crate) struct RecordingCooldown {
        waits: Mutex<Vec<Duration>>,
    }

    impl RecordingCooldown {
        pub(crate) fn waits(&self) -> Vec<Duration> {
            self.waits.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Cooldown for RecordingCooldown {
        async fn wait(&self, duration: Duration) {
            self.waits.lock().unwrap().push(duration);
        }
    }

    /// Report store that keeps artifacts in memory.
    #[derive(Default)]
    pub(crate) struct MemoryReportStore {
        pub(crate) reports: Mutex<Vec<(String, String, String)>>,
        pub(crate) data: Mutex<Vec<(String, String, serde_json::Value)>>,
        pub(crate) fail: bool,
    }

    impl MemoryReportStore {
        pub(crate) fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn check(&self) -> Result<(), ReportStoreError> {
            if self.fail {
                return Err(ReportStoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only",
                )));
            }
            Ok(())
        }
    }

    impl ReportStore for MemoryReportStore {
        fn save_report(
            &self,
            subject: &str,
            context: &str,
            content: &str,
        ) -> Result<PathBuf, ReportStoreError> {
            self.check()?;
            self.reports.lock().unwrap().push((
                subject.to_string(),
                context.to_string(),
                content.to_string(),
            ));
            Ok(PathBuf::from(format!("{}.md", subject)))
        }

        fn save_data(
            &self,
            subject: &str,
            context: &str,
            data: &serde_json::Value,
        ) -> Result<PathBuf, ReportStoreError> {
            self.check()?;
            self.data.lock().unwrap().push((
                subject.to_string(),
                context.to_string(),
                data.clone(),
            ));
            Ok(PathBuf::from(format!("{}_data.json", subject)))
        }
    }
}
