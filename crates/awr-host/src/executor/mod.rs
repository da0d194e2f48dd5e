//! Routes a validated action to its host handler and folds the outcome into
//! an [`Observation`].

use async_trait::async_trait;
use awr_actions::{Action, ActionKind, ActionPayload, ActionRequest, Observation, Validate};

mod fs;
mod process;

pub use process::split_command;

/// Seam between the transports and the host handlers.
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    async fn execute(&self, action: &Action) -> Observation;
}

/// Stateless executor; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Executor;

impl Executor {
    pub fn new() -> Self {
        Self
    }

    /// Validate, dispatch and run one action. Never fails past this boundary.
    pub async fn execute(&self, action: &Action) -> Observation {
        let kind = action.kind;
        if let Err(err) = action.payload.validate() {
            tracing::debug!(%kind, error = %err, "action rejected");
            return Observation::failure(err.to_string());
        }

        tracing::debug!(%kind, "executing action");
        let outcome = match (kind, &action.payload) {
            (ActionKind::ReadFile, ActionPayload::ReadFile(params)) => {
                fs::read_file(params).await.map(Observation::ok)
            }
            (ActionKind::WriteFile, ActionPayload::WriteFile(params)) => {
                fs::write_file(params).await.map(Observation::ok)
            }
            (ActionKind::ListDir, ActionPayload::ListDir(params)) => {
                fs::list_dir(params).await.map(Observation::ok)
            }
            (ActionKind::Exec, ActionPayload::Exec(params)) => {
                process::run_command(params).await.map(Observation::ok)
            }
            (kind, payload) => {
                tracing::error!(
                    %kind,
                    payload_kind = %payload.kind(),
                    "action kind does not match payload"
                );
                return Observation::failure(format!("invalid payload type for action: {kind}"));
            }
        };

        outcome.unwrap_or_else(|err| {
            tracing::warn!(%kind, error = %err, "action failed");
            Observation::failure(err.to_string())
        })
    }

    /// Decode a wire request and execute it. Unknown kinds and malformed
    /// payloads come back as failed observations.
    pub async fn execute_request(&self, request: ActionRequest) -> Observation {
        match Action::decode(request) {
            Ok(action) => self.execute(&action).await,
            Err(err) => {
                tracing::debug!(error = %err, "action request rejected");
                Observation::failure(err.to_string())
            }
        }
    }
}

#[async_trait]
impl ActionExecutor for Executor {
    async fn execute(&self, action: &Action) -> Observation {
        Executor::execute(self, action).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awr_actions::{ExecParams, ReadFileParams};
    use serde_json::json;

    #[tokio::test]
    async fn validation_runs_before_dispatch() {
        let observation = Executor::new().execute(&Action::read_file("")).await;
        assert!(!observation.is_success());
        assert_eq!(
            observation.error(),
            Some("path is required for read_file action")
        );
    }

    #[tokio::test]
    async fn mismatched_kind_and_payload_is_reported() {
        let action = Action::from_parts(
            ActionKind::Exec,
            ActionPayload::ReadFile(ReadFileParams {
                path: "/etc/hostname".into(),
            }),
        );
        let observation = Executor::new().execute(&action).await;
        assert_eq!(
            observation.error(),
            Some("invalid payload type for action: exec")
        );
    }

    #[tokio::test]
    async fn mismatch_check_follows_validation() {
        let action = Action::from_parts(
            ActionKind::ListDir,
            ActionPayload::Exec(ExecParams::default()),
        );
        let observation = Executor::new().execute(&action).await;
        assert_eq!(observation.error(), Some("command is required for exec action"));
    }

    #[tokio::test]
    async fn unknown_request_kind_is_a_failed_observation() {
        let request = ActionRequest::new("format_disk", json!({"path": "/"}));
        let observation = Executor::new().execute_request(request).await;
        assert!(!observation.is_success());
        assert_eq!(observation.error(), Some("unknown action type: format_disk"));
    }

    #[tokio::test]
    async fn malformed_request_payload_is_a_failed_observation() {
        let request = ActionRequest::new("read_file", json!({"path": false}));
        let observation = Executor::new().execute_request(request).await;
        let error = observation.error().unwrap_or_default();
        assert!(error.starts_with("invalid payload for action read_file"), "{error}");
    }

    #[tokio::test]
    async fn trait_object_dispatches_to_executor() {
        let executor: Box<dyn ActionExecutor> = Box::new(Executor::new());
        let observation = executor.execute(&Action::exec("")).await;
        assert_eq!(observation.error(), Some("command is required for exec action"));
    }
}
