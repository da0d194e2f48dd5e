use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::kinds::ActionKind;
use crate::payloads::{ActionPayload, ExecParams, ListDirParams, ReadFileParams, WriteFileParams};

/// Undecoded wire form of an action: `{ "type": ..., "payload": ... }`.
///
/// A missing `type` reads as `""` and is rejected as an unknown kind. A
/// missing `payload` is `None` and fails payload decoding; an explicit
/// `null` is kept as `Some(Value::Null)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub payload: Option<Value>,
}

impl ActionRequest {
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
        }
    }
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Error)]
pub enum ActionDecodeError {
    #[error("unknown action type: {0}")]
    UnknownKind(String),
    #[error("invalid payload for action {kind}: {source}")]
    InvalidPayload {
        kind: ActionKind,
        #[source]
        source: serde_json::Error,
    },
}

/// A kind tag paired with its payload.
///
/// [`Action::new`] and the request decoder always produce matching pairs.
/// [`Action::from_parts`] does not check, and the executor reports a mismatch
/// as a failed observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ActionRequest")]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub payload: ActionPayload,
}

impl Action {
    pub fn new(payload: impl Into<ActionPayload>) -> Self {
        let payload = payload.into();
        Self {
            kind: payload.kind(),
            payload,
        }
    }

    pub fn from_parts(kind: ActionKind, payload: ActionPayload) -> Self {
        Self { kind, payload }
    }

    pub fn decode(request: ActionRequest) -> Result<Self, ActionDecodeError> {
        let kind: ActionKind = request
            .kind
            .parse()
            .map_err(|_| ActionDecodeError::UnknownKind(request.kind.clone()))?;
        let payload = request
            .payload
            .ok_or_else(|| <serde_json::Error as serde::de::Error>::missing_field("payload"))
            .and_then(|value| ActionPayload::decode(kind, value))
            .map_err(|source| ActionDecodeError::InvalidPayload { kind, source })?;
        Ok(Self { kind, payload })
    }

    pub fn read_file(path: impl Into<String>) -> Self {
        Self::new(ReadFileParams { path: path.into() })
    }

    pub fn write_file(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(WriteFileParams {
            path: path.into(),
            content: content.into(),
        })
    }

    pub fn list_dir(path: impl Into<String>) -> Self {
        Self::new(ListDirParams { path: path.into() })
    }

    pub fn exec(command: impl Into<String>) -> Self {
        Self::new(ExecParams {
            command: command.into(),
        })
    }
}

impl TryFrom<ActionRequest> for Action {
    type Error = ActionDecodeError;

    fn try_from(request: ActionRequest) -> Result<Self, Self::Error> {
        Action::decode(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constructors_pair_kind_with_payload() {
        assert_eq!(Action::read_file("a").kind, ActionKind::ReadFile);
        assert_eq!(Action::write_file("a", "b").kind, ActionKind::WriteFile);
        assert_eq!(Action::list_dir("").kind, ActionKind::ListDir);
        assert_eq!(Action::exec("true").kind, ActionKind::Exec);
    }

    #[test]
    fn deserializes_from_wire_shape() {
        let action: Action = serde_json::from_value(json!({
            "type": "write_file",
            "payload": {"path": "/tmp/x", "content": "hi"}
        }))
        .unwrap();
        assert_eq!(action, Action::write_file("/tmp/x", "hi"));
    }

    #[test]
    fn serializes_to_wire_shape() {
        let value = serde_json::to_value(Action::exec("echo hi")).unwrap();
        assert_eq!(
            value,
            json!({"type": "exec", "payload": {"command": "echo hi"}})
        );
    }

    #[test]
    fn decode_reports_unknown_kind() {
        let request = ActionRequest::new("rm_rf", json!({}));
        match Action::decode(request) {
            Err(ActionDecodeError::UnknownKind(kind)) => assert_eq!(kind, "rm_rf"),
            other => panic!("expected unknown kind, got {other:?}"),
        }
    }

    #[test]
    fn decode_reports_bad_payload_with_kind() {
        let request = ActionRequest::new("exec", json!({"command": ["ls"]}));
        let err = Action::decode(request).unwrap_err();
        assert!(matches!(
            err,
            ActionDecodeError::InvalidPayload {
                kind: ActionKind::Exec,
                ..
            }
        ));
        assert!(err.to_string().starts_with("invalid payload for action exec:"));
    }

    #[test]
    fn missing_payload_is_rejected() {
        let request: ActionRequest = serde_json::from_value(json!({"type": "list_dir"})).unwrap();
        assert_eq!(request.payload, None);
        let err = Action::decode(request).unwrap_err();
        assert!(matches!(
            err,
            ActionDecodeError::InvalidPayload {
                kind: ActionKind::ListDir,
                ..
            }
        ));
        assert!(err.to_string().contains("missing field `payload`"), "{err}");
    }

    #[test]
    fn null_payload_decodes_to_empty_fields() {
        let request: ActionRequest =
            serde_json::from_value(json!({"type": "list_dir", "payload": null})).unwrap();
        assert_eq!(request.payload, Some(Value::Null));
        let action = Action::decode(request).unwrap();
        assert_eq!(action, Action::list_dir(""));
    }

    #[test]
    fn missing_type_is_an_unknown_kind() {
        let request: ActionRequest = serde_json::from_value(json!({"payload": {}})).unwrap();
        match Action::decode(request) {
            Err(ActionDecodeError::UnknownKind(kind)) => assert_eq!(kind, ""),
            other => panic!("expected unknown kind, got {other:?}"),
        }
    }
}
