use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Result envelope for one executed action.
///
/// Exactly one of `error` and `data` is set, selected by `success`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ObservationWire")]
pub struct Observation {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl Observation {
    /// Successful observation. Falls back to a failure if `data` cannot be
    /// represented as JSON.
    pub fn ok(data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self {
                success: true,
                error: None,
                data: Some(data),
            },
            Err(err) => Self::failure(format!("failed to encode observation data: {err}")),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn into_result(self) -> Result<Value, String> {
        match (self.success, self.data, self.error) {
            (true, Some(data), _) => Ok(data),
            (true, None, _) => Ok(Value::Null),
            (false, _, error) => Err(error.unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ObservationShapeError {
    #[error("successful observation must carry data and no error")]
    Success,
    #[error("failed observation must carry an error and no data")]
    Failure,
}

#[derive(Deserialize)]
struct ObservationWire {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

impl TryFrom<ObservationWire> for Observation {
    type Error = ObservationShapeError;

    fn try_from(wire: ObservationWire) -> Result<Self, Self::Error> {
        match (wire.success, wire.error, wire.data) {
            (true, None, data) => Ok(Self {
                success: true,
                error: None,
                data: Some(data.unwrap_or(Value::Null)),
            }),
            (true, Some(_), _) => Err(ObservationShapeError::Success),
            (false, Some(error), None) => Ok(Self::failure(error)),
            (false, _, _) => Err(ObservationShapeError::Failure),
        }
    }
}
