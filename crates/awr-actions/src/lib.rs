//! Action request/observation types, payload validation and the action spec registry.

mod action;
mod kinds;
mod observation;
pub mod outputs;
pub mod payloads;
pub mod spec;

pub use action::{Action, ActionDecodeError, ActionRequest};
pub use kinds::{ActionKind, UnknownActionKind};
pub use observation::{Observation, ObservationShapeError};
pub use payloads::{
    ActionPayload, ExecParams, ListDirParams, ReadFileParams, Validate, ValidationError,
    WriteFileParams,
};
pub use spec::{ActionSpec, FieldSpec, FieldType, action_spec, generate_spec};
