use crate::{rpc::RpcPayloadError, schema::ComponentId};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcsOnEntityCreationError {
    /// The component data block belongs to a different component.
    ComponentIdMismatch {
        expected: ComponentId,
        actual: ComponentId,
    },

    /// The child object at `index` is not a complete RPC payload.
    Payload { index: u32, error: RpcPayloadError },
}

impl fmt::Display for RpcsOnEntityCreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcsOnEntityCreationError::ComponentIdMismatch { expected, actual } => write!(
                f,
                "expected component {} but got component {}",
                expected, actual
            ),
            RpcsOnEntityCreationError::Payload { index, error } => {
                write!(f, "RPC {} could not be decoded: {}", index, error)
            }
        }
    }
}

impl std::error::Error for RpcsOnEntityCreationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RpcsOnEntityCreationError::Payload { error, .. } => Some(error),
            _ => None,
        }
    }
}
