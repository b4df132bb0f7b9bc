use crate::schema::FieldId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcPayloadError {
    /// The schema object has no value for this payload field.
    MissingField(FieldId),
}

impl fmt::Display for RpcPayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcPayloadError::MissingField(field_id) => {
                write!(f, "RPC payload is missing field {}", field_id)
            }
        }
    }
}

impl std::error::Error for RpcPayloadError {}
