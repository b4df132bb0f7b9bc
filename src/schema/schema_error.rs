use crate::schema::FieldId;
use std::fmt;

/// Errors produced when turning schema bytes back into objects or wire blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaDecodeError {
    /// The input ended in the middle of an entry.
    UnexpectedEof,

    /// A varint ran past ten bytes or does not fit the target integer.
    VarintOverflow,

    /// An entry tag carried a wire type this format does not define.
    InvalidWireType(u8),

    /// An entry tag carried field ID 0 or one that does not fit a `FieldId`.
    InvalidFieldId,

    /// A length-delimited value is longer than `SchemaLimits::max_length`.
    LengthLimitExceeded { len: usize, max: usize },

    /// Child objects nest deeper than `SchemaLimits::max_depth`.
    DepthLimitExceeded { max: usize },

    /// A wire block envelope is missing one of its required fields.
    MissingEnvelopeField(FieldId),
}

impl fmt::Display for SchemaDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaDecodeError::UnexpectedEof => write!(f, "unexpected end of schema bytes"),
            SchemaDecodeError::VarintOverflow => write!(f, "varint overflow"),
            SchemaDecodeError::InvalidWireType(wire_type) => {
                write!(f, "invalid wire type: {}", wire_type)
            }
            SchemaDecodeError::InvalidFieldId => write!(f, "invalid field ID"),
            SchemaDecodeError::LengthLimitExceeded { len, max } => {
                write!(f, "length {} exceeds limit of {} bytes", len, max)
            }
            SchemaDecodeError::DepthLimitExceeded { max } => {
                write!(f, "object nesting exceeds depth limit of {}", max)
            }
            SchemaDecodeError::MissingEnvelopeField(field_id) => {
                write!(f, "wire block is missing envelope field {}", field_id)
            }
        }
    }
}

impl std::error::Error for SchemaDecodeError {}

/// Errors produced when an object cannot be encoded within [`SchemaLimits`].
///
/// [`SchemaLimits`]: crate::schema::SchemaLimits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaEncodeError {
    /// A byte blob or encoded child object is longer than `SchemaLimits::max_length`.
    LengthLimitExceeded { len: usize, max: usize },

    /// Child objects nest deeper than `SchemaLimits::max_depth`.
    DepthLimitExceeded { max: usize },
}

impl fmt::Display for SchemaEncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaEncodeError::LengthLimitExceeded { len, max } => {
                write!(f, "length {} exceeds limit of {} bytes", len, max)
            }
            SchemaEncodeError::DepthLimitExceeded { max } => {
                write!(f, "object nesting exceeds depth limit of {}", max)
            }
        }
    }
}

impl std::error::Error for SchemaEncodeError {}
