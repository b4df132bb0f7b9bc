mod component;
mod repeated_object_field;
mod schema_codec;
mod schema_limits;
mod schema_error;
mod schema_object;
mod schema_object_buf;
mod schema_types;
mod schema_wire_type;
mod wire_block;

pub use component::Component;
pub use repeated_object_field::RepeatedObjectField;
pub use schema_codec::SchemaCodec;
pub use schema_limits::SchemaLimits;
pub use schema_error::{SchemaDecodeError, SchemaEncodeError};
pub use schema_object::SchemaObject;
pub use schema_object_buf::SchemaObjectBuf;
pub use schema_types::{CommandIndex, ComponentId, EntityId, FieldId};
pub use schema_wire_type::SchemaWireType;
pub use wire_block::{CommandRequest, ComponentData, ComponentUpdate};
