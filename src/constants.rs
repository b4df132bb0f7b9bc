use crate::schema::{CommandIndex, ComponentId, FieldId, RepeatedObjectField};

// RPC payload field IDs
pub const UNREAL_RPC_PAYLOAD_OFFSET_ID: FieldId = 1;
pub const UNREAL_RPC_PAYLOAD_RPC_INDEX_ID: FieldId = 2;
pub const UNREAL_RPC_PAYLOAD_RPC_PAYLOAD_ID: FieldId = 3;

/// Component ID of the list of RPCs attached to an entity when it is created.
pub const RPCS_ON_ENTITY_CREATION_ID: ComponentId = 9985;

/// The list of RPC payload objects inside `RPCS_ON_ENTITY_CREATION_ID`.
///
/// Reuses the offset field ID as the repeated object key.
pub const RPCS_ON_ENTITY_CREATION_RPCS_FIELD: RepeatedObjectField =
    RepeatedObjectField::new(UNREAL_RPC_PAYLOAD_OFFSET_ID);

/// Command index used when clearing `RPCS_ON_ENTITY_CREATION_ID` through the
/// command channel instead of a component update.
pub const RPCS_ON_ENTITY_CREATION_CLEAR_COMMAND_INDEX: CommandIndex = 1;

/// Default limit on how deeply schema objects may nest when decoded from bytes.
pub const DEFAULT_SCHEMA_MAX_DEPTH: usize = 32;

/// Default limit, in bytes, of a single length-delimited value (byte blob or
/// nested object) when decoding schema bytes.
pub const DEFAULT_SCHEMA_MAX_LENGTH: usize = 1024 * 1024 * 16;

// Schema tag layout: `field_id << SCHEMA_TAG_FIELD_SHIFT | wire_type`
pub const SCHEMA_TAG_FIELD_SHIFT: u32 = 3;
pub const SCHEMA_TAG_WIRE_TYPE_MASK: u64 = 0b111;

// Envelope field IDs used by `SchemaCodec` when serializing wire blocks.
pub const SCHEMA_ENVELOPE_COMPONENT_ID: FieldId = 1;
pub const SCHEMA_ENVELOPE_FIELDS: FieldId = 2;
pub const SCHEMA_ENVELOPE_CLEARED_FIELD: FieldId = 3;
pub const SCHEMA_ENVELOPE_COMMAND_INDEX: FieldId = 2;
pub const SCHEMA_ENVELOPE_COMMAND_OBJECT: FieldId = 3;
