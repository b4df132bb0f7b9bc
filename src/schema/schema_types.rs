/// Numeric identifier of a field inside a schema object.
pub type FieldId = u32;

/// Numeric identifier of a component type.
pub type ComponentId = u32;

/// Index of a command declared on a component.
pub type CommandIndex = u32;

/// Backend-wide entity identifier.
pub type EntityId = i64;
