use crate::schema::{CommandIndex, ComponentId, FieldId, SchemaObject};

/// Full data of one component, as sent in an entity-creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentData<O> {
    component_id: ComponentId,
    fields: O,
}

impl<O> ComponentData<O> {
    pub fn from_fields(component_id: ComponentId, fields: O) -> Self {
        Self {
            component_id,
            fields,
        }
    }

    pub fn component_id(&self) -> ComponentId {
        self.component_id
    }

    pub fn fields(&self) -> &O {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut O {
        &mut self.fields
    }

    pub fn into_fields(self) -> O {
        self.fields
    }
}

impl<O: SchemaObject> ComponentData<O> {
    /// Allocates a block for `component_id` with an empty fields object.
    pub fn new(component_id: ComponentId) -> Self {
        Self::from_fields(component_id, O::default())
    }
}

/// A partial change to a component.
///
/// Besides the changed fields, an update can carry "cleared" markers that tell
/// readers to treat a field (including a list or repeated object field) as
/// empty without resending any content for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentUpdate<O> {
    component_id: ComponentId,
    fields: O,
    cleared_fields: Vec<FieldId>,
}

impl<O> ComponentUpdate<O> {
    pub fn from_parts(component_id: ComponentId, fields: O, cleared_fields: Vec<FieldId>) -> Self {
        Self {
            component_id,
            fields,
            cleared_fields,
        }
    }

    pub fn component_id(&self) -> ComponentId {
        self.component_id
    }

    pub fn fields(&self) -> &O {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut O {
        &mut self.fields
    }

    /// Marks `field_id` as cleared. Markers are kept in the order they were added.
    pub fn add_cleared_field(&mut self, field_id: FieldId) {
        self.cleared_fields.push(field_id);
    }

    pub fn cleared_fields(&self) -> &[FieldId] {
        &self.cleared_fields
    }

    pub fn is_field_cleared(&self, field_id: FieldId) -> bool {
        self.cleared_fields.contains(&field_id)
    }
}

impl<O: SchemaObject> ComponentUpdate<O> {
    pub fn new(component_id: ComponentId) -> Self {
        Self::from_parts(component_id, O::default(), Vec::new())
    }
}

/// A request invoking one of a component's commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest<O> {
    component_id: ComponentId,
    command_index: CommandIndex,
    request: O,
}

impl<O> CommandRequest<O> {
    pub fn from_parts(component_id: ComponentId, command_index: CommandIndex, request: O) -> Self {
        Self {
            component_id,
            command_index,
            request,
        }
    }

    pub fn component_id(&self) -> ComponentId {
        self.component_id
    }

    pub fn command_index(&self) -> CommandIndex {
        self.command_index
    }

    pub fn request_object(&self) -> &O {
        &self.request
    }

    pub fn request_object_mut(&mut self) -> &mut O {
        &mut self.request
    }
}

impl<O: SchemaObject> CommandRequest<O> {
    pub fn new(component_id: ComponentId, command_index: CommandIndex) -> Self {
        Self::from_parts(component_id, command_index, O::default())
    }
}
