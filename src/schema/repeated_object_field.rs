use crate::schema::{FieldId, SchemaObject};

/// A field ID used as the key of a list of child objects.
///
/// The schema format stores a repeated object field as N child objects under
/// one field ID, addressed by index `0..N`. The same numeric ID may also be
/// used for an unrelated scalar inside those children; the two never collide
/// because they live in different objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepeatedObjectField {
    field_id: FieldId,
}

impl RepeatedObjectField {
    pub const fn new(field_id: FieldId) -> Self {
        Self { field_id }
    }

    pub const fn field_id(&self) -> FieldId {
        self.field_id
    }

    pub fn count<O: SchemaObject>(&self, object: &O) -> u32 {
        object.object_count(self.field_id)
    }

    pub fn get<'o, O: SchemaObject>(&self, object: &'o O, index: u32) -> Option<&'o O> {
        object.index_object(self.field_id, index)
    }

    /// Iterates the children in stored (index-ascending) order, in one pass
    /// over the parent.
    pub fn iter<'o, O: SchemaObject>(&self, object: &'o O) -> impl Iterator<Item = &'o O> {
        object.iter_objects(self.field_id)
    }

    /// Appends a new, empty child and returns it for writing.
    pub fn push<'o, O: SchemaObject>(&self, object: &'o mut O) -> &'o mut O {
        object.add_object(self.field_id)
    }
}
