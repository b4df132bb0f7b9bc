use crate::schema::FieldId;

/// Field access over a self-describing schema object.
///
/// This is the whole surface the RPC layer needs from a schema runtime. A
/// field ID may carry any number of values; scalar getters return the most
/// recently added one, while child objects are addressed by their insertion
/// index. All operations are total: reading an absent field yields `None`
/// (or a count of 0) instead of failing.
pub trait SchemaObject: Default {
    fn get_u32(&self, field_id: FieldId) -> Option<u32>;

    fn add_u32(&mut self, field_id: FieldId, value: u32);

    fn get_bytes(&self, field_id: FieldId) -> Option<&[u8]>;

    fn add_bytes(&mut self, field_id: FieldId, bytes: &[u8]);

    /// Appends an empty child object under `field_id` and returns it for writing.
    fn add_object(&mut self, field_id: FieldId) -> &mut Self;

    /// Returns the `index`-th child object under `field_id`, in insertion order.
    fn index_object(&self, field_id: FieldId, index: u32) -> Option<&Self>;

    /// Number of child objects stored under `field_id`.
    fn object_count(&self, field_id: FieldId) -> u32;

    /// Iterates the child objects under `field_id` in insertion order.
    ///
    /// The provided version goes through `index_object`; implementations that
    /// can walk their children directly should override it.
    fn iter_objects(&self, field_id: FieldId) -> impl Iterator<Item = &Self> {
        (0..self.object_count(field_id))
            .map_while(move |index| self.index_object(field_id, index))
    }
}
