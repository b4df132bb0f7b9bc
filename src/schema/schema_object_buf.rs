use crate::schema::{FieldId, SchemaObject};

/// A single scalar or byte-blob entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaValue {
    Varint(u64),
    Bytes(Vec<u8>),
}

/// In-memory schema object.
///
/// Scalars and byte blobs are kept apart from child objects; within each group
/// entries stay in insertion order, which is what makes repeated fields
/// replay in the order they were written. Serialize with
/// [`SchemaCodec`](crate::schema::SchemaCodec).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaObjectBuf {
    values: Vec<(FieldId, SchemaValue)>,
    objects: Vec<(FieldId, SchemaObjectBuf)>,
}

impl SchemaObjectBuf {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if the object holds no fields at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.objects.is_empty()
    }

    /// Every `u32` stored under `field_id`, oldest first. Values wider than
    /// 32 bits are skipped.
    pub fn u32_values(&self, field_id: FieldId) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().filter_map(move |(id, value)| match value {
            SchemaValue::Varint(v) if *id == field_id => u32::try_from(*v).ok(),
            _ => None,
        })
    }

    pub(crate) fn values(&self) -> &[(FieldId, SchemaValue)] {
        &self.values
    }

    pub(crate) fn objects(&self) -> &[(FieldId, SchemaObjectBuf)] {
        &self.objects
    }

    pub(crate) fn push_varint(&mut self, field_id: FieldId, value: u64) {
        self.values.push((field_id, SchemaValue::Varint(value)));
    }

    pub(crate) fn push_bytes(&mut self, field_id: FieldId, bytes: Vec<u8>) {
        self.values.push((field_id, SchemaValue::Bytes(bytes)));
    }

    pub(crate) fn push_object(&mut self, field_id: FieldId, object: SchemaObjectBuf) {
        self.objects.push((field_id, object));
    }

    /// Removes and returns the first child object stored under `field_id`.
    pub(crate) fn take_object(&mut self, field_id: FieldId) -> Option<SchemaObjectBuf> {
        let position = self.objects.iter().position(|(id, _)| *id == field_id)?;
        Some(self.objects.remove(position).1)
    }
}

impl SchemaObject for SchemaObjectBuf {
    fn get_u32(&self, field_id: FieldId) -> Option<u32> {
        self.values
            .iter()
            .rev()
            .find_map(|(id, value)| match value {
                SchemaValue::Varint(v) if *id == field_id => Some(*v),
                _ => None,
            })
            .and_then(|v| u32::try_from(v).ok())
    }

    fn add_u32(&mut self, field_id: FieldId, value: u32) {
        self.push_varint(field_id, u64::from(value));
    }

    fn get_bytes(&self, field_id: FieldId) -> Option<&[u8]> {
        self.values.iter().rev().find_map(|(id, value)| match value {
            SchemaValue::Bytes(bytes) if *id == field_id => Some(bytes.as_slice()),
            _ => None,
        })
    }

    fn add_bytes(&mut self, field_id: FieldId, bytes: &[u8]) {
        self.push_bytes(field_id, bytes.to_vec());
    }

    fn add_object(&mut self, field_id: FieldId) -> &mut Self {
        let slot = self.objects.len();
        self.objects.push((field_id, SchemaObjectBuf::default()));
        &mut self.objects[slot].1
    }

    fn index_object(&self, field_id: FieldId, index: u32) -> Option<&Self> {
        self.objects
            .iter()
            .filter(|(id, _)| *id == field_id)
            .nth(index as usize)
            .map(|(_, object)| object)
    }

    fn object_count(&self, field_id: FieldId) -> u32 {
        let count = self.objects.iter().filter(|(id, _)| *id == field_id).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    fn iter_objects(&self, field_id: FieldId) -> impl Iterator<Item = &Self> {
        self.objects
            .iter()
            .filter(move |(id, _)| *id == field_id)
            .map(|(_, object)| object)
    }
}
