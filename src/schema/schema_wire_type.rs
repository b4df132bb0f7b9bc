/// Encoding of a single field entry in schema bytes.
///
/// Stored in the low three bits of each entry's tag.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaWireType {
    Varint = 0,
    Bytes = 2,
    Object = 3,
}

impl TryFrom<u8> for SchemaWireType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SchemaWireType::Varint),
            2 => Ok(SchemaWireType::Bytes),
            3 => Ok(SchemaWireType::Object),
            _ => Err(()),
        }
    }
}
