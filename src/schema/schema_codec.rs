use crate::{
    constants::{
        SCHEMA_ENVELOPE_CLEARED_FIELD, SCHEMA_ENVELOPE_COMMAND_INDEX,
        SCHEMA_ENVELOPE_COMMAND_OBJECT, SCHEMA_ENVELOPE_COMPONENT_ID, SCHEMA_ENVELOPE_FIELDS,
        SCHEMA_TAG_FIELD_SHIFT, SCHEMA_TAG_WIRE_TYPE_MASK,
    },
    schema::{
        CommandRequest, ComponentData, ComponentUpdate, FieldId, SchemaDecodeError,
        SchemaEncodeError, SchemaLimits, SchemaObject, SchemaObjectBuf, SchemaWireType,
        schema_object_buf::SchemaValue,
    },
};

const MAX_VARINT_LEN: usize = 10;

/// Converts schema objects and wire blocks to and from bytes.
///
/// An encoded object is a flat sequence of entries. Each entry starts with a
/// varint tag of `field_id << 3 | wire_type`, followed by:
///
/// - `Varint`: the value as a LEB128 varint.
/// - `Bytes`: a varint length, then that many raw bytes.
/// - `Object`: a varint length, then the child object encoded the same way.
///
/// Scalar and byte entries are written before child objects. Wire blocks are
/// wrapped in a small envelope object that carries the component ID (and
/// command index or cleared fields) next to the fields object. Encoding and
/// decoding enforce the same [`SchemaLimits`].
pub struct SchemaCodec;

impl SchemaCodec {
    /// Encodes a schema object into bytes.
    ///
    /// The same `limits` a receiver decodes with are enforced here, so anything
    /// this returns `Ok` for decodes again under those limits.
    ///
    /// # Arguments
    ///
    /// * `object` - The object to encode.
    /// * `limits` - Maximum child nesting and maximum length of any byte blob
    ///   or encoded child object.
    ///
    /// # Returns
    ///
    /// Returns the encoded entries, or a `SchemaEncodeError` naming the limit
    /// the object exceeds.
    pub fn encode_object(
        object: &SchemaObjectBuf,
        limits: &SchemaLimits,
    ) -> Result<Vec<u8>, SchemaEncodeError> {
        let mut buf = Vec::new();
        write_object_entries(&mut buf, object, 0, limits)?;
        Ok(buf)
    }

    /// Decodes bytes produced by [`SchemaCodec::encode_object`].
    ///
    /// # Arguments
    ///
    /// * `buf` - The encoded object. The whole slice is consumed.
    /// * `limits` - Bounds applied to untrusted input.
    ///
    /// # Returns
    ///
    /// Returns a `Result` where:
    /// - `Ok(SchemaObjectBuf)` contains every entry, in stored order.
    /// - `Err(SchemaDecodeError)` if the bytes are truncated, malformed, or
    ///   exceed `limits`.
    pub fn decode_object(
        buf: &[u8],
        limits: &SchemaLimits,
    ) -> Result<SchemaObjectBuf, SchemaDecodeError> {
        decode_object_at_depth(buf, 0, limits)
    }

    /// Encodes a component data block as an envelope carrying the component ID
    /// and the fields object. The fields object sits at depth 1.
    pub fn encode_component_data(
        data: &ComponentData<SchemaObjectBuf>,
        limits: &SchemaLimits,
    ) -> Result<Vec<u8>, SchemaEncodeError> {
        let mut buf = Vec::new();
        write_varint_entry(
            &mut buf,
            SCHEMA_ENVELOPE_COMPONENT_ID,
            u64::from(data.component_id()),
        );
        write_object_entry(&mut buf, SCHEMA_ENVELOPE_FIELDS, data.fields(), 1, limits)?;
        Ok(buf)
    }

    pub fn decode_component_data(
        buf: &[u8],
        limits: &SchemaLimits,
    ) -> Result<ComponentData<SchemaObjectBuf>, SchemaDecodeError> {
        let mut envelope = Self::decode_object(buf, limits)?;

        let component_id = required_u32(&envelope, SCHEMA_ENVELOPE_COMPONENT_ID)?;
        let fields = required_object(&mut envelope, SCHEMA_ENVELOPE_FIELDS)?;

        Ok(ComponentData::from_fields(component_id, fields))
    }

    /// Encodes a component update. Cleared field IDs are written in order,
    /// ahead of the fields object.
    pub fn encode_component_update(
        update: &ComponentUpdate<SchemaObjectBuf>,
        limits: &SchemaLimits,
    ) -> Result<Vec<u8>, SchemaEncodeError> {
        let mut buf = Vec::new();
        write_varint_entry(
            &mut buf,
            SCHEMA_ENVELOPE_COMPONENT_ID,
            u64::from(update.component_id()),
        );
        for field_id in update.cleared_fields() {
            write_varint_entry(&mut buf, SCHEMA_ENVELOPE_CLEARED_FIELD, u64::from(*field_id));
        }
        write_object_entry(&mut buf, SCHEMA_ENVELOPE_FIELDS, update.fields(), 1, limits)?;
        Ok(buf)
    }

    /// Decodes a component update.
    ///
    /// A cleared field entry must hold a valid `FieldId`; zero or a value
    /// wider than 32 bits fails with `SchemaDecodeError::InvalidFieldId`.
    pub fn decode_component_update(
        buf: &[u8],
        limits: &SchemaLimits,
    ) -> Result<ComponentUpdate<SchemaObjectBuf>, SchemaDecodeError> {
        let mut envelope = Self::decode_object(buf, limits)?;

        let component_id = required_u32(&envelope, SCHEMA_ENVELOPE_COMPONENT_ID)?;
        let cleared_fields = cleared_field_ids(&envelope)?;
        let fields = required_object(&mut envelope, SCHEMA_ENVELOPE_FIELDS)?;

        Ok(ComponentUpdate::from_parts(
            component_id,
            fields,
            cleared_fields,
        ))
    }

    /// Encodes a command request as component ID, command index and the
    /// request object.
    pub fn encode_command_request(
        request: &CommandRequest<SchemaObjectBuf>,
        limits: &SchemaLimits,
    ) -> Result<Vec<u8>, SchemaEncodeError> {
        let mut buf = Vec::new();
        write_varint_entry(
            &mut buf,
            SCHEMA_ENVELOPE_COMPONENT_ID,
            u64::from(request.component_id()),
        );
        write_varint_entry(
            &mut buf,
            SCHEMA_ENVELOPE_COMMAND_INDEX,
            u64::from(request.command_index()),
        );
        write_object_entry(
            &mut buf,
            SCHEMA_ENVELOPE_COMMAND_OBJECT,
            request.request_object(),
            1,
            limits,
        )?;
        Ok(buf)
    }

    pub fn decode_command_request(
        buf: &[u8],
        limits: &SchemaLimits,
    ) -> Result<CommandRequest<SchemaObjectBuf>, SchemaDecodeError> {
        let mut envelope = Self::decode_object(buf, limits)?;

        let component_id = required_u32(&envelope, SCHEMA_ENVELOPE_COMPONENT_ID)?;
        let command_index = required_u32(&envelope, SCHEMA_ENVELOPE_COMMAND_INDEX)?;
        let request = required_object(&mut envelope, SCHEMA_ENVELOPE_COMMAND_OBJECT)?;

        Ok(CommandRequest::from_parts(
            component_id,
            command_index,
            request,
        ))
    }
}

fn required_u32(envelope: &SchemaObjectBuf, field_id: FieldId) -> Result<u32, SchemaDecodeError> {
    envelope
        .get_u32(field_id)
        .ok_or(SchemaDecodeError::MissingEnvelopeField(field_id))
}

fn required_object(
    envelope: &mut SchemaObjectBuf,
    field_id: FieldId,
) -> Result<SchemaObjectBuf, SchemaDecodeError> {
    envelope
        .take_object(field_id)
        .ok_or(SchemaDecodeError::MissingEnvelopeField(field_id))
}

fn cleared_field_ids(envelope: &SchemaObjectBuf) -> Result<Vec<FieldId>, SchemaDecodeError> {
    let mut cleared_fields = Vec::new();

    for (id, value) in envelope.values() {
        match value {
            SchemaValue::Varint(raw) if *id == SCHEMA_ENVELOPE_CLEARED_FIELD => {
                match FieldId::try_from(*raw) {
                    Ok(field_id) if field_id != 0 => cleared_fields.push(field_id),
                    _ => return Err(SchemaDecodeError::InvalidFieldId),
                }
            }
            _ => {}
        }
    }

    Ok(cleared_fields)
}

fn write_object_entries(
    buf: &mut Vec<u8>,
    object: &SchemaObjectBuf,
    depth: usize,
    limits: &SchemaLimits,
) -> Result<(), SchemaEncodeError> {
    if depth > limits.max_depth {
        return Err(SchemaEncodeError::DepthLimitExceeded {
            max: limits.max_depth,
        });
    }

    for (field_id, value) in object.values() {
        match value {
            SchemaValue::Varint(v) => write_varint_entry(buf, *field_id, *v),
            SchemaValue::Bytes(bytes) => {
                check_length(bytes.len(), limits)?;
                write_tag(buf, *field_id, SchemaWireType::Bytes);
                write_varint(buf, bytes.len() as u64);
                buf.extend_from_slice(bytes);
            }
        }
    }

    for (field_id, child) in object.objects() {
        write_object_entry(buf, *field_id, child, depth + 1, limits)?;
    }

    Ok(())
}

fn write_varint_entry(buf: &mut Vec<u8>, field_id: FieldId, value: u64) {
    write_tag(buf, field_id, SchemaWireType::Varint);
    write_varint(buf, value);
}

/// Writes `object` as a child entry. `depth` is the depth of the child itself.
fn write_object_entry(
    buf: &mut Vec<u8>,
    field_id: FieldId,
    object: &SchemaObjectBuf,
    depth: usize,
    limits: &SchemaLimits,
) -> Result<(), SchemaEncodeError> {
    let mut child_buf = Vec::new();
    write_object_entries(&mut child_buf, object, depth, limits)?;
    check_length(child_buf.len(), limits)?;

    write_tag(buf, field_id, SchemaWireType::Object);
    write_varint(buf, child_buf.len() as u64);
    buf.extend_from_slice(&child_buf);

    Ok(())
}

fn check_length(len: usize, limits: &SchemaLimits) -> Result<(), SchemaEncodeError> {
    if len > limits.max_length {
        return Err(SchemaEncodeError::LengthLimitExceeded {
            len,
            max: limits.max_length,
        });
    }
    Ok(())
}

fn write_tag(buf: &mut Vec<u8>, field_id: FieldId, wire_type: SchemaWireType) {
    let tag = (u64::from(field_id) << SCHEMA_TAG_FIELD_SHIFT) | wire_type as u64;
    write_varint(buf, tag);
}

fn write_varint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

fn decode_object_at_depth(
    buf: &[u8],
    depth: usize,
    limits: &SchemaLimits,
) -> Result<SchemaObjectBuf, SchemaDecodeError> {
    if depth > limits.max_depth {
        return Err(SchemaDecodeError::DepthLimitExceeded {
            max: limits.max_depth,
        });
    }

    let mut reader = SchemaReader::new(buf);
    let mut object = SchemaObjectBuf::new();

    while !reader.is_done() {
        let tag = reader.read_varint()?;

        let wire_type = SchemaWireType::try_from((tag & SCHEMA_TAG_WIRE_TYPE_MASK) as u8).map_err(
            |_| SchemaDecodeError::InvalidWireType((tag & SCHEMA_TAG_WIRE_TYPE_MASK) as u8),
        )?;

        let field_id = FieldId::try_from(tag >> SCHEMA_TAG_FIELD_SHIFT)
            .map_err(|_| SchemaDecodeError::InvalidFieldId)?;
        if field_id == 0 {
            return Err(SchemaDecodeError::InvalidFieldId);
        }

        match wire_type {
            SchemaWireType::Varint => {
                let value = reader.read_varint()?;
                object.push_varint(field_id, value);
            }
            SchemaWireType::Bytes => {
                let bytes = reader.read_length_delimited(limits)?;
                object.push_bytes(field_id, bytes.to_vec());
            }
            SchemaWireType::Object => {
                let child_buf = reader.read_length_delimited(limits)?;
                let child = decode_object_at_depth(child_buf, depth + 1, limits)?;
                object.push_object(field_id, child);
            }
        }
    }

    Ok(object)
}

struct SchemaReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SchemaReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn read_varint(&mut self) -> Result<u64, SchemaDecodeError> {
        let mut value: u64 = 0;

        for i in 0..MAX_VARINT_LEN {
            let byte = *self
                .buf
                .get(self.pos)
                .ok_or(SchemaDecodeError::UnexpectedEof)?;
            self.pos += 1;

            // The tenth byte may only contribute the top bit of a u64.
            if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
                return Err(SchemaDecodeError::VarintOverflow);
            }

            value |= u64::from(byte & 0x7F) << (7 * i);

            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }

        Err(SchemaDecodeError::VarintOverflow)
    }

    fn read_length_delimited(
        &mut self,
        limits: &SchemaLimits,
    ) -> Result<&'a [u8], SchemaDecodeError> {
        let raw_len = self.read_varint()?;
        let len = usize::try_from(raw_len).map_err(|_| SchemaDecodeError::LengthLimitExceeded {
            len: usize::MAX,
            max: limits.max_length,
        })?;

        if len > limits.max_length {
            return Err(SchemaDecodeError::LengthLimitExceeded {
                len,
                max: limits.max_length,
            });
        }

        let buf = self.buf;
        let remaining = buf.len() - self.pos;
        if len > remaining {
            return Err(SchemaDecodeError::UnexpectedEof);
        }

        let bytes = &buf[self.pos..self.pos + len];
        self.pos += len;

        Ok(bytes)
    }
}
