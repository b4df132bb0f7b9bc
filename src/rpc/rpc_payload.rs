use crate::{
    constants::{
        UNREAL_RPC_PAYLOAD_OFFSET_ID, UNREAL_RPC_PAYLOAD_RPC_INDEX_ID,
        UNREAL_RPC_PAYLOAD_RPC_PAYLOAD_ID,
    },
    rpc::RpcPayloadError,
    schema::SchemaObject,
};

/// One captured RPC invocation.
///
/// `offset` identifies the sub-object on the entity the call targets and
/// `index` the method within it. `payload_data` holds the already-serialized
/// arguments and is treated as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RpcPayload {
    offset: u32,
    index: u32,
    payload_data: Vec<u8>,
}

impl RpcPayload {
    pub fn new(offset: u32, index: u32, payload_data: Vec<u8>) -> Self {
        Self {
            offset,
            index,
            payload_data,
        }
    }

    /// Reads a payload from `rpc_object`.
    ///
    /// Absent fields decode as 0 or as empty data. A payload of
    /// `(0, 0, [])` can therefore mean "nothing was stored"; use
    /// [`RpcPayload::try_from_schema_object`] when the difference matters.
    pub fn from_schema_object<O: SchemaObject>(rpc_object: &O) -> Self {
        Self {
            offset: rpc_object
                .get_u32(UNREAL_RPC_PAYLOAD_OFFSET_ID)
                .unwrap_or_default(),
            index: rpc_object
                .get_u32(UNREAL_RPC_PAYLOAD_RPC_INDEX_ID)
                .unwrap_or_default(),
            payload_data: rpc_object
                .get_bytes(UNREAL_RPC_PAYLOAD_RPC_PAYLOAD_ID)
                .map(<[u8]>::to_vec)
                .unwrap_or_default(),
        }
    }

    /// Reads a payload from `rpc_object`, requiring all three fields.
    pub fn try_from_schema_object<O: SchemaObject>(
        rpc_object: &O,
    ) -> Result<Self, RpcPayloadError> {
        let offset = rpc_object
            .get_u32(UNREAL_RPC_PAYLOAD_OFFSET_ID)
            .ok_or(RpcPayloadError::MissingField(UNREAL_RPC_PAYLOAD_OFFSET_ID))?;
        let index = rpc_object
            .get_u32(UNREAL_RPC_PAYLOAD_RPC_INDEX_ID)
            .ok_or(RpcPayloadError::MissingField(UNREAL_RPC_PAYLOAD_RPC_INDEX_ID))?;
        let payload_data = rpc_object
            .get_bytes(UNREAL_RPC_PAYLOAD_RPC_PAYLOAD_ID)
            .ok_or(RpcPayloadError::MissingField(
                UNREAL_RPC_PAYLOAD_RPC_PAYLOAD_ID,
            ))?
            .to_vec();

        Ok(Self::new(offset, index, payload_data))
    }

    /// Writes offset, index and data into `rpc_object` in place.
    ///
    /// Values are not range-checked.
    pub fn write_to_schema_object<O: SchemaObject>(&self, rpc_object: &mut O) {
        rpc_object.add_u32(UNREAL_RPC_PAYLOAD_OFFSET_ID, self.offset);
        rpc_object.add_u32(UNREAL_RPC_PAYLOAD_RPC_INDEX_ID, self.index);
        rpc_object.add_bytes(UNREAL_RPC_PAYLOAD_RPC_PAYLOAD_ID, &self.payload_data);
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Size of the argument data in bits, for budgeting a shared frame.
    pub fn count_data_bits(&self) -> i64 {
        self.payload_data.len() as i64 * 8
    }

    pub fn data(&self) -> &[u8] {
        &self.payload_data
    }

    pub fn data_mut(&mut self) -> &mut Vec<u8> {
        &mut self.payload_data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.payload_data
    }
}

impl From<&RpcPayload> for RpcPayload {
    fn from(payload: &RpcPayload) -> Self {
        payload.clone()
    }
}
