use crate::{
    constants::{
        RPCS_ON_ENTITY_CREATION_CLEAR_COMMAND_INDEX, RPCS_ON_ENTITY_CREATION_ID,
        RPCS_ON_ENTITY_CREATION_RPCS_FIELD,
    },
    rpc::{RpcPayload, RpcsOnEntityCreationError},
    schema::{
        CommandRequest, Component, ComponentData, ComponentId, ComponentUpdate, SchemaObject,
    },
};

/// RPCs invoked on an object before its entity existed.
///
/// The list is attached to the entity-creation request as a single component
/// so that none of the calls are lost. Payloads keep the order they were added
/// in, and that order survives encoding, so the receiver can replay them in
/// invocation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RpcsOnEntityCreation {
    rpcs: Vec<RpcPayload>,
}

impl Component for RpcsOnEntityCreation {
    const COMPONENT_ID: ComponentId = RPCS_ON_ENTITY_CREATION_ID;
}

impl RpcsOnEntityCreation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes every stored payload, in stored order.
    ///
    /// Incomplete payload objects decode with default values. A block tagged
    /// with another component ID is still read, but logged.
    pub fn from_component_data<O: SchemaObject>(data: &ComponentData<O>) -> Self {
        if data.component_id() != Self::COMPONENT_ID {
            tracing::warn!(
                "Decoding component {} as RpcsOnEntityCreation ({})",
                data.component_id(),
                Self::COMPONENT_ID
            );
        }

        let rpcs = RPCS_ON_ENTITY_CREATION_RPCS_FIELD
            .iter(data.fields())
            .map(RpcPayload::from_schema_object)
            .collect::<Vec<_>>();

        tracing::trace!("Decoded {} RPCs on entity creation", rpcs.len());

        Self { rpcs }
    }

    /// Like [`RpcsOnEntityCreation::from_component_data`], but rejects a
    /// foreign component ID and any payload object with a missing field.
    pub fn try_from_component_data<O: SchemaObject>(
        data: &ComponentData<O>,
    ) -> Result<Self, RpcsOnEntityCreationError> {
        if data.component_id() != Self::COMPONENT_ID {
            return Err(RpcsOnEntityCreationError::ComponentIdMismatch {
                expected: Self::COMPONENT_ID,
                actual: data.component_id(),
            });
        }

        let mut rpcs = Vec::new();
        for (index, rpc_object) in RPCS_ON_ENTITY_CREATION_RPCS_FIELD
            .iter(data.fields())
            .enumerate()
        {
            let payload = RpcPayload::try_from_schema_object(rpc_object).map_err(|error| {
                RpcsOnEntityCreationError::Payload {
                    index: index as u32,
                    error,
                }
            })?;
            rpcs.push(payload);
        }

        Ok(Self { rpcs })
    }

    pub fn has_rpc_payload_data(&self) -> bool {
        !self.rpcs.is_empty()
    }

    /// Serializes the batch as one component data block, one child object per
    /// payload. An empty batch yields a valid block with no children.
    pub fn create_rpc_payload_data<O: SchemaObject>(&self) -> ComponentData<O> {
        let mut data = ComponentData::<O>::new(Self::COMPONENT_ID);

        for rpc in &self.rpcs {
            let rpc_object = RPCS_ON_ENTITY_CREATION_RPCS_FIELD.push(data.fields_mut());
            rpc.write_to_schema_object(rpc_object);
        }

        tracing::trace!(
            "Encoded {} RPCs on entity creation ({} data bits)",
            self.rpcs.len(),
            self.count_data_bits()
        );

        data
    }

    /// An update that clears the stored RPC list without resending it.
    pub fn create_clear_fields_update<O: SchemaObject>() -> ComponentUpdate<O> {
        let mut update = ComponentUpdate::<O>::new(Self::COMPONENT_ID);
        update.add_cleared_field(RPCS_ON_ENTITY_CREATION_RPCS_FIELD.field_id());
        update
    }

    /// A clear request routed through the component's command channel.
    ///
    /// The request object is sent empty; the receiving side owns the
    /// meaning of the command.
    pub fn create_clear_fields_command_request<O: SchemaObject>() -> CommandRequest<O> {
        CommandRequest::<O>::new(
            Self::COMPONENT_ID,
            RPCS_ON_ENTITY_CREATION_CLEAR_COMMAND_INDEX,
        )
    }

    /// Appends a payload. Pass a `RpcPayload` to move it in or a
    /// `&RpcPayload` to copy it.
    pub fn add_rpc_payload(&mut self, payload: impl Into<RpcPayload>) {
        self.rpcs.push(payload.into());
    }

    pub fn rpcs(&self) -> &[RpcPayload] {
        &self.rpcs
    }

    pub fn rpcs_mut(&mut self) -> &mut Vec<RpcPayload> {
        &mut self.rpcs
    }

    pub fn into_rpcs(self) -> Vec<RpcPayload> {
        self.rpcs
    }

    /// Total argument data across the batch, in bits.
    pub fn count_data_bits(&self) -> i64 {
        self.rpcs.iter().map(RpcPayload::count_data_bits).sum()
    }
}

impl FromIterator<RpcPayload> for RpcsOnEntityCreation {
    fn from_iter<I: IntoIterator<Item = RpcPayload>>(iter: I) -> Self {
        Self {
            rpcs: iter.into_iter().collect(),
        }
    }
}

impl Extend<RpcPayload> for RpcsOnEntityCreation {
    fn extend<I: IntoIterator<Item = RpcPayload>>(&mut self, iter: I) {
        self.rpcs.extend(iter);
    }
}
