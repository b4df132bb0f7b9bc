use crate::{
    rpc::{PendingEntityRpcsError, RpcPayload, RpcsOnEntityCreation},
    schema::{CommandRequest, ComponentData, ComponentUpdate, EntityId, SchemaObject},
};
use std::collections::HashMap;

/// Where an entity's creation-time RPCs are in their lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRpcState {
    /// Calls are being collected; the entity has not been created yet.
    Pending,

    /// The batch has been serialized into the entity-creation request.
    Attached,

    /// A clear-fields update or command has been issued for the batch.
    Cleared,
}

struct EntityRpcs {
    state: EntityRpcState,
    rpcs: RpcsOnEntityCreation,
}

/// Tracks creation-time RPC batches per entity.
///
/// Each entity moves strictly `Pending -> Attached -> Cleared`. There is no
/// way back to `Pending`; a new entity starts a fresh batch, and
/// [`PendingEntityRpcs::forget`] drops a record once it is no longer needed.
///
/// The tracker is single-owner. Callers sharing it across threads wrap it in
/// their own lock.
#[derive(Default)]
pub struct PendingEntityRpcs {
    entities: HashMap<EntityId, EntityRpcs>,
}

impl PendingEntityRpcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an RPC for an entity that has not been created yet.
    pub fn queue_rpc(
        &mut self,
        entity_id: EntityId,
        payload: RpcPayload,
    ) -> Result<(), PendingEntityRpcsError> {
        let entry = self.entities.entry(entity_id).or_insert_with(|| {
            tracing::debug!("Entity {}: collecting creation-time RPCs", entity_id);
            EntityRpcs {
                state: EntityRpcState::Pending,
                rpcs: RpcsOnEntityCreation::new(),
            }
        });

        if entry.state != EntityRpcState::Pending {
            tracing::warn!(
                "Entity {}: rejected RPC (offset {}, index {}) in state {:?}",
                entity_id,
                payload.offset(),
                payload.index(),
                entry.state
            );
            return Err(PendingEntityRpcsError::EntityAlreadyCreated(entity_id));
        }

        entry.rpcs.add_rpc_payload(payload);

        Ok(())
    }

    /// Serializes the entity's queued RPCs for its creation request.
    ///
    /// An entity nothing was queued for still gets a well-formed, empty block.
    pub fn attach<O: SchemaObject>(
        &mut self,
        entity_id: EntityId,
    ) -> Result<ComponentData<O>, PendingEntityRpcsError> {
        let entry = self.entities.entry(entity_id).or_insert_with(|| EntityRpcs {
            state: EntityRpcState::Pending,
            rpcs: RpcsOnEntityCreation::new(),
        });

        transition(entity_id, entry, EntityRpcState::Pending, EntityRpcState::Attached)?;

        Ok(entry.rpcs.create_rpc_payload_data())
    }

    /// Marks the entity's RPCs as delivered and returns the update that clears them.
    pub fn clear_fields_update<O: SchemaObject>(
        &mut self,
        entity_id: EntityId,
    ) -> Result<ComponentUpdate<O>, PendingEntityRpcsError> {
        self.mark_cleared(entity_id)?;
        Ok(RpcsOnEntityCreation::create_clear_fields_update())
    }

    /// Like [`PendingEntityRpcs::clear_fields_update`], for the command channel.
    pub fn clear_fields_command_request<O: SchemaObject>(
        &mut self,
        entity_id: EntityId,
    ) -> Result<CommandRequest<O>, PendingEntityRpcsError> {
        self.mark_cleared(entity_id)?;
        Ok(RpcsOnEntityCreation::create_clear_fields_command_request())
    }

    pub fn state(&self, entity_id: EntityId) -> Option<EntityRpcState> {
        self.entities.get(&entity_id).map(|entry| entry.state)
    }

    pub fn pending_rpcs(&self, entity_id: EntityId) -> Option<&RpcsOnEntityCreation> {
        self.entities.get(&entity_id).map(|entry| &entry.rpcs)
    }

    /// Argument data queued for the entity, in bits. 0 for unknown entities.
    pub fn pending_data_bits(&self, entity_id: EntityId) -> i64 {
        self.entities
            .get(&entity_id)
            .map(|entry| entry.rpcs.count_data_bits())
            .unwrap_or(0)
    }

    /// Drops everything tracked for the entity, returning its batch.
    pub fn forget(&mut self, entity_id: EntityId) -> Option<RpcsOnEntityCreation> {
        self.entities.remove(&entity_id).map(|entry| entry.rpcs)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn mark_cleared(&mut self, entity_id: EntityId) -> Result<(), PendingEntityRpcsError> {
        let entry = self
            .entities
            .get_mut(&entity_id)
            .ok_or(PendingEntityRpcsError::UnknownEntity(entity_id))?;

        transition(entity_id, entry, EntityRpcState::Attached, EntityRpcState::Cleared)?;

        // Delivered; release the stored batch, buffers included.
        entry.rpcs = RpcsOnEntityCreation::new();

        Ok(())
    }
}

fn transition(
    entity_id: EntityId,
    entry: &mut EntityRpcs,
    from: EntityRpcState,
    to: EntityRpcState,
) -> Result<(), PendingEntityRpcsError> {
    if entry.state != from {
        tracing::warn!(
            "Entity {}: cannot move from {:?} to {:?}",
            entity_id,
            entry.state,
            to
        );
        return Err(PendingEntityRpcsError::InvalidTransition {
            entity_id,
            from: entry.state,
            to,
        });
    }

    tracing::debug!("Entity {}: {:?} -> {:?}", entity_id, from, to);
    entry.state = to;

    Ok(())
}
