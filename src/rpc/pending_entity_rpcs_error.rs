use crate::{rpc::EntityRpcState, schema::EntityId};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingEntityRpcsError {
    /// No record exists for the entity.
    UnknownEntity(EntityId),

    /// The entity's creation request already carried its RPCs; further calls
    /// must go through the regular RPC path.
    EntityAlreadyCreated(EntityId),

    /// The requested step does not follow from the entity's current state.
    InvalidTransition {
        entity_id: EntityId,
        from: EntityRpcState,
        to: EntityRpcState,
    },
}

impl fmt::Display for PendingEntityRpcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingEntityRpcsError::UnknownEntity(entity_id) => {
                write!(f, "no creation-time RPCs tracked for entity {}", entity_id)
            }
            PendingEntityRpcsError::EntityAlreadyCreated(entity_id) => {
                write!(f, "entity {} has already been created", entity_id)
            }
            PendingEntityRpcsError::InvalidTransition {
                entity_id,
                from,
                to,
            } => write!(
                f,
                "entity {} cannot move from {:?} to {:?}",
                entity_id, from, to
            ),
        }
    }
}

impl std::error::Error for PendingEntityRpcsError {}
