mod pending_entity_rpcs;
mod pending_entity_rpcs_error;
mod rpc_payload;
mod rpc_payload_error;
mod rpcs_on_entity_creation;
mod rpcs_on_entity_creation_error;

pub use pending_entity_rpcs::{EntityRpcState, PendingEntityRpcs};
pub use pending_entity_rpcs_error::PendingEntityRpcsError;
pub use rpc_payload::RpcPayload;
pub use rpc_payload_error::RpcPayloadError;
pub use rpcs_on_entity_creation::RpcsOnEntityCreation;
pub use rpcs_on_entity_creation_error::RpcsOnEntityCreationError;
