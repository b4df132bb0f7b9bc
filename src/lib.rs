//! Schema wire encoding for engine RPCs that target spatial entities.
//!
//! The [`schema`] layer describes the backend's self-describing binary objects
//! as a small capability trait ([`schema::SchemaObject`]) plus an in-memory
//! runtime. The [`rpc`] layer packs individual RPC invocations into those
//! objects and batches calls made before an entity exists so they can ride
//! along with the entity-creation request.

pub mod constants;
pub mod rpc;
pub mod schema;
