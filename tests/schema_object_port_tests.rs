//! Exercises the RPC layer against a hand-rolled `SchemaObject` that records
//! every call, independent of `SchemaObjectBuf`.

use spatial_rpc::constants::{
    UNREAL_RPC_PAYLOAD_OFFSET_ID, UNREAL_RPC_PAYLOAD_RPC_INDEX_ID,
    UNREAL_RPC_PAYLOAD_RPC_PAYLOAD_ID,
};
use spatial_rpc::rpc::{RpcPayload, RpcsOnEntityCreation};
use spatial_rpc::schema::{ComponentData, FieldId, SchemaObject};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    AddU32(FieldId, u32),
    AddBytes(FieldId, Vec<u8>),
    AddObject(FieldId),
}

#[derive(Debug, Default)]
struct RecordingObject {
    calls: Vec<Call>,
    u32s: Vec<(FieldId, u32)>,
    bytes: Vec<(FieldId, Vec<u8>)>,
    children: Vec<(FieldId, RecordingObject)>,
}

impl SchemaObject for RecordingObject {
    fn get_u32(&self, field_id: FieldId) -> Option<u32> {
        self.u32s
            .iter()
            .rev()
            .find(|(id, _)| *id == field_id)
            .map(|(_, v)| *v)
    }

    fn add_u32(&mut self, field_id: FieldId, value: u32) {
        self.calls.push(Call::AddU32(field_id, value));
        self.u32s.push((field_id, value));
    }

    fn get_bytes(&self, field_id: FieldId) -> Option<&[u8]> {
        self.bytes
            .iter()
            .rev()
            .find(|(id, _)| *id == field_id)
            .map(|(_, v)| v.as_slice())
    }

    fn add_bytes(&mut self, field_id: FieldId, bytes: &[u8]) {
        self.calls.push(Call::AddBytes(field_id, bytes.to_vec()));
        self.bytes.push((field_id, bytes.to_vec()));
    }

    fn add_object(&mut self, field_id: FieldId) -> &mut Self {
        self.calls.push(Call::AddObject(field_id));
        self.children.push((field_id, RecordingObject::default()));
        let last = self.children.len() - 1;
        &mut self.children[last].1
    }

    fn index_object(&self, field_id: FieldId, index: u32) -> Option<&Self> {
        self.children
            .iter()
            .filter(|(id, _)| *id == field_id)
            .nth(index as usize)
            .map(|(_, child)| child)
    }

    fn object_count(&self, field_id: FieldId) -> u32 {
        self.children.iter().filter(|(id, _)| *id == field_id).count() as u32
    }
}

#[test]
fn payload_writes_three_fields_in_place() {
    let mut object = RecordingObject::default();

    RpcPayload::new(11, 22, vec![1, 2, 3]).write_to_schema_object(&mut object);

    assert_eq!(
        object.calls,
        vec![
            Call::AddU32(UNREAL_RPC_PAYLOAD_OFFSET_ID, 11),
            Call::AddU32(UNREAL_RPC_PAYLOAD_RPC_INDEX_ID, 22),
            Call::AddBytes(UNREAL_RPC_PAYLOAD_RPC_PAYLOAD_ID, vec![1, 2, 3]),
        ]
    );
    assert!(object.children.is_empty(), "no objects are allocated");
}

#[test]
fn batch_adds_one_child_per_payload_under_offset_field() {
    let mut batch = RpcsOnEntityCreation::new();
    batch.add_rpc_payload(RpcPayload::new(1, 5, vec![0xAB]));
    batch.add_rpc_payload(RpcPayload::new(2, 9, vec![]));

    let data: ComponentData<RecordingObject> = batch.create_rpc_payload_data();

    assert_eq!(
        data.fields().calls,
        vec![
            Call::AddObject(UNREAL_RPC_PAYLOAD_OFFSET_ID),
            Call::AddObject(UNREAL_RPC_PAYLOAD_OFFSET_ID),
        ]
    );

    let decoded = RpcsOnEntityCreation::from_component_data(&data);
    assert_eq!(
        decoded.rpcs(),
        &[
            RpcPayload::new(1, 5, vec![0xAB]),
            RpcPayload::new(2, 9, vec![]),
        ]
    );
}

#[test]
fn empty_batch_touches_nothing() {
    let data: ComponentData<RecordingObject> =
        RpcsOnEntityCreation::new().create_rpc_payload_data();

    assert!(data.fields().calls.is_empty());
    assert_eq!(data.fields().object_count(UNREAL_RPC_PAYLOAD_OFFSET_ID), 0);
}
