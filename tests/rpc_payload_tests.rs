use bitcode::{Decode, Encode};
use rand::Rng;
use spatial_rpc::constants::{
    UNREAL_RPC_PAYLOAD_OFFSET_ID, UNREAL_RPC_PAYLOAD_RPC_INDEX_ID,
    UNREAL_RPC_PAYLOAD_RPC_PAYLOAD_ID,
};
use spatial_rpc::rpc::{RpcPayload, RpcPayloadError};
use spatial_rpc::schema::{SchemaCodec, SchemaLimits, SchemaObject, SchemaObjectBuf};

#[derive(Encode, Decode, Debug, PartialEq)]
struct ServerMoveArgs {
    timestamp: f32,
    location: [i32; 3],
    flags: u8,
}

fn roundtrip(payload: &RpcPayload) -> RpcPayload {
    let mut rpc_object = SchemaObjectBuf::new();
    payload.write_to_schema_object(&mut rpc_object);
    RpcPayload::from_schema_object(&rpc_object)
}

#[test]
fn payload_roundtrips_through_schema_object() {
    let payload = RpcPayload::new(7, 42, vec![0xDE, 0xAD, 0xBE, 0xEF]);

    let decoded = roundtrip(&payload);

    assert_eq!(decoded, payload);
    assert_eq!(decoded.offset(), 7);
    assert_eq!(decoded.index(), 42);
    assert_eq!(decoded.data(), &[0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn payload_roundtrips_extreme_values_and_empty_data() {
    for payload in [
        RpcPayload::new(0, 0, vec![]),
        RpcPayload::new(u32::MAX, u32::MAX, vec![]),
        RpcPayload::new(u32::MAX, 0, vec![0x00]),
        RpcPayload::new(1, u32::MAX, vec![0xFF; 1024]),
    ] {
        assert_eq!(roundtrip(&payload), payload);
    }
}

#[test]
fn random_payloads_roundtrip_through_bytes() {
    let mut rng = rand::rng();
    let limits = SchemaLimits::default();

    for _ in 0..256 {
        let len = rng.random_range(0..512usize);
        let data: Vec<u8> = (0..len).map(|_| rng.random::<u8>()).collect();
        let payload = RpcPayload::new(rng.random::<u32>(), rng.random::<u32>(), data);

        let mut rpc_object = SchemaObjectBuf::new();
        payload.write_to_schema_object(&mut rpc_object);

        let bytes = SchemaCodec::encode_object(&rpc_object, &limits).expect("encode failed");
        let decoded_object = SchemaCodec::decode_object(&bytes, &limits).expect("decode failed");

        assert_eq!(decoded_object, rpc_object);
        assert_eq!(RpcPayload::from_schema_object(&decoded_object), payload);
    }
}

#[test]
fn count_data_bits_is_eight_per_byte() {
    assert_eq!(RpcPayload::new(0, 0, vec![]).count_data_bits(), 0);
    assert_eq!(RpcPayload::new(0, 0, vec![0xAB]).count_data_bits(), 8);
    assert_eq!(RpcPayload::new(0, 0, vec![0; 1500]).count_data_bits(), 12_000);
}

#[test]
fn write_uses_fixed_field_ids() {
    let payload = RpcPayload::new(3, 9, b"args".to_vec());

    let mut rpc_object = SchemaObjectBuf::new();
    payload.write_to_schema_object(&mut rpc_object);

    assert_eq!(rpc_object.get_u32(UNREAL_RPC_PAYLOAD_OFFSET_ID), Some(3));
    assert_eq!(rpc_object.get_u32(UNREAL_RPC_PAYLOAD_RPC_INDEX_ID), Some(9));
    assert_eq!(
        rpc_object.get_bytes(UNREAL_RPC_PAYLOAD_RPC_PAYLOAD_ID),
        Some(&b"args"[..])
    );
}

#[test]
fn write_keeps_existing_fields_of_target_object() {
    let mut rpc_object = SchemaObjectBuf::new();
    rpc_object.add_u32(99, 1234);

    RpcPayload::new(1, 2, vec![3]).write_to_schema_object(&mut rpc_object);

    assert_eq!(rpc_object.get_u32(99), Some(1234));
    assert_eq!(rpc_object.get_u32(UNREAL_RPC_PAYLOAD_OFFSET_ID), Some(1));
}

#[test]
fn missing_fields_decode_as_defaults() {
    let empty = SchemaObjectBuf::new();
    let decoded = RpcPayload::from_schema_object(&empty);

    assert_eq!(decoded, RpcPayload::new(0, 0, vec![]));
    assert_eq!(decoded.count_data_bits(), 0);
}

#[test]
fn strict_decode_reports_first_missing_field() {
    let mut rpc_object = SchemaObjectBuf::new();
    assert_eq!(
        RpcPayload::try_from_schema_object(&rpc_object),
        Err(RpcPayloadError::MissingField(UNREAL_RPC_PAYLOAD_OFFSET_ID))
    );

    rpc_object.add_u32(UNREAL_RPC_PAYLOAD_OFFSET_ID, 0);
    assert_eq!(
        RpcPayload::try_from_schema_object(&rpc_object),
        Err(RpcPayloadError::MissingField(UNREAL_RPC_PAYLOAD_RPC_INDEX_ID))
    );

    rpc_object.add_u32(UNREAL_RPC_PAYLOAD_RPC_INDEX_ID, 0);
    assert_eq!(
        RpcPayload::try_from_schema_object(&rpc_object),
        Err(RpcPayloadError::MissingField(
            UNREAL_RPC_PAYLOAD_RPC_PAYLOAD_ID
        ))
    );

    // A present-but-zero payload is distinguishable from an absent one.
    rpc_object.add_bytes(UNREAL_RPC_PAYLOAD_RPC_PAYLOAD_ID, &[]);
    assert_eq!(
        RpcPayload::try_from_schema_object(&rpc_object),
        Ok(RpcPayload::new(0, 0, vec![]))
    );
}

#[test]
fn data_mut_changes_are_visible_to_owner() {
    let mut payload = RpcPayload::new(1, 1, vec![1, 2]);

    payload.data_mut().push(3);

    assert_eq!(payload.data(), &[1, 2, 3]);
    assert_eq!(payload.count_data_bits(), 24);
    assert_eq!(payload.into_data(), vec![1, 2, 3]);
}

#[test]
fn typed_arguments_survive_the_schema_layer() {
    let args = ServerMoveArgs {
        timestamp: 12.5,
        location: [100, -200, 300],
        flags: 0b101,
    };
    let payload = RpcPayload::new(2, 17, bitcode::encode(&args));

    let decoded = roundtrip(&payload);

    let decoded_args: ServerMoveArgs = bitcode::decode(decoded.data()).expect("decode args");
    assert_eq!(decoded_args, args);
}
