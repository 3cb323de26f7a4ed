/// Checks that `$obj` of type `$obj_type` survives canonical (compressed and uncompressed),
/// JSON and MessagePack round trips. Expects `ark_serialize::*`, `serde_json` and `rmp_serde` in scope.
#[macro_export]
macro_rules! test_serialization {
    ($obj_type:ty, $obj: expr) => {
        let mut serz = vec![];
        CanonicalSerialize::serialize_compressed(&$obj, &mut serz).unwrap();
        assert_eq!(serz.len(), $obj.compressed_size());
        let deserz: $obj_type = CanonicalDeserialize::deserialize_compressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);

        let mut serz = vec![];
        $obj.serialize_uncompressed(&mut serz).unwrap();
        assert_eq!(serz.len(), $obj.uncompressed_size());
        let deserz: $obj_type = CanonicalDeserialize::deserialize_uncompressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);

        // JSON
        let ser = serde_json::to_string(&$obj).unwrap();
        let deser = serde_json::from_str::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);

        // MessagePack
        let ser = rmp_serde::to_vec_named(&$obj).unwrap();
        let deser = rmp_serde::from_slice::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);
    };
}
