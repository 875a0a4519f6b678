use super::*;

#[test]
fn collection_of_scalar_is_plain_collection() {
    let flags = TypeFlags::collection_of(TypeFlags::IS_PRIMITIVE);
    assert!(flags.is_collection());
    assert!(!flags.is_key_value());
}

#[test]
fn collection_of_pairs_is_key_value() {
    let flags = TypeFlags::collection_of(TypeFlags::IS_PAIR);
    assert!(flags.is_collection());
    assert!(flags.is_key_value());
}

#[test]
fn interface_query() {
    let flags = TypeFlags::IS_COLLECTION | TypeFlags::IS_INTERFACE;
    assert!(flags.is_interface());
    assert!(!TypeFlags::IS_CLASS.is_interface());
}
