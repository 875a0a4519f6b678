use super::*;
use morph_types::ClassDef;
use pretty_assertions::assert_eq;

#[test]
fn collection_queries() {
    let pool = TypePool::new();
    assert!(pool.is_collection_type(pool.list(Idx::INT)));
    assert!(pool.is_collection_type(pool.array(Idx::STR)));
    assert!(!pool.is_collection_type(Idx::STR));
    assert!(!pool.is_collection_type(Idx::INT));

    let map = pool.map(Idx::STR, Idx::INT);
    assert!(pool.is_key_value_collection_type(map));
    assert!(!pool.is_key_value_collection_type(pool.list(Idx::INT)));
}

#[test]
fn interface_queries() {
    let pool = TypePool::new();
    assert!(pool.is_interface(pool.sequence(Idx::INT)));
    assert!(pool.is_interface(pool.map_interface(Idx::STR, Idx::INT)));
    assert!(!pool.is_interface(pool.list(Idx::INT)));
}

#[test]
fn empty_sequence_is_typed() {
    let pool = TypePool::new();
    let widget = pool.register_class(ClassDef::concrete("Widget")).unwrap();

    let empty = pool.empty_sequence(widget);
    assert_eq!(empty.runtime_type(), pool.sequence(widget));
    assert_eq!(empty.as_seq().map(crate::SeqValue::len), Some(0));
}

#[test]
fn instantiate_list_and_map() {
    let pool = TypePool::new();
    let list = pool.list(Idx::INT);
    let map = pool.map(Idx::STR, Idx::INT);

    let ctor = pool.find_zero_arg_constructor(list).unwrap();
    assert_eq!(pool.instantiate(&ctor), Some(Value::seq(list, Vec::new())));

    let ctor = pool.find_zero_arg_constructor(map).unwrap();
    assert_eq!(
        pool.instantiate(&ctor),
        Some(Value::map(map, pool.pair(Idx::STR, Idx::INT), Vec::new()))
    );
}

#[test]
fn instantiate_classes() {
    let pool = TypePool::new();
    let widget = pool
        .register_class(ClassDef::concrete("Widget").with_default_constructor())
        .unwrap();
    let widgets = pool
        .register_class(
            ClassDef::concrete("WidgetList")
                .with_element(widget)
                .with_default_constructor(),
        )
        .unwrap();

    let ctor = pool.find_zero_arg_constructor(widgets).unwrap();
    assert_eq!(pool.instantiate(&ctor), Some(Value::seq(widgets, Vec::new())));

    let ctor = pool.find_zero_arg_constructor(widget).unwrap();
    let instance = pool.instantiate(&ctor).unwrap();
    assert_eq!(instance.runtime_type(), widget);
    assert!(instance.as_object().is_some());
}

#[test]
fn parameterised_constructor_is_not_run() {
    let pool = TypePool::new();
    let list = pool.list(Idx::INT);
    let ctor = Constructor {
        owner: list,
        index: 1,
        arity: 1,
    };
    assert_eq!(pool.instantiate(&ctor), None);
}

#[test]
fn describe_uses_pool_names() {
    let pool = TypePool::new();
    let list = pool.list(Idx::STR);
    assert_eq!(TypeCapabilities::describe(&pool, list), "List<str>");
}
