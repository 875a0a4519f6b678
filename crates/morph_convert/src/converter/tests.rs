use super::*;
use morph_types::{ClassDef, TypePool};
use pretty_assertions::assert_eq;

fn converter() -> ShapeConverter<TypePool> {
    ShapeConverter::new(Arc::new(TypePool::new()))
}

fn strings(conv: &ShapeConverter<TypePool>, items: &[&str]) -> Value {
    let ty = conv.capabilities().list(Idx::STR);
    Value::seq(ty, items.iter().map(|s| Value::string(*s)).collect())
}

#[test]
fn string_into_collection_target_is_unchanged() {
    let conv = converter();
    let target = conv.capabilities().list(Idx::STR);

    let out = conv.convert(ConversionRequest::new(Some(Value::string("hello")), target));
    assert_eq!(out, Some(Value::string("hello")));
}

#[test]
fn scalar_wraps_into_array_of_its_runtime_type() {
    let conv = converter();
    let target = conv.capabilities().array(Idx::INT);

    let out = conv
        .convert(ConversionRequest::new(Some(Value::int(5)), target))
        .unwrap();
    assert_eq!(out.runtime_type(), conv.capabilities().array(Idx::INT));
    assert_eq!(out.elements().unwrap().collect::<Vec<_>>(), vec![Value::int(5)]);
}

#[test]
fn wrap_types_array_by_value_not_target() {
    let conv = converter();
    let target = conv.capabilities().list(Idx::FLOAT);

    let out = conv
        .convert(ConversionRequest::new(Some(Value::int(3)), target))
        .unwrap();
    assert_eq!(out.runtime_type(), conv.capabilities().array(Idx::INT));
}

#[test]
fn collection_unwraps_to_first_element() {
    let conv = converter();
    let value = strings(&conv, &["a", "b"]);

    let out = conv.convert(ConversionRequest::new(Some(value), Idx::STR));
    assert_eq!(out, Some(Value::string("a")));
}

#[test]
fn empty_collection_unwraps_to_none() {
    let conv = converter();
    let value = strings(&conv, &[]);

    assert_eq!(conv.convert(ConversionRequest::new(Some(value), Idx::STR)), None);
}

#[test]
fn map_unwraps_to_first_entry() {
    let conv = converter();
    let pool = conv.capabilities();
    let map_ty = pool.map(Idx::STR, Idx::INT);
    let entry_ty = pool.pair(Idx::STR, Idx::INT);
    let value = Value::map(
        map_ty,
        entry_ty,
        vec![
            (Value::string("one"), Value::int(1)),
            (Value::string("two"), Value::int(2)),
        ],
    );

    let out = conv
        .convert(ConversionRequest::new(Some(value), Idx::INT))
        .unwrap();
    assert_eq!(out, Value::pair(entry_ty, Value::string("one"), Value::int(1)));
}

#[test]
fn collection_into_collection_is_unchanged() {
    let conv = converter();
    let value = strings(&conv, &["x"]);
    let target = conv.capabilities().array(Idx::STR);

    let out = conv.convert(ConversionRequest::new(Some(value.clone()), target));
    assert_eq!(out, Some(value));
}

#[test]
fn scalar_into_scalar_is_unchanged() {
    let conv = converter();
    let out = conv.convert(ConversionRequest::new(Some(Value::int(9)), Idx::STR));
    assert_eq!(out, Some(Value::int(9)));
}

#[test]
fn absent_into_scalar_is_none() {
    let conv = converter();
    assert_eq!(conv.convert(ConversionRequest::new(None, Idx::INT)), None);
}

#[test]
fn absent_into_sequence_interface_is_empty_sequence() {
    let conv = converter();
    let pool = conv.capabilities();
    let widget = pool.register_class(ClassDef::concrete("Widget")).unwrap();
    let target = pool.sequence(widget);

    let out = conv.convert(ConversionRequest::new(None, target)).unwrap();
    assert_eq!(out, Value::seq(pool.sequence(widget), Vec::new()));
}

#[test]
fn absent_into_concrete_collection_class_is_new_instance() {
    let conv = converter();
    let pool = conv.capabilities();
    let widget = pool.register_class(ClassDef::concrete("Widget")).unwrap();
    let widgets = pool
        .register_class(
            ClassDef::concrete("WidgetList")
                .with_element(widget)
                .with_default_constructor(),
        )
        .unwrap();

    let out = conv.convert(ConversionRequest::new(None, widgets)).unwrap();
    assert_eq!(out, Value::seq(widgets, Vec::new()));
}

#[test]
fn absent_into_array_is_none() {
    let conv = converter();
    let target = conv.capabilities().array(Idx::INT);
    assert_eq!(conv.convert(ConversionRequest::new(None, target)), None);
}

#[test]
fn absent_into_map_interface_is_none() {
    let conv = converter();
    let target = conv.capabilities().map_interface(Idx::STR, Idx::INT);
    assert_eq!(conv.convert(ConversionRequest::new(None, target)), None);
}

#[test]
fn absent_into_map_is_empty_map() {
    let conv = converter();
    let pool = conv.capabilities();
    let target = pool.map(Idx::STR, Idx::INT);

    let out = conv.convert(ConversionRequest::new(None, target)).unwrap();
    assert_eq!(out, Value::map(target, pool.pair(Idx::STR, Idx::INT), Vec::new()));
}

#[test]
fn absent_into_collection_without_constructor_is_none() {
    let conv = converter();
    let pool = conv.capabilities();
    let widget = pool.register_class(ClassDef::concrete("Widget")).unwrap();
    let sized = pool
        .register_class(
            ClassDef::concrete("FixedWidgets")
                .with_element(widget)
                .with_constructor(&[Idx::INT]),
        )
        .unwrap();

    assert_eq!(conv.convert(ConversionRequest::new(None, sized)), None);
}

#[test]
fn to_collection_wraps_for_scalar_target() {
    let conv = converter();
    let request = ConversionRequest::new(Some(Value::int(1)), Idx::INT)
        .with_direction(ConversionDirection::ToCollection);

    let out = conv.convert(request).unwrap();
    assert_eq!(out, Value::seq(conv.capabilities().array(Idx::INT), vec![Value::int(1)]));
}

#[test]
fn from_collection_unwraps_for_collection_target() {
    let conv = converter();
    let value = strings(&conv, &["first", "second"]);
    let target = conv.capabilities().list(Idx::STR);
    let request = ConversionRequest::new(Some(value), target)
        .with_direction(ConversionDirection::FromCollection);

    assert_eq!(conv.convert(request), Some(Value::string("first")));
}

#[test]
fn strings_are_never_reshaped() {
    let conv = converter();
    let target = conv.capabilities().list(Idx::STR);

    for direction in [
        ConversionDirection::Automatic,
        ConversionDirection::ToCollection,
        ConversionDirection::FromCollection,
    ] {
        let request =
            ConversionRequest::new(Some(Value::string("s")), target).with_direction(direction);
        assert_eq!(conv.convert(request), Some(Value::string("s")), "{direction}");
    }
}

#[test]
fn repeated_synthesis_reuses_constructor_lookup() {
    let conv = converter();
    let target = conv.capabilities().list(Idx::INT);

    for _ in 0..3 {
        assert!(conv.convert(ConversionRequest::new(None, target)).is_some());
    }
    assert_eq!(conv.capabilities().cached_constructor_lookups(), 1);
}

#[test]
fn options_default_to_automatic() {
    crate::init_tracing();
    crate::init_tracing();
    let conv = converter();
    assert_eq!(conv.options(), ConvertOptions::default());
    assert_eq!(conv.options().direction, ConversionDirection::Automatic);

    let options = ConvertOptions::new().with_direction(ConversionDirection::ToCollection);
    assert_eq!(options.direction.to_string(), "to_collection");
}

#[test]
fn absent_into_registered_interface_is_empty_sequence() {
    let conv = converter();
    let pool = conv.capabilities();
    let widget = pool.register_class(ClassDef::concrete("Widget")).unwrap();
    let widgets = pool
        .register_class(ClassDef::interface("IWidgets").with_element(widget))
        .unwrap();

    let out = conv.convert(ConversionRequest::new(None, widgets)).unwrap();
    assert_eq!(out, Value::seq(pool.sequence(widget), Vec::new()));
}

#[test]
fn absent_into_key_value_interface_class_is_none() {
    let conv = converter();
    let lookup = conv
        .capabilities()
        .register_class(ClassDef::interface("ILookup").with_key_value())
        .unwrap();

    assert_eq!(conv.convert(ConversionRequest::new(None, lookup)), None);
}

#[test]
fn absent_into_pair_collections() {
    let conv = converter();
    let pool = conv.capabilities();
    let entry = pool.pair(Idx::STR, Idx::INT);

    let pairs = pool.sequence(entry);
    assert_eq!(conv.convert(ConversionRequest::new(None, pairs)), None);

    let entries = pool.list(entry);
    let out = conv.convert(ConversionRequest::new(None, entries));
    assert_eq!(out, Some(Value::seq(entries, Vec::new())));
}

/// Every type is a collection interface with no element type.
struct ElementlessInterfaces;

impl TypeCapabilities for ElementlessInterfaces {
    fn is_collection_type(&self, _ty: Idx) -> bool {
        true
    }

    fn is_key_value_collection_type(&self, _ty: Idx) -> bool {
        false
    }

    fn element_type(&self, _ty: Idx) -> Option<Idx> {
        None
    }

    fn is_interface(&self, _ty: Idx) -> bool {
        true
    }

    fn array_of(&self, elem: Idx) -> Idx {
        elem
    }

    fn empty_sequence(&self, elem: Idx) -> Value {
        Value::seq(elem, Vec::new())
    }

    fn find_zero_arg_constructor(&self, ty: Idx) -> Option<morph_types::Constructor> {
        Some(morph_types::Constructor {
            owner: ty,
            index: 0,
            arity: 0,
        })
    }

    fn instantiate(&self, ctor: &morph_types::Constructor) -> Option<Value> {
        Some(Value::seq(ctor.owner, Vec::new()))
    }
}

#[test]
fn absent_into_elementless_interface_is_none() {
    let conv = ShapeConverter::new(Arc::new(ElementlessInterfaces));
    let target = Idx::from_raw(40);

    assert_eq!(conv.convert(ConversionRequest::new(None, target)), None);
}
