use super::*;
use rustc_hash::FxHashMap;

fn fields(pairs: &[(&str, Value)]) -> FxHashMap<String, Value> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), value.clone()))
        .collect()
}

#[test]
fn map_lookup_by_key() {
    let Value::Map(map) = Value::map(
        Idx::from_raw(20),
        Idx::from_raw(21),
        vec![
            (Value::string("a"), Value::int(1)),
            (Value::string("b"), Value::int(2)),
        ],
    ) else {
        panic!("expected map");
    };

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&Value::string("b")), Some(&Value::int(2)));
    assert_eq!(map.get(&Value::string("z")), None);
}

#[test]
fn object_ancestry_walks_parents() {
    let root = ObjectValue {
        ty: Idx::from_raw(30),
        fields: Heap::new(fields(&[("title", Value::string("Home"))])),
        parent: None,
    };
    let child = ObjectValue {
        ty: Idx::from_raw(30),
        fields: Heap::new(fields(&[])),
        parent: None,
    }
    .with_parent(root);

    let titles: Vec<_> = child
        .ancestry()
        .filter_map(|obj| obj.field("title"))
        .collect();
    assert_eq!(titles, vec![&Value::string("Home")]);
    assert_eq!(child.ancestry().count(), 2);
}

#[test]
fn pair_accessors() {
    let Value::Pair(pair) = Value::pair(Idx::from_raw(40), Value::string("k"), Value::int(9)) else {
        panic!("expected pair");
    };
    assert_eq!(pair.key(), &Value::string("k"));
    assert_eq!(pair.value(), &Value::int(9));
}

#[test]
fn seq_len() {
    let Value::Seq(seq) = Value::seq(Idx::from_raw(50), vec![Value::Unit]) else {
        panic!("expected seq");
    };
    assert_eq!(seq.len(), 1);
    assert!(!seq.is_empty());
}
