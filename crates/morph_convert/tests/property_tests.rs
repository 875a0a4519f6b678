//! Property-based tests for shape conversion.
//!
//! These tests generate random scalars and collections and verify:
//! 1. Scalars headed for scalar targets pass through unchanged
//! 2. Wrapping yields exactly one element, typed by the value
//! 3. Unwrapping yields the first element in iteration order
//! 4. Text is never reshaped under automatic direction
//! 5. Cache keys compare by token identity, not structure

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::sync::Arc;

use morph_convert::{ConversionDirection, ConversionRequest, ShapeConverter};
use morph_types::{CacheToken, Idx, PropertyInfo, ReflectionCacheKey, TypePool};
use morph_value::Value;
use proptest::prelude::*;

// -- Value Strategies --

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::int),
        any::<bool>().prop_map(Value::Bool),
        any::<u8>().prop_map(Value::Byte),
        any::<char>().prop_map(Value::Char),
        Just(Value::Unit),
    ]
}

fn scalar_target_strategy() -> impl Strategy<Value = Idx> {
    prop_oneof![
        Just(Idx::INT),
        Just(Idx::FLOAT),
        Just(Idx::BOOL),
        Just(Idx::STR),
        Just(Idx::CHAR),
        Just(Idx::BYTE),
    ]
}

fn converter() -> ShapeConverter<TypePool> {
    ShapeConverter::new(Arc::new(TypePool::new()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn scalar_into_scalar_is_identity(value in scalar_strategy(), target in scalar_target_strategy()) {
        let conv = converter();
        let out = conv.convert(ConversionRequest::new(Some(value.clone()), target));
        prop_assert_eq!(out, Some(value));
    }

    #[test]
    fn wrap_yields_single_element(value in scalar_strategy()) {
        let conv = converter();
        let pool = conv.capabilities();
        let target = pool.list(Idx::INT);

        let out = conv.convert(ConversionRequest::new(Some(value.clone()), target)).unwrap();
        prop_assert_eq!(out.runtime_type(), pool.array(value.runtime_type()));
        let items: Vec<Value> = out.elements().unwrap().collect();
        prop_assert_eq!(items, vec![value]);
    }

    #[test]
    fn unwrap_yields_first_element(items in prop::collection::vec(any::<i64>(), 0..16)) {
        let conv = converter();
        let list = conv.capabilities().list(Idx::INT);
        let value = Value::seq(list, items.iter().copied().map(Value::int).collect());

        let out = conv.convert(ConversionRequest::new(Some(value), Idx::INT));
        prop_assert_eq!(out, items.first().copied().map(Value::int));
    }

    #[test]
    fn text_is_never_reshaped(text in ".{0,24}") {
        let conv = converter();
        let pool = conv.capabilities();
        for target in [Idx::STR, pool.list(Idx::STR), pool.array(Idx::CHAR), pool.sequence(Idx::STR)] {
            let out = conv.convert(ConversionRequest::new(Some(Value::string(text.clone())), target));
            prop_assert_eq!(out, Some(Value::string(text.clone())));
        }
    }

    #[test]
    fn from_collection_never_produces_collection(items in prop::collection::vec(any::<i64>(), 1..8)) {
        let conv = converter();
        let list = conv.capabilities().list(Idx::INT);
        let value = Value::seq(list, items.into_iter().map(Value::int).collect());
        let request = ConversionRequest::new(Some(value), list)
            .with_direction(ConversionDirection::FromCollection);

        let out = conv.convert(request).unwrap();
        prop_assert!(out.elements().is_none());
    }

    #[test]
    fn key_equality_follows_token_identity(method in "[a-z_]{1,16}", name in "[a-z]{1,8}") {
        let first = Arc::new(PropertyInfo::new(name.clone(), Idx::STR, Idx::UNIT));
        let twin = Arc::new(PropertyInfo::new(name, Idx::STR, Idx::UNIT));

        let a = ReflectionCacheKey::new(method.as_str(), CacheToken::from_property(&first));
        let b = ReflectionCacheKey::new(method.as_str(), CacheToken::from_property(&first));
        let c = ReflectionCacheKey::new(method.as_str(), CacheToken::from_property(&twin));

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.hash_code(), b.hash_code());
        prop_assert_ne!(&a, &c);
    }
}
