// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::unreadable_literal)] // Large test constants
#![allow(clippy::float_cmp)] // Test assertions with constants

//! Classifier properties: one-shot classification of every kind.

use kindcheck::dynamic::DynamicValue;
use kindcheck::{classify, type_of, Category, Complex128, Complex64, Value};
use std::collections::{BTreeMap, HashMap};
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

#[test]
fn test_numeric_scalars_classify_as_numeric() {
    assert_eq!(type_of(&true), Ok(Category::Numeric));
    assert_eq!(type_of(&i8::MIN), Ok(Category::Numeric));
    assert_eq!(type_of(&i16::MIN), Ok(Category::Numeric));
    assert_eq!(type_of(&i32::MIN), Ok(Category::Numeric));
    assert_eq!(type_of(&i64::MIN), Ok(Category::Numeric));
    assert_eq!(type_of(&i128::MIN), Ok(Category::Numeric));
    assert_eq!(type_of(&isize::MIN), Ok(Category::Numeric));
    assert_eq!(type_of(&u8::MAX), Ok(Category::Numeric));
    assert_eq!(type_of(&u16::MAX), Ok(Category::Numeric));
    assert_eq!(type_of(&u32::MAX), Ok(Category::Numeric));
    assert_eq!(type_of(&u64::MAX), Ok(Category::Numeric));
    assert_eq!(type_of(&u128::MAX), Ok(Category::Numeric));
    assert_eq!(type_of(&usize::MAX), Ok(Category::Numeric));
    assert_eq!(type_of(&1.5f32), Ok(Category::Numeric));
    assert_eq!(type_of(&1.5f64), Ok(Category::Numeric));
    assert_eq!(type_of(&Complex64::new(1.0, 2.0)), Ok(Category::Numeric));
    assert_eq!(type_of(&Complex128::new(1.0, 2.0)), Ok(Category::Numeric));
}

#[test]
fn test_numeric_classification_ignores_contents() {
    for _ in 0..64 {
        let x = fastrand::u64(..);
        assert_eq!(type_of(&x), Ok(Category::Numeric));
        let f = f64::from_bits(fastrand::u64(..));
        assert_eq!(type_of(&f), Ok(Category::Numeric));
    }
}

#[test]
fn test_raw_pointers_classify_as_unsafe_pointer() {
    let mut x = 42u32;
    let const_ptr: *const u32 = &x;
    assert_eq!(type_of(&const_ptr), Ok(Category::UnsafePointer));
    let mut_ptr: *mut u32 = &mut x;
    assert_eq!(type_of(&mut_ptr), Ok(Category::UnsafePointer));
    let untyped: *const () = std::ptr::null();
    assert_eq!(type_of(&untyped), Ok(Category::UnsafePointer));
    let non_null = NonNull::<u64>::dangling();
    assert_eq!(type_of(&non_null), Ok(Category::UnsafePointer));
    assert_eq!(
        type_of(&DynamicValue::UnsafePointer(0xdead_0000)),
        Ok(Category::UnsafePointer)
    );
}

#[test]
fn test_aggregates() {
    assert_eq!(type_of(&[0u8; 16]), Ok(Category::Array));
    assert_eq!(type_of(&[0u8; 0]), Ok(Category::Array));
    assert_eq!(type_of(&(1u8, 2u16)), Ok(Category::Struct));
    assert_eq!(type_of(&()), Ok(Category::Struct));
    assert_eq!(type_of(&std::marker::PhantomData::<u8>), Ok(Category::Struct));
}

#[test]
fn test_unsupported_kinds_fail_with_kind_name() {
    let cases: Vec<(kindcheck::Result<Category>, &str)> = vec![
        (type_of(&vec![1u8]), "\"slice\""),
        (type_of(&String::from("x")), "\"string\""),
        (type_of(&'x'), "\"char\""),
        (type_of(&HashMap::<u8, u8>::new()), "\"map\""),
        (type_of(&BTreeMap::<u8, u8>::new()), "\"map\""),
        (type_of(&Some(1u8)), "\"enum\""),
        (type_of(&Box::new(1u8)), "\"ptr\""),
        (type_of(&Rc::new(1u8)), "\"ptr\""),
        (type_of(&Arc::new(1u8)), "\"ptr\""),
        (type_of(&(test_unsupported_kinds_fail_with_kind_name as fn())), "\"func\""),
    ];

    for (result, expected) in cases {
        let err = result.expect_err("unsupported kind must fail");
        assert_eq!(err.detail(), expected);
    }
}

#[test]
fn test_typed_reference_is_unsupported() {
    let x = 3u8;
    let reference = &x;
    // The reference itself, not its target.
    let err = type_of(&reference).unwrap_err();
    assert_eq!(err.to_string(), "unsupported type: \"ptr\"");
}

#[test]
fn test_channels_and_interfaces() {
    let (tx, rx) = std::sync::mpsc::channel::<u8>();
    assert!(type_of(&tx).is_err());
    assert!(type_of(&rx).is_err());

    let boxed: Box<dyn std::any::Any> = Box::new(1u8);
    let err = classify(Value::of(&boxed)).unwrap_err();
    assert_eq!(err.detail(), "\"ptr\"");
}

#[test]
fn test_invalid_input_fails() {
    let err = classify(Value::invalid()).unwrap_err();
    assert_eq!(err.to_string(), "unsupported type: <invalid Value>");

    let missing: Option<&u32> = None;
    assert!(classify(Value::from(missing)).is_err());

    assert!(type_of(&DynamicValue::Null).is_err());
}

#[test]
fn test_classification_is_deterministic() {
    let data = [1.0f64, 2.0, 3.0];
    let first = type_of(&data);
    for _ in 0..8 {
        assert_eq!(type_of(&data), first);
    }
}
