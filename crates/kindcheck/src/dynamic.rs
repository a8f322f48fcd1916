// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type-erased values whose kind is decided at run time.
//!
//! A [`DynamicValue`] reports the kind of the variant it currently holds, the
//! way an interface value exposes its dynamic type. Array elements are not
//! required to share a variant, which makes it possible to describe data that
//! no statically typed Rust array could hold.
//!
//! ```rust
//! use kindcheck::{dynamic::DynamicValue, Kind, Reflect};
//!
//! let point = DynamicValue::struct_of([
//!     ("x", DynamicValue::F64(1.0)),
//!     ("y", DynamicValue::F64(2.0)),
//! ]);
//! assert_eq!(point.kind(), Kind::Struct);
//! assert_eq!(point.field_name(1), Some("y"));
//! assert_eq!(point.field(0).kind(), Kind::F64);
//! ```

use crate::complex::{Complex128, Complex64};
use crate::kind::Kind;
use crate::reflect::Reflect;
use crate::value::Value;
use std::collections::BTreeMap;

/// A dynamic value holding any supported shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DynamicValue {
    /// Absent value (kind [`Kind::Invalid`]).
    #[default]
    Null,

    // Scalars
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Complex64(Complex64),
    Complex128(Complex128),
    Char(char),
    String(String),

    // Composites
    /// Fixed-length array; elements may hold different variants.
    Array(Vec<DynamicValue>),
    /// Variable-length sequence.
    Sequence(Vec<DynamicValue>),
    /// Struct fields in declaration order.
    Struct(Vec<(String, DynamicValue)>),
    Map(BTreeMap<String, DynamicValue>),
    Enum(i64, String), // (value, variant_name)

    /// Raw memory address.
    UnsafePointer(usize),
}

impl DynamicValue {
    /// Build a struct from `(name, value)` pairs, keeping their order.
    pub fn struct_of<N, I>(fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, DynamicValue)>,
    {
        Self::Struct(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    /// Build a fixed array from values.
    pub fn array_of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = DynamicValue>,
    {
        Self::Array(elements.into_iter().collect())
    }
}

impl Reflect for DynamicValue {
    fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Invalid,
            Self::Bool(_) => Kind::Bool,
            Self::U8(_) => Kind::U8,
            Self::U16(_) => Kind::U16,
            Self::U32(_) => Kind::U32,
            Self::U64(_) => Kind::U64,
            Self::I8(_) => Kind::I8,
            Self::I16(_) => Kind::I16,
            Self::I32(_) => Kind::I32,
            Self::I64(_) => Kind::I64,
            Self::F32(_) => Kind::F32,
            Self::F64(_) => Kind::F64,
            Self::Complex64(_) => Kind::Complex64,
            Self::Complex128(_) => Kind::Complex128,
            Self::Char(_) => Kind::Char,
            Self::String(_) => Kind::String,
            Self::Array(_) => Kind::Array,
            Self::Sequence(_) => Kind::Slice,
            Self::Struct(_) => Kind::Struct,
            Self::Map(_) => Kind::Map,
            Self::Enum(..) => Kind::Enum,
            Self::UnsafePointer(_) => Kind::UnsafePointer,
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Array(v) | Self::Sequence(v) => v.len(),
            Self::Map(m) => m.len(),
            _ => 0,
        }
    }

    fn index(&self, index: usize) -> Value<'_> {
        match self {
            Self::Array(v) | Self::Sequence(v) => {
                v.get(index).map_or_else(Value::invalid, Value::of)
            }
            _ => Value::invalid(),
        }
    }

    fn num_fields(&self) -> usize {
        match self {
            Self::Struct(fields) => fields.len(),
            _ => 0,
        }
    }

    fn field(&self, index: usize) -> Value<'_> {
        match self {
            Self::Struct(fields) => fields
                .get(index)
                .map_or_else(Value::invalid, |(_, v)| Value::of(v)),
            _ => Value::invalid(),
        }
    }

    fn field_name(&self, index: usize) -> Option<&str> {
        match self {
            Self::Struct(fields) => fields.get(index).map(|(n, _)| n.as_str()),
            _ => None,
        }
    }
}

// Conversion traits
macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for DynamicValue {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    Complex64 => Complex64,
    Complex128 => Complex128,
    char => Char,
    String => String,
}

impl From<&str> for DynamicValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<T: Into<DynamicValue>> From<Vec<T>> for DynamicValue {
    fn from(v: Vec<T>) -> Self {
        Self::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<DynamicValue>, const N: usize> From<[T; N]> for DynamicValue {
    fn from(v: [T; N]) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}
