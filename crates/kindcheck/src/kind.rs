// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime shape tags.
//!
//! A [`Kind`] describes the underlying shape of a value (integer, fixed array,
//! struct, raw pointer, growable sequence, ...) as opposed to its declared type
//! name. Two different structs share [`Kind::Struct`]; `Vec<u8>` and `&[u8]`
//! share nothing but are both rejected later by the classifier.

use std::fmt;

/// Underlying shape of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Absent value (nothing to inspect).
    #[default]
    Invalid,

    // Scalars
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Complex64,
    Complex128,
    Char,

    // Fixed-layout aggregates
    /// Fixed-length array `[T; N]`.
    Array,
    /// Struct with named, positional or no fields.
    Struct,
    /// Anonymous tuple `(A, B, ...)`.
    Tuple,

    // Pointers
    /// Raw address (`*const T`, `*mut T`, `NonNull<T>`).
    UnsafePointer,
    /// Typed or managed reference (`&T`, `Box<T>`, `Arc<T>`, ...).
    Pointer,

    // Variable-size or opaque
    String,
    Slice,
    Map,
    Enum,
    Func,
    Chan,
    Interface,
}

impl Kind {
    /// Stable lowercase name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Char => "char",
            Self::Array => "array",
            Self::Struct => "struct",
            Self::Tuple => "tuple",
            Self::UnsafePointer => "unsafe_pointer",
            Self::Pointer => "ptr",
            Self::String => "string",
            Self::Slice => "slice",
            Self::Map => "map",
            Self::Enum => "enum",
            Self::Func => "func",
            Self::Chan => "chan",
            Self::Interface => "interface",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
