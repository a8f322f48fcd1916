// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structural categories.
//!
//! | Kind | Category |
//! |------|----------|
//! | bool, every integer width, f32/f64, complex64/complex128 | [`Category::Numeric`] |
//! | fixed array | [`Category::Array`] |
//! | struct, tuple | [`Category::Struct`] |
//! | raw pointer | [`Category::UnsafePointer`] |
//! | anything else | rejected |

use crate::error::Error;
use crate::kind::Kind;
use std::fmt;

/// Closed set of structural categories a value may belong to.
///
/// `Invalid` is the zero value and never the successful classification of
/// real data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Invalid,
    /// Boolean, integer, floating-point and complex scalars.
    Numeric,
    /// Fixed-length homogeneous sequence.
    Array,
    /// Fixed aggregate of fields.
    Struct,
    /// Raw, untyped memory address.
    UnsafePointer,
}

impl Category {
    /// Stable identifier of the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::Numeric => "Numeric",
            Self::Array => "Array",
            Self::Struct => "Struct",
            Self::UnsafePointer => "UnsafePointer",
        }
    }

    /// Leaves need no further descent.
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Numeric | Self::UnsafePointer)
    }

    /// Aggregates contain nested values.
    pub const fn is_aggregate(self) -> bool {
        matches!(self, Self::Array | Self::Struct)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<Kind> for Category {
    type Error = Error;

    fn try_from(kind: Kind) -> Result<Self, Self::Error> {
        match kind {
            Kind::Bool
            | Kind::I8
            | Kind::I16
            | Kind::I32
            | Kind::I64
            | Kind::I128
            | Kind::Isize
            | Kind::U8
            | Kind::U16
            | Kind::U32
            | Kind::U64
            | Kind::U128
            | Kind::Usize
            | Kind::F32
            | Kind::F64
            | Kind::Complex64
            | Kind::Complex128 => Ok(Self::Numeric),
            Kind::Array => Ok(Self::Array),
            Kind::Struct | Kind::Tuple => Ok(Self::Struct),
            Kind::UnsafePointer => Ok(Self::UnsafePointer),
            Kind::Invalid
            | Kind::Char
            | Kind::String
            | Kind::Slice
            | Kind::Map
            | Kind::Enum
            | Kind::Func
            | Kind::Chan
            | Kind::Interface
            | Kind::Pointer => Err(Error::unsupported_kind(kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(Category::default(), Category::Invalid);
        assert!(!Category::Invalid.is_leaf());
        assert!(!Category::Invalid.is_aggregate());
    }

    #[test]
    fn test_numeric_kinds() {
        for kind in [
            Kind::Bool,
            Kind::I8,
            Kind::I16,
            Kind::I32,
            Kind::I64,
            Kind::I128,
            Kind::Isize,
            Kind::U8,
            Kind::U16,
            Kind::U32,
            Kind::U64,
            Kind::U128,
            Kind::Usize,
            Kind::F32,
            Kind::F64,
            Kind::Complex64,
            Kind::Complex128,
        ] {
            assert_eq!(Category::try_from(kind), Ok(Category::Numeric), "{kind}");
        }
    }

    #[test]
    fn test_aggregate_and_pointer_kinds() {
        assert_eq!(Category::try_from(Kind::Array), Ok(Category::Array));
        assert_eq!(Category::try_from(Kind::Struct), Ok(Category::Struct));
        assert_eq!(Category::try_from(Kind::Tuple), Ok(Category::Struct));
        assert_eq!(
            Category::try_from(Kind::UnsafePointer),
            Ok(Category::UnsafePointer)
        );
    }

    #[test]
    fn test_rejected_kinds_name_the_kind() {
        for kind in [
            Kind::Invalid,
            Kind::Char,
            Kind::String,
            Kind::Slice,
            Kind::Map,
            Kind::Enum,
            Kind::Func,
            Kind::Chan,
            Kind::Interface,
            Kind::Pointer,
        ] {
            let err = Category::try_from(kind).unwrap_err();
            assert!(err.to_string().contains(kind.as_str()), "{err}");
        }
    }

    #[test]
    fn test_stable_names() {
        assert_eq!(Category::Numeric.to_string(), "Numeric");
        assert_eq!(Category::UnsafePointer.to_string(), "UnsafePointer");
    }
}
