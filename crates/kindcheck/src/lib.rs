// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # kindcheck - structural kind classification and layout validation
//!
//! Decides whether a value is made exclusively of numeric scalars, fixed-size
//! arrays, structs and raw pointers, the shapes that can be mapped or copied
//! in place byte for byte. Anything holding a slice, map, string, reference,
//! trait object, function pointer, channel or enum is rejected.
//!
//! ## Quick Start
//!
//! ```rust
//! use kindcheck::{type_check, type_of, Category, Reflect};
//!
//! #[derive(Reflect)]
//! struct Vertex {
//!     position: [f32; 3],
//!     color: u32,
//! }
//!
//! #[derive(Reflect)]
//! struct Named {
//!     id: u32,
//!     name: String,
//! }
//!
//! let vertex = Vertex { position: [0.0; 3], color: 0xFF00FF };
//! assert_eq!(type_of(&vertex), Ok(Category::Struct));
//! assert!(type_check(&vertex).is_ok());
//!
//! let named = Named { id: 1, name: "a".into() };
//! let err = type_check(&named).unwrap_err();
//! assert_eq!(err.to_string(), "unsupported type: \"string\"");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------+
//! |  type_check / Checker      recursive validator (policy)     |
//! +-------------------------------------------------------------+
//! |  type_of / classify        Kind -> Category, one level      |
//! +-------------------------------------------------------------+
//! |  Reflect / Value           structural visitor (derive)      |
//! +-------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Kind`] | Underlying shape of a value |
//! | [`Category`] | Accepted structural category (`Numeric`, `Array`, `Struct`, `UnsafePointer`) |
//! | [`Reflect`] | Shape introspection, derivable for structs and enums |
//! | [`Value`] | Borrowed, possibly absent, reflected value |
//! | [`Checker`] | Validator configured by a [`CheckPolicy`] |
//! | [`DynamicValue`](dynamic::DynamicValue) | Value whose kind is chosen at run time |
//!
//! ## Validation rules
//!
//! - An unsupported kind handed directly to [`type_check`] is accepted; only
//!   kinds met while descending are reported. [`EntryPolicy::Report`] changes
//!   that.
//! - Only element 0 of a non-empty array is visited; arrays are assumed to be
//!   homogeneous. [`ArrayPolicy::AllElements`] visits them all.
//! - Struct fields are visited in declaration order and the first failure wins.
//! - Pointers are never followed.

// Allow the derive macro to work inside this crate's tests
extern crate self as kindcheck;

/// Structural categories and the kind-to-category table.
pub mod category;
/// Recursive validator.
pub mod check;
/// One-shot classifier.
pub mod classify;
/// Fixed-layout complex scalars.
pub mod complex;
/// Type-erased values with a run-time kind.
pub mod dynamic;
/// Classification error.
pub mod error;
mod impls;
/// Runtime shape tags.
pub mod kind;
/// Validation policy.
pub mod policy;
/// Shape introspection trait.
pub mod reflect;
/// Borrowed reflected value.
pub mod value;

pub use category::Category;
pub use check::{check, type_check, Checker};
pub use classify::{classify, type_of};
pub use complex::{Complex128, Complex64};
pub use error::{Error, Result};
pub use kind::Kind;
pub use policy::{ArrayPolicy, CheckPolicy, EntryPolicy};
pub use reflect::Reflect;
pub use value::Value;

// Derive macro (for #[derive(kindcheck::Reflect)])
pub use kindcheck_codegen::Reflect;

/// kindcheck version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use crate::{type_check, type_of, Category, Kind, Reflect};

    #[derive(Reflect)]
    struct Inner {
        a: u16,
        b: [i8; 2],
    }

    #[derive(Reflect)]
    struct Outer {
        inner: Inner,
        scale: f32,
    }

    #[derive(Reflect)]
    struct Wrapper(u64, Inner);

    #[derive(Reflect)]
    struct Marker;

    #[derive(Reflect)]
    #[allow(dead_code)]
    enum Mode {
        Fast,
        Slow(u8),
    }

    #[test]
    fn test_derive_inside_crate() {
        let outer = Outer {
            inner: Inner { a: 1, b: [2, 3] },
            scale: 1.0,
        };
        assert_eq!(outer.kind(), Kind::Struct);
        assert_eq!(outer.field_name(0), Some("inner"));
        assert_eq!(outer.field(0).field(1).kind(), Kind::Array);
        assert_eq!(type_check(&outer), Ok(()));
    }

    #[test]
    fn test_tuple_and_unit_structs() {
        let wrapper = Wrapper(7, Inner { a: 0, b: [0; 2] });
        assert_eq!(wrapper.num_fields(), 2);
        assert_eq!(wrapper.field_name(1), Some("1"));
        assert_eq!(type_of(&wrapper), Ok(Category::Struct));
        assert_eq!(Marker.num_fields(), 0);
        assert_eq!(type_check(&Marker), Ok(()));
    }

    #[test]
    fn test_derived_enum_is_rejected_when_nested() {
        assert_eq!(Mode::Fast.kind(), Kind::Enum);
        assert!(type_of(&Mode::Slow(1)).is_err());
        assert!(type_check(&(1u8, Mode::Fast)).is_err());
    }

    #[test]
    fn test_version() {
        assert!(!crate::VERSION.is_empty());
    }
}
