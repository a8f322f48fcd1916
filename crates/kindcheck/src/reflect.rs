// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structural introspection trait.
//!
//! Rust has no runtime reflection, so every inspectable type describes its own
//! shape through [`Reflect`]. The library covers the standard types (see
//! `impls`), user structs get it from `#[derive(Reflect)]`:
//!
//! ```rust
//! use kindcheck::{Kind, Reflect};
//!
//! #[derive(Reflect)]
//! struct Header {
//!     magic: u32,
//!     flags: [u8; 4],
//! }
//!
//! let header = Header { magic: 0xCAFE, flags: [0; 4] };
//! assert_eq!(header.kind(), Kind::Struct);
//! assert_eq!(header.num_fields(), 2);
//! assert_eq!(header.field_name(1), Some("flags"));
//! assert_eq!(header.field(0).kind(), Kind::U32);
//! ```

use crate::kind::Kind;
use crate::value::Value;

/// Shape description of a value.
///
/// Only [`kind`](Reflect::kind) is required. Arrays override the element
/// accessors, structs and tuples override the field accessors; everything else
/// keeps the defaults (no children).
pub trait Reflect {
    /// Underlying shape of this value.
    fn kind(&self) -> Kind;

    /// Declared type name, for diagnostics only.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Number of elements (arrays and sequences).
    fn len(&self) -> usize {
        0
    }

    /// True when [`len`](Reflect::len) is zero.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or an invalid value when out of range.
    fn index(&self, _index: usize) -> Value<'_> {
        Value::invalid()
    }

    /// Number of fields (structs and tuples).
    fn num_fields(&self) -> usize {
        0
    }

    /// Field at `index` in declaration order, or an invalid value.
    fn field(&self, _index: usize) -> Value<'_> {
        Value::invalid()
    }

    /// Name of the field at `index`.
    fn field_name(&self, _index: usize) -> Option<&str> {
        None
    }
}
