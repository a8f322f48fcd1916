// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Borrowed handle over an inspectable value.

use crate::kind::Kind;
use crate::reflect::Reflect;
use std::fmt;

/// Type-erased, possibly absent, view of a [`Reflect`] value.
///
/// An absent value is what inspecting "nothing" yields: a missing field, an
/// out-of-range element, or an explicit `None`. Its kind is [`Kind::Invalid`].
#[derive(Clone, Copy)]
pub struct Value<'a> {
    inner: Option<&'a dyn Reflect>,
}

impl<'a> Value<'a> {
    /// View over a concrete value.
    pub fn of<T: Reflect>(value: &'a T) -> Self {
        Self { inner: Some(value) }
    }

    /// View over a trait object.
    pub fn from_dyn(value: &'a dyn Reflect) -> Self {
        Self { inner: Some(value) }
    }

    /// The absent value.
    pub const fn invalid() -> Self {
        Self { inner: None }
    }

    /// False for the absent value.
    pub fn is_valid(&self) -> bool {
        self.inner.is_some()
    }

    /// Shape of the value ([`Kind::Invalid`] when absent).
    pub fn kind(&self) -> Kind {
        self.inner.map_or(Kind::Invalid, Reflect::kind)
    }

    /// Declared type name, if the value is present.
    pub fn type_name(&self) -> Option<&'static str> {
        self.inner.map(Reflect::type_name)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.map_or(0, Reflect::len)
    }

    /// True when there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`.
    pub fn index(&self, index: usize) -> Value<'a> {
        match self.inner {
            Some(value) => value.index(index),
            None => Value::invalid(),
        }
    }

    /// Number of fields.
    pub fn num_fields(&self) -> usize {
        self.inner.map_or(0, Reflect::num_fields)
    }

    /// Field at `index` in declaration order.
    pub fn field(&self, index: usize) -> Value<'a> {
        match self.inner {
            Some(value) => value.field(index),
            None => Value::invalid(),
        }
    }

    /// Name of the field at `index`.
    pub fn field_name(&self, index: usize) -> Option<&'a str> {
        self.inner.and_then(|value| value.field_name(index))
    }
}

impl Default for Value<'_> {
    fn default() -> Self {
        Self::invalid()
    }
}

impl<'a, T: Reflect> From<&'a T> for Value<'a> {
    fn from(value: &'a T) -> Self {
        Self::of(value)
    }
}

impl<'a, T: Reflect> From<Option<&'a T>> for Value<'a> {
    fn from(value: Option<&'a T>) -> Self {
        value.map_or_else(Self::invalid, Self::of)
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner {
            None => f.write_str("<invalid Value>"),
            Some(value) => write!(f, "Value({})", value.type_name()),
        }
    }
}
