// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! One-shot, non-recursive classification.

use crate::category::Category;
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::reflect::Reflect;
use crate::value::Value;

/// Classify a value into its [`Category`].
///
/// An absent value fails with its debug representation; a recognized but
/// unsupported kind fails with the kind's quoted name. A failure stands for
/// [`Category::Invalid`], which is never returned as `Ok`.
///
/// ```rust
/// use kindcheck::{classify, Category, Value};
///
/// assert_eq!(classify(Value::of(&[1u8; 4])), Ok(Category::Array));
/// assert!(classify(Value::of(&vec![1u8])).is_err());
/// assert!(classify(Value::invalid()).is_err());
/// ```
pub fn classify(value: Value<'_>) -> Result<Category> {
    match value.kind() {
        Kind::Invalid => Err(Error::unsupported_value(&value)),
        kind => Category::try_from(kind),
    }
}

/// Classify a concrete value (see [`classify`]).
pub fn type_of<T: Reflect>(value: &T) -> Result<Category> {
    classify(Value::of(value))
}
