// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Recursive layout validation.
//!
//! Walks a value depth-first, pre-order: struct and tuple fields left to right,
//! array elements according to [`ArrayPolicy`]. Numeric and raw pointer values
//! are leaves. The first failure stops the walk and is returned unchanged.

use crate::category::Category;
use crate::classify::classify;
use crate::error::{Error, Result};
use crate::policy::{ArrayPolicy, CheckPolicy, EntryPolicy};
use crate::reflect::Reflect;
use crate::value::Value;

/// Validator configured with a [`CheckPolicy`].
///
/// `Checker::default()` reproduces the behavior of [`type_check`]: an
/// unsupported entry value is accepted, arrays are sampled at element 0.
///
/// ```rust
/// use kindcheck::{CheckPolicy, Checker, Reflect};
///
/// #[derive(Reflect)]
/// struct Frame {
///     seq: u64,
///     samples: [f32; 8],
/// }
///
/// let frame = Frame { seq: 1, samples: [0.0; 8] };
/// assert!(Checker::new(CheckPolicy::strict()).check_value(&frame).is_ok());
///
/// // Top-level strings are only reported by the strict policy.
/// let text = String::from("hello");
/// assert!(Checker::default().check_value(&text).is_ok());
/// assert!(Checker::new(CheckPolicy::strict()).check_value(&text).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Checker {
    policy: CheckPolicy,
}

impl Checker {
    /// Create a checker with the given policy.
    pub const fn new(policy: CheckPolicy) -> Self {
        Self { policy }
    }

    /// Active policy.
    pub const fn policy(&self) -> CheckPolicy {
        self.policy
    }

    /// Validate a concrete value.
    pub fn check_value<T: Reflect>(&self, value: &T) -> Result<()> {
        self.check(Value::of(value))
    }

    /// Validate a value and everything reachable from it.
    pub fn check(&self, value: Value<'_>) -> Result<()> {
        let category = match classify(value) {
            Ok(category) => category,
            Err(err) => match self.policy.entry {
                EntryPolicy::Absorb => {
                    log::debug!("[kindcheck] entry value {value:?} accepted despite: {err}");
                    return Ok(());
                }
                EntryPolicy::Report => return Err(err),
            },
        };
        self.descend(value, category, 0)
    }

    fn visit(&self, value: Value<'_>, depth: usize) -> Result<()> {
        let category = classify(value)?;
        self.descend(value, category, depth)
    }

    fn descend(&self, value: Value<'_>, category: Category, depth: usize) -> Result<()> {
        log::trace!(
            "[kindcheck] depth={} {:?} kind={} category={}",
            depth,
            value,
            value.kind(),
            category
        );

        match category {
            Category::Numeric | Category::UnsafePointer => Ok(()),
            Category::Array => self.descend_array(value, depth),
            Category::Struct => self.descend_fields(value, depth),
            // classify() never succeeds with Invalid
            Category::Invalid => Err(Error::unsupported_value(&value)),
        }
    }

    fn descend_array(&self, value: Value<'_>, depth: usize) -> Result<()> {
        let len = value.len();
        if len == 0 {
            return Ok(());
        }

        let visited = match self.policy.arrays {
            ArrayPolicy::FirstElement => 1,
            ArrayPolicy::AllElements => len,
        };
        for index in 0..visited {
            if let Err(err) = self.visit(value.index(index), depth + 1) {
                log::debug!("[kindcheck] element {index} of {value:?} rejected: {err}");
                return Err(err);
            }
        }
        Ok(())
    }

    fn descend_fields(&self, value: Value<'_>, depth: usize) -> Result<()> {
        for index in 0..value.num_fields() {
            if let Err(err) = self.visit(value.field(index), depth + 1) {
                log::debug!(
                    "[kindcheck] field `{}` of {:?} rejected: {}",
                    value.field_name(index).unwrap_or("?"),
                    value,
                    err
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

/// Validate a value with the default policy.
pub fn check(value: Value<'_>) -> Result<()> {
    Checker::default().check(value)
}

/// Validate a concrete value with the default policy.
///
/// Only unsupported kinds found *inside* arrays and structs are reported; an
/// unsupported kind passed directly is accepted (see [`EntryPolicy::Absorb`]).
pub fn type_check<T: Reflect>(value: &T) -> Result<()> {
    check(Value::of(value))
}
