// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Validation policy.
//!
//! Two switches shape how [`Checker`](crate::Checker) walks a value:
//!
//! - [`EntryPolicy`]: what happens when the value handed to the checker is
//!   itself of an unsupported kind. The default absorbs it (the value is
//!   accepted); only unsupported kinds met while descending are reported.
//! - [`ArrayPolicy`]: which elements of a non-empty array are visited. The
//!   default visits element 0 only, relying on arrays being homogeneous.
//!
//! [`CheckPolicy::strict`] flips both switches.

/// Handling of a classification failure on the entry value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryPolicy {
    /// Accept the entry value silently.
    #[default]
    Absorb,
    /// Report the failure like any nested one.
    Report,
}

/// Coverage of array elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArrayPolicy {
    /// Visit element 0 only.
    #[default]
    FirstElement,
    /// Visit every element, stopping at the first failure.
    AllElements,
}

/// Complete validation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CheckPolicy {
    pub entry: EntryPolicy,
    pub arrays: ArrayPolicy,
}

impl CheckPolicy {
    /// Report entry failures and visit every array element.
    pub const fn strict() -> Self {
        Self {
            entry: EntryPolicy::Report,
            arrays: ArrayPolicy::AllElements,
        }
    }

    /// Set entry handling.
    #[must_use]
    pub const fn with_entry(mut self, entry: EntryPolicy) -> Self {
        self.entry = entry;
        self
    }

    /// Set array coverage.
    #[must_use]
    pub const fn with_arrays(mut self, arrays: ArrayPolicy) -> Self {
        self.arrays = arrays;
        self
    }
}
