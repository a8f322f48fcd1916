// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Classification error.

use crate::kind::Kind;

/// Error raised when a value's kind falls outside the accepted categories.
///
/// There is a single variant on purpose: callers only distinguish acceptance
/// from rejection, the message tells a human which kind was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Absent value or unsupported kind, with a description of the offender.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),
}

impl Error {
    /// Rejection of a recognized but unsupported kind (quoted kind name).
    pub(crate) fn unsupported_kind(kind: Kind) -> Self {
        Self::UnsupportedType(format!("{:?}", kind.as_str()))
    }

    /// Rejection of an absent value, described by its debug representation.
    pub(crate) fn unsupported_value(repr: &dyn std::fmt::Debug) -> Self {
        Self::UnsupportedType(format!("{repr:?}"))
    }

    /// Human-readable description carried by the error.
    pub fn detail(&self) -> &str {
        match self {
            Self::UnsupportedType(desc) => desc,
        }
    }
}

/// Convenient alias for classification and validation results.
pub type Result<T> = core::result::Result<T, Error>;
