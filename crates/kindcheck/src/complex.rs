// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Complex scalars with a fixed `#[repr(C)]` layout.

use crate::kind::Kind;
use crate::reflect::Reflect;

/// Complex number made of two `f32` (8 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Complex64 {
    pub re: f32,
    pub im: f32,
}

/// Complex number made of two `f64` (16 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Complex128 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    /// Create from real and imaginary parts.
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

impl Complex128 {
    /// Create from real and imaginary parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl From<(f32, f32)> for Complex64 {
    fn from((re, im): (f32, f32)) -> Self {
        Self::new(re, im)
    }
}

impl From<(f64, f64)> for Complex128 {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl From<Complex64> for Complex128 {
    fn from(c: Complex64) -> Self {
        Self::new(f64::from(c.re), f64::from(c.im))
    }
}

// Scalars: the two halves are never visited as fields.
impl Reflect for Complex64 {
    fn kind(&self) -> Kind {
        Kind::Complex64
    }
}

impl Reflect for Complex128 {
    fn kind(&self) -> Kind {
        Kind::Complex128
    }
}
