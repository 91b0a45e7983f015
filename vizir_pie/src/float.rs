// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! Float math methods like `f64::atan2` and `f64::hypot` are not available in `core`.
//! We provide a small trait that dispatches to either `std` or `libm` depending on features.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn atan2(self, other: Self) -> Self;
    fn hypot(self, other: Self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }

    fn hypot(self, other: Self) -> Self {
        libm::hypot(self, other)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("vizir_pie requires either the `std` or `libm` feature");
