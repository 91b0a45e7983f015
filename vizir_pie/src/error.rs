// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the validating entry points.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors returned by the validating pie chart entry points.
///
/// Hit testing and selection never fail; these errors only surface from
/// [`crate::partition`], [`crate::ChartGeometry::validate`], [`crate::ValueFormat::parse`]
/// and [`crate::PieChart::try_set_data`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PieError {
    /// A magnitude was negative while the partitioner rejects negative input.
    #[error("magnitude at index {index} is negative ({value}); pie slices must be >= 0")]
    NegativeMagnitude {
        /// Position of the offending datum in the input sequence.
        index: usize,
        /// The offending magnitude.
        value: f64,
    },
    /// A magnitude was NaN or infinite.
    #[error("magnitude at index {index} is not finite ({value})")]
    NonFiniteMagnitude {
        /// Position of the offending datum in the input sequence.
        index: usize,
        /// The offending magnitude.
        value: f64,
    },
    /// The drawing area has no usable inscribed circle.
    #[error("chart geometry has a degenerate circle (radius {radius})")]
    DegenerateGeometry {
        /// The derived radius.
        radius: f64,
    },
    /// A value format specifier could not be parsed.
    #[error("invalid value format {spec:?}: {reason}")]
    InvalidValueFormat {
        /// The specifier as given.
        spec: String,
        /// What is wrong with it.
        reason: &'static str,
    },
}
