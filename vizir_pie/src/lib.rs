// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive pie charts for `VizIR`.
//!
//! This crate is the geometry and interaction core of a touchable pie chart:
//! - **Partitioning** turns an ordered list of non-negative magnitudes into contiguous angular
//!   [`Slice`]s covering the circle ([`partition`], [`SlicePartitioner`]).
//! - **Hit testing** answers whether a point is on the pie, at which angle, and which slice owns
//!   that angle ([`hit_test`]).
//! - **Selection** folds a single pointer stream into a highlighted slice and a displayed value,
//!   reporting edge-triggered [`SelectionChange`]s for haptics ([`SelectionController`]).
//!
//! Angles are degrees measured clockwise from 12 o'clock in y-down scene coordinates.
//!
//! [`PieChart`] bundles these for one chart instance together with its [`PieChartConfig`], and
//! produces wedge outlines ([`SectorSpec`]) and header text for a renderer. Drawing, layout,
//! animation and haptics themselves are left to the host.

#![no_std]

extern crate alloc;

mod chart;
mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
#[cfg(test)]
mod scenario_tests;
mod sector;
mod selection;
mod slice;
mod style;

pub use chart::PieChart;
pub use config::{ChartForm, DROP_SHADOW_RADIUS, HIGHLIGHT_SCALE, PieChartConfig, Size};
pub use error::PieError;
pub use format::ValueFormat;
pub use geometry::ChartGeometry;
pub use sector::{SectorSpec, to_kurbo_angle};
pub use selection::{PointerEvent, SelectionChange, SelectionController, SelectionState};
pub use slice::{Datum, FULL_CIRCLE, NegativeMagnitudes, Slice, SlicePartitioner, partition};
pub use style::ChartStyle;
