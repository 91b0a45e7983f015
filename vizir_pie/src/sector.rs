// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (wedge) outlines for drawing slices.
//!
//! Slices are described in degrees clockwise from 12 o'clock. `kurbo` measures radians from the
//! positive x axis toward positive y, which is clockwise on a y-down screen, so the conversion is
//! a unit change plus a quarter-turn offset.

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{BezPath, Circle, Point, Shape};

/// Converts a slice angle (degrees clockwise from top) to a `kurbo` angle in radians.
pub fn to_kurbo_angle(degrees: f64) -> f64 {
    degrees * (PI / 180.0) - FRAC_PI_2
}

/// A pie or donut wedge in scene coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorSpec {
    /// Center in scene coordinates.
    pub center: Point,
    /// Inner radius (0 for a pie wedge).
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle in degrees clockwise from top.
    pub start_angle: f64,
    /// End angle in degrees clockwise from top.
    pub end_angle: f64,
    /// Curve flattening tolerance when converting to a `BezPath`.
    pub tolerance: f64,
}

impl SectorSpec {
    /// Creates a pie wedge.
    pub fn new(center: Point, outer_radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            inner_radius: 0.0,
            outer_radius,
            start_angle,
            end_angle,
            tolerance: 0.1,
        }
    }

    /// Sets the inner radius, turning the wedge into a donut segment.
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    /// Sets the curve flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Scales both radii about the center.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.inner_radius *= factor;
        self.outer_radius *= factor;
        self
    }

    /// Outline of the wedge.
    pub fn path(&self) -> BezPath {
        let circle = Circle::new(self.center, self.outer_radius);
        let sweep = (self.end_angle - self.start_angle) * (PI / 180.0);
        circle
            .segment(self.inner_radius, to_kurbo_angle(self.start_angle), sweep)
            .to_path(self.tolerance)
    }
}
