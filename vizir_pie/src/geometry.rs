// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The circular drawing area of a pie chart.

use kurbo::{Point, Rect};

use crate::PieError;

/// The pie's drawing area: a bounding rectangle and its inscribed circle.
///
/// The host re-supplies this whenever the chart is resized.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartGeometry {
    /// Bounding rectangle in scene coordinates (y grows downward).
    pub rect: Rect,
}

impl ChartGeometry {
    /// Creates a geometry from a bounding rectangle.
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Center of the inscribed circle.
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Radius of the inscribed circle, `min(width, height) / 2`.
    ///
    /// Negative-size rectangles are measured by their absolute extents.
    pub fn radius(&self) -> f64 {
        let rect = self.rect.abs();
        0.5 * rect.width().min(rect.height())
    }

    /// Returns `true` if the inscribed circle cannot be hit.
    pub fn is_degenerate(&self) -> bool {
        let r = self.radius();
        !(r.is_finite() && r > 0.0) || !self.center().is_finite()
    }

    /// Checks that the inscribed circle is usable.
    pub fn validate(&self) -> Result<(), PieError> {
        if self.is_degenerate() {
            return Err(PieError::DegenerateGeometry {
                radius: self.radius(),
            });
        }
        Ok(())
    }
}

impl From<Rect> for ChartGeometry {
    fn from(rect: Rect) -> Self {
        Self::new(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_is_inscribed_in_the_shorter_side() {
        let g = ChartGeometry::new(Rect::new(10.0, 20.0, 210.0, 120.0));
        assert_eq!(g.center(), Point::new(110.0, 70.0), "rect center");
        assert_eq!(g.radius(), 50.0, "half the height");
        assert!(g.validate().is_ok(), "usable circle");
    }

    #[test]
    fn zero_sized_rect_is_degenerate() {
        let g = ChartGeometry::new(Rect::new(5.0, 5.0, 5.0, 50.0));
        assert!(g.is_degenerate(), "zero width");
        assert_eq!(
            g.validate(),
            Err(PieError::DegenerateGeometry { radius: 0.0 }),
            "reports the radius"
        );
    }
}
