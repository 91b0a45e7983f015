// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partitioning magnitudes into pie slices.
//!
//! Angles are in degrees, measured clockwise from the 12 o'clock position. This is the
//! convention hit testing uses, so a slice list can be queried with
//! [`crate::hit_test::slice_at`] without any conversion.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

use crate::PieError;

/// A full turn in degrees.
pub const FULL_CIRCLE: f64 = 360.0;

/// One input element: a magnitude and an optional color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Datum {
    /// The non-negative weight of this data point.
    pub magnitude: f64,
    /// Slice color. `None` uses the chart's accent color.
    pub color: Option<Color>,
}

impl Datum {
    /// Creates a datum without a color.
    pub fn new(magnitude: f64) -> Self {
        Self {
            magnitude,
            color: None,
        }
    }

    /// Sets the slice color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl From<f64> for Datum {
    fn from(magnitude: f64) -> Self {
        Self::new(magnitude)
    }
}

impl From<(f64, Option<Color>)> for Datum {
    fn from((magnitude, color): (f64, Option<Color>)) -> Self {
        Self { magnitude, color }
    }
}

impl From<(f64, Color)> for Datum {
    fn from((magnitude, color): (f64, Color)) -> Self {
        Self::new(magnitude).with_color(color)
    }
}

/// A contiguous angular range representing one datum's share of the circle.
///
/// Slices are immutable; a new partition is computed whenever the data changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    start_angle: f64,
    end_angle: f64,
    value: f64,
    normalized_value: f64,
    color: Option<Color>,
}

impl Slice {
    /// Start angle in degrees.
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// End angle in degrees.
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Angular width in degrees.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// The datum's magnitude (after any clamping).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// `value / total`, in `[0, 1]`.
    pub fn normalized_value(&self) -> f64 {
        self.normalized_value
    }

    /// The datum's color, if it had one.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Returns `true` for zero-width slices (zero magnitude).
    pub fn is_degenerate(&self) -> bool {
        self.end_angle <= self.start_angle
    }

    /// Returns `true` if `angle` lies in `[start_angle, end_angle)`.
    pub fn contains(&self, angle: f64) -> bool {
        self.start_angle <= angle && angle < self.end_angle
    }
}

/// How the partitioner treats negative magnitudes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NegativeMagnitudes {
    /// Fail with [`PieError::NegativeMagnitude`].
    #[default]
    Reject,
    /// Treat the magnitude as zero, producing a zero-width slice.
    ClampToZero,
}

/// Converts an ordered sequence of [`Datum`]s into an ordered sequence of [`Slice`]s.
///
/// When the total magnitude is zero (including empty input) the partition is empty: there is
/// nothing to draw and nothing to select.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlicePartitioner {
    /// Negative input policy.
    pub negative: NegativeMagnitudes,
}

impl SlicePartitioner {
    /// Creates a partitioner that rejects negative magnitudes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the negative input policy.
    pub fn with_negative_policy(mut self, negative: NegativeMagnitudes) -> Self {
        self.negative = negative;
        self
    }

    /// Partitions the circle among `data`, preserving order.
    ///
    /// A positive magnitude whose share is below the resolution of its running angle (for
    /// example `1e-17` after `1.0`) rounds to a zero-width slice. It keeps its value and
    /// `normalized_value` but, like a zero magnitude, can never be hit.
    pub fn partition(&self, data: &[Datum]) -> Result<Vec<Slice>, PieError> {
        let mut magnitudes = Vec::with_capacity(data.len());
        for (index, datum) in data.iter().enumerate() {
            let value = datum.magnitude;
            if !value.is_finite() {
                return Err(PieError::NonFiniteMagnitude { index, value });
            }
            if value < 0.0 {
                match self.negative {
                    NegativeMagnitudes::Reject => {
                        return Err(PieError::NegativeMagnitude { index, value });
                    }
                    NegativeMagnitudes::ClampToZero => {
                        magnitudes.push(0.0);
                        continue;
                    }
                }
            }
            magnitudes.push(value);
        }

        // Normalize against the largest magnitude first so that the total stays finite even
        // when the raw sum would overflow.
        let max = magnitudes.iter().copied().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return Ok(Vec::new());
        }
        let total: f64 = magnitudes.iter().map(|m| m / max).sum();
        let last_positive = magnitudes
            .iter()
            .rposition(|&m| m > 0.0)
            .unwrap_or_default();

        let mut slices = Vec::with_capacity(data.len());
        let mut running = 0.0_f64;
        for (i, (datum, &value)) in data.iter().zip(&magnitudes).enumerate() {
            let normalized_value = (value / max) / total;
            let start_angle = running.min(FULL_CIRCLE);
            let end_angle = if i == last_positive {
                FULL_CIRCLE
            } else if value == 0.0 {
                start_angle
            } else {
                (start_angle + normalized_value * FULL_CIRCLE).min(FULL_CIRCLE)
            };
            running = end_angle;
            slices.push(Slice {
                start_angle,
                end_angle,
                value,
                normalized_value,
                color: datum.color,
            });
        }
        Ok(slices)
    }
}

/// Partitions `data` with the default policy (negative magnitudes are rejected).
pub fn partition(data: &[Datum]) -> Result<Vec<Slice>, PieError> {
    SlicePartitioner::new().partition(data)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;

    fn data(values: &[f64]) -> Vec<Datum> {
        values.iter().copied().map(Datum::from).collect()
    }

    #[test]
    fn quarters_split_the_circle_evenly() {
        let slices = partition(&data(&[25.0, 25.0, 25.0, 25.0])).unwrap();
        assert_eq!(slices.len(), 4, "one slice per datum");
        for (i, slice) in slices.iter().enumerate() {
            let start = 90.0 * i as f64;
            assert!((slice.start_angle() - start).abs() < 1e-9, "slice {i} start");
            assert!((slice.end_angle() - (start + 90.0)).abs() < 1e-9, "slice {i} end");
            assert!((slice.normalized_value() - 0.25).abs() < 1e-12, "slice {i} share");
        }
        assert_eq!(slices[3].end_angle(), FULL_CIRCLE, "last slice closes the circle");
    }

    #[test]
    fn single_value_covers_the_full_circle() {
        let slices = partition(&data(&[100.0])).unwrap();
        assert_eq!(slices.len(), 1, "one slice");
        assert_eq!(slices[0].start_angle(), 0.0, "starts at top");
        assert_eq!(slices[0].end_angle(), FULL_CIRCLE, "ends at top");
        assert_eq!(slices[0].normalized_value(), 1.0, "whole share");
        assert_eq!(slices[0].value(), 100.0, "keeps the raw value");
    }

    #[test]
    fn zero_total_yields_an_empty_partition() {
        assert!(partition(&[]).unwrap().is_empty(), "empty input");
        assert!(
            partition(&data(&[0.0, 0.0])).unwrap().is_empty(),
            "all-zero input"
        );
    }

    #[test]
    fn zero_magnitudes_become_zero_width_slices_in_place() {
        let slices = partition(&data(&[0.0, 1.0, 0.0, 1.0, 0.0])).unwrap();
        assert_eq!(slices.len(), 5, "order and count preserved");
        assert!(slices[0].is_degenerate(), "leading zero");
        assert_eq!(slices[0].start_angle(), 0.0, "leading zero sits at top");
        assert!(slices[2].is_degenerate(), "middle zero");
        assert_eq!(slices[2].start_angle(), 180.0, "middle zero sits at the boundary");
        assert_eq!(slices[3].end_angle(), FULL_CIRCLE, "last positive slice is clamped");
        assert_eq!(slices[4].start_angle(), FULL_CIRCLE, "trailing zero sits at 360");
        assert!(slices[4].is_degenerate(), "trailing zero has no width");
    }

    #[test]
    fn uneven_values_are_contiguous_and_sum_to_one() {
        let values = [8.0, 23.0, 54.0, 32.0, 12.0, 37.0, 7.0, 23.0, 43.0];
        let slices = partition(&data(&values)).unwrap();
        assert_eq!(slices[0].start_angle(), 0.0, "starts at top");
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle(), pair[1].start_angle(), "no gaps");
        }
        assert_eq!(slices[8].end_angle(), FULL_CIRCLE, "closes the circle");
        let sum: f64 = slices.iter().map(Slice::normalized_value).sum();
        assert!((sum - 1.0).abs() < 1e-9, "shares sum to one, got {sum}");
    }

    #[test]
    fn share_below_angle_resolution_rounds_to_zero_width() {
        let slices = partition(&data(&[1.0, 1e-17])).unwrap();
        assert_eq!(slices.len(), 2, "both data kept");
        assert_eq!(slices[0].end_angle(), FULL_CIRCLE, "first slice takes the circle");
        assert!(slices[1].is_degenerate(), "tiny share has no width");
        assert_eq!(slices[1].start_angle(), FULL_CIRCLE, "sits at the closing edge");
        assert!(slices[1].normalized_value() > 0.0, "share is still reported");
        assert_eq!(crate::hit_test::slice_at(FULL_CIRCLE, &slices), Some(0), "never hit");
    }

    #[test]
    fn huge_values_do_not_overflow_the_total() {
        let slices = partition(&data(&[f64::MAX, f64::MAX])).unwrap();
        assert!((slices[0].end_angle() - 180.0).abs() < 1e-9, "half each");
        assert!(slices.iter().all(|s| s.normalized_value().is_finite()), "no NaN/inf shares");
    }

    #[test]
    fn negative_magnitude_is_rejected_by_default() {
        let err = partition(&data(&[1.0, -2.0, 3.0])).unwrap_err();
        assert_eq!(
            err,
            PieError::NegativeMagnitude {
                index: 1,
                value: -2.0
            },
            "reports the offending index"
        );
    }

    #[test]
    fn negative_magnitude_can_be_clamped() {
        let slices = SlicePartitioner::new()
            .with_negative_policy(NegativeMagnitudes::ClampToZero)
            .partition(&data(&[1.0, -2.0, 1.0]))
            .unwrap();
        assert_eq!(slices.len(), 3, "clamped datum keeps its position");
        assert!(slices[1].is_degenerate(), "clamped datum has no width");
        assert_eq!(slices[1].value(), 0.0, "clamped value reads as zero");
    }

    #[test]
    fn non_finite_magnitude_is_rejected() {
        let err = partition(&data(&[1.0, f64::NAN])).unwrap_err();
        assert!(
            matches!(err, PieError::NonFiniteMagnitude { index: 1, .. }),
            "NaN rejected: {err:?}"
        );
        let err = partition(&data(&[f64::INFINITY])).unwrap_err();
        assert!(
            matches!(err, PieError::NonFiniteMagnitude { index: 0, .. }),
            "infinity rejected: {err:?}"
        );
    }

    #[test]
    fn colors_travel_with_their_slices() {
        let input = vec![
            Datum::new(1.0).with_color(css::TOMATO),
            Datum::new(2.0),
            Datum::from((3.0, css::GOLD)),
        ];
        let slices = partition(&input).unwrap();
        assert_eq!(slices[0].color(), Some(css::TOMATO), "first color");
        assert_eq!(slices[1].color(), None, "no color");
        assert_eq!(slices[2].color(), Some(css::GOLD), "third color");
    }
}
